//! Decoding model output into typed responses.

use marquee_core::*;
use serde_json::Value;

fn assert_schema_matches<R: StructuredResponse>() {
    let schema = R::DOMAIN.schema();
    let Ok(Value::Object(object)) = serde_json::to_value(R::default()) else {
        panic!("{} did not serialize to an object", schema.name);
    };

    assert_eq!(object.len(), schema.fields.len(), "{}", schema.name);
    for (key, value) in &object {
        let field = schema
            .field(key)
            .unwrap_or_else(|| panic!("{} reads undeclared field {}", schema.name, key));
        assert!(field.required, "{}.{} is not required", schema.name, key);
        match field.kind {
            FieldKind::String => assert!(value.is_string(), "{}.{}", schema.name, key),
            FieldKind::StringArray => assert!(value.is_array(), "{}.{}", schema.name, key),
        }
    }
}

fn assert_all_empty<R: StructuredResponse>(response: &R) {
    let Ok(Value::Object(object)) = serde_json::to_value(response) else {
        panic!("response did not serialize to an object");
    };
    for (key, value) in object {
        match value {
            Value::String(s) => assert!(s.is_empty(), "{} = {:?}", key, s),
            Value::Array(items) => assert!(items.is_empty(), "{} = {:?}", key, items),
            other => panic!("{} has unexpected type {:?}", key, other),
        }
    }
}

#[test]
fn test_schemas_cover_every_decoded_field() {
    assert_schema_matches::<MenuResponse>();
    assert_schema_matches::<SeasonalDishSuggestion>();
    assert_schema_matches::<AppointmentResponse>();
    assert_schema_matches::<EventResponse>();
}

#[test]
fn test_non_json_decodes_to_empty() {
    for raw in ["", "   ", "not json at all", "{", "null", "42", "[\"a\"]", "```json\n```"] {
        assert_all_empty(&decode_lenient::<MenuResponse>(raw));
        assert_all_empty(&decode_lenient::<SeasonalDishSuggestion>(raw));
        assert_all_empty(&decode_lenient::<AppointmentResponse>(raw));
        assert_all_empty(&decode_lenient::<EventResponse>(raw));
    }
}

#[test]
fn test_menu_scenario_passes_values_through() {
    let raw = r#"{"menuDescription":"x","socialMediaCaption":"y","imageSuggestion":"z","nutritionalInfo":"n","promotionalOffer":"p"}"#;
    let menu: MenuResponse = decode_lenient(raw);

    assert_eq!(menu.menu_description(), "x");
    assert_eq!(menu.social_media_caption(), "y");
    assert_eq!(menu.image_suggestion(), "z");
    assert_eq!(menu.nutritional_info(), "n");
    assert_eq!(menu.promotional_offer(), "p");
    assert_eq!(menu.image_prompt(), "z");

    let strict: MenuResponse = decode_strict(raw).expect("conformant output decodes strictly");
    assert_eq!(strict, menu);
}

#[test]
fn test_event_with_empty_lists() -> Result<(), Box<dyn std::error::Error>> {
    let raw = r#"{
        "socialMediaCaption": "Don't miss it!",
        "bannerText": "JAZZ NIGHT",
        "imageSuggestion": "A saxophone under neon lights",
        "hashtags": [],
        "engagementQuestions": [],
        "videoScriptConcept": "Slow pan across the stage."
    }"#;

    let lenient: EventResponse = decode_lenient(raw);
    assert!(lenient.hashtags().is_empty());
    assert!(lenient.engagement_questions().is_empty());
    assert_eq!(lenient.banner_text(), "JAZZ NIGHT");

    let strict: EventResponse = decode(raw, DecodePolicy::Strict)?;
    assert_eq!(strict, lenient);
    Ok(())
}

#[test]
fn test_event_lists_keep_order() {
    let event: EventResponse = decode_lenient(
        r##"{"hashtags":["#jazz","#live",7,"#friday"],"engagementQuestions":["Who's coming?"]}"##,
    );
    assert_eq!(event.hashtags(), &vec!["#jazz", "#live", "#friday"]);
    assert_eq!(event.engagement_questions(), &vec!["Who's coming?"]);
    assert!(event.social_media_caption().is_empty());
}

#[test]
fn test_extra_keys_are_ignored() {
    let seasonal: SeasonalDishSuggestion = decode_lenient(
        r#"{"dishName":"Gazpacho","ingredients":"tomato","description":"Cold soup for summer","calories":120}"#,
    );
    assert_eq!(seasonal.dish_name(), "Gazpacho");
}

#[test]
fn test_strict_policy_surfaces_failures() {
    assert!(decode::<AppointmentResponse>("not json", DecodePolicy::Strict).is_err());
    assert!(decode::<EventResponse>(r##"{"hashtags":"#one"}"##, DecodePolicy::Strict).is_err());
    assert!(decode::<AppointmentResponse>("not json", DecodePolicy::Lenient).is_ok());
}
