//! Output schema conversion to Gemini's OpenAPI-style schema dialect.

use marquee_core::{FieldKind, FieldSpec, OutputSchema};
use serde_json::{Map, Value, json};

/// Render an output schema the way `responseSchema` expects it.
///
/// `propertyOrdering` keeps the model emitting fields in declaration order.
pub fn to_gemini_schema(schema: &OutputSchema) -> Value {
    let properties: Map<String, Value> = schema
        .fields
        .iter()
        .map(|field| (field.name.to_string(), field_schema(field)))
        .collect();

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": schema.required_fields().collect::<Vec<_>>(),
        "propertyOrdering": schema.field_names().collect::<Vec<_>>(),
    })
}

fn field_schema(field: &FieldSpec) -> Value {
    match field.kind {
        FieldKind::String => json!({
            "type": "STRING",
            "description": field.description,
        }),
        FieldKind::StringArray => json!({
            "type": "ARRAY",
            "items": { "type": "STRING" },
            "description": field.description,
        }),
    }
}
