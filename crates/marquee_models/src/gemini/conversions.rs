//! Type conversions between Marquee and Gemini wire formats.

use crate::gemini::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig, Part,
    to_gemini_schema,
};
use marquee_core::{GenerateRequest, GenerateResponse, InlineImage, Output, ResponseFormat, TokenUsage};
use marquee_error::{GeminiError, GeminiErrorKind};
use tracing::{debug, warn};

/// Converts a Marquee request to a `generateContent` body.
pub fn to_gemini_request(req: &GenerateRequest) -> Result<GenerateContentRequest, GeminiError> {
    let user_turn = Content {
        role: Some("user".to_string()),
        parts: vec![Part::text(req.prompt().clone())],
    };

    let system_instruction = req.system_instruction().as_ref().map(|text| Content {
        role: None,
        parts: vec![Part::text(text.clone())],
    });

    let mut config = GenerationConfig::default();
    if let ResponseFormat::Json(schema) = req.response_format() {
        config.response_mime_type = Some("application/json".to_string());
        config.response_schema = Some(to_gemini_schema(schema));
    }
    if let Some(ratio) = req.aspect_ratio() {
        config.image_config = Some(ImageConfig {
            aspect_ratio: ratio.to_string(),
        });
    }
    let generation_config = (config != GenerationConfig::default()).then_some(config);

    GenerateContentRequest::builder()
        .contents(vec![user_turn])
        .system_instruction(system_instruction)
        .generation_config(generation_config)
        .build()
        .map_err(|e| {
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Failed to build request: {}",
                e
            )))
        })
}

/// Converts a `generateContent` response into Marquee outputs.
///
/// Only the first candidate is read. Reasoning parts are skipped, and inline
/// data without a MIME type or payload is ignored.
pub fn from_gemini_response(
    response: GenerateContentResponse,
) -> Result<GenerateResponse, GeminiError> {
    if response.candidates.is_empty() {
        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.clone())
        {
            warn!(reason = %reason, "Prompt blocked");
            return Err(GeminiError::new(GeminiErrorKind::PromptBlocked(reason)));
        }
    }

    let usage = response.usage_metadata.as_ref().map(|u| {
        TokenUsage::new(
            u.prompt_token_count.unwrap_or_default(),
            u.candidates_token_count.unwrap_or_default(),
            u.total_token_count.unwrap_or_default(),
        )
    });

    let candidate = response.candidates.into_iter().next();
    if let Some(reason) = candidate.as_ref().and_then(|c| c.finish_reason.as_deref()) {
        debug!(finish_reason = reason, "Candidate finished");
    }

    let outputs = candidate
        .and_then(|c| c.content)
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter(|part| part.thought != Some(true))
        .filter_map(|part| match (part.inline_data, part.text) {
            (Some(blob), _) => InlineImage::new(blob.mime_type, blob.data).map(Output::Image),
            (None, Some(text)) => Some(Output::Text(text)),
            (None, None) => None,
        })
        .collect();

    Ok(GenerateResponse::new(outputs, usage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::{AspectRatio, MENU_SCHEMA};

    #[test]
    fn structured_request_declares_json_schema() {
        let req = GenerateRequest::builder()
            .model("gemini-2.5-flash")
            .prompt("Create menu content for a restaurant dish.")
            .system_instruction(Some("You are a chef.".to_string()))
            .response_format(ResponseFormat::Json(&MENU_SCHEMA))
            .build()
            .unwrap();
        let body = serde_json::to_value(to_gemini_request(&req).unwrap()).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(
            body["contents"][0]["parts"][0]["text"],
            "Create menu content for a restaurant dish."
        );
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "You are a chef.");
        assert!(body["systemInstruction"].get("role").is_none());
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
        assert!(body["generationConfig"].get("imageConfig").is_none());
    }

    #[test]
    fn image_request_sends_only_text_and_ratio() {
        let req = GenerateRequest::builder()
            .model("gemini-2.5-flash-image")
            .prompt("A bowl of ramen, overhead shot")
            .aspect_ratio(Some(AspectRatio::Square))
            .build()
            .unwrap();
        let body = serde_json::to_value(to_gemini_request(&req).unwrap()).unwrap();

        assert!(body.get("systemInstruction").is_none());
        assert_eq!(body["generationConfig"]["imageConfig"]["aspectRatio"], "1:1");
        assert!(body["generationConfig"].get("responseSchema").is_none());
    }

    #[test]
    fn reads_text_and_image_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {"role": "model", "parts": [
                        {"text": "thinking...", "thought": true},
                        {"text": "Here you go"},
                        {"inlineData": {"mimeType": "image/png", "data": "iVBORw0KGgo="}}
                    ]},
                    "finishReason": "STOP"
                }],
                "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 30, "totalTokenCount": 42}
            }"#,
        )
        .unwrap();
        let converted = from_gemini_response(response).unwrap();

        assert_eq!(converted.text(), "Here you go");
        let image = converted.first_image().unwrap();
        assert_eq!(image.mime_type(), "image/png");
        assert_eq!(converted.usage().as_ref().map(|u| *u.total_tokens()), Some(42));
    }

    #[test]
    fn blocked_prompt_is_an_error() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap();
        let err = from_gemini_response(response).unwrap_err();
        assert_eq!(err.kind, GeminiErrorKind::PromptBlocked("SAFETY".to_string()));
    }

    #[test]
    fn no_candidates_is_empty_not_error() {
        let converted = from_gemini_response(GenerateContentResponse::default()).unwrap();
        assert!(converted.outputs().is_empty());
        assert_eq!(converted.text(), "");
    }
}
