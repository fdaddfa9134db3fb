//! Provider-neutral request and response types for a single model call.

use crate::{InlineImage, OutputSchema};
use derive_getters::Getters;
use serde::Serialize;

/// What shape the model's answer must take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "type", content = "schema", rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Free text (or whatever the model's default modality is).
    #[default]
    Text,
    /// A JSON object conforming to the schema.
    Json(&'static OutputSchema),
}

/// Aspect ratio requested from an image model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum AspectRatio {
    /// 1:1
    #[strum(serialize = "1:1")]
    #[serde(rename = "1:1")]
    Square,
    /// 16:9
    #[strum(serialize = "16:9")]
    #[serde(rename = "16:9")]
    Landscape,
    /// 9:16
    #[strum(serialize = "9:16")]
    #[serde(rename = "9:16")]
    Portrait,
}

/// One call to a generative model.
#[derive(Debug, Clone, PartialEq, Serialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// Model identifier, e.g. `gemini-2.5-flash`
    model: String,
    /// Prompt text sent as the single user turn
    prompt: String,
    /// Persona and constraints
    #[builder(default)]
    system_instruction: Option<String>,
    /// Declared output contract
    #[builder(default)]
    response_format: ResponseFormat,
    /// Requested image shape, for image models
    #[builder(default)]
    aspect_ratio: Option<AspectRatio>,
}

impl GenerateRequest {
    /// Creates a builder for `GenerateRequest`.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// One piece of model output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),
    /// Generated image output.
    Image(InlineImage),
}

/// Token accounting reported by the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Getters)]
pub struct TokenUsage {
    /// Prompt tokens
    input_tokens: u64,
    /// Generated tokens
    output_tokens: u64,
    /// Sum reported by the service
    total_tokens: u64,
}

impl TokenUsage {
    /// Create a usage record.
    pub fn new(input_tokens: u64, output_tokens: u64, total_tokens: u64) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens,
        }
    }
}

/// The parts a model returned, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Getters)]
pub struct GenerateResponse {
    /// Ordered output parts
    outputs: Vec<Output>,
    /// Token usage, when reported
    usage: Option<TokenUsage>,
}

impl GenerateResponse {
    /// Create a response from its parts.
    pub fn new(outputs: Vec<Output>, usage: Option<TokenUsage>) -> Self {
        Self { outputs, usage }
    }

    /// All text parts joined together, the way the service's own SDKs
    /// present `response.text`.
    pub fn text(&self) -> String {
        self.outputs
            .iter()
            .filter_map(|o| match o {
                Output::Text(t) => Some(t.as_str()),
                Output::Image(_) => None,
            })
            .collect()
    }

    /// The first inline image, if any part carries one.
    pub fn first_image(&self) -> Option<&InlineImage> {
        self.outputs.iter().find_map(|o| match o {
            Output::Image(image) => Some(image),
            Output::Text(_) => None,
        })
    }
}
