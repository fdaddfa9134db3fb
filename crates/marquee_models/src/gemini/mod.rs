//! Google Gemini `generateContent` REST integration.

mod client;
mod config;
mod conversions;
mod dto;
mod schema;

pub use client::GeminiClient;
pub use config::{
    DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL, GeminiConfig, GeminiConfigBuilder,
};
pub use dto::{
    ApiErrorEnvelope, Blob, Candidate, Content, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, ImageConfig, Part, PromptFeedback, UsageMetadata,
};
pub use schema::to_gemini_schema;
