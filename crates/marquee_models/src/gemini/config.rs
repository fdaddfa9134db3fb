//! Connection settings for the Gemini API.

use derive_getters::Getters;
use marquee_error::{GeminiError, GeminiErrorKind};
use serde::{Deserialize, Serialize};

/// Production endpoint, including the API version.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Model used for structured text.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
/// Model used for images.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_text_model() -> String {
    DEFAULT_TEXT_MODEL.to_string()
}

fn default_image_model() -> String {
    DEFAULT_IMAGE_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

/// Gemini connection settings.
///
/// The API key is held here and handed to [`crate::GeminiClient`] once at
/// construction; nothing reads it from the environment afterwards.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`
    #[serde(default)]
    api_key: String,
    /// Base URL including the API version
    #[builder(default = "default_base_url()")]
    #[serde(default = "default_base_url")]
    base_url: String,
    /// Model for structured text generation
    #[builder(default = "default_text_model()")]
    #[serde(default = "default_text_model")]
    text_model: String,
    /// Model for image generation
    #[builder(default = "default_image_model()")]
    #[serde(default = "default_image_model")]
    image_model: String,
    /// Per-request timeout
    #[builder(default = "default_timeout_secs()")]
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
    /// Client-side cap on requests per minute; unlimited when unset
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    requests_per_minute: Option<u32>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            text_model: default_text_model(),
            image_model: default_image_model(),
            timeout_secs: default_timeout_secs(),
            requests_per_minute: None,
        }
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .field("timeout_secs", &self.timeout_secs)
            .field("requests_per_minute", &self.requests_per_minute)
            .finish()
    }
}

impl GeminiConfig {
    /// Creates a builder for `GeminiConfig`.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }

    /// Create config from environment variables
    ///
    /// Reads:
    /// - `GEMINI_API_KEY`, falling back to `API_KEY` (one is required)
    /// - `GEMINI_BASE_URL` (default: the public v1beta endpoint)
    /// - `GEMINI_TEXT_MODEL` (default: `gemini-2.5-flash`)
    /// - `GEMINI_IMAGE_MODEL` (default: `gemini-2.5-flash-image`)
    pub fn from_env() -> Result<Self, GeminiError> {
        let mut config = Self::default();
        config.api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Overlay `GEMINI_*` variables that are set onto this config.
    ///
    /// The key is only taken from the environment when none is configured.
    pub fn apply_env_overrides(&mut self) {
        if self.api_key.trim().is_empty() {
            if let Ok(key) = std::env::var("GEMINI_API_KEY").or_else(|_| std::env::var("API_KEY")) {
                self.api_key = key;
            }
        }
        if let Ok(url) = std::env::var("GEMINI_BASE_URL") {
            self.base_url = url;
        }
        if let Ok(model) = std::env::var("GEMINI_TEXT_MODEL") {
            self.text_model = model;
        }
        if let Ok(model) = std::env::var("GEMINI_IMAGE_MODEL") {
            self.image_model = model;
        }
    }

    /// Whether an API key is present.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Copy with the API key masked, for display.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.has_api_key() {
            copy.api_key = "<redacted>".to_string();
        }
        copy
    }
}
