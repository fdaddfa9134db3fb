//! Model provider integration and structured generation for Marquee.
//!
//! [`GeminiClient`] speaks the Gemini REST API. [`GenerationClient`] runs the
//! prompt → call → decode pipeline on top of any
//! [`marquee_interface::MarqueeDriver`].

mod gemini;
mod generation;
mod visual;

pub use gemini::*;
pub use generation::GenerationClient;

use marquee_interface::MarqueeDriver;

impl GenerationClient<GeminiClient> {
    /// Build a generation client whose model choices come from `config`.
    pub fn from_gemini(
        config: GeminiConfig,
        decode_policy: marquee_core::DecodePolicy,
    ) -> Result<Self, marquee_error::GeminiError> {
        let text_model = config.text_model().clone();
        let image_model = config.image_model().clone();
        let driver = GeminiClient::new(config)?;
        tracing::debug!(provider = driver.provider_name(), "Built generation client");
        Ok(Self::builder()
            .driver(driver)
            .text_model(text_model)
            .image_model(image_model)
            .decode_policy(decode_policy)
            .build())
    }
}
