//! Structured generation over any [`MarqueeDriver`].
//!
//! Every content domain goes through [`GenerationClient::generate_structured`]:
//! render the prompt, call the model with the domain's schema attached, decode
//! the answer. Domains only contribute data.

use crate::gemini::{DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};
use marquee_core::{
    AspectRatio, DecodePolicy, GenerateRequest, InlineImage, OutputSchema, ResponseFormat,
    StructuredRequest, decode,
};
use marquee_error::{InputError, MarqueeResult};
use marquee_interface::MarqueeDriver;
use tracing::{debug, info, instrument, warn};
use typed_builder::TypedBuilder;

/// Orchestrates single-shot calls against a model driver.
///
/// Each call is one network round trip. There is no retry and no
/// cancellation; dropping the returned future abandons the request.
#[derive(Debug, Clone, TypedBuilder)]
pub struct GenerationClient<D> {
    /// Model service
    driver: D,

    /// Model for structured text
    #[builder(default = DEFAULT_TEXT_MODEL.to_string(), setter(into))]
    text_model: String,

    /// Model for images
    #[builder(default = DEFAULT_IMAGE_MODEL.to_string(), setter(into))]
    image_model: String,

    /// How to treat output that does not match the schema
    #[builder(default)]
    decode_policy: DecodePolicy,
}

impl<D: MarqueeDriver> GenerationClient<D> {
    /// Returns the underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Returns the model used for structured text.
    pub fn text_model(&self) -> &str {
        &self.text_model
    }

    /// Returns the model used for images.
    pub fn image_model(&self) -> &str {
        &self.image_model
    }

    /// Returns the decode policy.
    pub fn decode_policy(&self) -> DecodePolicy {
        self.decode_policy
    }

    /// Ask `model` for JSON matching `schema` and return the raw text.
    ///
    /// # Errors
    ///
    /// Any transport or service failure from the driver, unchanged.
    #[instrument(
        skip(self, prompt, schema, system_instruction),
        fields(provider = self.driver.provider_name(), schema = schema.name)
    )]
    pub async fn generate(
        &self,
        prompt: &str,
        schema: &'static OutputSchema,
        system_instruction: &str,
        model: &str,
    ) -> MarqueeResult<String> {
        let request = GenerateRequest::builder()
            .model(model)
            .prompt(prompt)
            .system_instruction(Some(system_instruction.to_string()))
            .response_format(ResponseFormat::Json(schema))
            .build()
            .map_err(|e| InputError::new(format!("Failed to build request: {}", e)))?;

        let response = self.driver.generate(&request).await?;
        let text = response.text();
        debug!(
            response_len = text.len(),
            tokens = response.usage().as_ref().map(|u| *u.total_tokens()),
            "Received structured output"
        );
        Ok(text)
    }

    /// Run a domain request end to end and decode the typed response.
    ///
    /// # Errors
    ///
    /// Transport and service failures. Under [`DecodePolicy::Strict`], also
    /// output that does not match the schema.
    #[instrument(skip(self, request), fields(domain = %R::DOMAIN))]
    pub async fn generate_structured<R>(&self, request: &R) -> MarqueeResult<R::Response>
    where
        R: StructuredRequest + Sync,
    {
        let domain = R::DOMAIN;
        let prompt = request.prompt();
        info!(model = %self.text_model, "Generating content");

        let raw = self
            .generate(
                &prompt,
                domain.schema(),
                domain.system_instruction(),
                &self.text_model,
            )
            .await?;

        Ok(decode::<R::Response>(&raw, self.decode_policy)?)
    }

    /// Ask the image model for a square picture of `prompt`.
    ///
    /// `Ok(None)` means the call succeeded but carried no image part.
    ///
    /// # Errors
    ///
    /// Any transport or service failure from the driver.
    #[instrument(skip(self, prompt), fields(model = %self.image_model))]
    pub async fn try_generate_image(&self, prompt: &str) -> MarqueeResult<Option<InlineImage>> {
        let request = GenerateRequest::builder()
            .model(self.image_model.as_str())
            .prompt(prompt)
            .aspect_ratio(Some(AspectRatio::Square))
            .build()
            .map_err(|e| InputError::new(format!("Failed to build request: {}", e)))?;

        let response = self.driver.generate(&request).await?;
        let image = response.first_image().cloned();
        if image.is_none() {
            debug!(parts = response.outputs().len(), "No inline image in response");
        }
        Ok(image)
    }

    /// Like [`Self::try_generate_image`], with failures folded into `None`.
    pub async fn generate_image(&self, prompt: &str) -> Option<InlineImage> {
        match self.try_generate_image(prompt).await {
            Ok(image) => image,
            Err(e) => {
                warn!(error = %e, "Image generation failed");
                None
            }
        }
    }
}
