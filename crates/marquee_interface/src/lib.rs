//! Trait definitions shared between Marquee's orchestration layer and its
//! model providers.

use async_trait::async_trait;
use marquee_core::{GenerateRequest, GenerateResponse};
use marquee_error::MarqueeResult;

/// A generative model service that can answer a single request.
///
/// Implementations make exactly one attempt per call. They must report
/// transport and service failures as errors rather than panicking, and must
/// not retry on their own.
#[async_trait]
pub trait MarqueeDriver: Send + Sync {
    /// Send one request and return the parts the model produced.
    async fn generate(&self, request: &GenerateRequest) -> MarqueeResult<GenerateResponse>;

    /// Provider name, for logging.
    fn provider_name(&self) -> &'static str;
}

#[async_trait]
impl<D> MarqueeDriver for std::sync::Arc<D>
where
    D: MarqueeDriver + ?Sized,
{
    async fn generate(&self, request: &GenerateRequest) -> MarqueeResult<GenerateResponse> {
        (**self).generate(request).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}
