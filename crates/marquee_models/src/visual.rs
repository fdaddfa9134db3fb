//! On-demand visuals for already generated copy.

use crate::GenerationClient;
use marquee_core::{HasImageSuggestion, InlineImage};
use marquee_interface::MarqueeDriver;
use tracing::{debug, instrument};

impl<D: MarqueeDriver> GenerationClient<D> {
    /// Render the image a decoded response suggests.
    ///
    /// Never fails: a blank suggestion, a service error, or an answer
    /// without an image all yield `None`.
    #[instrument(skip_all)]
    pub async fn visualize<R>(&self, response: &R) -> Option<InlineImage>
    where
        R: HasImageSuggestion + Sync,
    {
        let description = response.image_prompt().trim();
        if description.is_empty() {
            debug!("No image suggestion to render");
            return None;
        }
        self.generate_image(description).await
    }
}
