//! Inline media returned by the image model.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use derive_getters::Getters;
use marquee_error::{GeminiError, GeminiErrorKind};
use serde::{Deserialize, Serialize};

/// An image delivered inline as base64 text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase", try_from = "RawInlineImage")]
pub struct InlineImage {
    /// MIME type declared by the service, e.g. `image/png`
    mime_type: String,
    /// Base64 payload exactly as received
    data: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInlineImage {
    mime_type: String,
    data: String,
}

impl TryFrom<RawInlineImage> for InlineImage {
    type Error = String;

    fn try_from(raw: RawInlineImage) -> Result<Self, Self::Error> {
        Self::new(raw.mime_type, raw.data)
            .ok_or_else(|| "inline image needs a MIME type and a payload".to_string())
    }
}

impl InlineImage {
    /// Wrap a payload. Returns `None` if either part is empty.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Option<Self> {
        let mime_type = mime_type.into();
        let data = data.into();
        if mime_type.trim().is_empty() || data.trim().is_empty() {
            return None;
        }
        Some(Self { mime_type, data })
    }

    /// Render as a `data:` URL suitable for an `<img src>`.
    ///
    /// ```
    /// use marquee_core::InlineImage;
    ///
    /// let image = InlineImage::new("image/png", "iVBORw0KGgo=").unwrap();
    /// assert_eq!(image.data_url(), "data:image/png;base64,iVBORw0KGgo=");
    /// ```
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Decode the payload into raw bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GeminiError> {
        STANDARD
            .decode(self.data.as_bytes())
            .map_err(|e| GeminiError::new(GeminiErrorKind::Base64Decode(e.to_string())))
    }

    /// Conventional file extension for the MIME type.
    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "png",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_parts() {
        assert!(InlineImage::new("", "abcd").is_none());
        assert!(InlineImage::new("image/png", " ").is_none());
    }

    #[test]
    fn deserialization_applies_the_same_checks() {
        let image: InlineImage =
            serde_json::from_str(r#"{"mimeType":"image/png","data":"AAAA"}"#).unwrap();
        assert_eq!(image.mime_type(), "image/png");
        assert!(serde_json::from_str::<InlineImage>(r#"{"mimeType":"image/png","data":""}"#).is_err());
        assert!(serde_json::from_str::<InlineImage>(r#"{"mimeType":" ","data":"AAAA"}"#).is_err());
    }

    #[test]
    fn decodes_payload() {
        let image = InlineImage::new("image/jpeg", STANDARD.encode([0xff, 0xd8, 0xff])).unwrap();
        assert_eq!(image.to_bytes().unwrap(), vec![0xff, 0xd8, 0xff]);
        assert_eq!(image.extension(), "jpg");
    }

    #[test]
    fn bad_payload_is_an_error() {
        let image = InlineImage::new("image/png", "not base64!!").unwrap();
        assert!(image.to_bytes().is_err());
    }
}
