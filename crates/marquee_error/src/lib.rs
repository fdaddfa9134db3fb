//! Error types for the Marquee library.
//!
//! Every concern gets its own error struct that records where it was raised.
//! They all fold into [`MarqueeError`] so callers can use `?` across crates.

mod config;
mod gemini;
mod input;
mod json;

pub use config::ConfigError;
pub use gemini::{GeminiError, GeminiErrorKind};
pub use input::InputError;
pub use json::JsonError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum MarqueeErrorKind {
    /// Structured output could not be decoded
    Json(JsonError),
    /// Configuration error
    Config(ConfigError),
    /// Invalid caller input
    Input(InputError),
    /// Gemini service error
    Gemini(GeminiError),
}

impl std::fmt::Display for MarqueeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarqueeErrorKind::Json(e) => write!(f, "{}", e),
            MarqueeErrorKind::Config(e) => write!(f, "{}", e),
            MarqueeErrorKind::Input(e) => write!(f, "{}", e),
            MarqueeErrorKind::Gemini(e) => write!(f, "{}", e),
        }
    }
}

/// Marquee error with kind discrimination.
///
/// # Examples
///
/// ```
/// use marquee_error::{ConfigError, MarqueeError, MarqueeErrorKind};
///
/// let err: MarqueeError = ConfigError::new("no api key").into();
/// assert!(matches!(err.kind(), MarqueeErrorKind::Config(_)));
/// ```
#[derive(Debug)]
pub struct MarqueeError(Box<MarqueeErrorKind>);

impl MarqueeError {
    /// Create a new error from a kind.
    pub fn new(kind: MarqueeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MarqueeErrorKind {
        &self.0
    }

    /// Whether asking the service again could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self.kind() {
            MarqueeErrorKind::Gemini(e) => e.is_transient(),
            _ => false,
        }
    }
}

impl std::fmt::Display for MarqueeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Marquee Error: {}", self.0)
    }
}

impl std::error::Error for MarqueeError {}

// Generic From implementation for any type that converts to MarqueeErrorKind
impl<T> From<T> for MarqueeError
where
    T: Into<MarqueeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Marquee operations.
pub type MarqueeResult<T> = std::result::Result<T, MarqueeError>;
