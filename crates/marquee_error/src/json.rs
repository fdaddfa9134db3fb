//! Structured output decoding errors.

/// JSON decoding error with source location.
///
/// Raised only when a response is decoded under the strict policy; the
/// lenient decoder never produces one.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// What was wrong with the payload
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new JsonError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use marquee_error::JsonError;
    ///
    /// let err = JsonError::new("missing field `bannerText`");
    /// assert!(err.to_string().contains("bannerText"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
