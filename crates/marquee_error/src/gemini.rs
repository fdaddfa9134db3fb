//! Gemini service error types.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeminiErrorKind {
    /// API key not found in configuration or environment
    MissingApiKey,
    /// Failed to create the HTTP client
    ClientCreation(String),
    /// Request never produced an HTTP response (network, timeout, TLS)
    ApiRequest(String),
    /// HTTP error with status code and message
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response body was not the expected envelope
    ResponseParsing(String),
    /// The service refused the prompt
    PromptBlocked(String),
    /// Base64 decoding failed
    Base64Decode(String),
}

impl std::fmt::Display for GeminiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeminiErrorKind::MissingApiKey => {
                write!(
                    f,
                    "No Gemini API key configured: set GEMINI_API_KEY (or API_KEY), \
                     MARQUEE__GEMINI__API_KEY, or `api_key` under [gemini] in marquee.toml"
                )
            }
            GeminiErrorKind::ClientCreation(msg) => {
                write!(f, "Failed to create Gemini client: {}", msg)
            }
            GeminiErrorKind::ApiRequest(msg) => write!(f, "Gemini API request failed: {}", msg),
            GeminiErrorKind::HttpError {
                status_code,
                message,
            } => write!(f, "HTTP {} error: {}", status_code, message),
            GeminiErrorKind::ResponseParsing(msg) => {
                write!(f, "Failed to parse Gemini response: {}", msg)
            }
            GeminiErrorKind::PromptBlocked(reason) => {
                write!(f, "Prompt blocked by Gemini: {}", reason)
            }
            GeminiErrorKind::Base64Decode(msg) => write!(f, "Base64 decode error: {}", msg),
        }
    }
}

impl GeminiErrorKind {
    /// Whether a manual retry of the same request has a chance of succeeding.
    ///
    /// Nothing in Marquee retries automatically; front ends use this to decide
    /// whether to invite the user to press "Generate" again.
    pub fn is_transient(&self) -> bool {
        match self {
            GeminiErrorKind::HttpError { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            GeminiErrorKind::ApiRequest(_) => true,
            _ => false,
        }
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use marquee_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// See [`GeminiErrorKind::is_transient`].
    ///
    /// ```
    /// use marquee_error::{GeminiError, GeminiErrorKind};
    ///
    /// let err = GeminiError::new(GeminiErrorKind::HttpError {
    ///     status_code: 503,
    ///     message: "Service unavailable".to_string(),
    /// });
    /// assert!(err.is_transient());
    ///
    /// let err = GeminiError::new(GeminiErrorKind::HttpError {
    ///     status_code: 401,
    ///     message: "API key not valid".to_string(),
    /// });
    /// assert!(!err.is_transient());
    /// ```
    pub fn is_transient(&self) -> bool {
        self.kind.is_transient()
    }
}

impl std::fmt::Display for GeminiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Gemini Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GeminiError {}
