//! HTTP client for the Gemini `generateContent` endpoint.

use crate::gemini::{ApiErrorEnvelope, GeminiConfig, GenerateContentResponse, conversions};
use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use marquee_core::{GenerateRequest, GenerateResponse};
use marquee_error::{GeminiError, GeminiErrorKind, MarqueeResult};
use marquee_interface::MarqueeDriver;
use reqwest::Client;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument};

const PROVIDER: &str = "gemini";

/// Client for Google's Gemini API.
///
/// Cloning is cheap; clones share the connection pool and throttle.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    config: GeminiConfig,
    throttle: Option<Arc<DefaultDirectRateLimiter>>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("config", &self.config)
            .field("throttled", &self.throttle.is_some())
            .finish()
    }
}

impl GeminiClient {
    /// Creates a client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Fails if the config has no API key or the HTTP client cannot be built.
    #[instrument(skip(config), fields(base_url = %config.base_url()))]
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        if !config.has_api_key() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        let throttle = (*config.requests_per_minute())
            .and_then(NonZeroU32::new)
            .map(|rpm| Arc::new(RateLimiter::direct(Quota::per_minute(rpm))));

        debug!(
            text_model = %config.text_model(),
            image_model = %config.image_model(),
            throttled = throttle.is_some(),
            "Created Gemini client"
        );

        Ok(Self {
            http,
            config,
            throttle,
        })
    }

    /// Creates a client from `GEMINI_*` environment variables.
    pub fn from_env() -> Result<Self, GeminiError> {
        Self::new(GeminiConfig::from_env()?)
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url().trim_end_matches('/'),
            model
        )
    }

    /// Sends one `generateContent` call.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, an
    /// unparseable body, or a blocked prompt. Nothing is retried.
    #[instrument(skip(self, req), fields(provider = PROVIDER, model = %req.model()))]
    pub async fn generate_content(
        &self,
        req: &GenerateRequest,
    ) -> Result<GenerateResponse, GeminiError> {
        if let Some(throttle) = &self.throttle {
            throttle.until_ready().await;
        }

        let body = conversions::to_gemini_request(req)?;
        debug!(prompt_len = req.prompt().len(), "Sending request");

        let response = self
            .http
            .post(self.endpoint(req.model()))
            .header("x-goog-api-key", self.config.api_key().as_str())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&error_text)
                .map(|envelope| envelope.error.message)
                .unwrap_or(error_text);
            error!(status = %status, error = %message, "API error");

            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            GeminiError::new(GeminiErrorKind::ResponseParsing(e.to_string()))
        })?;

        debug!(candidates = parsed.candidates.len(), "Received response");

        conversions::from_gemini_response(parsed)
    }
}

#[async_trait]
impl MarqueeDriver for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> MarqueeResult<GenerateResponse> {
        Ok(self.generate_content(request).await?)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;

    // Answers a single request with `status` and a JSON `body`.
    fn serve_once(status: &str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let status = status.to_string();
        std::thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);
            let mut content_length = 0;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line == "\r\n" || line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':')
                    && name.eq_ignore_ascii_case("content-length")
                {
                    content_length = value.trim().parse().unwrap();
                }
            }
            let mut request_body = vec![0; content_length];
            reader.read_exact(&mut request_body).unwrap();
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            reader.into_inner().write_all(response.as_bytes()).unwrap();
        });
        format!("http://{addr}/v1beta")
    }

    #[tokio::test]
    async fn error_status_carries_service_message() {
        let base_url = serve_once(
            "429 Too Many Requests",
            r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#,
        );
        let config = GeminiConfig::builder()
            .api_key("k")
            .base_url(base_url)
            .build()
            .unwrap();
        let client = GeminiClient::new(config).unwrap();
        let request = GenerateRequest::builder()
            .model("gemini-2.5-flash")
            .prompt("Create promotional content for a local event.")
            .build()
            .unwrap();

        let err = client.generate_content(&request).await.unwrap_err();
        assert_eq!(
            err.kind,
            GeminiErrorKind::HttpError {
                status_code: 429,
                message: "Quota exceeded".to_string(),
            }
        );
        assert!(err.is_transient());
        assert_eq!(err.kind.to_string(), "HTTP 429 error: Quota exceeded");
    }

    #[tokio::test]
    async fn unparseable_error_body_is_kept_verbatim() {
        let base_url = serve_once("401 Unauthorized", "not json");
        let config = GeminiConfig::builder()
            .api_key("k")
            .base_url(base_url)
            .build()
            .unwrap();
        let client = GeminiClient::new(config).unwrap();
        let request = GenerateRequest::builder()
            .model("gemini-2.5-flash")
            .prompt("hello")
            .build()
            .unwrap();

        let err = client.generate_content(&request).await.unwrap_err();
        assert_eq!(
            err.kind,
            GeminiErrorKind::HttpError {
                status_code: 401,
                message: "not json".to_string(),
            }
        );
        assert!(!err.is_transient());
    }

    #[test]
    fn missing_key_is_rejected() {
        let err = GeminiClient::new(GeminiConfig::default()).unwrap_err();
        assert_eq!(err.kind, GeminiErrorKind::MissingApiKey);
    }

    #[test]
    fn endpoint_includes_model() {
        let config = GeminiConfig::builder()
            .api_key("k")
            .base_url("http://localhost:9000/v1beta/")
            .build()
            .unwrap();
        let client = GeminiClient::new(config).unwrap();
        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "http://localhost:9000/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
