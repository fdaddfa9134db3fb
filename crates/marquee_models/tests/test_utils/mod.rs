//! Test utilities for marquee_models tests.
//!
//! Provides a scripted driver that records every request it receives.

use async_trait::async_trait;
use marquee_core::{GenerateRequest, GenerateResponse, InlineImage, Output};
use marquee_error::{GeminiError, GeminiErrorKind, MarqueeResult};
use marquee_interface::MarqueeDriver;
use std::sync::{Arc, Mutex};

/// What the mock answers with.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockBehavior {
    /// A single text part.
    Text(String),
    /// Arbitrary parts.
    Parts(Vec<Output>),
    /// A service failure.
    Fail(GeminiErrorKind),
}

/// Scripted stand-in for a model service.
#[derive(Debug)]
pub struct MockDriver {
    behavior: MockBehavior,
    requests: Mutex<Vec<GenerateRequest>>,
}

#[allow(dead_code)]
impl MockDriver {
    /// A driver that always answers with `behavior`.
    pub fn new(behavior: MockBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            requests: Mutex::new(Vec::new()),
        })
    }

    /// A driver that always answers with `text`.
    pub fn text(text: impl Into<String>) -> Arc<Self> {
        Self::new(MockBehavior::Text(text.into()))
    }

    /// A driver that answers with one PNG part.
    pub fn png(data: &str) -> Arc<Self> {
        let image = InlineImage::new("image/png", data).expect("non-empty test image");
        Self::new(MockBehavior::Parts(vec![Output::Image(image)]))
    }

    /// A driver that always fails with `kind`.
    pub fn failing(kind: GeminiErrorKind) -> Arc<Self> {
        Self::new(MockBehavior::Fail(kind))
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().expect("request log poisoned").clone()
    }
}

#[async_trait]
impl MarqueeDriver for MockDriver {
    async fn generate(&self, request: &GenerateRequest) -> MarqueeResult<GenerateResponse> {
        self.requests
            .lock()
            .expect("request log poisoned")
            .push(request.clone());

        match &self.behavior {
            MockBehavior::Text(text) => Ok(GenerateResponse::new(
                vec![Output::Text(text.clone())],
                None,
            )),
            MockBehavior::Parts(parts) => Ok(GenerateResponse::new(parts.clone(), None)),
            MockBehavior::Fail(kind) => Err(GeminiError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
