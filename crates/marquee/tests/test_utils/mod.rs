//! Test utilities for the marquee crate.

use async_trait::async_trait;
use marquee::{
    GeminiError, GeminiErrorKind, GenerateRequest, GenerateResponse, InlineImage, MarqueeDriver,
    MarqueeResult, Output,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One scripted answer.
pub type Reply = Result<Vec<Output>, GeminiErrorKind>;

/// Driver that plays back replies in order and records what it was asked.
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

#[allow(dead_code)]
impl ScriptedDriver {
    /// Driver that answers with `replies`, one per call.
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().expect("request log poisoned").clone()
    }
}

/// A text reply.
#[allow(dead_code)]
pub fn text(body: &str) -> Reply {
    Ok(vec![Output::Text(body.to_string())])
}

/// An image reply carrying a tiny PNG header.
#[allow(dead_code)]
pub fn png() -> Reply {
    let image = InlineImage::new("image/png", "iVBORw0KGgo=").expect("valid image");
    Ok(vec![Output::Image(image)])
}

/// A reply with no parts at all.
#[allow(dead_code)]
pub fn empty() -> Reply {
    Ok(Vec::new())
}

#[async_trait]
impl MarqueeDriver for ScriptedDriver {
    async fn generate(&self, request: &GenerateRequest) -> MarqueeResult<GenerateResponse> {
        self.requests
            .lock()
            .expect("request log poisoned")
            .push(request.clone());

        let reply = self
            .replies
            .lock()
            .expect("reply script poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(GeminiErrorKind::ApiRequest("no scripted reply".to_string())));

        match reply {
            Ok(outputs) => Ok(GenerateResponse::new(outputs, None)),
            Err(kind) => Err(GeminiError::new(kind).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}
