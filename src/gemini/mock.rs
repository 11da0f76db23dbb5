//! Mock text generator for tests
//!
//! Scriptable stand-in for the real API:
//! - queue replies with `push_reply` / failures with `push_failure`
//! - with an empty queue, every call returns the default reply
//! - all received requests are recorded for assertions

use super::traits::TextGenerator;
use super::types::{GenerationError, GenerationRequest};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scriptable mock implementation of [`TextGenerator`].
///
/// # Example
///
/// ```rust
/// use project_forge::gemini::{GenerationRequest, MockTextGenerator, TextGenerator};
///
/// # tokio_test::block_on(async {
/// let llm = MockTextGenerator::new();
/// llm.push_reply("first");
/// llm.push_failure("service down");
///
/// assert_eq!(llm.generate(GenerationRequest::text("a")).await.unwrap(), "first");
/// assert!(llm.generate(GenerationRequest::text("b")).await.is_err());
/// // Queue drained → default reply
/// assert!(!llm.generate(GenerationRequest::text("c")).await.unwrap().is_empty());
/// assert_eq!(llm.request_count(), 3);
/// # });
/// ```
pub struct MockTextGenerator {
    replies: Mutex<VecDeque<Result<String, String>>>,
    default_reply: String,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl MockTextGenerator {
    pub fn new() -> Self {
        Self::with_default_reply("This is a generated mock response with enough substance to stand in for real output.")
    }

    /// Create a mock whose drained-queue reply is `reply`.
    pub fn with_default_reply(reply: impl Into<String>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            default_reply: reply.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful reply (FIFO).
    pub fn push_reply(&self, text: impl Into<String>) {
        self.replies.lock().unwrap().push_back(Ok(text.into()));
    }

    /// Queue a failure (surfaced as an API error).
    pub fn push_failure(&self, message: impl Into<String>) {
        self.replies.lock().unwrap().push_back(Err(message.into()));
    }

    /// All requests received so far, in call order.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Default for MockTextGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        self.requests.lock().unwrap().push(request);

        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(GenerationError::Api {
                status: 500,
                message,
            }),
            None => Ok(self.default_reply.clone()),
        }
    }

    fn model_name(&self) -> &str {
        "mock-text-generator"
    }
}
