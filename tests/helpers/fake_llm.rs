// ABOUTME: Deterministic fake LLM provider for tests
// ABOUTME: Returns canned text or canned failures and counts completion calls

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use plategenie::errors::{AppError, ErrorCode};
use plategenie::llm::{CompletionRequest, CompletionResponse, LlmProvider};

/// Canned behavior for a fake completion call
enum FakeBehavior {
    /// Return this text as the model output
    Text(String),
    /// Fail with this error code and message
    Fail(ErrorCode, String),
}

/// Fake provider returning canned responses and counting calls
pub struct FakeLlm {
    behavior: FakeBehavior,
    calls: AtomicUsize,
}

impl FakeLlm {
    /// Fake that answers every completion with `text`
    pub fn with_text(text: &str) -> Self {
        Self {
            behavior: FakeBehavior::Text(text.to_owned()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fake that fails every completion with the given code and message
    pub fn with_failure(code: ErrorCode, message: &str) -> Self {
        Self {
            behavior: FakeBehavior::Fail(code, message.to_owned()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of completion calls made against this fake
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for FakeLlm {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn display_name(&self) -> &'static str {
        "Fake Test Provider"
    }

    fn default_model(&self) -> &str {
        "fake-1"
    }

    fn available_models(&self) -> &'static [&'static str] {
        &["fake-1"]
    }

    async fn complete(
        &self,
        _request: &CompletionRequest,
    ) -> Result<CompletionResponse, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            FakeBehavior::Text(text) => Ok(CompletionResponse {
                content: text.clone(),
                model: "fake-1".to_owned(),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            FakeBehavior::Fail(code, message) => Err(AppError::new(*code, message.clone())),
        }
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}
