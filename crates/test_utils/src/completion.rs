use crate::mock_failure;
use async_trait::async_trait;
use genai_agents_providers::completion::{CompletionProvider, CompletionRequest, CompletionResponse};
use genai_agents_providers::ProviderError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Completion provider returning a fixed text.
#[derive(Debug, Default)]
pub struct MockCompletion {
    text: String,
    should_fail: bool,
    calls: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockCompletion {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletion {
    fn name(&self) -> &'static str {
        "mock-completion"
    }

    async fn complete(&self, req: &CompletionRequest) -> Result<CompletionResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(req.clone());
        }
        if self.should_fail {
            return Err(mock_failure(self.name()));
        }
        Ok(CompletionResponse {
            text: self.text.clone(),
        })
    }
}
