use crate::mock_failure;
use async_trait::async_trait;
use genai_agents_providers::search::{SearchHit, SearchProvider, SearchResults};
use genai_agents_providers::ProviderError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Search provider answering every query with the same hits.
#[derive(Debug, Default)]
pub struct MockSearch {
    hits: Vec<SearchHit>,
    should_fail: bool,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl MockSearch {
    pub fn new(hits: Vec<SearchHit>) -> Self {
        Self {
            hits,
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

    /// Queries in the order they were issued.
    pub fn queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .map(|queries| queries.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SearchProvider for MockSearch {
    fn name(&self) -> &'static str {
        "mock-search"
    }

    async fn search(&self, query: &str) -> Result<SearchResults, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.to_string());
        }
        if self.should_fail {
            return Err(mock_failure(self.name()));
        }
        Ok(SearchResults {
            query: query.to_string(),
            hits: self.hits.clone(),
        })
    }
}
