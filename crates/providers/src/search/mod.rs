//! Web search providers.
//!
//! Both providers normalise their envelopes into [`SearchHit`] so handlers
//! can run the same extraction over either of them.

mod exa;
mod serper;

pub use exa::{Exa, ExaAPI};
pub use serper::{Serper, SerperAPI};

use crate::error::ProviderError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One organic result of a web search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub link: String,
    pub snippet: String,
    /// Page text, when the provider returns contents (Exa).
    pub text: String,
}

impl SearchHit {
    pub fn new(title: impl Into<String>, link: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            snippet: snippet.into(),
            text: String::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Title, snippet and text joined, for keyword scanning.
    pub fn body(&self) -> String {
        [self.title.as_str(), self.snippet.as_str(), self.text.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Results of a single query, in provider order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub hits: Vec<SearchHit>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Every hit body concatenated, in result order.
    pub fn corpus(&self) -> String {
        self.hits
            .iter()
            .map(SearchHit::body)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn search(&self, query: &str) -> Result<SearchResults, ProviderError>;
}
