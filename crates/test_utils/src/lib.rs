//! Recording mock providers for agent tests.
//!
//! Every mock counts its calls and records the inputs it saw, serves a
//! canned response, and can be switched into a failing mode. [`StubServer`]
//! stands in for a remote API when the real HTTP clients are under test.

mod completion;
mod http;
mod search;
mod tool;
mod weather;

pub use completion::MockCompletion;
pub use http::{CapturedRequest, StubServer};
pub use search::MockSearch;
pub use tool::MockTool;
pub use weather::MockWeather;

use genai_agents_providers::ProviderError;

pub(crate) fn mock_failure(provider: &str) -> ProviderError {
    ProviderError::HttpError(format!("{provider} mock failure"))
}
