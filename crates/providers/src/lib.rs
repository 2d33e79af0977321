//! HTTP clients for the third-party services the agents consume.
//!
//! Each service family sits behind a small async trait so that handlers can
//! be exercised against recording mocks:
//!
//! * [`search::SearchProvider`]: Serper and Exa web search
//! * [`completion::CompletionProvider`]: Gemini and OpenAI-compatible chat
//! * [`weather::WeatherProvider`]: WeatherAPI forecasts

pub mod completion;
pub mod error;
mod net;
pub mod search;
pub(crate) mod utils;
pub mod weather;

pub use error::ProviderError;
pub use net::http_client;
