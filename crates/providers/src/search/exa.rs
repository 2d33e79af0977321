use super::{SearchHit, SearchProvider, SearchResults};
use crate::{error::ProviderError, net::http_request::HTTPRequest, utils};
use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use serde_json::{json, Value};
use strum::{Display, EnumString};

pub const EXA_BASE_URL: &str = "https://api.exa.ai";
const NUM_RESULTS: u32 = 5;
const MAX_TEXT_CHARACTERS: u32 = 1000;

#[derive(Debug, EnumString, Display, Clone)]
pub enum ExaAPI {
    #[strum(serialize = "search")]
    Search,
}

#[derive(Debug, Deserialize)]
struct ExaResult {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    snippet: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExaResponse {
    #[serde(default)]
    results: Vec<ExaResult>,
}

/// Neural web search through exa.ai.
#[derive(Debug, Clone)]
pub struct Exa {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl Exa {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: EXA_BASE_URL.into(),
            api_key: None,
        }
    }

    pub fn set_api_key<T: Into<String>>(mut self, api_key: T) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn set_base_url<T: Into<String>>(mut self, base_url: T) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn api_key(&self) -> Result<String, ProviderError> {
        self.api_key
            .clone()
            .ok_or_else(|| ProviderError::AuthError("EXA_API_KEY not set".to_string()))
    }
}

pub(crate) fn parse_exa_response(query: &str, body: Value) -> Result<SearchResults, ProviderError> {
    let response: ExaResponse = serde_json::from_value(body)?;
    let hits = response
        .results
        .into_iter()
        .map(|item| {
            SearchHit::new(
                item.title.unwrap_or_else(|| "N/A".to_string()),
                item.url.unwrap_or_default(),
                item.snippet.unwrap_or_default(),
            )
            .with_text(item.text.unwrap_or_default())
        })
        .collect();
    Ok(SearchResults {
        query: query.to_string(),
        hits,
    })
}

#[async_trait]
impl SearchProvider for Exa {
    fn name(&self) -> &'static str {
        "Exa"
    }

    async fn search(&self, query: &str) -> Result<SearchResults, ProviderError> {
        let api_key = self.api_key()?;
        let url = utils::create_model_url(&self.base_url, ExaAPI::Search);
        let body = json!({
            "query": query,
            "numResults": NUM_RESULTS,
            "contents": { "text": { "maxCharacters": MAX_TEXT_CHARACTERS } }
        });
        let headers = vec![("x-api-key", api_key)];

        let response = HTTPRequest::post_json(&self.client, &url, headers, &body).await?;
        let results = parse_exa_response(query, response)?;
        debug!("Exa returned {} results for '{query}'", results.hits.len());
        Ok(results)
    }
}
