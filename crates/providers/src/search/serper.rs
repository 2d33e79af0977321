use super::{SearchHit, SearchProvider, SearchResults};
use crate::{error::ProviderError, net::http_request::HTTPRequest, utils};
use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use serde_json::{json, Value};
use strum::{Display, EnumString};

pub const SERPER_BASE_URL: &str = "https://google.serper.dev";
const NUM_RESULTS: u32 = 5;

#[derive(Debug, EnumString, Display, Clone)]
pub enum SerperAPI {
    #[strum(serialize = "search")]
    Search,
}

#[derive(Debug, Deserialize)]
struct SerperOrganic {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    snippet: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<SerperOrganic>,
}

/// Google search through serper.dev.
#[derive(Debug, Clone)]
pub struct Serper {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl Serper {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: SERPER_BASE_URL.into(),
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
            .ok_or_else(|| ProviderError::AuthError("SERPER_API_KEY not set".to_string()))
    }
}

/// Maps a serper envelope onto search hits. Missing fields become `N/A`.
pub(crate) fn parse_serper_response(query: &str, body: Value) -> Result<SearchResults, ProviderError> {
    let response: SerperResponse = serde_json::from_value(body)?;
    let hits = response
        .organic
        .into_iter()
        .map(|item| {
            SearchHit::new(
                item.title.unwrap_or_else(|| "N/A".to_string()),
                item.link.unwrap_or_default(),
                item.snippet.unwrap_or_else(|| "N/A".to_string()),
            )
        })
        .collect();
    Ok(SearchResults {
        query: query.to_string(),
        hits,
    })
}

#[async_trait]
impl SearchProvider for Serper {
    fn name(&self) -> &'static str {
        "Serper"
    }

    async fn search(&self, query: &str) -> Result<SearchResults, ProviderError> {
        let api_key = self.api_key()?;
        let url = utils::create_model_url(&self.base_url, SerperAPI::Search);
        let body = json!({ "q": query, "num": NUM_RESULTS });
        let headers = vec![("X-API-KEY", api_key)];

        let response = HTTPRequest::post_json(&self.client, &url, headers, &body).await?;
        let results = parse_serper_response(query, response)?;
        debug!("Serper returned {} results for '{query}'", results.hits.len());
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serper_response() {
        let body = json!({
            "searchParameters": {"q": "Ada Lovelace LinkedIn profile"},
            "organic": [
                {
                    "title": "Ada Lovelace - Analyst - Engines Ltd | LinkedIn",
                    "link": "https://www.linkedin.com/in/ada",
                    "snippet": "Experienced analyst.",
                    "position": 1
                },
                {"link": "https://example.com"}
            ]
        });

        let results = parse_serper_response("Ada Lovelace LinkedIn profile", body).unwrap();
        assert_eq!(results.hits.len(), 2);
        assert_eq!(results.hits[0].link, "https://www.linkedin.com/in/ada");
        assert_eq!(results.hits[1].title, "N/A");
        assert_eq!(results.hits[1].snippet, "N/A");
    }

    #[test]
    fn test_parse_serper_without_organic() {
        let results = parse_serper_response("q", json!({"message": "quota"})).unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_search_without_key_fails_before_request() {
        let serper = Serper::new(reqwest::Client::new()).set_base_url("http://127.0.0.1:9");
        let err = serper.search("anything").await.unwrap_err();
        assert!(matches!(err, ProviderError::AuthError(_)));
    }

    #[test]
    fn test_endpoint_path() {
        assert_eq!(SerperAPI::Search.to_string(), "search");
    }
}
