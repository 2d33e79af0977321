use super::{CompletionProvider, CompletionRequest, CompletionResponse};
use crate::{error::ProviderError, net::http_request::HTTPRequest};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Map, Value};

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

/// Google Gemini `generateContent` client.
#[derive(Debug, Clone)]
pub struct Gemini {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl Gemini {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: GEMINI_BASE_URL.into(),
            api_key: None,
            model: DEFAULT_MODEL.into(),
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

    pub fn set_model<T: Into<String>>(mut self, model: T) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn api_key(&self) -> Result<String, ProviderError> {
        self.api_key
            .clone()
            .ok_or_else(|| ProviderError::AuthError("GOOGLE_API_KEY not set".to_string()))
    }

    fn request_body(req: &CompletionRequest) -> Value {
        let mut generation_config = Map::new();
        if let Some(temperature) = req.temperature {
            generation_config.insert("temperature".into(), json!(temperature));
        }
        if let Some(max_tokens) = req.max_tokens {
            generation_config.insert("maxOutputTokens".into(), json!(max_tokens));
        }

        let mut body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": req.prompt }] }]
        });
        if !generation_config.is_empty() {
            body["generationConfig"] = Value::Object(generation_config);
        }
        body
    }
}

/// Joins the text parts of the first candidate.
pub(crate) fn parse_gemini_response(body: Value) -> Result<CompletionResponse, ProviderError> {
    let raw_response = body.to_string();
    let response: GeminiResponse = serde_json::from_value(body)?;
    let content = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .ok_or_else(|| ProviderError::ResponseFormatError {
            message: "No candidates in response".to_string(),
            raw_response,
        })?;

    let text = content
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect::<Vec<_>>()
        .join("");
    Ok(CompletionResponse { text })
}

#[async_trait]
impl CompletionProvider for Gemini {
    fn name(&self) -> &'static str {
        "Gemini"
    }

    async fn complete(&self, req: &CompletionRequest) -> Result<CompletionResponse, ProviderError> {
        let api_key = self.api_key()?;
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );
        let headers = vec![("x-goog-api-key", api_key)];
        let response =
            HTTPRequest::post_json(&self.client, &url, headers, &Self::request_body(req)).await?;
        parse_gemini_response(response)
    }
}
