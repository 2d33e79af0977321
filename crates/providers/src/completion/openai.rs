use super::{CompletionProvider, CompletionRequest, CompletionResponse};
use crate::{error::ProviderError, net::http_request::HTTPRequest, utils};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

/// Gemini's OpenAI compatible surface, which accepts a Google API key.
pub const GEMINI_OPENAI_COMPAT_BASE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/openai";

#[derive(Debug, EnumString, Display, Clone)]
pub enum OpenAIAPI {
    #[strum(serialize = "chat/completions")]
    ChatCompletion,
}

#[derive(Debug, Serialize)]
struct OpenAIStyleMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct OpenAIStyleChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAIStyleMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OpenAIStyleResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIStyleChoice {
    message: OpenAIStyleResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAIStyleChatCompletionResponse {
    #[serde(default)]
    choices: Vec<OpenAIStyleChoice>,
}

/// Single-turn chat completion against any OpenAI compatible endpoint.
#[derive(Debug, Clone)]
pub struct OpenAIChat {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl OpenAIChat {
    pub fn new(client: reqwest::Client, model: impl Into<String>) -> Self {
        Self {
            client,
            base_url: GEMINI_OPENAI_COMPAT_BASE_URL.into(),
            api_key: None,
            model: model.into(),
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
            .ok_or_else(|| ProviderError::AuthError("API key not set".to_string()))
    }

    fn request_body(&self, req: &CompletionRequest) -> Result<Value, ProviderError> {
        let body = OpenAIStyleChatCompletionRequest {
            model: &self.model,
            messages: vec![OpenAIStyleMessage {
                role: "user",
                content: &req.prompt,
            }],
            temperature: req.temperature,
            max_tokens: req.max_tokens,
        };
        Ok(serde_json::to_value(body)?)
    }
}

pub(crate) fn parse_chat_response(body: Value) -> Result<CompletionResponse, ProviderError> {
    let raw_response = body.to_string();
    let response: OpenAIStyleChatCompletionResponse = serde_json::from_value(body)?;
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::ResponseFormatError {
            message: "No choices in response".to_string(),
            raw_response,
        })?;
    Ok(CompletionResponse {
        text: choice.message.content.unwrap_or_default(),
    })
}

#[async_trait]
impl CompletionProvider for OpenAIChat {
    fn name(&self) -> &'static str {
        "OpenAIChat"
    }

    async fn complete(&self, req: &CompletionRequest) -> Result<CompletionResponse, ProviderError> {
        let api_key = self.api_key()?;
        let url = utils::create_model_url(&self.base_url, OpenAIAPI::ChatCompletion);
        let headers = vec![("Authorization", format!("Bearer {api_key}"))];
        let body = self.request_body(req)?;
        let response = HTTPRequest::post_json(&self.client, &url, headers, &body).await?;
        parse_chat_response(response)
    }
}
