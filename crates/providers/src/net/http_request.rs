use crate::error::ProviderError;
use log::debug;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;

pub(crate) struct HTTPRequest {}

impl HTTPRequest {
    pub async fn post_json(
        client: &Client,
        url: &str,
        headers: Vec<(&'static str, String)>,
        body: &Value,
    ) -> Result<Value, ProviderError> {
        debug!("POST {url}");
        let mut request = client.post(url).json(body);
        for (name, value) in headers {
            request = request.header(name, value);
        }
        Self::send(request).await
    }

    pub async fn get_json(
        client: &Client,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, ProviderError> {
        debug!("GET {url}");
        Self::send(client.get(url).query(query)).await
    }

    async fn send(request: RequestBuilder) -> Result<Value, ProviderError> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        if status != StatusCode::OK {
            return Err(ProviderError::Status { status, body: text });
        }
        Ok(serde_json::from_str(&text)?)
    }
}
