use super::WeatherProvider;
use crate::{error::ProviderError, net::http_request::HTTPRequest, utils};
use async_trait::async_trait;
use serde_json::Value;
use strum::{Display, EnumString};

pub const WEATHERAPI_BASE_URL: &str = "http://api.weatherapi.com/v1";

#[derive(Debug, EnumString, Display, Clone)]
pub enum WeatherAPIPath {
    #[strum(serialize = "forecast.json")]
    Forecast,
}

/// weatherapi.com forecast client.
#[derive(Debug, Clone)]
pub struct WeatherApi {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl WeatherApi {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: WEATHERAPI_BASE_URL.into(),
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
            .ok_or_else(|| ProviderError::AuthError("REQUEST_KEY not set".to_string()))
    }
}

#[async_trait]
impl WeatherProvider for WeatherApi {
    fn name(&self) -> &'static str {
        "WeatherAPI"
    }

    async fn forecast(&self, city_name: &str, date: &str) -> Result<Value, ProviderError> {
        let api_key = self.api_key()?;
        let url = utils::create_model_url(&self.base_url, WeatherAPIPath::Forecast);
        let query = [("q", city_name), ("dt", date), ("key", api_key.as_str())];
        HTTPRequest::get_json(&self.client, &url, &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_path() {
        assert_eq!(WeatherAPIPath::Forecast.to_string(), "forecast.json");
    }

    #[tokio::test]
    async fn test_forecast_without_key_fails_before_request() {
        let weather = WeatherApi::new(reqwest::Client::new()).set_base_url("http://127.0.0.1:9");
        let err = weather.forecast("London", "2025-06-01").await.unwrap_err();
        assert!(matches!(err, ProviderError::AuthError(_)));
    }
}
