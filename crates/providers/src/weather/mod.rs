mod weatherapi;

pub use weatherapi::{WeatherApi, WeatherAPIPath, WEATHERAPI_BASE_URL};

use crate::error::ProviderError;
use async_trait::async_trait;
use serde_json::Value;

/// Forecast lookups. Implementations return the provider envelope untouched;
/// callers pick the fields they need.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn forecast(&self, city_name: &str, date: &str) -> Result<Value, ProviderError>;
}
