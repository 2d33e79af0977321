//! Weather forecast lookup.

use super::error_record;
use crate::error::AgentError;
use async_trait::async_trait;
use genai_agents_core::config::AgentConfig;
use genai_agents_core::context::AgentContext;
use genai_agents_core::outcome::Outcome;
use genai_agents_core::tool::{decode_args, ToolCallError, ToolInputT, ToolRuntime, ToolT};
use genai_agents_core::{tool, ToolInput};
use genai_agents_providers::http_client;
use genai_agents_providers::weather::{WeatherApi, WeatherProvider};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

const DAY_POINTER: &str = "/forecast/forecastday/0/day";
const DAY_PATH: &str = "forecast.forecastday[0].day";

#[derive(Serialize, Deserialize, ToolInput, Debug)]
pub struct WeatherArgs {
    #[input(description = "City name to get weather forecast for")]
    pub city_name: String,
    #[input(description = "Date to get forecast for in yyyy-MM-dd format")]
    pub date: String,
}

/// The first forecast day of a WeatherAPI envelope, unchanged.
pub fn forecast_day(envelope: &Value) -> Result<Value, AgentError> {
    envelope
        .pointer(DAY_POINTER)
        .cloned()
        .ok_or(AgentError::MissingField(DAY_PATH))
}

#[tool(
    name = "get_weather",
    description = "Get weather forecast data",
    input = WeatherArgs,
)]
pub struct WeatherAgent {
    weather: Arc<dyn WeatherProvider>,
    live: bool,
}

impl WeatherAgent {
    /// Live mode requires `REQUEST_KEY`.
    pub fn new(config: &AgentConfig, weather: Arc<dyn WeatherProvider>) -> Self {
        Self {
            weather,
            live: config.credentials.weather_api_key.is_some(),
        }
    }

    pub fn from_config(config: &AgentConfig) -> Result<Self, AgentError> {
        let mut api = WeatherApi::new(http_client(config.http_timeout)?);
        if let Some(key) = &config.credentials.weather_api_key {
            api = api.set_api_key(key);
        }
        if let Some(base_url) = &config.endpoints.weather {
            api = api.set_base_url(base_url);
        }
        Ok(Self::new(config, Arc::new(api)))
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    async fn forecast(&self, args: &WeatherArgs) -> Result<Value, AgentError> {
        let envelope = self.weather.forecast(&args.city_name, &args.date).await?;
        Ok(json!({ "weather_forecast": forecast_day(&envelope)? }))
    }
}

#[async_trait]
impl ToolRuntime for WeatherAgent {
    async fn execute(&self, ctx: &AgentContext, args: Value) -> Result<Outcome<Value>, ToolCallError> {
        let args: WeatherArgs = decode_args(args)?;
        ctx.logger().info(format!(
            "Fetching forecast for {} on {}",
            args.city_name, args.date
        ));

        if !self.live {
            return Ok(Outcome::Fallback(json!({
                "weather_forecast": null,
                "message": "Weather forecast unavailable: REQUEST_KEY not set",
                "city_name": args.city_name,
                "date": args.date,
            })));
        }

        let record = match self.forecast(&args).await {
            Ok(record) => record,
            Err(e) => {
                ctx.logger().error(format!("Weather lookup failed: {e}"));
                error_record(
                    "Weather agent",
                    &e,
                    &[
                        ("city_name", args.city_name.as_str()),
                        ("date", args.date.as_str()),
                    ],
                )
            }
        };
        Ok(Outcome::Live(record))
    }
}
