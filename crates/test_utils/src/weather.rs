use crate::mock_failure;
use async_trait::async_trait;
use genai_agents_providers::weather::WeatherProvider;
use genai_agents_providers::ProviderError;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Weather provider returning a canned forecast envelope.
#[derive(Debug, Default)]
pub struct MockWeather {
    envelope: Value,
    should_fail: bool,
    calls: AtomicUsize,
    requests: Mutex<Vec<(String, String)>>,
}

impl MockWeather {
    pub fn new(envelope: Value) -> Self {
        Self {
            envelope,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(city_name, date)` pairs in call order.
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl WeatherProvider for MockWeather {
    fn name(&self) -> &'static str {
        "mock-weather"
    }

    async fn forecast(&self, city_name: &str, date: &str) -> Result<Value, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((city_name.to_string(), date.to_string()));
        }
        if self.should_fail {
            return Err(mock_failure(self.name()));
        }
        Ok(self.envelope.clone())
    }
}
