//! The agents this crate serves, and the registry the binary picks from.

mod briefing;
mod date;
mod industry;
mod research;
mod strategy;
mod weather;

pub use briefing::{BriefingAgent, BriefingArgs, TIMESTAMP_FORMAT};
pub use date::{format_date, DateAgent, DateArgs};
pub use industry::{
    detect_industries, IndustryAgent, IndustryArgs, IndustryExtractors, IndustryProfile,
    CHALLENGE_HEURISTIC, OPPORTUNITY_HEURISTIC, TREND_HEURISTIC,
};
pub use research::{ParticipantProfile, ResearchAgent, ResearchArgs};
pub use strategy::{StrategyAgent, StrategyArgs};
pub use weather::{forecast_day, WeatherAgent, WeatherArgs};

use crate::error::AgentError;
use genai_agents_core::config::{self, AgentConfig};
use genai_agents_core::tool::ToolT;
use serde_json::{Map, Value};
use std::sync::Arc;
use strum::{Display, EnumIter, EnumString};

/// Selects one agent by its command line name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum AgentKind {
    Research,
    Industry,
    Strategy,
    Briefing,
    Date,
    Weather,
}

impl AgentKind {
    /// Builds the agent with real provider clients.
    pub fn build(self, config: &AgentConfig) -> Result<Arc<dyn ToolT>, AgentError> {
        Ok(match self {
            AgentKind::Research => Arc::new(ResearchAgent::from_config(config)?),
            AgentKind::Industry => Arc::new(IndustryAgent::from_config(config)?),
            AgentKind::Strategy => Arc::new(StrategyAgent::from_config(config)?),
            AgentKind::Briefing => Arc::new(BriefingAgent::from_config(config)?),
            AgentKind::Date => Arc::new(DateAgent),
            AgentKind::Weather => Arc::new(WeatherAgent::from_config(config)?),
        })
    }

    /// Environment variable holding this agent's provider key.
    pub fn credential(self) -> Option<&'static str> {
        match self {
            AgentKind::Research => Some(config::SERPER_API_KEY),
            AgentKind::Industry => Some(config::EXA_API_KEY),
            AgentKind::Strategy | AgentKind::Briefing => Some(config::GOOGLE_API_KEY),
            AgentKind::Date => None,
            AgentKind::Weather => Some(config::WEATHER_API_KEY),
        }
    }

    /// The key this agent needs but the config lacks, if any.
    pub fn missing_credential(self, config: &AgentConfig) -> Option<&'static str> {
        self.credential()
            .filter(|key| config.missing_credentials().contains(key))
    }
}

/// `{"error": "{label} encountered an error: {err}", ...echoed}`
pub(crate) fn error_record(label: &str, err: &AgentError, echoed: &[(&str, &str)]) -> Value {
    let mut record = Map::new();
    record.insert(
        "error".to_string(),
        Value::String(format!("{label} encountered an error: {err}")),
    );
    for (key, value) in echoed {
        record.insert((*key).to_string(), Value::String((*value).to_string()));
    }
    Value::Object(record)
}

/// Prompts are written indented in source; providers get them flush left.
pub(crate) fn dedent(prompt: &str) -> String {
    prompt
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
