use genai_agents_core::tool::ToolCallError;
use genai_agents_providers::ProviderError;

/// Errors that escape an agent's local fallback handling. Handlers turn
/// these into error records; they only surface as values from constructors.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("{0}")]
    Provider(#[from] ProviderError),

    #[error("Missing field in provider response: {0}")]
    MissingField(&'static str),

    #[error("Failed to serialize record: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<AgentError> for ToolCallError {
    fn from(err: AgentError) -> Self {
        ToolCallError::RuntimeError(Box::new(err))
    }
}
