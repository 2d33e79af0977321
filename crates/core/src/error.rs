use crate::tool::ToolCallError;

/// Errors raised by the session and its transports.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Tool already bound: {0}")]
    DuplicateTool(String),

    #[error("Transport closed: {0}")]
    TransportClosed(String),

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Tool call failed: {0}")]
    ToolCall(#[from] ToolCallError),
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        SessionError::TransportError(err.to_string())
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        SessionError::TransportError(err.to_string())
    }
}

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}
