use crate::protocol::InvocationId;
use std::fmt::Display;
use uuid::Uuid;

pub const LOG_TARGET: &str = "genai_agents::agent";

/// Logger handed to every invocation. Records carry the tool name and the
/// invocation id so interleaved concurrent calls can be told apart.
#[derive(Debug, Clone)]
pub struct AgentLogger {
    prefix: String,
}

impl AgentLogger {
    pub fn new(tool_name: &str, invocation_id: InvocationId) -> Self {
        Self {
            prefix: format!("{tool_name}:{invocation_id}"),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn debug(&self, message: impl Display) {
        log::debug!(target: LOG_TARGET, "[{}] {}", self.prefix, message);
    }

    pub fn info(&self, message: impl Display) {
        log::info!(target: LOG_TARGET, "[{}] {}", self.prefix, message);
    }

    pub fn warn(&self, message: impl Display) {
        log::warn!(target: LOG_TARGET, "[{}] {}", self.prefix, message);
    }

    pub fn error(&self, message: impl Display) {
        log::error!(target: LOG_TARGET, "[{}] {}", self.prefix, message);
    }
}

/// Per-invocation context injected into every tool call.
#[derive(Debug, Clone)]
pub struct AgentContext {
    invocation_id: InvocationId,
    tool_name: String,
    logger: AgentLogger,
}

impl AgentContext {
    pub fn new(tool_name: impl Into<String>, invocation_id: InvocationId) -> Self {
        let tool_name = tool_name.into();
        let logger = AgentLogger::new(&tool_name, invocation_id);
        Self {
            invocation_id,
            tool_name,
            logger,
        }
    }

    /// A context for calls that do not come through a dispatcher.
    pub fn detached(tool_name: impl Into<String>) -> Self {
        Self::new(tool_name, Uuid::new_v4())
    }

    pub fn invocation_id(&self) -> InvocationId {
        self.invocation_id
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn logger(&self) -> &AgentLogger {
        &self.logger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_prefix() {
        let id = Uuid::nil();
        let ctx = AgentContext::new("get_weather", id);
        assert_eq!(ctx.tool_name(), "get_weather");
        assert_eq!(ctx.invocation_id(), id);
        assert_eq!(
            ctx.logger().prefix(),
            "get_weather:00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_detached_contexts_are_distinct() {
        let a = AgentContext::detached("get_current_date");
        let b = AgentContext::detached("get_current_date");
        assert_ne!(a.invocation_id(), b.invocation_id());
    }
}
