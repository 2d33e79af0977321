use async_trait::async_trait;
use genai_agents_core::context::AgentContext;
use genai_agents_core::outcome::Outcome;
use genai_agents_core::tool::{ToolCallError, ToolRuntime, ToolT};
use serde_json::{json, Value};
use std::time::Duration;

/// Tool that echoes its arguments after an optional delay.
#[derive(Debug, Clone)]
pub struct MockTool {
    pub name: &'static str,
    pub delay: Option<Duration>,
    pub should_fail: bool,
}

impl MockTool {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            delay: None,
            should_fail: false,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn failing(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

#[async_trait]
impl ToolRuntime for MockTool {
    async fn execute(&self, ctx: &AgentContext, args: Value) -> Result<Outcome<Value>, ToolCallError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.should_fail {
            return Err(ToolCallError::RuntimeError("Mock tool failure".into()));
        }
        Ok(Outcome::Live(json!({
            "tool": ctx.tool_name(),
            "args": args,
        })))
    }
}

impl ToolT for MockTool {
    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        "Echoes its arguments"
    }

    fn args_schema(&self) -> Value {
        json!({"type": "object", "properties": {}, "required": []})
    }
}
