use crate::context::AgentContext;
use crate::outcome::Outcome;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Debug;

#[derive(Debug, thiserror::Error)]
pub enum ToolCallError {
    #[error("Runtime Error {0}")]
    RuntimeError(#[from] Box<dyn std::error::Error + Sync + Send>),

    #[error("Serde Error {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// What the session announces to the dispatcher for every bound tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// The body of a tool. Implemented by hand next to the `#[tool]` attribute,
/// which supplies the [`ToolT`] metadata half.
#[async_trait]
pub trait ToolRuntime: Send + Sync + Debug {
    async fn execute(&self, ctx: &AgentContext, args: Value)
        -> Result<Outcome<Value>, ToolCallError>;
}

pub trait ToolT: Send + Sync + Debug + ToolRuntime {
    /// The name of the tool.
    fn name(&self) -> &'static str;
    /// A description explaining the tool’s purpose.
    fn description(&self) -> &'static str;
    /// Return a description of the expected arguments.
    fn args_schema(&self) -> Value;

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.args_schema(),
        }
    }
}

pub trait ToolInputT {
    fn io_schema() -> &'static str;
}

/// Decodes tool arguments, treating `null` as an empty object so that
/// tools whose inputs are all optional accept a bare invocation.
pub fn decode_args<T: serde::de::DeserializeOwned>(args: Value) -> Result<T, ToolCallError> {
    let args = match args {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    Ok(serde_json::from_value(args)?)
}
