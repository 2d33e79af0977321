use async_trait::async_trait;
use genai_agents_core::context::AgentContext;
use genai_agents_core::outcome::Outcome;
use genai_agents_core::session::AgentSession;
use genai_agents_core::tool::{decode_args, ToolCallError, ToolInputT, ToolRuntime, ToolT};
use genai_agents_core::{tool, ToolInput};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Serialize, Deserialize, ToolInput, Debug)]
pub struct GreetArgs {
    #[input(description = "Who to greet")]
    name: String,
    #[input(description = "Greeting style", choice = ["formal", "casual"])]
    style: String,
    #[input(description = "Extra names", optional)]
    #[serde(default)]
    others: Vec<String>,
    times: Option<u32>,
}

#[tool(
    name = "greet",
    description = "Greet someone",
    input = GreetArgs
)]
struct GreetTool;

#[async_trait]
impl ToolRuntime for GreetTool {
    async fn execute(&self, _ctx: &AgentContext, args: Value) -> Result<Outcome<Value>, ToolCallError> {
        let args: GreetArgs = decode_args(args)?;
        let greeting = match args.style.as_str() {
            "formal" => format!("Good day, {}", args.name),
            _ => format!("Hi {}", args.name),
        };
        Ok(Outcome::Live(json!({
            "greeting": greeting,
            "others": args.others,
            "times": args.times.unwrap_or(1),
        })))
    }
}

#[test]
fn test_tool_metadata() {
    let tool = GreetTool;
    assert_eq!(tool.name(), "greet");
    assert_eq!(tool.description(), "Greet someone");
    assert_eq!(format!("{tool:?}"), "greet");
}

#[test]
fn test_generated_schema() {
    let schema = GreetTool.args_schema();
    assert_eq!(schema["type"], "object");
    assert_eq!(schema["properties"]["name"]["type"], "string");
    assert_eq!(schema["properties"]["name"]["description"], "Who to greet");
    assert_eq!(schema["properties"]["style"]["enum"], json!(["formal", "casual"]));
    assert_eq!(schema["properties"]["others"]["type"], "array");
    assert_eq!(schema["properties"]["others"]["items"]["type"], "string");
    assert_eq!(schema["properties"]["times"]["type"], "integer");
    assert_eq!(schema["required"], json!(["name", "style"]));

    let raw: Value = serde_json::from_str(GreetArgs::io_schema()).unwrap();
    assert_eq!(raw, schema);
}

#[tokio::test]
async fn test_macro_tool_runs_in_session() {
    let mut session = AgentSession::new(None);
    session.bind(Arc::new(GreetTool)).unwrap();
    assert_eq!(session.specs()[0].name, "greet");

    let outcome = session
        .invoke("greet", json!({"name": "Ada", "style": "formal"}))
        .await
        .unwrap();
    assert!(!outcome.is_fallback());
    assert_eq!(
        outcome.into_inner(),
        json!({"greeting": "Good day, Ada", "others": [], "times": 1})
    );
}
