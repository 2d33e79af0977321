//! Current local date, no provider involved.

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use genai_agents_core::context::AgentContext;
use genai_agents_core::outcome::Outcome;
use genai_agents_core::tool::{ToolCallError, ToolInputT, ToolRuntime, ToolT};
use genai_agents_core::{tool, ToolInput};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, ToolInput, Debug)]
pub struct DateArgs {}

/// `YYYY-MM-DD`, zero padded.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[tool(
    name = "get_current_date",
    description = "Return current date",
    input = DateArgs,
)]
pub struct DateAgent;

#[async_trait]
impl ToolRuntime for DateAgent {
    async fn execute(&self, ctx: &AgentContext, _args: Value) -> Result<Outcome<Value>, ToolCallError> {
        ctx.logger().info("Inside get_current_date");
        Ok(Outcome::Live(Value::String(format_date(
            Local::now().date_naive(),
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_date(date), "2025-03-07");
    }
}
