//! Meeting strategy: static talking points and plans, optionally enhanced
//! by a Gemini completion.

use super::dedent;
use crate::error::AgentError;
use async_trait::async_trait;
use genai_agents_core::config::AgentConfig;
use genai_agents_core::context::AgentContext;
use genai_agents_core::outcome::Outcome;
use genai_agents_core::tool::{decode_args, ToolCallError, ToolInputT, ToolRuntime, ToolT};
use genai_agents_core::{tool, ToolInput};
use genai_agents_providers::completion::{CompletionProvider, CompletionRequest, Gemini};
use genai_agents_providers::http_client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::sync::Arc;

const CONVERSATION_STARTERS: &[&str] = &[
    "I'd love to hear your perspective on the current market situation",
    "What trends are you seeing in your industry?",
    "How has your experience been with similar initiatives?",
    "What's driving your interest in this area?",
    "What challenges are you currently facing?",
];

const COMMON_GROUND: &[&str] = &[
    "Shared industry challenges and opportunities",
    "Mutual interest in market growth",
    "Common goals for efficiency and innovation",
    "Shared commitment to quality and excellence",
    "Interest in sustainable business practices",
];

const MEETING_FLOW: &[&str] = &[
    "1. Opening and rapport building (5-10 minutes)",
    "2. Context setting and objective alignment (10-15 minutes)",
    "3. Main discussion and exploration (20-30 minutes)",
    "4. Address concerns and objections (10-15 minutes)",
    "5. Next steps and follow-up (5-10 minutes)",
];

const KEY_SUCCESS_FACTORS: &[&str] = &[
    "Active listening and engagement",
    "Clear articulation of value proposition",
    "Addressing concerns proactively",
    "Establishing clear next steps",
    "Building genuine rapport",
];

const PRE_MEETING_CHECKLIST: &[&str] = &[
    "Review participant backgrounds thoroughly",
    "Practice key talking points",
    "Prepare supporting materials",
    "Anticipate potential objections",
    "Set up meeting logistics",
];

const SUCCESS_METRICS: &[&str] = &[
    "Clear understanding of all parties' positions",
    "Agreement on next steps and timeline",
    "Positive rapport established",
    "Objective progress made",
    "Follow-up actions defined",
];

pub(crate) const AI_UNAVAILABLE: &str = "AI enhancement not available";

#[derive(Serialize, Deserialize, ToolInput, Debug)]
pub struct StrategyArgs {
    #[input(description = "Context or background information about the meeting")]
    pub meeting_context: String,
    #[input(description = "Your specific objective for this meeting")]
    pub meeting_objective: String,
    #[input(description = "Research findings about the participants (optional)", optional)]
    #[serde(default)]
    pub research_data: String,
    #[input(description = "Industry analysis and trends data (optional)", optional)]
    #[serde(default)]
    pub industry_analysis: String,
}

fn strategy_components(context: &str, objective: &str) -> Map<String, Value> {
    let talking_points = vec![
        format!("Opening discussion about {context}"),
        format!("Alignment on {objective}"),
        "Mutual benefits and value proposition".to_string(),
        "Timeline and implementation discussion".to_string(),
        "Resource requirements and commitments".to_string(),
        "Success metrics and measurement".to_string(),
        "Risk mitigation and contingencies".to_string(),
    ];
    let strategic_questions = vec![
        format!("How does this align with your current priorities regarding {context}?"),
        "What are the key success metrics you'd like to see?".to_string(),
        "What potential challenges do you foresee?".to_string(),
        "How can we ensure mutual value creation?".to_string(),
        "What would an ideal outcome look like for you?".to_string(),
        "What timeline are you working with?".to_string(),
        "Who else should be involved in this decision?".to_string(),
    ];
    let value_propositions = vec![
        format!("Direct value: Achievement of {objective}"),
        "Long-term partnership and collaboration opportunities".to_string(),
        "Market advantage and competitive positioning".to_string(),
        "Risk mitigation and shared expertise".to_string(),
        "Scalability and growth potential".to_string(),
    ];

    let mut components = Map::new();
    components.insert("talking_points".into(), json!(talking_points));
    components.insert("strategic_questions".into(), json!(strategic_questions));
    components.insert("conversation_starters".into(), json!(CONVERSATION_STARTERS));
    components.insert("value_propositions".into(), json!(value_propositions));
    components.insert(
        "potential_objections".into(),
        json!([
            {
                "objection": "Timeline concerns",
                "response": "We can discuss flexible timeline options and phased implementation"
            },
            {
                "objection": "Budget or resource constraints",
                "response": "Let's explore cost-effective approaches and ROI projections"
            },
            {
                "objection": "Risk concerns",
                "response": "We can address risk mitigation strategies and pilot programs"
            }
        ]),
    );
    components.insert("common_ground_areas".into(), json!(COMMON_GROUND));
    components
}

fn contingency_plans() -> Value {
    json!({
        "if_discussion_stalls": [
            "Use prepared conversation starters",
            "Ask open-ended questions about their challenges",
            "Share relevant industry insights"
        ],
        "if_objections_arise": [
            "Acknowledge concerns respectfully",
            "Ask clarifying questions to understand root issues",
            "Provide evidence-based responses"
        ],
        "if_time_runs_short": [
            "Focus on most critical priorities",
            "Schedule dedicated follow-up meeting",
            "Provide summary of key points"
        ]
    })
}

fn enhancement_prompt(context: &str, objective: &str) -> String {
    dedent(&format!(
        "
        Given this meeting context: {context}
        And this objective: {objective}

        Please provide:
        1. 3 sophisticated conversation starters
        2. 3 strategic questions that demonstrate industry knowledge
        3. 3 potential objections and how to address them

        Format as JSON with keys: advanced_conversation_starters, strategic_industry_questions, objection_responses
        "
    ))
}

#[tool(
    name = "develop_meeting_strategy",
    description = "Develop talking points, questions, and strategic angles for the meeting based on research and industry analysis.",
    input = StrategyArgs,
)]
pub struct StrategyAgent {
    completion: Arc<dyn CompletionProvider>,
    live: bool,
}

impl StrategyAgent {
    /// AI enhancement requires `GOOGLE_API_KEY`.
    pub fn new(config: &AgentConfig, completion: Arc<dyn CompletionProvider>) -> Self {
        Self {
            completion,
            live: config.credentials.google_api_key.is_some(),
        }
    }

    pub fn from_config(config: &AgentConfig) -> Result<Self, AgentError> {
        let mut gemini =
            Gemini::new(http_client(config.http_timeout)?).set_model(&config.gemini_model);
        if let Some(key) = &config.credentials.google_api_key {
            gemini = gemini.set_api_key(key);
        }
        if let Some(base_url) = &config.endpoints.gemini {
            gemini = gemini.set_base_url(base_url);
        }
        Ok(Self::new(config, Arc::new(gemini)))
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Fields merged into `strategy_components`. Provider failures are
    /// reported inside the fields rather than failing the report.
    async fn enhance(&self, ctx: &AgentContext, context: &str, objective: &str) -> Map<String, Value> {
        let request = CompletionRequest::new(enhancement_prompt(context, objective));
        let mut fields = Map::new();
        match self.completion.complete(&request).await {
            Ok(response) => {
                fields.insert("ai_enhanced_content".into(), Value::String(response.text));
                fields.insert("ai_generated".into(), Value::Bool(true));
            }
            Err(e) => {
                ctx.logger().warn(format!("AI enhancement failed: {e}"));
                fields.insert("ai_enhanced_content".into(), Value::String(AI_UNAVAILABLE.into()));
                fields.insert("ai_generated".into(), Value::Bool(false));
                fields.insert("error".into(), Value::String(e.to_string()));
            }
        }
        fields
    }

    /// Cannot fail: enhancement errors land inside `strategy_components`.
    async fn report(&self, ctx: &AgentContext, args: &StrategyArgs) -> Value {
        if !args.research_data.is_empty() || !args.industry_analysis.is_empty() {
            ctx.logger().debug("Prior research supplied; common ground areas stay generic");
        }
        let mut components = strategy_components(&args.meeting_context, &args.meeting_objective);
        if self.live {
            components.extend(
                self.enhance(ctx, &args.meeting_context, &args.meeting_objective)
                    .await,
            );
        }

        json!({
            "meeting_context": args.meeting_context,
            "meeting_objective": args.meeting_objective,
            "strategy_components": components,
            "meeting_flow_suggestions": MEETING_FLOW,
            "key_success_factors": KEY_SUCCESS_FACTORS,
            "contingency_plans": contingency_plans(),
            "pre_meeting_checklist": PRE_MEETING_CHECKLIST,
            "success_metrics": SUCCESS_METRICS,
            "summary": format!("Strategic meeting plan developed for: {}", args.meeting_objective),
        })
    }
}

#[async_trait]
impl ToolRuntime for StrategyAgent {
    async fn execute(&self, ctx: &AgentContext, args: Value) -> Result<Outcome<Value>, ToolCallError> {
        let args: StrategyArgs = decode_args(args)?;
        ctx.logger().info("Developing meeting strategy");

        let record = self.report(ctx, &args).await;
        ctx.logger().info("Meeting strategy developed successfully");

        Ok(if self.live {
            Outcome::Live(record)
        } else {
            Outcome::Fallback(record)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_use_inputs() {
        let components = strategy_components("Q3 review", "renew the contract");
        assert_eq!(
            components["talking_points"][0],
            "Opening discussion about Q3 review"
        );
        assert_eq!(
            components["value_propositions"][0],
            "Direct value: Achievement of renew the contract"
        );
        assert_eq!(components["potential_objections"].as_array().unwrap().len(), 3);
        assert!(!components.contains_key("ai_generated"));
    }

    #[test]
    fn test_prompt_is_flush_left() {
        let prompt = enhancement_prompt("ctx", "obj");
        assert!(prompt.starts_with("Given this meeting context: ctx"));
        assert!(prompt.contains("\nAnd this objective: obj\n"));
        assert!(!prompt.contains("        "));
    }

    #[test]
    fn test_optional_args_default_to_empty() {
        let args: StrategyArgs =
            decode_args(json!({"meeting_context": "c", "meeting_objective": "o"})).unwrap();
        assert_eq!(args.research_data, "");
        assert_eq!(args.industry_analysis, "");
    }

    #[test]
    fn test_schema_marks_optional_fields() {
        let schema: Value = serde_json::from_str(StrategyArgs::io_schema()).unwrap();
        assert_eq!(
            schema["required"],
            json!(["meeting_context", "meeting_objective"])
        );
    }
}
