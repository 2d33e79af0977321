//! Participant research over web search.

use super::error_record;
use crate::error::AgentError;
use async_trait::async_trait;
use genai_agents_core::config::AgentConfig;
use genai_agents_core::context::AgentContext;
use genai_agents_core::extract::{contains_any, split_list};
use genai_agents_core::outcome::Outcome;
use genai_agents_core::tool::{decode_args, ToolCallError, ToolInputT, ToolRuntime, ToolT};
use genai_agents_core::{tool, ToolInput};
use genai_agents_providers::http_client;
use genai_agents_providers::search::{SearchProvider, SearchResults, Serper};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

const EXPERIENCE_KEYWORDS: &[&str] = &["experience", "worked", "position", "role"];
const EDUCATION_KEYWORDS: &[&str] = &["education", "university", "degree", "studied"];
const COMPANY_KEYWORDS: &[&str] = &["company", "corporation", "organization"];
const MAX_ENTRIES: usize = 3;

const RECOMMENDATIONS: &[&str] = &[
    "Review each participant's professional background before the meeting",
    "Identify common interests and professional connections",
    "Prepare relevant talking points based on their experience",
    "Consider their industry expertise when planning discussion topics",
];

#[derive(Serialize, Deserialize, ToolInput, Debug)]
pub struct ResearchArgs {
    #[input(description = "Names of the participants (other than you) in the meeting. Comma-separated list.")]
    pub participants: String,
    #[input(description = "Context or background information about the meeting.")]
    pub meeting_context: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantProfile {
    pub name: String,
    pub professional_summary: String,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub company_info: String,
    pub linkedin_profile: String,
    pub key_achievements: Vec<String>,
    pub industry_connections: Vec<String>,
}

impl ParticipantProfile {
    fn placeholder(name: &str) -> Self {
        Self {
            name: name.to_string(),
            professional_summary: format!("Professional research needed for {name}"),
            experience: vec![format!("Experience research required for {name}")],
            education: vec![format!("Education background research needed for {name}")],
            company_info: format!("Company information research required for {name}"),
            linkedin_profile: format!("LinkedIn profile research needed for {name}"),
            key_achievements: vec![format!("Achievement research required for {name}")],
            industry_connections: vec![format!("Network research needed for {name}")],
        }
    }
}

/// The four searches run per participant, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResearchQuery {
    LinkedIn,
    Experience,
    Company,
    Education,
}

impl ResearchQuery {
    const ALL: [ResearchQuery; 4] = [
        ResearchQuery::LinkedIn,
        ResearchQuery::Experience,
        ResearchQuery::Company,
        ResearchQuery::Education,
    ];

    fn query(self, participant: &str) -> String {
        match self {
            ResearchQuery::LinkedIn => format!("{participant} LinkedIn profile"),
            ResearchQuery::Experience => format!("{participant} professional experience"),
            ResearchQuery::Company => format!("{participant} company background"),
            ResearchQuery::Education => format!("{participant} education background"),
        }
    }

    /// A failed search is applied as an empty result set, which yields the
    /// "not found" texts and empty lists.
    fn apply(self, profile: &mut ParticipantProfile, results: &SearchResults) {
        match self {
            ResearchQuery::LinkedIn => profile.linkedin_profile = linkedin_info(results),
            ResearchQuery::Experience => {
                profile.experience = snippets_matching(results, EXPERIENCE_KEYWORDS)
            }
            ResearchQuery::Company => profile.company_info = company_info(results),
            ResearchQuery::Education => {
                profile.education = snippets_matching(results, EDUCATION_KEYWORDS)
            }
        }
    }
}

fn linkedin_info(results: &SearchResults) -> String {
    results
        .hits
        .iter()
        .find(|hit| hit.link.contains("linkedin.com"))
        .map(|hit| format!("LinkedIn Profile: {} - {}", hit.title, hit.snippet))
        .unwrap_or_else(|| "LinkedIn profile information not found".to_string())
}

fn company_info(results: &SearchResults) -> String {
    results
        .hits
        .iter()
        .find(|hit| contains_any(&hit.snippet, COMPANY_KEYWORDS))
        .map(|hit| format!("Company Info: {} - {}", hit.title, hit.snippet))
        .unwrap_or_else(|| "Company information not found".to_string())
}

fn snippets_matching(results: &SearchResults, keywords: &[&str]) -> Vec<String> {
    results
        .hits
        .iter()
        .filter(|hit| contains_any(&hit.snippet, keywords))
        .take(MAX_ENTRIES)
        .map(|hit| format!("{}: {}", hit.title, hit.snippet))
        .collect()
}

#[tool(
    name = "research_meeting_participants",
    description = "Conduct thorough research on people and companies involved in the meeting. Prioritizes data from LinkedIn such as About, Experience, and Education sections.",
    input = ResearchArgs,
)]
pub struct ResearchAgent {
    search: Arc<dyn SearchProvider>,
    live: bool,
}

impl ResearchAgent {
    /// Live mode requires `SERPER_API_KEY`; `search` is never called otherwise.
    pub fn new(config: &AgentConfig, search: Arc<dyn SearchProvider>) -> Self {
        Self {
            search,
            live: config.credentials.serper_api_key.is_some(),
        }
    }

    pub fn from_config(config: &AgentConfig) -> Result<Self, AgentError> {
        let mut serper = Serper::new(http_client(config.http_timeout)?);
        if let Some(key) = &config.credentials.serper_api_key {
            serper = serper.set_api_key(key);
        }
        if let Some(base_url) = &config.endpoints.serper {
            serper = serper.set_base_url(base_url);
        }
        Ok(Self::new(config, Arc::new(serper)))
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    async fn research(&self, ctx: &AgentContext, participant: &str) -> ParticipantProfile {
        let mut profile = ParticipantProfile {
            name: participant.to_string(),
            ..ParticipantProfile::default()
        };
        for kind in ResearchQuery::ALL {
            let query = kind.query(participant);
            let results = match self.search.search(&query).await {
                Ok(results) => results,
                Err(e) => {
                    ctx.logger().warn(format!("Search failed for {query}: {e}"));
                    SearchResults::default()
                }
            };
            kind.apply(&mut profile, &results);
        }
        profile
    }

    async fn report(&self, ctx: &AgentContext, args: &ResearchArgs) -> Result<Value, AgentError> {
        let participants = split_list(&args.participants);
        let mut findings = Vec::with_capacity(participants.len());
        for participant in &participants {
            ctx.logger().info(format!("Researching participant: {participant}"));
            let profile = if self.live {
                self.research(ctx, participant).await
            } else {
                ParticipantProfile::placeholder(participant)
            };
            findings.push(profile);
        }

        Ok(json!({
            "meeting_context": args.meeting_context,
            "participants_researched": participants.len(),
            "research_findings": serde_json::to_value(&findings)?,
            "summary": format!(
                "Research completed for {} participants: {}",
                participants.len(),
                participants.join(", ")
            ),
            "recommendations": RECOMMENDATIONS,
        }))
    }
}

#[async_trait]
impl ToolRuntime for ResearchAgent {
    async fn execute(&self, ctx: &AgentContext, args: Value) -> Result<Outcome<Value>, ToolCallError> {
        let args: ResearchArgs = decode_args(args)?;
        ctx.logger().info("Starting participant research");

        let record = match self.report(ctx, &args).await {
            Ok(report) => {
                ctx.logger().info("Research completed successfully");
                report
            }
            Err(e) => {
                ctx.logger().error(format!("Research failed: {e}"));
                error_record(
                    "Research agent",
                    &e,
                    &[
                        ("participants", args.participants.as_str()),
                        ("context", args.meeting_context.as_str()),
                    ],
                )
            }
        };

        Ok(if self.live {
            Outcome::Live(record)
        } else {
            Outcome::Fallback(record)
        })
    }
}
