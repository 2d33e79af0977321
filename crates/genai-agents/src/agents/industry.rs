//! Industry trend analysis over Exa search.
//!
//! Industries are detected in the meeting context with a keyword list. Each
//! one gets five searches, and their results are mapped into report fields
//! through [`CandidateExtractor`]s, falling back to result titles where an
//! extractor finds nothing.

use super::error_record;
use crate::error::AgentError;
use async_trait::async_trait;
use genai_agents_core::config::AgentConfig;
use genai_agents_core::context::AgentContext;
use genai_agents_core::extract::{split_list, title_case, CandidateExtractor, KeywordHeuristic};
use genai_agents_core::outcome::Outcome;
use genai_agents_core::tool::{decode_args, ToolCallError, ToolInputT, ToolRuntime, ToolT};
use genai_agents_core::{tool, ToolInput};
use genai_agents_providers::http_client;
use genai_agents_providers::search::{Exa, SearchProvider, SearchResults};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

const INDUSTRY_KEYWORDS: &[&str] = &[
    "technology",
    "tech",
    "software",
    "healthcare",
    "finance",
    "fintech",
    "manufacturing",
    "retail",
    "e-commerce",
    "consulting",
    "education",
    "energy",
    "automotive",
    "aerospace",
    "telecommunications",
    "media",
    "real estate",
    "construction",
    "hospitality",
    "entertainment",
];
const DEFAULT_INDUSTRIES: &[&str] = &["General Business", "Technology", "Market Analysis"];
const MAX_ENTRIES: usize = 3;

pub const TREND_HEURISTIC: KeywordHeuristic = KeywordHeuristic::new(
    &[
        "cloud computing",
        "artificial intelligence",
        "machine learning",
        "automation",
        "digital transformation",
        "sustainability",
        "cybersecurity",
        "remote work",
        "blockchain",
        "data analytics",
    ],
    "Growing emphasis on {keyword}",
    MAX_ENTRIES,
);

pub const CHALLENGE_HEURISTIC: KeywordHeuristic = KeywordHeuristic::new(
    &[
        "regulation",
        "compliance",
        "talent shortage",
        "supply chain",
        "inflation",
        "cybersecurity",
        "competition",
        "cost pressure",
    ],
    "Managing {keyword} challenges",
    MAX_ENTRIES,
);

pub const OPPORTUNITY_HEURISTIC: KeywordHeuristic = KeywordHeuristic::new(
    &[
        "expansion",
        "partnership",
        "innovation",
        "emerging markets",
        "acquisition",
        "digital channels",
        "sustainability",
    ],
    "Opportunity in {keyword}",
    MAX_ENTRIES,
);

const STRATEGIC_INSIGHTS: &[&str] = &[
    "Market consolidation opportunities exist in traditional sectors",
    "Digital transformation is creating new partnership possibilities",
    "Regulatory changes are opening new compliance-focused markets",
    "Sustainability initiatives are driving innovation investments",
    "Technology adoption gaps present consulting opportunities",
];

const KEY_FINDINGS: &[&str] = &[
    "Digital transformation is accelerating across industries",
    "Regulatory compliance is becoming more complex",
    "Sustainability initiatives are driving new opportunities",
    "AI and automation are reshaping competitive landscapes",
];

const STRATEGIC_RECOMMENDATIONS: &[&str] = &[
    "Focus on emerging technology adoption",
    "Address regulatory compliance proactively",
    "Explore sustainability partnerships",
    "Consider market consolidation opportunities",
];

#[derive(Serialize, Deserialize, ToolInput, Debug)]
pub struct IndustryArgs {
    #[input(description = "Names of the participants and their companies/industries")]
    pub participants: String,
    #[input(description = "Context or background information about the meeting")]
    pub meeting_context: String,
}

/// Industries named in `context`, title-cased and de-duplicated in keyword
/// list order. Overlapping keywords ("tech", "technology") both count.
pub fn detect_industries(context: &str) -> Vec<String> {
    let mut industries: Vec<String> = Vec::new();
    let haystack = context.to_lowercase();
    for keyword in INDUSTRY_KEYWORDS {
        if haystack.contains(keyword) {
            let industry = title_case(keyword);
            if !industries.contains(&industry) {
                industries.push(industry);
            }
        }
    }
    if industries.is_empty() {
        industries = DEFAULT_INDUSTRIES.iter().map(|s| s.to_string()).collect();
    }
    industries
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryProfile {
    pub industry: String,
    pub current_trends: Vec<String>,
    pub growth_opportunities: Vec<String>,
    pub challenges: Vec<String>,
    pub competitive_insights: Vec<String>,
    pub regulatory_updates: Vec<String>,
    pub tech_disruptions: Vec<String>,
}

impl IndustryProfile {
    fn placeholder(industry: &str) -> Self {
        Self {
            industry: industry.to_string(),
            current_trends: vec![format!("Current trends analysis needed for {industry}")],
            growth_opportunities: vec![format!(
                "Growth opportunity research required for {industry}"
            )],
            challenges: vec![format!("Challenge analysis needed for {industry}")],
            competitive_insights: vec![format!(
                "Competitive landscape research required for {industry}"
            )],
            regulatory_updates: vec![format!("Regulatory analysis needed for {industry}")],
            tech_disruptions: vec![format!(
                "Technology disruption research required for {industry}"
            )],
        }
    }
}

/// Text-to-candidate components used on search results.
#[derive(Clone)]
pub struct IndustryExtractors {
    pub trends: Arc<dyn CandidateExtractor>,
    pub challenges: Arc<dyn CandidateExtractor>,
    pub opportunities: Arc<dyn CandidateExtractor>,
}

impl Default for IndustryExtractors {
    fn default() -> Self {
        Self {
            trends: Arc::new(TREND_HEURISTIC),
            challenges: Arc::new(CHALLENGE_HEURISTIC),
            opportunities: Arc::new(OPPORTUNITY_HEURISTIC),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndustryQuery {
    Trends,
    ChallengesOpportunities,
    Competitive,
    Regulatory,
    Technology,
}

impl IndustryQuery {
    const ALL: [IndustryQuery; 5] = [
        IndustryQuery::Trends,
        IndustryQuery::ChallengesOpportunities,
        IndustryQuery::Competitive,
        IndustryQuery::Regulatory,
        IndustryQuery::Technology,
    ];

    fn query(self, industry: &str) -> String {
        match self {
            IndustryQuery::Trends => format!("{industry} industry trends 2025"),
            IndustryQuery::ChallengesOpportunities => {
                format!("{industry} market challenges opportunities")
            }
            IndustryQuery::Competitive => format!("{industry} competitive landscape analysis"),
            IndustryQuery::Regulatory => format!("{industry} regulatory changes 2025"),
            IndustryQuery::Technology => format!("{industry} technology disruption innovation"),
        }
    }

    fn apply(
        self,
        profile: &mut IndustryProfile,
        results: &SearchResults,
        extractors: &IndustryExtractors,
    ) {
        let corpus = results.corpus();
        match self {
            IndustryQuery::Trends => {
                profile.current_trends =
                    extract_or_titles(extractors.trends.as_ref(), &corpus, results, "Trend")
            }
            IndustryQuery::ChallengesOpportunities => {
                profile.challenges = extract_or_titles(
                    extractors.challenges.as_ref(),
                    &corpus,
                    results,
                    "Challenge",
                );
                profile.growth_opportunities = capped(extractors.opportunities.extract(&corpus));
            }
            IndustryQuery::Competitive => {
                profile.competitive_insights = titled(results, "Competitive Insight")
            }
            IndustryQuery::Regulatory => {
                profile.regulatory_updates = titled(results, "Regulatory Update")
            }
            IndustryQuery::Technology => profile.tech_disruptions = titled(results, "Tech Disruption"),
        }
    }

    /// Substituted for this query's fields when the search fails.
    fn unavailable(self, profile: &mut IndustryProfile) {
        let industry = profile.industry.clone();
        match self {
            IndustryQuery::Trends => {
                profile.current_trends = vec![format!("Trend data unavailable for {industry}")]
            }
            IndustryQuery::ChallengesOpportunities => {
                profile.challenges = vec![format!("Challenge data unavailable for {industry}")];
                profile.growth_opportunities =
                    vec![format!("Opportunity data unavailable for {industry}")];
            }
            IndustryQuery::Competitive => {
                profile.competitive_insights =
                    vec![format!("Competitive data unavailable for {industry}")]
            }
            IndustryQuery::Regulatory => {
                profile.regulatory_updates =
                    vec![format!("Regulatory data unavailable for {industry}")]
            }
            IndustryQuery::Technology => {
                profile.tech_disruptions =
                    vec![format!("Technology data unavailable for {industry}")]
            }
        }
    }
}

fn capped(mut entries: Vec<String>) -> Vec<String> {
    entries.truncate(MAX_ENTRIES);
    entries
}

fn titled(results: &SearchResults, label: &str) -> Vec<String> {
    results
        .hits
        .iter()
        .take(MAX_ENTRIES)
        .map(|hit| format!("{label}: {}", hit.title))
        .collect()
}

fn extract_or_titles(
    extractor: &dyn CandidateExtractor,
    corpus: &str,
    results: &SearchResults,
    label: &str,
) -> Vec<String> {
    let found = capped(extractor.extract(corpus));
    if found.is_empty() {
        titled(results, label)
    } else {
        found
    }
}

#[tool(
    name = "analyze_meeting_industry_trends",
    description = "Analyze current industry trends, challenges, and opportunities relevant to the meeting participants and context.",
    input = IndustryArgs,
)]
pub struct IndustryAgent {
    search: Arc<dyn SearchProvider>,
    extractors: IndustryExtractors,
    live: bool,
}

impl IndustryAgent {
    /// Live mode requires `EXA_API_KEY`.
    pub fn new(config: &AgentConfig, search: Arc<dyn SearchProvider>) -> Self {
        Self {
            search,
            extractors: IndustryExtractors::default(),
            live: config.credentials.exa_api_key.is_some(),
        }
    }

    pub fn from_config(config: &AgentConfig) -> Result<Self, AgentError> {
        let mut exa = Exa::new(http_client(config.http_timeout)?);
        if let Some(key) = &config.credentials.exa_api_key {
            exa = exa.set_api_key(key);
        }
        if let Some(base_url) = &config.endpoints.exa {
            exa = exa.set_base_url(base_url);
        }
        Ok(Self::new(config, Arc::new(exa)))
    }

    /// Replaces the keyword heuristics.
    pub fn with_extractors(mut self, extractors: IndustryExtractors) -> Self {
        self.extractors = extractors;
        self
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    async fn analyze(&self, ctx: &AgentContext, industry: &str) -> IndustryProfile {
        let mut profile = IndustryProfile {
            industry: industry.to_string(),
            ..IndustryProfile::default()
        };
        for kind in IndustryQuery::ALL {
            let query = kind.query(industry);
            match self.search.search(&query).await {
                Ok(results) => kind.apply(&mut profile, &results, &self.extractors),
                Err(e) => {
                    ctx.logger().warn(format!("Search failed for {query}: {e}"));
                    kind.unavailable(&mut profile);
                }
            }
        }
        profile
    }

    async fn report(&self, ctx: &AgentContext, args: &IndustryArgs) -> Result<Value, AgentError> {
        let participants = split_list(&args.participants);
        let industries = detect_industries(&args.meeting_context);

        let mut profiles = Vec::with_capacity(industries.len());
        for industry in &industries {
            ctx.logger().info(format!("Analyzing industry: {industry}"));
            let profile = if self.live {
                self.analyze(ctx, industry).await
            } else {
                IndustryProfile::placeholder(industry)
            };
            profiles.push(profile);
        }

        Ok(json!({
            "meeting_context": args.meeting_context,
            "participants_analyzed": participants.len(),
            "industries_covered": industries,
            "industry_analysis": {
                "industry_trends": serde_json::to_value(&profiles)?,
                "market_challenges": [],
                "opportunities": [],
                "competitive_landscape": [],
                "regulatory_environment": [],
                "technology_disruptions": [],
            },
            "strategic_insights": STRATEGIC_INSIGHTS,
            "key_findings": KEY_FINDINGS,
            "strategic_recommendations": STRATEGIC_RECOMMENDATIONS,
            "summary": format!(
                "Industry analysis completed for {} industries covering {} participants",
                industries.len(),
                participants.len()
            ),
        }))
    }
}

#[async_trait]
impl ToolRuntime for IndustryAgent {
    async fn execute(&self, ctx: &AgentContext, args: Value) -> Result<Outcome<Value>, ToolCallError> {
        let args: IndustryArgs = decode_args(args)?;
        ctx.logger().info("Starting industry analysis");

        let record = match self.report(ctx, &args).await {
            Ok(report) => {
                ctx.logger().info("Industry analysis completed successfully");
                report
            }
            Err(e) => {
                ctx.logger().error(format!("Industry analysis failed: {e}"));
                error_record(
                    "Industry analysis agent",
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
