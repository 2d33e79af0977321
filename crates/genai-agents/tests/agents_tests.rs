use genai_agents::agents::{
    BriefingAgent, DateAgent, IndustryAgent, IndustryExtractors, ResearchAgent, StrategyAgent,
    WeatherAgent, OPPORTUNITY_HEURISTIC,
};
use genai_agents::core::config::AgentConfig;
use genai_agents::core::context::AgentContext;
use genai_agents::core::extract::CandidateExtractor;
use genai_agents::core::tool::{ToolRuntime, ToolT};
use genai_agents::providers::search::SearchHit;
use genai_agents::AgentKind;
use genai_agents_test_utils::{MockCompletion, MockSearch, MockWeather, StubServer};
use regex::Regex;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn ctx(tool: &dyn ToolT) -> AgentContext {
    AgentContext::detached(tool.name())
}

fn linkedin_hits() -> Vec<SearchHit> {
    vec![
        SearchHit::new(
            "Alice Smith - VP Engineering",
            "https://www.linkedin.com/in/alice",
            "Alice worked as VP of Engineering at Acme Corporation",
        ),
        SearchHit::new(
            "Alice Smith bio",
            "https://example.com/alice",
            "Studied computer science at a university",
        ),
    ]
}

#[tokio::test]
async fn test_research_fallback_makes_no_calls() {
    let search = Arc::new(MockSearch::new(linkedin_hits()));
    let agent = ResearchAgent::new(&AgentConfig::default(), search.clone());
    assert!(!agent.is_live());

    let outcome = agent
        .execute(
            &ctx(&agent),
            json!({"participants": "Alice, Bob ,Carol", "meeting_context": "Partnership"}),
        )
        .await
        .unwrap();

    assert!(outcome.is_fallback());
    assert_eq!(search.calls(), 0);
    let report = outcome.into_inner();
    assert_eq!(report["participants_researched"], 3);
    assert_eq!(
        report["summary"],
        "Research completed for 3 participants: Alice, Bob, Carol"
    );
    let names: Vec<&str> = report["research_findings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    assert_eq!(
        report["research_findings"][1]["linkedin_profile"],
        "LinkedIn profile research needed for Bob"
    );
}

#[tokio::test]
async fn test_research_live_runs_four_searches_per_participant() {
    let search = Arc::new(MockSearch::new(linkedin_hits()));
    let config = AgentConfig::default().with_serper_api_key("key");
    let agent = ResearchAgent::new(&config, search.clone());

    let outcome = agent
        .execute(
            &ctx(&agent),
            json!({"participants": "Alice", "meeting_context": "Partnership"}),
        )
        .await
        .unwrap();

    assert!(outcome.is_live());
    assert_eq!(
        search.queries(),
        vec![
            "Alice LinkedIn profile",
            "Alice professional experience",
            "Alice company background",
            "Alice education background",
        ]
    );
    let profile = &outcome.value()["research_findings"][0];
    assert_eq!(
        profile["linkedin_profile"],
        "LinkedIn Profile: Alice Smith - VP Engineering - Alice worked as VP of Engineering at Acme Corporation"
    );
    assert_eq!(
        profile["experience"],
        json!(["Alice Smith - VP Engineering: Alice worked as VP of Engineering at Acme Corporation"])
    );
    assert_eq!(
        profile["education"],
        json!(["Alice Smith bio: Studied computer science at a university"])
    );
    assert!(profile["company_info"]
        .as_str()
        .unwrap()
        .starts_with("Company Info: Alice Smith - VP Engineering"));
    assert_eq!(profile["professional_summary"], "");
}

#[tokio::test]
async fn test_research_live_search_failures_use_not_found_values() {
    let search = Arc::new(MockSearch::failing());
    let config = AgentConfig::default().with_serper_api_key("key");
    let agent = ResearchAgent::new(&config, search.clone());

    let outcome = agent
        .execute(
            &ctx(&agent),
            json!({"participants": "Dana", "meeting_context": ""}),
        )
        .await
        .unwrap();

    assert_eq!(search.calls(), 4);
    let profile = &outcome.value()["research_findings"][0];
    assert_eq!(profile["linkedin_profile"], "LinkedIn profile information not found");
    assert_eq!(profile["company_info"], "Company information not found");
    assert_eq!(profile["experience"], json!([]));
}

#[tokio::test]
async fn test_research_over_http_with_server_errors() {
    let server = StubServer::start(500, r#"{"message":"boom"}"#).await.unwrap();
    let mut config = AgentConfig::default()
        .with_serper_api_key("KEY")
        .with_http_timeout(Duration::from_secs(5));
    config.endpoints.serper = Some(server.base_url().to_string());
    let agent = AgentKind::Research.build(&config).unwrap();

    let outcome = agent
        .execute(
            &ctx(agent.as_ref()),
            json!({"participants": "Ada", "meeting_context": "Intro call"}),
        )
        .await
        .unwrap();

    assert!(outcome.is_live());
    let profile = &outcome.value()["research_findings"][0];
    assert_eq!(profile["linkedin_profile"], "LinkedIn profile information not found");
    assert_eq!(profile["company_info"], "Company information not found");
    assert_eq!(profile["experience"], json!([]));
    assert_eq!(profile["education"], json!([]));

    let queries: Vec<Value> = server
        .requests()
        .iter()
        .map(|request| request.json_body().unwrap()["q"].clone())
        .collect();
    assert_eq!(
        queries,
        vec![
            json!("Ada LinkedIn profile"),
            json!("Ada professional experience"),
            json!("Ada company background"),
            json!("Ada education background"),
        ]
    );
}

#[tokio::test]
async fn test_empty_participants_yield_one_empty_entry() {
    let agent = ResearchAgent::new(&AgentConfig::default(), Arc::new(MockSearch::default()));
    let outcome = agent
        .execute(&ctx(&agent), json!({"participants": "", "meeting_context": ""}))
        .await
        .unwrap();
    let report = outcome.into_inner();
    assert_eq!(report["participants_researched"], 1);
    assert_eq!(report["research_findings"][0]["name"], "");
}

#[tokio::test]
async fn test_industry_fallback_makes_no_calls() {
    let search = Arc::new(MockSearch::default());
    let agent = IndustryAgent::new(&AgentConfig::default(), search.clone());

    let outcome = agent
        .execute(
            &ctx(&agent),
            json!({"participants": "Ann, Ben", "meeting_context": "Retail expansion talk"}),
        )
        .await
        .unwrap();

    assert!(outcome.is_fallback());
    assert_eq!(search.calls(), 0);
    let report = outcome.into_inner();
    assert_eq!(report["industries_covered"], json!(["Retail"]));
    assert_eq!(report["participants_analyzed"], 2);
    assert_eq!(
        report["industry_analysis"]["industry_trends"][0]["challenges"],
        json!(["Challenge analysis needed for Retail"])
    );
    assert_eq!(
        report["summary"],
        "Industry analysis completed for 1 industries covering 2 participants"
    );
}

#[tokio::test]
async fn test_industry_live_extracts_in_keyword_order() {
    let search = Arc::new(MockSearch::new(vec![SearchHit::new(
        "Healthcare outlook",
        "https://example.com",
        "Artificial Intelligence adoption grows alongside Cloud Computing; compliance remains hard",
    )]));
    let config = AgentConfig::default().with_exa_api_key("key");
    let agent = IndustryAgent::new(&config, search.clone());

    let outcome = agent
        .execute(
            &ctx(&agent),
            json!({"participants": "Ann", "meeting_context": "healthcare"}),
        )
        .await
        .unwrap();

    assert!(outcome.is_live());
    assert_eq!(search.calls(), 5);
    let profile = &outcome.value()["industry_analysis"]["industry_trends"][0];
    assert_eq!(
        profile["current_trends"],
        json!([
            "Growing emphasis on cloud computing",
            "Growing emphasis on artificial intelligence"
        ])
    );
    assert_eq!(profile["challenges"], json!(["Managing compliance challenges"]));
    assert_eq!(
        profile["competitive_insights"],
        json!(["Competitive Insight: Healthcare outlook"])
    );
    assert_eq!(
        profile["tech_disruptions"],
        json!(["Tech Disruption: Healthcare outlook"])
    );
}

/// Returns a fixed list and remembers the text it was given.
struct ScriptedExtractor {
    output: Vec<&'static str>,
    seen: Mutex<Vec<String>>,
}

impl ScriptedExtractor {
    fn new(output: Vec<&'static str>) -> Self {
        Self {
            output,
            seen: Mutex::new(Vec::new()),
        }
    }
}

impl CandidateExtractor for ScriptedExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        self.seen.lock().unwrap().push(text.to_string());
        self.output.iter().map(|entry| entry.to_string()).collect()
    }
}

#[tokio::test]
async fn test_industry_uses_injected_extractors() {
    let search = Arc::new(MockSearch::new(vec![SearchHit::new(
        "Energy outlook",
        "https://example.com",
        "Grid storage and expansion into new regions",
    )]));
    let trends = Arc::new(ScriptedExtractor::new(vec![
        "Grid storage build-out",
        "Utility consolidation",
        "Demand response",
        "Hydrogen pilots",
    ]));
    let challenges = Arc::new(ScriptedExtractor::new(vec!["Interconnection queues"]));
    let config = AgentConfig::default().with_exa_api_key("key");
    let agent = IndustryAgent::new(&config, search).with_extractors(IndustryExtractors {
        trends: trends.clone(),
        challenges: challenges.clone(),
        opportunities: Arc::new(OPPORTUNITY_HEURISTIC),
    });

    let outcome = agent
        .execute(
            &ctx(&agent),
            json!({"participants": "Ann", "meeting_context": "energy"}),
        )
        .await
        .unwrap();

    let profile = &outcome.value()["industry_analysis"]["industry_trends"][0];
    assert_eq!(
        profile["current_trends"],
        json!(["Grid storage build-out", "Utility consolidation", "Demand response"])
    );
    assert_eq!(profile["challenges"], json!(["Interconnection queues"]));
    assert_eq!(profile["growth_opportunities"], json!(["Opportunity in expansion"]));

    let seen = trends.seen.lock().unwrap().clone();
    assert_eq!(seen, vec!["Energy outlook Grid storage and expansion into new regions"]);
    assert_eq!(challenges.seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_strategy_fallback_has_no_ai_fields() {
    let completion = Arc::new(MockCompletion::new("unused"));
    let agent = StrategyAgent::new(&AgentConfig::default(), completion.clone());

    let outcome = agent
        .execute(
            &ctx(&agent),
            json!({"meeting_context": "Q3 review", "meeting_objective": "Renew contract"}),
        )
        .await
        .unwrap();

    assert!(outcome.is_fallback());
    assert_eq!(completion.calls(), 0);
    let report = outcome.into_inner();
    assert!(report["strategy_components"].get("ai_generated").is_none());
    assert_eq!(report["summary"], "Strategic meeting plan developed for: Renew contract");
}

#[tokio::test]
async fn test_strategy_live_merges_ai_content() {
    let completion = Arc::new(MockCompletion::new("{\"advanced_conversation_starters\": []}"));
    let config = AgentConfig::default().with_google_api_key("key");
    let agent = StrategyAgent::new(&config, completion.clone());

    let outcome = agent
        .execute(
            &ctx(&agent),
            json!({"meeting_context": "Q3 review", "meeting_objective": "Renew contract"}),
        )
        .await
        .unwrap();

    assert!(outcome.is_live());
    assert_eq!(completion.calls(), 1);
    assert!(completion.requests()[0].prompt.contains("Q3 review"));
    let components = &outcome.value()["strategy_components"];
    assert_eq!(components["ai_generated"], true);
    assert_eq!(
        components["ai_enhanced_content"],
        "{\"advanced_conversation_starters\": []}"
    );
}

#[tokio::test]
async fn test_strategy_live_failure_is_reported_inline() {
    let config = AgentConfig::default().with_google_api_key("key");
    let agent = StrategyAgent::new(&config, Arc::new(MockCompletion::failing()));

    let outcome = agent
        .execute(
            &ctx(&agent),
            json!({"meeting_context": "c", "meeting_objective": "o"}),
        )
        .await
        .unwrap();

    assert!(outcome.is_live());
    assert!(outcome.value().get("error").is_none());
    assert_eq!(outcome.value()["summary"], "Strategic meeting plan developed for: o");
    let components = &outcome.value()["strategy_components"];
    assert_eq!(components["ai_generated"], false);
    assert_eq!(components["ai_enhanced_content"], "AI enhancement not available");
    assert!(components["error"].as_str().unwrap().contains("mock failure"));
}

#[tokio::test]
async fn test_briefing_fallback_and_timestamp() {
    let completion = Arc::new(MockCompletion::new("insights"));
    let agent = BriefingAgent::new(&AgentConfig::default(), completion.clone());

    let outcome = agent
        .execute(
            &ctx(&agent),
            json!({"meeting_context": "Kickoff", "meeting_objective": "Align scope"}),
        )
        .await
        .unwrap();

    assert!(outcome.is_fallback());
    assert_eq!(completion.calls(), 0);
    let report = outcome.into_inner();
    let header = &report["briefing_document"]["briefing_header"];
    let stamp = Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").unwrap();
    assert!(stamp.is_match(header["generated_at"].as_str().unwrap()));
    assert_eq!(header["meeting_objective"], "Align scope");
    assert!(report["briefing_document"]["supplementary_materials"]
        .get("ai_enhanced_insights")
        .is_none());
}

#[tokio::test]
async fn test_briefing_live_insights() {
    let completion = Arc::new(MockCompletion::new("Three insights"));
    let config = AgentConfig::default().with_google_api_key("key");
    let agent = BriefingAgent::new(&config, completion.clone());

    let outcome = agent
        .execute(
            &ctx(&agent),
            json!({"meeting_context": "Kickoff", "meeting_objective": "Align scope"}),
        )
        .await
        .unwrap();

    assert_eq!(completion.requests()[0].temperature, Some(0.7));
    assert_eq!(
        outcome.value()["briefing_document"]["supplementary_materials"]["ai_enhanced_insights"],
        "Three insights"
    );
}

#[tokio::test]
async fn test_briefing_live_failure_message() {
    let config = AgentConfig::default().with_google_api_key("key");
    let agent = BriefingAgent::new(&config, Arc::new(MockCompletion::failing()));

    let outcome = agent
        .execute(
            &ctx(&agent),
            json!({"meeting_context": "Kickoff", "meeting_objective": "Align scope"}),
        )
        .await
        .unwrap();

    let insights = outcome.value()["briefing_document"]["supplementary_materials"]
        ["ai_enhanced_insights"]
        .as_str()
        .unwrap();
    assert!(insights.starts_with("AI enhancement not available: "));
    assert!(outcome.is_live());
    assert!(outcome.value().get("error").is_none());
    assert_eq!(
        outcome.value()["summary"],
        "Comprehensive 5-part meeting briefing compiled for: Align scope"
    );
}

#[tokio::test]
async fn test_date_agent_format() {
    let agent = DateAgent;
    let outcome = agent.execute(&ctx(&agent), Value::Null).await.unwrap();
    assert!(outcome.is_live());
    let date = outcome.into_inner();
    let pattern = Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$").unwrap();
    assert!(pattern.is_match(date.as_str().unwrap()));
}

#[tokio::test]
async fn test_weather_returns_exact_day_object() {
    let day = json!({
        "maxtemp_c": 21.4,
        "mintemp_c": 11.2,
        "condition": {"text": "Partly cloudy", "code": 1003}
    });
    let weather = Arc::new(MockWeather::new(json!({
        "location": {"name": "Oslo"},
        "forecast": {"forecastday": [{"date": "2025-06-01", "day": day.clone(), "hour": []}]}
    })));
    let config = AgentConfig::default().with_weather_api_key("key");
    let agent = WeatherAgent::new(&config, weather.clone());

    let outcome = agent
        .execute(&ctx(&agent), json!({"city_name": "Oslo", "date": "2025-06-01"}))
        .await
        .unwrap();

    assert!(outcome.is_live());
    assert_eq!(outcome.into_inner(), json!({ "weather_forecast": day }));
    assert_eq!(
        weather.requests(),
        vec![("Oslo".to_string(), "2025-06-01".to_string())]
    );
}

#[tokio::test]
async fn test_weather_errors_echo_inputs() {
    let config = AgentConfig::default().with_weather_api_key("key");

    for weather in [
        MockWeather::failing(),
        MockWeather::new(json!({"error": {"message": "No matching location found."}})),
    ] {
        let agent = WeatherAgent::new(&config, Arc::new(weather));
        let record = agent
            .execute(&ctx(&agent), json!({"city_name": "Atlantis", "date": "2025-13-01"}))
            .await
            .unwrap()
            .into_inner();

        assert!(record["error"]
            .as_str()
            .unwrap()
            .starts_with("Weather agent encountered an error: "));
        assert_eq!(record["city_name"], "Atlantis");
        assert_eq!(record["date"], "2025-13-01");
    }
}

#[tokio::test]
async fn test_weather_fallback_makes_no_calls() {
    let weather = Arc::new(MockWeather::new(json!({})));
    let agent = WeatherAgent::new(&AgentConfig::default(), weather.clone());

    let outcome = agent
        .execute(&ctx(&agent), json!({"city_name": "Oslo", "date": "2025-06-01"}))
        .await
        .unwrap();

    assert!(outcome.is_fallback());
    assert_eq!(weather.calls(), 0);
    assert_eq!(outcome.value()["weather_forecast"], Value::Null);
    assert_eq!(outcome.value()["city_name"], "Oslo");
}

#[tokio::test]
async fn test_missing_required_argument_is_a_call_error() {
    let agent = WeatherAgent::new(&AgentConfig::default(), Arc::new(MockWeather::default()));
    let err = agent
        .execute(&ctx(&agent), json!({"city_name": "Oslo"}))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("date"));
}

#[test]
fn test_tool_schemas() {
    let agent = StrategyAgent::new(&AgentConfig::default(), Arc::new(MockCompletion::default()));
    let spec = agent.spec();
    assert_eq!(spec.name, "develop_meeting_strategy");
    assert_eq!(
        spec.parameters["properties"]["research_data"]["description"],
        "Research findings about the participants (optional)"
    );
    assert_eq!(
        spec.parameters["required"],
        json!(["meeting_context", "meeting_objective"])
    );
    assert_eq!(format!("{agent:?}"), "develop_meeting_strategy");

    let date = DateAgent.spec();
    assert_eq!(date.parameters["required"], json!([]));
}
