use clap::Parser;
use genai_agents::core::config::AgentConfig;
use genai_agents::core::session::AgentSession;
use genai_agents::core::transport::LineTransport;
use genai_agents::AgentKind;
use log::{info, warn};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use strum::IntoEnumIterator;

/// Serve one meeting-preparation or utility agent over stdio
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Agent to serve, e.g. `research`, `weather`
    #[arg(short, long, required_unless_present = "list")]
    agent: Option<AgentKind>,

    /// Per-request HTTP timeout, overrides AGENT_HTTP_TIMEOUT_SECS
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    http_timeout_secs: Option<u64>,

    /// Print the available agents and exit
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.list {
        for kind in AgentKind::iter() {
            println!("{kind}");
        }
        return Ok(());
    }
    let Some(kind) = args.agent else {
        return Ok(());
    };

    let mut config = AgentConfig::from_env()?;
    if let Some(secs) = args.http_timeout_secs {
        config = config.with_http_timeout(Duration::from_secs(secs));
    }
    if let Some(key) = kind.missing_credential(&config) {
        warn!("{key} not set, {kind} agent will answer with fallback content");
    }
    if config.credentials.jwt_token.is_none() {
        warn!("JWT_TOKEN not set, connecting without a token");
    }

    let mut session = AgentSession::new(config.credentials.jwt_token.clone());
    session.bind(kind.build(&config)?)?;

    info!("Serving {kind} agent on stdio");
    session.process_events(Arc::new(LineTransport::stdio())).await?;
    Ok(())
}
