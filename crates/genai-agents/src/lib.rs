//! Meeting preparation and utility agents.
//!
//! Every agent is a single tool bound to an [`AgentSession`](core::session::AgentSession).
//! Agents take their credentials and provider clients from an
//! [`AgentConfig`](core::config::AgentConfig); a missing credential puts
//! the agent in fallback mode, where it answers with placeholder content
//! and never touches the network.

// Re-export for convenience
pub use async_trait::async_trait;

pub use genai_agents_core::{self as core};
pub use genai_agents_providers::{self as providers, error as providers_error};

pub mod agents;
mod error;

pub use agents::AgentKind;
pub use error::AgentError;
