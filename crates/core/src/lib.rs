//! Runtime-facing building blocks shared by every agent: tool traits,
//! invocation context, configuration, the dispatcher protocol and the
//! session that serves tools over a transport.

pub mod config;
pub mod context;
mod error;
pub mod extract;
pub mod outcome;
pub mod protocol;
pub mod session;
pub mod tool;
pub mod transport;

pub use error::{ConfigError, SessionError};

// Re-export derive macros
pub use genai_agents_derive::{tool, ToolInput};
