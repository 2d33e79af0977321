use crate::context::AgentContext;
use crate::error::SessionError;
use crate::outcome::Outcome;
use crate::protocol::{Inbound, InvocationId, Outbound};
use crate::tool::{ToolSpec, ToolT};
use crate::transport::Transport;
use log::{debug, error, info, warn};
use serde_json::Value;
use std::sync::Arc;
use tokio::task::JoinSet;
use uuid::Uuid;

/// Binds tools to a dispatcher connection and serves their invocations.
#[derive(Debug, Default)]
pub struct AgentSession {
    jwt_token: Option<String>,
    tools: Vec<Arc<dyn ToolT>>,
}

impl AgentSession {
    pub fn new(jwt_token: Option<String>) -> Self {
        Self {
            jwt_token,
            tools: Vec::new(),
        }
    }

    /// Registers a tool under its literal name. Names must be unique.
    pub fn bind(&mut self, tool: Arc<dyn ToolT>) -> Result<(), SessionError> {
        if self.tool(tool.name()).is_some() {
            return Err(SessionError::DuplicateTool(tool.name().to_string()));
        }
        info!("Binding tool: {}", tool.name());
        self.tools.push(tool);
        Ok(())
    }

    pub fn tool(&self, name: &str) -> Option<Arc<dyn ToolT>> {
        self.tools.iter().find(|tool| tool.name() == name).cloned()
    }

    /// Specs of every bound tool, in bind order.
    pub fn specs(&self) -> Vec<ToolSpec> {
        self.tools.iter().map(|tool| tool.spec()).collect()
    }

    /// Runs one invocation in the current task, bypassing any transport.
    pub async fn invoke(&self, name: &str, arguments: Value) -> Result<Outcome<Value>, SessionError> {
        let tool = self
            .tool(name)
            .ok_or_else(|| SessionError::ToolNotFound(name.to_string()))?;
        let ctx = AgentContext::new(name, Uuid::new_v4());
        Ok(tool.execute(&ctx, arguments).await?)
    }

    /// Announces the bound tools, then serves invocations until the
    /// dispatcher sends `Shutdown` or the transport closes. Every invocation
    /// runs on its own task; in-flight ones are awaited before returning.
    pub async fn process_events<T>(&self, transport: Arc<T>) -> Result<(), SessionError>
    where
        T: Transport + 'static,
    {
        transport
            .send(Outbound::Connect {
                jwt_token: self.jwt_token.clone(),
            })
            .await?;
        for spec in self.specs() {
            transport.send(Outbound::Register { tool: spec }).await?;
        }
        info!("Session ready with {} tool(s)", self.tools.len());

        let mut tasks = JoinSet::new();
        loop {
            tokio::select! {
                event = transport.recv() => match event {
                    Some(Inbound::Invoke { id, name, arguments }) => {
                        debug!("Received invocation {id} for {name}");
                        let tool = self.tool(&name);
                        tasks.spawn(run_invocation(transport.clone(), tool, id, name, arguments));
                    }
                    Some(Inbound::Shutdown) => {
                        info!("Session received shutdown signal");
                        break;
                    }
                    None => {
                        info!("Transport closed");
                        break;
                    }
                },
                Some(joined) = tasks.join_next(), if !tasks.is_empty() => {
                    log_join(joined);
                }
            }
        }

        info!("Waiting for {} in-flight invocation(s)", tasks.len());
        while let Some(joined) = tasks.join_next().await {
            log_join(joined);
        }

        info!("Session stopped");
        Ok(())
    }
}

fn log_join(joined: Result<Result<(), SessionError>, tokio::task::JoinError>) {
    match joined {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!("Failed to deliver invocation result: {e}"),
        Err(e) => error!("Invocation task aborted: {e}"),
    }
}

async fn run_invocation<T>(
    transport: Arc<T>,
    tool: Option<Arc<dyn ToolT>>,
    id: InvocationId,
    name: String,
    arguments: Value,
) -> Result<(), SessionError>
where
    T: Transport + 'static,
{
    let Some(tool) = tool else {
        warn!("Tool not found: {name}");
        let error = SessionError::ToolNotFound(name.clone()).to_string();
        return transport.send(Outbound::Failed { id, name, error }).await;
    };

    let ctx = AgentContext::new(&name, id);
    // Nested spawn so a panicking tool surfaces as a JoinError here.
    let handle = tokio::spawn(async move { tool.execute(&ctx, arguments).await });

    let event = match handle.await {
        Ok(Ok(outcome)) => Outbound::Completed {
            id,
            fallback: outcome.is_fallback(),
            result: outcome.into_inner(),
            name,
        },
        Ok(Err(e)) => {
            warn!("Invocation {id} of {name} failed: {e}");
            Outbound::Failed {
                id,
                name,
                error: e.to_string(),
            }
        }
        Err(e) => {
            error!("Invocation {id} of {name} panicked: {e}");
            Outbound::Failed {
                id,
                name,
                error: format!("Tool panicked: {e}"),
            }
        }
    };
    transport.send(event).await
}
