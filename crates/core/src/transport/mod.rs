//! How a session talks to the dispatcher.

use crate::error::SessionError;
use crate::protocol::{Inbound, Outbound};
use async_trait::async_trait;

mod channel;
mod line;

pub use channel::{ChannelTransport, DispatcherHandle};
pub use line::LineTransport;

/// A bidirectional event pipe between the session and the dispatcher.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Next dispatcher event, or `None` once the peer has gone away.
    async fn recv(&self) -> Option<Inbound>;

    async fn send(&self, event: Outbound) -> Result<(), SessionError>;
}
