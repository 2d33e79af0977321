use super::Transport;
use crate::error::SessionError;
use crate::protocol::{Inbound, InvocationId, Outbound};
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{mpsc, Mutex};
use tokio_stream::wrappers::ReceiverStream;
use uuid::Uuid;

pub const DEFAULT_CHANNEL_BUFFER: usize = 100;

/// In-process transport backed by two mpsc channels.
#[derive(Debug)]
pub struct ChannelTransport {
    inbound_rx: Mutex<mpsc::Receiver<Inbound>>,
    outbound_tx: mpsc::Sender<Outbound>,
}

/// The dispatcher's end of a [`ChannelTransport`].
#[derive(Debug)]
pub struct DispatcherHandle {
    inbound_tx: mpsc::Sender<Inbound>,
    outbound_rx: Option<mpsc::Receiver<Outbound>>,
}

impl ChannelTransport {
    pub fn new(channel_buffer: Option<usize>) -> (Self, DispatcherHandle) {
        let buffer_size = channel_buffer.unwrap_or(DEFAULT_CHANNEL_BUFFER);
        let (inbound_tx, inbound_rx) = mpsc::channel(buffer_size);
        let (outbound_tx, outbound_rx) = mpsc::channel(buffer_size);
        (
            Self {
                inbound_rx: Mutex::new(inbound_rx),
                outbound_tx,
            },
            DispatcherHandle {
                inbound_tx,
                outbound_rx: Some(outbound_rx),
            },
        )
    }
}

#[async_trait]
impl Transport for ChannelTransport {
    async fn recv(&self) -> Option<Inbound> {
        self.inbound_rx.lock().await.recv().await
    }

    async fn send(&self, event: Outbound) -> Result<(), SessionError> {
        self.outbound_tx
            .send(event)
            .await
            .map_err(|e| SessionError::TransportClosed(e.to_string()))
    }
}

impl DispatcherHandle {
    /// Queues an invocation and returns its id.
    pub async fn invoke(
        &self,
        name: impl Into<String>,
        arguments: Value,
    ) -> Result<InvocationId, SessionError> {
        let id = Uuid::new_v4();
        self.inbound_tx
            .send(Inbound::Invoke {
                id,
                name: name.into(),
                arguments,
            })
            .await
            .map_err(|e| SessionError::TransportClosed(e.to_string()))?;
        Ok(id)
    }

    pub async fn shutdown(&self) -> Result<(), SessionError> {
        self.inbound_tx
            .send(Inbound::Shutdown)
            .await
            .map_err(|e| SessionError::TransportClosed(e.to_string()))
    }

    /// Events sent by the session. Can be taken once.
    pub fn take_event_stream(&mut self) -> Option<ReceiverStream<Outbound>> {
        self.outbound_rx.take().map(ReceiverStream::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio_stream::StreamExt;

    #[tokio::test]
    async fn test_invoke_reaches_transport() {
        let (transport, handle) = ChannelTransport::new(None);
        let id = handle.invoke("get_current_date", json!({})).await.unwrap();

        match transport.recv().await {
            Some(Inbound::Invoke { id: got, name, .. }) => {
                assert_eq!(got, id);
                assert_eq!(name, "get_current_date");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_events_reach_dispatcher() {
        let (transport, mut handle) = ChannelTransport::new(Some(4));
        let mut events = handle.take_event_stream().unwrap();
        assert!(handle.take_event_stream().is_none());

        transport
            .send(Outbound::Connect { jwt_token: None })
            .await
            .unwrap();
        assert_eq!(
            events.next().await,
            Some(Outbound::Connect { jwt_token: None })
        );
    }

    #[tokio::test]
    async fn test_recv_ends_when_dispatcher_dropped() {
        let (transport, handle) = ChannelTransport::new(None);
        drop(handle);
        assert!(transport.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_send_fails_when_dispatcher_dropped() {
        let (transport, handle) = ChannelTransport::new(None);
        drop(handle);
        let err = transport
            .send(Outbound::Connect { jwt_token: None })
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::TransportClosed(_)));
    }
}
