use super::Transport;
use crate::error::SessionError;
use crate::protocol::{Inbound, Outbound};
use async_trait::async_trait;
use log::{debug, warn};
use tokio::io::{self, AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, Lines};
use tokio::sync::Mutex;

/// Newline-delimited JSON over any async reader/writer pair.
///
/// Each line read is one [`Inbound`] event; lines that do not parse are
/// logged and skipped. Each [`Outbound`] event is written as one line and
/// flushed immediately.
pub struct LineTransport<R, W> {
    reader: Mutex<Lines<BufReader<R>>>,
    writer: Mutex<W>,
}

impl<R, W> LineTransport<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: Mutex::new(BufReader::new(reader).lines()),
            writer: Mutex::new(writer),
        }
    }
}

impl LineTransport<io::Stdin, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

#[async_trait]
impl<R, W> Transport for LineTransport<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn recv(&self) -> Option<Inbound> {
        let mut reader = self.reader.lock().await;
        loop {
            let line = match reader.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => {
                    warn!("Failed to read from transport: {e}");
                    return None;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Inbound>(&line) {
                Ok(event) => return Some(event),
                Err(e) => warn!("Skipping malformed event: {e}"),
            }
        }
    }

    async fn send(&self, event: Outbound) -> Result<(), SessionError> {
        let mut line = serde_json::to_string(&event)?;
        debug!("Sending event: {line}");
        line.push('\n');
        let mut writer = self.writer.lock().await;
        writer.write_all(line.as_bytes()).await?;
        writer.flush().await?;
        Ok(())
    }
}
