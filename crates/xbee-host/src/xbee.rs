//! Connection handle.

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

use xbee_api::{AnyFrame, UartFrame};

use crate::config::EngineConfig;
use crate::engine::ReceiveEngine;
use crate::error::HostError;
use crate::event::LinkEvent;

/// Anything that can go down the wire.
///
/// Adding a new sendable kind means adding a variant here; there is no
/// runtime type sniffing on the send path.
#[derive(Debug, Clone)]
pub enum Outbound {
    /// Pre-framed raw bytes, written verbatim.
    Raw(Vec<u8>),
    /// A UART frame, written as its unescaped wire representation.
    Uart(UartFrame),
    /// An API frame, wrapped in a UART frame before writing.
    Api(AnyFrame),
}

impl From<Vec<u8>> for Outbound {
    fn from(bytes: Vec<u8>) -> Self {
        Outbound::Raw(bytes)
    }
}

impl From<UartFrame> for Outbound {
    fn from(frame: UartFrame) -> Self {
        Outbound::Uart(frame)
    }
}

impl From<AnyFrame> for Outbound {
    fn from(frame: AnyFrame) -> Self {
        Outbound::Api(frame)
    }
}

/// One API-mode serial connection.
///
/// Owns the write half of the transport and the receive task reading the
/// other half. Dropping the handle stops the receive task.
pub struct XBee<W> {
    writer: W,
    frames: broadcast::Sender<AnyFrame>,
    events: broadcast::Sender<LinkEvent>,
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl<W: AsyncWrite + Unpin> XBee<W> {
    /// Start a connection over a transport's read and write halves with
    /// default configuration.
    pub fn spawn<R>(reader: R, writer: W) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        Self::spawn_with_config(reader, writer, EngineConfig::default())
    }

    /// Start a connection with explicit channel capacities.
    pub fn spawn_with_config<R>(reader: R, writer: W, config: EngineConfig) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let (frames, _) = broadcast::channel(config.frame_channel_capacity);
        let (events, _) = broadcast::channel(config.event_channel_capacity);
        let (shutdown, shutdown_rx) = watch::channel(false);

        let engine = ReceiveEngine::new(reader, frames.clone(), events.clone(), shutdown_rx);
        let task = tokio::spawn(engine.run());

        XBee {
            writer,
            frames,
            events,
            shutdown,
            task,
        }
    }

    /// Subscribe to decoded frames. Every subscriber sees every frame
    /// validated after it subscribed, in validation order. Dropping the
    /// receiver unsubscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<AnyFrame> {
        self.frames.subscribe()
    }

    /// Subscribe to link events (checksum mismatches, truncations, ...).
    pub fn events(&self) -> broadcast::Receiver<LinkEvent> {
        self.events.subscribe()
    }

    /// Write one outbound item to the transport.
    pub async fn send(&mut self, out: impl Into<Outbound>) -> Result<(), HostError> {
        let bytes = match out.into() {
            Outbound::Raw(bytes) => {
                log::debug!("sending {} raw bytes", bytes.len());
                bytes
            }
            Outbound::Uart(frame) => {
                log::debug!("sending UART frame, {} payload bytes", frame.payload().len());
                frame.raw_bytes()
            }
            Outbound::Api(frame) => {
                log::debug!("sending API frame: {frame}");
                UartFrame::new(frame.wire_bytes().to_vec())?.raw_bytes()
            }
        };
        self.writer.write_all(&bytes).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Whether the receive task is still running.
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Signal the receive task to stop and wait for it to finish.
    pub async fn shutdown(self) -> Result<(), HostError> {
        // The task may already be gone if the transport closed first.
        let _ = self.shutdown.send(true);
        self.task.await.map_err(|_| HostError::Closed)
    }
}
