//! XBee API-mode serial connection host.
//!
//! This crate drives one XBee module over any byte transport that speaks
//! [`tokio::io::AsyncRead`]/[`AsyncWrite`](tokio::io::AsyncWrite): a
//! serial port, a TCP bridge, or an in-memory pipe in tests. The protocol
//! itself (framing, checksums, typed frames) lives in `xbee-api`; this
//! crate adds the streaming receive task and the send path.
//!
//! # Example
//!
//! ```rust,no_run
//! use xbee_api::{AnyFrame, AtCommand};
//! use xbee_host::XBee;
//!
//! # async fn run(port: tokio::io::DuplexStream) -> Result<(), xbee_host::HostError> {
//! let (reader, writer) = tokio::io::split(port);
//! let mut xbee = XBee::spawn(reader, writer);
//! let mut frames = xbee.subscribe();
//!
//! xbee.send(AnyFrame::from(AtCommand::new(1, *b"NJ", None))).await?;
//! while let Ok(frame) = frames.recv().await {
//!     println!("{frame}");
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod engine;
mod error;
mod event;
mod xbee;

pub use config::EngineConfig;
pub use engine::ReceiveEngine;
pub use error::HostError;
pub use event::LinkEvent;
pub use xbee::{Outbound, XBee};
