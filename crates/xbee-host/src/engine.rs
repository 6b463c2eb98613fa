//! Streaming receive engine.
//!
//! One engine task owns the read half of a serial connection and turns its
//! unbounded byte stream into validated, typed frames:
//!
//! ```text
//! SeekDelimiter -> ReadLength -> ReadPayload -> ReadChecksum -> Dispatch
//!       ^                                                          |
//!       +----------------------------------------------------------+
//! ```
//!
//! Bytes before a start delimiter are discarded as line noise. A frame
//! that fails checksum or length validation is dropped and reported as a
//! [`LinkEvent`]; the loop itself only ends when the transport closes or
//! the engine is shut down. Shutdown is checked at every read, so
//! cancellation lands between states and a partially-read frame is
//! discarded without partial delivery.

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::{broadcast, watch};

use xbee_api::checksum;
use xbee_api::constants::START_DELIMITER;
use xbee_api::{AnyFrame, ApiError, ApiFrame};

use crate::event::LinkEvent;

enum ReadOutcome {
    Data,
    Eof,
    Shutdown,
    Failed(std::io::Error),
}

/// The receive half of one XBee connection.
///
/// Usually constructed and spawned through [`crate::XBee::spawn`]; building
/// one directly is useful when the caller wants to drive the loop inside
/// its own task structure.
pub struct ReceiveEngine<R> {
    reader: R,
    frames: broadcast::Sender<AnyFrame>,
    events: broadcast::Sender<LinkEvent>,
    shutdown: watch::Receiver<bool>,
}

impl<R: AsyncRead + Unpin> ReceiveEngine<R> {
    /// Wire up an engine over the read half of a transport.
    pub fn new(
        reader: R,
        frames: broadcast::Sender<AnyFrame>,
        events: broadcast::Sender<LinkEvent>,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        ReceiveEngine {
            reader,
            frames,
            events,
            shutdown,
        }
    }

    /// Run the receive loop until the transport closes or shutdown is
    /// signalled.
    pub async fn run(mut self) {
        log::debug!("receive engine started");
        loop {
            // SeekDelimiter: one byte at a time, discarding noise.
            let mut byte = [0u8; 1];
            match self.read_step(&mut byte).await {
                ReadOutcome::Data => {}
                ReadOutcome::Eof => {
                    self.report(LinkEvent::Closed);
                    break;
                }
                ReadOutcome::Shutdown => break,
                ReadOutcome::Failed(err) => {
                    log::warn!("transport read failed: {err}");
                    self.report(LinkEvent::Closed);
                    break;
                }
            }
            if byte[0] != START_DELIMITER {
                continue;
            }

            // ReadLength: 16-bit big-endian payload length.
            let mut len_buf = [0u8; 2];
            match self.read_step(&mut len_buf).await {
                ReadOutcome::Data => {}
                ReadOutcome::Eof => {
                    self.report(LinkEvent::TruncatedFrame { expected: 2 });
                    continue;
                }
                ReadOutcome::Shutdown => break,
                ReadOutcome::Failed(err) => {
                    log::warn!("transport read failed: {err}");
                    self.report(LinkEvent::Closed);
                    break;
                }
            }
            let length = u16::from_be_bytes(len_buf) as usize;

            // ReadPayload: exactly `length` bytes.
            let mut payload = vec![0u8; length];
            match self.read_step(&mut payload).await {
                ReadOutcome::Data => {}
                ReadOutcome::Eof => {
                    self.report(LinkEvent::TruncatedFrame { expected: length });
                    continue;
                }
                ReadOutcome::Shutdown => break,
                ReadOutcome::Failed(err) => {
                    log::warn!("transport read failed: {err}");
                    self.report(LinkEvent::Closed);
                    break;
                }
            }

            // ReadChecksum: the single trailing checksum byte.
            let mut cks = [0u8; 1];
            match self.read_step(&mut cks).await {
                ReadOutcome::Data => {}
                ReadOutcome::Eof => {
                    self.report(LinkEvent::TruncatedFrame { expected: 1 });
                    continue;
                }
                ReadOutcome::Shutdown => break,
                ReadOutcome::Failed(err) => {
                    log::warn!("transport read failed: {err}");
                    self.report(LinkEvent::Closed);
                    break;
                }
            }

            // Dispatch: verify, decode, publish. A bad frame costs itself
            // only; framing resynchronizes on the next delimiter.
            self.dispatch(payload, cks[0]);
        }
        log::debug!("receive engine stopped");
    }

    fn dispatch(&mut self, payload: Vec<u8>, claimed: u8) {
        if !checksum::verify(&payload, claimed) {
            self.report(LinkEvent::ChecksumMismatch {
                expected: checksum::checksum(&payload),
                actual: claimed,
            });
            return;
        }

        match AnyFrame::decode(payload) {
            Ok(frame) => {
                if let AnyFrame::Unknown(raw) = &frame {
                    self.report(LinkEvent::UnknownKind {
                        byte: raw.wire_bytes()[0],
                    });
                }
                log::debug!("dispatching {frame}");
                // No live subscribers is not an error.
                let _ = self.frames.send(frame);
            }
            Err(ApiError::MalformedFrame {
                kind,
                expected,
                actual,
            }) => {
                self.report(LinkEvent::MalformedFrame {
                    kind,
                    expected,
                    actual,
                });
            }
            Err(err) => log::warn!("undecodable frame dropped: {err}"),
        }
    }

    fn report(&mut self, event: LinkEvent) {
        log::warn!("link event: {event:?}");
        let _ = self.events.send(event);
    }

    /// One cancellable read step. `read_exact` on an empty buffer
    /// completes immediately, so a zero-length payload costs nothing.
    async fn read_step(&mut self, buf: &mut [u8]) -> ReadOutcome {
        tokio::select! {
            // Fires on shutdown signal, or when the handle owning the
            // sender is dropped. Either way the engine stops.
            _ = self.shutdown.changed() => ReadOutcome::Shutdown,
            res = self.reader.read_exact(buf) => match res {
                Ok(_) => ReadOutcome::Data,
                Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => ReadOutcome::Eof,
                Err(err) => ReadOutcome::Failed(err),
            },
        }
    }
}
