//! Link-level events.
//!
//! Anomalies on the receive path are reported here rather than unwinding
//! the receive loop: a corrupted or truncated frame costs that frame only,
//! never the connection.

use xbee_api::FrameKind;

/// Observable receive-path events, published on the engine's event channel
/// and mirrored to the `log` facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkEvent {
    /// A reassembled frame failed checksum verification and was dropped.
    ChecksumMismatch {
        /// Checksum recomputed over the received payload.
        expected: u8,
        /// Checksum byte read off the wire.
        actual: u8,
    },

    /// The transport closed mid-frame; the partial frame was discarded.
    TruncatedFrame {
        /// Bytes the interrupted read step was waiting for.
        expected: usize,
    },

    /// A frame body passed checksum but was shorter than its type's
    /// minimum length, and was dropped.
    MalformedFrame {
        /// Frame kind the body claimed to be.
        kind: FrameKind,
        /// Expected minimum length.
        expected: usize,
        /// Actual body length.
        actual: usize,
    },

    /// A frame with no dedicated decoder was delivered as an opaque frame.
    UnknownKind {
        /// The unrecognized or undecoded type byte.
        byte: u8,
    },

    /// The transport reached end-of-stream and the engine stopped.
    Closed,
}
