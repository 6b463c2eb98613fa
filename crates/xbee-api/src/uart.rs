//! UART frame envelope and incremental deframer.
//!
//! Every API frame travels inside one UART frame:
//!
//! ```text
//! +------+--------+--------+------------------+----------+
//! | 0x7E | len_hi | len_lo | payload[0..len]  | checksum |
//! +------+--------+--------+------------------+----------+
//! ```
//!
//! The 16-bit length is big-endian and counts payload bytes only; the
//! checksum is `0xFF - (sum of payload bytes mod 256)` and is not part of
//! the payload.

use bytes::{Buf, Bytes, BytesMut};

use crate::checksum;
use crate::constants::{MAX_PAYLOAD_SIZE, START_DELIMITER};
use crate::error::ApiError;
use crate::escape::{escape, EscapeMode};

/// One outgoing or reassembled UART frame. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UartFrame {
    payload: Bytes,
}

impl UartFrame {
    /// Wrap a payload. Fails if the payload does not fit the 16-bit
    /// length field.
    pub fn new(payload: impl Into<Bytes>) -> Result<Self, ApiError> {
        let payload = payload.into();
        if payload.len() > MAX_PAYLOAD_SIZE {
            return Err(ApiError::PayloadTooLarge {
                max: MAX_PAYLOAD_SIZE,
                actual: payload.len(),
            });
        }
        Ok(UartFrame { payload })
    }

    /// The framed payload (the API frame body).
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The checksum byte for this frame's payload.
    pub fn checksum_byte(&self) -> u8 {
        checksum::checksum(&self.payload)
    }

    /// The complete unescaped wire representation.
    pub fn raw_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 + self.payload.len());
        out.push(START_DELIMITER);
        out.extend_from_slice(&(self.payload.len() as u16).to_be_bytes());
        out.extend_from_slice(&self.payload);
        out.push(self.checksum_byte());
        out
    }

    /// The wire representation with reserved bytes stuffed. The default
    /// mode escapes the whole raw frame, start delimiter included.
    pub fn escaped_bytes(&self) -> Vec<u8> {
        self.escaped_bytes_with(EscapeMode::Full)
    }

    /// Escaped wire representation with an explicit [`EscapeMode`].
    pub fn escaped_bytes_with(&self, mode: EscapeMode) -> Vec<u8> {
        escape(&self.raw_bytes(), mode)
    }
}

/// A payload split off the wire by [`FrameDeframer`], together with the
/// checksum byte that followed it. Checksum verification is left to the
/// caller: the deframer only does byte bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeframedFrame {
    /// The frame payload (length-field bytes).
    pub payload: Bytes,
    /// The checksum byte read off the wire after the payload.
    pub claimed_checksum: u8,
}

/// Incremental splitter turning a raw byte stream into UART frames.
///
/// Bytes before a start delimiter are discarded as line noise. Feed data
/// with [`push`](FrameDeframer::push) and drain complete frames with
/// [`next_frame`](FrameDeframer::next_frame).
#[derive(Debug, Default)]
pub struct FrameDeframer {
    buffer: BytesMut,
}

impl FrameDeframer {
    /// Create an empty deframer.
    pub fn new() -> Self {
        FrameDeframer {
            buffer: BytesMut::new(),
        }
    }

    /// Add received data to the buffer.
    pub fn push(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Try to split one complete frame off the buffer.
    ///
    /// Returns `None` if more data is needed.
    pub fn next_frame(&mut self) -> Option<DeframedFrame> {
        // Discard pre-frame noise up to the start delimiter.
        while !self.buffer.is_empty() && self.buffer[0] != START_DELIMITER {
            self.buffer.advance(1);
        }

        // Delimiter + 2-byte length.
        if self.buffer.len() < 3 {
            return None;
        }
        let len = u16::from_be_bytes([self.buffer[1], self.buffer[2]]) as usize;

        // Payload + trailing checksum byte.
        if self.buffer.len() < 3 + len + 1 {
            return None;
        }

        self.buffer.advance(3);
        let payload = self.buffer.split_to(len).freeze();
        let claimed_checksum = self.buffer[0];
        self.buffer.advance(1);

        Some(DeframedFrame {
            payload,
            claimed_checksum,
        })
    }

    /// Number of bytes buffered but not yet consumed.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Drop all buffered bytes.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
