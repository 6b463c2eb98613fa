//! Protocol error types.

use thiserror::Error;

use crate::kind::FrameKind;

/// Errors that can occur when encoding or decoding API frames.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// An address was supplied in a form that cannot be converted.
    #[error("invalid address format: {0}")]
    InvalidAddressFormat(String),

    /// Frame body is shorter than the minimum for its type.
    #[error("malformed {kind} frame: expected at least {expected} bytes, got {actual}")]
    MalformedFrame {
        /// Frame kind the body claimed to be.
        kind: FrameKind,
        /// Expected minimum length.
        expected: usize,
        /// Actual length received.
        actual: usize,
    },

    /// UART frame payload does not fit the 16-bit length field.
    #[error("payload too large: maximum {max} bytes, got {actual}")]
    PayloadTooLarge {
        /// Maximum allowed payload length.
        max: usize,
        /// Actual payload length.
        actual: usize,
    },
}
