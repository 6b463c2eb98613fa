//! XBee ZigBee API-mode serial protocol
//!
//! This crate implements the wire protocol spoken by XBee ZigBee radio
//! modules in API operating mode: the UART framing envelope, the escaped
//! (byte-stuffed) transport variant, and the typed API frames it carries.
//!
//! # Wire Format
//!
//! ```text
//! +------+--------+--------+------------------+----------+
//! | 0x7E | len_hi | len_lo | payload[0..len]  | checksum |
//! +------+--------+--------+------------------+----------+
//! ```
//!
//! The payload is one API frame body whose first byte identifies its type
//! (AT command, transmit request, receive packet, ...). The checksum is
//! `0xFF - (sum of payload bytes mod 256)`.
//!
//! # Example
//!
//! ```rust
//! use xbee_api::{AnyFrame, ApiFrame, AtCommand, FrameKind, UartFrame};
//!
//! // Build an AT command and wrap it for the wire.
//! let cmd = AtCommand::new(1, *b"NJ", Some(&[0xFF]));
//! let uart = UartFrame::new(cmd.wire_bytes().to_vec())?;
//! assert_eq!(uart.raw_bytes()[0], 0x7E);
//!
//! // Decode a received body back into a typed frame.
//! let frame = AnyFrame::decode(cmd.wire_bytes().to_vec())?;
//! assert_eq!(frame.kind(), FrameKind::AtCommand);
//! # Ok::<(), xbee_api::ApiError>(())
//! ```
//!
//! Everything here is pure and synchronous; the streaming receive engine
//! that feeds bodies off a serial transport lives in the `xbee-host`
//! crate.

pub mod address;
pub mod checksum;
pub mod constants;
mod error;
pub mod escape;
mod frames;
mod kind;
mod node;
mod uart;

pub use address::{Addr64, NetAddr16};
pub use error::ApiError;
pub use escape::EscapeMode;
pub use frames::{
    AnyFrame, ApiFrame, AtCommand, AtCommandResponse, ModemStatus, NodeIdentificationIndicator,
    RemoteCommandRequest, RemoteCommandResponse, UnknownFrame, ZigBeeExplicitAddressingCommand,
    ZigBeeIoDataSampleRxIndicator, ZigBeeReceivePacket, ZigBeeTransmitRequest,
    ZigBeeTransmitStatus,
};
pub use kind::FrameKind;
pub use node::Node;
pub use uart::{DeframedFrame, FrameDeframer, UartFrame};
