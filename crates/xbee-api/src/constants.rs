//! Protocol constants
//!
//! These constants define the reserved UART bytes, frame-type identifiers,
//! and option values used by XBee ZigBee modules in API operating mode.

// ============================================================================
// Reserved UART Bytes
// ============================================================================

/// Start delimiter for every API frame on the wire.
pub const START_DELIMITER: u8 = 0x7E;
/// Escape marker in escaped (API mode 2) operation.
pub const ESCAPE: u8 = 0x7D;
/// XON software flow control byte.
pub const XON: u8 = 0x11;
/// XOFF software flow control byte.
pub const XOFF: u8 = 0x13;
/// XOR applied to the byte following an escape marker.
pub const ESCAPE_XOR: u8 = 0x20;

// ============================================================================
// Frame-Type Identifiers (byte 0 of every API frame body)
// ============================================================================

/// Local AT command request.
pub const FRAME_TYPE_AT_COMMAND: u8 = 0x08;
/// Local AT command, parameter queued until AC is issued.
pub const FRAME_TYPE_AT_COMMAND_QUEUE: u8 = 0x09;
/// ZigBee transmit request.
pub const FRAME_TYPE_ZIGBEE_TRANSMIT_REQUEST: u8 = 0x10;
/// ZigBee explicit addressing command (source/dest endpoints, cluster, profile).
pub const FRAME_TYPE_ZIGBEE_EXPLICIT_ADDRESSING_COMMAND: u8 = 0x11;
/// Remote AT command request.
pub const FRAME_TYPE_REMOTE_COMMAND_REQUEST: u8 = 0x17;
/// Create source route.
pub const FRAME_TYPE_CREATE_SOURCE_ROUTE: u8 = 0x21;
/// Local AT command response.
pub const FRAME_TYPE_AT_COMMAND_RESPONSE: u8 = 0x88;
/// Modem status.
pub const FRAME_TYPE_MODEM_STATUS: u8 = 0x8A;
/// ZigBee transmit status.
pub const FRAME_TYPE_ZIGBEE_TRANSMIT_STATUS: u8 = 0x8B;
/// ZigBee receive packet.
pub const FRAME_TYPE_ZIGBEE_RECEIVE_PACKET: u8 = 0x90;
/// ZigBee explicit RX indicator.
pub const FRAME_TYPE_ZIGBEE_EXPLICIT_RX_INDICATOR: u8 = 0x91;
/// ZigBee I/O data sample RX indicator.
pub const FRAME_TYPE_ZIGBEE_IO_DATA_SAMPLE_RX_INDICATOR: u8 = 0x92;
/// XBee sensor read indicator.
pub const FRAME_TYPE_XBEE_SENSOR_READ_INDICATOR: u8 = 0x94;
/// Node identification indicator.
pub const FRAME_TYPE_NODE_IDENTIFICATION_INDICATOR: u8 = 0x95;
/// Remote AT command response.
pub const FRAME_TYPE_REMOTE_COMMAND_RESPONSE: u8 = 0x97;
/// Over-the-air firmware update status.
pub const FRAME_TYPE_OTA_FIRMWARE_UPDATE_STATUS: u8 = 0xA0;
/// Route record indicator.
pub const FRAME_TYPE_ROUTE_RECORD_INDICATOR: u8 = 0xA1;
/// Many-to-one route request indicator.
pub const FRAME_TYPE_MANY_TO_ONE_ROUTE_REQUEST_INDICATOR: u8 = 0xA3;

// ============================================================================
// Addresses
// ============================================================================

/// 64-bit broadcast address.
pub const BROADCAST_ADDR64: u64 = 0x0000_0000_0000_FFFF;
/// 16-bit broadcast network address.
pub const BROADCAST_NET_ADDR: u16 = 0xFFFE;
/// 16-bit network address placeholder when the address is unknown.
pub const UNKNOWN_NET_ADDR: u16 = 0xFFFE;

// ============================================================================
// Options
// ============================================================================

/// Transmit option: enable APS encryption (EE must be set on the module).
pub const TX_OPTION_APS_ENCRYPTION: u8 = 0x20;
/// Receive option value indicating the packet was a broadcast.
pub const RECEIVE_OPTION_BROADCAST: u8 = 0x02;

// ============================================================================
// Sizes
// ============================================================================

/// Maximum UART frame payload length (16-bit length field).
pub const MAX_PAYLOAD_SIZE: usize = 0xFFFF;
/// Width of a 64-bit device address in bytes.
pub const ADDR64_SIZE: usize = 8;
/// Width of a 16-bit network address in bytes.
pub const NET_ADDR_SIZE: usize = 2;
/// Width of a two-character AT command in bytes.
pub const AT_COMMAND_SIZE: usize = 2;
