//! Frame-kind registry.
//!
//! Maps the one-byte frame-type identifier at the start of every API frame
//! body to a symbolic kind and back. Unmapped identifiers are carried as
//! [`FrameKind::Unknown`] rather than rejected.

use crate::constants::*;

/// The kinds of API frames the module can exchange.
///
/// All eighteen identifiers of the module's serial API are recognized;
/// kinds without a dedicated decoder surface as opaque frames on receive
/// (see [`crate::frames::UnknownFrame`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// Local AT command request (0x08).
    AtCommand,
    /// Queued local AT command (0x09).
    AtCommandQueue,
    /// ZigBee transmit request (0x10).
    ZigBeeTransmitRequest,
    /// ZigBee explicit addressing command (0x11).
    ZigBeeExplicitAddressingCommand,
    /// Remote AT command request (0x17).
    RemoteCommandRequest,
    /// Create source route (0x21).
    CreateSourceRoute,
    /// Local AT command response (0x88).
    AtCommandResponse,
    /// Modem status (0x8A).
    ModemStatus,
    /// ZigBee transmit status (0x8B).
    ZigBeeTransmitStatus,
    /// ZigBee receive packet (0x90).
    ZigBeeReceivePacket,
    /// ZigBee explicit RX indicator (0x91).
    ZigBeeExplicitRxIndicator,
    /// ZigBee I/O data sample RX indicator (0x92).
    ZigBeeIoDataSampleRxIndicator,
    /// XBee sensor read indicator (0x94).
    XBeeSensorReadIndicator,
    /// Node identification indicator (0x95).
    NodeIdentificationIndicator,
    /// Remote AT command response (0x97).
    RemoteCommandResponse,
    /// Over-the-air firmware update status (0xA0).
    OtaFirmwareUpdateStatus,
    /// Route record indicator (0xA1).
    RouteRecordIndicator,
    /// Many-to-one route request indicator (0xA3).
    ManyToOneRouteRequestIndicator,
    /// Unmapped identifier, carried verbatim.
    Unknown(u8),
}

impl FrameKind {
    /// Whether a dedicated typed decoder exists for this kind. Recognized
    /// kinds without one are delivered as opaque frames.
    pub fn has_decoder(&self) -> bool {
        !matches!(
            self,
            FrameKind::AtCommandQueue
                | FrameKind::CreateSourceRoute
                | FrameKind::ZigBeeExplicitRxIndicator
                | FrameKind::XBeeSensorReadIndicator
                | FrameKind::OtaFirmwareUpdateStatus
                | FrameKind::RouteRecordIndicator
                | FrameKind::ManyToOneRouteRequestIndicator
                | FrameKind::Unknown(_)
        )
    }

    /// The wire identifier for this kind.
    pub fn wire_byte(&self) -> u8 {
        u8::from(*self)
    }
}

impl From<u8> for FrameKind {
    fn from(byte: u8) -> Self {
        match byte {
            FRAME_TYPE_AT_COMMAND => FrameKind::AtCommand,
            FRAME_TYPE_AT_COMMAND_QUEUE => FrameKind::AtCommandQueue,
            FRAME_TYPE_ZIGBEE_TRANSMIT_REQUEST => FrameKind::ZigBeeTransmitRequest,
            FRAME_TYPE_ZIGBEE_EXPLICIT_ADDRESSING_COMMAND => {
                FrameKind::ZigBeeExplicitAddressingCommand
            }
            FRAME_TYPE_REMOTE_COMMAND_REQUEST => FrameKind::RemoteCommandRequest,
            FRAME_TYPE_CREATE_SOURCE_ROUTE => FrameKind::CreateSourceRoute,
            FRAME_TYPE_AT_COMMAND_RESPONSE => FrameKind::AtCommandResponse,
            FRAME_TYPE_MODEM_STATUS => FrameKind::ModemStatus,
            FRAME_TYPE_ZIGBEE_TRANSMIT_STATUS => FrameKind::ZigBeeTransmitStatus,
            FRAME_TYPE_ZIGBEE_RECEIVE_PACKET => FrameKind::ZigBeeReceivePacket,
            FRAME_TYPE_ZIGBEE_EXPLICIT_RX_INDICATOR => FrameKind::ZigBeeExplicitRxIndicator,
            FRAME_TYPE_ZIGBEE_IO_DATA_SAMPLE_RX_INDICATOR => {
                FrameKind::ZigBeeIoDataSampleRxIndicator
            }
            FRAME_TYPE_XBEE_SENSOR_READ_INDICATOR => FrameKind::XBeeSensorReadIndicator,
            FRAME_TYPE_NODE_IDENTIFICATION_INDICATOR => FrameKind::NodeIdentificationIndicator,
            FRAME_TYPE_REMOTE_COMMAND_RESPONSE => FrameKind::RemoteCommandResponse,
            FRAME_TYPE_OTA_FIRMWARE_UPDATE_STATUS => FrameKind::OtaFirmwareUpdateStatus,
            FRAME_TYPE_ROUTE_RECORD_INDICATOR => FrameKind::RouteRecordIndicator,
            FRAME_TYPE_MANY_TO_ONE_ROUTE_REQUEST_INDICATOR => {
                FrameKind::ManyToOneRouteRequestIndicator
            }
            other => FrameKind::Unknown(other),
        }
    }
}

impl From<FrameKind> for u8 {
    fn from(kind: FrameKind) -> Self {
        match kind {
            FrameKind::AtCommand => FRAME_TYPE_AT_COMMAND,
            FrameKind::AtCommandQueue => FRAME_TYPE_AT_COMMAND_QUEUE,
            FrameKind::ZigBeeTransmitRequest => FRAME_TYPE_ZIGBEE_TRANSMIT_REQUEST,
            FrameKind::ZigBeeExplicitAddressingCommand => {
                FRAME_TYPE_ZIGBEE_EXPLICIT_ADDRESSING_COMMAND
            }
            FrameKind::RemoteCommandRequest => FRAME_TYPE_REMOTE_COMMAND_REQUEST,
            FrameKind::CreateSourceRoute => FRAME_TYPE_CREATE_SOURCE_ROUTE,
            FrameKind::AtCommandResponse => FRAME_TYPE_AT_COMMAND_RESPONSE,
            FrameKind::ModemStatus => FRAME_TYPE_MODEM_STATUS,
            FrameKind::ZigBeeTransmitStatus => FRAME_TYPE_ZIGBEE_TRANSMIT_STATUS,
            FrameKind::ZigBeeReceivePacket => FRAME_TYPE_ZIGBEE_RECEIVE_PACKET,
            FrameKind::ZigBeeExplicitRxIndicator => FRAME_TYPE_ZIGBEE_EXPLICIT_RX_INDICATOR,
            FrameKind::ZigBeeIoDataSampleRxIndicator => {
                FRAME_TYPE_ZIGBEE_IO_DATA_SAMPLE_RX_INDICATOR
            }
            FrameKind::XBeeSensorReadIndicator => FRAME_TYPE_XBEE_SENSOR_READ_INDICATOR,
            FrameKind::NodeIdentificationIndicator => FRAME_TYPE_NODE_IDENTIFICATION_INDICATOR,
            FrameKind::RemoteCommandResponse => FRAME_TYPE_REMOTE_COMMAND_RESPONSE,
            FrameKind::OtaFirmwareUpdateStatus => FRAME_TYPE_OTA_FIRMWARE_UPDATE_STATUS,
            FrameKind::RouteRecordIndicator => FRAME_TYPE_ROUTE_RECORD_INDICATOR,
            FrameKind::ManyToOneRouteRequestIndicator => {
                FRAME_TYPE_MANY_TO_ONE_ROUTE_REQUEST_INDICATOR
            }
            FrameKind::Unknown(byte) => byte,
        }
    }
}

impl std::fmt::Display for FrameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameKind::Unknown(byte) => write!(f, "unknown (0x{byte:02X})"),
            other => write!(f, "{other:?} (0x{:02X})", other.wire_byte()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_MAPPED: [u8; 18] = [
        0x08, 0x09, 0x10, 0x11, 0x17, 0x21, 0x88, 0x8A, 0x8B, 0x90, 0x91, 0x92, 0x94, 0x95,
        0x97, 0xA0, 0xA1, 0xA3,
    ];

    #[test]
    fn round_trips_every_mapped_byte() {
        for byte in ALL_MAPPED {
            let kind = FrameKind::from(byte);
            assert!(!matches!(kind, FrameKind::Unknown(_)), "0x{byte:02X}");
            assert_eq!(u8::from(kind), byte);
        }
    }

    #[test]
    fn unmapped_byte_is_unknown_and_round_trips() {
        let kind = FrameKind::from(0xFF);
        assert_eq!(kind, FrameKind::Unknown(0xFF));
        assert_eq!(u8::from(kind), 0xFF);
    }

    #[test]
    fn decoder_coverage() {
        assert!(FrameKind::AtCommand.has_decoder());
        assert!(FrameKind::ModemStatus.has_decoder());
        assert!(!FrameKind::CreateSourceRoute.has_decoder());
        assert!(!FrameKind::Unknown(0x42).has_decoder());
    }
}
