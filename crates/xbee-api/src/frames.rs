//! Typed API frames.
//!
//! Each frame type owns its wire body verbatim (type byte first, fields at
//! their transmitted offsets) and reads fields lazily through accessors.
//! Two construction paths exist per type: `new` assembles a body from named
//! fields, `from_wire` adopts a received body after checking the type's
//! minimum length. Bodies are immutable once built; a changed frame is a
//! new value.

use bytes::Bytes;

use crate::address::{Addr64, NetAddr16};
use crate::constants::*;
use crate::error::ApiError;
use crate::kind::FrameKind;

/// Capabilities common to every API frame type.
pub trait ApiFrame {
    /// Minimum valid wire length for this frame type.
    const MIN_LEN: usize;

    /// The frame body exactly as transmitted (type byte included).
    fn wire_bytes(&self) -> &[u8];
}

fn check_len(kind: FrameKind, data: &[u8], expected: usize) -> Result<(), ApiError> {
    if data.len() < expected {
        return Err(ApiError::MalformedFrame {
            kind,
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

fn addr64_at(data: &[u8], offset: usize) -> Addr64 {
    let mut bytes = [0u8; ADDR64_SIZE];
    bytes.copy_from_slice(&data[offset..offset + ADDR64_SIZE]);
    Addr64::new(bytes)
}

fn net_addr_at(data: &[u8], offset: usize) -> NetAddr16 {
    NetAddr16::new([data[offset], data[offset + 1]])
}

// ============================================================================
// AT Command (0x08)
// ============================================================================

/// Local AT command request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtCommand {
    data: Bytes,
}

impl AtCommand {
    /// Assemble a request. `parameter` is appended after the command when
    /// present; without it the command reads the current value.
    pub fn new(frame_id: u8, at_command: [u8; AT_COMMAND_SIZE], parameter: Option<&[u8]>) -> Self {
        let mut buf = Vec::with_capacity(Self::MIN_LEN + parameter.map_or(0, <[u8]>::len));
        buf.push(FRAME_TYPE_AT_COMMAND);
        buf.push(frame_id);
        buf.extend_from_slice(&at_command);
        if let Some(value) = parameter {
            buf.extend_from_slice(value);
        }
        AtCommand { data: buf.into() }
    }

    /// Adopt a received body.
    pub fn from_wire(data: impl Into<Bytes>) -> Result<Self, ApiError> {
        let data = data.into();
        check_len(FrameKind::AtCommand, &data, Self::MIN_LEN)?;
        Ok(AtCommand { data })
    }

    /// Correlation tag echoed back in the response.
    pub fn frame_id(&self) -> u8 {
        self.data[1]
    }

    /// The two-character AT command.
    pub fn at_command(&self) -> [u8; AT_COMMAND_SIZE] {
        [self.data[2], self.data[3]]
    }

    /// The parameter value, absent when the command is a query.
    pub fn parameter_value(&self) -> Option<&[u8]> {
        (self.data.len() > Self::MIN_LEN).then(|| &self.data[Self::MIN_LEN..])
    }
}

impl ApiFrame for AtCommand {
    const MIN_LEN: usize = 4;

    fn wire_bytes(&self) -> &[u8] {
        &self.data
    }
}

// ============================================================================
// AT Command Response (0x88)
// ============================================================================

/// Local AT command response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtCommandResponse {
    data: Bytes,
}

impl AtCommandResponse {
    /// Assemble a response body.
    pub fn new(
        frame_id: u8,
        at_command: [u8; AT_COMMAND_SIZE],
        command_status: u8,
        command_data: Option<&[u8]>,
    ) -> Self {
        let mut buf = Vec::with_capacity(Self::MIN_LEN + command_data.map_or(0, <[u8]>::len));
        buf.push(FRAME_TYPE_AT_COMMAND_RESPONSE);
        buf.push(frame_id);
        buf.extend_from_slice(&at_command);
        buf.push(command_status);
        if let Some(value) = command_data {
            buf.extend_from_slice(value);
        }
        AtCommandResponse { data: buf.into() }
    }

    /// Adopt a received body.
    pub fn from_wire(data: impl Into<Bytes>) -> Result<Self, ApiError> {
        let data = data.into();
        check_len(FrameKind::AtCommandResponse, &data, Self::MIN_LEN)?;
        Ok(AtCommandResponse { data })
    }

    /// Correlation tag from the originating request.
    pub fn frame_id(&self) -> u8 {
        self.data[1]
    }

    /// The two-character AT command this responds to.
    pub fn at_command(&self) -> [u8; AT_COMMAND_SIZE] {
        [self.data[2], self.data[3]]
    }

    /// Command status byte (0 = OK).
    pub fn command_status(&self) -> u8 {
        self.data[4]
    }

    /// Register value for query responses; absent for plain acknowledgements.
    pub fn command_data(&self) -> Option<&[u8]> {
        (self.data.len() > Self::MIN_LEN).then(|| &self.data[Self::MIN_LEN..])
    }
}

impl ApiFrame for AtCommandResponse {
    const MIN_LEN: usize = 5;

    fn wire_bytes(&self) -> &[u8] {
        &self.data
    }
}

// ============================================================================
// ZigBee Transmit Request (0x10)
// ============================================================================

/// ZigBee transmit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZigBeeTransmitRequest {
    data: Bytes,
}

impl ZigBeeTransmitRequest {
    /// Assemble a transmit request.
    pub fn new(
        frame_id: u8,
        dest_addr: Addr64,
        net_addr: NetAddr16,
        broadcast_radius: u8,
        options: u8,
        payload: &[u8],
    ) -> Self {
        let mut buf = Vec::with_capacity(Self::MIN_LEN + payload.len());
        buf.push(FRAME_TYPE_ZIGBEE_TRANSMIT_REQUEST);
        buf.push(frame_id);
        buf.extend_from_slice(dest_addr.as_bytes());
        buf.extend_from_slice(net_addr.as_bytes());
        buf.push(broadcast_radius);
        buf.push(options);
        buf.extend_from_slice(payload);
        ZigBeeTransmitRequest { data: buf.into() }
    }

    /// Adopt a received body.
    pub fn from_wire(data: impl Into<Bytes>) -> Result<Self, ApiError> {
        let data = data.into();
        check_len(FrameKind::ZigBeeTransmitRequest, &data, Self::MIN_LEN)?;
        Ok(ZigBeeTransmitRequest { data })
    }

    /// Correlation tag echoed in the transmit status.
    pub fn frame_id(&self) -> u8 {
        self.data[1]
    }

    /// 64-bit destination address.
    pub fn dest_addr(&self) -> Addr64 {
        addr64_at(&self.data, 2)
    }

    /// 16-bit destination network address.
    pub fn net_addr(&self) -> NetAddr16 {
        net_addr_at(&self.data, 10)
    }

    /// Maximum broadcast hop count (0 = network default).
    pub fn broadcast_radius(&self) -> u8 {
        self.data[12]
    }

    /// Transmit options bitfield.
    pub fn options(&self) -> u8 {
        self.data[13]
    }

    /// RF payload, absent for an empty transmission.
    pub fn payload(&self) -> Option<&[u8]> {
        (self.data.len() > Self::MIN_LEN).then(|| &self.data[Self::MIN_LEN..])
    }
}

impl ApiFrame for ZigBeeTransmitRequest {
    const MIN_LEN: usize = 14;

    fn wire_bytes(&self) -> &[u8] {
        &self.data
    }
}

// ============================================================================
// ZigBee Explicit Addressing Command (0x11)
// ============================================================================

/// ZigBee explicit addressing command (endpoint/cluster/profile routing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZigBeeExplicitAddressingCommand {
    data: Bytes,
}

impl ZigBeeExplicitAddressingCommand {
    /// Assemble an explicit addressing command.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        frame_id: u8,
        dest_addr: Addr64,
        net_addr: NetAddr16,
        source_endpoint: u8,
        dest_endpoint: u8,
        cluster_id: u16,
        profile_id: u16,
        broadcast_radius: u8,
        options: u8,
        payload: &[u8],
    ) -> Self {
        let mut buf = Vec::with_capacity(Self::MIN_LEN + payload.len());
        buf.push(FRAME_TYPE_ZIGBEE_EXPLICIT_ADDRESSING_COMMAND);
        buf.push(frame_id);
        buf.extend_from_slice(dest_addr.as_bytes());
        buf.extend_from_slice(net_addr.as_bytes());
        buf.push(source_endpoint);
        buf.push(dest_endpoint);
        buf.extend_from_slice(&cluster_id.to_be_bytes());
        buf.extend_from_slice(&profile_id.to_be_bytes());
        buf.push(broadcast_radius);
        buf.push(options);
        buf.extend_from_slice(payload);
        ZigBeeExplicitAddressingCommand { data: buf.into() }
    }

    /// Adopt a received body.
    pub fn from_wire(data: impl Into<Bytes>) -> Result<Self, ApiError> {
        let data = data.into();
        check_len(
            FrameKind::ZigBeeExplicitAddressingCommand,
            &data,
            Self::MIN_LEN,
        )?;
        Ok(ZigBeeExplicitAddressingCommand { data })
    }

    /// Correlation tag echoed in the transmit status.
    pub fn frame_id(&self) -> u8 {
        self.data[1]
    }

    /// 64-bit destination address.
    pub fn dest_addr(&self) -> Addr64 {
        addr64_at(&self.data, 2)
    }

    /// 16-bit destination network address.
    pub fn net_addr(&self) -> NetAddr16 {
        net_addr_at(&self.data, 10)
    }

    /// Source endpoint.
    pub fn source_endpoint(&self) -> u8 {
        self.data[12]
    }

    /// Destination endpoint.
    pub fn dest_endpoint(&self) -> u8 {
        self.data[13]
    }

    /// Cluster identifier.
    pub fn cluster_id(&self) -> u16 {
        u16::from_be_bytes([self.data[14], self.data[15]])
    }

    /// Profile identifier.
    pub fn profile_id(&self) -> u16 {
        u16::from_be_bytes([self.data[16], self.data[17]])
    }

    /// Maximum broadcast hop count (0 = network default).
    pub fn broadcast_radius(&self) -> u8 {
        self.data[18]
    }

    /// Transmit options bitfield.
    pub fn options(&self) -> u8 {
        self.data[19]
    }

    /// RF payload, absent for an empty transmission.
    pub fn payload(&self) -> Option<&[u8]> {
        (self.data.len() > Self::MIN_LEN).then(|| &self.data[Self::MIN_LEN..])
    }
}

impl ApiFrame for ZigBeeExplicitAddressingCommand {
    const MIN_LEN: usize = 20;

    fn wire_bytes(&self) -> &[u8] {
        &self.data
    }
}

// ============================================================================
// ZigBee Transmit Status (0x8B)
// ============================================================================

/// Delivery report for a transmit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZigBeeTransmitStatus {
    data: Bytes,
}

impl ZigBeeTransmitStatus {
    /// Assemble a transmit status body.
    pub fn new(
        frame_id: u8,
        net_addr: NetAddr16,
        retry_count: u8,
        delivery_status: u8,
        discovery_status: u8,
    ) -> Self {
        let mut buf = Vec::with_capacity(Self::MIN_LEN);
        buf.push(FRAME_TYPE_ZIGBEE_TRANSMIT_STATUS);
        buf.push(frame_id);
        buf.extend_from_slice(net_addr.as_bytes());
        buf.push(retry_count);
        buf.push(delivery_status);
        buf.push(discovery_status);
        ZigBeeTransmitStatus { data: buf.into() }
    }

    /// Adopt a received body.
    pub fn from_wire(data: impl Into<Bytes>) -> Result<Self, ApiError> {
        let data = data.into();
        check_len(FrameKind::ZigBeeTransmitStatus, &data, Self::MIN_LEN)?;
        Ok(ZigBeeTransmitStatus { data })
    }

    /// Correlation tag from the originating request.
    pub fn frame_id(&self) -> u8 {
        self.data[1]
    }

    /// 16-bit address the packet was delivered to.
    pub fn net_addr(&self) -> NetAddr16 {
        net_addr_at(&self.data, 2)
    }

    /// Number of application transmission retries.
    pub fn retry_count(&self) -> u8 {
        self.data[4]
    }

    /// Delivery status (0 = success).
    pub fn delivery_status(&self) -> u8 {
        self.data[5]
    }

    /// Route/address discovery status.
    pub fn discovery_status(&self) -> u8 {
        self.data[6]
    }
}

impl ApiFrame for ZigBeeTransmitStatus {
    const MIN_LEN: usize = 7;

    fn wire_bytes(&self) -> &[u8] {
        &self.data
    }
}

// ============================================================================
// ZigBee Receive Packet (0x90)
// ============================================================================

/// Inbound RF data packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZigBeeReceivePacket {
    data: Bytes,
}

impl ZigBeeReceivePacket {
    /// Assemble a receive packet body.
    pub fn new(
        source_addr: Addr64,
        net_addr: NetAddr16,
        receive_options: u8,
        payload: &[u8],
    ) -> Self {
        let mut buf = Vec::with_capacity(Self::MIN_LEN + payload.len());
        buf.push(FRAME_TYPE_ZIGBEE_RECEIVE_PACKET);
        buf.extend_from_slice(source_addr.as_bytes());
        buf.extend_from_slice(net_addr.as_bytes());
        buf.push(receive_options);
        buf.extend_from_slice(payload);
        ZigBeeReceivePacket { data: buf.into() }
    }

    /// Adopt a received body.
    pub fn from_wire(data: impl Into<Bytes>) -> Result<Self, ApiError> {
        let data = data.into();
        check_len(FrameKind::ZigBeeReceivePacket, &data, Self::MIN_LEN)?;
        Ok(ZigBeeReceivePacket { data })
    }

    /// 64-bit source address.
    pub fn source_addr(&self) -> Addr64 {
        addr64_at(&self.data, 1)
    }

    /// 16-bit source network address.
    pub fn net_addr(&self) -> NetAddr16 {
        net_addr_at(&self.data, 9)
    }

    /// Receive options byte.
    pub fn receive_options(&self) -> u8 {
        self.data[11]
    }

    /// Whether the packet arrived as a broadcast.
    pub fn was_broadcast(&self) -> bool {
        self.receive_options() == RECEIVE_OPTION_BROADCAST
    }

    /// RF payload, absent for an empty packet.
    pub fn payload(&self) -> Option<&[u8]> {
        (self.data.len() > Self::MIN_LEN).then(|| &self.data[Self::MIN_LEN..])
    }
}

impl ApiFrame for ZigBeeReceivePacket {
    const MIN_LEN: usize = 12;

    fn wire_bytes(&self) -> &[u8] {
        &self.data
    }
}

// ============================================================================
// ZigBee I/O Data Sample RX Indicator (0x92)
// ============================================================================

/// Automatic I/O sample from a remote module.
///
/// Fixed fields run through the analog channel mask at offset 15; the
/// sample bytes that follow are present only for channels the masks
/// enable, so decode also validates the conditional tail the masks
/// announce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZigBeeIoDataSampleRxIndicator {
    data: Bytes,
}

impl ZigBeeIoDataSampleRxIndicator {
    const DIGITAL_MASK_OFFSET: usize = 13;
    const ANALOG_MASK_OFFSET: usize = 15;
    const DIGITAL_SAMPLES_OFFSET: usize = 16;

    /// Assemble an I/O sample body. Sample fields are written only for
    /// nonzero masks; the sample-count byte at offset 12 is always 1.
    pub fn new(
        source_addr: Addr64,
        net_addr: NetAddr16,
        receive_options: u8,
        digital_mask: [u8; 2],
        analog_mask: u8,
        digital_samples: Option<[u8; 2]>,
        analog_sample: Option<u8>,
    ) -> Self {
        let mut buf = Vec::with_capacity(20);
        buf.push(FRAME_TYPE_ZIGBEE_IO_DATA_SAMPLE_RX_INDICATOR);
        buf.extend_from_slice(source_addr.as_bytes());
        buf.extend_from_slice(net_addr.as_bytes());
        buf.push(receive_options);
        buf.push(0x01); // sample sets per frame
        buf.extend_from_slice(&digital_mask);
        buf.push(analog_mask);
        if digital_mask != [0, 0] {
            buf.extend_from_slice(&digital_samples.unwrap_or([0, 0]));
        }
        if analog_mask != 0 {
            // Analog readings are transmitted as two bytes; the accessor
            // exposes the low byte.
            buf.push(0x00);
            buf.push(analog_sample.unwrap_or(0));
        }
        ZigBeeIoDataSampleRxIndicator { data: buf.into() }
    }

    /// Adopt a received body, validating the fixed fields and whatever
    /// sample tail the channel masks announce.
    pub fn from_wire(data: impl Into<Bytes>) -> Result<Self, ApiError> {
        let data = data.into();
        let kind = FrameKind::ZigBeeIoDataSampleRxIndicator;
        check_len(kind, &data, Self::MIN_LEN)?;

        let frame = ZigBeeIoDataSampleRxIndicator { data };
        let digital = frame.digital_mask() != [0, 0];
        let analog = frame.analog_mask() != 0;
        let needed = match (digital, analog) {
            (true, true) => 20,
            (true, false) | (false, true) => 18,
            (false, false) => Self::MIN_LEN,
        };
        check_len(kind, frame.wire_bytes(), needed)?;
        Ok(frame)
    }

    /// 64-bit source address.
    pub fn source_addr(&self) -> Addr64 {
        addr64_at(&self.data, 1)
    }

    /// 16-bit source network address.
    pub fn net_addr(&self) -> NetAddr16 {
        net_addr_at(&self.data, 9)
    }

    /// Whether the sample arrived as a broadcast.
    pub fn was_broadcast(&self) -> bool {
        self.data[11] == RECEIVE_OPTION_BROADCAST
    }

    /// Digital channel mask (bits for DIO0..DIO12).
    pub fn digital_mask(&self) -> [u8; 2] {
        [
            self.data[Self::DIGITAL_MASK_OFFSET],
            self.data[Self::DIGITAL_MASK_OFFSET + 1],
        ]
    }

    /// Analog channel mask (bits for AD0..AD3).
    pub fn analog_mask(&self) -> u8 {
        self.data[Self::ANALOG_MASK_OFFSET]
    }

    /// Digital sample bits. `None` when no digital channels are enabled,
    /// which is distinct from all-zero samples.
    pub fn digital_samples(&self) -> Option<[u8; 2]> {
        (self.digital_mask() != [0, 0]).then(|| {
            [
                self.data[Self::DIGITAL_SAMPLES_OFFSET],
                self.data[Self::DIGITAL_SAMPLES_OFFSET + 1],
            ]
        })
    }

    /// Low byte of the analog reading. `None` when no analog channels are
    /// enabled.
    pub fn analog_sample(&self) -> Option<u8> {
        if self.analog_mask() == 0 {
            return None;
        }
        let offset = if self.digital_mask() != [0, 0] { 19 } else { 17 };
        Some(self.data[offset])
    }
}

impl ApiFrame for ZigBeeIoDataSampleRxIndicator {
    const MIN_LEN: usize = 16;

    fn wire_bytes(&self) -> &[u8] {
        &self.data
    }
}

// ============================================================================
// Remote Command Request (0x17)
// ============================================================================

/// AT command addressed to a remote module over the mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCommandRequest {
    data: Bytes,
}

impl RemoteCommandRequest {
    /// Assemble a remote command request.
    pub fn new(
        frame_id: u8,
        dest_addr: Addr64,
        net_addr: NetAddr16,
        options: u8,
        at_command: [u8; AT_COMMAND_SIZE],
        parameter: Option<&[u8]>,
    ) -> Self {
        let mut buf = Vec::with_capacity(Self::MIN_LEN + parameter.map_or(0, <[u8]>::len));
        buf.push(FRAME_TYPE_REMOTE_COMMAND_REQUEST);
        buf.push(frame_id);
        buf.extend_from_slice(dest_addr.as_bytes());
        buf.extend_from_slice(net_addr.as_bytes());
        buf.push(options);
        buf.extend_from_slice(&at_command);
        if let Some(value) = parameter {
            buf.extend_from_slice(value);
        }
        RemoteCommandRequest { data: buf.into() }
    }

    /// Adopt a received body.
    pub fn from_wire(data: impl Into<Bytes>) -> Result<Self, ApiError> {
        let data = data.into();
        check_len(FrameKind::RemoteCommandRequest, &data, Self::MIN_LEN)?;
        Ok(RemoteCommandRequest { data })
    }

    /// Correlation tag echoed in the remote response.
    pub fn frame_id(&self) -> u8 {
        self.data[1]
    }

    /// 64-bit destination address.
    pub fn dest_addr(&self) -> Addr64 {
        addr64_at(&self.data, 2)
    }

    /// 16-bit destination network address.
    pub fn net_addr(&self) -> NetAddr16 {
        net_addr_at(&self.data, 10)
    }

    /// Remote command options bitfield.
    pub fn options(&self) -> u8 {
        self.data[12]
    }

    /// The two-character AT command.
    pub fn at_command(&self) -> [u8; AT_COMMAND_SIZE] {
        [self.data[13], self.data[14]]
    }

    /// The parameter value, absent when the command is a query.
    pub fn parameter(&self) -> Option<&[u8]> {
        (self.data.len() > Self::MIN_LEN).then(|| &self.data[Self::MIN_LEN..])
    }
}

impl ApiFrame for RemoteCommandRequest {
    const MIN_LEN: usize = 15;

    fn wire_bytes(&self) -> &[u8] {
        &self.data
    }
}

// ============================================================================
// Remote Command Response (0x97)
// ============================================================================

/// Response to a remote AT command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCommandResponse {
    data: Bytes,
}

impl RemoteCommandResponse {
    /// Assemble a remote command response body.
    pub fn new(
        frame_id: u8,
        source_addr: Addr64,
        net_addr: NetAddr16,
        at_command: [u8; AT_COMMAND_SIZE],
        command_status: u8,
        command_data: Option<&[u8]>,
    ) -> Self {
        let mut buf = Vec::with_capacity(Self::MIN_LEN + command_data.map_or(0, <[u8]>::len));
        buf.push(FRAME_TYPE_REMOTE_COMMAND_RESPONSE);
        buf.push(frame_id);
        buf.extend_from_slice(source_addr.as_bytes());
        buf.extend_from_slice(net_addr.as_bytes());
        buf.extend_from_slice(&at_command);
        buf.push(command_status);
        if let Some(value) = command_data {
            buf.extend_from_slice(value);
        }
        RemoteCommandResponse { data: buf.into() }
    }

    /// Adopt a received body.
    pub fn from_wire(data: impl Into<Bytes>) -> Result<Self, ApiError> {
        let data = data.into();
        check_len(FrameKind::RemoteCommandResponse, &data, Self::MIN_LEN)?;
        Ok(RemoteCommandResponse { data })
    }

    /// Correlation tag from the originating request.
    pub fn frame_id(&self) -> u8 {
        self.data[1]
    }

    /// 64-bit address of the responding module.
    pub fn source_addr(&self) -> Addr64 {
        addr64_at(&self.data, 2)
    }

    /// 16-bit address of the responding module.
    pub fn net_addr(&self) -> NetAddr16 {
        net_addr_at(&self.data, 10)
    }

    /// The two-character AT command this responds to.
    pub fn at_command(&self) -> [u8; AT_COMMAND_SIZE] {
        [self.data[12], self.data[13]]
    }

    /// Command status byte (0 = OK).
    pub fn command_status(&self) -> u8 {
        self.data[14]
    }

    /// Register value for query responses; absent for plain acknowledgements.
    pub fn command_data(&self) -> Option<&[u8]> {
        (self.data.len() > Self::MIN_LEN).then(|| &self.data[Self::MIN_LEN..])
    }
}

impl ApiFrame for RemoteCommandResponse {
    const MIN_LEN: usize = 15;

    fn wire_bytes(&self) -> &[u8] {
        &self.data
    }
}

// ============================================================================
// Node Identification Indicator (0x95)
// ============================================================================

/// Broadcast identification from a joining or commissioned node.
///
/// The node identifier string is NUL-terminated and embedded mid-frame;
/// every field after it shifts right by the identifier's length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeIdentificationIndicator {
    data: Bytes,
}

impl NodeIdentificationIndicator {
    const IDENTIFIER_OFFSET: usize = 22;

    /// Assemble a node identification body. The identifier must not
    /// contain NUL bytes (it is NUL-terminated on the wire).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        source_addr: Addr64,
        source_net_addr: NetAddr16,
        receive_options: u8,
        dest_net_addr: NetAddr16,
        dest_addr: Addr64,
        node_identifier: &str,
        parent_addr: NetAddr16,
        device_type: u8,
        source_event: u8,
        digi_profile_id: u16,
        manufacturer_id: u16,
    ) -> Self {
        let mut buf = Vec::with_capacity(Self::MIN_LEN + node_identifier.len());
        buf.push(FRAME_TYPE_NODE_IDENTIFICATION_INDICATOR);
        buf.extend_from_slice(source_addr.as_bytes());
        buf.extend_from_slice(source_net_addr.as_bytes());
        buf.push(receive_options);
        buf.extend_from_slice(dest_net_addr.as_bytes());
        buf.extend_from_slice(dest_addr.as_bytes());
        buf.extend_from_slice(node_identifier.as_bytes());
        buf.push(0x00);
        buf.extend_from_slice(parent_addr.as_bytes());
        buf.push(device_type);
        buf.push(source_event);
        buf.extend_from_slice(&digi_profile_id.to_be_bytes());
        buf.extend_from_slice(&manufacturer_id.to_be_bytes());
        NodeIdentificationIndicator { data: buf.into() }
    }

    /// Adopt a received body. Requires the identifier's NUL terminator and
    /// the full shifted tail through the manufacturer ID.
    pub fn from_wire(data: impl Into<Bytes>) -> Result<Self, ApiError> {
        let data = data.into();
        let kind = FrameKind::NodeIdentificationIndicator;
        check_len(kind, &data, Self::MIN_LEN)?;

        let terminator = data[Self::IDENTIFIER_OFFSET..]
            .iter()
            .position(|&b| b == 0x00)
            .ok_or(ApiError::MalformedFrame {
                kind,
                expected: Self::MIN_LEN,
                actual: data.len(),
            })?;
        check_len(kind, &data, Self::MIN_LEN + terminator)?;
        Ok(NodeIdentificationIndicator { data })
    }

    fn identifier_len(&self) -> usize {
        self.data[Self::IDENTIFIER_OFFSET..]
            .iter()
            .position(|&b| b == 0x00)
            .unwrap_or(0)
    }

    /// 64-bit address of the identifying node.
    pub fn source_addr(&self) -> Addr64 {
        addr64_at(&self.data, 1)
    }

    /// 16-bit address of the identifying node.
    pub fn source_net_addr(&self) -> NetAddr16 {
        net_addr_at(&self.data, 9)
    }

    /// Whether the indication arrived as a broadcast.
    pub fn was_broadcast(&self) -> bool {
        self.data[11] == RECEIVE_OPTION_BROADCAST
    }

    /// 16-bit destination network address.
    pub fn dest_net_addr(&self) -> NetAddr16 {
        net_addr_at(&self.data, 12)
    }

    /// 64-bit destination address.
    pub fn dest_addr(&self) -> Addr64 {
        addr64_at(&self.data, 14)
    }

    /// The node identifier string (NI register), without its terminator.
    pub fn node_identifier(&self) -> String {
        let len = self.identifier_len();
        String::from_utf8_lossy(
            &self.data[Self::IDENTIFIER_OFFSET..Self::IDENTIFIER_OFFSET + len],
        )
        .to_string()
    }

    /// 16-bit address of the node's parent (0xFFFE for non-end-devices).
    pub fn parent_addr(&self) -> NetAddr16 {
        net_addr_at(&self.data, 23 + self.identifier_len())
    }

    /// Device type (0 = coordinator, 1 = router, 2 = end device).
    pub fn device_type(&self) -> u8 {
        self.data[25 + self.identifier_len()]
    }

    /// Event that triggered the identification (e.g. commissioning button).
    pub fn source_event(&self) -> u8 {
        self.data[26 + self.identifier_len()]
    }

    /// Digi application profile identifier.
    pub fn digi_profile_id(&self) -> u16 {
        let i = 27 + self.identifier_len();
        u16::from_be_bytes([self.data[i], self.data[i + 1]])
    }

    /// Manufacturer identifier.
    pub fn manufacturer_id(&self) -> u16 {
        let i = 29 + self.identifier_len();
        u16::from_be_bytes([self.data[i], self.data[i + 1]])
    }
}

impl ApiFrame for NodeIdentificationIndicator {
    // Fixed fields plus an empty identifier and its terminator.
    const MIN_LEN: usize = 31;

    fn wire_bytes(&self) -> &[u8] {
        &self.data
    }
}

// ============================================================================
// Modem Status (0x8A)
// ============================================================================

/// Unsolicited modem status (reset, join, disassociation, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModemStatus {
    data: Bytes,
}

impl ModemStatus {
    /// Assemble a modem status body.
    pub fn new(status: u8) -> Self {
        ModemStatus {
            data: Bytes::from(vec![FRAME_TYPE_MODEM_STATUS, status]),
        }
    }

    /// Adopt a received body.
    pub fn from_wire(data: impl Into<Bytes>) -> Result<Self, ApiError> {
        let data = data.into();
        check_len(FrameKind::ModemStatus, &data, Self::MIN_LEN)?;
        Ok(ModemStatus { data })
    }

    /// The status byte (0 = hardware reset, 2 = joined network, ...).
    pub fn status(&self) -> u8 {
        self.data[1]
    }
}

impl ApiFrame for ModemStatus {
    const MIN_LEN: usize = 2;

    fn wire_bytes(&self) -> &[u8] {
        &self.data
    }
}

// ============================================================================
// Unknown Frame
// ============================================================================

/// A frame whose kind is recognized but undecoded, or not recognized at
/// all. Carries the raw body so callers can still inspect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFrame {
    data: Bytes,
}

impl UnknownFrame {
    /// Adopt a received body.
    pub fn from_wire(data: impl Into<Bytes>) -> Result<Self, ApiError> {
        let data = data.into();
        if data.is_empty() {
            return Err(ApiError::MalformedFrame {
                kind: FrameKind::Unknown(0),
                expected: Self::MIN_LEN,
                actual: 0,
            });
        }
        Ok(UnknownFrame { data })
    }

    /// The frame kind derived from the leading type byte.
    pub fn kind(&self) -> FrameKind {
        FrameKind::from(self.data[0])
    }
}

impl ApiFrame for UnknownFrame {
    const MIN_LEN: usize = 1;

    fn wire_bytes(&self) -> &[u8] {
        &self.data
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Any API frame, decoded by type byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyFrame {
    /// Local AT command request.
    AtCommand(AtCommand),
    /// Local AT command response.
    AtCommandResponse(AtCommandResponse),
    /// ZigBee transmit request.
    ZigBeeTransmitRequest(ZigBeeTransmitRequest),
    /// ZigBee explicit addressing command.
    ZigBeeExplicitAddressingCommand(ZigBeeExplicitAddressingCommand),
    /// ZigBee transmit status.
    ZigBeeTransmitStatus(ZigBeeTransmitStatus),
    /// ZigBee receive packet.
    ZigBeeReceivePacket(ZigBeeReceivePacket),
    /// ZigBee I/O data sample RX indicator.
    ZigBeeIoDataSampleRxIndicator(ZigBeeIoDataSampleRxIndicator),
    /// Remote AT command request.
    RemoteCommandRequest(RemoteCommandRequest),
    /// Remote AT command response.
    RemoteCommandResponse(RemoteCommandResponse),
    /// Node identification indicator.
    NodeIdentificationIndicator(NodeIdentificationIndicator),
    /// Modem status.
    ModemStatus(ModemStatus),
    /// Recognized-but-undecoded or unrecognized frame, carried raw.
    Unknown(UnknownFrame),
}

impl AnyFrame {
    /// Decode a frame body by its leading type byte.
    ///
    /// An unrecognized or undecoded type byte is not an error: the body is
    /// wrapped as [`AnyFrame::Unknown`]. Only a body shorter than its
    /// type's minimum is rejected.
    pub fn decode(data: impl Into<Bytes>) -> Result<Self, ApiError> {
        let data = data.into();
        if data.is_empty() {
            return Err(ApiError::MalformedFrame {
                kind: FrameKind::Unknown(0),
                expected: 1,
                actual: 0,
            });
        }

        let kind = FrameKind::from(data[0]);
        match kind {
            FrameKind::AtCommand => AtCommand::from_wire(data).map(AnyFrame::AtCommand),
            FrameKind::AtCommandResponse => {
                AtCommandResponse::from_wire(data).map(AnyFrame::AtCommandResponse)
            }
            FrameKind::ZigBeeTransmitRequest => {
                ZigBeeTransmitRequest::from_wire(data).map(AnyFrame::ZigBeeTransmitRequest)
            }
            FrameKind::ZigBeeExplicitAddressingCommand => {
                ZigBeeExplicitAddressingCommand::from_wire(data)
                    .map(AnyFrame::ZigBeeExplicitAddressingCommand)
            }
            FrameKind::ZigBeeTransmitStatus => {
                ZigBeeTransmitStatus::from_wire(data).map(AnyFrame::ZigBeeTransmitStatus)
            }
            FrameKind::ZigBeeReceivePacket => {
                ZigBeeReceivePacket::from_wire(data).map(AnyFrame::ZigBeeReceivePacket)
            }
            FrameKind::ZigBeeIoDataSampleRxIndicator => {
                ZigBeeIoDataSampleRxIndicator::from_wire(data)
                    .map(AnyFrame::ZigBeeIoDataSampleRxIndicator)
            }
            FrameKind::RemoteCommandRequest => {
                RemoteCommandRequest::from_wire(data).map(AnyFrame::RemoteCommandRequest)
            }
            FrameKind::RemoteCommandResponse => {
                RemoteCommandResponse::from_wire(data).map(AnyFrame::RemoteCommandResponse)
            }
            FrameKind::NodeIdentificationIndicator => {
                NodeIdentificationIndicator::from_wire(data)
                    .map(AnyFrame::NodeIdentificationIndicator)
            }
            FrameKind::ModemStatus => ModemStatus::from_wire(data).map(AnyFrame::ModemStatus),
            other => {
                if !matches!(other, FrameKind::Unknown(_)) {
                    log::debug!("no decoder for {other}, delivering raw body");
                }
                UnknownFrame::from_wire(data).map(AnyFrame::Unknown)
            }
        }
    }

    /// The frame kind of this value.
    pub fn kind(&self) -> FrameKind {
        FrameKind::from(self.wire_bytes()[0])
    }

    /// The frame body exactly as transmitted.
    pub fn wire_bytes(&self) -> &[u8] {
        match self {
            AnyFrame::AtCommand(f) => f.wire_bytes(),
            AnyFrame::AtCommandResponse(f) => f.wire_bytes(),
            AnyFrame::ZigBeeTransmitRequest(f) => f.wire_bytes(),
            AnyFrame::ZigBeeExplicitAddressingCommand(f) => f.wire_bytes(),
            AnyFrame::ZigBeeTransmitStatus(f) => f.wire_bytes(),
            AnyFrame::ZigBeeReceivePacket(f) => f.wire_bytes(),
            AnyFrame::ZigBeeIoDataSampleRxIndicator(f) => f.wire_bytes(),
            AnyFrame::RemoteCommandRequest(f) => f.wire_bytes(),
            AnyFrame::RemoteCommandResponse(f) => f.wire_bytes(),
            AnyFrame::NodeIdentificationIndicator(f) => f.wire_bytes(),
            AnyFrame::ModemStatus(f) => f.wire_bytes(),
            AnyFrame::Unknown(f) => f.wire_bytes(),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for AnyFrame {
                fn from(frame: $variant) -> Self {
                    AnyFrame::$variant(frame)
                }
            }
        )*
    };
}

impl_from_variant!(
    AtCommand,
    AtCommandResponse,
    ZigBeeTransmitRequest,
    ZigBeeExplicitAddressingCommand,
    ZigBeeTransmitStatus,
    ZigBeeReceivePacket,
    ZigBeeIoDataSampleRxIndicator,
    RemoteCommandRequest,
    RemoteCommandResponse,
    NodeIdentificationIndicator,
    ModemStatus,
);

impl From<UnknownFrame> for AnyFrame {
    fn from(frame: UnknownFrame) -> Self {
        AnyFrame::Unknown(frame)
    }
}

impl std::fmt::Display for AnyFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnyFrame::AtCommand(c) => write!(
                f,
                "ATCommand id={} cmd={}",
                c.frame_id(),
                String::from_utf8_lossy(&c.at_command())
            ),
            AnyFrame::AtCommandResponse(r) => write!(
                f,
                "ATCommandResponse id={} cmd={} status={}",
                r.frame_id(),
                String::from_utf8_lossy(&r.at_command()),
                r.command_status()
            ),
            AnyFrame::ZigBeeTransmitRequest(t) => write!(
                f,
                "TransmitRequest id={} dest={} net={}",
                t.frame_id(),
                t.dest_addr(),
                t.net_addr()
            ),
            AnyFrame::ZigBeeExplicitAddressingCommand(t) => write!(
                f,
                "ExplicitAddressingCommand id={} dest={} cluster=0x{:04X} profile=0x{:04X}",
                t.frame_id(),
                t.dest_addr(),
                t.cluster_id(),
                t.profile_id()
            ),
            AnyFrame::ZigBeeTransmitStatus(s) => write!(
                f,
                "TransmitStatus id={} delivery={} retries={}",
                s.frame_id(),
                s.delivery_status(),
                s.retry_count()
            ),
            AnyFrame::ZigBeeReceivePacket(p) => write!(
                f,
                "ReceivePacket source={} net={} broadcast={}",
                p.source_addr(),
                p.net_addr(),
                p.was_broadcast()
            ),
            AnyFrame::ZigBeeIoDataSampleRxIndicator(s) => write!(
                f,
                "IoDataSample source={} digital={:02X?} analog=0x{:02X}",
                s.source_addr(),
                s.digital_mask(),
                s.analog_mask()
            ),
            AnyFrame::RemoteCommandRequest(r) => write!(
                f,
                "RemoteCommandRequest id={} dest={} cmd={}",
                r.frame_id(),
                r.dest_addr(),
                String::from_utf8_lossy(&r.at_command())
            ),
            AnyFrame::RemoteCommandResponse(r) => write!(
                f,
                "RemoteCommandResponse id={} source={} cmd={} status={}",
                r.frame_id(),
                r.source_addr(),
                String::from_utf8_lossy(&r.at_command()),
                r.command_status()
            ),
            AnyFrame::NodeIdentificationIndicator(n) => write!(
                f,
                "NodeIdentification source={} identifier={:?}",
                n.source_addr(),
                n.node_identifier()
            ),
            AnyFrame::ModemStatus(m) => write!(f, "ModemStatus status={}", m.status()),
            AnyFrame::Unknown(u) => {
                write!(f, "Unknown kind={} len={}", u.kind(), u.wire_bytes().len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_command_encodes_known_vector() {
        // ATCommand{frameID:1, atCommand:"NJ", parameterValue:[0xFF]}
        let frame = AtCommand::new(1, *b"NJ", Some(&[0xFF]));
        assert_eq!(frame.wire_bytes(), &[0x08, 0x01, 0x4E, 0x4A, 0xFF]);
        assert_eq!(frame.frame_id(), 1);
        assert_eq!(frame.at_command(), *b"NJ");
        assert_eq!(frame.parameter_value(), Some(&[0xFF][..]));
    }

    #[test]
    fn at_command_query_has_no_parameter() {
        let frame = AtCommand::new(1, *b"NJ", None);
        assert_eq!(frame.wire_bytes().len(), 4);
        assert_eq!(frame.parameter_value(), None);
    }

    #[test]
    fn encoding_is_idempotent() {
        let a = ZigBeeTransmitRequest::new(
            1,
            Addr64::from(0x0013A20040522BAA),
            NetAddr16::UNKNOWN,
            0,
            TX_OPTION_APS_ENCRYPTION,
            b"hello",
        );
        let b = ZigBeeTransmitRequest::new(
            1,
            Addr64::from(0x0013A20040522BAA),
            NetAddr16::UNKNOWN,
            0,
            TX_OPTION_APS_ENCRYPTION,
            b"hello",
        );
        assert_eq!(a.wire_bytes(), b.wire_bytes());
    }

    #[test]
    fn transmit_request_layout() {
        let frame = ZigBeeTransmitRequest::new(
            0x42,
            Addr64::from(0x0102030405060708),
            NetAddr16::from(0xFFFE),
            3,
            0x20,
            &[0xAA, 0xBB],
        );
        let wire = frame.wire_bytes();
        assert_eq!(wire[0], 0x10);
        assert_eq!(wire[1], 0x42);
        assert_eq!(&wire[2..10], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(&wire[10..12], &[0xFF, 0xFE]);
        assert_eq!(wire[12], 3);
        assert_eq!(wire[13], 0x20);
        assert_eq!(&wire[14..], &[0xAA, 0xBB]);

        let decoded = ZigBeeTransmitRequest::from_wire(wire.to_vec()).unwrap();
        assert_eq!(decoded.dest_addr().to_u64(), 0x0102030405060708);
        assert_eq!(decoded.net_addr().to_u16(), 0xFFFE);
        assert_eq!(decoded.payload(), Some(&[0xAA, 0xBB][..]));
    }

    #[test]
    fn explicit_addressing_layout() {
        let frame = ZigBeeExplicitAddressingCommand::new(
            7,
            Addr64::BROADCAST,
            NetAddr16::BROADCAST,
            0xE8,
            0xE8,
            0x0011,
            0xC105,
            0,
            0,
            b"x",
        );
        let decoded =
            ZigBeeExplicitAddressingCommand::from_wire(frame.wire_bytes().to_vec()).unwrap();
        assert_eq!(decoded.source_endpoint(), 0xE8);
        assert_eq!(decoded.dest_endpoint(), 0xE8);
        assert_eq!(decoded.cluster_id(), 0x0011);
        assert_eq!(decoded.profile_id(), 0xC105);
        assert_eq!(decoded.payload(), Some(&b"x"[..]));
    }

    #[test]
    fn transmit_status_round_trip() {
        let frame = ZigBeeTransmitStatus::new(9, NetAddr16::from(0x1234), 2, 0x00, 0x02);
        let decoded = ZigBeeTransmitStatus::from_wire(frame.wire_bytes().to_vec()).unwrap();
        assert_eq!(decoded.frame_id(), 9);
        assert_eq!(decoded.net_addr().to_u16(), 0x1234);
        assert_eq!(decoded.retry_count(), 2);
        assert_eq!(decoded.delivery_status(), 0);
        assert_eq!(decoded.discovery_status(), 2);
    }

    #[test]
    fn receive_packet_broadcast_predicate() {
        let unicast = ZigBeeReceivePacket::new(
            Addr64::from(0x11),
            NetAddr16::from(0x22),
            0x01,
            b"data",
        );
        assert!(!unicast.was_broadcast());

        let broadcast = ZigBeeReceivePacket::new(
            Addr64::from(0x11),
            NetAddr16::from(0x22),
            RECEIVE_OPTION_BROADCAST,
            b"data",
        );
        assert!(broadcast.was_broadcast());
        assert_eq!(broadcast.payload(), Some(&b"data"[..]));
    }

    #[test]
    fn short_body_is_malformed() {
        let err = AtCommandResponse::from_wire(vec![0x88, 0x01]).unwrap_err();
        assert_eq!(
            err,
            ApiError::MalformedFrame {
                kind: FrameKind::AtCommandResponse,
                expected: 5,
                actual: 2,
            }
        );
    }

    #[test]
    fn io_sample_absent_digital_is_none_not_empty() {
        let frame = ZigBeeIoDataSampleRxIndicator::new(
            Addr64::from(0x0013A200AABBCCDD),
            NetAddr16::from(0x1234),
            0x01,
            [0x00, 0x00],
            0x01,
            None,
            Some(0x7F),
        );
        assert_eq!(frame.digital_samples(), None);
        assert_eq!(frame.analog_sample(), Some(0x7F));
    }

    #[test]
    fn io_sample_with_both_channel_sets() {
        let frame = ZigBeeIoDataSampleRxIndicator::new(
            Addr64::from(0x0013A200AABBCCDD),
            NetAddr16::from(0x1234),
            RECEIVE_OPTION_BROADCAST,
            [0x00, 0x08],
            0x01,
            Some([0x00, 0x08]),
            Some(0x3C),
        );
        assert!(frame.was_broadcast());
        assert_eq!(frame.digital_samples(), Some([0x00, 0x08]));
        assert_eq!(frame.analog_sample(), Some(0x3C));

        let decoded =
            ZigBeeIoDataSampleRxIndicator::from_wire(frame.wire_bytes().to_vec()).unwrap();
        assert_eq!(decoded, frame);
    }

    #[test]
    fn io_sample_mask_announces_missing_tail() {
        // Digital mask nonzero but no sample bytes follow.
        let mut body = vec![0x92];
        body.extend_from_slice(&[0u8; 8]); // source addr
        body.extend_from_slice(&[0u8; 2]); // net addr
        body.push(0x01); // receive options
        body.push(0x01); // sample count
        body.extend_from_slice(&[0x00, 0x08]); // digital mask
        body.push(0x00); // analog mask
        let err = ZigBeeIoDataSampleRxIndicator::from_wire(body).unwrap_err();
        assert!(matches!(err, ApiError::MalformedFrame { expected: 18, .. }));
    }

    #[test]
    fn remote_command_round_trip() {
        let req = RemoteCommandRequest::new(
            1,
            Addr64::from(0x0013A20040522BAA),
            NetAddr16::UNKNOWN,
            TX_OPTION_APS_ENCRYPTION,
            *b"D0",
            Some(&[0x05]),
        );
        let decoded = RemoteCommandRequest::from_wire(req.wire_bytes().to_vec()).unwrap();
        assert_eq!(decoded.options(), 0x20);
        assert_eq!(decoded.at_command(), *b"D0");
        assert_eq!(decoded.parameter(), Some(&[0x05][..]));

        let resp = RemoteCommandResponse::new(
            1,
            Addr64::from(0x0013A20040522BAA),
            NetAddr16::from(0x5678),
            *b"D0",
            0,
            Some(&[0x05]),
        );
        let decoded = RemoteCommandResponse::from_wire(resp.wire_bytes().to_vec()).unwrap();
        assert_eq!(decoded.command_status(), 0);
        assert_eq!(decoded.command_data(), Some(&[0x05][..]));
    }

    #[test]
    fn node_identification_shifted_fields() {
        let frame = NodeIdentificationIndicator::new(
            Addr64::from(0x0013A200AABBCCDD),
            NetAddr16::from(0x1234),
            RECEIVE_OPTION_BROADCAST,
            NetAddr16::BROADCAST,
            Addr64::BROADCAST,
            "SENSOR-7",
            NetAddr16::UNKNOWN,
            0x01,
            0x02,
            0xC105,
            0x101E,
        );
        let decoded =
            NodeIdentificationIndicator::from_wire(frame.wire_bytes().to_vec()).unwrap();
        assert_eq!(decoded.node_identifier(), "SENSOR-7");
        assert!(decoded.was_broadcast());
        assert_eq!(decoded.parent_addr(), NetAddr16::UNKNOWN);
        assert_eq!(decoded.device_type(), 0x01);
        assert_eq!(decoded.source_event(), 0x02);
        assert_eq!(decoded.digi_profile_id(), 0xC105);
        assert_eq!(decoded.manufacturer_id(), 0x101E);
    }

    #[test]
    fn node_identification_empty_identifier() {
        let frame = NodeIdentificationIndicator::new(
            Addr64::from(0x01),
            NetAddr16::from(0x02),
            0x01,
            NetAddr16::from(0x03),
            Addr64::from(0x04),
            "",
            NetAddr16::UNKNOWN,
            0x00,
            0x01,
            0xC105,
            0x101E,
        );
        assert_eq!(frame.wire_bytes().len(), 31);
        let decoded =
            NodeIdentificationIndicator::from_wire(frame.wire_bytes().to_vec()).unwrap();
        assert_eq!(decoded.node_identifier(), "");
        assert_eq!(decoded.manufacturer_id(), 0x101E);
    }

    #[test]
    fn node_identification_missing_terminator_rejected() {
        let mut body = vec![0x95];
        body.extend_from_slice(&[0xAA; 30]); // no NUL anywhere after offset 22
        let err = NodeIdentificationIndicator::from_wire(body).unwrap_err();
        assert!(matches!(err, ApiError::MalformedFrame { .. }));
    }

    #[test]
    fn modem_status() {
        let frame = ModemStatus::new(0x06);
        let decoded = ModemStatus::from_wire(frame.wire_bytes().to_vec()).unwrap();
        assert_eq!(decoded.status(), 0x06);
    }

    #[test]
    fn decode_dispatches_by_type_byte() {
        let frame = AnyFrame::decode(vec![0x08, 0x01, 0x4E, 0x4A, 0xFF]).unwrap();
        match &frame {
            AnyFrame::AtCommand(cmd) => {
                assert_eq!(cmd.frame_id(), 1);
                assert_eq!(cmd.at_command(), *b"NJ");
            }
            other => panic!("expected AtCommand, got {other:?}"),
        }
        assert_eq!(frame.kind(), FrameKind::AtCommand);
    }

    #[test]
    fn decode_wraps_recognized_but_undecoded_kinds() {
        // Route record indicator has no dedicated decoder.
        let frame = AnyFrame::decode(vec![0xA1, 0x00, 0x01, 0x02]).unwrap();
        match &frame {
            AnyFrame::Unknown(u) => assert_eq!(u.kind(), FrameKind::RouteRecordIndicator),
            other => panic!("expected Unknown, got {other:?}"),
        }
    }

    #[test]
    fn decode_wraps_unmapped_kinds() {
        let frame = AnyFrame::decode(vec![0xEE, 0x42]).unwrap();
        match &frame {
            AnyFrame::Unknown(u) => assert_eq!(u.kind(), FrameKind::Unknown(0xEE)),
            other => panic!("expected Unknown, got {other:?}"),
        }
        assert_eq!(frame.wire_bytes(), &[0xEE, 0x42]);
    }

    #[test]
    fn decode_rejects_empty_body() {
        assert!(AnyFrame::decode(Vec::new()).is_err());
    }
}
