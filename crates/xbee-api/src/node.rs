//! Remote node convenience builder.
//!
//! A [`Node`] records the addressing of one remote module and stamps out
//! ready-to-send request frames for it. It owns no wire state; every call
//! produces a fresh frame through the encoders in [`crate::frames`].

use crate::address::{Addr64, NetAddr16};
use crate::constants::TX_OPTION_APS_ENCRYPTION;
use crate::frames::{
    RemoteCommandRequest, ZigBeeExplicitAddressingCommand, ZigBeeTransmitRequest,
};

/// Default correlation tag for frames built by a [`Node`].
const DEFAULT_FRAME_ID: u8 = 1;

/// A known remote module on the mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// 64-bit device address.
    pub addr: Addr64,
    /// 16-bit network address (0xFFFE when unknown).
    pub net_addr: NetAddr16,
    /// Node identifier string (NI register), if known.
    pub identifier: Option<String>,
}

impl Node {
    /// Describe a remote module by its addresses.
    pub fn new(addr: Addr64, net_addr: NetAddr16) -> Self {
        Node {
            addr,
            net_addr,
            identifier: None,
        }
    }

    /// Attach the node identifier string.
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Build a remote AT command request for this node. APS encryption is
    /// requested, matching the module's secured-network deployment default.
    pub fn remote_command_request(
        &self,
        at_command: [u8; 2],
        parameter: Option<&[u8]>,
    ) -> RemoteCommandRequest {
        RemoteCommandRequest::new(
            DEFAULT_FRAME_ID,
            self.addr,
            self.net_addr,
            TX_OPTION_APS_ENCRYPTION,
            at_command,
            parameter,
        )
    }

    /// Build a transmit request carrying `payload` to this node.
    pub fn transmit_request(&self, payload: &[u8]) -> ZigBeeTransmitRequest {
        ZigBeeTransmitRequest::new(
            DEFAULT_FRAME_ID,
            self.addr,
            self.net_addr,
            0, // broadcast radius: network default
            TX_OPTION_APS_ENCRYPTION,
            payload,
        )
    }

    /// Build an explicit addressing command to an endpoint/cluster/profile
    /// on this node.
    pub fn explicit_addressing_command(
        &self,
        source_endpoint: u8,
        dest_endpoint: u8,
        cluster_id: u16,
        profile_id: u16,
        payload: &[u8],
    ) -> ZigBeeExplicitAddressingCommand {
        ZigBeeExplicitAddressingCommand::new(
            DEFAULT_FRAME_ID,
            self.addr,
            self.net_addr,
            source_endpoint,
            dest_endpoint,
            cluster_id,
            profile_id,
            0, // broadcast radius: network default
            TX_OPTION_APS_ENCRYPTION,
            payload,
        )
    }
}
