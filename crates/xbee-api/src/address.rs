//! Device addresses.
//!
//! XBee frames carry a 64-bit serial-number address and a 16-bit network
//! address, both big-endian on the wire. An address can be supplied as a
//! native integer, a hex string, or an already-ordered byte slice; the
//! canonical form is always the fixed-width big-endian byte array.

use crate::constants::{
    ADDR64_SIZE, BROADCAST_ADDR64, BROADCAST_NET_ADDR, NET_ADDR_SIZE, UNKNOWN_NET_ADDR,
};
use crate::error::ApiError;

/// A 64-bit device address in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Addr64(pub [u8; ADDR64_SIZE]);

impl Addr64 {
    /// The 64-bit broadcast address (0x000000000000FFFF).
    pub const BROADCAST: Addr64 = Addr64(BROADCAST_ADDR64.to_be_bytes());

    /// Create from wire-order bytes.
    pub fn new(bytes: [u8; ADDR64_SIZE]) -> Self {
        Addr64(bytes)
    }

    /// Create from a slice. The slice must be exactly 8 bytes, already in
    /// wire (big-endian) order.
    pub fn from_slice(slice: &[u8]) -> Result<Self, ApiError> {
        if slice.len() != ADDR64_SIZE {
            return Err(ApiError::InvalidAddressFormat(format!(
                "64-bit address needs exactly {ADDR64_SIZE} bytes, got {}",
                slice.len()
            )));
        }
        let mut bytes = [0u8; ADDR64_SIZE];
        bytes.copy_from_slice(slice);
        Ok(Addr64(bytes))
    }

    /// Parse from a hex string such as `"0013A20040522BAA"`.
    pub fn from_hex(s: &str) -> Result<Self, ApiError> {
        let value = u64::from_str_radix(s.trim_start_matches("0x"), 16).map_err(|e| {
            ApiError::InvalidAddressFormat(format!("bad 64-bit hex address {s:?}: {e}"))
        })?;
        Ok(Addr64::from(value))
    }

    /// Get the wire-order bytes.
    pub fn as_bytes(&self) -> &[u8; ADDR64_SIZE] {
        &self.0
    }

    /// Get the address as an unsigned integer.
    pub fn to_u64(&self) -> u64 {
        u64::from_be_bytes(self.0)
    }

    /// Get the address as a hex string.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl From<u64> for Addr64 {
    fn from(value: u64) -> Self {
        Addr64(value.to_be_bytes())
    }
}

impl AsRef<[u8]> for Addr64 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for Addr64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// A 16-bit network address in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetAddr16(pub [u8; NET_ADDR_SIZE]);

impl NetAddr16 {
    /// The 16-bit broadcast network address (0xFFFE).
    pub const BROADCAST: NetAddr16 = NetAddr16(BROADCAST_NET_ADDR.to_be_bytes());
    /// Placeholder when the 16-bit address is unknown (0xFFFE).
    pub const UNKNOWN: NetAddr16 = NetAddr16(UNKNOWN_NET_ADDR.to_be_bytes());

    /// Create from wire-order bytes.
    pub fn new(bytes: [u8; NET_ADDR_SIZE]) -> Self {
        NetAddr16(bytes)
    }

    /// Create from a slice. The slice must be exactly 2 bytes, already in
    /// wire (big-endian) order.
    pub fn from_slice(slice: &[u8]) -> Result<Self, ApiError> {
        if slice.len() != NET_ADDR_SIZE {
            return Err(ApiError::InvalidAddressFormat(format!(
                "16-bit address needs exactly {NET_ADDR_SIZE} bytes, got {}",
                slice.len()
            )));
        }
        let mut bytes = [0u8; NET_ADDR_SIZE];
        bytes.copy_from_slice(slice);
        Ok(NetAddr16(bytes))
    }

    /// Parse from a hex string such as `"FFFE"`. Values wider than 16 bits
    /// are rejected rather than truncated.
    pub fn from_hex(s: &str) -> Result<Self, ApiError> {
        let value = u32::from_str_radix(s.trim_start_matches("0x"), 16).map_err(|e| {
            ApiError::InvalidAddressFormat(format!("bad 16-bit hex address {s:?}: {e}"))
        })?;
        let value = u16::try_from(value).map_err(|_| {
            ApiError::InvalidAddressFormat(format!(
                "16-bit address {s:?} exceeds 0xFFFF"
            ))
        })?;
        Ok(NetAddr16::from(value))
    }

    /// Get the wire-order bytes.
    pub fn as_bytes(&self) -> &[u8; NET_ADDR_SIZE] {
        &self.0
    }

    /// Get the address as an unsigned integer.
    pub fn to_u16(&self) -> u16 {
        u16::from_be_bytes(self.0)
    }

    /// Get the address as a hex string.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl From<u16> for NetAddr16 {
    fn from(value: u16) -> Self {
        NetAddr16(value.to_be_bytes())
    }
}

impl AsRef<[u8]> for NetAddr16 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for NetAddr16 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addr64_from_integer_is_big_endian() {
        let addr = Addr64::from(0x0013A200_40522BAA);
        assert_eq!(
            addr.as_bytes(),
            &[0x00, 0x13, 0xA2, 0x00, 0x40, 0x52, 0x2B, 0xAA]
        );
    }

    #[test]
    fn addr64_hex_matches_integer() {
        let from_hex = Addr64::from_hex("0013A20040522BAA").unwrap();
        let from_int = Addr64::from(0x0013A20040522BAAu64);
        assert_eq!(from_hex, from_int);
    }

    #[test]
    fn addr64_slice_passthrough() {
        let bytes = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let addr = Addr64::from_slice(&bytes).unwrap();
        assert_eq!(addr.as_bytes(), &bytes);
    }

    #[test]
    fn addr64_wrong_width_rejected() {
        assert!(matches!(
            Addr64::from_slice(&[1, 2, 3]),
            Err(ApiError::InvalidAddressFormat(_))
        ));
    }

    #[test]
    fn addr64_round_trip() {
        let addr = Addr64::from(0xDEADBEEF_00C0FFEE);
        assert_eq!(addr.to_u64(), 0xDEADBEEF_00C0FFEE);
        assert_eq!(Addr64::from_hex(&addr.to_hex()).unwrap(), addr);
    }

    #[test]
    fn net_addr_from_integer_is_big_endian() {
        assert_eq!(NetAddr16::from(0xFFFE).as_bytes(), &[0xFF, 0xFE]);
        assert_eq!(NetAddr16::from(0x1234).to_u16(), 0x1234);
    }

    #[test]
    fn net_addr_hex_overflow_is_an_error() {
        assert!(matches!(
            NetAddr16::from_hex("10000"),
            Err(ApiError::InvalidAddressFormat(_))
        ));
        assert_eq!(NetAddr16::from_hex("FFFE").unwrap(), NetAddr16::BROADCAST);
    }

    #[test]
    fn net_addr_bad_hex_is_an_error() {
        assert!(NetAddr16::from_hex("xyz").is_err());
        assert!(Addr64::from_hex("not hex").is_err());
    }
}
