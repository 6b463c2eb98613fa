//! Byte-stuffing for escaped (API mode 2) operation.
//!
//! Four bytes are reserved on the wire: the start delimiter (0x7E), the
//! escape marker (0x7D), XON (0x11), and XOFF (0x13). Escaping replaces
//! each with `0x7D, byte ^ 0x20`.

use crate::constants::{ESCAPE, ESCAPE_XOR, START_DELIMITER, XOFF, XON};

/// How much of a raw frame gets escaped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EscapeMode {
    /// Escape every reserved byte, the leading start delimiter included.
    #[default]
    Full,
    /// Leave byte 0 untouched; most chip firmware transmits the start
    /// delimiter unescaped and only stuffs the bytes after it.
    SkipDelimiter,
}

fn is_reserved(b: u8) -> bool {
    matches!(b, START_DELIMITER | ESCAPE | XON | XOFF)
}

/// Escape a byte sequence, left to right.
pub fn escape(raw: &[u8], mode: EscapeMode) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len() + 2);
    for (i, &b) in raw.iter().enumerate() {
        if i == 0 && mode == EscapeMode::SkipDelimiter {
            out.push(b);
        } else if is_reserved(b) {
            out.push(ESCAPE);
            out.push(b ^ ESCAPE_XOR);
        } else {
            out.push(b);
        }
    }
    out
}

/// Reverse [`escape`]: consume each 0x7D marker and undo the XOR on the
/// byte that follows it. A trailing lone marker is passed through as-is.
pub fn unescape(escaped: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(escaped.len());
    let mut iter = escaped.iter();
    while let Some(&b) = iter.next() {
        if b == ESCAPE {
            match iter.next() {
                Some(&stuffed) => out.push(stuffed ^ ESCAPE_XOR),
                None => out.push(b),
            }
        } else {
            out.push(b);
        }
    }
    out
}
