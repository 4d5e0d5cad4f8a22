// inputmodule/src/utils/hex.rs
//! Hex formatting for frame logging.

use std::fmt::Write;

/// Format bytes as contiguous lowercase hex, for debug logging of frames
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // Writing into a String cannot fail
        let _ = write!(out, "{:02x}", b);
    }
    out
}
