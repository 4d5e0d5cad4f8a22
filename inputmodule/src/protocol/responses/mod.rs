// inputmodule/src/protocol/responses/mod.rs
//! Decoders for the fixed-size response buffer.

pub mod fps;
pub mod status;
pub mod version;

pub use fps::{decode_fps, decode_power_mode};
pub use status::{decode_brightness, decode_color, decode_flag};
pub use version::decode_version;

use crate::constants::RESPONSE_SIZE;

/// Fixed-size response buffer read back after a query command. The module
/// always answers with 32 bytes; only the leading 1-3 bytes carry meaning,
/// depending on the opcode that was queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response([u8; RESPONSE_SIZE]);

impl Response {
    /// Wrap a raw buffer read off the wire
    pub fn new(buf: [u8; RESPONSE_SIZE]) -> Self {
        Self(buf)
    }

    /// Byte at `idx`. Indexing past the fixed size is a programming error.
    pub fn byte(&self, idx: usize) -> u8 {
        self.0[idx]
    }

    /// The full raw buffer
    pub fn as_bytes(&self) -> &[u8; RESPONSE_SIZE] {
        &self.0
    }
}

#[cfg(test)]
pub(crate) fn response_with_prefix(prefix: &[u8]) -> Response {
    let mut buf = [0u8; RESPONSE_SIZE];
    buf[..prefix.len()].copy_from_slice(prefix);
    Response::new(buf)
}
