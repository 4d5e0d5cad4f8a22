// inputmodule/src/protocol/frame.rs
//! Raw wire-frame layout.

use crate::constants::FRAME_MAGIC;
use crate::types::Opcode;

/// Wire frame helper.
/// Format: [Magic(2)] [Opcode(1)] [Parameters(n)]
/// Magic: 0x32 0xAC
///
/// There is no length field, checksum, or upper bound on the parameter
/// bytes; the module consumes exactly as many parameters as the opcode
/// implies. The codec never truncates.
pub struct Frame;

impl Frame {
    /// Encode an opcode plus parameter bytes into a full wire frame
    pub fn encode(opcode: Opcode, params: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(FRAME_MAGIC.len() + 1 + params.len());
        out.extend_from_slice(&FRAME_MAGIC);
        out.push(opcode.as_u8());
        out.extend_from_slice(params);
        out
    }
}
