// inputmodule/src/protocol/responses/version.rs
//! Firmware version decoding.

use crate::protocol::responses::Response;
use crate::types::FirmwareVersion;

/// Decode a Version query response.
/// Layout: major(1) + packed minor/patch nibbles(1) + pre-release flag(1)
pub fn decode_version(resp: &Response) -> FirmwareVersion {
    FirmwareVersion {
        major: resp.byte(0),
        minor: (resp.byte(1) & 0xF0) >> 4,
        patch: resp.byte(1) & 0x0F,
        pre_release: resp.byte(2) != 0,
    }
}
