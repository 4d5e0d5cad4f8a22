// inputmodule/src/protocol/responses/status.rs
//! Single-byte and color status decoding.

use crate::protocol::responses::Response;
use crate::types::Rgb;

/// Decode a boolean status response (sleep state, animate state)
pub fn decode_flag(resp: &Response) -> bool {
    resp.byte(0) != 0
}

/// Decode the current brightness scaling (0-255)
pub fn decode_brightness(resp: &Response) -> u8 {
    resp.byte(0)
}

/// Decode the status LED color
pub fn decode_color(resp: &Response) -> Rgb {
    Rgb::new(resp.byte(0), resp.byte(1), resp.byte(2))
}
