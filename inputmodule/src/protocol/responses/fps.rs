// inputmodule/src/protocol/responses/fps.rs
//! Refresh-rate decoding for the wide display.
//!
//! The fps byte cannot be interpreted on its own: the power-mode regime
//! (queried separately) decides which bits carry the rate. Low regime uses
//! the low three bits as an index into {0.25, 0.5, 1, 2, 4, 8}; high regime
//! uses bit 4 to select 32 vs 16.

use crate::constants::{HIGH_FPS_MASK, LOW_FPS_MASK};
use crate::protocol::responses::Response;
use crate::types::PowerMode;

/// Decode a power-mode query response (byte0: 0 = low, 1 = high)
pub fn decode_power_mode(resp: &Response) -> PowerMode {
    if resp.byte(0) == 0 {
        PowerMode::Low
    } else {
        PowerMode::High
    }
}

/// Decode an fps query response under the given regime
pub fn decode_fps(mode: PowerMode, resp: &Response) -> f32 {
    let raw = resp.byte(0);
    match mode {
        PowerMode::Low => match raw & LOW_FPS_MASK {
            0 => 0.25,
            1 => 0.5,
            bits => (1u32 << (bits - 2)) as f32,
        },
        PowerMode::High => {
            if raw & HIGH_FPS_MASK != 0 {
                32.0
            } else {
                16.0
            }
        }
    }
}
