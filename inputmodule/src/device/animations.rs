// inputmodule/src/device/animations.rs
//! Long-running display loops: blink, breathing, random equalizer, clock.
//!
//! Every loop polls its stop token once per iteration and returns after
//! the current iteration when it fires. The first transport error ends the
//! loop and propagates; nothing keeps running silently against a dead
//! link.

use std::time::Duration;

use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{HEIGHT, WIDTH};
use crate::framebuffer::text::Glyph;
use crate::transport::Transport;
use crate::utils::StopToken;
use crate::{device::InputModule, Error, Result};

/// Blink the currently displayed grid by toggling brightness every half
/// second
pub fn blink<T: Transport>(module: &InputModule<T>, stop: &StopToken) -> Result<()> {
    while !stop.is_stopped() {
        module.set_brightness(0)?;
        std::thread::sleep(Duration::from_millis(500));
        module.set_brightness(200)?;
        std::thread::sleep(Duration::from_millis(500));
    }
    Ok(())
}

/// Breathing brightness animation over the currently displayed grid.
/// Bright levels look alike, so the ramp moves quickly through the top
/// range and slowly near black.
pub fn breathing<T: Transport>(module: &InputModule<T>, stop: &StopToken) -> Result<()> {
    while !stop.is_stopped() {
        // Quickly from 250 down to 50
        for i in 0..10 {
            std::thread::sleep(Duration::from_millis(30));
            module.set_brightness(250 - i * 20)?;
        }
        // Slowly from 50 down to 0
        for i in 0..10 {
            std::thread::sleep(Duration::from_millis(60));
            module.set_brightness(50 - i * 5)?;
        }
        // Slowly back up to 50
        for i in 0..10 {
            std::thread::sleep(Duration::from_millis(60));
            module.set_brightness(i * 5)?;
        }
        // Quickly back up to 250
        for i in 0..10 {
            std::thread::sleep(Duration::from_millis(30));
            module.set_brightness(50 + i * 20)?;
        }
    }
    Ok(())
}

/// Equalizer animation with random bar heights, refreshed five times a
/// second. Low bars are weighted heavier, which reads better on the
/// matrix.
pub fn random_equalizer<T: Transport>(module: &InputModule<T>, stop: &StopToken) -> Result<()> {
    let mut rng = StdRng::from_entropy();
    // Height h gets weight (34 - h)^2
    let weights: Vec<u32> = (1..=HEIGHT as u32).map(|h| (34 - h) * (34 - h)).collect();
    let dist =
        WeightedIndex::new(&weights).map_err(|e| Error::InvalidArgument(e.to_string()))?;

    while !stop.is_stopped() {
        let values: Vec<u8> = (0..WIDTH)
            .map(|_| (dist.sample(&mut rng) + 1) as u8)
            .collect();
        module.equalizer(&values)?;
        std::thread::sleep(Duration::from_millis(200));
    }
    Ok(())
}

/// Show a clock, refreshed once per second. Wall-clock formatting and the
/// digit glyphs are the caller's: `now` returns the string to display
/// (e.g. "12:34") and `glyph` maps each character to its bitmap.
/// Characters without a glyph render blank.
pub fn clock<T, F, G>(
    module: &InputModule<T>,
    stop: &StopToken,
    now: F,
    glyph: G,
) -> Result<()>
where
    T: Transport,
    F: Fn() -> String,
    G: Fn(char) -> Option<Glyph>,
{
    while !stop.is_stopped() {
        let glyphs: Vec<Glyph> = now()
            .chars()
            .take(crate::framebuffer::text::MAX_GLYPHS)
            .map(|c| glyph(c).unwrap_or(Glyph::BLANK))
            .collect();
        module.show_glyphs(&glyphs)?;
        std::thread::sleep(Duration::from_secs(1));
    }
    Ok(())
}
