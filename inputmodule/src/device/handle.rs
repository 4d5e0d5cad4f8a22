// inputmodule/src/device/handle.rs
//! The [`InputModule`] handle: one validated protocol operation per method.

use crate::constants::{WIDE_WIDTH, WIDTH};
use crate::framebuffer::text::Glyph;
use crate::framebuffer::{eq, grey, mono, text, wide, Grid, PixelGrid};
use crate::protocol::responses;
use crate::protocol::{codec, Command};
use crate::transport::Transport;
use crate::types::{
    FirmwareVersion, FpsSetting, GameControl, GameId, GameOfLifeStart, Pattern, PowerMode, Rgb,
};
use crate::{Error, Result};

/// High-level handle for one input module. Owns the transport; every
/// method is a single protocol operation (or one staged burst), validated
/// before any byte goes out.
pub struct InputModule<T: Transport> {
    transport: T,
}

impl<T: Transport> InputModule<T> {
    /// Handle that talks through the given transport
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The transport this handle opens connections on
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Set the brightness scaling of the entire screen
    pub fn set_brightness(&self, brightness: u8) -> Result<()> {
        codec::send(&self.transport, &Command::Brightness(brightness))
    }

    /// Query the current brightness scaling
    pub fn brightness(&self) -> Result<u8> {
        let resp = codec::query(&self.transport, &Command::GetBrightness)?;
        Ok(responses::decode_brightness(&resp))
    }

    /// Tell the host-sleep state to the module
    pub fn set_sleep(&self, sleeping: bool) -> Result<()> {
        codec::send(&self.transport, &Command::Sleep(sleeping))
    }

    /// Query whether the module is sleeping
    pub fn is_sleeping(&self) -> Result<bool> {
        let resp = codec::query(&self.transport, &Command::GetSleep)?;
        Ok(responses::decode_flag(&resp))
    }

    /// Start or stop vertical scrolling of the current grid
    pub fn set_animate(&self, animate: bool) -> Result<()> {
        codec::send(&self.transport, &Command::Animate(animate))
    }

    /// Query whether the module is animating
    pub fn is_animating(&self) -> Result<bool> {
        let resp = codec::query(&self.transport, &Command::GetAnimate)?;
        Ok(responses::decode_flag(&resp))
    }

    /// Display a pattern pre-programmed into the firmware
    pub fn pattern(&self, pattern: Pattern) -> Result<()> {
        codec::send(&self.transport, &Command::Pattern(pattern))
    }

    /// Fill a percentage of the screen, bottom to top
    pub fn percentage(&self, percentage: u8) -> Result<()> {
        if percentage > 100 {
            return Err(Error::InvalidArgument(format!(
                "percentage must be 0-100, got {}",
                percentage
            )));
        }
        codec::send(&self.transport, &Command::Percentage(percentage))
    }

    /// Light the first `count` LEDs in packing order
    pub fn light_leds(&self, count: usize) -> Result<()> {
        let vals = mono::lit_led_count(count)?;
        codec::send(&self.transport, &Command::Draw(vals))
    }

    /// Reboot into the bootloader to flash new firmware
    pub fn bootloader_reset(&self) -> Result<()> {
        codec::send(&self.transport, &Command::BootloaderReset)
    }

    /// Crash the firmware (testing only)
    pub fn panic(&self) -> Result<()> {
        codec::send(&self.transport, &Command::Panic)
    }

    /// Query the firmware version
    pub fn version(&self) -> Result<FirmwareVersion> {
        let resp = codec::query(&self.transport, &Command::Version)?;
        Ok(responses::decode_version(&resp))
    }

    /// Draw a logical matrix in a single full-frame command
    pub fn draw_grid(&self, grid: &Grid) -> Result<()> {
        let vals = mono::pack_grid(grid)?;
        codec::send(&self.transport, &Command::Draw(vals))
    }

    /// Draw a 9x34 image in black and white, one command
    pub fn draw_image(&self, image: &PixelGrid) -> Result<()> {
        let vals = mono::pack_image(image)?;
        codec::send(&self.transport, &Command::Draw(vals))
    }

    /// Draw a 9x34 image in black and white via the staged-column path.
    /// The display swaps atomically on commit, so a partially transferred
    /// frame is never visible.
    pub fn draw_image_staged(&self, image: &PixelGrid) -> Result<()> {
        let cols = mono::image_columns(image)?;
        self.stage_and_commit(&cols)
    }

    /// Draw a 9x34 image in greyscale: nine staged columns, one commit
    pub fn draw_image_grey(&self, image: &PixelGrid) -> Result<()> {
        let cols = grey::image_columns(image)?;
        self.stage_and_commit(&cols)
    }

    fn stage_and_commit(&self, cols: &[[u8; crate::constants::HEIGHT]; WIDTH]) -> Result<()> {
        let mut cmds: Vec<Command> = cols
            .iter()
            .enumerate()
            .map(|(x, values)| Command::StageGreyCol {
                col: x as u8,
                values: *values,
            })
            .collect();
        cmds.push(Command::CommitGreyCols);
        codec::send_batch(&self.transport, &cmds)
    }

    /// Draw a 300x400 image on the wide display: 300 staged columns, one
    /// flush. The flush applies whatever has been staged so far; this path
    /// has no atomicity guarantee.
    pub fn draw_wide_image(&self, image: &PixelGrid) -> Result<()> {
        let cols = wide::image_columns(image)?;
        let mut cmds: Vec<Command> = cols
            .into_iter()
            .enumerate()
            .map(|(x, values)| Command::StagePixelColumn {
                col: x as u16,
                values,
            })
            .collect();
        debug_assert_eq!(cmds.len(), WIDE_WIDTH);
        cmds.push(Command::FlushFramebuffer);
        codec::send_batch(&self.transport, &cmds)
    }

    /// Show up to five 5x6 glyphs, stacked vertically
    pub fn show_glyphs(&self, glyphs: &[Glyph]) -> Result<()> {
        let grid = text::compose(glyphs)?;
        self.draw_grid(&grid)
    }

    /// Show an equalizer made of up to nine bar heights
    pub fn equalizer(&self, values: &[u8]) -> Result<()> {
        let grid = eq::bars(values)?;
        self.draw_grid(&grid)
    }

    /// Set the status LED color
    pub fn set_color(&self, color: Rgb) -> Result<()> {
        codec::send(&self.transport, &Command::SetColor(color))
    }

    /// Query the status LED color
    pub fn color(&self) -> Result<Rgb> {
        let resp = codec::query(&self.transport, &Command::GetColor)?;
        Ok(responses::decode_color(&resp))
    }

    /// Display a string on the LCD display
    pub fn set_text(&self, text: &str) -> Result<()> {
        if text.len() > u8::MAX as usize {
            return Err(Error::InvalidArgument(format!(
                "text must be at most 255 bytes, got {}",
                text.len()
            )));
        }
        codec::send(&self.transport, &Command::SetText(text.to_string()))
    }

    /// Turn the LCD panel on or off
    pub fn display_on(&self, on: bool) -> Result<()> {
        codec::send(&self.transport, &Command::DisplayOn(on))
    }

    /// Invert black and white on the LCD
    pub fn invert_screen(&self, invert: bool) -> Result<()> {
        codec::send(&self.transport, &Command::InvertScreen(invert))
    }

    /// Enable or disable the firmware screen saver
    pub fn screen_saver(&self, on: bool) -> Result<()> {
        codec::send(&self.transport, &Command::ScreenSaver(on))
    }

    /// Clear the wide display's column RAM
    pub fn clear_ram(&self) -> Result<()> {
        codec::send(&self.transport, &Command::ClearRam)
    }

    /// Switch the wide display to a refresh rate. Reads the current fps
    /// byte, rewrites only the bits of the target regime, then switches
    /// the power mode the rate requires.
    pub fn set_fps(&self, setting: FpsSetting) -> Result<()> {
        let resp = codec::query(&self.transport, &Command::GetFps)?;
        let current = resp.byte(0);
        let fps = (current & !setting.mask()) | setting.bits();
        codec::send(&self.transport, &Command::SetFps(fps))?;
        self.set_power_mode(setting.power_mode())
    }

    /// Current refresh rate in frames per second. Needs two queries: the
    /// power-mode regime decides how the fps byte is read.
    pub fn fps(&self) -> Result<f32> {
        let fps_resp = codec::query(&self.transport, &Command::GetFps)?;
        let mode = self.power_mode()?;
        Ok(responses::decode_fps(mode, &fps_resp))
    }

    /// Switch the wide display's power regime
    pub fn set_power_mode(&self, mode: PowerMode) -> Result<()> {
        codec::send(&self.transport, &Command::SetPowerMode(mode))
    }

    /// Query the power regime
    pub fn power_mode(&self) -> Result<PowerMode> {
        let resp = codec::query(&self.transport, &Command::GetPowerMode)?;
        Ok(responses::decode_power_mode(&resp))
    }

    /// Start a game on the module firmware
    pub fn start_game(&self, game: GameId, param: Option<GameOfLifeStart>) -> Result<()> {
        codec::send(&self.transport, &Command::StartGame { game, param })
    }

    /// Send a control value to the running embedded game
    pub fn game_control(&self, control: GameControl) -> Result<()> {
        codec::send(&self.transport, &Command::GameControl(control))
    }
}
