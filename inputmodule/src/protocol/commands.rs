// inputmodule/src/protocol/commands.rs
//! The command set and its parameter encodings.

use crate::constants::{FRAME_BYTES, HEIGHT, WIDE_COLUMN_BYTES};
use crate::protocol::frame::Frame;
use crate::types::{GameControl, GameId, GameOfLifeStart, Opcode, Pattern, PowerMode, Rgb};

/// High-level command enum. One variant per module operation; `Get*`
/// variants reuse the setter opcode and read a response instead of
/// carrying parameters.
#[derive(Debug, Clone)]
pub enum Command {
    /// Set the global LED brightness
    Brightness(u8),
    /// Query the current brightness
    GetBrightness,
    /// Show one of the firmware's built-in patterns
    Pattern(Pattern),
    /// Fill a percentage of the screen, bottom to top
    Percentage(u8),
    /// Reboot the module into its bootloader
    BootloaderReset,
    /// Put the module to sleep or wake it
    Sleep(bool),
    /// Query whether the module is sleeping
    GetSleep,
    /// Start or stop scrolling the current frame
    Animate(bool),
    /// Query whether the module is animating
    GetAnimate,
    /// Trigger the firmware's panic handler
    Panic,
    /// Full-frame monochrome draw, one bit per LED
    Draw([u8; FRAME_BYTES]),
    /// Stage one greyscale column; invisible until committed
    StageGreyCol {
        /// Column index on the LED matrix
        col: u8,
        /// One brightness byte per row
        values: [u8; HEIGHT],
    },
    /// Atomically display all staged greyscale columns
    CommitGreyCols,
    /// Display a string on the LCD. The wire length prefix is one byte, so
    /// text beyond 255 bytes is clamped; the device handle rejects longer
    /// input up front.
    SetText(String),
    /// Launch an embedded game on the module
    StartGame {
        /// Which game to start
        game: GameId,
        /// Start parameter; only game of life takes one
        param: Option<GameOfLifeStart>,
    },
    /// Steer or quit the currently running embedded game
    GameControl(GameControl),
    /// Query the embedded game state
    GameStatus,
    /// Set the status LED color
    SetColor(Rgb),
    /// Query the status LED color
    GetColor,
    /// Turn the LCD panel on or off
    DisplayOn(bool),
    /// Invert black and white on the LCD
    InvertScreen(bool),
    /// Stage one wide-display column (2-byte little-endian column index)
    StagePixelColumn {
        /// Column index on the wide display
        col: u16,
        /// One bit per pixel, top to bottom
        values: [u8; WIDE_COLUMN_BYTES],
    },
    /// Display whatever wide-display columns have been staged so far
    FlushFramebuffer,
    /// Clear the wide display's column RAM
    ClearRam,
    /// Enable or disable the firmware screen saver
    ScreenSaver(bool),
    /// Raw fps byte; use the device handle for the regime-aware form
    SetFps(u8),
    /// Query the raw fps byte
    GetFps,
    /// Switch the wide display's power regime
    SetPowerMode(PowerMode),
    /// Query the power regime
    GetPowerMode,
    /// Query the firmware version
    Version,
}

impl Command {
    /// Opcode byte for this command
    pub fn opcode(&self) -> Opcode {
        match self {
            Self::Brightness(_) | Self::GetBrightness => Opcode::Brightness,
            Self::Pattern(_) | Self::Percentage(_) => Opcode::Pattern,
            Self::BootloaderReset => Opcode::BootloaderReset,
            Self::Sleep(_) | Self::GetSleep => Opcode::Sleep,
            Self::Animate(_) | Self::GetAnimate => Opcode::Animate,
            Self::Panic => Opcode::Panic,
            Self::Draw(_) => Opcode::Draw,
            Self::StageGreyCol { .. } => Opcode::StageGreyCol,
            Self::CommitGreyCols => Opcode::DrawGreyColBuffer,
            Self::SetText(_) => Opcode::SetText,
            Self::StartGame { .. } => Opcode::StartGame,
            Self::GameControl(_) => Opcode::GameControl,
            Self::GameStatus => Opcode::GameStatus,
            Self::SetColor(_) | Self::GetColor => Opcode::SetColor,
            Self::DisplayOn(_) => Opcode::DisplayOn,
            Self::InvertScreen(_) => Opcode::InvertScreen,
            Self::StagePixelColumn { .. } => Opcode::SetPixelColumn,
            Self::FlushFramebuffer => Opcode::FlushFramebuffer,
            Self::ClearRam => Opcode::ClearRam,
            Self::ScreenSaver(_) => Opcode::ScreenSaver,
            Self::SetFps(_) | Self::GetFps => Opcode::SetFps,
            Self::SetPowerMode(_) | Self::GetPowerMode => Opcode::SetPowerMode,
            Self::Version => Opcode::Version,
        }
    }

    /// Parameter bytes for this command. Query variants carry none.
    pub fn params(&self) -> Vec<u8> {
        match self {
            Self::Brightness(b) => vec![*b],
            Self::Pattern(p) => vec![*p as u8],
            Self::Percentage(p) => vec![Pattern::Percentage as u8, *p],
            Self::BootloaderReset | Self::Panic | Self::ClearRam | Self::CommitGreyCols => {
                vec![0x00]
            }
            Self::Sleep(on)
            | Self::Animate(on)
            | Self::DisplayOn(on)
            | Self::InvertScreen(on)
            | Self::ScreenSaver(on) => vec![u8::from(*on)],
            Self::Draw(vals) => vals.to_vec(),
            Self::StageGreyCol { col, values } => {
                let mut params = Vec::with_capacity(1 + values.len());
                params.push(*col);
                params.extend_from_slice(values);
                params
            }
            Self::SetText(text) => {
                // The length prefix is one byte; clamp longer input so the
                // prefix always matches the payload
                let bytes = &text.as_bytes()[..text.len().min(u8::MAX as usize)];
                let mut params = Vec::with_capacity(1 + bytes.len());
                params.push(bytes.len() as u8);
                params.extend_from_slice(bytes);
                params
            }
            Self::StartGame { game, param } => {
                let mut params = vec![*game as u8];
                if let Some(p) = param {
                    params.push(*p as u8);
                }
                params
            }
            Self::GameControl(ctrl) => vec![*ctrl as u8],
            Self::SetColor(rgb) => vec![rgb.r, rgb.g, rgb.b],
            Self::StagePixelColumn { col, values } => {
                let mut params = Vec::with_capacity(2 + values.len());
                params.extend_from_slice(&col.to_le_bytes());
                params.extend_from_slice(values);
                params
            }
            Self::SetFps(fps) => vec![*fps],
            Self::SetPowerMode(mode) => vec![*mode as u8],
            Self::FlushFramebuffer
            | Self::GetBrightness
            | Self::GetSleep
            | Self::GetAnimate
            | Self::GameStatus
            | Self::GetColor
            | Self::GetFps
            | Self::GetPowerMode
            | Self::Version => Vec::new(),
        }
    }

    /// Whether the module answers this command with a response buffer
    pub fn expects_response(&self) -> bool {
        matches!(
            self,
            Self::GetBrightness
                | Self::GetSleep
                | Self::GetAnimate
                | Self::GameStatus
                | Self::GetColor
                | Self::GetFps
                | Self::GetPowerMode
                | Self::Version
        )
    }

    /// Encode into a full wire frame (magic + opcode + parameters)
    pub fn encode(&self) -> Vec<u8> {
        Frame::encode(self.opcode(), &self.params())
    }
}
