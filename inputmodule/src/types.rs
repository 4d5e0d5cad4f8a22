// inputmodule/src/types.rs
//! Closed protocol enumerations and small domain types.
//!
//! Every enum here is a plain tagged value; string conversions go through
//! explicit lookup tables instead of living on the variants.

use crate::constants::{HIGH_FPS_MASK, LOW_FPS_MASK};

/// Command opcodes understood by the module firmware.
///
/// The set is closed: an opcode outside this table is a programming error,
/// not a runtime condition, so there is no fallible `from_u8`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Opcode {
    Brightness = 0x00,
    Pattern = 0x01,
    BootloaderReset = 0x02,
    Sleep = 0x03,
    Animate = 0x04,
    Panic = 0x05,
    Draw = 0x06,
    StageGreyCol = 0x07,
    DrawGreyColBuffer = 0x08,
    SetText = 0x09,
    StartGame = 0x10,
    GameControl = 0x11,
    GameStatus = 0x12,
    SetColor = 0x13,
    DisplayOn = 0x14,
    InvertScreen = 0x15,
    SetPixelColumn = 0x16,
    FlushFramebuffer = 0x17,
    ClearRam = 0x18,
    ScreenSaver = 0x19,
    SetFps = 0x1A,
    SetPowerMode = 0x1B,
    Version = 0x20,
}

impl Opcode {
    /// Wire byte for this opcode
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Patterns pre-programmed into the firmware
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Pattern {
    Percentage = 0x00,
    Gradient = 0x01,
    DoubleGradient = 0x02,
    DisplayLotus = 0x03,
    ZigZag = 0x04,
    FullBrightness = 0x05,
    DisplayPanic = 0x06,
    DisplayLotus2 = 0x07,
}

/// Lookup table for user-facing pattern names
pub const PATTERN_NAMES: &[(&str, Pattern)] = &[
    ("percentage", Pattern::Percentage),
    ("gradient", Pattern::Gradient),
    ("double-gradient", Pattern::DoubleGradient),
    ("lotus", Pattern::DisplayLotus),
    ("zigzag", Pattern::ZigZag),
    ("all-on", Pattern::FullBrightness),
    ("panic", Pattern::DisplayPanic),
    ("lotus2", Pattern::DisplayLotus2),
];

impl Pattern {
    /// Look a pattern up by its user-facing name
    pub fn from_name(name: &str) -> Option<Self> {
        PATTERN_NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, p)| *p)
    }
}

/// Games the module firmware can run on its own
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum GameId {
    Snake = 0x00,
    Pong = 0x01,
    Tetris = 0x02,
    GameOfLife = 0x03,
}

/// Start parameter for the embedded game of life
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum GameOfLifeStart {
    CurrentMatrix = 0x00,
    Pattern1 = 0x01,
    Blinker = 0x02,
    Toad = 0x03,
    Beacon = 0x04,
    Glider = 0x05,
}

/// Lookup table for user-facing game-of-life start parameter names
pub const GAME_OF_LIFE_START_NAMES: &[(&str, GameOfLifeStart)] = &[
    ("current-matrix", GameOfLifeStart::CurrentMatrix),
    ("pattern1", GameOfLifeStart::Pattern1),
    ("blinker", GameOfLifeStart::Blinker),
    ("toad", GameOfLifeStart::Toad),
    ("beacon", GameOfLifeStart::Beacon),
    ("glider", GameOfLifeStart::Glider),
];

impl GameOfLifeStart {
    /// Look a start parameter up by its user-facing name
    pub fn from_name(name: &str) -> Option<Self> {
        GAME_OF_LIFE_START_NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, p)| *p)
    }
}

/// Control values for embedded games
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum GameControl {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
    Quit = 4,
    SecondLeft = 5,
    SecondRight = 6,
}

/// Power/refresh regime of the wide display. The regime decides how the fps
/// byte is interpreted.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum PowerMode {
    Low = 0,
    High = 1,
}

/// Refresh rates the wide display supports. Each setting implies a power
/// regime; changing the rate also switches the regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum FpsSetting {
    Quarter,
    Half,
    One,
    Two,
    Four,
    Eight,
    Sixteen,
    ThirtyTwo,
}

/// Lookup table for user-facing refresh-rate names
pub const FPS_SETTING_NAMES: &[(&str, FpsSetting)] = &[
    ("quarter", FpsSetting::Quarter),
    ("half", FpsSetting::Half),
    ("one", FpsSetting::One),
    ("two", FpsSetting::Two),
    ("four", FpsSetting::Four),
    ("eight", FpsSetting::Eight),
    ("sixteen", FpsSetting::Sixteen),
    ("thirtytwo", FpsSetting::ThirtyTwo),
];

impl FpsSetting {
    /// Look a refresh rate up by its user-facing name
    pub fn from_name(name: &str) -> Option<Self> {
        FPS_SETTING_NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, f)| *f)
    }

    /// Bits to set in the fps byte for this rate
    pub fn bits(self) -> u8 {
        match self {
            Self::Quarter => 0b000,
            Self::Half => 0b001,
            Self::One => 0b010,
            Self::Two => 0b011,
            Self::Four => 0b100,
            Self::Eight => 0b101,
            Self::Sixteen => 0b0000_0000,
            Self::ThirtyTwo => HIGH_FPS_MASK,
        }
    }

    /// Mask of the fps-byte bits this rate occupies
    pub fn mask(self) -> u8 {
        match self.power_mode() {
            PowerMode::Low => LOW_FPS_MASK,
            PowerMode::High => HIGH_FPS_MASK,
        }
    }

    /// Regime the display must be in for this rate to apply
    pub fn power_mode(self) -> PowerMode {
        match self {
            Self::Sixteen | Self::ThirtyTwo => PowerMode::High,
            _ => PowerMode::Low,
        }
    }
}

/// RGB triple for the minimal input module's status LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[allow(missing_docs)]
impl Rgb {
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);
    pub const RED: Self = Self::new(0xFF, 0x00, 0x00);
    pub const GREEN: Self = Self::new(0x00, 0xFF, 0x00);
    pub const BLUE: Self = Self::new(0x00, 0x00, 0xFF);
    pub const CYAN: Self = Self::new(0x00, 0xFF, 0xFF);
    pub const YELLOW: Self = Self::new(0xFF, 0xFF, 0x00);
    pub const PURPLE: Self = Self::new(0xFF, 0x00, 0xFF);

    /// Build a color from its channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Look a color up by its user-facing name
    pub fn from_name(name: &str) -> Option<Self> {
        RGB_COLOR_NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| *c)
    }
}

/// Lookup table for user-facing color names
pub const RGB_COLOR_NAMES: &[(&str, Rgb)] = &[
    ("white", Rgb::WHITE),
    ("black", Rgb::BLACK),
    ("red", Rgb::RED),
    ("green", Rgb::GREEN),
    ("blue", Rgb::BLUE),
    ("cyan", Rgb::CYAN),
    ("yellow", Rgb::YELLOW),
    ("purple", Rgb::PURPLE),
];

/// Firmware version reported by the module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirmwareVersion {
    /// Major version byte
    pub major: u8,
    /// Minor version (high nibble of the packed byte)
    pub minor: u8,
    /// Patch version (low nibble of the packed byte)
    pub patch: u8,
    /// Whether the firmware identifies as a pre-release build
    pub pre_release: bool,
}

impl std::fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.pre_release {
            write!(f, " (pre-release)")?;
        }
        Ok(())
    }
}
