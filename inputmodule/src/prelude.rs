// inputmodule/src/prelude.rs
//! One-stop import for the types most programs touch.

pub use crate::device::InputModule;
pub use crate::framebuffer::{Grid, PixelGrid};
pub use crate::game::{Direction, SharedDirection, SnakeConfig, SnakeGame};
pub use crate::protocol::{Command, Response};
pub use crate::transport::{MockTransport, Transport};
pub use crate::types::{
    FirmwareVersion, FpsSetting, GameControl, GameId, Opcode, Pattern, PowerMode, Rgb,
};
pub use crate::utils::StopToken;
pub use crate::{Error, Result};
