// inputmodule/src/constants.rs
//! Protocol constants shared across the crate

/// Two-byte magic that prefixes every outbound frame
pub const FRAME_MAGIC: [u8; 2] = [0x32, 0xAC];

/// Fixed size of every response buffer read back from the module
pub const RESPONSE_SIZE: usize = 32;

/// LED matrix width in columns
pub const WIDTH: usize = 9;

/// LED matrix height in rows
pub const HEIGHT: usize = 34;

/// Total LED count of the matrix
pub const LED_COUNT: usize = WIDTH * HEIGHT;

/// Byte length of a packed full-frame monochrome payload (306 bits, rounded up)
pub const FRAME_BYTES: usize = 39;

/// Secondary (wide) display width in columns
pub const WIDE_WIDTH: usize = 300;

/// Secondary (wide) display height in rows
pub const WIDE_HEIGHT: usize = 400;

/// Byte length of one packed wide-display column (400 rows / 8)
pub const WIDE_COLUMN_BYTES: usize = 50;

/// Baud rate of the physical serial link
pub const BAUD_RATE: u32 = 115_200;

/// Bits of the fps byte that carry the rate in the low-power regime
pub const LOW_FPS_MASK: u8 = 0b0000_0111;

/// Bit of the fps byte that carries the rate in the high-power regime
pub const HIGH_FPS_MASK: u8 = 0b0001_0000;
