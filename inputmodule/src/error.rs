// inputmodule/src/error.rs
//! Crate-wide error type and `Result` alias.

use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    /// Transport open/read/write failure
    #[error("transport i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Serial port failure. The variant only exists with the `serial`
    /// feature; the core only ever talks to the Transport trait.
    #[cfg(feature = "serial")]
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// A query read back fewer bytes than the fixed response size
    #[error("short response: expected {expected} bytes, got {actual}")]
    ShortRead {
        /// Bytes the protocol requires
        expected: usize,
        /// Bytes actually read
        actual: usize,
    },

    /// Input pixel data does not match the display geometry
    #[error("dimension mismatch: expected {expected_width}x{expected_height}, got {width}x{height}")]
    DimensionMismatch {
        /// Required width
        expected_width: usize,
        /// Required height
        expected_height: usize,
        /// Width of the rejected input
        width: usize,
        /// Height of the rejected input
        height: usize,
    },

    /// Argument outside the range an operation accepts
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
