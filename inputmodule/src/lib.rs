// inputmodule/src/lib.rs

//! inputmodule
//!
//! Pure Rust driver for LED/LCD matrix input modules over a serial link:
//! the fixed binary command protocol, the framebuffer encoders that turn
//! pixel data into protocol payloads, and a local snake simulation that
//! renders through them.
#![warn(missing_docs)]

pub mod constants;
pub mod device;
pub mod error;
pub mod framebuffer;
pub mod game;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export the error type and common domain types at the crate root so
// `crate::Error`, `crate::Result`, and the enums in `types` are available
// for consumers and for convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
