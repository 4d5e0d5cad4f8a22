// inputmodule/src/transport/mod.rs
//! How the module is reached: the session-factory trait pair, a recording
//! mock for tests, and the feature-gated serial implementation.

pub mod mock;
#[cfg(feature = "serial")]
pub mod serial;
pub mod traits;

pub use mock::MockTransport;
#[cfg(feature = "serial")]
pub use serial::SerialTransport;
pub use traits::{Connection, Transport};
