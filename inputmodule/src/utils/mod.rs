// inputmodule/src/utils/mod.rs
//! Small shared helpers: hex formatting for debug logs, the cancellation
//! token, and the fixed-cadence tick gate.

pub mod hex;
pub mod stop;
pub mod ticker;

pub use hex::bytes_to_hex;
pub use stop::StopToken;
pub use ticker::Ticker;
