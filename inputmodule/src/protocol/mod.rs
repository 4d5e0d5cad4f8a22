// inputmodule/src/protocol/mod.rs
//! The wire protocol: frame layout, the command set, send/query helpers,
//! and decoders for the fixed-size response buffer.

pub mod codec;
pub mod commands;
pub mod frame;
pub mod responses;

pub use commands::Command;
pub use frame::Frame;
pub use responses::Response;
