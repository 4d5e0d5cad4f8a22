// inputmodule/src/transport/traits.rs

use crate::Result;

/// Transport abstracts how the module is reached. It hands out short-lived
/// connections: the codec opens one per command (or per staged burst) and
/// drops it before the next command starts, so no two commands can interleave
/// on the wire.
pub trait Transport {
    /// Open a fresh connection to the module
    fn open(&self) -> Result<Box<dyn Connection>>;
}

/// A single open link to the module. Dropped to close.
pub trait Connection {
    /// Write the full byte slice to the device
    fn write_all(&mut self, bytes: &[u8]) -> Result<()>;

    /// Read up to `len` bytes. Returns what arrived before the transport's
    /// own deadline; the caller decides whether a short read is an error.
    fn read(&mut self, len: usize) -> Result<Vec<u8>>;
}
