// inputmodule/src/transport/serial.rs
//! Serial-port transport, behind the `serial` feature.

use std::io::Read;
use std::time::Duration;

use crate::constants::BAUD_RATE;
use crate::transport::traits::{Connection, Transport};
use crate::Result;

/// Serial transport bound to a device path (`/dev/ttyACM0`, `COM3`, ...).
/// Each `open()` call opens the port fresh and the connection closes it on
/// drop, matching the one-session-per-command discipline.
#[derive(Debug, Clone)]
pub struct SerialTransport {
    path: String,
    read_timeout: Duration,
}

impl SerialTransport {
    /// Transport for the given device path, with the default read timeout
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            // There is no cancellation for a stuck device; the port timeout
            // turns a dead link into a short read instead of a hang
            read_timeout: Duration::from_secs(2),
        }
    }

    /// Override the per-read timeout
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// The device path this transport opens
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Transport for SerialTransport {
    fn open(&self) -> Result<Box<dyn Connection>> {
        let port = serialport::new(&self.path, BAUD_RATE)
            .timeout(self.read_timeout)
            .open()?;
        Ok(Box::new(SerialConnection { port }))
    }
}

struct SerialConnection {
    port: Box<dyn serialport::SerialPort>,
}

impl Connection for SerialConnection {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        std::io::Write::write_all(&mut self.port, bytes)?;
        Ok(())
    }

    fn read(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        let mut filled = 0;
        while filled < len {
            match self.port.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(ref e) if e.kind() == std::io::ErrorKind::TimedOut => break,
                Err(e) => return Err(e.into()),
            }
        }
        buf.truncate(filled);
        Ok(buf)
    }
}
