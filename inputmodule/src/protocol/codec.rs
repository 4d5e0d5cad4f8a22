// inputmodule/src/protocol/codec.rs
//! Connection-scoped send and query helpers over a [`Transport`].

use log::{debug, trace};

use crate::constants::RESPONSE_SIZE;
use crate::protocol::commands::Command;
use crate::protocol::responses::Response;
use crate::transport::Transport;
use crate::utils::bytes_to_hex;
use crate::{Error, Result};

/// Send a single fire-and-forget command. Opens one connection, writes one
/// frame, and closes the connection before returning.
pub fn send(transport: &dyn Transport, cmd: &Command) -> Result<()> {
    let frame = cmd.encode();
    trace!("sending frame: {}", bytes_to_hex(&frame));
    let mut conn = transport.open()?;
    conn.write_all(&frame)
}

/// Send a query command and read back the fixed-size response buffer.
/// The write and the 32-byte read happen on the same connection; fewer
/// bytes than expected is a short-read error.
pub fn query(transport: &dyn Transport, cmd: &Command) -> Result<Response> {
    let frame = cmd.encode();
    trace!("sending query frame: {}", bytes_to_hex(&frame));
    let mut conn = transport.open()?;
    conn.write_all(&frame)?;

    let raw = conn.read(RESPONSE_SIZE)?;
    if raw.len() < RESPONSE_SIZE {
        return Err(Error::ShortRead {
            expected: RESPONSE_SIZE,
            actual: raw.len(),
        });
    }
    let mut buf = [0u8; RESPONSE_SIZE];
    buf.copy_from_slice(&raw[..RESPONSE_SIZE]);
    debug!("response for {:?}: {}", cmd.opcode(), bytes_to_hex(&buf));
    Ok(Response::new(buf))
}

/// Send a burst of commands over a single connection, in order. Used for
/// staged-column transfers where the stage commands and the final
/// commit/flush must not interleave with any other writer.
pub fn send_batch(transport: &dyn Transport, cmds: &[Command]) -> Result<()> {
    let mut conn = transport.open()?;
    for cmd in cmds {
        let frame = cmd.encode();
        trace!("sending batched frame: {}", bytes_to_hex(&frame));
        conn.write_all(&frame)?;
    }
    Ok(())
}
