// inputmodule/src/transport/mock.rs
//! In-memory transport double for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::transport::traits::{Connection, Transport};
use crate::{Error, Result};

#[derive(Debug, Default)]
struct MockState {
    sent: Vec<Vec<u8>>,
    responses: VecDeque<Vec<u8>>,
    open_failures: usize,
    opened: usize,
}

/// Mock transport for unit tests. Records every written frame and replies
/// with pre-seeded response buffers. Clones share state, so a test can keep
/// one handle for assertions while the code under test opens connections.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// Fresh mock with no recorded frames and no queued responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response buffer for the next read
    pub fn push_response(&self, resp: Vec<u8>) {
        self.state.lock().unwrap().responses.push_back(resp);
    }

    /// Make the next `n` open() calls fail, for error-path tests
    pub fn fail_next_opens(&self, n: usize) {
        self.state.lock().unwrap().open_failures = n;
    }

    /// Every frame written so far, oldest first
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.state.lock().unwrap().sent.clone()
    }

    /// How many connections have been opened
    pub fn open_count(&self) -> usize {
        self.state.lock().unwrap().opened
    }

    /// Drop all recorded frames
    pub fn clear_sent(&self) {
        self.state.lock().unwrap().sent.clear();
    }
}

impl Transport for MockTransport {
    fn open(&self) -> Result<Box<dyn Connection>> {
        let mut state = self.state.lock().unwrap();
        if state.open_failures > 0 {
            state.open_failures -= 1;
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "mock transport open failure",
            )));
        }
        state.opened += 1;
        Ok(Box::new(MockConnection {
            state: Arc::clone(&self.state),
        }))
    }
}

struct MockConnection {
    state: Arc<Mutex<MockState>>,
}

impl Connection for MockConnection {
    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.state.lock().unwrap().sent.push(bytes.to_vec());
        Ok(())
    }

    fn read(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut state = self.state.lock().unwrap();
        match state.responses.pop_front() {
            // A queued buffer may be shorter than requested; hand it over
            // as-is so short-read handling can be exercised
            Some(mut resp) => {
                resp.truncate(len);
                Ok(resp)
            }
            None => Ok(Vec::new()),
        }
    }
}
