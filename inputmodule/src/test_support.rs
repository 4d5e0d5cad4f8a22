// inputmodule/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! These centralize common MockTransport setup so tests across the crate
//! and the tests/ directory share the same seeding logic.
#![allow(dead_code)]

use crate::constants::RESPONSE_SIZE;
use crate::device::InputModule;
use crate::transport::MockTransport;

/// A full 32-byte response buffer whose leading bytes are `prefix`
#[doc(hidden)]
pub fn response_buffer(prefix: &[u8]) -> Vec<u8> {
    let mut buf = vec![0u8; RESPONSE_SIZE];
    buf[..prefix.len()].copy_from_slice(prefix);
    buf
}

/// A mock transport pre-seeded with full response buffers built from the
/// given prefixes
#[doc(hidden)]
pub fn mock_with_responses(prefixes: &[&[u8]]) -> MockTransport {
    let mock = MockTransport::new();
    for prefix in prefixes {
        mock.push_response(response_buffer(prefix));
    }
    mock
}

/// A device handle over a shared mock, returned alongside the mock so the
/// test can assert on recorded frames
#[doc(hidden)]
pub fn mock_module() -> (InputModule<MockTransport>, MockTransport) {
    let mock = MockTransport::new();
    (InputModule::new(mock.clone()), mock)
}
