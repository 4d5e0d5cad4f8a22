#[path = "../common/mod.rs"]
mod common;

use common::fixtures::response_buffer;
use inputmodule::constants::RESPONSE_SIZE;
use inputmodule::protocol::responses::{
    decode_brightness, decode_color, decode_flag, decode_fps, decode_power_mode, decode_version,
};
use inputmodule::protocol::Response;
use inputmodule::types::{PowerMode, Rgb};

fn response(prefix: &[u8]) -> Response {
    let mut buf = [0u8; RESPONSE_SIZE];
    let raw = response_buffer(prefix);
    buf.copy_from_slice(&raw);
    Response::new(buf)
}

#[test]
fn version_decode() {
    let v = decode_version(&response(&[3, 0x17, 0x01]));
    assert_eq!((v.major, v.minor, v.patch), (3, 1, 7));
    assert!(v.pre_release);
    assert_eq!(format!("{}", v), "3.1.7 (pre-release)");
}

#[test]
fn flag_and_brightness_decode() {
    assert!(decode_flag(&response(&[1])));
    assert!(!decode_flag(&response(&[0])));
    assert_eq!(decode_brightness(&response(&[0x78])), 120);
}

#[test]
fn color_decode() {
    assert_eq!(decode_color(&response(&[0, 0xFF, 0xFF])), Rgb::CYAN);
}

#[test]
fn fps_cross_decode_low_regime() {
    // Power mode says low; the fps byte's low three bits say one frame
    // per second
    let mode = decode_power_mode(&response(&[0]));
    assert_eq!(mode, PowerMode::Low);
    assert_eq!(decode_fps(mode, &response(&[0b010])), 1.0);
}

#[test]
fn fps_cross_decode_high_regime() {
    let mode = decode_power_mode(&response(&[1]));
    assert_eq!(mode, PowerMode::High);
    assert_eq!(decode_fps(mode, &response(&[0b0001_0000])), 32.0);
    assert_eq!(decode_fps(mode, &response(&[0b0000_0000])), 16.0);
}

#[test]
fn same_byte_reads_differently_per_regime() {
    // The regime really does change the interpretation of one byte
    let byte = response(&[0b0001_0011]);
    assert_eq!(decode_fps(PowerMode::Low, &byte), 2.0);
    assert_eq!(decode_fps(PowerMode::High, &byte), 32.0);
}
