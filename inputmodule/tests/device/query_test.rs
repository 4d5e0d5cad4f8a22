#[path = "../common/mod.rs"]
mod common;

use common::fixtures::response_buffer;
use inputmodule::test_support::mock_module;
use inputmodule::types::{FpsSetting, PowerMode, Rgb};
use inputmodule::Error;

#[test]
fn status_queries_decode() {
    let (module, mock) = mock_module();
    mock.push_response(response_buffer(&[0x80]));
    mock.push_response(response_buffer(&[1]));
    mock.push_response(response_buffer(&[0]));
    mock.push_response(response_buffer(&[0x00, 0xFF, 0x00]));

    assert_eq!(module.brightness().unwrap(), 128);
    assert!(module.is_sleeping().unwrap());
    assert!(!module.is_animating().unwrap());
    assert_eq!(module.color().unwrap(), Rgb::GREEN);
}

#[test]
fn fps_crosses_power_mode_regimes() {
    let (module, mock) = mock_module();
    // Low regime: fps byte low bits 0b010 mean one frame per second
    mock.push_response(response_buffer(&[0b010]));
    mock.push_response(response_buffer(&[0]));
    assert_eq!(module.fps().unwrap(), 1.0);

    // High regime: the same query path reads bit four instead
    mock.push_response(response_buffer(&[0b0001_0000]));
    mock.push_response(response_buffer(&[1]));
    assert_eq!(module.fps().unwrap(), 32.0);
}

#[test]
fn set_fps_switches_regime_both_ways() {
    let (module, mock) = mock_module();
    // Going up to 32 fps from a low-regime byte
    mock.push_response(response_buffer(&[0b0000_0011]));
    module.set_fps(FpsSetting::ThirtyTwo).unwrap();

    // Going down to a quarter frame per second from a high-regime byte
    mock.push_response(response_buffer(&[0b0001_0000]));
    module.set_fps(FpsSetting::Quarter).unwrap();

    let sent = mock.sent();
    assert_eq!(sent.len(), 6);
    // High target keeps the low bits and sets bit four
    assert_eq!(sent[1], vec![0x32, 0xAC, 0x1A, 0b0001_0011]);
    assert_eq!(sent[2], vec![0x32, 0xAC, 0x1B, PowerMode::High as u8]);
    // Low target keeps bit four and clears the low bits
    assert_eq!(sent[4], vec![0x32, 0xAC, 0x1A, 0b0001_0000]);
    assert_eq!(sent[5], vec![0x32, 0xAC, 0x1B, PowerMode::Low as u8]);
}

#[test]
fn silent_device_surfaces_short_read() {
    let (module, _mock) = mock_module();
    assert!(matches!(
        module.version(),
        Err(Error::ShortRead { expected: 32, .. })
    ));
}
