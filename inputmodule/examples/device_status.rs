#![cfg(feature = "serial")]

//! Query an input module's status over serial.
//!
//! Usage:
//!   cargo run -p inputmodule --example device_status --features serial -- /dev/ttyACM0

use anyhow::Result;
use inputmodule::device::InputModule;
use inputmodule::transport::serial::SerialTransport;

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyACM0".to_string());
    println!("Querying input module on {}", path);

    let module = InputModule::new(SerialTransport::new(&path));

    match module.version() {
        Ok(v) => println!("Firmware version: {}", v),
        Err(e) => println!("Version query failed: {:?}", e),
    }
    match module.brightness() {
        Ok(b) => println!("Brightness: {}", b),
        Err(e) => println!("Brightness query failed: {:?}", e),
    }
    match module.is_animating() {
        Ok(a) => println!("Animating: {}", a),
        Err(e) => println!("Animate query failed: {:?}", e),
    }

    // Wide-display modules also answer fps and power-mode queries
    if let Ok(fps) = module.fps() {
        println!("Refresh rate: {} fps", fps);
    }

    Ok(())
}
