use inputmodule::constants::{HEIGHT, WIDTH};
use inputmodule::framebuffer::grey;
use inputmodule::framebuffer::PixelGrid;
use inputmodule::types::Rgb;

#[test]
fn curve_is_applied_per_pixel() {
    let mut image = PixelGrid::filled(WIDTH, HEIGHT, Rgb::BLACK);
    image.set(0, 0, Rgb::new(255, 255, 255));
    image.set(1, 0, Rgb::new(180, 180, 180));
    image.set(2, 0, Rgb::new(120, 120, 120));
    image.set(3, 0, Rgb::new(20, 20, 20));

    let cols = grey::image_columns(&image).unwrap();
    assert_eq!(cols[0][0], 255);
    assert_eq!(cols[1][0], 144);
    assert_eq!(cols[2][0], 60);
    assert_eq!(cols[3][0], 40);
    assert_eq!(cols[4][0], 0);
}

#[test]
fn curve_band_ceilings() {
    // Each band tops out below the next band's floor, so doubling the dim
    // band can never overtake the bright one
    for v in 0..=255u8 {
        let out = grey::perceived_brightness(Rgb::new(v, v, v));
        match v {
            0..=50 => assert_eq!(out, v * 2),
            201..=255 => assert_eq!(out, v),
            _ => assert!(out <= 160, "input {} remapped to {}", v, out),
        }
    }
}

#[test]
fn column_order_is_left_to_right() {
    let mut image = PixelGrid::filled(WIDTH, HEIGHT, Rgb::BLACK);
    image.set(8, 33, Rgb::new(220, 220, 220));
    let cols = grey::image_columns(&image).unwrap();
    assert_eq!(cols[8][33], 220);
    assert_eq!(cols[0][0], 0);
}
