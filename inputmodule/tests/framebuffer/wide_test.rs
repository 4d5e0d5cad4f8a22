#[path = "../common/mod.rs"]
mod common;

use inputmodule::constants::{WIDE_COLUMN_BYTES, WIDE_WIDTH};
use inputmodule::framebuffer::wide;

#[test]
fn black_column_is_fully_lit() {
    // Polarity is inverted on the wide display: the black column lights up,
    // the white rest stays off
    let image = common::fixtures::wide_image_with_black_column(42);
    let cols = wide::image_columns(&image).unwrap();
    assert_eq!(cols.len(), WIDE_WIDTH);
    assert!(cols[42].iter().all(|&b| b == 0xFF));
    assert!(cols[41].iter().all(|&b| b == 0));
    assert!(cols[43].iter().all(|&b| b == 0));
}

#[test]
fn column_is_fifty_bytes() {
    let image = common::fixtures::wide_image_with_black_column(0);
    let col = wide::pack_column(&image, 0);
    assert_eq!(col.len(), WIDE_COLUMN_BYTES);
}
