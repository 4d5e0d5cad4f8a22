#[path = "../common/mod.rs"]
mod common;

use inputmodule::framebuffer::text::{compose, Glyph, GLYPH_HEIGHT, GLYPH_WIDTH, MAX_GLYPHS};
use inputmodule::framebuffer::{eq, mono};

#[test]
fn glyph_stack_survives_packing() {
    // Compose, pack, unpack: the glyph boxes land where they were placed
    let glyphs = [common::fixtures::block_glyph(); MAX_GLYPHS];
    let grid = compose(&glyphs).unwrap();
    let round = mono::unpack_frame(&mono::pack_grid(&grid).unwrap());
    for slot in 0..MAX_GLYPHS {
        let top = slot * 7;
        assert!(round.is_lit(2, top));
        assert!(round.is_lit(6, top + GLYPH_HEIGHT - 1));
        assert!(!round.is_lit(1, top));
    }
    assert_eq!(
        round.lit_count(),
        MAX_GLYPHS * GLYPH_WIDTH * GLYPH_HEIGHT
    );
}

#[test]
fn blank_glyphs_leave_the_grid_dark() {
    let grid = compose(&[Glyph::BLANK; 3]).unwrap();
    assert_eq!(grid.lit_count(), 0);
}

#[test]
fn equalizer_bars_stay_in_their_columns() {
    let grid = eq::bars(&[34, 0, 2]).unwrap();
    assert_eq!(grid.lit_count(), 36);
    // Column 1 was zero, so nothing bleeds into it
    for y in 0..34 {
        assert!(!grid.is_lit(1, y), "row {}", y);
    }
    assert!(grid.is_lit(2, 16));
    assert!(grid.is_lit(2, 17));
}
