#[path = "../common/mod.rs"]
mod common;

use inputmodule::framebuffer::mono;
use inputmodule::test_support::mock_module;
use inputmodule::Error;

#[test]
fn full_frame_draw_sends_one_command() {
    let (module, mock) = mock_module();
    module.draw_image(&common::fixtures::diagonal_image()).unwrap();

    let sent = mock.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(&sent[0][..3], &[0x32, 0xAC, 0x06]);
    let expected = mono::pack_grid(&common::fixtures::diagonal_grid()).unwrap();
    assert_eq!(&sent[0][3..], &expected[..]);
}

#[test]
fn staged_mono_draw_matches_full_frame_cells() {
    let (module, mock) = mock_module();
    let image = common::fixtures::diagonal_image();
    module.draw_image_staged(&image).unwrap();

    let sent = mock.sent();
    assert_eq!(sent.len(), 10);
    assert_eq!(mock.open_count(), 1);
    // Column x carries 0xFF at row x, the diagonal cell
    for (x, frame) in sent[..9].iter().enumerate() {
        assert_eq!(frame[2], 0x07);
        assert_eq!(frame[3], x as u8);
        assert_eq!(frame[4 + x], 0xFF);
        let lit = frame[4..].iter().filter(|&&v| v != 0).count();
        assert_eq!(lit, 1);
    }
    assert_eq!(sent[9][2], 0x08);
}

#[test]
fn glyphs_render_through_the_draw_path() {
    let (module, mock) = mock_module();
    module
        .show_glyphs(&[common::fixtures::block_glyph()])
        .unwrap();

    let sent = mock.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0][2], 0x06);
    // 30 lit cells in the top-left glyph box
    let lit: u32 = sent[0][3..].iter().map(|b| b.count_ones()).sum();
    assert_eq!(lit, 30);
}

#[test]
fn equalizer_renders_through_the_draw_path() {
    let (module, mock) = mock_module();
    module.equalizer(&[2; 9]).unwrap();

    let sent = mock.sent();
    assert_eq!(sent.len(), 1);
    let lit: u32 = sent[0][3..].iter().map(|b| b.count_ones()).sum();
    assert_eq!(lit, 18);
}

#[test]
fn wide_draw_stages_every_column() {
    let (module, mock) = mock_module();
    let image = common::fixtures::wide_image_with_black_column(299);
    module.draw_wide_image(&image).unwrap();

    let sent = mock.sent();
    assert_eq!(sent.len(), 301);
    assert_eq!(mock.open_count(), 1);
    // Only the black column carries lit bits, and polarity is inverted
    assert!(sent[0][5..].iter().all(|&b| b == 0));
    assert_eq!(&sent[299][3..5], &[0x2B, 0x01]);
    assert!(sent[299][5..].iter().all(|&b| b == 0xFF));
    assert_eq!(sent[300], vec![0x32, 0xAC, 0x17]);
}

#[test]
fn led_fill_draws_in_packing_order() {
    let (module, mock) = mock_module();
    module.light_leds(10).unwrap();
    assert!(matches!(
        module.light_leds(307),
        Err(Error::InvalidArgument(_))
    ));

    let sent = mock.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0][3], 0xFF);
    assert_eq!(sent[0][4], 0b0000_0011);
}

#[test]
fn undersized_image_rejected_before_any_send() {
    let (module, mock) = mock_module();
    let image = inputmodule::framebuffer::PixelGrid::filled(9, 33, inputmodule::types::Rgb::BLACK);
    assert!(matches!(
        module.draw_image(&image),
        Err(Error::DimensionMismatch { .. })
    ));
    assert!(mock.sent().is_empty());
}
