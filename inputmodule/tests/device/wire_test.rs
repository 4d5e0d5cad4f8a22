use inputmodule::test_support::mock_module;
use inputmodule::types::{GameControl, GameId, GameOfLifeStart, Pattern, PowerMode, Rgb};

#[test]
fn simple_commands_on_the_wire() {
    let (module, mock) = mock_module();
    module.set_brightness(200).unwrap();
    module.set_sleep(true).unwrap();
    module.set_animate(false).unwrap();
    module.pattern(Pattern::ZigZag).unwrap();
    module.set_color(Rgb::PURPLE).unwrap();
    module.display_on(true).unwrap();
    module.invert_screen(true).unwrap();
    module.screen_saver(false).unwrap();
    module.clear_ram().unwrap();

    assert_eq!(
        mock.sent(),
        vec![
            vec![0x32, 0xAC, 0x00, 200],
            vec![0x32, 0xAC, 0x03, 1],
            vec![0x32, 0xAC, 0x04, 0],
            vec![0x32, 0xAC, 0x01, 0x04],
            vec![0x32, 0xAC, 0x13, 0xFF, 0x00, 0xFF],
            vec![0x32, 0xAC, 0x14, 1],
            vec![0x32, 0xAC, 0x15, 1],
            vec![0x32, 0xAC, 0x19, 0],
            vec![0x32, 0xAC, 0x18, 0x00],
        ]
    );
}

#[test]
fn firmware_maintenance_commands() {
    let (module, mock) = mock_module();
    module.bootloader_reset().unwrap();
    module.panic().unwrap();
    assert_eq!(
        mock.sent(),
        vec![
            vec![0x32, 0xAC, 0x02, 0x00],
            vec![0x32, 0xAC, 0x05, 0x00],
        ]
    );
}

#[test]
fn embedded_game_commands() {
    let (module, mock) = mock_module();
    module.start_game(GameId::Snake, None).unwrap();
    module
        .start_game(GameId::GameOfLife, Some(GameOfLifeStart::CurrentMatrix))
        .unwrap();
    module.game_control(GameControl::SecondRight).unwrap();

    let sent = mock.sent();
    assert_eq!(sent[0], vec![0x32, 0xAC, 0x10, 0x00]);
    assert_eq!(sent[1], vec![0x32, 0xAC, 0x10, 0x03, 0x00]);
    assert_eq!(sent[2], vec![0x32, 0xAC, 0x11, 6]);
}

#[test]
fn power_mode_commands() {
    let (module, mock) = mock_module();
    module.set_power_mode(PowerMode::High).unwrap();
    module.set_power_mode(PowerMode::Low).unwrap();
    assert_eq!(
        mock.sent(),
        vec![vec![0x32, 0xAC, 0x1B, 1], vec![0x32, 0xAC, 0x1B, 0]]
    );
}

#[test]
fn set_text_sends_length_prefixed_bytes() {
    let (module, mock) = mock_module();
    module.set_text("Hi").unwrap();
    assert_eq!(mock.sent(), vec![vec![0x32, 0xAC, 0x09, 2, b'H', b'i']]);
}
