use super::*;

#[test]
fn mods_combine() {
    let m = Mod::BOLD | Mod::REVERSE;
    assert!(m.contains(Mod::BOLD));
    assert!(m.contains(Mod::REVERSE));
    assert!(!Mod::BOLD.contains(Mod::REVERSE));
    assert!(Mod::BOLD.contains(Mod::NONE));
}

#[test]
fn style_builder_keeps_earlier_attributes() {
    let style = Style::default()
        .fg(Color::Indexed(1))
        .add_mod(Mod::BOLD)
        .fg(Color::Rgb(1, 2, 3))
        .add_mod(Mod::REVERSE);
    assert_eq!(style.fg, Some(Color::Rgb(1, 2, 3)));
    assert!(style.mods.contains(Mod::BOLD | Mod::REVERSE));
}

#[test]
fn color_from_hex() {
    assert_eq!(Color::from_hex("#7D56F4"), Some(Color::Rgb(0x7d, 0x56, 0xf4)));
    assert_eq!(Color::from_hex("874bfd"), Some(Color::Rgb(0x87, 0x4b, 0xfd)));
    assert_eq!(Color::from_hex("#12345"), None);
    assert_eq!(Color::from_hex("#zzzzzz"), None);
    assert_eq!(Color::from_hex("#ééé"), None);
}
