use sdl2::keyboard::Keycode;

/// The hex keypad laid over the left four columns of a qwerty keyboard,
/// one keypad row per line:
/// ```text
/// |1|2|3|C|      |1|2|3|4|
/// |4|5|6|D|  ->  |Q|W|E|R|
/// |7|8|9|E|  ->  |A|S|D|F|
/// |A|0|B|F|      |Z|X|C|V|
/// ```
#[rustfmt::skip]
const KEYMAP: [(Keycode, u8); 16] = [
    (Keycode::Num1, 0x1), (Keycode::Num2, 0x2), (Keycode::Num3, 0x3), (Keycode::Num4, 0xC),
    (Keycode::Q, 0x4),    (Keycode::W, 0x5),    (Keycode::E, 0x6),    (Keycode::R, 0xD),
    (Keycode::A, 0x7),    (Keycode::S, 0x8),    (Keycode::D, 0x9),    (Keycode::F, 0xE),
    (Keycode::Z, 0xA),    (Keycode::X, 0x0),    (Keycode::C, 0xB),    (Keycode::V, 0xF),
];

/// The keypad key bound to a keyboard key, if any
pub fn keymap(key: Keycode) -> Option<u8> {
    KEYMAP
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|&(_, hex)| hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binds_every_hex_key_once() {
        let mut bound: Vec<u8> = KEYMAP.iter().map(|&(_, hex)| hex).collect();
        bound.sort_unstable();
        assert_eq!(bound, (0x0..=0xF).collect::<Vec<u8>>());
    }

    #[test]
    fn test_keypad_corners() {
        assert_eq!(keymap(Keycode::Num1), Some(0x1));
        assert_eq!(keymap(Keycode::Num4), Some(0xC));
        assert_eq!(keymap(Keycode::Z), Some(0xA));
        assert_eq!(keymap(Keycode::V), Some(0xF));
    }

    #[test]
    fn test_ignores_unbound_keys() {
        assert_eq!(keymap(Keycode::Space), None);
        assert_eq!(keymap(Keycode::Escape), None);
    }
}
