use crate::constants::NUM_KEYS;

/// # Keypad
/// Pressed status of the hexadecimal keys 0..F.
///
/// Written by whatever translates platform input, read by the key instructions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Keypad {
    keys: [bool; NUM_KEYS],
}

impl Keypad {
    pub fn new() -> Self {
        Keypad {
            keys: [false; NUM_KEYS],
        }
    }

    /// Set the pressed status of `key`; only the low nibble is used.
    pub fn set(&mut self, key: u8, pressed: bool) {
        self.keys[usize::from(key & 0xF)] = pressed;
    }

    /// Only the low nibble of `key` is used.
    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys[usize::from(key & 0xF)]
    }

    /// The lowest numbered key that is currently held down
    pub fn first_pressed(&self) -> Option<u8> {
        self.keys.iter().position(|&pressed| pressed).map(|key| key as u8)
    }
}
