/// Addressable memory in bytes (0x000..=0xFFF)
pub const MEMORY_SIZE: usize = 4096;

/// Address at which ROMs are loaded and execution begins
pub const PROGRAM_START: u16 = 0x200;

/// The largest ROM that fits between `PROGRAM_START` and the end of memory
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Maximum number of nested subroutine calls
pub const STACK_SIZE: usize = 16;

/// Number of general purpose registers (V0..VF)
pub const NUM_REGISTERS: usize = 16;

/// Register written as a flag by arithmetic, shift, draw and add-to-index instructions
pub const FLAG_REGISTER: usize = 0xF;

/// Number of keys on the hexadecimal keypad
pub const NUM_KEYS: usize = 16;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Default instruction rate of the interpreter loop in Hz
pub const CLOCK_SPEED: u32 = 500;

/// Default timer rate in Hz
pub const TIMER_SPEED: u32 = 60;

/// Address of the first glyph of the sprite sheet
pub const SPRITE_SHEET_START: u16 = 0x000;

/// Each glyph in the sprite sheet is 5 bytes tall
pub const SPRITE_HEIGHT: u16 = 5;

/// # Sprite Sheet
/// Sprites for the hexadecimal digits 0..F, 4 pixels wide and 5 pixels tall.
/// Only the high nibble of each byte is drawn.
/// ```text
/// 0xF0  ****
/// 0x90  *  *
/// 0x90  *  *
/// 0x90  *  *
/// 0xF0  ****
/// ```
#[rustfmt::skip]
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
