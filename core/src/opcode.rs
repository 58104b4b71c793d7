use std::fmt;

/// # Opcodes
///
/// Chip-8 opcodes are 16 bits, stored big-endian in memory. Which instruction an
/// opcode is depends on some combination of its nibbles:
/// - `(n, _, _, _)` broad categorization; applies to all opcodes
/// - `(_, _, _, n)` or `(_, _, n, n)` specific behavior within a category
/// - `(_, n, n, n)` fixed functions without operands (e.g. `00E0`, clear screen)
///
/// The nibbles that don't select the instruction are its operands:
/// - `nnn` a 12-bit address
/// - `nn` a byte assigned to and/or compared with Vx
/// - `n` a nibble, the height of a sprite
/// - `x` the register Vx, or the last register of V0..=Vx
/// - `y` the register Vy
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Opcode(pub u16);

impl Opcode {
    /// Combines two subsequent bytes of memory, high byte first.
    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Opcode(u16::from_be_bytes(bytes))
    }

    pub fn nibbles(self) -> (u8, u8, u8, u8) {
        ((self.0 >> 12) as u8, self.x(), self.y(), self.n())
    }

    /// `[_x__]`
    pub fn x(self) -> u8 {
        ((self.0 >> 8) & 0xF) as u8
    }

    /// `[__y_]`
    pub fn y(self) -> u8 {
        ((self.0 >> 4) & 0xF) as u8
    }

    /// `[___n]`
    pub fn n(self) -> u8 {
        (self.0 & 0xF) as u8
    }

    /// `[__nn]`
    pub fn nn(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// `[_nnn]`
    pub fn nnn(self) -> u16 {
        self.0 & 0x0FFF
    }
}

impl From<u16> for Opcode {
    fn from(op: u16) -> Self {
        Opcode(op)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}
