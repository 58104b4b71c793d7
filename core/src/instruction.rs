use std::fmt;

use rand::Rng;

use crate::error::Result;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// # Instructions
/// Every Chip-8 instruction with its operands already pulled out of the opcode.
///
/// Register operands are indices 0x0..=0xF.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `00E0`
    Cls,
    /// `00EE`
    Ret,
    /// `1nnn`
    Jump { nnn: u16 },
    /// `2nnn`
    Call { nnn: u16 },
    /// `3xnn`
    SkipEqByte { x: u8, nn: u8 },
    /// `4xnn`
    SkipNeByte { x: u8, nn: u8 },
    /// `5xy0`
    SkipEqReg { x: u8, y: u8 },
    /// `6xnn`
    LoadByte { x: u8, nn: u8 },
    /// `7xnn`
    AddByte { x: u8, nn: u8 },
    /// `8xy0`
    Move { x: u8, y: u8 },
    /// `8xy1`
    Or { x: u8, y: u8 },
    /// `8xy2`
    And { x: u8, y: u8 },
    /// `8xy3`
    Xor { x: u8, y: u8 },
    /// `8xy4`
    AddReg { x: u8, y: u8 },
    /// `8xy5`
    Sub { x: u8, y: u8 },
    /// `8xy6`
    ShiftRight { x: u8, y: u8 },
    /// `8xy7`
    SubN { x: u8, y: u8 },
    /// `8xyE`
    ShiftLeft { x: u8, y: u8 },
    /// `9xy0`
    SkipNeReg { x: u8, y: u8 },
    /// `Annn`
    LoadIndex { nnn: u16 },
    /// `Bnnn`
    JumpOffset { nnn: u16 },
    /// `Cxnn`
    Random { x: u8, nn: u8 },
    /// `Dxyn`
    Draw { x: u8, y: u8, n: u8 },
    /// `Ex9E`
    SkipKeyPressed { x: u8 },
    /// `ExA1`
    SkipKeyReleased { x: u8 },
    /// `Fx07`
    LoadDelay { x: u8 },
    /// `Fx0A`
    AwaitKey { x: u8 },
    /// `Fx15`
    SetDelay { x: u8 },
    /// `Fx18`
    SetSound { x: u8 },
    /// `Fx1E`
    AddIndex { x: u8 },
    /// `Fx29`
    LoadSprite { x: u8 },
    /// `Fx33`
    StoreBcd { x: u8 },
    /// `Fx55`
    StoreRegisters { x: u8 },
    /// `Fx65`
    LoadRegisters { x: u8 },
}

/// One row of the opcode table: an opcode `op` is this instruction iff `op & mask == pattern`.
/// Operand nibbles are 0 in the mask.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub mask: u16,
    pub pattern: u16,
}

impl Pattern {
    pub fn matches(&self, op: u16) -> bool {
        op & self.mask == self.pattern
    }
}

/// The opcode table, one entry per instruction.
#[rustfmt::skip]
pub const PATTERNS: [(Pattern, &str); 34] = [
    (Pattern { mask: 0xFFFF, pattern: 0x00E0 }, "CLS"),
    (Pattern { mask: 0xFFFF, pattern: 0x00EE }, "RET"),
    (Pattern { mask: 0xF000, pattern: 0x1000 }, "JP"),
    (Pattern { mask: 0xF000, pattern: 0x2000 }, "CALL"),
    (Pattern { mask: 0xF000, pattern: 0x3000 }, "SE"),
    (Pattern { mask: 0xF000, pattern: 0x4000 }, "SNE"),
    (Pattern { mask: 0xF00F, pattern: 0x5000 }, "SE"),
    (Pattern { mask: 0xF000, pattern: 0x6000 }, "LD"),
    (Pattern { mask: 0xF000, pattern: 0x7000 }, "ADD"),
    (Pattern { mask: 0xF00F, pattern: 0x8000 }, "LD"),
    (Pattern { mask: 0xF00F, pattern: 0x8001 }, "OR"),
    (Pattern { mask: 0xF00F, pattern: 0x8002 }, "AND"),
    (Pattern { mask: 0xF00F, pattern: 0x8003 }, "XOR"),
    (Pattern { mask: 0xF00F, pattern: 0x8004 }, "ADD"),
    (Pattern { mask: 0xF00F, pattern: 0x8005 }, "SUB"),
    (Pattern { mask: 0xF00F, pattern: 0x8006 }, "SHR"),
    (Pattern { mask: 0xF00F, pattern: 0x8007 }, "SUBN"),
    (Pattern { mask: 0xF00F, pattern: 0x800E }, "SHL"),
    (Pattern { mask: 0xF00F, pattern: 0x9000 }, "SNE"),
    (Pattern { mask: 0xF000, pattern: 0xA000 }, "LD"),
    (Pattern { mask: 0xF000, pattern: 0xB000 }, "JP"),
    (Pattern { mask: 0xF000, pattern: 0xC000 }, "RND"),
    (Pattern { mask: 0xF000, pattern: 0xD000 }, "DRW"),
    (Pattern { mask: 0xF0FF, pattern: 0xE09E }, "SKP"),
    (Pattern { mask: 0xF0FF, pattern: 0xE0A1 }, "SKNP"),
    (Pattern { mask: 0xF0FF, pattern: 0xF007 }, "LD"),
    (Pattern { mask: 0xF0FF, pattern: 0xF00A }, "LD"),
    (Pattern { mask: 0xF0FF, pattern: 0xF015 }, "LD"),
    (Pattern { mask: 0xF0FF, pattern: 0xF018 }, "LD"),
    (Pattern { mask: 0xF0FF, pattern: 0xF01E }, "ADD"),
    (Pattern { mask: 0xF0FF, pattern: 0xF029 }, "LD"),
    (Pattern { mask: 0xF0FF, pattern: 0xF033 }, "LD"),
    (Pattern { mask: 0xF0FF, pattern: 0xF055 }, "LD"),
    (Pattern { mask: 0xF0FF, pattern: 0xF065 }, "LD"),
];

impl Instruction {
    /// Selects the Instruction for a given Opcode, or None if it isn't one.
    pub fn decode(op: impl Into<Opcode>) -> Option<Self> {
        use Instruction::*;

        let op = op.into();
        let (x, y, n, nn, nnn) = (op.x(), op.y(), op.n(), op.nn(), op.nnn());
        let instruction = match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Cls,
            (0x0, 0x0, 0xE, 0xE) => Ret,
            (0x1, ..) => Jump { nnn },
            (0x2, ..) => Call { nnn },
            (0x3, ..) => SkipEqByte { x, nn },
            (0x4, ..) => SkipNeByte { x, nn },
            (0x5, .., 0x0) => SkipEqReg { x, y },
            (0x6, ..) => LoadByte { x, nn },
            (0x7, ..) => AddByte { x, nn },
            (0x8, .., 0x0) => Move { x, y },
            (0x8, .., 0x1) => Or { x, y },
            (0x8, .., 0x2) => And { x, y },
            (0x8, .., 0x3) => Xor { x, y },
            (0x8, .., 0x4) => AddReg { x, y },
            (0x8, .., 0x5) => Sub { x, y },
            (0x8, .., 0x6) => ShiftRight { x, y },
            (0x8, .., 0x7) => SubN { x, y },
            (0x8, .., 0xE) => ShiftLeft { x, y },
            (0x9, .., 0x0) => SkipNeReg { x, y },
            (0xA, ..) => LoadIndex { nnn },
            (0xB, ..) => JumpOffset { nnn },
            (0xC, ..) => Random { x, nn },
            (0xD, ..) => Draw { x, y, n },
            (0xE, _, 0x9, 0xE) => SkipKeyPressed { x },
            (0xE, _, 0xA, 0x1) => SkipKeyReleased { x },
            (0xF, _, 0x0, 0x7) => LoadDelay { x },
            (0xF, _, 0x0, 0xA) => AwaitKey { x },
            (0xF, _, 0x1, 0x5) => SetDelay { x },
            (0xF, _, 0x1, 0x8) => SetSound { x },
            (0xF, _, 0x1, 0xE) => AddIndex { x },
            (0xF, _, 0x2, 0x9) => LoadSprite { x },
            (0xF, _, 0x3, 0x3) => StoreBcd { x },
            (0xF, _, 0x5, 0x5) => StoreRegisters { x },
            (0xF, _, 0x6, 0x5) => LoadRegisters { x },
            _ => return None,
        };
        Some(instruction)
    }

    /// Position of this instruction in `PATTERNS`
    fn table_index(&self) -> usize {
        use Instruction::*;

        match self {
            Cls => 0,
            Ret => 1,
            Jump { .. } => 2,
            Call { .. } => 3,
            SkipEqByte { .. } => 4,
            SkipNeByte { .. } => 5,
            SkipEqReg { .. } => 6,
            LoadByte { .. } => 7,
            AddByte { .. } => 8,
            Move { .. } => 9,
            Or { .. } => 10,
            And { .. } => 11,
            Xor { .. } => 12,
            AddReg { .. } => 13,
            Sub { .. } => 14,
            ShiftRight { .. } => 15,
            SubN { .. } => 16,
            ShiftLeft { .. } => 17,
            SkipNeReg { .. } => 18,
            LoadIndex { .. } => 19,
            JumpOffset { .. } => 20,
            Random { .. } => 21,
            Draw { .. } => 22,
            SkipKeyPressed { .. } => 23,
            SkipKeyReleased { .. } => 24,
            LoadDelay { .. } => 25,
            AwaitKey { .. } => 26,
            SetDelay { .. } => 27,
            SetSound { .. } => 28,
            AddIndex { .. } => 29,
            LoadSprite { .. } => 30,
            StoreBcd { .. } => 31,
            StoreRegisters { .. } => 32,
            LoadRegisters { .. } => 33,
        }
    }

    /// The opcode table entry this instruction was decoded from
    pub fn pattern(&self) -> Pattern {
        PATTERNS[self.table_index()].0
    }

    pub fn mnemonic(&self) -> &'static str {
        PATTERNS[self.table_index()].1
    }

    /// Applies the instruction to `state`.
    ///
    /// Control transfers set the pc themselves; everything else moves it past the
    /// instruction (and past the next one when skipping).
    pub fn execute<R: Rng + ?Sized>(self, state: &mut State, rng: &mut R) -> Result<()> {
        use Instruction::*;

        match self {
            Cls => cls(state),
            Ret => ret(state)?,
            Jump { nnn } => jump(state, nnn),
            Call { nnn } => call(state, nnn)?,
            SkipEqByte { x, nn } => ske(state, x, nn),
            SkipNeByte { x, nn } => skne(state, x, nn),
            SkipEqReg { x, y } => skre(state, x, y),
            LoadByte { x, nn } => load(state, x, nn),
            AddByte { x, nn } => add(state, x, nn),
            Move { x, y } => mv(state, x, y),
            Or { x, y } => or(state, x, y),
            And { x, y } => and(state, x, y),
            Xor { x, y } => xor(state, x, y),
            AddReg { x, y } => addr(state, x, y),
            Sub { x, y } => sub(state, x, y),
            ShiftRight { x, .. } => shr(state, x),
            SubN { x, y } => subn(state, x, y),
            ShiftLeft { x, .. } => shl(state, x),
            SkipNeReg { x, y } => skrne(state, x, y),
            LoadIndex { nnn } => loadi(state, nnn),
            JumpOffset { nnn } => jumpi(state, nnn),
            Random { x, nn } => rand(state, x, nn, rng),
            Draw { x, y, n } => draw(state, x, y, n)?,
            SkipKeyPressed { x } => skpr(state, x),
            SkipKeyReleased { x } => skup(state, x),
            LoadDelay { x } => moved(state, x),
            AwaitKey { x } => keyd(state, x),
            SetDelay { x } => loadd(state, x),
            SetSound { x } => loads(state, x),
            AddIndex { x } => addi(state, x),
            LoadSprite { x } => ldspr(state, x),
            StoreBcd { x } => bcd(state, x)?,
            StoreRegisters { x } => stor(state, x)?,
            LoadRegisters { x } => read(state, x)?,
        }
        Ok(())
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.mnemonic())
    }
}
