use crate::constants::{
    MEMORY_SIZE, NUM_REGISTERS, PROGRAM_START, SPRITE_SHEET, SPRITE_SHEET_START, STACK_SIZE,
};
use crate::error::{Chip8Error, Result};
use crate::frame_buffer::FrameBuffer;
use crate::keypad::Keypad;
use crate::opcode::Opcode;
use crate::timers::Timers;

/// The Chip8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the flag register
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Pointer
/// - (sp) the number of return addresses on the stack
///
/// Timers
/// - 2 8-bit timers (delay & sound)
///
/// ## Memory
/// - 16 entry stack of return addresses
/// - 4096 bytes of addressable memory
///     - 0x000..0x050 holds the sprite sheet
///     - ROMs are loaded at 0x200
/// - 64x32 frame buffer
///
/// ## Input
/// - the pressed status of keys 0..F
#[derive(Clone)]
pub struct State {
    pub v: [u8; NUM_REGISTERS],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub stack: [u16; STACK_SIZE],
    pub memory: [u8; MEMORY_SIZE],
    pub timers: Timers,
    pub frame_buffer: FrameBuffer,
    pub keypad: Keypad,
    pub draw_flag: bool,
}

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        let start = SPRITE_SHEET_START as usize;
        memory[start..start + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; NUM_REGISTERS],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            stack: [0; STACK_SIZE],
            memory,
            timers: Timers::new(),
            frame_buffer: FrameBuffer::new(),
            keypad: Keypad::new(),
            draw_flag: false,
        }
    }

    /// Gets the opcode currently pointed at by the pc.
    pub fn fetch(&self) -> Result<Opcode> {
        let bytes = self.memory(self.pc, 2)?;
        Ok(Opcode::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// Borrows `len` bytes of memory starting at `addr`.
    ///
    /// Addresses are not checked against the sprite sheet or program regions,
    /// only against the end of memory.
    pub fn memory(&self, addr: u16, len: usize) -> Result<&[u8]> {
        let range = Self::range(addr, len)?;
        Ok(&self.memory[range])
    }

    /// Mutably borrows `len` bytes of memory starting at `addr`.
    pub fn memory_mut(&mut self, addr: u16, len: usize) -> Result<&mut [u8]> {
        let range = Self::range(addr, len)?;
        Ok(&mut self.memory[range])
    }

    fn range(addr: u16, len: usize) -> Result<std::ops::Range<usize>> {
        let start = usize::from(addr);
        let end = start + len;
        if end > MEMORY_SIZE {
            // report the first byte that doesn't exist
            let address = start.max(MEMORY_SIZE);
            return Err(Chip8Error::MemoryOutOfBounds { address });
        }
        Ok(start..end)
    }

    /// Pushes the current pc onto the stack
    pub fn push_pc(&mut self) -> Result<()> {
        let sp = usize::from(self.sp);
        if sp == STACK_SIZE {
            return Err(Chip8Error::StackOverflow { address: self.pc });
        }
        self.stack[sp] = self.pc;
        self.sp += 1;
        Ok(())
    }

    /// Pops the most recent return address off the stack
    pub fn pop(&mut self) -> Result<u16> {
        if self.sp == 0 {
            return Err(Chip8Error::StackUnderflow { address: self.pc });
        }
        self.sp -= 1;
        Ok(self.stack[usize::from(self.sp)])
    }

    /// Moves on to the next instruction
    pub fn advance(&mut self) {
        self.pc = self.pc.wrapping_add(2);
    }

    /// Skips the next instruction if `condition` holds, otherwise moves on to it
    pub fn skip_if(&mut self, condition: bool) {
        let step = if condition { 4 } else { 2 };
        self.pc = self.pc.wrapping_add(step);
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = State::new();
        assert_eq!(state.pc, 0x200);
        assert_eq!(state.sp, 0);
        assert_eq!(state.i, 0);
        assert_eq!(state.v, [0; 16]);
        assert_eq!(state.timers, Timers::new());
        assert_eq!(state.memory[..80], SPRITE_SHEET[..]);
        assert!(state.memory[80..].iter().all(|&byte| byte == 0));
    }

    #[test]
    fn test_fetch_combines_bytes() {
        let mut state = State::new();
        state.memory[0x200..0x202].copy_from_slice(&[0xAA, 0xBB]);
        assert_eq!(state.fetch().unwrap(), Opcode(0xAABB));
    }

    #[test]
    fn test_fetch_past_end_of_memory() {
        let mut state = State::new();
        state.pc = 0xFFF;
        assert!(matches!(
            state.fetch(),
            Err(Chip8Error::MemoryOutOfBounds { address: 0x1000 })
        ));
    }

    #[test]
    fn test_memory_reaches_last_byte() {
        let mut state = State::new();
        state.memory_mut(0xFFD, 3).unwrap().copy_from_slice(&[1, 2, 3]);
        assert_eq!(state.memory(0xFFD, 3).unwrap(), &[1, 2, 3]);
        assert!(state.memory(0xFFE, 3).is_err());
    }

    #[test]
    fn test_push_then_pop() {
        let mut state = State::new();
        state.pc = 0x345;
        state.push_pc().unwrap();
        assert_eq!(state.sp, 1);
        assert_eq!(state.pop().unwrap(), 0x345);
        assert_eq!(state.sp, 0);
    }

    #[test]
    fn test_push_overflows() {
        let mut state = State::new();
        for _ in 0..STACK_SIZE {
            state.push_pc().unwrap();
        }
        assert!(matches!(
            state.push_pc(),
            Err(Chip8Error::StackOverflow { address: 0x200 })
        ));
        assert_eq!(usize::from(state.sp), STACK_SIZE);
    }

    #[test]
    fn test_pop_underflows() {
        let mut state = State::new();
        assert!(matches!(
            state.pop(),
            Err(Chip8Error::StackUnderflow { address: 0x200 })
        ));
        assert_eq!(state.sp, 0);
    }

    #[test]
    fn test_skip_if() {
        let mut state = State::new();
        state.skip_if(true);
        assert_eq!(state.pc, 0x204);
        state.skip_if(false);
        assert_eq!(state.pc, 0x206);
    }
}
