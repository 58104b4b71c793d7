use std::io::Read;

use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{MAX_ROM_SIZE, NUM_KEYS, PROGRAM_START};
use crate::error::{Chip8Error, Result};
use crate::frame_buffer::FrameBuffer;
use crate::instruction::Instruction;
use crate::state::State;

/// What happened during a cycle that the outside world may need to act on
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cycle {
    /// The sound timer ran out on this cycle
    pub beep: bool,
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the random source used by `Cxnn`
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU
/// - advancing its timers
/// - inspecting its frame buffer for rendering by some display
pub struct Chip8 {
    state: State,
    rng: StdRng,
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8 {
            state: State::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// A Chip8 whose random numbers are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Chip8 {
            state: State::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Load a rom from some source
    ///
    /// # Arguments
    /// * `reader` a reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<()> {
        let mut rom = Vec::new();
        reader.read_to_end(&mut rom)?;
        self.load_rom_bytes(&rom)
    }

    /// Copy a ROM into memory at `PROGRAM_START`.
    ///
    /// Fails without touching memory if the ROM doesn't fit.
    pub fn load_rom_bytes(&mut self, rom: &[u8]) -> Result<()> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Chip8Error::RomTooLarge {
                size: rom.len(),
                max_size: MAX_ROM_SIZE,
            });
        }
        self.state
            .memory_mut(PROGRAM_START, rom.len())?
            .copy_from_slice(rom);
        info!("loaded {} byte ROM at {:#05X}", rom.len(), PROGRAM_START);
        Ok(())
    }

    /// Returns the FrameBuffer if it changed since it was last taken
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    /// The current contents of the display
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was pressed
    pub fn key_press(&mut self, key: u8) {
        self.set_key(key, true);
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was released
    pub fn key_release(&mut self, key: u8) {
        self.set_key(key, false);
    }

    fn set_key(&mut self, key: u8, pressed: bool) {
        if usize::from(key) < NUM_KEYS {
            self.state.keypad.set(key, pressed);
        } else {
            warn!("ignoring key {:#04X}; the keypad only has keys 0x0..=0xF", key);
        }
    }

    /// Whether the sound timer is still counting down
    pub fn sound_active(&self) -> bool {
        self.state.timers.sound_active()
    }

    /// Runs one full cycle
    /// - fetches, decodes and executes the instruction at the pc
    /// - ticks both timers once
    ///
    /// Faults stop the cycle before the timers tick.
    pub fn cycle(&mut self) -> Result<Cycle> {
        self.advance_cpu()?;
        Ok(self.tick_timers())
    }

    /// Advances the CPU by a single instruction
    /// - gets and decodes the opcode at the pc
    /// - executes it
    pub fn advance_cpu(&mut self) -> Result<()> {
        let address = self.state.pc;
        let opcode = self.state.fetch()?;
        let instruction = Instruction::decode(opcode).ok_or(Chip8Error::UnknownOpcode {
            opcode: opcode.0,
            address,
        })?;
        trace!(
            "{} {:<4} v{:02X?} i{:04X} pc{:04X}",
            opcode,
            instruction,
            self.state.v,
            self.state.i,
            address
        );
        instruction.execute(&mut self.state, &mut self.rng)
    }

    /// Decrements the delay and sound timers
    pub fn tick_timers(&mut self) -> Cycle {
        let beep = self.state.timers.tick();
        if beep {
            debug!("sound timer ran out");
        }
        Cycle { beep }
    }

    /// Read-only view of the machine's registers and memory
    pub fn state(&self) -> &State {
        &self.state
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
