use std::io;

use thiserror::Error;

/// Everything that can stop a Chip-8 program.
///
/// Each variant is fatal to the current run; the only condition that suspends
/// progress without being an error is `FX0A` waiting for a key.
#[derive(Debug, Error)]
pub enum Chip8Error {
    #[error("unable to read ROM: {0}")]
    RomRead(#[from] io::Error),

    #[error("ROM is too large ({size} bytes), max size is {max_size} bytes")]
    RomTooLarge { size: usize, max_size: usize },

    #[error("illegal instruction {opcode:#06X} at address {address:#05X}")]
    UnknownOpcode { opcode: u16, address: u16 },

    #[error("stack overflow: call at address {address:#05X} exceeds the call stack")]
    StackOverflow { address: u16 },

    #[error("stack underflow: return at address {address:#05X} with an empty call stack")]
    StackUnderflow { address: u16 },

    #[error("memory access out of bounds at address {address:#06X}")]
    MemoryOutOfBounds { address: usize },
}

pub type Result<T> = std::result::Result<T, Chip8Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_opcode_reports_opcode_and_address() {
        let err = Chip8Error::UnknownOpcode {
            opcode: 0xFFFF,
            address: 0x200,
        };
        assert_eq!(
            err.to_string(),
            "illegal instruction 0xFFFF at address 0x200"
        );
    }

    #[test]
    fn test_io_errors_become_rom_read_errors() {
        let err: Chip8Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, Chip8Error::RomRead(_)));
    }
}
