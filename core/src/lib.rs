pub use crate::chip8::{Chip8, Cycle};
pub use crate::constants::{CLOCK_SPEED, DISPLAY_HEIGHT, DISPLAY_WIDTH, TIMER_SPEED};
pub use crate::error::{Chip8Error, Result};
pub use crate::frame_buffer::FrameBuffer;
pub use crate::instruction::Instruction;
pub use crate::keypad::Keypad;
pub use crate::timers::Timers;

mod chip8;
pub mod constants;
mod error;
mod frame_buffer;
pub mod instruction;
mod keypad;
mod opcode;
mod operations;
pub mod state;
mod timers;
