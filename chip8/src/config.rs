use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use chip8_core::{CLOCK_SPEED, TIMER_SPEED};

/// Run a Chip-8 ROM
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to the ROM to run
    pub rom: PathBuf,

    /// Size of each Chip-8 pixel in screen pixels
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=64))]
    pub scale: u32,

    /// Instructions executed per second
    #[arg(long, default_value_t = CLOCK_SPEED, value_parser = clap::value_parser!(u32).range(1..))]
    pub clock_hz: u32,

    /// Delay and sound timer ticks per second
    #[arg(long, default_value_t = TIMER_SPEED, value_parser = clap::value_parser!(u32).range(1..))]
    pub timer_hz: u32,

    /// Seed for the random number instruction
    #[arg(long)]
    pub seed: Option<u64>,

    /// Don't play any sound
    #[arg(long)]
    pub mute: bool,
}

impl Config {
    /// Time budget for a single instruction
    pub fn cycle_time(&self) -> Duration {
        Duration::from_secs(1) / self.clock_hz
    }

    /// How many instructions run between timer ticks.
    /// Timers never tick faster than instructions run.
    pub fn cycles_per_timer_tick(&self) -> u32 {
        (self.clock_hz / self.timer_hz).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["chip8", "pong.ch8"]);
        assert_eq!(config.rom, PathBuf::from("pong.ch8"));
        assert_eq!(config.scale, 10);
        assert_eq!(config.clock_hz, 500);
        assert_eq!(config.timer_hz, 60);
        assert_eq!(config.seed, None);
        assert!(!config.mute);
        assert_eq!(config.cycle_time(), Duration::from_millis(2));
        assert_eq!(config.cycles_per_timer_tick(), 8);
    }

    #[test]
    fn test_overrides() {
        let config = Config::parse_from([
            "chip8", "--scale", "4", "--clock-hz", "60", "--timer-hz", "120", "--seed", "7",
            "--mute", "pong.ch8",
        ]);
        assert_eq!(config.scale, 4);
        assert_eq!(config.seed, Some(7));
        assert!(config.mute);
        assert_eq!(config.cycles_per_timer_tick(), 1);
    }

    #[test]
    fn test_rejects_zero_clock() {
        assert!(Config::try_parse_from(["chip8", "--clock-hz", "0", "pong.ch8"]).is_err());
    }

    #[test]
    fn test_requires_rom() {
        assert!(Config::try_parse_from(["chip8"]).is_err());
    }
}
