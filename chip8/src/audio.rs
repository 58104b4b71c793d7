use std::time::{Duration, Instant};

use log::debug;
use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

const PITCH_HZ: f32 = 440.0;
const VOLUME: f32 = 0.25;

/// How long a beep lasts once the sound timer runs out
const BEEP_LENGTH: Duration = Duration::from_millis(100);

struct SquareWave {
    phase_inc: f32,
    phase: f32,
    volume: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.phase <= 0.5 {
                self.volume
            } else {
                -self.volume
            };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

/// # Beeper
/// Plays a short square wave tone whenever the Chip-8 beeps.
/// A muted beeper accepts beeps and does nothing.
pub struct Beeper {
    device: Option<AudioDevice<SquareWave>>,
    playing_until: Option<Instant>,
}

impl Beeper {
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let audio_subsystem = sdl.audio()?;
        let desired = AudioSpecDesired {
            freq: Some(44_100),
            channels: Some(1),
            samples: None,
        };
        let device = audio_subsystem.open_playback(None, &desired, |spec| SquareWave {
            phase_inc: PITCH_HZ / spec.freq as f32,
            phase: 0.0,
            volume: VOLUME,
        })?;
        Ok(Beeper {
            device: Some(device),
            playing_until: None,
        })
    }

    pub fn muted() -> Self {
        Beeper {
            device: None,
            playing_until: None,
        }
    }

    /// Starts a tone, or extends the current one
    pub fn beep(&mut self, now: Instant) {
        if let Some(device) = &self.device {
            debug!("beep");
            device.resume();
            self.playing_until = Some(now + BEEP_LENGTH);
        }
    }

    /// Stops the tone once it has played for long enough
    pub fn update(&mut self, now: Instant) {
        if let (Some(device), Some(until)) = (&self.device, self.playing_until) {
            if now >= until {
                device.pause();
                self.playing_until = None;
            }
        }
    }
}
