/// # Timers
/// Two 8-bit countdown timers, each decremented once per tick until it reaches 0.
///
/// - `delay` is read and written by programs for pacing
/// - `sound` beeps when it runs out
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Timers { delay: 0, sound: 0 }
    }

    /// Decrements both timers, stopping at 0.
    ///
    /// Returns true exactly when the sound timer went from 1 to 0 on this tick.
    pub fn tick(&mut self) -> bool {
        self.delay = self.delay.saturating_sub(1);

        let beep = self.sound == 1;
        self.sound = self.sound.saturating_sub(1);
        beep
    }

    pub fn sound_active(&self) -> bool {
        self.sound > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_floors_at_zero() {
        let mut timers = Timers::new();
        timers.delay = 1;
        timers.tick();
        assert_eq!(timers.delay, 0);
        timers.tick();
        timers.tick();
        assert_eq!(timers.delay, 0);
    }

    #[test]
    fn test_timers_tick_independently() {
        let mut timers = Timers::new();
        timers.delay = 5;
        timers.sound = 2;
        timers.tick();
        assert_eq!(timers, Timers { delay: 4, sound: 1 });
    }

    #[test]
    fn test_beeps_once_when_sound_runs_out() {
        let mut timers = Timers::new();
        timers.sound = 3;
        let beeps: Vec<bool> = (0..5).map(|_| timers.tick()).collect();
        assert_eq!(beeps, [false, false, true, false, false]);
        assert!(!timers.sound_active());
    }

    #[test]
    fn test_idle_sound_timer_doesnt_beep() {
        let mut timers = Timers::new();
        assert!(!timers.tick());
    }
}
