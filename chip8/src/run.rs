use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use anyhow::{anyhow, Context};
use log::info;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chip8_core::{Chip8, Chip8Error};
use display::Display;

use crate::audio::Beeper;
use crate::config::Config;
use crate::keymap::keymap;

pub fn run(config: &Config) -> anyhow::Result<()> {
    let mut chip8 = match config.seed {
        Some(seed) => Chip8::with_seed(seed),
        None => Chip8::new(),
    };

    // Load ROM
    let file = File::open(&config.rom)
        .map_err(Chip8Error::from)
        .with_context(|| format!("unable to open {}", config.rom.display()))?;
    let mut reader = BufReader::new(file);
    chip8
        .load_rom(&mut reader)
        .with_context(|| format!("unable to load {}", config.rom.display()))?;

    // Get SDL2 context
    let sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let title = format!("Emu-8 - {}", config.rom.display());
    let mut display = Display::new(&sdl, &title, config.scale).map_err(|e| anyhow!(e))?;
    let mut beeper = if config.mute {
        Beeper::muted()
    } else {
        Beeper::new(&sdl).map_err(|e| anyhow!(e))?
    };
    let mut events = sdl.event_pump().map_err(|e| anyhow!(e))?;

    // Set initial timing
    let cycle_time = config.cycle_time();
    let cycles_per_timer_tick = config.cycles_per_timer_tick();
    let mut cycles_until_timer_tick = cycles_per_timer_tick;
    let mut last_cycle = Instant::now();
    info!(
        "running at {} instructions/s with timers at {} ticks/s",
        config.clock_hz, config.timer_hz
    );

    'event: loop {
        // Render the current frame if it has changed
        if let Some(frame) = chip8.take_frame() {
            display.render(frame).map_err(|e| anyhow!(e))?;
        }

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.key_press(kc);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.key_release(kc);
                    }
                }
                _ => continue,
            };
        }

        // Update state
        chip8.advance_cpu()?;
        cycles_until_timer_tick -= 1;
        if cycles_until_timer_tick == 0 {
            cycles_until_timer_tick = cycles_per_timer_tick;
            if chip8.tick_timers().beep {
                beeper.beep(Instant::now());
            }
        }
        beeper.update(Instant::now());

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    info!("window closed, stopping");
    Ok(())
}
