use log::debug;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;

use chip8_core::{FrameBuffer, DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Bytes per pixel in an RGB24 texture
const BYTES_PER_PIXEL: usize = 3;

/// # Display
/// The Chip-8 display is composed of 64x32 black/white pixels.
/// The display only gets a call to `render` when the Chip-8 FrameBuffer is updated.
pub struct Display {
    canvas: WindowCanvas,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `title` the window title
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, title: &str, scale: u32) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                title,
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| e.to_string())?;
        debug!("opened {}x scaled window", scale);

        let mut display = Display { canvas };
        display.render(&FrameBuffer::new())?;
        Ok(display)
    }

    /// Renders a single Chip-8 FrameBuffer.
    ///
    /// Every pixel of the `frame` is copied into a streaming texture which is
    /// then stretched over the whole window.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer that represents the state of every pixel on the Display.
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;

        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            fill_rgb24(frame, buffer, pitch)
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

/// Writes `frame` into an RGB24 pixel buffer whose rows are `pitch` bytes apart.
fn fill_rgb24(frame: &FrameBuffer, buffer: &mut [u8], pitch: usize) {
    for (y, row) in frame.rows().iter().enumerate() {
        for (x, pixel) in row.iter().enumerate() {
            let offset = y * pitch + x * BYTES_PER_PIXEL;
            let color = *pixel * 255;
            buffer[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&[color; BYTES_PER_PIXEL]);
        }
    }
}
