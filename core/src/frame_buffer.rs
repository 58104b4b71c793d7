use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// # Frame Buffer
/// The Chip-8 display is a 64x32 plane of black/white pixels.
///
/// The on/off state of each pixel is stored as 1/0 and indexed as `[y][x]`.
/// It is only mutated by clearing it or by XORing sprites onto it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            pixels: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        }
    }

    /// Turns every pixel off.
    pub fn clear(&mut self) {
        self.pixels = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    }

    /// Returns whether the pixel at (x, y) is set; coordinates wrap.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH] == 1
    }

    /// The rows of the display from top to bottom.
    pub fn rows(&self) -> &[[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT] {
        &self.pixels
    }

    /// XORs a sprite onto the display.
    ///
    /// Each byte of `sprite` is one 8 pixel row, most significant bit leftmost.
    /// Rows and columns that fall off an edge wrap around to the opposite one.
    ///
    /// Returns true if any pixel that was on got turned off.
    ///
    /// # Arguments
    /// * `x` the column of the sprite's top left corner
    /// * `y` the row of the sprite's top left corner
    /// * `sprite` the rows of the sprite
    pub fn draw_sprite(&mut self, x: usize, y: usize, sprite: &[u8]) -> bool {
        let mut collision = 0;
        for (row, byte) in sprite.iter().enumerate() {
            let py = (y + row) % DISPLAY_HEIGHT;
            for bit in 0..8 {
                let px = (x + bit) % DISPLAY_WIDTH;
                let pixel_value = (byte >> (7 - bit)) & 1;
                collision |= pixel_value & self.pixels[py][px];
                self.pixels[py][px] ^= pixel_value;
            }
        }
        collision == 1
    }

    #[cfg(test)]
    pub(crate) fn set(&mut self, x: usize, y: usize) {
        self.pixels[y][x] = 1;
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
