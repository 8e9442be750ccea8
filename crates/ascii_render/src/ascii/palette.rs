/// Number of glyphs in a palette.
pub const PALETTE_LEN: usize = 12;

/// Width of one brightness band, in channel units.
pub const BRIGHTNESS_STEP: u16 = 25;

/// Fixed set of glyphs ordered from least to most visually dense.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    glyphs: [char; PALETTE_LEN],
}

impl Palette {
    pub const fn new(glyphs: [char; PALETTE_LEN]) -> Self {
        Self { glyphs }
    }

    pub const fn standard() -> Self {
        Self::new([' ', '.', ',', ':', ';', '+', '*', '?', '%', 'S', '#', '@'])
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Palette slot for an RGB pixel.
    ///
    /// Brightness is the plain mean of the three channels, split into bands of
    /// [`BRIGHTNESS_STEP`]. `floor(floor(sum / 3) / 25)` equals `floor(sum / 75)`,
    /// so the whole computation stays in integers. In-range input never
    /// reaches the last slot.
    pub fn index_for(&self, rgb: [u8; 3]) -> usize {
        let sum: u16 = rgb.iter().map(|&channel| u16::from(channel)).sum();
        let band = sum / (3 * BRIGHTNESS_STEP);
        usize::from(band).min(PALETTE_LEN - 1)
    }

    pub fn glyph_for(&self, rgb: [u8; 3]) -> char {
        self.glyphs[self.index_for(rgb)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}
