use image::RgbImage;

use super::{grid::GlyphGrid, palette::Palette};

pub struct GlyphMapper {
    palette: Palette,
}

impl GlyphMapper {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn map_pixels(&self, image: &RgbImage) -> GlyphGrid {
        let mut cells = Vec::with_capacity(image.width() as usize * image.height() as usize);
        for pixel in image.pixels() {
            cells.push(self.palette.glyph_for(pixel.0));
        }

        GlyphGrid::new(image.width(), image.height(), cells)
    }
}
