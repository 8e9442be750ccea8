mod ascii;
mod image_pipeline;

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use log::debug;

pub use ascii::{
    grid::GlyphGrid,
    mapping::GlyphMapper,
    palette::{Palette, PALETTE_LEN},
};
pub use image_pipeline::{
    loader::{decode_bytes, open_path},
    resize::{Orientation, TargetGeometry, CELL_ASPECT, LANDSCAPE_COLUMNS, PORTRAIT_ROWS},
};

#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),
    #[error("image does not fit a glyph grid")]
    InvalidLayout,
}

#[derive(Clone, Debug)]
pub struct RenderOutput {
    pub grid: GlyphGrid,
    pub geometry: TargetGeometry,
}

pub struct AsciiRenderer {
    mapper: GlyphMapper,
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self::new(Palette::standard())
    }
}

impl AsciiRenderer {
    pub fn new(palette: Palette) -> Self {
        Self { mapper: GlyphMapper::new(palette) }
    }

    pub fn palette(&self) -> &Palette {
        self.mapper.palette()
    }

    pub fn render_path<P: AsRef<Path>>(&self, path: P) -> Result<RenderOutput, AsciiError> {
        let image = open_path(path.as_ref())?;
        self.render_image(&image)
    }

    pub fn render_bytes(&self, bytes: &[u8]) -> Result<RenderOutput, AsciiError> {
        let image = decode_bytes(bytes)?;
        self.render_image(&image)
    }

    /// Resample `image` to its character grid and map every pixel to a glyph.
    pub fn render_image(&self, image: &DynamicImage) -> Result<RenderOutput, AsciiError> {
        let (width, height) = image.dimensions();
        let geometry = TargetGeometry::derive(width, height)
            .filter(|geometry| !geometry.is_empty())
            .ok_or(AsciiError::InvalidLayout)?;
        debug!(
            "rendering {width}x{height} image as {}x{} glyphs",
            geometry.columns, geometry.rows
        );

        let resized = image
            .resize_exact(geometry.columns, geometry.rows, FilterType::CatmullRom)
            .to_rgb8();
        let grid = self.mapper.map_pixels(&resized);

        Ok(RenderOutput { grid, geometry })
    }
}
