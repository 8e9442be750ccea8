/// Columns used for landscape sources.
pub const LANDSCAPE_COLUMNS: u32 = 120;

/// Rows used for portrait and square sources.
pub const PORTRAIT_ROWS: u32 = 60;

/// Height-to-width ratio of a terminal glyph cell.
pub const CELL_ASPECT: f64 = 0.55;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetGeometry {
    pub columns: u32,
    pub rows: u32,
    pub orientation: Orientation,
}

impl TargetGeometry {
    /// Character grid for a source image, or `None` if either side is zero.
    ///
    /// Landscape images get a fixed width, everything else a fixed height.
    /// The free dimension is floored and may come out as zero for very
    /// elongated images, which leaves nothing to render.
    pub fn derive(source_width: u32, source_height: u32) -> Option<Self> {
        if source_width == 0 || source_height == 0 {
            return None;
        }

        let aspect_ratio = f64::from(source_height) / f64::from(source_width);

        let geometry = if source_width > source_height {
            let columns = LANDSCAPE_COLUMNS;
            let rows = (f64::from(columns) * aspect_ratio * CELL_ASPECT).floor() as u32;
            Self { columns, rows, orientation: Orientation::Landscape }
        } else {
            let rows = PORTRAIT_ROWS;
            let columns = (f64::from(rows) / aspect_ratio / CELL_ASPECT).floor() as u32;
            Self { columns, rows, orientation: Orientation::Portrait }
        };

        Some(geometry)
    }

    pub fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }
}
