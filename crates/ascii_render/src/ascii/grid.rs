use std::fmt;

/// Rendered characters in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphGrid {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<char>,
}

impl GlyphGrid {
    pub fn new(width: u32, height: u32, cells: Vec<char>) -> Self {
        assert_eq!(width as usize * height as usize, cells.len());
        Self { width, height, cells }
    }

    /// One string per row, always `height` of them, even for a zero-width grid.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        let width = self.width as usize;
        (0..self.height as usize)
            .map(move |row| self.cells[row * width..(row + 1) * width].iter().collect::<String>())
    }
}

/// Every row followed by a line break.
impl fmt::Display for GlyphGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
