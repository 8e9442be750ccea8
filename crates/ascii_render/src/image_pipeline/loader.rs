use std::io::Cursor;
use std::path::Path;

use image::io::Reader;
use image::DynamicImage;

use crate::AsciiError;

/// Decode an in-memory image, sniffing the format from its contents.
pub fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage, AsciiError> {
    let image = Reader::new(Cursor::new(bytes)).with_guessed_format()?.decode()?;
    Ok(image)
}

pub fn open_path(path: &Path) -> Result<DynamicImage, AsciiError> {
    let image = Reader::open(path)?.with_guessed_format()?.decode()?;
    Ok(image)
}
