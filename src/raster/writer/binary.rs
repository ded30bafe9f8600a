use std::io::Write;

use crate::color::Rgb565;
use crate::raster::{Image, ImageWriter};

/// Writes every pixel as a raw little-endian `u16`, without any framing.
pub struct BinaryImageWriter<'a, T: Write> {
    writer: T,
    image: &'a Image,
}

impl<'a, T: Write> BinaryImageWriter<'a, T> {
    pub fn new(writer: T, image: &'a Image) -> Self {
        Self { writer, image }
    }
}

impl<T: Write> ImageWriter for BinaryImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        for row_index in 0..self.image.height() {
            for column_index in 0..self.image.width() {
                let color = Rgb565::from(self.image.color(column_index, row_index));
                self.writer.write_all(&color.to_le_bytes())?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}
