use std::io::{BufRead, Seek};

use image::codecs::png::PngDecoder;
use image::DynamicImage;

use crate::raster::{Image, ImageReader};

/// Decodes PNG streams only; other formats are rejected by the decoder.
pub struct PngImageReader<T: BufRead + Seek> {
    reader: T,
}

impl<T: BufRead + Seek> PngImageReader<T> {
    pub fn new(reader: T) -> Self {
        Self { reader }
    }
}

impl<T: BufRead + Seek> ImageReader for PngImageReader<T> {
    fn read_image(&mut self) -> crate::Result<Image> {
        let decoder = PngDecoder::new(&mut self.reader)?;
        // 8 bit sources are widened by 257, so v8 == v16 / 257 holds for every sample
        let buffer = DynamicImage::from_decoder(decoder)?.into_rgba16();
        let (width, height) = buffer.dimensions();
        Ok(Image::new(width, height, buffer.into_raw()))
    }
}
