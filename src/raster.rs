use crate::color::RGBAColorFormat;

pub mod reader;
pub mod writer;

const CHANNELS_PER_PIXEL: usize = 4;

/// A decoded image with interleaved RGBA samples in the full `u16` range.
pub struct Image {
    width: u32,
    height: u32,
    samples: Vec<u16>,
}

impl Image {
    /// Panics if `samples` does not hold exactly four channels per pixel.
    pub(crate) fn new(width: u32, height: u32, samples: Vec<u16>) -> Self {
        let expected_len = width as usize * height as usize * CHANNELS_PER_PIXEL;
        if samples.len() != expected_len {
            panic!(
                "Image of {}x{} requires {} samples, but got {}",
                width,
                height,
                expected_len,
                samples.len()
            );
        }
        Image {
            width,
            height,
            samples,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn color(&self, column_index: u32, row_index: u32) -> RGBAColorFormat<u16> {
        let index =
            (row_index as usize * self.width as usize + column_index as usize) * CHANNELS_PER_PIXEL;
        let pixel = &self.samples[index..index + CHANNELS_PER_PIXEL];
        RGBAColorFormat::new(pixel[0], pixel[1], pixel[2], pixel[3])
    }

    /// Size of the image in bytes once every pixel is packed into RGB565.
    pub fn rgb565_len(&self) -> u64 {
        self.width as u64 * self.height as u64 * 2
    }
}

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<Image>;
}

pub trait ImageWriter {
    fn write_image(&mut self) -> crate::Result<()>;
}
