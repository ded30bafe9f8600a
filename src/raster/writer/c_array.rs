use std::io::{self, Write};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::color::Rgb565;
use crate::raster::{Image, ImageWriter};

static SUFFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\..*$").expect("suffix pattern is a valid regex"));

/// Derive the C identifier base from an input path.
///
/// Everything from the first `.` of the file name onwards is dropped, so
/// `assets/photo.icon.png` becomes `photo`.
pub fn array_name_from_path(path: &Path) -> String {
    let file_name = path
        .file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy();
    SUFFIX_PATTERN.replace(&file_name, "").into_owned()
}

/// Renders the image as a C array initializer followed by a length constant.
pub struct CArrayImageWriter<'a, T: Write> {
    writer: T,
    image: &'a Image,
    array_name: String,
}

impl<'a, T: Write> CArrayImageWriter<'a, T> {
    pub fn new(writer: T, image: &'a Image, array_name: String) -> Self {
        Self {
            writer,
            image,
            array_name,
        }
    }

    fn write_header(&mut self) -> io::Result<()> {
        writeln!(
            self.writer,
            "unsigned char __attribute__((aligned(4))) {}[] = {{",
            self.array_name
        )
    }

    fn write_pixels(&mut self) -> io::Result<()> {
        let width = self.image.width();
        let height = self.image.height();
        for row_index in 0..height {
            for column_index in 0..width {
                let [low, high] =
                    Rgb565::from(self.image.color(column_index, row_index)).to_le_bytes();
                if row_index == height - 1 && column_index == width - 1 {
                    write!(self.writer, "0x{:02x}, 0x{:02x} \n}};", low, high)?;
                } else {
                    write!(self.writer, "0x{:02x}, 0x{:02x}, ", low, high)?;
                }
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_footer(&mut self) -> io::Result<()> {
        writeln!(
            self.writer,
            "unsigned int {}_rgb565_bin_len = {};",
            self.array_name,
            self.image.rgb565_len()
        )
    }
}

impl<T: Write> ImageWriter for CArrayImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        self.write_header()?;
        self.write_pixels()?;
        self.write_footer()?;
        self.writer.flush()?;
        Ok(())
    }
}
