use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
pub use color::{EncodingMode, Rgb565};
pub use error::Error;
use raster::{
    reader::png::PngImageReader,
    writer::{
        binary::BinaryImageWriter,
        c_array::{array_name_from_path, CArrayImageWriter},
    },
    Image, ImageReader, ImageWriter,
};
pub use raster::writer::OutputFormat;

mod cli;
pub mod color;
mod error;
mod logger;
pub mod raster;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    encoding_mode: EncodingMode,
    output_format: OutputFormat,
}

impl Arguments {
    pub fn input_file(&self) -> &Path {
        &self.input_file
    }

    pub fn encoding_mode(&self) -> EncodingMode {
        self.encoding_mode
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.to_string_lossy().into_owned(), e)
    })
}

fn read_input_image(file_path: &Path) -> Result<Image> {
    let input_file = open_input_file(file_path)?;
    let mut reader = PngImageReader::new(BufReader::new(input_file));
    let image = reader.read_image()?;
    log::info!(
        "decoded '{}' with {}x{} pixels",
        file_path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Decode the PNG named in `arguments` and emit its RGB565 pixels to `output`.
///
/// Nothing is written to `output` unless the input could be opened and
/// decoded completely.
pub fn convert_png_to_array<W: Write>(arguments: &Arguments, output: W) -> Result<()> {
    let image = read_input_image(&arguments.input_file)?;
    let output = BufWriter::new(output);
    match arguments.encoding_mode {
        EncodingMode::Rgb565 => match arguments.output_format {
            OutputFormat::Text => {
                let array_name = array_name_from_path(&arguments.input_file);
                CArrayImageWriter::new(output, &image, array_name).write_image()
            }
            OutputFormat::Binary => BinaryImageWriter::new(output, &image).write_image(),
        },
    }
}
