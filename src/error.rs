use std::fmt::Display;

pub const USAGE: &str =
    "usage : png2array [-m {encoding mode (rgb565)}] [-f {output format (txt or bin)}] {input image file}";

#[derive(Debug)]
pub enum Error {
    MissingInputFile,
    InvalidCommandLine(clap::Error),
    UnsupportedEncodingMode(String),
    UnsupportedOutputFormat(String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToDecodePngImage(image::ImageError),
    FailedToWriteOutput(std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingInputFile => write!(f, "{}", USAGE),
            Self::InvalidCommandLine(error) => {
                write!(f, "Invalid command line: {}", error.kind())
            }
            Self::UnsupportedEncodingMode(mode) => {
                write!(f, "Unrecognized encoding mode '{}'", mode)
            }
            Self::UnsupportedOutputFormat(format) => {
                write!(f, "Unrecognized format mode '{}'", format)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToDecodePngImage(error) => {
                write!(f, "Unable to decode PNG image: {}", error)
            }
            Self::FailedToWriteOutput(error) => {
                write!(f, "Failed to write output: {}", error)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidCommandLine(error) => Some(error),
            Self::UnableToOpenInputFileForReading(_, error) => Some(error),
            Self::UnableToDecodePngImage(error) => Some(error),
            Self::FailedToWriteOutput(error) => Some(error),
            _ => None,
        }
    }
}

impl From<clap::Error> for Error {
    fn from(value: clap::Error) -> Self {
        match value.kind() {
            clap::error::ErrorKind::MissingRequiredArgument => Self::MissingInputFile,
            _ => Self::InvalidCommandLine(value),
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(value: image::ImageError) -> Self {
        Self::UnableToDecodePngImage(value)
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::FailedToWriteOutput(value)
    }
}
