use std::fmt::Display;

use clap::builder::PossibleValue;
use clap::ValueEnum;

pub mod binary;
pub mod c_array;

/// How the converted pixels are serialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// C array initializer text
    Text,
    /// raw little-endian `u16` stream
    Binary,
}

impl ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Text, Self::Binary]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Text => Some(PossibleValue::new("txt")),
            Self::Binary => Some(PossibleValue::new("bin")),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "txt"),
            Self::Binary => write!(f, "bin"),
        }
    }
}
