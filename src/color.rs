use std::fmt::Display;

use clap::builder::PossibleValue;
use clap::ValueEnum;

/// Pixel encodings the converter can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingMode {
    Rgb565,
}

impl ValueEnum for EncodingMode {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Rgb565]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Rgb565 => Some(PossibleValue::new("rgb565")),
        }
    }
}

impl Display for EncodingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rgb565 => write!(f, "rgb565"),
        }
    }
}

/// Samples of one pixel, normalized to the full `u16` range per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RGBAColorFormat<T> {
    pub red: T,
    pub green: T,
    pub blue: T,
    pub alpha: T,
}

impl<T> RGBAColorFormat<T> {
    pub fn new(red: T, green: T, blue: T, alpha: T) -> Self {
        RGBAColorFormat {
            red,
            green,
            blue,
            alpha,
        }
    }
}

/// A packed `RRRRR GGGGGG BBBBB` pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb565(u16);

const SIXTEEN_TO_EIGHT_BIT_DIVISOR: u16 = 257;

impl Rgb565 {
    /// Quantize 16 bit channel samples.
    ///
    /// Every channel is first scaled down to 8 bit by truncating division
    /// and then cut to its top 5 (red, blue) or 6 (green) bits. No rounding
    /// takes place anywhere, so the output is bit-exact for a given input.
    pub fn from_rgb16(red: u16, green: u16, blue: u16) -> Self {
        let red = (red / SIXTEEN_TO_EIGHT_BIT_DIVISOR) >> 3;
        let green = (green / SIXTEEN_TO_EIGHT_BIT_DIVISOR) >> 2;
        let blue = (blue / SIXTEEN_TO_EIGHT_BIT_DIVISOR) >> 3;
        Rgb565((red << 11) | (green << 5) | blue)
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    pub fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }
}

impl RGBAColorFormat<u16> {
    /// Scale the color channels by alpha, truncating like a `c * a / 0xffff`
    /// integer division. Fully opaque pixels are returned unchanged.
    pub fn premultiplied(&self) -> Self {
        let alpha = self.alpha as u32;
        let scale = |channel: u16| (channel as u32 * alpha / u16::MAX as u32) as u16;
        RGBAColorFormat::new(
            scale(self.red),
            scale(self.green),
            scale(self.blue),
            self.alpha,
        )
    }
}

impl From<&RGBAColorFormat<u16>> for Rgb565 {
    fn from(value: &RGBAColorFormat<u16>) -> Self {
        let color = value.premultiplied();
        Rgb565::from_rgb16(color.red, color.green, color.blue)
    }
}

impl From<RGBAColorFormat<u16>> for Rgb565 {
    fn from(value: RGBAColorFormat<u16>) -> Self {
        Rgb565::from(&value)
    }
}
