use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EscapesError, Result};

/// A colour that can report red, green, blue and alpha channels, each scaled
/// to the 16-bit range `0..=0xffff`.
pub trait Rgba {
    fn rgba(&self) -> (u32, u32, u32, u32);

    /// The colour reduced to 8-bit channels, alpha dropped.
    fn to_rgb8(&self) -> (u8, u8, u8) {
        let (r, g, b, _) = self.rgba();
        (channel_u8(r), channel_u8(g), channel_u8(b))
    }
}

/// Reduce a 16-bit channel to its high byte.
pub fn channel_u8(value: u32) -> u8 {
    ((value >> 8) & 0xff) as u8
}

/// Opaque 24-bit colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RgbRepr", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or the `#rgb` shorthand; the `#` is optional.
    pub fn from_hex(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || EscapesError::InvalidColor(input.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            6 => {
                let channel = |at: usize| {
                    u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| invalid())
                };
                Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                let channel = |at: usize| {
                    u8::from_str_radix(&digits[at..at + 1], 16)
                        .map(|v| v * 0x11)
                        .map_err(|_| invalid())
                };
                Ok(Self::new(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl Rgba for Rgb {
    fn rgba(&self) -> (u32, u32, u32, u32) {
        let widen = |c: u8| u32::from(c) * 0x101;
        (widen(self.r), widen(self.g), widen(self.b), 0xffff)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = EscapesError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

/// Shapes accepted in theme files: `"#ff8800"` or `[255, 136, 0]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RgbRepr {
    Hex(String),
    Triple([u8; 3]),
}

impl TryFrom<RgbRepr> for Rgb {
    type Error = EscapesError;

    fn try_from(repr: RgbRepr) -> Result<Self> {
        match repr {
            RgbRepr::Hex(hex) => Self::from_hex(&hex),
            RgbRepr::Triple([r, g, b]) => Ok(Self::new(r, g, b)),
        }
    }
}
