//! Display colors
//!
//! Stored as RGBA floats for the GPU, written as CSS-style hex strings
//! (`#4ae`, `#44aaee`, `#44aaeecc`) in config files. Channels keep the sRGB
//! encoding of the hex string; no linearization happens.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to parse a hex color string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color {0:?}: expected #rgb, #rrggbb or #rrggbbaa")]
pub struct ColorParseError(pub String);

/// RGBA color, each channel in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const WHITE: Color = Color([1.0, 1.0, 1.0, 1.0]);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Color([r, g, b, 1.0])
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(err)?;
        if !digits.is_ascii() {
            return Err(err());
        }

        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| err());
        let bytes: Vec<u8> = match digits.len() {
            3 => digits
                .chars()
                .map(|c| channel(&c.to_string().repeat(2)))
                .collect::<Result<_, _>>()?,
            6 | 8 => (0..digits.len())
                .step_by(2)
                .map(|i| channel(&digits[i..i + 2]))
                .collect::<Result<_, _>>()?,
            _ => return Err(err()),
        };

        let alpha = bytes.get(3).copied().unwrap_or(255);
        Ok(Color([
            bytes[0] as f32 / 255.0,
            bytes[1] as f32 / 255.0,
            bytes[2] as f32 / 255.0,
            alpha as f32 / 255.0,
        ]))
    }

    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::from_hex(&s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
