//! RGBA colors with validated channels.

use serde::{Deserialize, Serialize};

use super::error::ColorError;

/// An RGBA color with every channel in `0..=255`.
///
/// Serializes as `[r, g, b]` when fully opaque and `[r, g, b, a]` otherwise,
/// and accepts either form when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct Color {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Alpha channel, 255 is opaque.
    pub alpha: u8,
}

/// Channel tuple handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTuple {
    /// Opaque color.
    Rgb(u8, u8, u8),
    /// Color with a non-opaque alpha channel.
    Rgba(u8, u8, u8, u8),
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    /// Builds a color, failing if any channel is outside `0..=255`.
    pub fn new(red: i64, green: i64, blue: i64, alpha: i64) -> Result<Self, ColorError> {
        Ok(Self {
            red: channel("red", red)?,
            green: channel("green", green)?,
            blue: channel("blue", blue)?,
            alpha: channel("alpha", alpha)?,
        })
    }

    /// Builds an opaque color from channels that are valid by construction.
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 255,
        }
    }

    /// Returns the channels, dropping alpha when the color is opaque.
    pub fn as_tuple(&self) -> ColorTuple {
        if self.alpha == 255 {
            ColorTuple::Rgb(self.red, self.green, self.blue)
        } else {
            ColorTuple::Rgba(self.red, self.green, self.blue, self.alpha)
        }
    }
}

fn channel(name: &'static str, value: i64) -> Result<u8, ColorError> {
    u8::try_from(value).map_err(|_| ColorError::ChannelOutOfRange {
        channel: name,
        value,
    })
}

impl TryFrom<Vec<i64>> for Color {
    type Error = ColorError;

    fn try_from(channels: Vec<i64>) -> Result<Self, Self::Error> {
        match channels[..] {
            [r, g, b] => Self::new(r, g, b, 255),
            [r, g, b, a] => Self::new(r, g, b, a),
            _ => Err(ColorError::ChannelCount(channels.len())),
        }
    }
}

impl From<Color> for Vec<i64> {
    fn from(color: Color) -> Self {
        match color.as_tuple() {
            ColorTuple::Rgb(r, g, b) => vec![r.into(), g.into(), b.into()],
            ColorTuple::Rgba(r, g, b, a) => vec![r.into(), g.into(), b.into(), a.into()],
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}
