use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ItemError, ItemResult};

/// RGBA color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const CYAN: Self = Self::rgb(0.0, 1.0, 1.0);
    pub const LIME: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`. The `#` may be omitted or
    /// written as `0x`.
    pub fn from_hex(text: &str) -> ItemResult<Self> {
        let trimmed = text.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if !digits.is_ascii() {
            return Err(ItemError::InvalidColor(format!(
                "`{text}` is not a hex color"
            )));
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => digits.to_owned(),
            _ => {
                return Err(ItemError::InvalidColor(format!(
                    "`{text}` must have 3, 6 or 8 hex digits"
                )));
            }
        };

        let mut channels = [255_u8; 4];
        for (index, chunk) in expanded.as_bytes().chunks(2).enumerate() {
            let pair = std::str::from_utf8(chunk).map_err(|_| {
                ItemError::InvalidColor(format!("`{text}` is not a hex color"))
            })?;
            channels[index] = u8::from_str_radix(pair, 16).map_err(|_| {
                ItemError::InvalidColor(format!("`{text}` contains non-hex digits"))
            })?;
        }

        Ok(Self::rgba(
            f64::from(channels[0]) / 255.0,
            f64::from(channels[1]) / 255.0,
            f64::from(channels[2]) / 255.0,
            f64::from(channels[3]) / 255.0,
        ))
    }

    pub fn validate(self) -> ItemResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ItemError::InvalidColor(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Lower-case `#rrggbbaa` text.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            channel_to_u8(self.red),
            channel_to_u8(self.green),
            channel_to_u8(self.blue),
            channel_to_u8(self.alpha),
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::RED
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn channel_to_u8(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    // Saturating float-to-int cast clamps out-of-range channels.
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
