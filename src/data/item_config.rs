use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::error::ItemResult;

/// Seed values for a [`crate::data::MatrixChartItem`].
///
/// Every field is optional when deserializing; missing fields fall back to
/// `(0, 0, 0.0, "", red)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemConfig {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default)]
    pub z: f64,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_color")]
    pub color: Color,
}

impl ItemConfig {
    #[must_use]
    pub fn new(x: i32, y: i32, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            name: String::new(),
            color: default_color(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Parses a JSON object and validates the color channels.
    pub fn from_json_str(input: &str) -> ItemResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.color.validate()?;
        Ok(config)
    }
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self::new(0, 0, 0.0)
    }
}

fn default_color() -> Color {
    Color::RED
}
