use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker shape drawn for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Symbol {
    #[default]
    None,
    Circle,
    Square,
    Triangle,
    Star,
    Cross,
    Diamond,
}

impl Symbol {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Circle => "CIRCLE",
            Self::Square => "SQUARE",
            Self::Triangle => "TRIANGLE",
            Self::Star => "STAR",
            Self::Cross => "CROSS",
            Self::Diamond => "DIAMOND",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
