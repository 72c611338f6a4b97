//! Message themes and their emoji.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RegistryError;

/// Tone/topic of a daily message.
///
/// Serialized and displayed as the Korean label used inside prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    #[serde(rename = "감성")]
    Emotional,
    #[serde(rename = "유머")]
    Humor,
    #[serde(rename = "연애")]
    Romance,
    #[serde(rename = "철학")]
    Philosophy,
}

impl Theme {
    pub const ALL: [Theme; 4] = [
        Theme::Emotional,
        Theme::Humor,
        Theme::Romance,
        Theme::Philosophy,
    ];

    /// Korean label (e.g., "철학").
    pub fn label(self) -> &'static str {
        match self {
            Theme::Emotional => "감성",
            Theme::Humor => "유머",
            Theme::Romance => "연애",
            Theme::Philosophy => "철학",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Theme::Emotional => "💝",
            Theme::Humor => "😄",
            Theme::Romance => "💕",
            Theme::Philosophy => "🤔",
        }
    }

    fn english_name(self) -> &'static str {
        match self {
            Theme::Emotional => "emotional",
            Theme::Humor => "humor",
            Theme::Romance => "romance",
            Theme::Philosophy => "philosophy",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Theme {
    type Err = RegistryError;

    /// Accepts the Korean label or the English name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_lowercase();
        Theme::ALL
            .into_iter()
            .find(|t| t.label() == trimmed || t.english_name() == lower)
            .ok_or_else(|| RegistryError::UnknownTheme(s.to_string()))
    }
}
