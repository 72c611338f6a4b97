//! The 16 personality types and their display metadata.
//!
//! The table is a closed enum with an exhaustive `match`, so every type
//! has exactly one metadata entry at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RegistryError;

/// One of the 16 four-letter personality codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonalityType {
    #[serde(rename = "INTJ")]
    Intj,
    #[serde(rename = "INTP")]
    Intp,
    #[serde(rename = "ENTJ")]
    Entj,
    #[serde(rename = "ENTP")]
    Entp,
    #[serde(rename = "INFJ")]
    Infj,
    #[serde(rename = "INFP")]
    Infp,
    #[serde(rename = "ENFJ")]
    Enfj,
    #[serde(rename = "ENFP")]
    Enfp,
    #[serde(rename = "ISTJ")]
    Istj,
    #[serde(rename = "ISFJ")]
    Isfj,
    #[serde(rename = "ESTJ")]
    Estj,
    #[serde(rename = "ESFJ")]
    Esfj,
    #[serde(rename = "ISTP")]
    Istp,
    #[serde(rename = "ISFP")]
    Isfp,
    #[serde(rename = "ESTP")]
    Estp,
    #[serde(rename = "ESFP")]
    Esfp,
}

impl PersonalityType {
    /// All types in display order (analysts, diplomats, sentinels, explorers).
    pub const ALL: [PersonalityType; 16] = [
        PersonalityType::Intj,
        PersonalityType::Intp,
        PersonalityType::Entj,
        PersonalityType::Entp,
        PersonalityType::Infj,
        PersonalityType::Infp,
        PersonalityType::Enfj,
        PersonalityType::Enfp,
        PersonalityType::Istj,
        PersonalityType::Isfj,
        PersonalityType::Estj,
        PersonalityType::Esfj,
        PersonalityType::Istp,
        PersonalityType::Isfp,
        PersonalityType::Estp,
        PersonalityType::Esfp,
    ];

    /// The four-letter code, e.g. `"INTJ"`.
    pub fn code(self) -> &'static str {
        match self {
            PersonalityType::Intj => "INTJ",
            PersonalityType::Intp => "INTP",
            PersonalityType::Entj => "ENTJ",
            PersonalityType::Entp => "ENTP",
            PersonalityType::Infj => "INFJ",
            PersonalityType::Infp => "INFP",
            PersonalityType::Enfj => "ENFJ",
            PersonalityType::Enfp => "ENFP",
            PersonalityType::Istj => "ISTJ",
            PersonalityType::Isfj => "ISFJ",
            PersonalityType::Estj => "ESTJ",
            PersonalityType::Esfj => "ESFJ",
            PersonalityType::Istp => "ISTP",
            PersonalityType::Isfp => "ISFP",
            PersonalityType::Estp => "ESTP",
            PersonalityType::Esfp => "ESFP",
        }
    }

    /// Display metadata for this type.
    pub fn metadata(self) -> TypeMetadata {
        let (emoji, nickname, color) = match self {
            PersonalityType::Intj => ("🏗️", "건축가", "#6B46C1"),
            PersonalityType::Intp => ("🔬", "논리술사", "#7C3AED"),
            PersonalityType::Entj => ("👑", "통솔자", "#DC2626"),
            PersonalityType::Entp => ("💡", "변론가", "#EA580C"),
            PersonalityType::Infj => ("🌙", "옹호자", "#059669"),
            PersonalityType::Infp => ("📚", "중재자", "#0891B2"),
            PersonalityType::Enfj => ("🌟", "선도자", "#16A34A"),
            PersonalityType::Enfp => ("🎠", "활동가", "#2563EB"),
            PersonalityType::Istj => ("🛡️", "현실주의자", "#7C2D12"),
            PersonalityType::Isfj => ("🤗", "수호자", "#BE185D"),
            PersonalityType::Estj => ("⚖️", "경영자", "#B91C1C"),
            PersonalityType::Esfj => ("💖", "집정관", "#DB2777"),
            PersonalityType::Istp => ("🔧", "장인", "#65A30D"),
            PersonalityType::Isfp => ("🎨", "모험가", "#0D9488"),
            PersonalityType::Estp => ("🏃", "사업가", "#DC2626"),
            PersonalityType::Esfp => ("🎉", "연예인", "#F59E0B"),
        };

        TypeMetadata {
            emoji,
            nickname,
            accent_color: AccentColor(color),
        }
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for PersonalityType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        PersonalityType::ALL
            .into_iter()
            .find(|t| t.code() == normalized)
            .ok_or_else(|| RegistryError::UnknownType(s.to_string()))
    }
}

/// Display metadata attached to a personality type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeMetadata {
    pub emoji: &'static str,
    /// Korean nickname (e.g., "건축가").
    pub nickname: &'static str,
    pub accent_color: AccentColor,
}

/// A `#RRGGBB` accent color.
///
/// Table entries are `&'static str` literals; [`AccentColor::parse`]
/// validates arbitrary input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccentColor(&'static str);

impl AccentColor {
    /// Validate a `#RRGGBB` string and return its components.
    pub fn parse(value: &str) -> Result<(u8, u8, u8), RegistryError> {
        let invalid = || RegistryError::InvalidColor(value.to_string());

        let hex = value.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok((channel(0)?, channel(2)?, channel(4)?))
    }

    /// The color as written, e.g. `"#6B46C1"`.
    pub fn hex(&self) -> &'static str {
        self.0
    }

    /// Red, green, blue components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        // Table literals are checked by tests; fall back to grey if one ever isn't.
        Self::parse(self.0).unwrap_or((128, 128, 128))
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
