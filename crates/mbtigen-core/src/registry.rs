//! Read-only lookup over the personality and theme tables.

use mbtigen_types::error::RegistryError;
use mbtigen_types::personality::{PersonalityType, TypeMetadata};
use mbtigen_types::theme::Theme;

/// Lookup facade for string-keyed callers (CLI args, HTTP bodies).
///
/// Typed callers can use [`PersonalityType::metadata`] and [`Theme::emoji`]
/// directly; both are total over their enums.
pub struct TypeRegistry;

impl TypeRegistry {
    /// Look up metadata by four-letter code.
    ///
    /// Fails with [`RegistryError::UnknownType`] for anything that is not one
    /// of the 16 codes.
    pub fn lookup(code: &str) -> Result<TypeMetadata, RegistryError> {
        code.parse::<PersonalityType>().map(PersonalityType::metadata)
    }

    pub fn theme_emoji(theme: Theme) -> &'static str {
        theme.emoji()
    }

    /// All types with their metadata, in display order.
    pub fn all() -> impl Iterator<Item = (PersonalityType, TypeMetadata)> {
        PersonalityType::ALL.into_iter().map(|t| (t, t.metadata()))
    }

    pub fn themes() -> impl Iterator<Item = Theme> {
        Theme::ALL.into_iter()
    }

    /// Heading shown above a generated message,
    /// e.g. "📚 INFP 중재자님을 위한 🤔 철학 메시지".
    pub fn message_title(personality: PersonalityType, theme: Theme) -> String {
        let meta = personality.metadata();
        format!(
            "{} {} {}님을 위한 {} {} 메시지",
            meta.emoji,
            personality,
            meta.nickname,
            theme.emoji(),
            theme.label()
        )
    }
}
