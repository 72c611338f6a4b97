//! Resolve type/theme from flags, or prompt for them interactively.

use anyhow::{Result, bail};
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;

use mbtigen_core::registry::TypeRegistry;
use mbtigen_types::personality::PersonalityType;
use mbtigen_types::theme::Theme;

pub fn personality(arg: Option<&str>) -> Result<PersonalityType> {
    if let Some(code) = arg {
        return Ok(code.parse()?);
    }
    if !console::user_attended() {
        bail!("--type is required when not running in a terminal");
    }

    let items: Vec<String> = TypeRegistry::all()
        .map(|(t, meta)| format!("{} {t} {}", meta.emoji, meta.nickname))
        .collect();

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("MBTI 유형을 선택하세요")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(PersonalityType::ALL[index])
}

pub fn theme(arg: Option<&str>) -> Result<Theme> {
    if let Some(label) = arg {
        return Ok(label.parse()?);
    }
    if !console::user_attended() {
        bail!("--theme is required when not running in a terminal");
    }

    let items: Vec<String> = TypeRegistry::themes()
        .map(|t| format!("{} {}", t.emoji(), t.label()))
        .collect();

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("메시지 테마를 선택하세요")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(Theme::ALL[index])
}
