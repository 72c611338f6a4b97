//! `mbtigen character`: description first, then the portrait.

use anyhow::{Result, anyhow};
use comfy_table::{Cell, ContentArrangement, Table, presets};
use console::style;

use mbtigen_types::generation::{GeneratedCharacter, ImageOutcome};
use mbtigen_types::personality::PersonalityType;

use super::registry::accent;
use crate::state::AppState;

pub async fn generate_character(
    state: &AppState,
    personality: PersonalityType,
    with_image: bool,
    json: bool,
) -> Result<()> {
    let message = if with_image {
        "캐릭터와 이미지를 생성하고 있습니다..."
    } else {
        "캐릭터를 생성하고 있습니다..."
    };
    let spinner = (!json).then(|| super::spinner(message));
    let result = state.character_service.generate(personality, with_image).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let character = result.map_err(|e| anyhow!("캐릭터 설명 생성 실패: {e}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&character)?);
        return Ok(());
    }

    println!();
    println!("{}", render(&character));
    println!("  {}", image_line(&character.image));
    println!();

    Ok(())
}

fn render(character: &GeneratedCharacter) -> Table {
    let meta = character.personality.metadata();

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new(format!(
            "{} {} {} 마법 세계 캐릭터",
            meta.emoji, character.personality, meta.nickname
        ))
        .fg(accent(meta.accent_color)),
    ]);
    table.add_row(vec![Cell::new(&character.description)]);
    table
}

fn image_line(image: &ImageOutcome) -> String {
    match image {
        ImageOutcome::Generated { url } => {
            format!("🖼️  {}", style(url).cyan().underlined())
        }
        ImageOutcome::Failed { reason } => format!(
            "{} {}",
            style("⚠️  이미지 생성에 실패했습니다:").yellow().bold(),
            style(reason).dim()
        ),
        ImageOutcome::Skipped => format!("{}", style("이미지 생성을 건너뛰었습니다").dim()),
    }
}
