//! `mbtigen message`: one daily message for a type and theme.

use anyhow::{Result, anyhow};
use comfy_table::{Cell, ContentArrangement, Table, presets};

use mbtigen_core::registry::TypeRegistry;
use mbtigen_types::generation::GeneratedMessage;
use mbtigen_types::personality::PersonalityType;
use mbtigen_types::theme::Theme;

use super::registry::accent;
use crate::state::AppState;

pub async fn generate_message(
    state: &AppState,
    personality: PersonalityType,
    theme: Theme,
    json: bool,
) -> Result<()> {
    let spinner = (!json).then(|| super::spinner("메시지를 생성하고 있습니다..."));
    let result = state.message_service.generate(personality, theme).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let message = result.map_err(|e| anyhow!("메시지 생성 실패: {e}"))?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "title": TypeRegistry::message_title(personality, theme),
                "personality": message.personality,
                "theme": message.theme,
                "content": message.content,
                "generated_at": message.generated_at,
            })
        );
    } else {
        println!();
        println!("{}", render(&message));
        println!();
    }

    Ok(())
}

fn render(message: &GeneratedMessage) -> Table {
    let color = accent(message.personality.metadata().accent_color);

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new(TypeRegistry::message_title(message.personality, message.theme)).fg(color),
    ]);
    table.add_row(vec![Cell::new(&message.content)]);
    table
}
