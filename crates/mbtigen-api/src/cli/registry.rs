//! `mbtigen types` and `mbtigen themes`.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use mbtigen_core::registry::TypeRegistry;
use mbtigen_types::personality::AccentColor;

use crate::http::handlers::registry::{ThemeView, TypeView};

pub(crate) fn accent(color: AccentColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb { r, g, b }
}

pub fn list_types(json: bool) -> Result<()> {
    if json {
        let views: Vec<TypeView> = TypeRegistry::all()
            .map(|(t, meta)| TypeView::new(t, meta))
            .collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("").fg(Color::White),
        Cell::new("Type").fg(Color::White),
        Cell::new("Nickname").fg(Color::White),
        Cell::new("Accent").fg(Color::White),
    ]);

    for (t, meta) in TypeRegistry::all() {
        table.add_row(vec![
            Cell::new(meta.emoji),
            Cell::new(t.code()).fg(accent(meta.accent_color)),
            Cell::new(meta.nickname),
            Cell::new(meta.accent_color.hex()).fg(accent(meta.accent_color)),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} Generate one with: {}",
        style("i").blue().bold(),
        style("mbtigen message --type INFP --theme 철학").yellow()
    );
    println!();

    Ok(())
}

pub fn list_themes(json: bool) -> Result<()> {
    if json {
        let views: Vec<ThemeView> = TypeRegistry::themes().map(ThemeView::from).collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    println!();
    for theme in TypeRegistry::themes() {
        println!("  {} {}", TypeRegistry::theme_emoji(theme), style(theme.label()).bold());
    }
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mbtigen_types::personality::PersonalityType;

    #[test]
    fn accent_maps_hex_to_rgb() {
        let color = PersonalityType::Intj.metadata().accent_color;
        let (r, g, b) = color.rgb();
        assert!(matches!(accent(color), Color::Rgb { r: rr, g: gg, b: bb } if (rr, gg, bb) == (r, g, b)));
    }
}
