//! `mbtigen check`: where the API key comes from and what config is active.

use std::path::Path;

use anyhow::Result;
use console::style;

use mbtigen_core::credential::resolve_api_key;
use mbtigen_infra::config::load_global_config;
use mbtigen_infra::secret::file::SECRETS_FILE;

use crate::state::secret_service;

pub async fn check(data_dir: &Path, json: bool) -> Result<()> {
    let config = load_global_config(data_dir).await;
    let secrets = secret_service(data_dir);
    let key_name = &config.llm.api_key_name;

    let resolved = resolve_api_key(&secrets, key_name).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "data_dir": data_dir.display().to_string(),
                "api_key": {
                    "name": key_name,
                    "source": resolved.source,
                    "masked": resolved.value.masked(),
                },
                "llm": &config.llm,
            }))?
        );
        return Ok(());
    }

    println!();
    println!("  {} Configuration", style("🔍").bold());
    println!();
    println!("  {} {}", style("✓").green(), style(key_name).bold());
    println!(
        "      {} from {}",
        resolved.value.masked(),
        style(resolved.source).cyan()
    );
    println!("  {} data dir    {}", style("·").dim(), data_dir.display());
    println!(
        "  {} secrets     {}",
        style("·").dim(),
        data_dir.join(SECRETS_FILE).display()
    );
    println!("  {} endpoint    {}", style("·").dim(), config.llm.base_url);
    println!("  {} chat model  {}", style("·").dim(), config.llm.chat_model);
    println!(
        "  {} image model {} ({}, {})",
        style("·").dim(),
        config.llm.image_model,
        config.llm.image_size,
        config.llm.image_quality
    );
    println!();

    Ok(())
}
