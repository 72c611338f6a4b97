//! mbtigen CLI and REST API entry point.
//!
//! Binary name: `mbtigen`
//!
//! Parses CLI arguments, resolves the API key and wires the generation
//! services, then dispatches to a command handler or starts the server.

mod cli;
mod http;
mod state;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap_complete::generate;
use console::style;

use mbtigen_infra::filesystem::resolve_data_dir;
use mbtigen_observe::tracing_setup::{init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    // Before parsing so `.env` can supply MBTIGEN_DATA_DIR as well as the key.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = init_tracing(&cli.tracing_options()) {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "failed to load .env"),
    }

    let result = run(cli).await;
    shutdown_tracing();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!();
            eprintln!("{}", cli::failure_notice(&e));
            eprintln!();
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let data_dir = cli.data_dir.clone().unwrap_or_else(resolve_data_dir);

    match cli.command {
        Commands::Types => cli::registry::list_types(cli.json)?,

        Commands::Themes => cli::registry::list_themes(cli.json)?,

        Commands::Message { personality, theme } => {
            // Resolve choices before touching credentials so bad input fails fast.
            let personality = cli::select::personality(personality.as_deref())?;
            let theme = cli::select::theme(theme.as_deref())?;
            let state = AppState::init(data_dir).await?;
            cli::message::generate_message(&state, personality, theme, cli.json).await?;
        }

        Commands::Character {
            personality,
            no_image,
        } => {
            let personality = cli::select::personality(personality.as_deref())?;
            let state = AppState::init(data_dir).await?;
            cli::character::generate_character(&state, personality, !no_image, cli.json).await?;
        }

        Commands::Check => cli::check::check(&data_dir, cli.json).await?,

        Commands::Serve { port, host } => serve(data_dir, &host, port).await?,

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "mbtigen", &mut std::io::stdout());
        }
    }

    Ok(())
}

async fn serve(data_dir: PathBuf, host: &str, port: u16) -> anyhow::Result<()> {
    // Refuses to start without a credential.
    let state = AppState::init(data_dir).await?;

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!();
    println!(
        "  {} mbtigen API listening on {}",
        style("⚡").bold(),
        style(format!("http://{addr}")).cyan()
    );
    println!(
        "  {}",
        style(format!(
            "data dir {} · API key from {} · chat {} · image {}",
            state.data_dir.display(),
            state.key_source,
            state.config.llm.chat_model,
            state.config.llm.image_model
        ))
        .dim()
    );
    println!("  {}", style("Press Ctrl+C to stop").dim());

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("\n  Server stopped.");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
