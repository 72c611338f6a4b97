//! CLI command definitions for the `mbtigen` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod character;
pub mod check;
pub mod message;
pub mod registry;
pub mod select;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use mbtigen_observe::tracing_setup::TracingOptions;

/// Personalized MBTI daily messages and fantasy characters.
#[derive(Parser)]
#[command(name = "mbtigen", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Only log errors (command output is unaffected).
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write log events to stderr as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Export tracing spans to stdout via OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    /// Directory holding config.toml and secrets.toml (default: ~/.mbtigen).
    #[arg(long, global = true, env = "MBTIGEN_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the 16 personality types.
    Types,

    /// List the message themes.
    Themes,

    /// Generate a daily message for a type and theme.
    Message {
        /// Four-letter type code (prompted when omitted).
        #[arg(short = 't', long = "type")]
        personality: Option<String>,

        /// Theme: 감성, 유머, 연애, 철학 or emotional, humor, romance, philosophy.
        #[arg(long)]
        theme: Option<String>,
    },

    /// Generate a wizard-world character with an optional portrait.
    Character {
        /// Four-letter type code (prompted when omitted).
        #[arg(short = 't', long = "type")]
        personality: Option<String>,

        /// Skip the portrait image.
        #[arg(long)]
        no_image: bool,
    },

    /// Show where the API key resolves from and the active configuration.
    Check,

    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(long, default_value_t = 8080)]
        port: u16,

        /// Host address to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Spinner shown while an external call is in flight.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

impl Cli {
    /// Subscriber options derived from the global logging flags.
    pub fn tracing_options(&self) -> TracingOptions {
        TracingOptions {
            json: self.log_json,
            otel: self.otel,
            ..TracingOptions::from_verbosity(self.verbose, self.quiet)
        }
    }
}

/// The single line printed to stderr when a command fails.
pub fn failure_notice(err: &anyhow::Error) -> String {
    format!("  {} {err:#}", style("❌").red().bold())
}
