//! Command-line interface for the redraft analytics engine.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

pub use output::{output, truncate, CommandOutput};

#[derive(Parser)]
#[command(name = "redraft")]
#[command(about = "Redraft - revision-behavior analytics for writing sessions", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize redraft configuration and database
    Init {
        /// Force reinitialization even if already initialized
        #[arg(short, long)]
        force: bool,
    },

    /// Event log commands (record, list, import)
    Event(commands::event::EventArgs),

    /// Analyze a session's revision behavior
    Analyze {
        /// Session identifier
        session_id: String,
    },

    /// List known sessions
    Sessions {
        /// Maximum number of sessions to display
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },
}

/// Report a command failure, respecting `--json`, and exit non-zero.
pub fn handle_error(err: anyhow::Error, json_mode: bool) {
    if json_mode {
        let value = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
