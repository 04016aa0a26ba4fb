//! Redraft CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use redraft::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { force } => redraft::cli::commands::init::execute(force, cli.json).await,
        Commands::Event(args) => redraft::cli::commands::event::execute(args, cli.json).await,
        Commands::Analyze { session_id } => {
            redraft::cli::commands::analyze::execute(session_id, cli.json).await
        }
        Commands::Sessions { limit } => {
            redraft::cli::commands::sessions::execute(limit, cli.json).await
        }
    };

    if let Err(err) = result {
        redraft::cli::handle_error(err, cli.json);
    }
}
