//! CLI command implementations.

pub mod analyze;
pub mod event;
pub mod init;
pub mod sessions;

use anyhow::{Context, Result};

use crate::adapters::sqlite::{initialize_database, PoolConfig, SqliteEventLog};
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;

/// Loads configuration and opens the event-log database it points at.
pub(crate) async fn open_event_log() -> Result<(Config, SqliteEventLog)> {
    let config = ConfigLoader::load()?;
    let pool_config = PoolConfig::with_max_connections(config.database.max_connections);
    let pool = initialize_database(&config.database.path, Some(pool_config))
        .await
        .with_context(|| format!("Failed to open database at {}", config.database.path))?;
    Ok((config, SqliteEventLog::new(pool)))
}
