//! `redraft init`: write the default config and create the database.

use anyhow::{Context, Result};
use std::path::Path;

use crate::adapters::sqlite::{initialize_database, PoolConfig};
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;

#[derive(Debug, serde::Serialize)]
pub struct InitOutput {
    pub config_path: String,
    pub database_path: String,
    pub created: bool,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        if self.created {
            format!(
                "Initialized redraft.\n  Config:   {}\n  Database: {}",
                self.config_path, self.database_path
            )
        } else {
            format!(
                "Already initialized (use --force to overwrite config).\n  Config:   {}\n  Database: {}",
                self.config_path, self.database_path
            )
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(force: bool, json_mode: bool) -> Result<()> {
    let config_path = Path::new(".redraft/config.yaml");
    let exists = config_path.exists();

    if !exists || force {
        std::fs::create_dir_all(".redraft").context("Failed to create .redraft directory")?;
        let yaml = serde_yaml::to_string(&Config::default())
            .context("Failed to serialize default config")?;
        std::fs::write(config_path, yaml)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
    }

    let config = ConfigLoader::load()?;
    let pool_config = PoolConfig::with_max_connections(config.database.max_connections);
    let pool = initialize_database(&config.database.path, Some(pool_config))
        .await
        .with_context(|| format!("Failed to initialize database at {}", config.database.path))?;
    pool.close().await;

    output(
        &InitOutput {
            config_path: config_path.display().to_string(),
            database_path: config.database.path,
            created: !exists || force,
        },
        json_mode,
    );
    Ok(())
}
