use std::env;
use std::path::Path;

use tokio::fs;
use tracing::{info, warn};

use crate::types::TransferError;

use super::{paths, Config};

/// Environment variable that overrides `server_url` when set and non-blank.
pub const SERVER_URL_ENV: &str = "FILEDROP_SERVER_URL";

impl Config {
    /// Load configuration from config.json in the application root or the
    /// working directory. Falls back to defaults if the file doesn't exist or
    /// can't be parsed.
    pub async fn load() -> Self {
        match Self::try_load().await {
            Ok(config) => {
                info!(
                    server = %config.server_url,
                    probe_interval_ms = config.probe_interval_ms,
                    "Loaded configuration"
                );
                config
            }
            Err(err) => {
                warn!(error = %err, "Failed to load config.json, using defaults");
                let mut config = Self::default();
                config.apply_env_overrides();
                config
            }
        }
    }

    pub async fn try_load() -> Result<Self, TransferError> {
        let config_path = paths::get_config_path();

        if !config_path.exists() {
            warn!(path = %config_path.display(), "Config file not found, using defaults");
            let mut config = Self::default();
            config.apply_env_overrides();
            return Ok(config);
        }

        Self::load_from(&config_path).await
    }

    /// Load an explicit config file. Unlike [`Config::load`], a missing file is an error.
    pub async fn load_from(path: impl AsRef<Path>) -> Result<Self, TransferError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).await.map_err(|err| {
            TransferError::Config(format!("Failed to read {}: {err}", path.display()))
        })?;

        let mut config: Config = serde_json::from_str(&contents).map_err(|err| {
            TransferError::Config(format!("Failed to parse {}: {err}", path.display()))
        })?;

        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        self.apply_server_override(env::var(SERVER_URL_ENV).ok().as_deref());
    }

    pub(crate) fn apply_server_override(&mut self, value: Option<&str>) {
        if let Some(custom) = value {
            let trimmed = custom.trim();
            if !trimmed.is_empty() {
                self.server_url = trimmed.to_string();
            }
        }
    }
}
