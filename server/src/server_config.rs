use std::net::SocketAddr;
use std::time::Duration;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::BotType;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "tictactoe_server_config.yaml";

pub fn get_config_manager(
    path: &str,
) -> ConfigManager<FileContentConfigProvider, ServerConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Directory served at `/` (the browser client). Nothing is served when unset.
    pub static_files_path: Option<String>,
    pub bot_type: BotType,
    pub cleanup_interval_secs: u64,
    pub inactivity_timeout_secs: u64,
}

impl ServerConfig {
    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_secs)
    }

    pub fn inactivity_timeout(&self) -> Duration {
        Duration::from_secs(self.inactivity_timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            static_files_path: None,
            bot_type: BotType::Heuristic,
            cleanup_interval_secs: 300,
            inactivity_timeout_secs: 3600,
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        self.bind_address
            .parse::<SocketAddr>()
            .map_err(|e| format!("Invalid bind address '{}': {}", self.bind_address, e))?;

        if self.cleanup_interval_secs == 0 {
            return Err("Cleanup interval must be at least 1 second".to_string());
        }
        if self.inactivity_timeout_secs < self.cleanup_interval_secs {
            return Err(format!(
                "Inactivity timeout ({}s) cannot be shorter than cleanup interval ({}s)",
                self.inactivity_timeout_secs, self.cleanup_interval_secs
            ));
        }
        Ok(())
    }
}
