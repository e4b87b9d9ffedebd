use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "gpt-5-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_PORT: u16 = 8000;

pub const ENV_METADATA_DIR: &str = "TOOL_METADATA_DIR";
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_MODEL: &str = "OPENAI_MODEL";
pub const ENV_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_DEBUG: &str = "TOOLCHAT_DEBUG";

/// On-disk config; every field optional so local and global files can layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
}

/// Effective runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub metadata_dir: Option<PathBuf>,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    /// Adds error details to 5xx responses.
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            metadata_dir: None,
            openai_api_key: None,
            openai_model: DEFAULT_MODEL.to_string(),
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            debug: false,
        }
    }
}

impl AppConfig {
    /// Resolve with priority: ENV > local > global > default
    pub fn load() -> Self {
        Self::resolve(
            |key| std::env::var(key).ok(),
            load_local_config().ok(),
            load_global_config().ok(),
        )
    }

    pub fn resolve(
        env: impl Fn(&str) -> Option<String>,
        local: Option<FileConfig>,
        global: Option<FileConfig>,
    ) -> Self {
        let env = |key: &str| env(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let files = [local.unwrap_or_default(), global.unwrap_or_default()];
        let from_files = |pick: fn(&FileConfig) -> Option<String>| {
            files
                .iter()
                .filter_map(pick)
                .map(|v| v.trim().to_string())
                .find(|v| !v.is_empty())
        };

        let defaults = AppConfig::default();
        Self {
            metadata_dir: env(ENV_METADATA_DIR)
                .or_else(|| from_files(|f: &FileConfig| f.metadata_dir.clone()))
                .map(PathBuf::from),
            openai_api_key: env(ENV_API_KEY)
                .or_else(|| from_files(|f: &FileConfig| f.openai_api_key.clone())),
            openai_model: env(ENV_MODEL)
                .or_else(|| from_files(|f: &FileConfig| f.openai_model.clone()))
                .unwrap_or(defaults.openai_model),
            openai_base_url: env(ENV_BASE_URL)
                .or_else(|| from_files(|f: &FileConfig| f.openai_base_url.clone()))
                .unwrap_or(defaults.openai_base_url),
            debug: env(ENV_DEBUG)
                .map(|v| parse_flag(&v))
                .or_else(|| files.iter().find_map(|f| f.debug))
                .unwrap_or(defaults.debug),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Load local config from .toolchat/config.json
pub fn load_local_config() -> Result<FileConfig> {
    let config_path = PathBuf::from(".toolchat").join("config.json");
    let contents =
        std::fs::read_to_string(&config_path).context("Failed to read local config")?;
    let config: FileConfig =
        serde_json::from_str(&contents).context("Failed to parse local config")?;
    Ok(config)
}

/// Load global config from ~/.config/toolchat/config.json
pub fn load_global_config() -> Result<FileConfig> {
    let config_path = dirs::config_dir()
        .context("Failed to get config directory")?
        .join("toolchat")
        .join("config.json");
    let contents =
        std::fs::read_to_string(&config_path).context("Failed to read global config")?;
    let config: FileConfig =
        serde_json::from_str(&contents).context("Failed to parse global config")?;
    Ok(config)
}
