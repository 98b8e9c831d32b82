use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/chat.json";

fn default_base_url() -> String {
    "http://server-llm-dev:8000/v1".to_string()
}

fn default_api_key() -> String {
    // Placeholder credential; local and proxy servers usually ignore it.
    "EMPTY".to_string()
}

fn default_model() -> String {
    "ChatGLM3-6B".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_api_key")]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: default_api_key(),
            model: default_model(),
        }
    }
}

impl AppConfig {
    /// Environment beats the file; CLI flags beat both (applied in main).
    pub fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var("OPENAI_BASE_URL") {
            self.base_url = value;
        }
        if let Ok(value) = std::env::var("OPENAI_API_KEY") {
            self.api_key = value;
        }
        if let Ok(value) = std::env::var("CHAT_MODEL") {
            self.model = value;
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

pub fn save_config(path: &str, config: &AppConfig) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
}
