use crate::animation::DEFAULT_REFRESH_PULSE;
use crate::export::EXPORT_FILE_NAME;
use headline_model::HeadlineSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_NAME: &str = "headline.config.json";

/// Editor configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Settings a new session starts from
    #[serde(default)]
    pub defaults: HeadlineSettings,

    /// File name hosts save exports under
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,

    /// How long a preview refresh keeps replaying the entrance
    #[serde(default = "default_refresh_pulse_ms")]
    pub refresh_pulse_ms: u64,
}

fn default_export_file_name() -> String {
    EXPORT_FILE_NAME.to_string()
}

fn default_refresh_pulse_ms() -> u64 {
    DEFAULT_REFRESH_PULSE.as_millis() as u64
}

impl EditorConfig {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        Self::from_path(PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME))
    }

    pub fn from_path(config_path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_path = config_path.as_ref();

        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: EditorConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(EditorConfig::default())
        }
    }

    pub fn refresh_pulse(&self) -> Duration {
        Duration::from_millis(self.refresh_pulse_ms)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            defaults: HeadlineSettings::default(),
            export_file_name: default_export_file_name(),
            refresh_pulse_ms: default_refresh_pulse_ms(),
        }
    }
}
