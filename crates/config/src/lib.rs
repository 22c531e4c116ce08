use color_eyre::eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_video_extensions")]
    pub video_extensions: Vec<String>,
    #[serde(default = "default_mediainfo_command")]
    pub mediainfo_command: String,
    #[serde(default = "default_mediainfo_timeout_secs")]
    pub mediainfo_timeout_secs: u64,
}

// Default value functions for serde
fn default_port() -> u16 {
    7000
}
fn default_video_extensions() -> Vec<String> {
    vec!["mp4".to_string(), "avi".to_string(), "mkv".to_string()]
}
fn default_mediainfo_command() -> String {
    "mediainfo".to_string()
}
fn default_mediainfo_timeout_secs() -> u64 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: default_port(),
            video_extensions: default_video_extensions(),
            mediainfo_command: default_mediainfo_command(),
            mediainfo_timeout_secs: default_mediainfo_timeout_secs(),
        }
    }
}

impl Settings {
    /// Loads settings from the user's config directory, falling back to
    /// defaults when no config file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or an
    /// existing config file cannot be read or parsed.
    pub async fn load() -> Result<Self> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| color_eyre::eyre::eyre!("Could not find config directory"))?;
        let config_path = config_dir.join("mediashelf").join("config.toml");

        if config_path.exists() {
            let content = tokio::fs::read_to_string(&config_path).await?;
            let settings = Self::from_toml(&content)?;
            info!("Loaded settings from {:?}", config_path);
            Ok(settings)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses settings from TOML text, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this structure.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mediashelf").join("config.toml"))
    }
}
