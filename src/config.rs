//! Configuration management for RAX FTP Client
//!
//! Loads settings from an optional `client.toml` with environment overrides
//! (`RAX_FTP_CLIENT_*`). A missing file falls back to defaults so the client
//! runs without any installed configuration.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ClientConfig {
    /// Maximum length of one control-channel frame, commands and replies alike
    pub max_frame_len: usize,

    /// Chunk size for the data-channel receive loop
    pub buffer_size: usize,

    /// Directory retrieved files are written into
    pub download_dir: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            max_frame_len: 512,
            buffer_size: 8192,
            download_dir: ".".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from client.toml (optional) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("client").required(false))
            .add_source(Environment::with_prefix("RAX_FTP_CLIENT"))
            .build()?;

        let config: ClientConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the download directory as a PathBuf
    pub fn download_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.download_dir)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.max_frame_len < 16 {
            return Err(config::ConfigError::Message(
                "max_frame_len too small to hold a reply frame".into(),
            ));
        }

        if self.buffer_size == 0 {
            return Err(config::ConfigError::Message(
                "buffer_size must be greater than 0".into(),
            ));
        }

        if self.download_dir.is_empty() {
            return Err(config::ConfigError::Message(
                "download_dir cannot be empty".into(),
            ));
        }

        Ok(())
    }
}
