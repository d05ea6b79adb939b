//! Configuration loading and management

mod io;
mod settings;

pub use settings::{PlayerSettings, PuzzleSettings, RemoteSettings, StorageSettings};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::persistence::{FileLocalStore, JsonBinStore, PersistenceGateway, RemoteStore};
use crate::puzzle::HttpPuzzleSource;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Who is playing (keys the remote save)
    #[serde(default)]
    pub player: PlayerSettings,

    /// Where the local save lives
    #[serde(default)]
    pub storage: StorageSettings,

    /// Remote save bin
    #[serde(default)]
    pub remote: RemoteSettings,

    /// Where today's puzzle comes from
    #[serde(default)]
    pub puzzle: PuzzleSettings,
}

impl Config {
    /// Directory holding the local save
    pub fn storage_dir(&self) -> PathBuf {
        self.storage
            .dir
            .clone()
            .unwrap_or_else(FileLocalStore::default_dir)
    }

    /// Remote store, if remote saving is enabled and a bin is configured
    pub fn remote_store(&self) -> Option<Arc<dyn RemoteStore>> {
        if !self.remote.enabled {
            return None;
        }
        if self.remote.bin_url.trim().is_empty() {
            tracing::warn!("Remote saving enabled but no bin_url configured");
            return None;
        }
        Some(Arc::new(JsonBinStore::new(
            self.remote.bin_url.clone(),
            self.remote.api_key.clone(),
            Duration::from_secs(self.remote.timeout_secs),
        )))
    }

    /// Gateway over the file-backed local store and the configured remote
    pub fn gateway(&self) -> PersistenceGateway {
        PersistenceGateway::new(
            Arc::new(FileLocalStore::new(self.storage_dir())),
            self.remote_store(),
        )
    }

    pub fn puzzle_source(&self) -> HttpPuzzleSource {
        HttpPuzzleSource::new(
            self.puzzle.source_url.clone(),
            Duration::from_secs(self.puzzle.timeout_secs),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.remote.enabled);
        assert_eq!(config.remote.timeout_secs, 10);
        assert!(config.puzzle.source_url.contains("spelling-bee"));
    }

    #[test]
    fn test_partial_file() {
        let config: Config = toml::from_str(
            r#"
            [player]
            name = "ann"

            [remote]
            enabled = true
            bin_url = "https://api.jsonbin.io/v3/b/abc"
            "#,
        )
        .unwrap();

        assert_eq!(config.player.name, "ann");
        assert!(config.remote.enabled);
        assert_eq!(config.remote.api_key, None);
        assert_eq!(config.remote.timeout_secs, 10);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = Config::default();
        config.player.name = "bob".to_string();
        config.remote.api_key = Some("secret".to_string());

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_storage_dir() {
        let config = Config::default();
        assert!(config.storage_dir().ends_with(".hive/storage"));

        let config: Config = toml::from_str("[storage]\ndir = \"/tmp/hive-saves\"").unwrap();
        assert_eq!(config.storage_dir(), PathBuf::from("/tmp/hive-saves"));
    }

    #[test]
    fn test_remote_store_requires_enabled_and_url() {
        let mut config = Config::default();
        assert!(config.remote_store().is_none());

        config.remote.enabled = true;
        assert!(config.remote_store().is_none());

        config.remote.bin_url = "https://example.com/b/1".to_string();
        assert!(config.remote_store().is_some());
        assert!(config.gateway().has_remote());
    }
}
