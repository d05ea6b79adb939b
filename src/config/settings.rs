//! Settings sections of the config file

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettings {
    /// Free-text name; two players with the same name share a remote save
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory for the local save (defaults to ~/.hive/storage)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Remote save bin settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteSettings {
    #[serde(default)]
    pub enabled: bool,

    /// URL of the JSON bin holding every player's save
    #[serde(default)]
    pub bin_url: String,

    /// Sent as `X-Master-Key`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleSettings {
    #[serde(default = "default_source_url")]
    pub source_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_source_url() -> String {
    "https://www.nytimes.com/puzzles/spelling-bee".to_string()
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            bin_url: String::new(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for PuzzleSettings {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
