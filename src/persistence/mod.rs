//! Saving and loading games
//!
//! The persistence module provides:
//! - PersistedRecord: the serializable snapshot of a game
//! - LocalStore: one saved game per device
//! - RemoteStore: one JSON document mapping player names to saved games
//! - PersistenceGateway: the read/write operations the session uses

mod local;
mod record;
mod remote;

pub use local::{FileLocalStore, LocalStore, MemoryLocalStore, LOCAL_STATE_KEY};
pub use record::PersistedRecord;
pub use remote::{JsonBinStore, MemoryRemoteStore, RemoteStore};

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::StoreError;

/// Saved games on the remote side, keyed by free-text player name
pub type RemoteMap = BTreeMap<String, PersistedRecord>;

/// Outcome of reading the remote document
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteFetch {
    /// Remote saving is turned off
    Disabled,
    /// The service answered (the map may be empty)
    Loaded(RemoteMap),
    /// Network or service failure
    Unavailable(String),
}

impl RemoteFetch {
    /// Collapse to a map, treating failures as "no data"
    pub fn into_map(self) -> RemoteMap {
        match self {
            RemoteFetch::Loaded(map) => map,
            RemoteFetch::Disabled | RemoteFetch::Unavailable(_) => RemoteMap::new(),
        }
    }

    /// Look up one player's record, treating failures as "no data"
    pub fn record_for(&self, player: &str) -> Option<&PersistedRecord> {
        match self {
            RemoteFetch::Loaded(map) => map.get(player),
            _ => None,
        }
    }
}

/// Result of writing a player's record to the remote document
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteSave {
    Saved,
    /// Remote saving is turned off
    Disabled,
    /// The service answered but reported failure
    Refused,
    /// Not written because the existing document couldn't be read
    Unavailable(String),
}

/// Reads and writes saved games through a local and an optional remote store
#[derive(Clone)]
pub struct PersistenceGateway {
    local: Arc<dyn LocalStore>,
    remote: Option<Arc<dyn RemoteStore>>,
}

impl PersistenceGateway {
    pub fn new(local: Arc<dyn LocalStore>, remote: Option<Arc<dyn RemoteStore>>) -> Self {
        Self { local, remote }
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Overwrite this device's saved game
    pub fn save_local(&self, record: &PersistedRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string(record)?;
        self.local.set(LOCAL_STATE_KEY, &json)?;
        tracing::debug!("Saved game locally (score {})", record.score);
        Ok(())
    }

    /// This device's saved game, or `None` if nothing was ever saved
    pub fn load_local(&self) -> Result<Option<PersistedRecord>, StoreError> {
        match self.local.get(LOCAL_STATE_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Read every player's remote record. Never fails: errors become
    /// [`RemoteFetch::Unavailable`].
    pub async fn fetch_remote(&self) -> RemoteFetch {
        let Some(remote) = &self.remote else {
            return RemoteFetch::Disabled;
        };

        match remote.get().await {
            Ok(document) => RemoteFetch::Loaded(parse_remote_map(document)),
            Err(e) => {
                tracing::warn!("Remote saved games unavailable: {}", e);
                RemoteFetch::Unavailable(e.to_string())
            }
        }
    }

    /// Replace the entire remote document with `map`.
    ///
    /// Players missing from `map` are deleted remotely; merge first.
    pub async fn push_remote(&self, map: &RemoteMap) -> Result<bool, StoreError> {
        let Some(remote) = &self.remote else {
            return Ok(false);
        };
        let document = serde_json::to_value(map)?;
        remote.put(&document).await
    }

    /// Read the remote document, set `player`'s record, and write it back.
    ///
    /// Every other entry is written back exactly as it was read, including
    /// entries that aren't readable saved games. Skips the write when the
    /// read fails so other players' records aren't wiped. A concurrent writer
    /// between the read and the write still loses.
    pub async fn save_remote(
        &self,
        player: &str,
        record: &PersistedRecord,
    ) -> Result<RemoteSave, StoreError> {
        let Some(remote) = &self.remote else {
            return Ok(RemoteSave::Disabled);
        };

        let mut entries = match remote.get().await {
            Ok(document) => document_entries(document),
            Err(e) => {
                tracing::warn!("Remote saved games unavailable, not saving remotely: {}", e);
                return Ok(RemoteSave::Unavailable(e.to_string()));
            }
        };

        entries.insert(player.to_string(), serde_json::to_value(record)?);

        if remote.put(&Value::Object(entries)).await? {
            tracing::info!("Saved game remotely for {}", player);
            Ok(RemoteSave::Saved)
        } else {
            tracing::warn!("Remote store refused save for {}", player);
            Ok(RemoteSave::Refused)
        }
    }
}

/// Top-level entries of the remote document. An empty bin reads as `null`.
fn document_entries(document: Value) -> Map<String, Value> {
    match document {
        Value::Object(entries) => entries,
        Value::Null => Map::new(),
        other => {
            tracing::warn!("Remote document is not an object: {}", other);
            Map::new()
        }
    }
}

/// Parse the remote document, skipping entries that aren't saved games
fn parse_remote_map(document: Value) -> RemoteMap {
    document_entries(document)
        .into_iter()
        .filter_map(|(player, value)| match serde_json::from_value(value) {
            Ok(record) => Some((player, record)),
            Err(e) => {
                tracing::warn!("Ignoring unreadable remote save for {}: {}", player, e);
                None
            }
        })
        .collect()
}
