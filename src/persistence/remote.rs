//! Remote JSON bin holding every player's saved game

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreError;

/// A single JSON document behind a fixed URL. `put` replaces the whole document.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    async fn get(&self) -> Result<Value, StoreError>;

    /// Returns whether the service reported success
    async fn put(&self, value: &Value) -> Result<bool, StoreError>;
}

/// jsonbin.io-style bin over HTTP
pub struct JsonBinStore {
    bin_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl JsonBinStore {
    pub fn new(bin_url: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            bin_url: bin_url.into(),
            api_key,
            timeout,
        }
    }

    fn request(&self, method: &str) -> ureq::Request {
        let mut request = ureq::request(method, &self.bin_url)
            .timeout(self.timeout)
            .set("Content-Type", "application/json")
            .set("X-Bin-Meta", "false");
        if let Some(key) = &self.api_key {
            request = request.set("X-Master-Key", key);
        }
        request
    }
}

#[async_trait]
impl RemoteStore for JsonBinStore {
    async fn get(&self) -> Result<Value, StoreError> {
        let request = self.request("GET");

        // ureq is blocking
        tokio::task::spawn_blocking(move || -> Result<Value, StoreError> {
            let response = request
                .call()
                .map_err(|e| StoreError::Remote(e.to_string()))?;
            let body: Value = response
                .into_json()
                .map_err(|e| StoreError::Remote(e.to_string()))?;
            Ok(unwrap_record(body))
        })
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
    }

    async fn put(&self, value: &Value) -> Result<bool, StoreError> {
        let request = self.request("PUT");
        let value = value.clone();

        tokio::task::spawn_blocking(move || -> Result<bool, StoreError> {
            let response = request
                .send_json(value)
                .map_err(|e| StoreError::Remote(e.to_string()))?;
            let ok_status = (200..300).contains(&response.status());
            let body: Value = response.into_json().unwrap_or(Value::Null);
            Ok(body
                .get("success")
                .and_then(Value::as_bool)
                .unwrap_or(ok_status))
        })
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
    }
}

/// Some bins wrap the document as `{"record": ..., "metadata": ...}`
fn unwrap_record(body: Value) -> Value {
    match body {
        Value::Object(mut obj) if obj.contains_key("record") && obj.contains_key("metadata") => {
            obj.remove("record").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// In-process bin, for tests and offline play
#[derive(Debug, Default)]
pub struct MemoryRemoteStore {
    document: Mutex<Value>,
    offline: AtomicBool,
    puts: AtomicUsize,
}

impl MemoryRemoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: Value) -> Self {
        Self {
            document: Mutex::new(document),
            ..Self::default()
        }
    }

    /// Make every request fail until switched back
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of successful writes
    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn document(&self) -> Value {
        self.document
            .lock()
            .map(|d| d.clone())
            .unwrap_or(Value::Null)
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(StoreError::Remote("remote store offline".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RemoteStore for MemoryRemoteStore {
    async fn get(&self) -> Result<Value, StoreError> {
        self.check_online()?;
        Ok(self.document())
    }

    async fn put(&self, value: &Value) -> Result<bool, StoreError> {
        self.check_online()?;
        let mut document = self
            .document
            .lock()
            .map_err(|_| StoreError::Task("remote store lock poisoned".to_string()))?;
        *document = value.clone();
        self.puts.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }
}
