use std::collections::BTreeMap;
use std::future::Future;
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Well-known settings keys.
pub mod keys {
    pub const FORECASTS: &str = "forecasts";
    pub const LAST_WEATHER: &str = "last-weather";
    pub const CLIMATE: &str = "climate";
    pub const HUMIDITY: &str = "humidity";
    pub const SEASON: &str = "season";
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Corrupt settings file {}: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },
}

/// Persisted key-value settings. Reads are synchronous; writes may suspend.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;

    fn set(&self, key: &str, value: Value) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// Read `key` as `T`. A value of the wrong shape is logged and treated as absent.
pub fn get_as<T: DeserializeOwned>(store: &impl SettingsStore, key: &str) -> Option<T> {
    let value = store.get(key)?;
    match serde_json::from_value(value) {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(key, error = %e, "Ignoring unreadable setting");
            None
        }
    }
}

pub async fn set_as<T: Serialize>(
    store: &impl SettingsStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let value = serde_json::to_value(value)?;
    store.set(key, value).await
}

fn lock(values: &Mutex<BTreeMap<String, Value>>) -> MutexGuard<'_, BTreeMap<String, Value>> {
    values.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-process store with no durability.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        lock(&self.values).get(key).cloned()
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        lock(&self.values).insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by one JSON object on disk, rewritten on every `set`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, Value>>,
    write: tokio::sync::Mutex<()>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file starts empty.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match tokio::fs::read(&path).await {
            Ok(data) => serde_json::from_slice(&data).map_err(|e| StoreError::Corrupt {
                path: path.clone(),
                reason: e.to_string(),
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No settings file yet, starting empty");
                BTreeMap::new()
            }
            Err(e) => return Err(StoreError::Io(e)),
        };
        Ok(JsonFileStore {
            path,
            values: Mutex::new(values),
            write: tokio::sync::Mutex::new(()),
        })
    }

    /// Write the whole key map to a temp file, then rename it over the target,
    /// so a partial write never corrupts existing settings.
    async fn flush(&self) -> Result<(), StoreError> {
        let _guard = self.write.lock().await;
        let encoded = serde_json::to_vec_pretty(&*lock(&self.values))?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir).await?;
        }
        let filename = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("settings.json");
        let tmp = self.path.with_file_name(format!(".{}.tmp", filename));

        if let Err(e) = tokio::fs::write(&tmp, &encoded).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(StoreError::Io(e));
        }
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(StoreError::Io(e));
        }
        Ok(())
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        lock(&self.values).get(key).cloned()
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        lock(&self.values).insert(key.to_string(), value);
        let result = self.flush().await;
        if let Err(e) = &result {
            warn!(path = %self.path.display(), key, error = %e, "Settings write failed");
        }
        result
    }
}
