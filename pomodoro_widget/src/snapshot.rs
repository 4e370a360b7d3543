use serde_json::Value as JsonValue;
use std::{
    fs, io,
    path::PathBuf,
    sync::{PoisonError, RwLock},
};
use thiserror::Error;
use tracing::{debug, warn};
use types::{
    DEFAULT_PHASE, DEFAULT_REMAINING_TIME, KEY_IS_RUNNING, KEY_PHASE,
    KEY_REMAINING_TIME, TimerSnapshot, WidgetData,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read widget data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Widget data in {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Widget data in {0} is not a JSON object")]
    NotAnObject(PathBuf),
}

/// Read-only access to the key/value blob the application shares with the
/// widget.
///
/// Implementations return whatever is currently stored; interpreting the
/// entries and substituting defaults is left to [`read_snapshot`].
pub trait SnapshotStore: Send + Sync {
    /// Fetch every entry currently in the store.
    ///
    /// # Errors
    /// If the backing storage exists but cannot be read or decoded.
    fn widget_data(&self) -> Result<WidgetData, StoreError>;
}

/// In-process store, for embedders that already hold the entries and for
/// tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<WidgetData>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entries(entries: WidgetData) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    pub fn set(&self, key: &str, value: impl Into<JsonValue>) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl SnapshotStore for MemoryStore {
    fn widget_data(&self) -> Result<WidgetData, StoreError> {
        Ok(self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}

/// Store backed by a JSON object file that the application rewrites.
///
/// The file is read again on every call so each refresh sees the latest
/// state. A missing file means the application has not published anything
/// yet and yields an empty map.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for JsonFileStore {
    fn widget_data(&self) -> Result<WidgetData, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No widget data at {}", self.path.display());
                return Ok(WidgetData::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let value: JsonValue =
            serde_json::from_str(&contents).map_err(|source| {
                StoreError::Parse {
                    path: self.path.clone(),
                    source,
                }
            })?;

        match value {
            JsonValue::Object(map) => Ok(map.into_iter().collect()),
            _ => Err(StoreError::NotAnObject(self.path.clone())),
        }
    }
}

/// Read the latest timer snapshot, falling back to defaults for anything
/// that is missing or unusable. Never fails.
pub fn read_snapshot<S: SnapshotStore + ?Sized>(store: &S) -> TimerSnapshot {
    match store.widget_data() {
        Ok(data) => snapshot_from_data(&data),
        Err(e) => {
            warn!("Failed to read widget data, using defaults: {}", e);
            TimerSnapshot::default()
        }
    }
}

#[must_use]
pub fn snapshot_from_data(data: &WidgetData) -> TimerSnapshot {
    TimerSnapshot {
        phase: string_entry(data, KEY_PHASE)
            .unwrap_or_else(|| DEFAULT_PHASE.to_string()),
        remaining_time_text: string_entry(data, KEY_REMAINING_TIME)
            .unwrap_or_else(|| DEFAULT_REMAINING_TIME.to_string()),
        is_running: bool_entry(data, KEY_IS_RUNNING).unwrap_or(false),
    }
}

fn string_entry(data: &WidgetData, key: &str) -> Option<String> {
    match data.get(key)? {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Null => None,
        other => {
            warn!("Widget data {} is not a string: {}", key, other);
            None
        }
    }
}

fn bool_entry(data: &WidgetData, key: &str) -> Option<bool> {
    match data.get(key)? {
        JsonValue::Bool(b) => Some(*b),
        JsonValue::Null => None,
        other => {
            warn!("Widget data {} is not a boolean: {}", key, other);
            None
        }
    }
}
