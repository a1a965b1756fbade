use std::collections::HashMap;

use tracing::{info, warn};

use crate::workout::Workout;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available: {0}")]
    Unavailable(String),
    #[error("storage backend failed: {0}")]
    Backend(String),
    #[error("failed to serialize workouts: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// String key-value store the workouts are kept in, e.g. the browser's local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Keeps the whole workout list under a single key.
pub struct WorkoutStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> WorkoutStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Overwrites whatever was stored before.
    pub fn save(&mut self, workouts: &[Workout]) -> Result<(), StorageError> {
        let payload = serde_json::to_string(workouts)?;
        self.store.set(&self.key, &payload)
    }

    /// Missing or unreadable data counts as no data. A record that fails to
    /// parse is skipped, the rest of the list is kept.
    pub fn load(&self) -> Vec<Workout> {
        let payload = match self.store.get(&self.key) {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("failed to read stored workouts: {err}");
                return Vec::new();
            }
        };

        let records = match serde_json::from_str::<Vec<serde_json::Value>>(&payload) {
            Ok(records) => records,
            Err(err) => {
                warn!("discarding unreadable stored workouts: {err}");
                return Vec::new();
            }
        };

        let total = records.len();
        let workouts: Vec<Workout> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(workout) => Some(workout),
                Err(err) => {
                    warn!("skipping stored workout #{index}: {err}");
                    None
                }
            })
            .collect();

        info!("restored {} of {total} workouts", workouts.len());
        workouts
    }

    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.store.remove(&self.key)
    }

    pub fn inner(&self) -> &S {
        &self.store
    }
}
