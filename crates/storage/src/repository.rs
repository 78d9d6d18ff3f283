use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A single persisted UI preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceRecord {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

impl PreferenceRecord {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>, updated_at: DateTime<Utc>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            updated_at,
        }
    }
}

/// Durable key/value storage for client-side preferences.
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Fetch a preference by key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read. A missing key is `Ok(None)`.
    async fn get_preference(&self, key: &str) -> Result<Option<PreferenceRecord>, StorageError>;

    /// Insert or overwrite a preference.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set_preference(&self, record: &PreferenceRecord) -> Result<(), StorageError>;

    /// Remove a preference. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn remove_preference(&self, key: &str) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    preferences: Arc<Mutex<HashMap<String, PreferenceRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            preferences: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl PreferenceRepository for InMemoryRepository {
    async fn get_preference(&self, key: &str) -> Result<Option<PreferenceRecord>, StorageError> {
        let guard = self
            .preferences
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set_preference(&self, record: &PreferenceRecord) -> Result<(), StorageError> {
        let mut guard = self
            .preferences
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(record.key.clone(), record.clone());
        Ok(())
    }

    async fn remove_preference(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .preferences
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Repository that rejects every call, standing in for storage that is
/// disabled or could not be opened.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableRepository;

#[async_trait]
impl PreferenceRepository for UnavailableRepository {
    async fn get_preference(&self, _key: &str) -> Result<Option<PreferenceRecord>, StorageError> {
        Err(StorageError::Unavailable("preference storage disabled".into()))
    }

    async fn set_preference(&self, _record: &PreferenceRecord) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("preference storage disabled".into()))
    }

    async fn remove_preference(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("preference storage disabled".into()))
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub preferences: Arc<dyn PreferenceRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            preferences: Arc::new(InMemoryRepository::new()),
        }
    }

    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            preferences: Arc::new(UnavailableRepository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::time::fixed_now;

    #[tokio::test]
    async fn overwrites_and_removes_preferences() {
        let repo = InMemoryRepository::new();
        repo.set_preference(&PreferenceRecord::new("k", "a", fixed_now()))
            .await
            .unwrap();
        repo.set_preference(&PreferenceRecord::new("k", "b", fixed_now()))
            .await
            .unwrap();

        let fetched = repo.get_preference("k").await.unwrap().expect("stored");
        assert_eq!(fetched.value, "b");

        repo.remove_preference("k").await.unwrap();
        assert!(repo.get_preference("k").await.unwrap().is_none());
        // removing twice is fine
        repo.remove_preference("k").await.unwrap();
    }

    #[tokio::test]
    async fn unavailable_repository_errors_on_every_call() {
        let repo = UnavailableRepository;
        assert!(matches!(
            repo.get_preference("k").await,
            Err(StorageError::Unavailable(_))
        ));
        assert!(
            repo.set_preference(&PreferenceRecord::new("k", "v", fixed_now()))
                .await
                .is_err()
        );
        assert!(repo.remove_preference("k").await.is_err());
    }
}
