use async_trait::async_trait;
use quiz_core::model::QuestionSet;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Name of the single entry holding the persisted question set.
pub const QUESTION_STORE_KEY: &str = "quizQuestions";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for named string entries.
#[async_trait]
pub trait KeyValueRepository: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_entry(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value wholesale.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn put_entry(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the entry under `key`. Removing a missing entry is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn delete_entry(&self, key: &str) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl KeyValueRepository for InMemoryRepository {
    async fn get_entry(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn put_entry(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn delete_entry(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Persisted question set, kept as JSON under a single fixed key.
#[derive(Clone)]
pub struct QuestionStore {
    entries: Arc<dyn KeyValueRepository>,
    key: String,
}

impl QuestionStore {
    #[must_use]
    pub fn new(entries: Arc<dyn KeyValueRepository>) -> Self {
        Self::with_key(entries, QUESTION_STORE_KEY)
    }

    #[must_use]
    pub fn with_key(entries: Arc<dyn KeyValueRepository>, key: impl Into<String>) -> Self {
        Self {
            entries,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored question set. `None` when nothing has been imported.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the stored payload is corrupt.
    pub async fn load(&self) -> Result<Option<QuestionSet>, StorageError> {
        let Some(payload) = self.entries.get_entry(&self.key).await? else {
            return Ok(None);
        };
        QuestionSet::from_json(&payload)
            .map(Some)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    /// Overwrite the stored question set.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization or the write fails.
    pub async fn save(&self, questions: &QuestionSet) -> Result<(), StorageError> {
        let payload = questions
            .to_json()
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.entries.put_entry(&self.key, &payload).await
    }

    /// Delete the stored question set.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the delete fails.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.entries.delete_entry(&self.key).await
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub entries: Arc<dyn KeyValueRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let entries: Arc<dyn KeyValueRepository> = Arc::new(InMemoryRepository::new());
        Self { entries }
    }

    #[must_use]
    pub fn question_store(&self) -> QuestionStore {
        QuestionStore::new(Arc::clone(&self.entries))
    }
}
