//! Choice of where the score table lives.

use multitoe_core::{KeyValueStore, MemoryStore, StoreError};
use tracing::instrument;

use crate::{DbError, SqliteStore};

/// Score persistence selected at startup.
#[derive(Debug, Clone)]
pub enum ScoreBackend {
    /// Scores survive restarts in a SQLite file.
    Sqlite(SqliteStore),
    /// Scores vanish when the process exits.
    Memory(MemoryStore),
}

impl ScoreBackend {
    /// Opens the SQLite backend at `db_path`, or an in-memory one when
    /// `ephemeral` is set.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the database cannot be opened.
    #[instrument]
    pub fn open(db_path: &str, ephemeral: bool) -> Result<Self, DbError> {
        if ephemeral {
            Ok(Self::Memory(MemoryStore::new()))
        } else {
            Ok(Self::Sqlite(SqliteStore::open(db_path.to_string())?))
        }
    }
}

impl KeyValueStore for ScoreBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            Self::Sqlite(store) => store.get(key),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            Self::Sqlite(store) => store.set(key, value),
            Self::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match self {
            Self::Sqlite(store) => store.remove(key),
            Self::Memory(store) => store.remove(key),
        }
    }
}
