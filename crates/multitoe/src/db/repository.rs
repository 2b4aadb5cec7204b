//! SQLite-backed key-value store.

use chrono::Utc;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use multitoe_core::{KeyValueStore, StoreError};
use tracing::{debug, info, instrument};

use crate::db::{DbError, KvEntry, NewKvEntry, schema};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Key-value table in a SQLite database file.
///
/// Each operation opens its own connection, so the store is cheap to
/// clone and holds no open handles between moves.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: String,
}

impl SqliteStore {
    /// Opens (creating if needed) the database at `db_path` and applies
    /// pending migrations.
    ///
    /// The path must name a file; `":memory:"` would give every operation
    /// its own empty database.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the database cannot be opened or migrated.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn open(db_path: String) -> Result<Self, DbError> {
        info!(path = %db_path, "Opening SqliteStore");
        let store = Self { db_path };
        let mut conn = store.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(format!("Failed to run migrations: {}", e)))?
            .len();
        info!(applied, "Migrations up to date");
        Ok(store)
    }

    /// Returns the database path.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Gets the entry stored under `key`. Returns `None` if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn get_entry(&self, key: &str) -> Result<Option<KvEntry>, DbError> {
        let mut conn = self.connection()?;

        let entry = schema::kv_entries::table
            .filter(schema::kv_entries::key.eq(key))
            .select(KvEntry::as_select())
            .first(&mut conn)
            .optional()?;

        debug!(found = entry.is_some(), "Entry lookup finished");
        Ok(entry)
    }

    /// Stores `value` under `key`, replacing any existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self, value), fields(len = value.len()))]
    pub fn put_entry(&self, key: &str, value: &str) -> Result<(), DbError> {
        let mut conn = self.connection()?;

        let entry = NewKvEntry::new(key.to_string(), value.to_string(), Utc::now().naive_utc());
        diesel::replace_into(schema::kv_entries::table)
            .values(&entry)
            .execute(&mut conn)?;

        info!(key, "Entry stored");
        Ok(())
    }

    /// Deletes the entry under `key`, returning how many rows were removed.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn delete_entry(&self, key: &str) -> Result<usize, DbError> {
        let mut conn = self.connection()?;

        let removed = diesel::delete(
            schema::kv_entries::table.filter(schema::kv_entries::key.eq(key)),
        )
        .execute(&mut conn)?;

        info!(key, removed, "Entry deleted");
        Ok(removed)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.get_entry(key)?.map(|entry| entry.value().clone()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        Ok(self.put_entry(key, value)?)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.delete_entry(key)?;
        Ok(())
    }
}
