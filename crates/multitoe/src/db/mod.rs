//! SQLite persistence for the score table.

mod error;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only

pub use error::DbError;
pub use models::{KvEntry, NewKvEntry};
pub use repository::SqliteStore;
