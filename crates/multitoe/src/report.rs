//! Plain-text score report for the `scores` command.

use multitoe_core::{KeyValueStore, ScoreTable, StoreError};
use tracing::{instrument, warn};

/// Printed when there is nothing to report.
pub const NO_SCORES: &str = "No scores recorded.";

/// Reads the score table under `key` and renders one line per player.
///
/// A corrupt table is logged and reported as empty, matching what a game
/// started on the same store would see.
///
/// # Errors
///
/// Returns [`StoreError`] if the store cannot be read.
#[instrument(skip(store))]
pub fn score_report<S: KeyValueStore>(store: &S, key: &str) -> Result<Vec<String>, StoreError> {
    let Some(text) = store.get(key)? else {
        return Ok(vec![NO_SCORES.to_string()]);
    };
    let table = match ScoreTable::from_json(&text) {
        Ok(table) => table,
        Err(e) => {
            warn!(key, error = %e, "Ignoring corrupt persisted scores");
            ScoreTable::default()
        }
    };
    if table.is_empty() {
        return Ok(vec![NO_SCORES.to_string()]);
    }
    Ok(table
        .iter()
        .map(|(symbol, wins)| format!("Player {}: {}", symbol, wins))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use multitoe_core::MemoryStore;

    #[test]
    fn test_report_lists_players() {
        let store = MemoryStore::with_entry("k", r#"{"A":2,"B":0}"#);
        let lines = score_report(&store, "k").unwrap();
        assert_eq!(lines, vec!["Player A: 2", "Player B: 0"]);
    }

    #[test]
    fn test_report_missing_table() {
        let lines = score_report(&MemoryStore::new(), "k").unwrap();
        assert_eq!(lines, vec![NO_SCORES]);
    }

    #[test]
    fn test_report_corrupt_table_is_empty() {
        let store = MemoryStore::with_entry("k", "not json");
        let lines = score_report(&store, "k").unwrap();
        assert_eq!(lines, vec![NO_SCORES]);
    }
}
