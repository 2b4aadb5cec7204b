//! Per-symbol win counts and their persisted encoding.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{GameError, GameErrorKind, PlayerCount, Symbol};

/// Win count per player symbol.
///
/// Persisted as a JSON object mapping symbol text to a count, e.g.
/// `{"A":2,"B":0}`. Keys are kept as text because a stored table may hold
/// symbols from an earlier, different player count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreTable(BTreeMap<String, u32>);

impl ScoreTable {
    /// A zeroed table for every symbol in play.
    #[instrument]
    pub fn seeded(count: PlayerCount) -> Self {
        Self(count.symbols().map(|s| (s.to_string(), 0)).collect())
    }

    /// Wins recorded for `symbol`; zero when absent.
    pub fn get(&self, symbol: Symbol) -> u32 {
        self.0.get(&symbol.to_string()).copied().unwrap_or(0)
    }

    /// Adds one win for `symbol`, returning the new count.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, symbol: Symbol) -> u32 {
        let entry = self.0.entry(symbol.to_string()).or_insert(0);
        *entry = entry.saturating_add(1);
        debug!(%symbol, wins = *entry, "Win recorded");
        *entry
    }

    /// Iterates `(symbol, wins)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encodes the table as JSON text.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "{}".to_string())
    }

    /// Decodes a table from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::CorruptScores`] if the text is not an object
    /// of non-negative integer counts.
    #[instrument(skip(text), fields(len = text.len()))]
    pub fn from_json(text: &str) -> Result<Self, GameError> {
        serde_json::from_str(text)
            .map_err(|e| GameError::new(GameErrorKind::CorruptScores(e.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(n: u8) -> PlayerCount {
        PlayerCount::new(n).unwrap()
    }

    #[test]
    fn test_seeded_table_is_zeroed() {
        let table = ScoreTable::seeded(players(3));
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![("A", 0), ("B", 0), ("C", 0)]);
    }

    #[test]
    fn test_record_win_increments_by_one() {
        let mut table = ScoreTable::seeded(players(2));
        assert_eq!(table.record_win(Symbol::from_index(1)), 1);
        assert_eq!(table.record_win(Symbol::from_index(1)), 2);
        assert_eq!(table.get(Symbol::from_index(0)), 0);
        assert_eq!(table.get(Symbol::from_index(1)), 2);
    }

    #[test]
    fn test_record_win_for_missing_symbol() {
        let mut table = ScoreTable::seeded(players(2));
        table.record_win(Symbol::from_index(3));
        assert_eq!(table.get(Symbol::from_index(3)), 1);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_json_shape() {
        let mut table = ScoreTable::seeded(players(2));
        table.record_win(Symbol::from_index(0));
        assert_eq!(table.to_json(), r#"{"A":1,"B":0}"#);

        let decoded = ScoreTable::from_json(r#"{"A":4,"C":1}"#).unwrap();
        assert_eq!(decoded.get(Symbol::from_index(0)), 4);
        assert_eq!(decoded.get(Symbol::from_index(2)), 1);
        assert_eq!(decoded.get(Symbol::from_index(1)), 0);
    }

    #[test]
    fn test_corrupt_json_rejected() {
        for text in ["not json", r#"{"A":-1}"#, r#"{"A":1.5}"#, "[1,2]"] {
            let err = ScoreTable::from_json(text).unwrap_err();
            assert!(matches!(err.kind(), GameErrorKind::CorruptScores(_)), "{text}");
        }
    }
}
