//! Append-only record of successful evaluations.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One successful evaluation, immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The evaluated expression text.
    pub expression: String,
    /// The finite numeric result.
    pub result: f64,
    /// When the evaluation happened.
    pub timestamp: DateTime<Local>,
}

/// Insertion-ordered ledger of history entries.
///
/// Entries are appended by a successful `equals` and never mutated or
/// removed; unbounded growth is accepted. Display numbering (1-indexed)
/// is the presentation adapter's concern.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry.
    pub fn record(&mut self, expression: String, result: f64, timestamp: DateTime<Local>) {
        self.entries.push(HistoryEntry {
            expression,
            result,
            timestamp,
        });
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut history = History::new();
        assert!(history.is_empty());

        history.record("1+1".to_string(), 2.0, Local::now());
        history.record("2*3".to_string(), 6.0, Local::now());
        history.record("6-4".to_string(), 2.0, Local::now());

        assert_eq!(history.len(), 3);
        let expressions: Vec<&str> = history.iter().map(|e| e.expression.as_str()).collect();
        assert_eq!(expressions, vec!["1+1", "2*3", "6-4"]);
    }

    #[test]
    fn test_entries_serialize() {
        let mut history = History::new();
        history.record("2+3*4".to_string(), 14.0, Local::now());

        let json = serde_json::to_string(history.entries()).unwrap();
        assert!(json.contains("\"expression\":\"2+3*4\""));
        assert!(json.contains("\"result\":14.0"));
    }
}
