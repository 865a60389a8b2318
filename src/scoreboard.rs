//! Score-board records exchanged with the external high-score store.
//!
//! The store itself (fetch top-N, submit name + score) lives outside this
//! crate; only the record shape and the ranking rule are defined here.

use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};

/// Entries the store returns by default.
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u64,
}

impl ScoreEntry {
    /// Build a submission; the name is trimmed and must not end up empty.
    pub fn new(name: &str, score: u64) -> SimResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SimError::EmptyScoreName);
        }
        Ok(Self {
            name: name.to_string(),
            score,
        })
    }
}

/// The `n` best entries, highest score first.  Ties keep their input order.
pub fn top_scores(entries: &[ScoreEntry], n: usize) -> Vec<ScoreEntry> {
    let mut ranked = entries.to_vec();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: u64) -> ScoreEntry {
        ScoreEntry::new(name, score).unwrap()
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(matches!(ScoreEntry::new("   ", 10), Err(SimError::EmptyScoreName)));
    }

    #[test]
    fn name_is_trimmed() {
        assert_eq!(entry("  ACE ", 5).name, "ACE");
    }

    #[test]
    fn top_scores_sorts_descending_and_truncates() {
        let entries: Vec<ScoreEntry> = (0..15).map(|i| entry(&format!("P{i}"), i * 10)).collect();
        let top = top_scores(&entries, DEFAULT_TOP_N);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].score, 140);
        assert!(top.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn ties_keep_submission_order() {
        let entries = vec![entry("FIRST", 50), entry("SECOND", 50), entry("LOW", 1)];
        let top = top_scores(&entries, 2);
        assert_eq!(top[0].name, "FIRST");
        assert_eq!(top[1].name, "SECOND");
    }

    #[test]
    fn entry_deserialises_from_toml() {
        let parsed: ScoreEntry = toml::from_str("name = \"ACE\"\nscore = 120\n").unwrap();
        assert_eq!(parsed, entry("ACE", 120));
    }
}
