//! The precomputed win rate summary served by the API.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use super::{calculate_winrates, CalculateError};
use crate::models::{CivLookup, CivWinrate};
use crate::storage::{StorageConfig, StorageError};

/// Errors while building the summary at startup.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Failed to load match records: {0}")]
    Storage(#[from] StorageError),

    #[error("Failed to calculate win rates: {0}")]
    Calculate(#[from] CalculateError),
}

/// Win rates computed once from the input files. Immutable after `build`;
/// clones share the same rows.
#[derive(Debug, Clone)]
pub struct WinrateSummary {
    rows: Arc<[CivWinrate]>,
}

impl WinrateSummary {
    /// Load every input file and aggregate it.
    pub fn build(storage: &StorageConfig, lookup: &CivLookup) -> Result<Self, SummaryError> {
        let records = storage.loader().load()?;
        let rows = calculate_winrates(&records, lookup)?;
        let summary = Self::from_rows(rows);

        info!(
            "Computed win rates for {} civilizations over {} games",
            summary.len(),
            summary.total_games()
        );
        Ok(summary)
    }

    pub fn from_rows(rows: Vec<CivWinrate>) -> Self {
        Self { rows: rows.into() }
    }

    pub fn rows(&self) -> &[CivWinrate] {
        &self.rows
    }

    pub fn total_games(&self) -> u32 {
        self.rows.iter().map(|r| r.games).sum()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_build_from_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("week1.csv"),
            "civ,leaderboard_id,won\n15,3,t\n15,3,f\n16,3,t\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("week2.csv"),
            "civ,leaderboard_id,won\n16,3,t\n99,3,f\n15,4,t\n",
        )
        .unwrap();

        let storage = StorageConfig::new(dir.path().to_path_buf());
        let summary = WinrateSummary::build(&storage, &CivLookup::builtin()).unwrap();

        assert_eq!(
            summary.rows(),
            &[
                CivWinrate::new("Mayans", 100.0, 2),
                CivWinrate::new("Aztecs", 50.0, 2),
                CivWinrate::new("Unknown Civ", 0.0, 1),
            ]
        );
        assert_eq!(summary.total_games(), 5);
    }

    #[test]
    fn test_build_empty_directory() {
        let dir = TempDir::new().unwrap();
        let storage = StorageConfig::new(dir.path().to_path_buf());

        let summary = WinrateSummary::build(&storage, &CivLookup::builtin()).unwrap();
        assert!(summary.is_empty());
        assert_eq!(summary.total_games(), 0);
    }

    #[test]
    fn test_build_fails_on_missing_column() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.csv"), "civ,leaderboard_id\n15,3\n").unwrap();
        let storage = StorageConfig::new(dir.path().to_path_buf());

        let err = WinrateSummary::build(&storage, &CivLookup::builtin()).unwrap_err();
        assert!(matches!(err, SummaryError::Calculate(_)));
    }

    #[test]
    fn test_build_fails_on_malformed_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.csv"), "civ,leaderboard_id,won\n15,3,t,t\n").unwrap();
        let storage = StorageConfig::new(dir.path().to_path_buf());

        let err = WinrateSummary::build(&storage, &CivLookup::builtin()).unwrap_err();
        assert!(matches!(err, SummaryError::Storage(_)));
    }

    #[test]
    fn test_build_short_row_counts_as_loss() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("a.csv"),
            "civ,leaderboard_id,won\n15,3,t\n15,3\n",
        )
        .unwrap();
        let storage = StorageConfig::new(dir.path().to_path_buf());

        let summary = WinrateSummary::build(&storage, &CivLookup::builtin()).unwrap();
        assert_eq!(summary.rows(), &[CivWinrate::new("Aztecs", 50.0, 2)]);
    }

    #[test]
    fn test_clones_share_rows() {
        let summary = WinrateSummary::from_rows(vec![CivWinrate::new("Aztecs", 50.0, 2)]);
        let clone = summary.clone();
        assert!(std::ptr::eq(summary.rows(), clone.rows()));
    }
}
