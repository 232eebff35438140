//! Derived statistics models.

use serde::{Deserialize, Serialize};

/// Win rate summary for one civilization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CivWinrate {
    /// Resolved civilization name
    pub name: String,

    /// Win rate as a percentage (0.0 to 100.0), two decimals
    pub winrate: f64,

    /// Matches played on the ranked ladder
    pub games: u32,
}

impl CivWinrate {
    pub fn new(name: impl Into<String>, winrate: f64, games: u32) -> Self {
        Self {
            name: name.into(),
            winrate,
            games,
        }
    }
}
