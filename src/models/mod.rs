//! Core data models for match history and win rate summaries.

mod civ;
mod record;
mod stats;

pub use civ::*;
pub use record::*;
pub use stats::*;
