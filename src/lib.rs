//! # Civ Winrates
//!
//! Per-civilization win rates computed from match history files and
//! served over a small HTTP API.
//!
//! ## Architecture
//!
//! - **models**: Raw and cleaned match records, civ lookup, summary rows
//! - **storage**: Discovery and parsing of delimited input files
//! - **calculate**: Cleaning, filtering, grouping and the cached summary
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;

pub use models::*;
