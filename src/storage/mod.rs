//! Match history input files.
//!
//! Handles discovering and reading the delimited files in the data
//! directory. Reads only; nothing here writes to disk.

mod csv;

pub use self::csv::*;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading input files.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed input file {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: ::csv::Error,
    },

    #[error("Row at line {line} of {path:?} has {found} fields, header has {expected}")]
    TooManyFields {
        path: PathBuf,
        line: u64,
        found: usize,
        expected: usize,
    },

    #[error("Input file has no header: {0:?}")]
    EmptyFile(PathBuf),

    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to read directory entry: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Default glob for input files inside the data directory.
pub const DEFAULT_PATTERN: &str = "*.csv";

/// Default field delimiter.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Configuration for input paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub pattern: String,
    pub delimiter: u8,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            pattern: DEFAULT_PATTERN.to_string(),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// A loader for the files this configuration points at.
    pub fn loader(&self) -> CsvLoader {
        CsvLoader::new(self.data_dir.clone())
            .with_pattern(self.pattern.clone())
            .with_delimiter(self.delimiter)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}
