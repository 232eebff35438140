//! Delimited file loading.
//!
//! Every file matching the pattern is parsed independently and the results
//! are concatenated. Columns are unioned across files; a file that lacks a
//! column simply yields `None` for it.

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::{StorageError, DEFAULT_DELIMITER, DEFAULT_PATTERN};
use crate::models::{RawMatchRecord, RecordSet, CIV_COLUMN, LEADERBOARD_COLUMN, WON_COLUMN};

/// Loads match records from every matching file in a directory.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    dir: PathBuf,
    pattern: String,
    delimiter: u8,
}

impl CsvLoader {
    /// Create a loader for `dir` with the default pattern and delimiter.
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
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

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths of all matching files, sorted.
    pub fn discover(&self) -> Result<Vec<PathBuf>, StorageError> {
        if !self.dir.is_dir() {
            return Err(StorageError::PathNotFound(self.dir.clone()));
        }

        let dir = self
            .dir
            .to_str()
            .ok_or_else(|| StorageError::InvalidPath(self.dir.display().to_string()))?;
        let full_pattern = format!("{}/{}", glob::Pattern::escape(dir), self.pattern);

        let mut paths = Vec::new();
        for entry in glob::glob(&full_pattern)? {
            let path = entry?;
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        Ok(paths)
    }

    /// Read a single file. Rows shorter than the header read the missing
    /// trailing cells as `None`; rows longer than the header are an error.
    pub fn load_file(&self, path: &Path) -> Result<RecordSet, StorageError> {
        let file = File::open(path)?;
        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.delimiter)
            .trim(::csv::Trim::Headers)
            .from_reader(file);

        let csv_err = |source| StorageError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let headers = reader.headers().map_err(csv_err)?.clone();
        if headers.is_empty() {
            return Err(StorageError::EmptyFile(path.to_path_buf()));
        }

        let position = |name: &str| headers.iter().position(|h| h == name);
        let civ_idx = position(CIV_COLUMN);
        let leaderboard_idx = position(LEADERBOARD_COLUMN);
        let won_idx = position(WON_COLUMN);

        let mut set = RecordSet::new();
        set.columns = headers
            .iter()
            .filter(|h| !h.is_empty())
            .map(str::to_string)
            .collect();

        for result in reader.records() {
            let record = result.map_err(csv_err)?;
            if record.len() > headers.len() {
                return Err(StorageError::TooManyFields {
                    path: path.to_path_buf(),
                    line: record.position().map_or(0, |p| p.line()),
                    found: record.len(),
                    expected: headers.len(),
                });
            }

            let cell = |idx: Option<usize>| {
                idx.and_then(|i| record.get(i))
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
            };
            set.records.push(RawMatchRecord {
                civ: cell(civ_idx),
                leaderboard_id: cell(leaderboard_idx),
                won: cell(won_idx),
            });
        }

        debug!("Read {} rows from {:?}", set.len(), path);
        Ok(set)
    }

    /// Read every matching file and concatenate the rows.
    pub fn load(&self) -> Result<RecordSet, StorageError> {
        let paths = self.discover()?;
        if paths.is_empty() {
            warn!(
                "No files matching {:?} in {:?}",
                self.pattern, self.dir
            );
            return Ok(RecordSet::new());
        }

        let mut all = RecordSet::new();
        for path in &paths {
            all.extend(self.load_file(path)?);
        }

        info!(
            "Loaded {} match records from {} files in {:?}",
            all.len(),
            paths.len(),
            self.dir
        );
        Ok(all)
    }
}

/// Load every `*.csv` file in `dir` with default settings.
pub fn load_match_records(dir: &Path) -> Result<RecordSet, StorageError> {
    CsvLoader::new(dir.to_path_buf()).load()
}
