//! Best-time persistence.
//!
//! The only durable state is a single best completion time in seconds.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Reads and writes the best completion time.
pub trait BestTimeStore {
    /// The stored best time, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn load(&mut self) -> Result<Option<u32>, StoreError>;

    /// Record a new best time.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn save(&mut self, seconds: u32) -> Result<(), StoreError>;
}

/// In-memory store, for tests and hosts without persistence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    best: Option<u32>,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new(best: Option<u32>) -> Self {
        Self { best, writes: 0 }
    }

    #[must_use]
    pub fn best(&self) -> Option<u32> {
        self.best
    }

    /// Number of successful saves.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl BestTimeStore for MemoryStore {
    fn load(&mut self) -> Result<Option<u32>, StoreError> {
        Ok(self.best)
    }

    fn save(&mut self, seconds: u32) -> Result<(), StoreError> {
        self.best = Some(seconds);
        self.writes += 1;
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct BestTimeRecord {
    best_time_seconds: u32,
}

/// Stores the best time as a small JSON document.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestTimeStore for JsonFileStore {
    /// A missing file means no record yet.
    fn load(&mut self) -> Result<Option<u32>, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let record: BestTimeRecord = serde_json::from_str(&json)?;
        Ok(Some(record.best_time_seconds))
    }

    fn save(&mut self, seconds: u32) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&BestTimeRecord { best_time_seconds: seconds })?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), seconds, "best time saved");
        Ok(())
    }
}
