//! Best-score persistence.
//!
//! The store is a capability-style interface so the persistence mechanism can
//! be swapped without touching the core: the binary uses a JSON file next to
//! the working directory, tests use the in-memory variant. A missing or
//! unreadable record reads as 0.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Read/write capability for a single persisted best score.
pub trait ScoreStore {
    /// Current stored best; 0 when nothing has been stored yet.
    fn read(&self) -> u32;
    /// Persist a new best score.
    fn write(&mut self, best: u32) -> Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ScoreRecord {
    best: u32,
}

/// JSON-file backed score store.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for FileScoreStore {
    fn read(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|data| serde_json::from_str::<ScoreRecord>(&data).ok())
            .map(|record| record.best)
            .unwrap_or(0)
    }

    fn write(&mut self, best: u32) -> Result<()> {
        let json = serde_json::to_string_pretty(&ScoreRecord { best })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory score store for tests and headless sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryScoreStore {
    best: u32,
}

impl ScoreStore for MemoryScoreStore {
    fn read(&self) -> u32 {
        self.best
    }

    fn write(&mut self, best: u32) -> Result<()> {
        self.best = best;
        Ok(())
    }
}
