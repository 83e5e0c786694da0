//! Temp-dir environment for CLI integration tests.

use crate::fixtures;
use anyhow::Result;
use castlist_types::Profile;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An isolated data directory holding a roster file.
///
/// Keeps the temp dir alive for the duration of the test; CLI invocations
/// point at it via `--data-dir` / `--file`.
pub struct TestWorld {
    root: TempDir,
    roster_path: PathBuf,
}

impl TestWorld {
    /// Create a world seeded with the canonical sample cast.
    pub fn new() -> Result<Self> {
        Self::with_cast(&fixtures::sample_cast())
    }

    /// Create a world seeded with a specific cast.
    pub fn with_cast(cast: &[Profile]) -> Result<Self> {
        let root = TempDir::new()?;
        let roster_path = root.path().join("roster.json");
        fixtures::write_roster(&roster_path, cast)?;
        Ok(Self { root, roster_path })
    }

    /// Create a world whose roster file is raw bytes (for malformed-input
    /// tests).
    pub fn with_raw_roster(contents: &str) -> Result<Self> {
        let root = TempDir::new()?;
        let roster_path = root.path().join("roster.json");
        std::fs::write(&roster_path, contents)?;
        Ok(Self { root, roster_path })
    }

    pub fn data_dir(&self) -> &Path {
        self.root.path()
    }

    pub fn roster_path(&self) -> &Path {
        &self.roster_path
    }
}
