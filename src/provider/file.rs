//! Puzzle loaded from a local JSON file

use super::{ProviderError, PuzzleProvider, parse_puzzle};
use crate::core::PuzzleDescriptor;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Reads a puzzle saved as JSON, either the page's game data blob or a bare
/// puzzle object
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PuzzleProvider for FileProvider {
    fn source(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<PuzzleDescriptor, ProviderError> {
        let content = fs::read_to_string(&self.path)?;
        let puzzle = parse_puzzle(&content)?;
        info!(path = %self.path.display(), date = %puzzle.date(), "puzzle loaded from file");
        Ok(puzzle)
    }
}
