//! Daily puzzle sources
//!
//! A provider turns some external definition of today's puzzle into a
//! validated `PuzzleDescriptor`. Failures are fatal to the session.

mod file;
mod nyt;

pub use file::FileProvider;
pub use nyt::{DEFAULT_URL, NytProvider, extract_game_data};

use crate::core::{PuzzleDescriptor, PuzzleError, RawPuzzle};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to fetch puzzle page: {0}")]
    Http(#[from] Box<ureq::Error>),

    #[error("failed to read puzzle: {0}")]
    Io(#[from] std::io::Error),

    #[error("puzzle page does not contain game data")]
    MissingGameData,

    #[error("malformed puzzle data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid puzzle: {0}")]
    Puzzle(#[from] PuzzleError),
}

/// Source of today's puzzle
pub trait PuzzleProvider {
    /// Short description of where the puzzle comes from, for logs
    fn source(&self) -> String;

    /// Fetch and validate today's puzzle
    ///
    /// # Errors
    /// Returns `ProviderError` if the source is unreachable or its data is
    /// missing or malformed.
    fn fetch(&self) -> Result<PuzzleDescriptor, ProviderError>;
}

/// The page's game data blob; only today's puzzle is used
#[derive(Debug, Deserialize)]
struct GameData {
    today: RawPuzzle,
}

/// Decode a puzzle from either a `{"today": {...}}` blob or a bare puzzle object
fn parse_puzzle(json: &str) -> Result<PuzzleDescriptor, ProviderError> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Document {
        Wrapped(GameData),
        Bare(RawPuzzle),
    }

    let raw = match serde_json::from_str::<Document>(json) {
        Ok(Document::Wrapped(data)) => data.today,
        Ok(Document::Bare(raw)) => raw,
        // Re-parse strictly so the error names the missing field
        Err(_) => serde_json::from_str::<GameData>(json)?.today,
    };
    Ok(PuzzleDescriptor::try_from(raw)?)
}
