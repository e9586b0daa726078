//! Progress persistence
//!
//! Games are keyed by calendar date and guesses by `(game, word)`. Every write
//! is a single idempotent statement, so a crash between writes never leaves a
//! half-recorded guess behind.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// Storage identity of one day's game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameId(pub i64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Words previously submitted for a game, in submission order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    pub found: Vec<String>,
    pub rejected: Vec<String>,
}

impl Progress {
    /// Number of distinct recorded guesses
    #[must_use]
    pub fn len(&self) -> usize {
        self.found.len() + self.rejected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.found.is_empty() && self.rejected.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("no game stored with id {0}")]
    UnknownGame(GameId),
}

/// Backing store for resumable game progress
pub trait GameStore {
    /// Return the game for `date`, creating it on first use
    ///
    /// # Errors
    /// Returns `StorageError` if the backing store fails.
    fn get_or_create_game(&mut self, date: NaiveDate) -> Result<GameId, StorageError>;

    /// All accepted and rejected words recorded for `game`
    ///
    /// # Errors
    /// Returns `StorageError` if the backing store fails.
    fn load_progress(&self, game: GameId) -> Result<Progress, StorageError>;

    /// Record a guess, replacing any earlier record of the same word
    ///
    /// # Errors
    /// Returns `StorageError` if the write fails or `game` does not exist.
    fn record_guess(&mut self, game: GameId, word: &str, correct: bool)
    -> Result<(), StorageError>;
}

impl<S: GameStore + ?Sized> GameStore for Box<S> {
    fn get_or_create_game(&mut self, date: NaiveDate) -> Result<GameId, StorageError> {
        (**self).get_or_create_game(date)
    }

    fn load_progress(&self, game: GameId) -> Result<Progress, StorageError> {
        (**self).load_progress(game)
    }

    fn record_guess(
        &mut self,
        game: GameId,
        word: &str,
        correct: bool,
    ) -> Result<(), StorageError> {
        (**self).record_guess(game, word, correct)
    }
}
