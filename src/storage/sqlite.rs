//! SQLite-backed game store

use super::{GameId, GameStore, Progress, StorageError};
use chrono::NaiveDate;
use rusqlite::{Connection, params};
use std::path::Path;
use tracing::debug;

const SCHEMA: &str = "
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS game (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    creation_date TIMESTAMP DEFAULT CURRENT_TIMESTAMP NOT NULL,
    game_date     DATE NOT NULL,
    UNIQUE(game_date)
);

CREATE TABLE IF NOT EXISTS guess (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    creation_date TIMESTAMP DEFAULT CURRENT_TIMESTAMP NOT NULL,
    game_id       INTEGER NOT NULL REFERENCES game(id),
    word          TEXT NOT NULL,
    correct       BOOLEAN NOT NULL,
    UNIQUE(word, game_id)
);
";

/// Game store in a single SQLite file
///
/// The connection is opened once and held for the life of the process.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and ensure the schema exists
    ///
    /// # Errors
    /// Returns `StorageError` if the file cannot be opened or the schema cannot
    /// be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        debug!(path = %path.as_ref().display(), "opening game database");
        Self::init(Connection::open(path)?)
    }

    /// Open a private in-memory database
    ///
    /// # Errors
    /// Returns `StorageError` if the schema cannot be created.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    fn words(&self, game: GameId, correct: bool) -> Result<Vec<String>, StorageError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT word FROM guess WHERE game_id = ?1 AND correct = ?2 ORDER BY id")?;
        let rows = stmt.query_map(params![game.0, correct], |row| row.get(0))?;
        Ok(rows.collect::<Result<Vec<String>, _>>()?)
    }
}

impl GameStore for SqliteStore {
    fn get_or_create_game(&mut self, date: NaiveDate) -> Result<GameId, StorageError> {
        self.conn.execute(
            "INSERT OR IGNORE INTO game (game_date) VALUES (?1)",
            params![date],
        )?;
        let id = self.conn.query_row(
            "SELECT id FROM game WHERE game_date = ?1",
            params![date],
            |row| row.get(0),
        )?;
        Ok(GameId(id))
    }

    fn load_progress(&self, game: GameId) -> Result<Progress, StorageError> {
        Ok(Progress {
            found: self.words(game, true)?,
            rejected: self.words(game, false)?,
        })
    }

    fn record_guess(
        &mut self,
        game: GameId,
        word: &str,
        correct: bool,
    ) -> Result<(), StorageError> {
        // Upsert keeps the original row id, so discovery order survives a rewrite
        self.conn.execute(
            "INSERT INTO guess (game_id, word, correct) VALUES (?1, ?2, ?3)
             ON CONFLICT(word, game_id) DO UPDATE SET correct = excluded.correct",
            params![game.0, word, correct],
        )?;
        Ok(())
    }
}
