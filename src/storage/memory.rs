//! In-process game store for unsaved sessions

use super::{GameId, GameStore, Progress, StorageError};
use chrono::NaiveDate;
use rustc_hash::FxHashMap;

/// Game store that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    games: FxHashMap<NaiveDate, GameId>,
    // (game, word, correct) in first-submission order
    guesses: Vec<(GameId, String, bool)>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn has_game(&self, game: GameId) -> bool {
        self.games.values().any(|&g| g == game)
    }
}

impl GameStore for MemoryStore {
    fn get_or_create_game(&mut self, date: NaiveDate) -> Result<GameId, StorageError> {
        let next = GameId(self.games.len() as i64 + 1);
        Ok(*self.games.entry(date).or_insert(next))
    }

    fn load_progress(&self, game: GameId) -> Result<Progress, StorageError> {
        let mut progress = Progress::default();
        for (_, word, correct) in self.guesses.iter().filter(|(g, _, _)| *g == game) {
            if *correct {
                progress.found.push(word.clone());
            } else {
                progress.rejected.push(word.clone());
            }
        }
        Ok(progress)
    }

    fn record_guess(
        &mut self,
        game: GameId,
        word: &str,
        correct: bool,
    ) -> Result<(), StorageError> {
        if !self.has_game(game) {
            return Err(StorageError::UnknownGame(game));
        }

        match self
            .guesses
            .iter_mut()
            .find(|(g, w, _)| *g == game && w == word)
        {
            Some(existing) => existing.2 = correct,
            None => self.guesses.push((game, word.to_string(), correct)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn get_or_create_is_idempotent() {
        let mut store = MemoryStore::new();
        let id = store.get_or_create_game(date()).unwrap();
        assert_eq!(store.get_or_create_game(date()).unwrap(), id);
        assert_ne!(
            store.get_or_create_game(date().succ_opt().unwrap()).unwrap(),
            id
        );
    }

    #[test]
    fn record_guess_upserts() {
        let mut store = MemoryStore::new();
        let id = store.get_or_create_game(date()).unwrap();

        store.record_guess(id, "OTTER", false).unwrap();
        store.record_guess(id, "OTTER", true).unwrap();

        let progress = store.load_progress(id).unwrap();
        assert_eq!(progress.found, vec!["OTTER"]);
        assert_eq!(progress.len(), 1);
    }

    #[test]
    fn record_guess_unknown_game() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            store.record_guess(GameId(7), "TOTE", true),
            Err(StorageError::UnknownGame(GameId(7)))
        ));
    }
}
