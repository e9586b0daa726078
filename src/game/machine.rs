//! Input-driven game loop logic
//!
//! `Game` owns the session, the store and the random source. Each input event
//! is handled to completion, including its persistence write, before the next
//! one is accepted.

use super::session::{Message, MessageStyle, SessionState};
use crate::core::{Outcome, PuzzleDescriptor};
use crate::storage::{GameId, GameStore, StorageError};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info, warn};

const PRAISE: &[&str] = &["Nice!", "Awesome!", "Good!"];

/// A discrete player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Shuffle,
    HelpToggle,
    HintToggle,
    Backspace,
    Letter(char),
    Submit,
    Quit,
    Other,
}

impl InputEvent {
    /// Map a raw key character to an event
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::game::InputEvent;
    ///
    /// assert_eq!(InputEvent::from_char(' '), InputEvent::Shuffle);
    /// assert_eq!(InputEvent::from_char('q'), InputEvent::Letter('q'));
    /// assert_eq!(InputEvent::from_char('\r'), InputEvent::Submit);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        match c {
            ' ' => Self::Shuffle,
            '/' => Self::HelpToggle,
            '.' => Self::HintToggle,
            '\n' | '\r' => Self::Submit,
            '\u{7f}' | '\u{8}' => Self::Backspace,
            '\u{1b}' => Self::Quit,
            c if c.is_ascii_alphabetic() => Self::Letter(c),
            _ => Self::Other,
        }
    }
}

/// What the front end should do after an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// State may have changed; draw it
    Redraw,
    ShowHelp,
    ShowHints,
    /// Word accepted
    Accepted { word: String, pangram: bool },
    /// Word rejected; the front end pauses briefly with the word shown
    Rejected { word: String, outcome: Outcome },
    Quit,
}

/// A running game
pub struct Game<S, R> {
    state: SessionState,
    store: S,
    game_id: GameId,
    rng: R,
}

impl<S: GameStore, R: Rng> Game<S, R> {
    /// Start today's game, resuming any stored progress
    ///
    /// The hive is shuffled once at start.
    ///
    /// # Errors
    /// Returns `StorageError` if the game cannot be created or its progress
    /// cannot be read.
    pub fn start(puzzle: PuzzleDescriptor, mut store: S, mut rng: R) -> Result<Self, StorageError> {
        let game_id = store.get_or_create_game(puzzle.date())?;
        let progress = store.load_progress(game_id)?;
        info!(
            game = %game_id,
            date = %puzzle.date(),
            found = progress.found.len(),
            rejected = progress.rejected.len(),
            "game loaded"
        );

        let mut state = SessionState::resume(puzzle, progress.found, progress.rejected);
        state.shuffle(&mut rng);

        Ok(Self {
            state,
            store,
            game_id,
            rng,
        })
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[inline]
    #[must_use]
    pub const fn game_id(&self) -> GameId {
        self.game_id
    }

    /// Apply one input event
    pub fn handle(&mut self, event: InputEvent) -> Response {
        self.state.clear_message();

        match event {
            InputEvent::Shuffle => {
                self.state.shuffle(&mut self.rng);
                Response::Redraw
            }
            InputEvent::HelpToggle => Response::ShowHelp,
            InputEvent::HintToggle => Response::ShowHints,
            InputEvent::Backspace => {
                self.state.pop_letter();
                Response::Redraw
            }
            InputEvent::Letter(c) => {
                self.state.push_letter(c);
                Response::Redraw
            }
            InputEvent::Submit => self.submit(),
            InputEvent::Quit => Response::Quit,
            InputEvent::Other => Response::Redraw,
        }
    }

    fn submit(&mut self) -> Response {
        let word = self.state.take_input();
        if word.is_empty() {
            return Response::Redraw;
        }

        let outcome = self.state.classify(&word);
        debug!(%word, ?outcome, "guess classified");

        match outcome {
            Outcome::Accepted { pangram } => {
                self.state.accept(word.clone());
                if let Some(warning) = self.persist(&word, true) {
                    self.state.set_message(Message::new(warning, MessageStyle::Warning));
                } else {
                    let text = if pangram {
                        "Pangram!"
                    } else {
                        PRAISE.choose(&mut self.rng).copied().unwrap_or("Nice!")
                    };
                    let style = if pangram {
                        MessageStyle::Pangram
                    } else {
                        MessageStyle::Success
                    };
                    self.state.set_message(Message::new(text, style));
                }
                info!(%word, score = self.state.score(), rank = self.state.rank().name, "word found");
                Response::Accepted { word, pangram }
            }
            Outcome::AlreadyFound => {
                self.set_rejection(outcome, None);
                Response::Rejected { word, outcome }
            }
            _ => {
                self.state.reject(word.clone());
                let warning = self.persist(&word, false);
                self.set_rejection(outcome, warning);
                Response::Rejected { word, outcome }
            }
        }
    }

    // The rejection reason always leads; a save warning is appended to it
    fn set_rejection(&mut self, outcome: Outcome, warning: Option<String>) {
        let Some(reason) = outcome.rejection_text() else {
            return;
        };
        let text = match warning {
            Some(warning) => format!("{reason} ({warning})"),
            None => reason.to_string(),
        };
        self.state.set_message(Message::new(text, MessageStyle::Error));
    }

    /// Write one guess, returning a player-facing warning if it failed
    ///
    /// A failed write leaves the in-memory decision standing.
    fn persist(&mut self, word: &str, correct: bool) -> Option<String> {
        self.store
            .record_guess(self.game_id, word, correct)
            .inspect_err(|err| warn!(%word, correct, error = %err, "failed to save guess"))
            .err()
            .map(|err| format!("Progress not saved: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, Progress};
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn puzzle() -> PuzzleDescriptor {
        PuzzleDescriptor::new(
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            'a',
            &['a', 'b', 'c', 'd', 'e', 'f', 'g'],
            vec!["abcde".into(), "abcdefg".into()],
            vec!["abcdefg".into()],
        )
        .unwrap()
    }

    fn game() -> Game<MemoryStore, StdRng> {
        Game::start(puzzle(), MemoryStore::new(), StdRng::seed_from_u64(1)).unwrap()
    }

    fn type_word<S: GameStore, R: Rng>(game: &mut Game<S, R>, word: &str) -> Response {
        for c in word.chars() {
            game.handle(InputEvent::from_char(c));
        }
        game.handle(InputEvent::Submit)
    }

    fn progress(game: &Game<MemoryStore, StdRng>) -> Progress {
        game.store().load_progress(game.game_id()).unwrap()
    }

    /// Store whose writes always fail
    struct BrokenStore;

    impl GameStore for BrokenStore {
        fn get_or_create_game(&mut self, _date: NaiveDate) -> Result<GameId, StorageError> {
            Ok(GameId(1))
        }

        fn load_progress(&self, _game: GameId) -> Result<Progress, StorageError> {
            Ok(Progress::default())
        }

        fn record_guess(&mut self, game: GameId, _: &str, _: bool) -> Result<(), StorageError> {
            Err(StorageError::UnknownGame(game))
        }
    }

    #[test]
    fn key_mapping() {
        assert_eq!(InputEvent::from_char('/'), InputEvent::HelpToggle);
        assert_eq!(InputEvent::from_char('.'), InputEvent::HintToggle);
        assert_eq!(InputEvent::from_char('\n'), InputEvent::Submit);
        assert_eq!(InputEvent::from_char('\u{7f}'), InputEvent::Backspace);
        assert_eq!(InputEvent::from_char('\u{8}'), InputEvent::Backspace);
        assert_eq!(InputEvent::from_char('\u{1b}'), InputEvent::Quit);
        assert_eq!(InputEvent::from_char('Z'), InputEvent::Letter('Z'));
        assert_eq!(InputEvent::from_char('3'), InputEvent::Other);
        assert_eq!(InputEvent::from_char('é'), InputEvent::Other);
    }

    #[test]
    fn accepted_words_score_and_persist() {
        let mut game = game();

        let first = type_word(&mut game, "abcde");
        assert_eq!(
            first,
            Response::Accepted {
                word: "ABCDE".into(),
                pangram: false
            }
        );
        assert_eq!(game.state().score(), 5);
        assert_eq!(game.state().input(), "");
        assert_eq!(
            game.state().message().map(|m| m.style),
            Some(MessageStyle::Success)
        );

        let second = type_word(&mut game, "ABCDEFG");
        assert_eq!(
            second,
            Response::Accepted {
                word: "ABCDEFG".into(),
                pangram: true
            }
        );
        assert_eq!(game.state().score(), 19);
        assert_eq!(game.state().message().unwrap().text, "Pangram!");
        assert_eq!(game.state().rank().name, "Queen Bee");

        assert_eq!(progress(&game).found, vec!["ABCDE", "ABCDEFG"]);
    }

    #[test]
    fn repeat_submission_is_not_recorded() {
        let mut game = game();
        type_word(&mut game, "ABCDE");
        let repeat = type_word(&mut game, "ABCDE");

        assert_eq!(
            repeat,
            Response::Rejected {
                word: "ABCDE".into(),
                outcome: Outcome::AlreadyFound
            }
        );
        assert_eq!(game.state().score(), 5);
        assert_eq!(progress(&game).len(), 1);
        assert_eq!(game.state().message().unwrap().text, "Already found");
    }

    #[test]
    fn rejected_word_recorded_once() {
        let mut game = game();

        let first = type_word(&mut game, "XYZ");
        assert_eq!(
            first,
            Response::Rejected {
                word: "XYZ".into(),
                outcome: Outcome::TooShort
            }
        );
        assert_eq!(progress(&game).rejected, vec!["XYZ"]);

        let second = type_word(&mut game, "XYZ");
        assert!(matches!(
            second,
            Response::Rejected {
                outcome: Outcome::AlreadyFound,
                ..
            }
        ));
        assert_eq!(progress(&game).len(), 1);
        assert_eq!(game.state().score(), 0);
    }

    #[test]
    fn message_cleared_on_next_input() {
        let mut game = game();
        type_word(&mut game, "XYZ");
        assert!(game.state().message().is_some());

        game.handle(InputEvent::Letter('a'));
        assert!(game.state().message().is_none());
    }

    #[test]
    fn backspace_and_other_keys() {
        let mut game = game();
        game.handle(InputEvent::Backspace);
        assert_eq!(game.state().input(), "");

        game.handle(InputEvent::Letter('a'));
        game.handle(InputEvent::Letter('z'));
        game.handle(InputEvent::Other);
        assert_eq!(game.state().input(), "AZ");
        assert_eq!(game.state().highlighted(), vec!['A']);

        game.handle(InputEvent::Backspace);
        assert_eq!(game.state().input(), "A");
    }

    #[test]
    fn shuffle_keeps_input() {
        let mut game = game();
        game.handle(InputEvent::Letter('b'));
        let before = game.state().hive().to_vec();
        let mut changed = false;
        for _ in 0..10 {
            assert_eq!(game.handle(InputEvent::Shuffle), Response::Redraw);
            changed |= game.state().hive() != before.as_slice();
        }
        assert!(changed);
        assert_eq!(game.state().input(), "B");
    }

    #[test]
    fn overlays_and_quit_do_not_mutate() {
        let mut game = game();
        game.handle(InputEvent::Letter('a'));
        assert_eq!(game.handle(InputEvent::HelpToggle), Response::ShowHelp);
        assert_eq!(game.handle(InputEvent::HintToggle), Response::ShowHints);
        assert_eq!(game.handle(InputEvent::Quit), Response::Quit);
        assert_eq!(game.state().input(), "A");
    }

    #[test]
    fn empty_submit_is_ignored() {
        let mut game = game();
        assert_eq!(game.handle(InputEvent::Submit), Response::Redraw);
        assert!(progress(&game).is_empty());
    }

    #[test]
    fn seeded_games_are_deterministic() {
        let mut a = game();
        let mut b = game();
        assert_eq!(a.state().hive(), b.state().hive());

        type_word(&mut a, "ABCDE");
        type_word(&mut b, "ABCDE");
        assert_eq!(a.state().message(), b.state().message());
    }

    #[test]
    fn resumes_stored_progress() {
        let mut store = MemoryStore::new();
        let id = store.get_or_create_game(puzzle().date()).unwrap();
        store.record_guess(id, "ABCDEFG", true).unwrap();
        store.record_guess(id, "XYZ", false).unwrap();

        let mut game = Game::start(puzzle(), store, StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(game.game_id(), id);
        assert_eq!(game.state().score(), 14);
        assert!(matches!(
            type_word(&mut game, "XYZ"),
            Response::Rejected {
                outcome: Outcome::AlreadyFound,
                ..
            }
        ));
    }

    #[test]
    fn storage_failure_is_a_warning() {
        let mut game = Game::start(puzzle(), BrokenStore, StdRng::seed_from_u64(1)).unwrap();

        let response = type_word(&mut game, "ABCDE");
        assert!(matches!(response, Response::Accepted { .. }));
        assert_eq!(game.state().found_words(), &["ABCDE"]);
        assert_eq!(game.state().score(), 5);

        let message = game.state().message().unwrap();
        assert_eq!(message.style, MessageStyle::Warning);
        assert!(message.text.starts_with("Progress not saved"));

        // Still a duplicate in memory
        assert!(matches!(
            type_word(&mut game, "ABCDE"),
            Response::Rejected {
                outcome: Outcome::AlreadyFound,
                ..
            }
        ));
    }
    #[test]
    fn storage_failure_keeps_rejection_reason() {
        let mut game = Game::start(puzzle(), BrokenStore, StdRng::seed_from_u64(1)).unwrap();

        let response = type_word(&mut game, "XYZ");
        assert!(matches!(
            response,
            Response::Rejected {
                outcome: Outcome::TooShort,
                ..
            }
        ));
        assert_eq!(game.state().tried_words(), &["XYZ"]);

        let message = game.state().message().unwrap();
        assert_eq!(message.style, MessageStyle::Error);
        assert!(message.text.starts_with("Too short"));
        assert!(message.text.contains("Progress not saved"));
    }
}
