//! Guess classification
//!
//! Checks run in a fixed order and the first failure wins, so a short word
//! built from foreign letters is reported as too short.

use super::puzzle::{MIN_WORD_LEN, PuzzleDescriptor};

/// Result of checking a submitted word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Submitted before, accepted or not
    AlreadyFound,
    TooShort,
    InvalidLetters,
    MissingCenter,
    NotInWordList,
    Accepted { pangram: bool },
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Player-facing text for a rejection
    ///
    /// Accepted outcomes have no fixed text; the session picks one.
    #[must_use]
    pub const fn rejection_text(self) -> Option<&'static str> {
        match self {
            Self::AlreadyFound => Some("Already found"),
            Self::TooShort => Some("Too short"),
            Self::InvalidLetters => Some("Bad letters"),
            Self::MissingCenter => Some("Missing center letter"),
            Self::NotInWordList => Some("Not in word list"),
            Self::Accepted { .. } => None,
        }
    }
}

/// Classify `word` against the puzzle
///
/// `previously_submitted` is true when the word was already accepted or
/// rejected earlier in this game.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use spelling_bee::core::{Outcome, PuzzleDescriptor, classify};
///
/// let puzzle = PuzzleDescriptor::new(
///     NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
///     'a',
///     &['a', 'b', 'c', 'd', 'e', 'f', 'g'],
///     vec!["abcde".into()],
///     vec![],
/// )
/// .unwrap();
///
/// assert_eq!(classify("XYZ", &puzzle, false), Outcome::TooShort);
/// assert_eq!(
///     classify("ABCDE", &puzzle, false),
///     Outcome::Accepted { pangram: false }
/// );
/// ```
#[must_use]
pub fn classify(word: &str, puzzle: &PuzzleDescriptor, previously_submitted: bool) -> Outcome {
    if previously_submitted {
        Outcome::AlreadyFound
    } else if word.chars().count() < MIN_WORD_LEN {
        Outcome::TooShort
    } else if !word.chars().all(|c| puzzle.is_valid_letter(c)) {
        Outcome::InvalidLetters
    } else if !word.contains(puzzle.center()) {
        Outcome::MissingCenter
    } else if !puzzle.is_answer(word) {
        Outcome::NotInWordList
    } else {
        Outcome::Accepted {
            pangram: puzzle.is_pangram(word),
        }
    }
}
