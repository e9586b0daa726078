//! Daily puzzle representation
//!
//! A `PuzzleDescriptor` is built once per session from provider data and never
//! mutated afterwards. Construction validates every field so gameplay code can
//! rely on the hive invariants without re-checking them.

use super::scoring;
use chrono::NaiveDate;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use thiserror::Error;

/// Number of distinct letters in a hive
pub const HIVE_SIZE: usize = 7;

/// Shortest word the game will accept
pub const MIN_WORD_LEN: usize = 4;

/// Date format used by the daily puzzle page ("October 18, 2026")
pub const DISPLAY_DATE_FORMAT: &str = "%B %d, %Y";

/// Error type for malformed puzzle data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("puzzle must have exactly 7 distinct letters, got {0}")]
    LetterCount(usize),

    #[error("'{0}' is not a single letter")]
    NotALetter(String),

    #[error("letter {0} appears more than once in the hive")]
    DuplicateLetter(char),

    #[error("outer letters {outer:?} are not the hive letters other than center {center}")]
    OuterLettersMismatch { center: char, outer: String },

    #[error("center letter {0} is not one of the hive letters")]
    CenterNotInHive(char),

    #[error("puzzle has no answers")]
    NoAnswers,

    #[error("answer {0} is shorter than 4 letters")]
    AnswerTooShort(String),

    #[error("answer {0} uses letters outside the hive")]
    AnswerOutsideHive(String),

    #[error("answer {0} does not contain the center letter")]
    AnswerMissingCenter(String),

    #[error("answer {0} is listed more than once")]
    DuplicateAnswer(String),

    #[error("pangram {0} is not one of the answers")]
    PangramNotAnswer(String),

    #[error("unparseable puzzle date {0:?}")]
    BadDate(String),
}

/// Puzzle fields exactly as a provider delivers them
///
/// Every field is required; a missing one fails deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPuzzle {
    pub display_date: String,
    pub center_letter: String,
    pub outer_letters: Vec<String>,
    pub valid_letters: Vec<String>,
    pub pangrams: Vec<String>,
    pub answers: Vec<String>,
}

/// Immutable description of one day's puzzle
#[derive(Debug, Clone)]
pub struct PuzzleDescriptor {
    date: NaiveDate,
    center: char,
    letters: Vec<char>,
    answers: Vec<String>,
    answer_set: FxHashSet<String>,
    pangrams: FxHashSet<String>,
    max_score: u32,
}

impl PuzzleDescriptor {
    /// Build a validated puzzle
    ///
    /// Letters and words are upper-cased. The hive order is `letters` with the
    /// center letter moved to the middle slot.
    ///
    /// # Errors
    /// Returns `PuzzleError` if the hive does not have exactly 7 distinct letters,
    /// the center is not part of it, there are no answers, an answer is listed
    /// twice (ignoring case), or an answer/pangram breaks the hive rules.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use spelling_bee::core::PuzzleDescriptor;
    ///
    /// let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    /// let puzzle = PuzzleDescriptor::new(
    ///     date,
    ///     'a',
    ///     &['a', 'b', 'c', 'd', 'e', 'f', 'g'],
    ///     vec!["abcde".into(), "abcdefg".into()],
    ///     vec!["abcdefg".into()],
    /// )
    /// .unwrap();
    /// assert_eq!(puzzle.max_score(), 19);
    /// ```
    pub fn new(
        date: NaiveDate,
        center: char,
        letters: &[char],
        answers: Vec<String>,
        pangrams: Vec<String>,
    ) -> Result<Self, PuzzleError> {
        let center = center.to_ascii_uppercase();

        let mut hive: Vec<char> = Vec::with_capacity(HIVE_SIZE);
        for &letter in letters {
            if !letter.is_ascii_alphabetic() {
                return Err(PuzzleError::NotALetter(letter.to_string()));
            }
            let letter = letter.to_ascii_uppercase();
            if hive.contains(&letter) {
                return Err(PuzzleError::DuplicateLetter(letter));
            }
            hive.push(letter);
        }
        if hive.len() != HIVE_SIZE {
            return Err(PuzzleError::LetterCount(hive.len()));
        }

        let center_pos = hive
            .iter()
            .position(|&l| l == center)
            .ok_or(PuzzleError::CenterNotInHive(center))?;
        hive.remove(center_pos);
        hive.insert(HIVE_SIZE / 2, center);

        let answers: Vec<String> = answers.into_iter().map(|a| a.to_uppercase()).collect();
        if answers.is_empty() {
            return Err(PuzzleError::NoAnswers);
        }
        let mut answer_set: FxHashSet<String> = FxHashSet::default();
        for answer in &answers {
            if answer.chars().count() < MIN_WORD_LEN {
                return Err(PuzzleError::AnswerTooShort(answer.clone()));
            }
            if !answer.chars().all(|c| hive.contains(&c)) {
                return Err(PuzzleError::AnswerOutsideHive(answer.clone()));
            }
            if !answer.contains(center) {
                return Err(PuzzleError::AnswerMissingCenter(answer.clone()));
            }
            if !answer_set.insert(answer.clone()) {
                return Err(PuzzleError::DuplicateAnswer(answer.clone()));
            }
        }

        let mut pangram_set = FxHashSet::default();
        for pangram in pangrams {
            let pangram = pangram.to_uppercase();
            if !answer_set.contains(&pangram) {
                return Err(PuzzleError::PangramNotAnswer(pangram));
            }
            pangram_set.insert(pangram);
        }

        let max_score = scoring::score(&answers);

        Ok(Self {
            date,
            center,
            letters: hive,
            answers,
            answer_set,
            pangrams: pangram_set,
            max_score,
        })
    }

    /// Puzzle date; this is the puzzle's identity
    #[inline]
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[inline]
    #[must_use]
    pub const fn center(&self) -> char {
        self.center
    }

    /// All seven hive letters in their initial display order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// The six letters surrounding the center
    pub fn outer_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied().filter(|&l| l != self.center)
    }

    #[inline]
    #[must_use]
    pub fn is_valid_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Answers in provider order
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[inline]
    #[must_use]
    pub fn is_answer(&self, word: &str) -> bool {
        self.answer_set.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn is_pangram(&self, word: &str) -> bool {
        self.pangrams.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn pangram_count(&self) -> usize {
        self.pangrams.len()
    }

    /// Score for finding every answer
    #[inline]
    #[must_use]
    pub const fn max_score(&self) -> u32 {
        self.max_score
    }
}

impl TryFrom<RawPuzzle> for PuzzleDescriptor {
    type Error = PuzzleError;

    fn try_from(raw: RawPuzzle) -> Result<Self, Self::Error> {
        let date = NaiveDate::parse_from_str(raw.display_date.trim(), DISPLAY_DATE_FORMAT)
            .map_err(|_| PuzzleError::BadDate(raw.display_date.clone()))?;

        let center = single_letter(&raw.center_letter)?;

        let outer = raw
            .outer_letters
            .iter()
            .map(String::as_str)
            .map(single_letter)
            .collect::<Result<Vec<_>, _>>()?;
        let letters = raw
            .valid_letters
            .iter()
            .map(String::as_str)
            .map(single_letter)
            .collect::<Result<Vec<_>, _>>()?;

        let puzzle = Self::new(date, center, &letters, raw.answers, raw.pangrams)?;

        // Outer letters plus the center must be exactly the hive
        let expected: FxHashSet<char> = puzzle.outer_letters().collect();
        let given: FxHashSet<char> = outer.iter().copied().collect();
        if outer.len() != HIVE_SIZE - 1 || given != expected {
            return Err(PuzzleError::OuterLettersMismatch {
                center: puzzle.center,
                outer: outer.into_iter().collect(),
            });
        }

        Ok(puzzle)
    }
}

fn single_letter(s: &str) -> Result<char, PuzzleError> {
    let mut chars = s.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase()),
        _ => Err(PuzzleError::NotALetter(s.to_string())),
    }
}
