//! Mutable game state for one day's session

use crate::core::{Outcome, PuzzleDescriptor, Rank, classify, rank, score};
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use tracing::warn;

/// Transient annotation shown after an input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Success,
    Pangram,
    Error,
    Warning,
}

impl Message {
    pub fn new(text: impl Into<String>, style: MessageStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Session state
///
/// The score is always derived from `found`, never stored.
#[derive(Debug, Clone)]
pub struct SessionState {
    puzzle: PuzzleDescriptor,
    found: Vec<String>,
    found_index: FxHashSet<String>,
    tried: Vec<String>,
    tried_index: FxHashSet<String>,
    hive: Vec<char>,
    input: String,
    message: Option<Message>,
}

impl SessionState {
    /// Start a fresh session
    #[must_use]
    pub fn new(puzzle: PuzzleDescriptor) -> Self {
        let hive = puzzle.letters().to_vec();
        Self {
            puzzle,
            found: Vec::new(),
            found_index: FxHashSet::default(),
            tried: Vec::new(),
            tried_index: FxHashSet::default(),
            hive,
            input: String::new(),
            message: None,
        }
    }

    /// Rebuild a session from persisted words
    ///
    /// Stored "found" words that are not answers for this puzzle are dropped so
    /// the found list stays a subset of the answers. Duplicates are ignored.
    #[must_use]
    pub fn resume(puzzle: PuzzleDescriptor, found: Vec<String>, rejected: Vec<String>) -> Self {
        let mut state = Self::new(puzzle);
        for word in found {
            if state.puzzle.is_answer(&word) {
                state.accept(word);
            } else {
                warn!(%word, "stored word is not an answer for this puzzle, ignoring");
            }
        }
        for word in rejected {
            state.reject(word);
        }
        state
    }

    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> &PuzzleDescriptor {
        &self.puzzle
    }

    /// Accepted words in discovery order
    #[inline]
    #[must_use]
    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    /// Rejected words in submission order
    #[inline]
    #[must_use]
    pub fn tried_words(&self) -> &[String] {
        &self.tried
    }

    /// Whether `word` has been submitted before, accepted or not
    #[must_use]
    pub fn has_submitted(&self, word: &str) -> bool {
        self.found_index.contains(word) || self.tried_index.contains(word)
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        score(&self.found)
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        rank(self.score(), self.puzzle.max_score())
    }

    /// Pangrams among the found words
    #[must_use]
    pub fn pangrams_found(&self) -> usize {
        self.found.iter().filter(|w| self.puzzle.is_pangram(w)).count()
    }

    /// Current hive letter order
    #[inline]
    #[must_use]
    pub fn hive(&self) -> &[char] {
        &self.hive
    }

    /// The word being typed
    #[inline]
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[inline]
    #[must_use]
    pub const fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Hive letters that appear in the word being typed, in hive order
    #[must_use]
    pub fn highlighted(&self) -> Vec<char> {
        self.hive
            .iter()
            .copied()
            .filter(|&l| self.input.contains(l))
            .collect()
    }

    /// Classify a word against the puzzle and this session's history
    #[must_use]
    pub fn classify(&self, word: &str) -> Outcome {
        classify(word, &self.puzzle, self.has_submitted(word))
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.hive.shuffle(rng);
    }

    /// Append a typed letter, upper-cased
    ///
    /// Letters outside the hive are kept so that submitting reports them.
    pub fn push_letter(&mut self, letter: char) {
        self.input.push(letter.to_ascii_uppercase());
    }

    pub fn pop_letter(&mut self) -> Option<char> {
        self.input.pop()
    }

    /// Take the typed word, leaving the buffer empty
    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input)
    }

    /// Record an accepted word
    ///
    /// Returns false, leaving the state untouched, if the word is not an answer
    /// or was already found.
    pub fn accept(&mut self, word: String) -> bool {
        if !self.puzzle.is_answer(&word) || !self.found_index.insert(word.clone()) {
            return false;
        }
        self.found.push(word);
        true
    }

    /// Record a rejected word; returns false if it was already tried
    pub fn reject(&mut self, word: String) -> bool {
        if self.found_index.contains(&word) || !self.tried_index.insert(word.clone()) {
            return false;
        }
        self.tried.push(word);
        true
    }

    pub fn set_message(&mut self, message: Message) {
        self.message = Some(message);
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }
}
