//! Core domain types for Spelling Bee
//!
//! Puzzle data, scoring and guess classification. Everything here is pure and
//! independent of the terminal and storage layers.

mod classify;
mod puzzle;
mod scoring;

pub use classify::{Outcome, classify};
pub use puzzle::{
    DISPLAY_DATE_FORMAT, HIVE_SIZE, MIN_WORD_LEN, PuzzleDescriptor, PuzzleError, RawPuzzle,
};
pub use scoring::{
    PANGRAM_BONUS, RANKS, Rank, is_pangram, points_to_next_rank, rank, rank_index, score,
    word_score,
};
