//! Spelling Bee
//!
//! A terminal Spelling Bee: build words from a seven-letter hive, climb the
//! rank ladder, and pick up where you left off later the same day.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rand::{SeedableRng, rngs::StdRng};
//! use spelling_bee::core::PuzzleDescriptor;
//! use spelling_bee::game::{Game, InputEvent};
//! use spelling_bee::storage::MemoryStore;
//!
//! let puzzle = PuzzleDescriptor::new(
//!     NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
//!     'a',
//!     &['a', 'b', 'c', 'd', 'e', 'f', 'g'],
//!     vec!["abcde".into(), "abcdefg".into()],
//!     vec!["abcdefg".into()],
//! )
//! .unwrap();
//!
//! let mut game = Game::start(puzzle, MemoryStore::new(), StdRng::seed_from_u64(1)).unwrap();
//! for c in "abcde".chars() {
//!     game.handle(InputEvent::Letter(c));
//! }
//! game.handle(InputEvent::Submit);
//! assert_eq!(game.state().score(), 5);
//! ```

// Core domain types
pub mod core;

// Session state and input handling
pub mod game;

// Progress persistence
pub mod storage;

// Daily puzzle sources
pub mod provider;

// Runtime configuration
pub mod config;

// Log setup
pub mod logging;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
