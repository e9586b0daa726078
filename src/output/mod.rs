//! Terminal output formatting
//!
//! Plain (non-TUI) printing for the `hints` and `status` commands.

pub mod display;
pub mod formatters;

pub use display::{print_hints, print_status};
