//! Runtime configuration
//!
//! Built once from the command line and handed to the parts that need it.

use crate::interactive::Theme;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

/// Default database file, created in the working directory
pub const DEFAULT_DB_PATH: &str = "nytsb.db";

/// Default log file; the TUI owns stdout so logs go to disk
pub const DEFAULT_LOG_PATH: &str = "spelling_bee.log";

/// Default pause after a rejected word
pub const DEFAULT_REJECT_PAUSE_MS: u64 = 600;

#[derive(Debug, Clone)]
pub struct Config {
    /// Progress database; `None` keeps progress in memory only
    pub db_path: Option<PathBuf>,
    /// Load the puzzle from this file instead of the network
    pub puzzle_file: Option<PathBuf>,
    pub puzzle_url: String,
    pub log_file: PathBuf,
    pub log_level: Level,
    /// Fixed seed for shuffling and message choice
    pub seed: Option<u64>,
    pub theme: Theme,
    pub reject_pause: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: Some(PathBuf::from(DEFAULT_DB_PATH)),
            puzzle_file: None,
            puzzle_url: crate::provider::DEFAULT_URL.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_PATH),
            log_level: Level::INFO,
            seed: None,
            theme: Theme::default(),
            reject_pause: Duration::from_millis(DEFAULT_REJECT_PAUSE_MS),
        }
    }
}

impl Config {
    /// Random source for the session, seeded if a seed was given
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn seeded_rng_is_repeatable() {
        let config = Config {
            seed: Some(42),
            ..Config::default()
        };
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.db_path, Some(PathBuf::from(DEFAULT_DB_PATH)));
        assert_eq!(config.reject_pause, Duration::from_millis(600));
        assert_eq!(config.log_level, Level::INFO);
    }
}
