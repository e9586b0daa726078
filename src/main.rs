//! Spelling Bee - CLI
//!
//! Plays today's Spelling Bee in the terminal, saving progress as you go.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use spelling_bee::{
    config::{self, Config},
    core::PuzzleDescriptor,
    game::Game,
    interactive::{App, HintSummary, Theme, run_tui},
    logging,
    output::{print_hints, print_status},
    provider::{FileProvider, NytProvider, PuzzleProvider},
    storage::{GameStore, MemoryStore, SqliteStore},
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{Level, error, info};

#[derive(Parser)]
#[command(
    name = "spelling_bee",
    about = "Today's Spelling Bee in your terminal, with resumable progress",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Progress database file
    #[arg(long, global = true, default_value = config::DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Do not save progress between runs
    #[arg(long, global = true)]
    no_save: bool,

    /// Load the puzzle from a JSON file instead of the web
    #[arg(short, long, global = true)]
    puzzle: Option<PathBuf>,

    /// Puzzle page to fetch
    #[arg(long, global = true, default_value = spelling_bee::provider::DEFAULT_URL)]
    puzzle_url: String,

    /// Log file
    #[arg(long, global = true, default_value = config::DEFAULT_LOG_PATH)]
    log_file: PathBuf,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info")]
    log_level: Level,

    /// Seed for hive shuffling (repeatable games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Disable colors in the board
    #[arg(long, global = true)]
    no_color: bool,

    /// Milliseconds a rejected word stays on screen
    #[arg(long, global = true, default_value_t = config::DEFAULT_REJECT_PAUSE_MS)]
    pause_ms: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play,

    /// Print hints for today's game
    Hints,

    /// Print score, rank and found words
    Status,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            db_path: (!self.no_save).then(|| self.db.clone()),
            puzzle_file: self.puzzle.clone(),
            puzzle_url: self.puzzle_url.clone(),
            log_file: self.log_file.clone(),
            log_level: self.log_level,
            seed: self.seed,
            theme: if self.no_color {
                Theme::monochrome()
            } else {
                Theme::default()
            },
            reject_pause: Duration::from_millis(self.pause_ms),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    if let Err(err) = logging::init(&config.log_file, config.log_level) {
        eprintln!("warning: logging disabled: {err:#}");
    }

    let puzzle = load_puzzle(&config).inspect_err(|err| error!("{err:#}"))?;
    let store = open_store(&config)?;
    let game = Game::start(puzzle, store, config.rng()).context("failed to load saved progress")?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(game, config.theme, config.reject_pause)),
        Commands::Hints => {
            print_hints(&HintSummary::from_state(game.state()));
            Ok(())
        }
        Commands::Status => {
            print_status(game.state());
            Ok(())
        }
    }
}

fn load_puzzle(config: &Config) -> Result<PuzzleDescriptor> {
    match config.puzzle_file {
        Some(ref path) => fetch_with_spinner(&FileProvider::new(path)),
        None => fetch_with_spinner(&NytProvider::new(config.puzzle_url.clone())),
    }
}

fn fetch_with_spinner(provider: &dyn PuzzleProvider) -> Result<PuzzleDescriptor> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.yellow} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Loading today's puzzle from {}", provider.source()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = provider.fetch();
    spinner.finish_and_clear();

    result.with_context(|| format!("could not load today's puzzle from {}", provider.source()))
}

fn open_store(config: &Config) -> Result<Box<dyn GameStore>> {
    match config.db_path {
        Some(ref path) => {
            info!(path = %path.display(), "using progress database");
            let store = SqliteStore::open(path)
                .with_context(|| format!("cannot open progress database {}", path.display()))?;
            Ok(Box::new(store))
        }
        None => {
            info!("progress will not be saved");
            Ok(Box::new(MemoryStore::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn log_level_is_parsed() {
        let cli = Cli::try_parse_from(["spelling_bee", "--log-level", "debug", "status"]).unwrap();
        assert_eq!(cli.config().log_level, Level::DEBUG);

        let cli = Cli::try_parse_from(["spelling_bee"]).unwrap();
        assert_eq!(cli.config().log_level, Level::INFO);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let result = Cli::try_parse_from(["spelling_bee", "--log-level", "loud"]);
        assert!(result.is_err());
    }
}
