//! TUI application loop

use super::theme::Theme;
use super::view::{Overlay, project};
use crate::game::{Game, InputEvent, Response};
use crate::storage::GameStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::thread;
use std::time::Duration;
use tracing::info;

/// Application state
pub struct App<S, R> {
    pub game: Game<S, R>,
    pub overlay: Option<Overlay>,
    pub theme: Theme,
    /// How long a rejected word stays on screen before input resumes
    pub reject_pause: Duration,
    pub should_quit: bool,
}

impl<S: GameStore, R: Rng> App<S, R> {
    #[must_use]
    pub const fn new(game: Game<S, R>, theme: Theme, reject_pause: Duration) -> Self {
        Self {
            game,
            overlay: None,
            theme,
            reject_pause,
            should_quit: false,
        }
    }

    /// Apply one event; returns a word to flash as rejected, if any
    pub fn on_event(&mut self, event: InputEvent) -> Option<String> {
        // Any key dismisses an open overlay and is then handled as usual
        self.overlay = None;

        match self.game.handle(event) {
            Response::ShowHelp => self.overlay = Some(Overlay::Help),
            Response::ShowHints => self.overlay = Some(Overlay::Hints),
            Response::Quit => self.should_quit = true,
            Response::Rejected { word, .. } => return Some(word),
            Response::Redraw | Response::Accepted { .. } => {}
        }
        None
    }
}

/// Translate a terminal key press into a game event
#[must_use]
pub fn input_event(key: KeyEvent) -> InputEvent {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputEvent::Quit,
        KeyCode::Esc => InputEvent::Quit,
        KeyCode::Enter => InputEvent::Submit,
        KeyCode::Backspace => InputEvent::Backspace,
        KeyCode::Char(c) => InputEvent::from_char(c),
        _ => InputEvent::Other,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: GameStore, R: Rng>(app: App<S, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: GameStore, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<S, R>,
) -> Result<()> {
    loop {
        let view = project(app.game.state(), app.overlay);
        terminal.draw(|f| super::rendering::ui(f, &view, &app.theme))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if let Some(rejected) = app.on_event(input_event(key)) {
                let view = project(app.game.state(), None).with_rejected(rejected);
                terminal.draw(|f| super::rendering::ui(f, &view, &app.theme))?;
                thread::sleep(app.reject_pause);
            }
        }

        if app.should_quit {
            break;
        }
    }

    let state = app.game.state();
    info!(
        score = state.score(),
        rank = state.rank().name,
        found = state.found_words().len(),
        "session ended"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PuzzleDescriptor;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app() -> App<MemoryStore, StdRng> {
        let puzzle = PuzzleDescriptor::new(
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            'a',
            &['a', 'b', 'c', 'd', 'e', 'f', 'g'],
            vec!["abcde".into()],
            vec![],
        )
        .unwrap();
        let game = Game::start(puzzle, MemoryStore::new(), StdRng::seed_from_u64(5)).unwrap();
        App::new(game, Theme::default(), Duration::ZERO)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn key_translation() {
        assert_eq!(input_event(key(KeyCode::Esc)), InputEvent::Quit);
        assert_eq!(input_event(key(KeyCode::Enter)), InputEvent::Submit);
        assert_eq!(input_event(key(KeyCode::Backspace)), InputEvent::Backspace);
        assert_eq!(input_event(key(KeyCode::Char(' '))), InputEvent::Shuffle);
        assert_eq!(input_event(key(KeyCode::Char('x'))), InputEvent::Letter('x'));
        assert_eq!(input_event(key(KeyCode::Left)), InputEvent::Other);
        assert_eq!(
            input_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputEvent::Quit
        );
    }

    #[test]
    fn overlay_dismissed_by_next_key() {
        let mut app = app();
        app.on_event(InputEvent::HelpToggle);
        assert_eq!(app.overlay, Some(Overlay::Help));

        app.on_event(InputEvent::Letter('a'));
        assert_eq!(app.overlay, None);
        assert_eq!(app.game.state().input(), "A");

        app.on_event(InputEvent::HintToggle);
        assert_eq!(app.overlay, Some(Overlay::Hints));
    }

    #[test]
    fn rejection_returns_word_and_quit_stops() {
        let mut app = app();
        for c in "abc".chars() {
            app.on_event(InputEvent::Letter(c));
        }
        assert_eq!(app.on_event(InputEvent::Submit), Some("ABC".to_string()));

        assert!(!app.should_quit);
        app.on_event(InputEvent::Quit);
        assert!(app.should_quit);
    }
}
