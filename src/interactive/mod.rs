//! Interactive TUI interface

mod app;
mod rendering;
mod theme;
pub mod view;

pub use app::{App, input_event, run_tui};
pub use rendering::ui;
pub use theme::Theme;
pub use view::{HintSummary, Overlay, ViewModel, project};
