//! Color theme for the board
//!
//! Passed to the renderer explicitly; there is no global theme.

use crate::game::MessageStyle;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub title: Style,
    pub letter: Style,
    pub center: Style,
    pub highlight: Style,
    pub invalid: Style,
    pub success: Style,
    pub pangram: Style,
    pub fail: Style,
    pub warning: Style,
    pub score: Style,
    pub rank: Style,
    pub current_rank: Style,
    pub text: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let sky = Color::Indexed(74);
        Self {
            title: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            letter: Style::default().fg(Color::Indexed(255)),
            center: Style::default()
                .fg(Color::Indexed(118))
                .add_modifier(Modifier::BOLD),
            highlight: Style::default().add_modifier(Modifier::UNDERLINED),
            invalid: Style::default().fg(Color::Indexed(244)),
            success: Style::default().fg(Color::Indexed(118)),
            pangram: Style::default()
                .fg(Color::Indexed(201))
                .add_modifier(Modifier::SLOW_BLINK),
            fail: Style::default().fg(Color::Indexed(160)),
            warning: Style::default().fg(Color::Yellow),
            score: Style::default().fg(sky),
            rank: Style::default().fg(sky).add_modifier(Modifier::DIM),
            current_rank: Style::default().fg(sky).add_modifier(Modifier::BOLD),
            text: Style::default().fg(Color::White),
        }
    }
}

impl Theme {
    /// No colors, only text attributes
    #[must_use]
    pub fn monochrome() -> Self {
        let plain = Style::default();
        Self {
            title: plain.add_modifier(Modifier::BOLD),
            letter: plain,
            center: plain.add_modifier(Modifier::BOLD),
            highlight: plain.add_modifier(Modifier::UNDERLINED),
            invalid: plain.add_modifier(Modifier::DIM),
            success: plain,
            pangram: plain.add_modifier(Modifier::BOLD),
            fail: plain.add_modifier(Modifier::REVERSED),
            warning: plain.add_modifier(Modifier::ITALIC),
            score: plain,
            rank: plain.add_modifier(Modifier::DIM),
            current_rank: plain.add_modifier(Modifier::BOLD),
            text: plain,
        }
    }

    #[must_use]
    pub const fn message(&self, style: MessageStyle) -> Style {
        match style {
            MessageStyle::Success => self.success,
            MessageStyle::Pangram => self.pangram,
            MessageStyle::Error => self.fail,
            MessageStyle::Warning => self.warning,
        }
    }
}
