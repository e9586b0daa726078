//! TUI rendering with ratatui
//!
//! Draws a `ViewModel`; all styling comes from the `Theme` passed in.

use super::theme::Theme;
use super::view::{HELP_TEXT, HintSummary, Overlay, ViewModel};
use crate::output::formatters::{create_progress_bar, plural};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

/// Column width used to lay out found words
const WORD_COLUMN_WIDTH: u16 = 15;

/// Minimum rows per found-words column before another column is started
const MIN_COLUMN_HEIGHT: usize = 6;

/// Main UI rendering function
pub fn ui(f: &mut Frame, view: &ViewModel, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Message and score
            Constraint::Min(8),    // Hive and found words
            Constraint::Length(3), // Rank ladder
            Constraint::Length(1), // Key help
        ])
        .split(f.area());

    render_header(f, view, theme, chunks[0]);
    render_status(f, view, theme, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(25), Constraint::Min(20)])
        .split(chunks[2]);

    render_hive(f, view, theme, main_chunks[0]);
    render_found(f, view, theme, main_chunks[1]);
    render_ranks(f, view, theme, chunks[3]);
    render_keys(f, chunks[4]);

    match view.overlay {
        Some(Overlay::Help) => render_help(f, theme),
        Some(Overlay::Hints) => {
            if let Some(ref hints) = view.hints {
                render_hints(f, hints, theme);
            }
        }
        None => {}
    }
}

fn render_header(f: &mut Frame, view: &ViewModel, theme: &Theme, area: Rect) {
    let title = format!("🐝 Spelling Bee for {} 🐝", view.date.format("%B %-d, %Y"));
    let header = Paragraph::new(title)
        .style(theme.title)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(theme.title),
        );
    f.render_widget(header, area);
}

fn render_status(f: &mut Frame, view: &ViewModel, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(area);

    let message = view.message.as_ref().map_or_else(Line::default, |m| {
        Line::from(Span::styled(m.text.clone(), theme.message(m.style)))
    });
    let message = Paragraph::new(vec![Line::default(), message]).alignment(Alignment::Center);
    f.render_widget(message, chunks[0]);

    let score = Paragraph::new(view.score.to_string())
        .style(theme.text)
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .style(theme.score),
        );
    f.render_widget(score, chunks[1]);
}

fn render_hive(f: &mut Frame, view: &ViewModel, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let letters: Vec<Span> = view
        .hive
        .iter()
        .map(|h| {
            let mut style = if h.center { theme.center } else { theme.letter };
            if h.highlighted {
                style = style.patch(theme.highlight);
            }
            Span::styled(format!("{} ", h.letter), style)
        })
        .collect();
    let hive = Paragraph::new(Line::from(letters))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(hive, chunks[0]);

    let word = view.rejected.as_ref().map_or_else(
        || {
            Line::from(
                view.input
                    .iter()
                    .map(|l| {
                        let style = if l.valid { theme.text } else { theme.invalid };
                        Span::styled(l.letter.to_string(), style)
                    })
                    .collect::<Vec<_>>(),
            )
        },
        |rejected| Line::from(Span::styled(rejected.clone(), theme.fail)),
    );
    let word = Paragraph::new(word).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double),
    );
    f.render_widget(word, chunks[1]);
}

fn render_found(f: &mut Frame, view: &ViewModel, theme: &Theme, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", plural(view.found.len(), "word")))
        .borders(Borders::ALL)
        .style(theme.letter);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let max_cols = (inner.width / WORD_COLUMN_WIDTH).max(1);
    let per_col = MIN_COLUMN_HEIGHT.max(view.found.len() / usize::from(max_cols) + 1);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..max_cols).map(|_| Constraint::Ratio(1, u32::from(max_cols))))
        .split(inner);

    for (chunk, words) in columns.iter().zip(view.found.chunks(per_col)) {
        let lines: Vec<Line> = words.iter().map(|w| Line::from(w.as_str())).collect();
        f.render_widget(Paragraph::new(lines), *chunk);
    }
}

fn render_ranks(f: &mut Frame, view: &ViewModel, theme: &Theme, area: Rect) {
    let spans: Vec<Span> = view
        .ranks
        .iter()
        .flat_map(|r| {
            let style = if r.current {
                theme.current_rank
            } else {
                theme.rank
            };
            [
                Span::styled(r.name, style),
                Span::raw("  "),
            ]
        })
        .collect();

    let ranks = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP).style(theme.rank));
    f.render_widget(ranks, area);
}

fn render_keys(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("space: Shuffle | /: Help | .: Hints | Enter: Submit | ESC: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::DIM));
    f.render_widget(help, area);
}

fn render_help(f: &mut Frame, theme: &Theme) {
    let area = centered_rect(60, 50, f.area());
    let help = Paragraph::new(HELP_TEXT)
        .style(theme.text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_type(BorderType::Thick),
        );
    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

fn render_hints(f: &mut Frame, hints: &HintSummary, theme: &Theme) {
    let area = centered_rect(70, 70, f.area());
    let bar_width = usize::from(area.width / 2);

    let pangram_note = if hints.all_pangrams_found() {
        "and that's all of them!".to_string()
    } else {
        format!(
            "you need {} more!",
            hints.pangrams_total - hints.pangrams_found
        )
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "Your current score is {} of {} total points ({}%) for a rank of {}.",
                hints.score, hints.max_score, hints.percent, hints.rank
            ),
            theme.success,
        )),
        Line::default(),
        Line::from(format!(
            "You have found {}, {pangram_note}",
            plural(hints.pangrams_found, "pangram")
        )),
        Line::default(),
        Line::from(Span::styled("Length  Frequency", theme.text)),
    ];

    let longest = hints.lengths.iter().map(|&(_, n)| n).max().unwrap_or(1);
    for &(len, count) in &hints.lengths {
        lines.push(Line::from(vec![
            Span::raw(format!("{len:>6}  ")),
            Span::styled(
                create_progress_bar(count as f64, longest as f64, bar_width),
                theme.score,
            ),
            Span::raw(format!(" {count}")),
        ]));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Hints ")
            .borders(Borders::ALL)
            .border_type(BorderType::Thick),
    );
    f.render_widget(Clear, area);
    f.render_widget(panel, area);
}

/// A rectangle centered in `area`, sized in percent
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
