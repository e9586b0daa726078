//! Render projection
//!
//! A `ViewModel` is derived from the session on every frame. Nothing in it is
//! stored between frames, so highlighting can never drift from the input.

use crate::core::{RANKS, points_to_next_rank};
use crate::game::{Message, SessionState};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Help overlay text
pub const HELP_TEXT: &str = "Create words using letters from the hive. Words must contain at least 4 \
letters and must include the center letter. Letters can be used more than once.\n\n\
At any time, you can press space to shuffle your hive, / to view this help text, \
. to view hints for this game, or ESC to quit. The game will remember where you \
left off today.\n\n\
Press any key to continue.";

/// Popup drawn over the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Help,
    Hints,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiveLetter {
    pub letter: char,
    pub center: bool,
    /// Letter appears in the word being typed
    pub highlighted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLetter {
    pub letter: char,
    /// Letter belongs to the hive
    pub valid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankRow {
    pub name: &'static str,
    pub threshold: u8,
    pub current: bool,
}

/// Progress summary for the hint overlay and the `hints` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintSummary {
    pub score: u32,
    pub max_score: u32,
    pub percent: u32,
    pub rank: &'static str,
    pub next_rank_in: Option<u32>,
    pub words_found: usize,
    pub words_total: usize,
    pub pangrams_found: usize,
    pub pangrams_total: usize,
    /// (word length, number of answers) ascending by length
    pub lengths: Vec<(usize, usize)>,
}

impl HintSummary {
    #[must_use]
    pub fn from_state(state: &SessionState) -> Self {
        let puzzle = state.puzzle();
        let score = state.score();
        let max_score = puzzle.max_score();

        let mut lengths: BTreeMap<usize, usize> = BTreeMap::new();
        for answer in puzzle.answers() {
            *lengths.entry(answer.chars().count()).or_default() += 1;
        }

        Self {
            score,
            max_score,
            percent: (f64::from(score) / f64::from(max_score.max(1)) * 100.0) as u32,
            rank: state.rank().name,
            next_rank_in: points_to_next_rank(score, max_score),
            words_found: state.found_words().len(),
            words_total: puzzle.answers().len(),
            pangrams_found: state.pangrams_found(),
            pangrams_total: puzzle.pangram_count(),
            lengths: lengths.into_iter().collect(),
        }
    }

    #[must_use]
    pub const fn all_pangrams_found(&self) -> bool {
        self.pangrams_found >= self.pangrams_total
    }
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub date: NaiveDate,
    pub hive: Vec<HiveLetter>,
    pub input: Vec<InputLetter>,
    /// Word just rejected, shown in place of the input during the pause
    pub rejected: Option<String>,
    pub found: Vec<String>,
    pub score: u32,
    pub ranks: Vec<RankRow>,
    pub message: Option<Message>,
    pub overlay: Option<Overlay>,
    pub hints: Option<HintSummary>,
}

/// Project the session into a view model
#[must_use]
pub fn project(state: &SessionState, overlay: Option<Overlay>) -> ViewModel {
    let puzzle = state.puzzle();
    let highlighted = state.highlighted();
    let current = state.rank();

    ViewModel {
        date: puzzle.date(),
        hive: state
            .hive()
            .iter()
            .map(|&letter| HiveLetter {
                letter,
                center: letter == puzzle.center(),
                highlighted: highlighted.contains(&letter),
            })
            .collect(),
        input: state
            .input()
            .chars()
            .map(|letter| InputLetter {
                letter,
                valid: puzzle.is_valid_letter(letter),
            })
            .collect(),
        rejected: None,
        found: state.found_words().to_vec(),
        score: state.score(),
        ranks: RANKS
            .iter()
            .map(|r| RankRow {
                name: r.name,
                threshold: r.threshold,
                current: *r == current,
            })
            .collect(),
        message: state.message().cloned(),
        overlay,
        hints: (overlay == Some(Overlay::Hints)).then(|| HintSummary::from_state(state)),
    }
}

impl ViewModel {
    /// Show `word` as the rejected input
    #[must_use]
    pub fn with_rejected(mut self, word: String) -> Self {
        self.rejected = Some(word);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PuzzleDescriptor;

    fn state() -> SessionState {
        let puzzle = PuzzleDescriptor::new(
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            'a',
            &['a', 'b', 'c', 'd', 'e', 'f', 'g'],
            vec!["abcde".into(), "abcdefg".into(), "abba".into()],
            vec!["abcdefg".into()],
        )
        .unwrap();
        SessionState::new(puzzle)
    }

    #[test]
    fn project_marks_center_and_highlights() {
        let mut state = state();
        state.push_letter('b');
        state.push_letter('x');

        let view = project(&state, None);
        assert_eq!(view.hive.len(), 7);
        assert_eq!(view.hive.iter().filter(|h| h.center).count(), 1);
        let lit: Vec<char> = view
            .hive
            .iter()
            .filter(|h| h.highlighted)
            .map(|h| h.letter)
            .collect();
        assert_eq!(lit, vec!['B']);

        assert_eq!(
            view.input,
            vec![
                InputLetter {
                    letter: 'B',
                    valid: true
                },
                InputLetter {
                    letter: 'X',
                    valid: false
                },
            ]
        );
        assert!(view.hints.is_none());
    }

    #[test]
    fn project_marks_current_rank() {
        let mut state = state();
        state.accept("ABCDE".into());
        let view = project(&state, None);

        let current: Vec<&str> = view
            .ranks
            .iter()
            .filter(|r| r.current)
            .map(|r| r.name)
            .collect();
        // 5 of 20 is 25%
        assert_eq!(current, vec!["Nice"]);
        assert_eq!(view.score, 5);
        assert_eq!(view.found, vec!["ABCDE"]);
    }

    #[test]
    fn hints_summary() {
        let mut state = state();
        state.accept("ABCDEFG".into());

        let view = project(&state, Some(Overlay::Hints));
        let hints = view.hints.unwrap();
        assert_eq!(hints.score, 14);
        assert_eq!(hints.max_score, 20);
        assert_eq!(hints.percent, 70);
        assert_eq!(hints.rank, "Genius");
        assert_eq!(hints.next_rank_in, Some(6));
        assert_eq!(hints.lengths, vec![(4, 1), (5, 1), (7, 1)]);
        assert!(hints.all_pangrams_found());
        assert_eq!(hints.words_found, 1);
        assert_eq!(hints.words_total, 3);
    }

    #[test]
    fn with_rejected_sets_word() {
        let view = project(&state(), None).with_rejected("XYZ".into());
        assert_eq!(view.rejected.as_deref(), Some("XYZ"));
    }
}
