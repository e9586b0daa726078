//! Scoring and rank ladder
//!
//! Pure functions: the same `score` computes a puzzle's maximum and the live
//! score of the words found so far.

use super::puzzle::{HIVE_SIZE, MIN_WORD_LEN};
use rustc_hash::FxHashSet;

/// Bonus for a word using all seven hive letters
pub const PANGRAM_BONUS: u32 = 7;

/// A named tier unlocked at a percentage of the maximum score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    pub name: &'static str,
    pub threshold: u8,
}

impl Rank {
    const fn new(name: &'static str, threshold: u8) -> Self {
        Self { name, threshold }
    }
}

/// The rank ladder, ascending by threshold
pub const RANKS: [Rank; 10] = [
    Rank::new("Beginner", 0),
    Rank::new("Good Start", 2),
    Rank::new("Moving Up", 5),
    Rank::new("Good", 8),
    Rank::new("Solid", 15),
    Rank::new("Nice", 25),
    Rank::new("Great", 40),
    Rank::new("Amazing", 50),
    Rank::new("Genius", 70),
    Rank::new("Queen Bee", 100),
];

/// Whether a word uses seven distinct letters
///
/// Structural check, independent of any puzzle's declared pangram list.
#[must_use]
pub fn is_pangram(word: &str) -> bool {
    word.chars().collect::<FxHashSet<_>>().len() == HIVE_SIZE
}

/// Points for a single word
///
/// Four-letter words are worth 1, longer words their length, shorter words
/// nothing. Pangrams add `PANGRAM_BONUS`.
#[must_use]
pub fn word_score(word: &str) -> u32 {
    let len = word.chars().count();
    let base = match len {
        n if n < MIN_WORD_LEN => 0,
        n if n == MIN_WORD_LEN => 1,
        n => n as u32,
    };

    if is_pangram(word) {
        base + PANGRAM_BONUS
    } else {
        base
    }
}

/// Total score for a collection of words
///
/// # Examples
/// ```
/// use spelling_bee::core::score;
///
/// assert_eq!(score(["ABCD", "ABCDE", "ABCDEFG"]), 1 + 5 + 14);
/// ```
pub fn score<I>(words: I) -> u32
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words.into_iter().map(|w| word_score(w.as_ref())).sum()
}

/// Highest rank whose threshold the score reaches
///
/// A zero `max_score` cannot come from a validated puzzle; it maps to the
/// bottom rank.
#[must_use]
pub fn rank(score: u32, max_score: u32) -> Rank {
    if max_score == 0 {
        return RANKS[0];
    }

    let percent = f64::from(score) / f64::from(max_score) * 100.0;
    RANKS
        .iter()
        .rev()
        .find(|r| percent >= f64::from(r.threshold))
        .copied()
        .unwrap_or(RANKS[0])
}

/// Position of a rank in the ladder
#[must_use]
pub fn rank_index(rank: Rank) -> usize {
    RANKS.iter().position(|r| *r == rank).unwrap_or(0)
}

/// Points still needed to reach the next rank, if there is one
#[must_use]
pub fn points_to_next_rank(score: u32, max_score: u32) -> Option<u32> {
    let next = RANKS.get(rank_index(rank(score, max_score)) + 1)?;
    let needed = (f64::from(next.threshold) / 100.0 * f64::from(max_score)).ceil() as u32;
    Some(needed.saturating_sub(score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_score_by_length() {
        assert_eq!(word_score("ABC"), 0);
        assert_eq!(word_score("ABCD"), 1);
        assert_eq!(word_score("ABCDE"), 5);
        assert_eq!(word_score("AABBCCDD"), 8);
    }

    #[test]
    fn word_score_pangram_bonus() {
        assert_eq!(word_score("ABCDEFG"), 14);
        // Repeated letters still count as a pangram if all seven appear
        assert_eq!(word_score("ABCDEFGA"), 15);
        // Six distinct letters is not a pangram
        assert_eq!(word_score("ABCDEFF"), 7);
    }

    #[test]
    fn score_empty_is_zero() {
        assert_eq!(score(Vec::<String>::new()), 0);
    }

    #[test]
    fn score_order_independent() {
        let words = ["ABCD", "ABCDEFG", "ABCDE", "ABCDEF"];
        let mut reversed = words;
        reversed.reverse();
        assert_eq!(score(words), score(reversed));
        assert_eq!(score(words), 1 + 14 + 5 + 6);
    }

    #[test]
    fn rank_thresholds() {
        assert_eq!(rank(0, 100).name, "Beginner");
        assert_eq!(rank(1, 100).name, "Beginner");
        assert_eq!(rank(2, 100).name, "Good Start");
        assert_eq!(rank(49, 100).name, "Great");
        assert_eq!(rank(50, 100).name, "Amazing");
        assert_eq!(rank(99, 100).name, "Genius");
        assert_eq!(rank(100, 100).name, "Queen Bee");
    }

    #[test]
    fn rank_with_small_max_score() {
        // 5 of 19 is 26.3%
        assert_eq!(rank(5, 19), Rank::new("Nice", 25));
        assert_eq!(rank(19, 19).name, "Queen Bee");
    }

    #[test]
    fn rank_monotonic_in_score() {
        let max = 137;
        let mut last = 0;
        for s in 0..=max {
            let idx = rank_index(rank(s, max));
            assert!(idx >= last, "rank dropped at score {s}");
            last = idx;
        }
        assert_eq!(last, RANKS.len() - 1);
    }

    #[test]
    fn rank_zero_max_is_beginner() {
        assert_eq!(rank(0, 0), RANKS[0]);
    }

    #[test]
    fn ranks_ascending() {
        assert!(RANKS.windows(2).all(|w| w[0].threshold < w[1].threshold));
    }

    #[test]
    fn next_rank_distance() {
        assert_eq!(points_to_next_rank(0, 100), Some(2));
        assert_eq!(points_to_next_rank(45, 100), Some(5));
        assert_eq!(points_to_next_rank(100, 100), None);
    }
}
