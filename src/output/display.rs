//! Display functions for command results

use super::formatters::{create_progress_bar, plural};
use crate::core::{RANKS, rank_index};
use crate::game::SessionState;
use crate::interactive::HintSummary;
use colored::Colorize;

/// Print the hint summary for today's game
pub fn print_hints(hints: &HintSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "HINTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\nYour current score is {} for a rank of {}.",
        format!(
            "{} of {} total points ({}%)",
            hints.score, hints.max_score, hints.percent
        )
        .green(),
        hints.rank.bright_yellow().bold()
    );
    if let Some(points) = hints.next_rank_in {
        println!("{} more to reach the next rank.", plural(points as usize, "point"));
    }

    let pangram_note = if hints.all_pangrams_found() {
        "and that's all of them!".to_string()
    } else {
        format!(
            "you need {} more!",
            hints.pangrams_total - hints.pangrams_found
        )
    };
    println!(
        "You have found {} of {} and {}, {pangram_note}",
        plural(hints.words_found, "word"),
        hints.words_total,
        plural(hints.pangrams_found, "pangram").bold()
    );

    println!("\n📊 {}", "Answers by length:".bright_cyan().bold());
    let longest = hints.lengths.iter().map(|&(_, n)| n).max().unwrap_or(1);
    for &(len, count) in &hints.lengths {
        let bar = create_progress_bar(count as f64, longest as f64, 30);
        println!("   {len:>2}: {} {count:3}", bar.green());
    }
    println!();
}

/// Print score, rank ladder and found words
pub fn print_status(state: &SessionState) {
    let puzzle = state.puzzle();
    println!(
        "\n🐝 {} for {} 🐝",
        "Spelling Bee".yellow().bold(),
        puzzle.date().format("%B %-d, %Y")
    );

    let hive: String = puzzle
        .letters()
        .iter()
        .map(|&l| {
            if l == puzzle.center() {
                l.to_string().bright_green().bold().to_string()
            } else {
                l.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    println!("Hive:  {hive}");
    println!(
        "Score: {} of {}",
        state.score().to_string().bright_yellow().bold(),
        puzzle.max_score()
    );

    let current = rank_index(state.rank());
    let ladder: Vec<String> = RANKS
        .iter()
        .enumerate()
        .map(|(i, r)| {
            if i == current {
                r.name.bright_cyan().bold().to_string()
            } else {
                r.name.dimmed().to_string()
            }
        })
        .collect();
    println!("Rank:  {}", ladder.join(" › "));

    println!(
        "\n{}:",
        plural(state.found_words().len(), "word").bright_cyan()
    );
    for word in state.found_words() {
        if puzzle.is_pangram(word) {
            println!("   {}", word.magenta().bold());
        } else {
            println!("   {word}");
        }
    }
    println!();
}
