//! Display functions for command results

use super::formatters::{colored_keyboard, colored_row, create_progress_bar};
use crate::core::{EvaluatedGuess, MAX_GUESSES};
use crate::game::{Game, GamePhase, Stats};
use colored::Colorize;

/// Print the board so far and the keyboard hints
pub fn print_board(game: &Game) {
    println!();
    for guess in game.board().filled() {
        println!("  {}", colored_row(guess));
    }
    let remaining = MAX_GUESSES - game.board().len();
    for _ in 0..remaining {
        println!("  {}", " _ ".repeat(5).bright_black());
    }

    println!();
    for row in colored_keyboard(game.key_statuses()) {
        println!("  {row}");
    }
    println!();
}

/// Print the end-of-round banner
pub fn print_round_result(game: &Game) {
    match game.phase() {
        GamePhase::Won => {
            let used = game.board().len();
            println!(
                "{}",
                format!(
                    "🎉 You won in {used} {}!",
                    if used == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
        }
        GamePhase::Lost => {
            println!(
                "{} {}",
                "💀 The word was".red().bold(),
                game.solution().text().bright_yellow().bold()
            );
        }
        GamePhase::Playing => {}
    }

    println!();
    for guess in game.board().filled() {
        println!("  {}", guess.to_emoji());
    }
}

/// Print the persisted play statistics
pub fn print_stats(stats: &Stats) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("   Played:          {}", stats.games_played);
    println!("   Wins:            {}", stats.games_won);
    println!(
        "   Win rate:        [{}] {}",
        create_progress_bar(stats.win_rate(), 100.0, 20).green(),
        format!("{:.0}%", stats.win_rate()).bright_yellow()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);
}

/// Print one guess scored against a solution
pub fn print_evaluation(guess: &EvaluatedGuess) {
    println!("\n  {}  {}", colored_row(guess), guess.to_emoji());
    for result in guess.iter() {
        println!("   {}  {}", result.letter, result.status);
    }
}
