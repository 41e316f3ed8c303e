//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: one guess per line.

use crate::game::{GamePhase, KeyValueStore, Session, Submission};
use crate::output::{print_board, print_round_result, print_stats};
use crate::wordlists::SolutionSource;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Run the line-mode game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input fails or the stats cannot be saved.
pub fn run_simple<S: KeyValueStore>(
    session: &mut Session<S>,
    source: &mut impl SolutionSource,
) -> Result<()> {
    let stdin = io::stdin();
    play_lines(session, source, &mut stdin.lock())
}

/// Drive the game from any line source
///
/// Split out from [`run_simple`] so scripted input can be fed in.
///
/// # Errors
///
/// Returns an error if reading input fails or the stats cannot be saved.
pub fn play_lines<S: KeyValueStore>(
    session: &mut Session<S>,
    source: &mut impl SolutionSource,
    input: &mut impl BufRead,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the five-letter word in six tries.");
    println!("Commands: 'quit' to exit, 'stats' to show statistics\n");

    loop {
        if session.game().phase() == GamePhase::Playing {
            print_board(session.game());
            let turn = session.game().board().len() + 1;

            let Some(line) = read_line(input, &format!("Guess {turn}"))? else {
                return Ok(());
            };

            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "stats" => {
                    print_stats(session.tracker().stats());
                    continue;
                }
                _ => {}
            }

            if let Submission::Rejected(err) = session.submit_guess(&line)? {
                println!("❌ {err}");
            }
            continue;
        }

        print_board(session.game());
        print_round_result(session.game());
        print_stats(session.tracker().stats());
        println!();

        match read_line(input, "Play again? (yes/no)")?
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => {
                session.new_round(source.pick_random_word());
                println!("\n🔄 New game started!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Prompt and read one trimmed line, `None` at end of input
fn read_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
