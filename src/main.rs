//! Wordle - CLI
//!
//! Terminal Wordle with TUI and line modes, plus persisted statistics.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_game::{
    commands::{evaluate_pair, run_simple},
    core::Word,
    game::{FileStore, Session, StatsTracker},
    output::{print_evaluation, print_stats},
    wordlists::{ANSWERS, RandomPicker, SolutionSource, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Solution words: 'answers' (default, embedded list) or path to file
    #[arg(short = 'w', long, global = true, default_value = "answers")]
    wordlist: String,

    /// Directory holding the stats record (default: per-user data directory)
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<PathBuf>,

    /// Seed for reproducible solution choice
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against a solution and print the feedback
    Evaluate {
        /// The guessed word
        guess: String,

        /// The solution word
        solution: String,
    },

    /// Show play statistics
    Stats {
        /// Reset all statistics to zero
        #[arg(long)]
        reset: bool,
    },
}

/// Load the solution list based on the -w flag
fn load_solutions(wordlist_mode: &str) -> Result<Vec<Word>> {
    use wordle_game::wordlists::loader::load_from_file;

    match wordlist_mode {
        "answers" => Ok(words_from_slice(ANSWERS)),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}")),
    }
}

fn open_store(data_dir: Option<PathBuf>) -> Result<FileStore> {
    match data_dir {
        Some(dir) => Ok(FileStore::new(dir)),
        None => FileStore::default_location(),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Evaluate { guess, solution } => {
            let scored = evaluate_pair(&guess, &solution)?;
            print_evaluation(&scored);
            Ok(())
        }
        Commands::Stats { reset } => {
            let store = open_store(cli.data_dir)?;
            log::debug!("stats directory: {}", store.dir().display());
            let mut tracker = StatsTracker::load(store);
            if reset {
                tracker.reset()?;
                println!("Statistics reset.");
            }
            print_stats(tracker.stats());
            Ok(())
        }
        Commands::Play => {
            let (session, picker) = start_session(&cli.wordlist, cli.data_dir, cli.seed)?;
            run_play_command(session, picker)
        }
        Commands::Simple => {
            let (mut session, mut picker) =
                start_session(&cli.wordlist, cli.data_dir, cli.seed)?;
            run_simple(&mut session, &mut picker)
        }
    }
}

fn start_session(
    wordlist: &str,
    data_dir: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<(Session<FileStore>, RandomPicker)> {
    let words = load_solutions(wordlist)?;
    log::info!("loaded {} solution words", words.len());

    let mut picker = match seed {
        Some(seed) => RandomPicker::seeded(words, seed)?,
        None => RandomPicker::new(words)?,
    };

    let store = open_store(data_dir)?;
    log::debug!("stats directory: {}", store.dir().display());
    let tracker = StatsTracker::load(store);

    let solution = picker.pick_random_word();
    Ok((Session::new(solution, tracker), picker))
}

fn run_play_command(session: Session<FileStore>, picker: RandomPicker) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(session, picker);
    run_tui(app)
}
