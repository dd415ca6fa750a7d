//! Mastermind - CLI
//!
//! Classic code-breaking game for the terminal with save/resume support.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{commands::run_play, core::Alphabet, game::Game};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Classic Mastermind code-breaking game for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new game (default)
    Play {
        /// Length of the secret code
        #[arg(short, long, default_value_t = Game::DEFAULT_CODE_LENGTH)]
        length: usize,

        /// Allowed color symbols, one distinct letter per color
        #[arg(short, long, default_value = Alphabet::DEFAULT_SYMBOLS)]
        colors: String,

        /// Maximum number of attempts
        #[arg(short, long, default_value_t = Game::DEFAULT_MAX_ATTEMPTS)]
        attempts: usize,

        /// Seed for a reproducible secret
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Resume a saved game from a snapshot file
    Resume {
        /// Path to the snapshot file
        path: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to a fresh game with the standard setup if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        length: Game::DEFAULT_CODE_LENGTH,
        colors: Alphabet::DEFAULT_SYMBOLS.to_string(),
        attempts: Game::DEFAULT_MAX_ATTEMPTS,
        seed: None,
    });

    let game = match command {
        Commands::Play {
            length,
            colors,
            attempts,
            seed,
        } => {
            let alphabet = Alphabet::new(&colors)?;
            match seed {
                Some(seed) => Game::with_seed(length, alphabet, attempts, seed)?,
                None => Game::new_random(length, alphabet, attempts)?,
            }
        }
        Commands::Resume { path } => Game::load(&path)?,
    };

    run_play(game).map_err(|e| anyhow::anyhow!(e))
}
