//! Mastermind
//!
//! A single-player code-breaking game: a hidden sequence of colored pegs is
//! generated, and the player submits guesses against it, receiving
//! exact/partial match feedback until the code is found or attempts run out.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::{core::Alphabet, game::Game};
//!
//! // Seeded game for a reproducible secret
//! let mut game = Game::with_seed(4, Alphabet::default(), 9, 42).unwrap();
//!
//! let record = game.make_guess("rgby").unwrap();
//! println!("{} exact, {} partial", record.exact, record.partial);
//! ```

// Core domain types
pub mod core;

// Game state machine and snapshot persistence
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
