//! Core domain types for the code-breaking game
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear algebraic properties.

mod alphabet;
mod code;
mod score;

pub use alphabet::{Alphabet, AlphabetError};
pub use code::{Code, CodeError};
pub use score::{Marker, Score, ScoreError, marker_row};
