//! Snapshot persistence
//!
//! A snapshot is a pretty-printed JSON document holding everything needed
//! to resume a game: configuration, secret, guess history, and the
//! won/surrendered flags. Loading restores the state verbatim; nothing is
//! recomputed, but the parts are cross-checked so a structurally valid
//! document that cannot describe a real game is rejected.
//!
//! Field layout (stable):
//!
//! ```json
//! {
//!   "code_length": 4,
//!   "allowed_colors": "rygbmc",
//!   "max_attempts": 9,
//!   "history": [
//!     { "guess": "rbgr", "exact": 2, "partial": 2, "attempt": 1 }
//!   ],
//!   "won": false,
//!   "secret": "rrgb",
//!   "surrendered": false
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use super::state::{Game, GuessRecord};
use crate::core::{Alphabet, Code};

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    code_length: usize,
    allowed_colors: String,
    max_attempts: usize,
    history: Vec<GuessRecord>,
    won: bool,
    secret: String,
    surrendered: bool,
}

/// Error type for snapshot save/load
#[derive(Debug)]
pub enum SnapshotError {
    /// File could not be read or written
    Io(io::Error),
    /// Content is not a well-formed snapshot document
    Parse(serde_json::Error),
    /// Document parsed but describes an unusable game
    Invalid(String),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Snapshot I/O error: {err}"),
            Self::Parse(err) => write!(f, "Malformed snapshot: {err}"),
            Self::Invalid(msg) => write!(f, "Unusable snapshot: {msg}"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for SnapshotError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<&Game> for Snapshot {
    fn from(game: &Game) -> Self {
        Self {
            code_length: game.code_length(),
            allowed_colors: game.alphabet().text().to_string(),
            max_attempts: game.max_attempts(),
            history: game.history().to_vec(),
            won: game.is_won(),
            secret: game.secret().text().to_string(),
            surrendered: game.is_surrendered(),
        }
    }
}

impl Snapshot {
    /// Cross-check the parts and reassemble a game
    fn into_game(self) -> Result<Game, SnapshotError> {
        if self.code_length == 0 {
            return Err(SnapshotError::Invalid("code length is zero".to_string()));
        }
        if self.max_attempts == 0 {
            return Err(SnapshotError::Invalid("max attempts is zero".to_string()));
        }

        let alphabet = Alphabet::new(&self.allowed_colors)
            .map_err(|err| SnapshotError::Invalid(format!("bad alphabet: {err}")))?;

        let secret = Code::parse(&self.secret, self.code_length, &alphabet)
            .map_err(|err| SnapshotError::Invalid(format!("bad secret: {err}")))?;

        if self.history.len() > self.max_attempts {
            return Err(SnapshotError::Invalid(format!(
                "history has {} entries but max attempts is {}",
                self.history.len(),
                self.max_attempts
            )));
        }

        for (i, record) in self.history.iter().enumerate() {
            Code::parse(&record.guess, self.code_length, &alphabet).map_err(|err| {
                SnapshotError::Invalid(format!("bad guess in history entry {}: {err}", i + 1))
            })?;
            if record.exact + record.partial > self.code_length {
                return Err(SnapshotError::Invalid(format!(
                    "history entry {} counts exceed the code length",
                    i + 1
                )));
            }
            if record.attempt != i + 1 {
                return Err(SnapshotError::Invalid(format!(
                    "history entry {} has attempt number {}",
                    i + 1,
                    record.attempt
                )));
            }
        }

        if self.won {
            let solved = self
                .history
                .last()
                .is_some_and(|record| record.exact == self.code_length);
            if !solved {
                return Err(SnapshotError::Invalid(
                    "won flag set but the last guess did not match the secret".to_string(),
                ));
            }
        }

        Ok(Game::from_parts(
            self.code_length,
            alphabet,
            self.max_attempts,
            secret,
            self.history,
            self.won,
            self.surrendered,
        ))
    }
}

impl Game {
    /// Serialize the full game state to a snapshot document
    ///
    /// # Errors
    /// Returns `SnapshotError::Parse` if serialization fails.
    pub fn to_snapshot_string(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(&Snapshot::from(self))?)
    }

    /// Reconstruct a game from a snapshot document
    ///
    /// # Errors
    /// Returns `SnapshotError::Parse` if the content is malformed, or
    /// `SnapshotError::Invalid` if the parsed state is unusable.
    pub fn from_snapshot_str(content: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(content)?;
        snapshot.into_game()
    }

    /// Save the game to a snapshot file
    ///
    /// # Errors
    /// Returns `SnapshotError::Io` if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SnapshotError> {
        let content = self.to_snapshot_string()?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load a game from a snapshot file
    ///
    /// The restored game resumes exactly where it left off: secret,
    /// history, and flags come from the file, never from re-derivation.
    ///
    /// # Errors
    /// Returns `SnapshotError::Io` if the file cannot be read,
    /// `SnapshotError::Parse` if the content is malformed, or
    /// `SnapshotError::Invalid` if the parsed state is unusable.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(path)?;
        Self::from_snapshot_str(&content)
    }
}
