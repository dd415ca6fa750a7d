//! Game state machine
//!
//! A [`Game`] holds the immutable configuration (code length, alphabet, max
//! attempts), the hidden secret, and an append-only history of guess
//! feedback plus the won/surrendered flags. The only mutating operations
//! are [`Game::make_guess`] and [`Game::surrender`]; everything else is a
//! read. Once a game is over no further guesses are accepted.

use rand::{Rng, SeedableRng as _, rngs::StdRng};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Alphabet, Code, CodeError, Marker, Score, marker_row};

/// Feedback for one submitted guess
///
/// `attempt` is 1-based and equals the record's position in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub guess: String,
    pub exact: usize,
    pub partial: usize,
    pub attempt: usize,
}

/// Where a game stands, derived from the flags and history length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Surrendered,
    Exhausted,
}

/// Error type for game operations
#[derive(Debug)]
pub enum GameError {
    /// Configured code length was zero
    ZeroCodeLength,
    /// Configured maximum attempts was zero
    ZeroMaxAttempts,
    /// Guess submitted after the game ended
    Over,
    /// Secret requested before the game ended, without force
    NotOver,
    /// Guess failed normalization or validation
    InvalidGuess(CodeError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCodeLength => write!(f, "Code length must be at least 1"),
            Self::ZeroMaxAttempts => write!(f, "Maximum attempts must be at least 1"),
            Self::Over => write!(f, "The game is already over"),
            Self::NotOver => write!(f, "The game is not over yet"),
            Self::InvalidGuess(err) => write!(f, "Invalid guess: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess(err) => Some(err),
            _ => None,
        }
    }
}

/// A single code-breaking game
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    code_length: usize,
    alphabet: Alphabet,
    max_attempts: usize,
    secret: Code,
    history: Vec<GuessRecord>,
    won: bool,
    surrendered: bool,
}

impl Game {
    /// Default length of the secret code
    pub const DEFAULT_CODE_LENGTH: usize = 4;

    /// Default maximum number of attempts
    pub const DEFAULT_MAX_ATTEMPTS: usize = 9;

    /// Start a game with a secret drawn from the OS random source
    ///
    /// The secret is sampled uniformly per position, with replacement, so
    /// repeated symbols are possible (classic Mastermind rules).
    ///
    /// # Errors
    /// Returns `GameError` if `code_length` or `max_attempts` is zero.
    pub fn new_random(
        code_length: usize,
        alphabet: Alphabet,
        max_attempts: usize,
    ) -> Result<Self, GameError> {
        let mut rng = StdRng::from_os_rng();
        Self::from_rng(code_length, alphabet, max_attempts, &mut rng)
    }

    /// Start a game with a reproducible secret
    ///
    /// The same seed and configuration always yield the same secret.
    ///
    /// # Errors
    /// Returns `GameError` if `code_length` or `max_attempts` is zero.
    ///
    /// # Examples
    /// ```
    /// use mastermind::{core::Alphabet, game::Game};
    ///
    /// let a = Game::with_seed(4, Alphabet::default(), 9, 7).unwrap();
    /// let b = Game::with_seed(4, Alphabet::default(), 9, 7).unwrap();
    /// assert_eq!(
    ///     a.reveal_secret(true).unwrap(),
    ///     b.reveal_secret(true).unwrap()
    /// );
    /// ```
    pub fn with_seed(
        code_length: usize,
        alphabet: Alphabet,
        max_attempts: usize,
        seed: u64,
    ) -> Result<Self, GameError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::from_rng(code_length, alphabet, max_attempts, &mut rng)
    }

    fn from_rng(
        code_length: usize,
        alphabet: Alphabet,
        max_attempts: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, GameError> {
        if code_length == 0 {
            return Err(GameError::ZeroCodeLength);
        }
        if max_attempts == 0 {
            return Err(GameError::ZeroMaxAttempts);
        }

        let symbols = (0..code_length)
            .map(|_| alphabet.symbols()[rng.random_range(0..alphabet.len())])
            .collect();
        let secret = Code::from_symbols(symbols);

        Ok(Self {
            code_length,
            alphabet,
            max_attempts,
            secret,
            history: Vec::new(),
            won: false,
            surrendered: false,
        })
    }

    /// Reassemble a game from persisted state
    ///
    /// The snapshot layer validates the parts before calling this; nothing
    /// is recomputed here.
    pub(crate) fn from_parts(
        code_length: usize,
        alphabet: Alphabet,
        max_attempts: usize,
        secret: Code,
        history: Vec<GuessRecord>,
        won: bool,
        surrendered: bool,
    ) -> Self {
        Self {
            code_length,
            alphabet,
            max_attempts,
            secret,
            history,
            won,
            surrendered,
        }
    }

    /// Submit a guess and receive its feedback
    ///
    /// The raw input is normalized (whitespace stripped, lower-cased) and
    /// validated against the configuration before anything is mutated; a
    /// rejected guess costs no attempt.
    ///
    /// # Errors
    /// Returns `GameError::Over` if the game has ended, or
    /// `GameError::InvalidGuess` if the input has the wrong length or a
    /// symbol outside the alphabet.
    ///
    /// # Panics
    /// Will not panic - guess and secret lengths are equal by construction.
    pub fn make_guess(&mut self, raw: &str) -> Result<&GuessRecord, GameError> {
        if self.is_over() {
            return Err(GameError::Over);
        }

        let guess = Code::parse(raw, self.code_length, &self.alphabet)
            .map_err(GameError::InvalidGuess)?;

        let score =
            Score::tally(&guess, &self.secret).expect("guess length validated against secret");

        if score.is_win(self.code_length) {
            self.won = true;
        }

        self.history.push(GuessRecord {
            guess: guess.text().to_string(),
            exact: score.exact,
            partial: score.partial,
            attempt: self.history.len() + 1,
        });

        Ok(self.history.last().expect("history is non-empty after push"))
    }

    /// Evaluate a guess per position against the secret, without mutating
    ///
    /// Used by the presentation layer to render marker rows; validation is
    /// the same as [`Game::make_guess`], but no attempt is consumed and the
    /// game may already be over.
    ///
    /// # Errors
    /// Returns `GameError::InvalidGuess` if the input has the wrong length
    /// or a symbol outside the alphabet.
    ///
    /// # Panics
    /// Will not panic - guess and secret lengths are equal by construction.
    pub fn marker_row(&self, raw: &str) -> Result<Vec<Marker>, GameError> {
        let guess = Code::parse(raw, self.code_length, &self.alphabet)
            .map_err(GameError::InvalidGuess)?;

        Ok(marker_row(&guess, &self.secret).expect("guess length validated against secret"))
    }

    /// Give up the game
    ///
    /// Idempotent; calling it on a game that is already over is harmless.
    pub fn surrender(&mut self) {
        self.surrendered = true;
    }

    /// Get the secret code
    ///
    /// # Errors
    /// Returns `GameError::NotOver` if the game is still in progress and
    /// `force` is false. Forcing is the escape hatch for flows that need
    /// the secret text regardless.
    pub fn reveal_secret(&self, force: bool) -> Result<&str, GameError> {
        if force || self.is_over() {
            Ok(self.secret.text())
        } else {
            Err(GameError::NotOver)
        }
    }

    pub(crate) fn secret(&self) -> &Code {
        &self.secret
    }

    /// Whether no further guesses are accepted
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.won || self.surrendered || self.history.len() == self.max_attempts
    }

    /// Whether the secret was found
    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// Whether the player gave up
    #[inline]
    #[must_use]
    pub const fn is_surrendered(&self) -> bool {
        self.surrendered
    }

    /// Whether all attempts were used without finding the secret
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        !self.won && !self.surrendered && self.history.len() == self.max_attempts
    }

    /// Current state as a tagged variant
    ///
    /// Won takes precedence over surrendered if both flags are somehow set.
    #[must_use]
    pub fn state(&self) -> GameState {
        if self.won {
            GameState::Won
        } else if self.surrendered {
            GameState::Surrendered
        } else if self.history.len() == self.max_attempts {
            GameState::Exhausted
        } else {
            GameState::InProgress
        }
    }

    /// Feedback records in attempt order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Number of guesses submitted so far
    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    /// Number of guesses still available
    #[inline]
    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.max_attempts - self.history.len()
    }

    /// Configured secret length
    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    /// Configured attempt limit
    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Configured symbol alphabet
    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}
