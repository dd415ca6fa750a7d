//! Guess evaluation
//!
//! Compares a guess against the secret using the classic two-pass peg count:
//!
//! 1. First pass: count exact matches (right symbol, right position) and
//!    consume those secret positions.
//! 2. Second pass: count partial matches (right symbol, wrong position) from
//!    the leftover symbol frequencies, so no secret position and no guess
//!    position is ever counted twice.
//!
//! [`marker_row`] runs the same passes but keeps the per-position result for
//! rendering; [`Score::tally`] reduces a marker row to aggregate counts, so
//! the two entry points can never disagree.

use std::fmt;

use super::Code;

/// Per-position evaluation result for one guess slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Right symbol in the right position
    Exact,
    /// Symbol present in the secret, but at a different position
    Partial,
    /// Symbol not present in the leftover secret
    Miss,
}

/// Aggregate feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub exact: usize,
    pub partial: usize,
}

/// Error type for mismatched evaluator inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    LengthMismatch { guess: usize, secret: usize },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, secret } => write!(
                f,
                "Guess length {guess} does not match secret length {secret}"
            ),
        }
    }
}

impl std::error::Error for ScoreError {}

/// Evaluate a guess per position, preserving guess order
///
/// # Errors
/// Returns `ScoreError::LengthMismatch` if the sequences differ in length.
///
/// # Examples
/// ```
/// use mastermind::core::{Alphabet, Code, Marker, marker_row};
///
/// let alphabet = Alphabet::new("rygbmc").unwrap();
/// let secret = Code::parse("rrgb", 4, &alphabet).unwrap();
/// let guess = Code::parse("rbgr", 4, &alphabet).unwrap();
///
/// let row = marker_row(&guess, &secret).unwrap();
/// assert_eq!(
///     row,
///     [Marker::Exact, Marker::Partial, Marker::Exact, Marker::Partial]
/// );
/// ```
pub fn marker_row(guess: &Code, secret: &Code) -> Result<Vec<Marker>, ScoreError> {
    if guess.len() != secret.len() {
        return Err(ScoreError::LengthMismatch {
            guess: guess.len(),
            secret: secret.len(),
        });
    }

    let length = guess.len();
    let mut row = vec![Marker::Miss; length];
    let mut available = secret.symbol_counts();

    // First pass: exact matches consume their secret position
    // Allow: index needed to access guess[i], secret[i], and set row[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..length {
        if guess.symbols()[i] == secret.symbols()[i] {
            row[i] = Marker::Exact;

            if let Some(count) = available.get_mut(&guess.symbols()[i]) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: partials drawn from the leftover frequencies
    // Allow: index needed to access guess[i] and check/set row[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..length {
        if row[i] == Marker::Miss {
            let symbol = guess.symbols()[i];
            if let Some(count) = available.get_mut(&symbol)
                && *count > 0
            {
                row[i] = Marker::Partial;
                *count -= 1;
            }
        }
    }

    Ok(row)
}

impl Score {
    /// Evaluate a guess against the secret, producing aggregate counts
    ///
    /// Guaranteed consistent with [`marker_row`]: the counts are exactly the
    /// number of `Exact` and `Partial` markers in the row.
    ///
    /// # Errors
    /// Returns `ScoreError::LengthMismatch` if the sequences differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Alphabet, Code, Score};
    ///
    /// let alphabet = Alphabet::new("rygbmc").unwrap();
    /// let secret = Code::parse("rrgb", 4, &alphabet).unwrap();
    /// let guess = Code::parse("rbgr", 4, &alphabet).unwrap();
    ///
    /// let score = Score::tally(&guess, &secret).unwrap();
    /// assert_eq!((score.exact, score.partial), (2, 2));
    /// ```
    pub fn tally(guess: &Code, secret: &Code) -> Result<Self, ScoreError> {
        Ok(Self::from_markers(&marker_row(guess, secret)?))
    }

    /// Reduce a marker row to aggregate counts
    #[must_use]
    pub fn from_markers(row: &[Marker]) -> Self {
        let exact = row.iter().filter(|&&m| m == Marker::Exact).count();
        let partial = row.iter().filter(|&&m| m == Marker::Partial).count();
        Self { exact, partial }
    }

    /// Whether this score means the guess equals the secret
    #[inline]
    #[must_use]
    pub const fn is_win(&self, length: usize) -> bool {
        self.exact == length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    fn code(text: &str) -> Code {
        let alphabet = Alphabet::new("rygbmc").unwrap();
        Code::parse(text, text.len(), &alphabet).unwrap()
    }

    #[test]
    fn score_all_exact_iff_equal() {
        let score = Score::tally(&code("rgby"), &code("rgby")).unwrap();
        assert_eq!((score.exact, score.partial), (4, 0));
        assert!(score.is_win(4));

        let score = Score::tally(&code("rgby"), &code("rgyb")).unwrap();
        assert_ne!(score.exact, 4);
        assert!(!score.is_win(4));
    }

    #[test]
    fn score_no_matches() {
        let score = Score::tally(&code("rrrr"), &code("gbyc")).unwrap();
        assert_eq!((score.exact, score.partial), (0, 0));
    }

    #[test]
    fn score_swapped_duplicates() {
        // Secret rrgb vs guess rbgr: positions 0 and 2 are exact; the
        // remaining 'b' and 'r' are both present elsewhere, so two partials.
        let score = Score::tally(&code("rbgr"), &code("rrgb")).unwrap();
        assert_eq!((score.exact, score.partial), (2, 2));
    }

    #[test]
    fn score_duplicates_not_double_counted() {
        // Secret rrrr vs guess rrbb: two exact 'r's, and the remaining guess
        // symbols are 'b', so no partials despite the secret's leftover 'r's.
        let score = Score::tally(&code("rrbb"), &code("rrrr")).unwrap();
        assert_eq!((score.exact, score.partial), (2, 0));
    }

    #[test]
    fn score_extra_guess_duplicates_limited_by_secret() {
        // Secret has one 'r'; guess repeats it three times off-position.
        // Only one partial may be awarded.
        let score = Score::tally(&code("grrr"), &code("rgbb")).unwrap();
        assert_eq!((score.exact, score.partial), (0, 2));
    }

    #[test]
    fn score_bounded_by_length() {
        let guesses = ["rrgb", "rbgr", "rrrr", "rrbb", "gbyc", "cybg"];
        let secrets = ["rrgb", "rrrr", "gbyc", "rgby", "bgyc", "cccc"];
        for g in guesses {
            for s in secrets {
                let score = Score::tally(&code(g), &code(s)).unwrap();
                assert!(score.exact + score.partial <= 4, "{g} vs {s}");
            }
        }
    }

    #[test]
    fn score_length_mismatch() {
        let alphabet = Alphabet::new("rygbmc").unwrap();
        let guess = Code::parse("rgb", 3, &alphabet).unwrap();
        let secret = Code::parse("rgby", 4, &alphabet).unwrap();

        assert_eq!(
            Score::tally(&guess, &secret),
            Err(ScoreError::LengthMismatch {
                guess: 3,
                secret: 4
            })
        );
        assert!(marker_row(&guess, &secret).is_err());
    }

    #[test]
    fn marker_row_positions() {
        let row = marker_row(&code("rbgr"), &code("rrgb")).unwrap();
        assert_eq!(
            row,
            [Marker::Exact, Marker::Partial, Marker::Exact, Marker::Partial]
        );

        let row = marker_row(&code("rrbb"), &code("rrrr")).unwrap();
        assert_eq!(
            row,
            [Marker::Exact, Marker::Exact, Marker::Miss, Marker::Miss]
        );
    }

    #[test]
    fn marker_row_exact_takes_priority_over_partial() {
        // The secret's single 'g' is consumed by the exact match at position
        // 1, so the guess's other 'g' must stay a miss.
        let row = marker_row(&code("gggb"), &code("bgrr")).unwrap();
        assert_eq!(
            row,
            [Marker::Miss, Marker::Exact, Marker::Miss, Marker::Partial]
        );
    }

    #[test]
    fn marker_row_counts_match_tally() {
        let pairs = [
            ("rbgr", "rrgb"),
            ("rrbb", "rrrr"),
            ("gbyc", "cybg"),
            ("mmmm", "mcmc"),
            ("rygb", "rygb"),
        ];
        for (g, s) in pairs {
            let row = marker_row(&code(g), &code(s)).unwrap();
            let from_row = Score::from_markers(&row);
            let direct = Score::tally(&code(g), &code(s)).unwrap();
            assert_eq!(from_row, direct, "{g} vs {s}");
        }
    }
}
