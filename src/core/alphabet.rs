//! Allowed-symbol alphabet
//!
//! An alphabet is the ordered set of distinct color symbols a game accepts,
//! for both the hidden code and every guess.

use std::fmt;

/// The ordered set of distinct symbols allowed in codes and guesses
///
/// Symbols are single ASCII letters; the classic setup uses six colors
/// (`rygbmc`: red, yellow, green, blue, magenta, cyan).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    text: String,
    symbols: Vec<u8>,
}

/// Error type for invalid alphabets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    Empty,
    NonAlphabetic(char),
    Duplicate(char),
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Alphabet must contain at least one symbol"),
            Self::NonAlphabetic(ch) => {
                write!(f, "Alphabet symbol '{ch}' is not an ASCII letter")
            }
            Self::Duplicate(ch) => write!(f, "Alphabet symbol '{ch}' appears more than once"),
        }
    }
}

impl std::error::Error for AlphabetError {}

impl Alphabet {
    /// Symbols of the default six-color alphabet
    pub const DEFAULT_SYMBOLS: &'static str = "rygbmc";

    /// Create an alphabet from a string of symbols
    ///
    /// Input is lower-cased; order is preserved.
    ///
    /// # Errors
    /// Returns `AlphabetError` if:
    /// - The input is empty (after trimming)
    /// - Any symbol is not an ASCII letter
    /// - Any symbol appears more than once
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Alphabet;
    ///
    /// let alphabet = Alphabet::new("RYGBmc").unwrap();
    /// assert_eq!(alphabet.text(), "rygbmc");
    ///
    /// assert!(Alphabet::new("").is_err());
    /// assert!(Alphabet::new("rgr").is_err());
    /// ```
    pub fn new(symbols: &str) -> Result<Self, AlphabetError> {
        let text = symbols.trim().to_lowercase();

        if text.is_empty() {
            return Err(AlphabetError::Empty);
        }

        let mut out = Vec::with_capacity(text.len());
        for ch in text.chars() {
            if !ch.is_ascii_lowercase() {
                return Err(AlphabetError::NonAlphabetic(ch));
            }
            let symbol = ch as u8;
            if out.contains(&symbol) {
                return Err(AlphabetError::Duplicate(ch));
            }
            out.push(symbol);
        }

        Ok(Self { text, symbols: out })
    }

    /// Get the alphabet as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the symbols in order
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Number of symbols in the alphabet
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; construction rejects empty alphabets
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check whether a symbol belongs to the alphabet
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: u8) -> bool {
        self.symbols.contains(&symbol)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SYMBOLS).expect("default symbols are valid")
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_creation_valid() {
        let alphabet = Alphabet::new("rygbmc").unwrap();
        assert_eq!(alphabet.text(), "rygbmc");
        assert_eq!(alphabet.symbols(), b"rygbmc");
        assert_eq!(alphabet.len(), 6);
        assert!(!alphabet.is_empty());
    }

    #[test]
    fn alphabet_creation_uppercase_normalized() {
        let alphabet = Alphabet::new("RYGB").unwrap();
        assert_eq!(alphabet.text(), "rygb");
    }

    #[test]
    fn alphabet_creation_empty() {
        assert_eq!(Alphabet::new(""), Err(AlphabetError::Empty));
        assert_eq!(Alphabet::new("   "), Err(AlphabetError::Empty));
    }

    #[test]
    fn alphabet_creation_duplicate() {
        assert_eq!(Alphabet::new("rgr"), Err(AlphabetError::Duplicate('r')));
        assert_eq!(Alphabet::new("rGg"), Err(AlphabetError::Duplicate('g')));
    }

    #[test]
    fn alphabet_creation_non_alphabetic() {
        assert_eq!(Alphabet::new("rg1"), Err(AlphabetError::NonAlphabetic('1')));
        assert_eq!(Alphabet::new("r g"), Err(AlphabetError::NonAlphabetic(' ')));
    }

    #[test]
    fn alphabet_default_is_six_colors() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.text(), "rygbmc");
        assert_eq!(alphabet.len(), 6);
    }

    #[test]
    fn alphabet_contains() {
        let alphabet = Alphabet::new("rgb").unwrap();
        assert!(alphabet.contains(b'r'));
        assert!(alphabet.contains(b'g'));
        assert!(alphabet.contains(b'b'));
        assert!(!alphabet.contains(b'y'));
        assert!(!alphabet.contains(b' '));
    }

    #[test]
    fn alphabet_display() {
        let alphabet = Alphabet::new("rygb").unwrap();
        assert_eq!(format!("{alphabet}"), "rygb");
    }
}
