//! Code representation
//!
//! A `Code` is a validated sequence of alphabet symbols, used for both the
//! hidden secret and every guess. Raw guess input is normalized before
//! validation: whitespace is stripped (leading, trailing, and interior) and
//! letters are lower-cased, so `" Rr Gb "` parses to `rrgb`.

use rustc_hash::FxHashMap;
use std::fmt;

use super::Alphabet;

/// A sequence of alphabet symbols of a fixed length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    text: String,
    symbols: Vec<u8>,
}

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    WrongLength { expected: usize, actual: usize },
    DisallowedSymbol(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "Code must be exactly {expected} symbols, got {actual}")
            }
            Self::DisallowedSymbol(ch) => {
                write!(f, "Symbol '{ch}' is not in the allowed alphabet")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Parse a raw string into a code of the given length over the alphabet
    ///
    /// Normalizes first (strips all whitespace, lower-cases), then validates.
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - The normalized input is not exactly `length` symbols
    /// - Any symbol is outside `alphabet`
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Alphabet, Code};
    ///
    /// let alphabet = Alphabet::new("rygbmc").unwrap();
    /// let code = Code::parse(" Rr Gb ", 4, &alphabet).unwrap();
    /// assert_eq!(code.text(), "rrgb");
    ///
    /// assert!(Code::parse("rrg", 4, &alphabet).is_err());
    /// assert!(Code::parse("rrgx", 4, &alphabet).is_err());
    /// ```
    pub fn parse(raw: &str, length: usize, alphabet: &Alphabet) -> Result<Self, CodeError> {
        let text: String = raw
            .to_lowercase()
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .collect();

        let actual = text.chars().count();
        if actual != length {
            return Err(CodeError::WrongLength {
                expected: length,
                actual,
            });
        }

        let mut symbols = Vec::with_capacity(length);
        for ch in text.chars() {
            if !ch.is_ascii() || !alphabet.contains(ch as u8) {
                return Err(CodeError::DisallowedSymbol(ch));
            }
            symbols.push(ch as u8);
        }

        Ok(Self { text, symbols })
    }

    /// Build a code from symbols already known to be valid
    ///
    /// Used for generated secrets; the caller guarantees every symbol
    /// belongs to the game's alphabet.
    pub(crate) fn from_symbols(symbols: Vec<u8>) -> Self {
        let text = symbols.iter().map(|&s| s as char).collect();
        Self { text, symbols }
    }

    /// Get the code as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the code as a symbol slice
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Number of symbols in the code
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the code has no symbols
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Count of each symbol in the code
    ///
    /// Used by the evaluator's leftover-frequency accounting.
    #[inline]
    pub(crate) fn symbol_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &symbol in &self.symbols {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn six_colors() -> Alphabet {
        Alphabet::new("rygbmc").unwrap()
    }

    #[test]
    fn code_parse_valid() {
        let code = Code::parse("rgby", 4, &six_colors()).unwrap();
        assert_eq!(code.text(), "rgby");
        assert_eq!(code.symbols(), b"rgby");
        assert_eq!(code.len(), 4);
    }

    #[test]
    fn code_parse_normalizes_case_and_whitespace() {
        // Spaces inside and around the input are stripped, letters lower-cased
        let code = Code::parse(" Rr Gb ", 4, &six_colors()).unwrap();
        assert_eq!(code.text(), "rrgb");

        let code = Code::parse("R G B Y", 4, &six_colors()).unwrap();
        assert_eq!(code.text(), "rgby");
    }

    #[test]
    fn code_parse_wrong_length() {
        assert_eq!(
            Code::parse("rgb", 4, &six_colors()),
            Err(CodeError::WrongLength {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            Code::parse("rgbyr", 4, &six_colors()),
            Err(CodeError::WrongLength {
                expected: 4,
                actual: 5
            })
        );
        assert_eq!(
            Code::parse("   ", 4, &six_colors()),
            Err(CodeError::WrongLength {
                expected: 4,
                actual: 0
            })
        );
    }

    #[test]
    fn code_parse_disallowed_symbol() {
        assert_eq!(
            Code::parse("rgbx", 4, &six_colors()),
            Err(CodeError::DisallowedSymbol('x'))
        );
        assert_eq!(
            Code::parse("rgb1", 4, &six_colors()),
            Err(CodeError::DisallowedSymbol('1'))
        );
    }

    #[test]
    fn code_parse_non_ascii_rejected() {
        assert_eq!(
            Code::parse("rgbé", 4, &six_colors()),
            Err(CodeError::DisallowedSymbol('é'))
        );
    }

    #[test]
    fn code_from_symbols() {
        let code = Code::from_symbols(b"rrgb".to_vec());
        assert_eq!(code.text(), "rrgb");
        assert_eq!(code.symbols(), b"rrgb");
    }

    #[test]
    fn code_symbol_counts() {
        let code = Code::parse("rrgb", 4, &six_colors()).unwrap();
        let counts = code.symbol_counts();
        assert_eq!(counts.get(&b'r'), Some(&2));
        assert_eq!(counts.get(&b'g'), Some(&1));
        assert_eq!(counts.get(&b'b'), Some(&1));
        assert_eq!(counts.get(&b'y'), None);
    }

    #[test]
    fn code_equality_after_normalization() {
        let a = Code::parse("RRGB", 4, &six_colors()).unwrap();
        let b = Code::parse("rrgb", 4, &six_colors()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn code_display() {
        let code = Code::parse("rgby", 4, &six_colors()).unwrap();
        assert_eq!(format!("{code}"), "rgby");
    }
}
