//! Formatting utilities for terminal output

use crate::core::Marker;

/// Plain-text character for one marker
#[must_use]
pub const fn marker_char(marker: Marker) -> char {
    match marker {
        Marker::Exact => '●',
        Marker::Partial => '○',
        Marker::Miss => '·',
    }
}

/// Format a marker row as a string, guess order preserved
#[must_use]
pub fn markers_to_string(row: &[Marker]) -> String {
    row.iter().map(|&m| marker_char(m)).collect()
}

/// Format aggregate counts as a short summary
#[must_use]
pub fn score_summary(exact: usize, partial: usize) -> String {
    format!("{exact} exact, {partial} partial")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_to_string_mixed() {
        let row = [Marker::Exact, Marker::Partial, Marker::Exact, Marker::Miss];
        assert_eq!(markers_to_string(&row), "●○●·");
    }

    #[test]
    fn markers_to_string_empty() {
        assert_eq!(markers_to_string(&[]), "");
    }

    #[test]
    fn score_summary_counts() {
        assert_eq!(score_summary(2, 1), "2 exact, 1 partial");
        assert_eq!(score_summary(0, 0), "0 exact, 0 partial");
    }
}
