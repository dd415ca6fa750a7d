//! Terminal output formatting
//!
//! Display utilities for the interactive play loop.

pub mod display;
pub mod formatters;

pub use display::{print_banner, print_epilogue, print_feedback, print_history};
