//! Display functions for the play loop

use colored::{Color, Colorize};

use super::formatters::{marker_char, score_summary};
use crate::core::Marker;
use crate::game::{Game, GameState, GuessRecord};

/// Terminal color for a symbol, following the default color letters
fn symbol_color(symbol: char) -> Color {
    match symbol {
        'r' => Color::Red,
        'y' => Color::Yellow,
        'g' => Color::Green,
        'b' => Color::Blue,
        'm' => Color::Magenta,
        'c' => Color::Cyan,
        _ => Color::White,
    }
}

/// Render a code as colored uppercase pegs separated by spaces
#[must_use]
pub fn format_pegs(code: &str) -> String {
    code.chars()
        .map(|ch| {
            ch.to_ascii_uppercase()
                .to_string()
                .color(symbol_color(ch))
                .bold()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a marker row with exact pegs green and partial pegs yellow
#[must_use]
pub fn format_markers(row: &[Marker]) -> String {
    row.iter()
        .map(|&marker| {
            let ch = marker_char(marker).to_string();
            match marker {
                Marker::Exact => ch.green().bold().to_string(),
                Marker::Partial => ch.yellow().to_string(),
                Marker::Miss => ch.bright_black().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print the game banner and rules
pub fn print_banner(game: &Game) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Mastermind                               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "I picked a secret code of {} colors from: {}",
        game.code_length().to_string().bright_white().bold(),
        format_pegs(game.alphabet().text())
    );
    println!(
        "You have {} attempts to crack it. Repeats are allowed.\n",
        game.max_attempts().to_string().bright_white().bold()
    );
    println!("After each guess you get one marker per position:");
    println!(
        "  {} right color, right position",
        marker_char(Marker::Exact).to_string().green().bold()
    );
    println!(
        "  {} right color, wrong position",
        marker_char(Marker::Partial).to_string().yellow()
    );
    println!(
        "  {} color not in the leftover code\n",
        marker_char(Marker::Miss).to_string().bright_black()
    );
    println!("Commands: 'quit' to exit, 'surrender' to give up, 'save <path>' to save\n");
}

/// Print the feedback line for one guess
pub fn print_feedback(record: &GuessRecord, row: &[Marker]) {
    println!(
        "  {}  {}  ({})",
        format_pegs(&record.guess),
        format_markers(row),
        score_summary(record.exact, record.partial)
    );
}

/// Print the full guess history
pub fn print_history(game: &Game) {
    if game.history().is_empty() {
        println!("No guesses yet.\n");
        return;
    }

    println!("\n  Guess history:");
    for record in game.history() {
        let markers = game
            .marker_row(&record.guess)
            .map_or_else(|_| String::new(), |row| format_markers(&row));
        println!(
            "    {}. {}  {}  ({})",
            record.attempt.to_string().bright_black(),
            format_pegs(&record.guess),
            markers,
            score_summary(record.exact, record.partial)
        );
    }
    println!();
}

/// Print the end-of-game message, revealing the secret when lost
pub fn print_epilogue(game: &Game) {
    let secret = game.reveal_secret(true).unwrap_or("?");

    println!("\n{}", "═".repeat(64).bright_cyan());
    match game.state() {
        GameState::Won => {
            let attempts = game.attempts_used();
            println!(
                "{}",
                format!(
                    "✅ Cracked the code in {attempts} {}!",
                    if attempts == 1 { "attempt" } else { "attempts" }
                )
                .green()
                .bold()
            );
        }
        GameState::Surrendered => {
            println!("{}", "🏳️  You surrendered.".bright_white());
            println!("The code was: {}", format_pegs(secret));
        }
        GameState::Exhausted => {
            println!("{}", "❌ Out of attempts!".red().bold());
            println!("The code was: {}", format_pegs(secret));
        }
        GameState::InProgress => {
            println!("Game still in progress.");
        }
    }
    println!("{}\n", "═".repeat(64).bright_cyan());
}
