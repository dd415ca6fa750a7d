//! Interactive play mode
//!
//! Text-based game loop: prompt for a guess, render feedback, repeat until
//! the game is won, lost, or abandoned. All game rules live in
//! [`crate::game::Game`]; this loop only parses input and reacts to errors
//! by re-prompting.

use std::io::{self, Write};

use crate::game::Game;
use crate::output::{print_banner, print_epilogue, print_feedback, print_history};

/// Run the interactive play loop until the game ends or the player quits
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_play(mut game: Game) -> Result<(), String> {
    print_banner(&game);
    print_history(&game);

    while !game.is_over() {
        let prompt = format!(
            "Guess {}/{}",
            game.attempts_used() + 1,
            game.max_attempts()
        );
        let input = get_user_input(&prompt)?;

        match input.as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "surrender" => {
                game.surrender();
            }
            "history" => {
                print_history(&game);
            }
            cmd if cmd == "save" || cmd.starts_with("save ") => {
                save_command(&game, cmd.strip_prefix("save").unwrap_or("").trim());
            }
            raw => match game.make_guess(raw) {
                Ok(record) => {
                    let record = record.clone();
                    let row = game
                        .marker_row(&record.guess)
                        .map_err(|err| err.to_string())?;
                    print_feedback(&record, &row);
                }
                Err(err) => {
                    println!("  {err}");
                }
            },
        }
    }

    print_epilogue(&game);
    Ok(())
}

fn save_command(game: &Game, path: &str) {
    if path.is_empty() {
        println!("  Usage: save <path>");
        return;
    }
    match game.save(path) {
        Ok(()) => println!("  💾 Game saved to {path}"),
        Err(err) => println!("  {err}"),
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
