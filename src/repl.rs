//! Line-oriented input loop
//!
//! Reads commands from stdin one line at a time, normalizes them, and
//! dispatches through the command registry. Handler errors are printed and
//! the loop continues; EOF or the `exit` command ends it.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app::App;
use crate::commands;

/// Prompt shown before each input line
const PROMPT: &str = "Pokedex > ";

/// Normalizes a raw input line into lowercase words
pub fn clean_input(input: &str) -> Vec<String> {
    input
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}

/// Runs the command loop until `exit` or end of input
pub async fn run(app: &mut App) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{PROMPT}");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            // EOF: finish the prompt line so the shell gets a clean newline.
            println!();
            break;
        };

        let words = clean_input(&line);
        let Some(name) = words.first() else {
            continue;
        };

        match commands::lookup(name) {
            Some(command) => {
                if let Err(err) = commands::execute(app, command, &words[1..]).await {
                    println!("{err}");
                }
            }
            None => println!("Unknown command"),
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input_splits_and_lowercases() {
        assert_eq!(clean_input("hello world"), vec!["hello", "world"]);
        assert_eq!(clean_input("Charmander Bulbasaur PIKACHU"), vec![
            "charmander",
            "bulbasaur",
            "pikachu"
        ]);
    }

    #[test]
    fn test_clean_input_trims_surrounding_whitespace() {
        assert_eq!(clean_input("  map  "), vec!["map"]);
        assert_eq!(clean_input("\texplore\tpastoria-city-area\n"), vec![
            "explore",
            "pastoria-city-area"
        ]);
    }

    #[test]
    fn test_clean_input_collapses_inner_whitespace() {
        assert_eq!(clean_input("catch     pidgey"), vec!["catch", "pidgey"]);
    }

    #[test]
    fn test_clean_input_empty_line_yields_no_words() {
        assert!(clean_input("").is_empty());
        assert!(clean_input("    ").is_empty());
    }
}
