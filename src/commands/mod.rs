//! Command registry and dispatch for the Pokedex CLI
//!
//! Each REPL command has an entry in [`COMMANDS`] carrying its name and the
//! description shown by `help`. The input loop resolves the first word of a
//! line through [`lookup`] and runs the handler through [`execute`].

mod catch;
mod explore;
mod inspect;
mod map;
mod pokedex;

use thiserror::Error;

use crate::app::App;
use crate::data::ApiError;

/// Errors produced by command handlers, printed by the input loop
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command needs exactly one name argument
    #[error("you must provide a {0} name")]
    MissingArgument(&'static str),

    /// `mapb` was used before paging forward
    #[error("you're on the first page")]
    FirstPage,

    /// A fetch against the catalog failed
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Which handler a command dispatches to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

/// A single REPL command: its name and the description `help` prints
#[derive(Debug, Clone, Copy)]
pub struct CliCommand {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: CommandKind,
}

/// Every command the REPL understands
pub const COMMANDS: &[CliCommand] = &[
    CliCommand {
        name: "help",
        description: "Displays a help message",
        kind: CommandKind::Help,
    },
    CliCommand {
        name: "exit",
        description: "Exit the pokedex",
        kind: CommandKind::Exit,
    },
    CliCommand {
        name: "map",
        description: "Get the next page of locations",
        kind: CommandKind::Map,
    },
    CliCommand {
        name: "mapb",
        description: "Get the previous page of locations",
        kind: CommandKind::MapBack,
    },
    CliCommand {
        name: "explore",
        description: "List the Pokemon found in a location",
        kind: CommandKind::Explore,
    },
    CliCommand {
        name: "catch",
        description: "Throw a Pokeball at a Pokemon",
        kind: CommandKind::Catch,
    },
    CliCommand {
        name: "inspect",
        description: "Show details of a caught Pokemon",
        kind: CommandKind::Inspect,
    },
    CliCommand {
        name: "pokedex",
        description: "List all caught Pokemon",
        kind: CommandKind::Pokedex,
    },
];

/// Resolves a command by its name
pub fn lookup(name: &str) -> Option<&'static CliCommand> {
    COMMANDS.iter().find(|command| command.name == name)
}

/// Runs a command against the shared state
pub async fn execute(
    app: &mut App,
    command: &CliCommand,
    args: &[String],
) -> Result<(), CommandError> {
    match command.kind {
        CommandKind::Help => {
            run_help();
            Ok(())
        }
        CommandKind::Exit => {
            run_exit(app);
            Ok(())
        }
        CommandKind::Map => map::run(app).await,
        CommandKind::MapBack => map::run_back(app).await,
        CommandKind::Explore => explore::run(app, single_arg(args, "location")?).await,
        CommandKind::Catch => catch::run(app, single_arg(args, "pokemon")?).await,
        CommandKind::Inspect => {
            inspect::run(app, single_arg(args, "pokemon")?);
            Ok(())
        }
        CommandKind::Pokedex => {
            pokedex::run(app);
            Ok(())
        }
    }
}

/// Extracts the single name argument a command requires
fn single_arg<'a>(args: &'a [String], what: &'static str) -> Result<&'a str, CommandError> {
    match args {
        [name] => Ok(name),
        _ => Err(CommandError::MissingArgument(what)),
    }
}

fn run_help() {
    println!("Welcome to the Pokedex!");
    println!("Usage:");
    println!();
    for command in COMMANDS {
        println!("{}: {}", command.name, command.description);
    }
}

fn run_exit(app: &mut App) {
    println!("Closing the Pokedex... Goodbye!");
    app.should_quit = true;
}
