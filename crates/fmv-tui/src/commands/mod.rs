// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use crate::{app::AppState, theme::Theme};
use thiserror::Error;

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Close the app
    Quit,
    // Display help
    Help,
    // Change theme
    Theme(String),
    // Re-sample the last feeling
    More,
    // Copy the verses on screen
    Copy,
    // Toggle the reference line under the verses
    References,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Blank input; the bar closes without acting.
    #[error("")]
    Empty,
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("unknown command: {0}")]
    Unknown(String),
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    pub fn parse(input: &str) -> Result<Command, CommandError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CommandError::Empty);
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" | "q!" | "quit!" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "more" | "another" | "n" => Ok(Command::More),
            "copy" | "y" => Ok(Command::Copy),
            "refs" | "references" => Ok(Command::References),
            "theme" => {
                if rest.is_empty() {
                    Err(CommandError::Usage("theme <default|gruvbox>"))
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

/// Apply a parsed command to the app state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => s.quit = true,
        Command::Help => s.show_help = true,
        Command::Theme(name) => {
            s.theme = Theme::by_name(&name);
            s.status = Some(format!("theme: {name}"));
        }
        Command::More => s.more(),
        Command::Copy => s.copy(),
        Command::References => {
            s.panel.show_references = !s.panel.show_references;
        }
    }
}
