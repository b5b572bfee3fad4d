//! # Input Module
//!
//! Input handling and command parsing for player interactions.

pub mod commands;

pub use commands::*;

use crate::{DelveError, DelveResult, Direction};

/// A command typed by the player in interactive mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Move one cell in a direction
    Move(Direction),
    /// Pick up the treasure in the current cave
    PickUp,
    /// Describe the current location
    Look,
    /// Describe the player
    Status,
    /// Draw the dungeon map
    Map,
    /// List the available commands
    Help,
    /// Leave the game
    Quit,
}

/// Input handler for processing player commands.
///
/// Turns one line of text into a [`PlayerInput`].
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Whether a bare direction (without `move`) is accepted
    pub bare_directions: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{Direction, InputHandler, PlayerInput};
    ///
    /// let handler = InputHandler::new();
    /// assert_eq!(handler.parse_line("move n").unwrap(), PlayerInput::Move(Direction::North));
    /// assert_eq!(handler.parse_line("s").unwrap(), PlayerInput::Move(Direction::South));
    /// ```
    pub fn new() -> Self {
        Self {
            bare_directions: true,
        }
    }

    /// Parses one line of player input.
    pub fn parse_line(&self, line: &str) -> DelveResult<PlayerInput> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Err(DelveError::InvalidInput("empty command".to_string()));
        };

        let input = match command.to_ascii_lowercase().as_str() {
            "move" | "go" | "m" => {
                let direction = words.next().ok_or_else(|| {
                    DelveError::InvalidInput("move needs a direction".to_string())
                })?;
                PlayerInput::Move(parse_direction(direction)?)
            }
            "pick" | "take" | "get" | "p" => PlayerInput::PickUp,
            "look" | "l" => PlayerInput::Look,
            "status" | "player" | "i" => PlayerInput::Status,
            "map" => PlayerInput::Map,
            "help" | "h" | "?" => PlayerInput::Help,
            "quit" | "exit" | "q" => PlayerInput::Quit,
            other if self.bare_directions => PlayerInput::Move(parse_direction(other)?),
            other => {
                return Err(DelveError::InvalidInput(format!(
                    "unknown command '{}'",
                    other
                )))
            }
        };

        if let Some(extra) = words.next() {
            return Err(DelveError::InvalidInput(format!(
                "unexpected argument '{}'",
                extra
            )));
        }
        Ok(input)
    }

    /// One-line summary of the accepted commands.
    pub fn help_text(&self) -> &'static str {
        "Commands: move <n|e|s|w>, pick, look, status, map, help, quit"
    }
}
