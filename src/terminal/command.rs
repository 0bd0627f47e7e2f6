//! Parsing of the line commands typed at the desk prompt.

use std::fmt::Display;
use thiserror::Error;

/// One line typed at the prompt.
///
/// Option and line numbers are the 1-based positions shown on screen; the
/// session resolves them against the view that was on screen when they were typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `name <text>`: replace the name draft with the raw text.
    Name(String),
    /// `enter`: the commit key in the name field.
    Enter,
    /// `set`: the explicit name confirm control.
    Set,
    /// `select <n>` or `select none`.
    Select(Option<usize>),
    /// `qty <text>`: raw quantity field text.
    Qty(String),
    Add,
    /// `remove <n>`: the n-th displayed order line.
    Remove(usize),
    Show,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command {0:?}, type `help` for the list")]
    Unknown(String),

    #[error("`{command}` needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("`{command}` expects a number, got {value:?}")]
    InvalidNumber { command: &'static str, value: String },
}

pub const HELP: &str = "\
Commands:
  name <text>     type into the customer name field
  enter           press Enter in the name field
  set             confirm the customer name
  select <n>      choose option n from the item list
  select none     clear the item choice
  qty <text>      type into the quantity field
  add             add the selected item to the order
  remove <n>      remove order line n
  show            redraw the screen
  json            print the screen as JSON
  help            show this list
  quit            leave";

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        let (word, rest) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));

        match word.to_ascii_lowercase().as_str() {
            "" | "show" => Ok(Command::Show),
            // The name text is kept as typed, surrounding spaces included
            "name" => Ok(Command::Name(rest.to_string())),
            "enter" => Ok(Command::Enter),
            "set" => Ok(Command::Set),
            "select" => match rest.trim() {
                "" => Err(CommandError::MissingArgument {
                    command: "select",
                    expected: "an option number or `none`",
                }),
                arg if arg.eq_ignore_ascii_case("none") => Ok(Command::Select(None)),
                arg => parse_number("select", arg).map(|n| Command::Select(Some(n))),
            },
            "qty" => Ok(Command::Qty(rest.to_string())),
            "add" => Ok(Command::Add),
            "remove" => match rest.trim() {
                "" => Err(CommandError::MissingArgument {
                    command: "remove",
                    expected: "a line number",
                }),
                arg => parse_number("remove", arg).map(Command::Remove),
            },
            "json" => Ok(Command::Json),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_number(command: &'static str, arg: &str) -> Result<usize, CommandError> {
    arg.parse::<usize>().map_err(|_| CommandError::InvalidNumber {
        command,
        value: arg.to_string(),
    })
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Name(text) => write!(f, "name {}", text),
            Command::Enter => write!(f, "enter"),
            Command::Set => write!(f, "set"),
            Command::Select(Some(n)) => write!(f, "select {}", n),
            Command::Select(None) => write!(f, "select none"),
            Command::Qty(text) => write!(f, "qty {}", text),
            Command::Add => write!(f, "add"),
            Command::Remove(n) => write!(f, "remove {}", n),
            Command::Show => write!(f, "show"),
            Command::Json => write!(f, "json"),
            Command::Help => write!(f, "help"),
            Command::Quit => write!(f, "quit"),
        }
    }
}
