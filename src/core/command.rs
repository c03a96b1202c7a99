// Logbook - core/command.rs
//
// Input tokenizer and command dispatcher for the contact assistant.
// Core layer: no I/O. The session loop in `app::session` feeds lines in
// and prints the resulting `Outcome`.

use crate::core::contacts::ContactStore;
use crate::core::handlers;
use crate::util::constants;
use crate::util::error::CommandError;

// =============================================================================
// Tokenizer
// =============================================================================

/// One tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// First token, lower-cased.
    pub command: String,
    /// Remaining tokens in their original order and case.
    pub args: Vec<String>,
}

/// Split a line on whitespace into a command word and its arguments.
pub fn tokenize(line: &str) -> Result<ParsedInput, CommandError> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next().ok_or(CommandError::EmptyInput)?;
    Ok(ParsedInput {
        command: command.trim().to_lowercase(),
        args: tokens.map(str::to_string).collect(),
    })
}

// =============================================================================
// Commands
// =============================================================================

/// The closed set of command words. Anything else is `Invalid`, which is a
/// normal branch rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    Close,
    Exit,
    Invalid,
}

impl Command {
    /// Map an already lower-cased command word.
    pub fn from_word(word: &str) -> Self {
        match word {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "close" => Self::Close,
            "exit" => Self::Exit,
            _ => Self::Invalid,
        }
    }
}

// =============================================================================
// Dispatcher
// =============================================================================

/// What the session loop should do after one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and read the next line.
    Reply(String),
    /// Print the text and stop.
    Exit(String),
}

impl Outcome {
    pub fn text(&self) -> &str {
        match self {
            Self::Reply(text) | Self::Exit(text) => text,
        }
    }
}

/// Tokenize one input line, run its handler against `store` and map any
/// failure kind to its fixed message.
pub fn dispatch(store: &mut ContactStore, line: &str) -> Outcome {
    let input = match tokenize(line) {
        Ok(input) => input,
        Err(e) => return Outcome::Reply(e.to_string()),
    };

    let command = Command::from_word(&input.command);
    tracing::debug!(
        command = %input.command,
        args = input.args.len(),
        "Dispatching command"
    );

    let result = match command {
        Command::Close | Command::Exit => {
            return Outcome::Exit(constants::FAREWELL.to_string());
        }
        Command::Hello => Ok(constants::GREETING.to_string()),
        Command::Add => handlers::add_contact(store, &input.args),
        Command::Change => handlers::change_contact(store, &input.args),
        Command::Phone => handlers::show_phone(store, &input.args),
        Command::All => handlers::show_all(store, &input.args),
        Command::Invalid => {
            tracing::debug!(command = %input.command, "Unrecognised command");
            Ok(constants::INVALID_COMMAND.to_string())
        }
    };

    Outcome::Reply(result.unwrap_or_else(|e| {
        tracing::debug!(kind = ?e, "Command failed");
        e.to_string()
    }))
}
