//! Assistant bot commands.
//!
//! This module turns one line of user input into a [`Command`] plus its
//! arguments, and routes it to the matching handler in [`handlers`].

pub mod handlers;

use crate::directory::AddressBook;
use crate::error::CommandResult;
use chrono::NaiveDate;
use std::str::FromStr;

/// Reply for a command word nobody recognises.
pub const MSG_INVALID_COMMAND: &str = "Invalid command.";

/// A recognised command word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "close" | "exit" => Ok(Command::Exit),
            other => Err(other.to_string()),
        }
    }
}

/// A line split into its lower-cased command word and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: String,
    pub args: Vec<String>,
}

/// Split a line on whitespace. Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some(ParsedInput { command, args })
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep going
    Continue(String),
    /// Print the text and stop
    Exit(String),
}

/// Everything a handler may need besides its arguments.
#[derive(Debug)]
pub struct CommandContext<'a> {
    pub book: &'a mut AddressBook,
    pub today: NaiveDate,
    pub birthday_window_days: i64,
}

/// Run one command. Errors are left to the caller to render.
pub fn dispatch(
    command: Command,
    args: &[String],
    ctx: &mut CommandContext<'_>,
) -> CommandResult<Reply> {
    let text = match command {
        Command::Hello => handlers::hello(),
        Command::Exit => return Ok(Reply::Exit(handlers::goodbye())),
        Command::Add => handlers::add_contact(args, ctx.book)?,
        Command::Change => handlers::change_contact(args, ctx.book)?,
        Command::Phone => handlers::show_phone(args, ctx.book)?,
        Command::All => handlers::show_all(args, ctx.book)?,
        Command::AddBirthday => handlers::add_birthday(args, ctx.book)?,
        Command::ShowBirthday => handlers::show_birthday(args, ctx.book)?,
        Command::Birthdays => {
            handlers::birthdays(args, ctx.book, ctx.today, ctx.birthday_window_days)?
        }
    };
    Ok(Reply::Continue(text))
}
