//! Interactive command loop.
//!
//! The loop owns the address book for its lifetime and talks to any
//! `BufRead`/`Write` pair, so the binary hands it stdin/stdout and tests
//! hand it in-memory buffers.

use crate::commands::{
    dispatch, handlers, parse_input, Command, CommandContext, Reply, MSG_INVALID_COMMAND,
};
use crate::config::Config;
use crate::directory::AddressBook;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Greeting printed once when the loop starts.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// One user's address book plus the settings commands run with.
#[derive(Debug)]
pub struct Session {
    book: AddressBook,
    birthday_window_days: i64,
    today: Option<NaiveDate>,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            book: AddressBook::new(),
            birthday_window_days: config.birthday_window(),
            today: None,
        }
    }

    /// Pin the date used by `birthdays` instead of reading the clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one input line. Blank lines yield `None`.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let parsed = parse_input(line)?;

        let command = match parsed.command.parse::<Command>() {
            Ok(command) => command,
            Err(word) => {
                warn!(command = %word, "Unknown command");
                return Some(Reply::Continue(MSG_INVALID_COMMAND.to_string()));
            }
        };

        let mut ctx = CommandContext {
            book: &mut self.book,
            today: self.today.unwrap_or_else(|| Local::now().date_naive()),
            birthday_window_days: self.birthday_window_days,
        };

        let reply = match dispatch(command, &parsed.args, &mut ctx) {
            Ok(reply) => reply,
            Err(e) => {
                warn!(command = ?command, error = %e, "Command rejected");
                Reply::Continue(e.user_message().to_string())
            }
        };
        Some(reply)
    }
}

/// Run the loop until `close`/`exit` or end of input.
pub fn run<R, W>(session: &mut Session, input: R, output: &mut W, prompt: &str) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    info!("Assistant bot started");
    writeln!(output, "{}", WELCOME)?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            // End of input behaves like `exit`
            writeln!(output)?;
            writeln!(output, "{}", handlers::goodbye())?;
            break;
        };

        match session.handle_line(&line?) {
            Some(Reply::Continue(text)) => writeln!(output, "{}", text)?,
            Some(Reply::Exit(text)) => {
                writeln!(output, "{}", text)?;
                break;
            }
            None => {}
        }
    }

    info!(contacts = session.book().len(), "Assistant bot stopped");
    Ok(())
}
