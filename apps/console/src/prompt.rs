//! # Prompts
//!
//! Line-oriented input with re-prompting on bad values.
//!
//! ## Prompt Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Enter quantity: "  ──► read line ──► parse ──► Ok(value)              │
//! │         ▲                    │            │                             │
//! │         │                    │ EOF        │ bad input                   │
//! │         │                    ▼            ▼                             │
//! │         │             InputClosed    "Please input a number."           │
//! │         └─────────────────────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Generic over reader and writer so sessions can be scripted in tests.

use chrono::NaiveDate;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use coop_core::Money;

use crate::error::{ConsoleError, ConsoleResult};
use crate::menu::Command;

/// Parses `mm/dd/yy` or `mm/dd/yyyy`.
///
/// Two-digit years map to 1970–2069.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    let year = text.rsplit('/').next()?;
    let format = match year.len() {
        2 => "%m/%d/%y",
        4 => "%m/%d/%Y",
        _ => return None,
    };
    NaiveDate::parse_from_str(text, format).ok()
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Gives back the writer, e.g. to inspect a scripted session.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints one line.
    pub fn say(&mut self, text: impl Display) -> ConsoleResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Prompts and reads one trimmed line, which may be blank.
    pub fn line(&mut self, prompt: &str) -> ConsoleResult<String> {
        write!(self.output, "{prompt} ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Prompts until a non-blank line is entered.
    pub fn token(&mut self, prompt: &str) -> ConsoleResult<String> {
        loop {
            let line = self.line(prompt)?;
            if !line.is_empty() {
                return Ok(line);
            }
        }
    }

    /// Prompts until the input parses as `T`.
    pub fn number<T: FromStr>(&mut self, prompt: &str) -> ConsoleResult<T> {
        loop {
            match self.token(prompt)?.parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Please input a number.")?,
            }
        }
    }

    /// True if the answer starts with `y` or `Y`.
    pub fn yes_or_no(&mut self, question: &str) -> ConsoleResult<bool> {
        let answer = self.line(&format!("{question} (Y|y)[es] or anything else for no"))?;
        Ok(answer.to_ascii_lowercase().starts_with('y'))
    }

    pub fn money(&mut self, prompt: &str) -> ConsoleResult<Money> {
        loop {
            match Money::parse(&self.token(prompt)?) {
                Ok(amount) => return Ok(amount),
                Err(e) => self.say(format!("{e}. Enter an amount such as 20.00."))?,
            }
        }
    }

    pub fn date(&mut self, prompt: &str) -> ConsoleResult<NaiveDate> {
        loop {
            match parse_date(&self.token(prompt)?) {
                Some(date) => return Ok(date),
                None => self.say("Please input a date as mm/dd/yy.")?,
            }
        }
    }

    /// Like [`date`](Self::date), but a blank line is `None`.
    pub fn optional_date(&mut self, prompt: &str) -> ConsoleResult<Option<NaiveDate>> {
        loop {
            let line = self.line(prompt)?;
            if line.is_empty() {
                return Ok(None);
            }
            match parse_date(&line) {
                Some(date) => return Ok(Some(date)),
                None => self.say("Please input a date as mm/dd/yy, or nothing.")?,
            }
        }
    }

    /// Prompts until a valid menu number is entered.
    pub fn command(&mut self) -> ConsoleResult<Command> {
        let prompt = format!("Enter command ({} for help):", Command::Help.number());
        loop {
            match self.token(&prompt)?.parse() {
                Ok(command) => return Ok(command),
                Err(e) => self.say(e)?,
            }
        }
    }
}
