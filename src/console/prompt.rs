//! Line-oriented prompting over any reader/writer pair.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::Result;

/// Reads answers from `input`, writes prompts and messages to `output`
///
/// Every `ask*` method returns `Ok(None)` once input is exhausted.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a message followed by a newline
    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Print a prompt and read one line (without its line ending)
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }

    /// Ask until the answer parses as `T`
    pub fn ask_parsed<T: FromStr>(&mut self, prompt: &str) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match answer.trim().parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say(format!("Invalid input {:?}. Please try again.", answer.trim()))?,
            }
        }
    }

    /// Ask until the answer parses and falls inside `range`
    pub fn ask_in_range<T>(&mut self, prompt: &str, range: RangeInclusive<T>) -> Result<Option<T>>
    where
        T: FromStr + PartialOrd + Display,
    {
        loop {
            let Some(value) = self.ask_parsed::<T>(prompt)? else {
                return Ok(None);
            };
            if range.contains(&value) {
                return Ok(Some(value));
            }
            self.say(format!(
                "Please enter a number between {} and {}.",
                range.start(),
                range.end()
            ))?;
        }
    }

    /// Give back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
