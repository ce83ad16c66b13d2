//! Line-oriented prompting over any reader/writer pair.
//!
//! Answers are read as whitespace-separated tokens, so `h h s` on one line
//! answers three prompts in a row. Only the first character of a token is
//! significant and it is matched case-insensitively.

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{BufRead, Write};

use log::debug;

use crate::error::GameError;

pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn say(&mut self, line: impl Display) -> Result<(), GameError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Prompts until the user picks one of `options` (upper-case letters).
    /// Returns `None` once input is exhausted.
    pub fn choose(&mut self, message: &str, options: &[char]) -> Result<Option<char>, GameError> {
        loop {
            write!(self.output, "{message}")?;
            self.output.flush()?;

            let token = match self.next_token()? {
                Some(token) => token,
                None => return Ok(None),
            };

            let option = token.chars().next().map(|c| c.to_ascii_uppercase());
            if let Some(choice) = option.filter(|c| options.contains(c)) {
                return Ok(Some(choice));
            }

            debug!("[INPUT] rejected '{}' (expected one of {:?})", token, options);
            writeln!(self.output, "Invalid input '{token}'")?;
        }
    }

    fn next_token(&mut self) -> Result<Option<String>, GameError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
