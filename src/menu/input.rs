//! Prompting and input validation

use super::{Error, Result};
use std::io::{BufRead, Write};
use std::num::ParseIntError;

/// Line-oriented prompt over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Prompter { input, out }
    }

    /// Show `text` (no newline) and read one line, without its line ending
    ///
    /// Returns `Error::InputClosed` at end of input.
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        self.read_line()
    }

    /// Read one line without showing a prompt
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Output side, for printing results between prompts
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }
}

/// Parse a flight ID; surrounding whitespace is ignored
pub fn parse_flight_id(input: &str) -> std::result::Result<i64, ParseIntError> {
    input.trim().parse()
}
