//! Interactive prompt loop.
//!
//! A [`Session`] asks for a mode, reads one number or a list of numbers and
//! prints the resulting table. It reads from any [`BufRead`] and writes to any
//! [`Write`], so it works the same against a terminal and in-memory buffers.
//! Input problems end the session with a message; only I/O errors are returned.

use log::{debug, info};
use std::io::{BufRead, Write};

use crate::error::{Error, Result};
use crate::formatting::{Table, TableRenderer};
use crate::parser::NumericInput;

pub const MODE_PROMPT: &str = "Enter '1' for a single number or 'm' for multiple numbers: ";
pub const SINGLE_PROMPT: &str = "Enter a number (hex or decimal): ";
pub const MULTIPLE_PROMPT: &str = "Enter multiple numbers (hex or decimal), one per line. When finished, press enter on an empty line:";
pub const INVALID_MODE: &str = "Invalid mode. Please enter '1' or 'm'.";
pub const INVALID_SINGLE: &str = "Invalid input. Please enter a valid number.";
pub const NO_NUMBERS: &str = "No numbers entered.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Single,
    Multiple,
}

impl Mode {
    /// `1` or `m`, ignoring case and surrounding whitespace.
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer.trim().to_lowercase().as_str() {
            "1" => Some(Mode::Single),
            "m" => Some(Mode::Multiple),
            _ => None,
        }
    }
}

/// The message shown for an input error in the given mode, or `None` when
/// the error is not caused by input.
pub fn failure_message(mode: Mode, err: &Error) -> Option<String> {
    if !err.is_input_error() {
        return None;
    }

    let message = match (mode, err) {
        (Mode::Single, _) => INVALID_SINGLE.to_string(),
        (Mode::Multiple, Error::EmptyInput) => NO_NUMBERS.to_string(),
        (Mode::Multiple, Error::InvalidLine { input, .. }) => format!("Invalid input: {}", input),
        (Mode::Multiple, other) => format!("Invalid input: {}", other),
    };
    Some(message)
}

pub struct Session<R, W> {
    input: R,
    output: W,
    renderer: TableRenderer,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, renderer: TableRenderer) -> Self {
        Self {
            input,
            output,
            renderer,
        }
    }

    /// Asks for a mode and runs it.
    pub fn run(&mut self) -> Result<()> {
        self.prompt(MODE_PROMPT)?;
        let answer = self.read_line()?.unwrap_or_default();

        match Mode::from_answer(&answer) {
            Some(Mode::Single) => self.run_single(),
            Some(Mode::Multiple) => self.run_multiple(),
            None => {
                debug!("Rejected mode answer {:?}", answer);
                self.say(INVALID_MODE)
            }
        }
    }

    /// Reads one number and prints its table.
    pub fn run_single(&mut self) -> Result<()> {
        self.prompt(SINGLE_PROMPT)?;
        let line = self.read_line()?.unwrap_or_default();

        let result = NumericInput::classify(&line)
            .parse()
            .map(|digits| Table::single(&digits));
        self.finish(Mode::Single, result)
    }

    /// Reads numbers until a blank line or end of input and prints the
    /// comparison table.
    pub fn run_multiple(&mut self) -> Result<()> {
        self.say(MULTIPLE_PROMPT)?;

        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            let line = line.trim();
            if line.is_empty() {
                break;
            }
            lines.push(line.to_string());
        }
        info!("Collected {} number(s)", lines.len());

        let result = Table::compare_lines(&lines);
        self.finish(Mode::Multiple, result)
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn finish(&mut self, mode: Mode, result: Result<Table>) -> Result<()> {
        match result {
            Ok(table) => {
                let text = self.renderer.render(&table)?;
                self.output.write_all(text.as_bytes())?;
                self.output.flush()?;
                Ok(())
            }
            Err(err) => match failure_message(mode, &err) {
                Some(message) => {
                    debug!("{:?} mode failed: {}", mode, err);
                    self.say(&message)
                }
                None => Err(err),
            },
        }
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// The next line without its terminator, or `None` at end of input.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, which the parser rejects like
    /// any other bad digit.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
