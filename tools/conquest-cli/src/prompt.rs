//! Line-oriented prompting over any reader/writer pair.

use std::io::{self, BufRead, Write};

/// A number typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberInput {
    Value(i64),
    /// Something that does not parse as an integer.
    Invalid,
    /// Input closed.
    Eof,
}

impl NumberInput {
    /// The parsed value, or `fallback` when the input was not a number.
    pub fn or(self, fallback: i64) -> i64 {
        match self {
            NumberInput::Value(n) => n,
            NumberInput::Invalid | NumberInput::Eof => fallback,
        }
    }
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a full line of output.
    pub fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", text.as_ref())
    }

    /// Show `prompt` and read one line with its line ending stripped.
    /// `None` once input is closed.
    pub fn ask_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Show `prompt` and read one integer.
    pub fn ask_number(&mut self, prompt: &str) -> io::Result<NumberInput> {
        Ok(match self.ask_line(prompt)? {
            None => NumberInput::Eof,
            Some(line) => match line.trim().parse::<i64>() {
                Ok(n) => NumberInput::Value(n),
                Err(_) => NumberInput::Invalid,
            },
        })
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
