//! # Console
//!
//! Line-oriented prompts over any reader and writer, so menus run the same
//! against a terminal and against scripted test input.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{CliError, CliResult};

/// Prompt/answer channel used by the menus.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes one line.
    pub fn say(&mut self, text: impl Display) -> CliResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes an empty line.
    pub fn blank(&mut self) -> CliResult<()> {
        self.say("")
    }

    /// Shows `prompt` and reads one answer, trimmed.
    ///
    /// Fails with `EndOfInput` once the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> CliResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(CliError::end_of_input());
        }
        Ok(line.trim().to_string())
    }

    /// Asks a yes/no question; anything but "y" or "yes" is a no.
    pub fn confirm(&mut self, prompt: &str) -> CliResult<bool> {
        let answer = self.ask(prompt)?.to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    /// Lists `options` numbered from 1 and reads a pick.
    ///
    /// Returns `None` for anything that is not one of the numbers.
    pub fn pick<T: Display>(&mut self, options: &[T], prompt: &str) -> CliResult<Option<usize>> {
        for (number, option) in options.iter().enumerate() {
            writeln!(self.output, "{}. {}", number + 1, option)?;
        }
        let answer = self.ask(prompt)?;
        Ok(answer
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=options.len()).contains(n))
            .map(|n| n - 1))
    }

    /// Releases the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    fn output(console: Console<&[u8], Vec<u8>>) -> String {
        String::from_utf8(console.into_inner().1).unwrap()
    }

    #[test]
    fn test_ask_trims_and_detects_end() {
        let mut c = console("  Maria  \n");
        assert_eq!(c.ask("Name: ").unwrap(), "Maria");
        assert_eq!(c.ask("Name: ").unwrap_err().code, ErrorCode::EndOfInput);
    }

    #[test]
    fn test_pick() {
        let mut c = console("2\n0\nx\n");
        let options = ["Active", "Inactive"];
        assert_eq!(c.pick(&options, "> ").unwrap(), Some(1));
        assert_eq!(c.pick(&options, "> ").unwrap(), None);
        assert_eq!(c.pick(&options, "> ").unwrap(), None);
        assert!(output(c).starts_with("1. Active\n2. Inactive\n> "));
    }

    #[test]
    fn test_confirm() {
        let mut c = console("YES\nn\n");
        assert!(c.confirm("Sure? ").unwrap());
        assert!(!c.confirm("Sure? ").unwrap());
    }
}
