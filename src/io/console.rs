//! Line-oriented console over any reader/writer pair
//!
//! The menus read one answer per line. Tests drive a `Console` with an
//! in-memory `Cursor` and capture the transcript in a `Vec<u8>`; the binary
//! uses locked stdin/stdout.
//!
//! # Error Handling
//!
//! - End of input is reported as `ConsoleError::EndOfInput`
//! - A numeric prompt that cannot be parsed yields `ConsoleError::InvalidNumber`
//! - Any underlying I/O failure becomes `ConsoleError::Io`

use crate::types::ConsoleError;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Prompt-and-answer console
pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
    line: String,
}

impl<'a> Console<'a> {
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Console {
            input,
            output,
            line: String::new(),
        }
    }

    /// Write a full line of text
    pub fn say(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writer for multi-line reports
    pub fn output(&mut self) -> &mut dyn Write {
        &mut *self.output
    }

    /// Print `label` without a newline and read the answer
    ///
    /// Surrounding whitespace, including the line terminator, is trimmed.
    pub fn prompt(&mut self, label: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        self.line.clear();
        let read = self.input.read_line(&mut self.line)?;
        if read == 0 {
            return Err(ConsoleError::EndOfInput);
        }
        Ok(self.line.trim().to_string())
    }

    /// Prompt for a value parsed with `FromStr`
    ///
    /// Used for menu choices, ages and amounts.
    pub fn prompt_number<T: FromStr>(&mut self, label: &str) -> Result<T, ConsoleError> {
        let answer = self.prompt(label)?;
        answer
            .parse::<T>()
            .map_err(|_| ConsoleError::InvalidNumber { input: answer })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Cursor;

    #[test]
    fn test_prompt_writes_label_and_trims_answer() {
        let mut input = Cursor::new("  John Doe \r\n");
        let mut output = Vec::new();
        let mut console = Console::new(&mut input, &mut output);

        let answer = console.prompt("Enter name: ").unwrap();

        assert_eq!(answer, "John Doe");
        assert_eq!(String::from_utf8(output).unwrap(), "Enter name: ");
    }

    #[test]
    fn test_prompt_reports_end_of_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let mut console = Console::new(&mut input, &mut output);

        assert_eq!(console.prompt("> "), Err(ConsoleError::EndOfInput));
    }

    #[test]
    fn test_prompt_number_parses_integers_and_decimals() {
        let mut input = Cursor::new("3\n250.75\n");
        let mut output = Vec::new();
        let mut console = Console::new(&mut input, &mut output);

        let choice: u32 = console.prompt_number("Choose an option: ").unwrap();
        let amount: Decimal = console.prompt_number("Enter amount: ").unwrap();

        assert_eq!(choice, 3);
        assert_eq!(amount, Decimal::new(25075, 2));
    }

    #[test]
    fn test_prompt_number_rejects_text() {
        let mut input = Cursor::new("three\n");
        let mut output = Vec::new();
        let mut console = Console::new(&mut input, &mut output);

        let result: Result<u32, _> = console.prompt_number("Choose an option: ");

        assert_eq!(
            result,
            Err(ConsoleError::InvalidNumber {
                input: "three".to_string()
            })
        );
    }

    #[test]
    fn test_say_appends_newline() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        {
            let mut console = Console::new(&mut input, &mut output);
            console.say("1. Login").unwrap();
            console.say("2. Register").unwrap();
        }
        assert_eq!(String::from_utf8(output).unwrap(), "1. Login\n2. Register\n");
    }
}
