//! Interactive session module
//!
//! A session is a complete menu-driven program: it reads answers from an
//! input stream, dispatches them to the domain layer and writes the
//! transcript to an output stream. The binary selects a session at runtime
//! from the command line, the same way for both demos.

use crate::core::ReservationConfig;
use crate::io::Console;
use crate::types::{BankError, ConsoleError};
use std::io::{BufRead, Write};

pub mod bank;
pub mod railway;

pub use bank::{BankConfig, BankSession};
pub use railway::RailwaySession;

/// Interactive menu program
pub trait Session {
    /// Run the menu loop until the user exits or input ends
    ///
    /// Domain failures (bad login, insufficient funds, sold out, ...) are
    /// printed and the loop continues. End of input ends the session
    /// normally.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Io` if the console cannot be read or written.
    fn run(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<(), ConsoleError>;
}

/// Which demo to run, with its configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionConfig {
    Bank(BankConfig),
    Railway(ReservationConfig),
}

/// Create the session described by `config`
///
/// # Errors
///
/// Returns a `BankError` if the bank's seed users cannot be registered.
pub fn create_session(config: SessionConfig) -> Result<Box<dyn Session>, BankError> {
    match config {
        SessionConfig::Bank(config) => Ok(Box::new(BankSession::new(config)?)),
        SessionConfig::Railway(config) => Ok(Box::new(RailwaySession::new(config))),
    }
}

/// Read a menu choice, reporting unparsable input as an invalid option
///
/// Returns `Ok(None)` when the input was not a number.
pub(crate) fn read_choice(console: &mut Console<'_>) -> Result<Option<u32>, ConsoleError> {
    match console.prompt_number::<u32>("Choose an option: ") {
        Ok(choice) => Ok(Some(choice)),
        Err(ConsoleError::InvalidNumber { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Turn a bad number inside an operation into a message; keep other errors
pub(crate) fn recover(
    console: &mut Console<'_>,
    result: Result<(), ConsoleError>,
) -> Result<(), ConsoleError> {
    match result {
        Err(ConsoleError::InvalidNumber { input }) => {
            tracing::debug!(%input, "unparsable number");
            console.say("Invalid number. Please try again.")
        }
        other => other,
    }
}

/// Treat end of input as a normal exit
pub(crate) fn finish(result: Result<(), ConsoleError>) -> Result<(), ConsoleError> {
    match result {
        Err(ConsoleError::EndOfInput) => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_create_railway_session_runs() {
        let mut session =
            create_session(SessionConfig::Railway(ReservationConfig::default())).unwrap();
        let mut input = Cursor::new("5\n");
        let mut output = Vec::new();

        assert!(session.run(&mut input, &mut output).is_ok());
        assert!(String::from_utf8(output).unwrap().contains("Exiting..."));
    }

    #[test]
    fn test_read_choice_maps_text_to_none() {
        let mut input = Cursor::new("abc\n2\n");
        let mut output = Vec::new();
        let mut console = Console::new(&mut input, &mut output);

        assert_eq!(read_choice(&mut console), Ok(None));
        assert_eq!(read_choice(&mut console), Ok(Some(2)));
        assert_eq!(read_choice(&mut console), Err(ConsoleError::EndOfInput));
    }

    #[test]
    fn test_finish_swallows_end_of_input_only() {
        assert_eq!(finish(Err(ConsoleError::EndOfInput)), Ok(()));
        assert!(finish(Err(ConsoleError::Io {
            message: "closed".to_string()
        }))
        .is_err());
    }

    #[test]
    fn test_session_is_object_safe() {
        fn assert_object_safe(_: &dyn Session) {}
        let session = RailwaySession::new(ReservationConfig::default());
        assert_object_safe(&session);
    }
}
