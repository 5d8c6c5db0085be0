//! Error types for the bank and railway demos
//!
//! Every failure the console menus report is modelled here as a value, so the
//! domain layer can be tested without scraping console output. The sessions
//! print the `Display` text and return to the menu.
//!
//! # Error Categories
//!
//! - **Bank Errors**: registration, login, account lookup and withdrawal limits
//! - **Reservation Errors**: age restriction, sold out, unknown passenger
//! - **Console Errors**: I/O failures, unparsable numbers, end of input

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the banking demo
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// A user with this id is already registered
    ///
    /// The existing user is left untouched.
    #[error("User already exists: {user_id}")]
    UserAlreadyExists {
        /// The id that was already taken
        user_id: String,
    },

    /// Login failed
    ///
    /// Deliberately carries no detail: an unknown id and a wrong password
    /// must be indistinguishable.
    #[error("Invalid user ID or password.")]
    InvalidCredentials,

    /// Account type was neither savings nor checking
    #[error("Invalid account type '{account_type}'")]
    InvalidAccountType {
        /// The rejected input
        account_type: String,
    },

    /// Withdrawal amount was zero or negative
    #[error("Invalid amount {amount} for account {account}")]
    InvalidAmount {
        /// Account number
        account: String,
        /// The rejected amount
        amount: Decimal,
    },

    /// Savings withdrawal would drop the balance below the minimum
    #[error("Insufficient funds or below minimum balance for account {account}: balance {balance}, requested {requested}, minimum {minimum}")]
    BelowMinimumBalance {
        /// Account number
        account: String,
        /// Balance before the withdrawal
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
        /// Minimum balance the account must keep
        minimum: Decimal,
    },

    /// Checking withdrawal would exceed the overdraft limit
    #[error("Overdraft limit exceeded for account {account}: balance {balance}, requested {requested}, limit {limit}")]
    OverdraftLimitExceeded {
        /// Account number
        account: String,
        /// Balance before the withdrawal
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
        /// Overdraft limit as a positive amount
        limit: Decimal,
    },

    /// Decimal arithmetic overflowed
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: String,
    },

    /// Password hashing or credential parsing failed
    #[error("Credential error: {message}")]
    Credential {
        /// Description of the failure
        message: String,
    },
}

/// Errors raised by the railway reservation demo
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReservationError {
    /// Passenger is younger than the minimum booking age
    #[error("Sorry, tickets cannot be allocated for children below age {minimum} (age {age}).")]
    AgeBelowMinimum {
        /// Age given at booking
        age: u32,
        /// Minimum age accepted
        minimum: u32,
    },

    /// Confirmed, RAC and waiting-list capacity are all exhausted
    #[error("No tickets available.")]
    NoTicketsAvailable,

    /// No confirmed or RAC ticket is booked under this name
    #[error("No confirmed or RAC ticket found for '{name}'")]
    TicketNotFound {
        /// Passenger name that was searched
        name: String,
    },
}

/// Errors raised while reading from or writing to the console
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsoleError {
    /// Reading or writing the console failed
    ///
    /// This is a fatal error that ends the session.
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// A numeric prompt received something that is not a number
    ///
    /// This is a recoverable error - the session returns to its menu.
    #[error("Invalid number '{input}'")]
    InvalidNumber {
        /// The rejected input line
        input: String,
    },

    /// Standard input was closed
    #[error("End of input")]
    EndOfInput,
}

// Conversion from io::Error to ConsoleError
impl From<std::io::Error> for ConsoleError {
    fn from(error: std::io::Error) -> Self {
        ConsoleError::Io {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BankError {
    /// Create a UserAlreadyExists error
    pub fn user_already_exists(user_id: &str) -> Self {
        BankError::UserAlreadyExists {
            user_id: user_id.to_string(),
        }
    }

    /// Create an InvalidAccountType error
    pub fn invalid_account_type(account_type: &str) -> Self {
        BankError::InvalidAccountType {
            account_type: account_type.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(account: &str, amount: Decimal) -> Self {
        BankError::InvalidAmount {
            account: account.to_string(),
            amount,
        }
    }

    /// Create a BelowMinimumBalance error
    pub fn below_minimum_balance(
        account: &str,
        balance: Decimal,
        requested: Decimal,
        minimum: Decimal,
    ) -> Self {
        BankError::BelowMinimumBalance {
            account: account.to_string(),
            balance,
            requested,
            minimum,
        }
    }

    /// Create an OverdraftLimitExceeded error
    pub fn overdraft_limit_exceeded(
        account: &str,
        balance: Decimal,
        requested: Decimal,
        limit: Decimal,
    ) -> Self {
        BankError::OverdraftLimitExceeded {
            account: account.to_string(),
            balance,
            requested,
            limit,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: &str) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
            account: account.to_string(),
        }
    }

    /// Create a Credential error
    pub fn credential(message: impl ToString) -> Self {
        BankError::Credential {
            message: message.to_string(),
        }
    }
}

impl ReservationError {
    /// Create a TicketNotFound error
    pub fn ticket_not_found(name: &str) -> Self {
        ReservationError::TicketNotFound {
            name: name.to_string(),
        }
    }
}
