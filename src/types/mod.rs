//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account kinds, ledger entries and the Account structure
//! - `ticket`: Tickets, berths and allocation tiers
//! - `error`: Error types for both demos

pub mod account;
pub mod error;
pub mod ticket;

pub use account::{
    Account, AccountKind, AccountNumber, LedgerEntry, WithdrawalLog, CHECKING_OVERDRAFT_LIMIT,
    SAVINGS_MINIMUM_BALANCE,
};
pub use error::{BankError, ConsoleError, ReservationError};
pub use ticket::{Berth, Gender, Tier, Ticket};
