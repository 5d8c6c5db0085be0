//! Bank and Railway Demos Library
//! # Overview
//!
//! This library provides two small in-memory, menu-driven programs sharing one
//! console layer: a bank account manager and a railway reservation system.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Ticket, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::bank`] - User registration and login
//!   - [`core::user`] - Accounts owned by a user
//!   - [`core::credentials`] - Argon2id password hashing
//!   - [`core::reservation`] - Ticket allocation and the cancellation cascade
//! - [`io`] - Console prompting and text reports
//! - [`session`] - The interactive menu programs
//!
//! # Bank Accounts
//!
//! - **Savings**: withdrawals must leave at least $500.00
//! - **Checking**: withdrawals may overdraw down to -$1000.00
//!
//! # Ticket Tiers
//!
//! Bookings fill confirmed berths first, then RAC (reservation against
//! cancellation) berths, then the waiting list. Cancelling a confirmed or RAC
//! ticket promotes the head of the waiting list into RAC and the head of RAC
//! into a free confirmed berth.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod session;
pub mod types;

pub use core::{Bank, ReservationConfig, ReservationSystem, User};
pub use session::{create_session, Session, SessionConfig};
pub use types::{
    Account, AccountKind, BankError, Berth, ConsoleError, Gender, ReservationError, Ticket,
    WithdrawalLog,
};
