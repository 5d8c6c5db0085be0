//! Core business logic module
//!
//! This module contains the domain components of both demos:
//! - `traits` - Trait abstractions for interchangeable implementations
//! - `credentials` - Argon2id credential issuing and verification
//! - `account_number` - Timestamp-derived account number generation
//! - `user` - A user and the accounts they own
//! - `bank` - User registration and login
//! - `reservation` - Railway ticket allocation and cancellation cascade

pub mod account_number;
pub mod bank;
pub mod credentials;
pub mod reservation;
pub mod traits;
pub mod user;

pub use account_number::AccountNumberGenerator;
pub use bank::{demo_users, Bank, UserSeed};
pub use credentials::{Argon2Scheme, Credential};
pub use reservation::{BookingStatus, Cancellation, ReservationConfig, ReservationSystem};
pub use traits::CredentialScheme;
pub use user::User;
