//! Core traits
//!
//! This module defines the seams where the bank can be given a different
//! implementation, such as cheaper credential hashing in tests.

use crate::core::credentials::Credential;
use crate::types::BankError;

/// Trait for issuing and checking user credentials
///
/// Implementations turn a password into an opaque [`Credential`] at
/// registration and later check a login attempt against it. The bank never
/// stores or compares passwords itself.
pub trait CredentialScheme {
    /// Derive a credential from a password
    fn issue(&self, password: &str) -> Result<Credential, BankError>;

    /// Check a password against a previously issued credential
    ///
    /// Must not leak through timing how much of the password matched.
    fn verify(&self, password: &str, credential: &Credential) -> bool;
}
