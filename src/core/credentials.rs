//! Password credentials
//!
//! Users are stored with an Argon2id PHC string instead of their password.
//! Verification is delegated to the `argon2` crate, which compares digests in
//! constant time.

use crate::core::traits::CredentialScheme;
use crate::types::BankError;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use std::fmt;

/// Opaque stored credential
///
/// Holds a PHC-format hash. `Debug` is masked so a user can be logged
/// without leaking the hash.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// The PHC string, e.g. `$argon2id$v=19$m=...`
    pub fn as_phc(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential(********)")
    }
}

/// Argon2id credential scheme
#[derive(Clone)]
pub struct Argon2Scheme {
    hasher: Argon2<'static>,
}

impl Argon2Scheme {
    /// Scheme with the crate's recommended Argon2id parameters
    pub fn new() -> Self {
        Argon2Scheme {
            hasher: Argon2::default(),
        }
    }

    /// Scheme with explicit memory (KiB) and iteration costs
    ///
    /// Lower costs are useful for tests; stored credentials remember the
    /// parameters they were issued with, so verification is unaffected.
    ///
    /// # Errors
    ///
    /// Returns `Credential` if the parameters are outside Argon2's limits.
    pub fn with_cost(memory_kib: u32, iterations: u32) -> Result<Self, BankError> {
        let params =
            Params::new(memory_kib, iterations, 1, None).map_err(BankError::credential)?;
        Ok(Argon2Scheme {
            hasher: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl Default for Argon2Scheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialScheme for Argon2Scheme {
    fn issue(&self, password: &str) -> Result<Credential, BankError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .hasher
            .hash_password(password.as_bytes(), &salt)
            .map_err(BankError::credential)?;
        Ok(Credential(hash.to_string()))
    }

    fn verify(&self, password: &str, credential: &Credential) -> bool {
        match PasswordHash::new(credential.as_phc()) {
            Ok(parsed) => self
                .hasher
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Stored credential could not be parsed: {}", e);
                false
            }
        }
    }
}
