//! Bank: user registration and login
//!
//! The bank owns every registered user keyed by user id. It is built
//! explicitly from a credential scheme and a list of seed users; there is no
//! process-wide instance.

use crate::core::credentials::{Argon2Scheme, Credential};
use crate::core::traits::CredentialScheme;
use crate::core::user::User;
use crate::types::BankError;
use std::collections::BTreeMap;

const DECOY_PASSWORD: &str = "no such user";

/// A user to register when the bank is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSeed {
    pub id: String,
    pub name: String,
    pub password: String,
}

impl UserSeed {
    pub fn new(id: &str, name: &str, password: &str) -> Self {
        UserSeed {
            id: id.to_string(),
            name: name.to_string(),
            password: password.to_string(),
        }
    }
}

/// The two demo users available at startup
pub fn demo_users() -> Vec<UserSeed> {
    vec![
        UserSeed::new("user1", "John Doe", "password123"),
        UserSeed::new("user2", "Jane Smith", "password456"),
    ]
}

/// Registry of users
pub struct Bank {
    users: BTreeMap<String, User>,
    scheme: Box<dyn CredentialScheme>,
    /// Checked instead of a stored credential when the user id is unknown,
    /// so every failed login costs one verification
    decoy: Credential,
}

impl Bank {
    /// Create an empty bank using Argon2id credentials
    ///
    /// # Errors
    ///
    /// Returns `Credential` if the decoy credential cannot be issued.
    pub fn new() -> Result<Self, BankError> {
        Self::with_scheme(Box::new(Argon2Scheme::new()))
    }

    /// Create an empty bank using the given credential scheme
    ///
    /// # Errors
    ///
    /// Returns `Credential` if the decoy credential cannot be issued.
    pub fn with_scheme(scheme: Box<dyn CredentialScheme>) -> Result<Self, BankError> {
        let decoy = scheme.issue(DECOY_PASSWORD)?;
        Ok(Bank {
            users: BTreeMap::new(),
            scheme,
            decoy,
        })
    }

    /// Create a bank and register each seed user
    ///
    /// Seeds with a duplicate id are skipped, the first one wins.
    ///
    /// # Errors
    ///
    /// Returns `Credential` if a seed password cannot be hashed.
    pub fn with_users(
        scheme: Box<dyn CredentialScheme>,
        seeds: impl IntoIterator<Item = UserSeed>,
    ) -> Result<Self, BankError> {
        let mut bank = Self::with_scheme(scheme)?;
        for seed in seeds {
            match bank.register_user(&seed.id, &seed.name, &seed.password) {
                Ok(()) | Err(BankError::UserAlreadyExists { .. }) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(bank)
    }

    /// Register a new user
    ///
    /// # Errors
    ///
    /// - `UserAlreadyExists` if `id` is taken; the existing user is untouched
    /// - `Credential` if the password cannot be hashed
    pub fn register_user(&mut self, id: &str, name: &str, password: &str) -> Result<(), BankError> {
        if self.users.contains_key(id) {
            tracing::warn!(user = %id, "registration rejected: id taken");
            return Err(BankError::user_already_exists(id));
        }

        let credential = self.scheme.issue(password)?;
        self.users
            .insert(id.to_string(), User::new(id, name, credential));

        tracing::debug!(user = %id, "user registered");
        Ok(())
    }

    /// Authenticate a user
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` both for an unknown id and for a wrong
    /// password. An unknown id is still checked against a decoy credential,
    /// so the two failures take the same work.
    pub fn login_user(&mut self, id: &str, password: &str) -> Result<&mut User, BankError> {
        let verified = match self.users.get(id) {
            Some(user) => self.scheme.verify(password, user.credential()),
            None => {
                self.scheme.verify(password, &self.decoy);
                false
            }
        };

        if !verified {
            tracing::warn!(user = %id, "login failed");
            return Err(BankError::InvalidCredentials);
        }

        self.users
            .get_mut(id)
            .ok_or(BankError::InvalidCredentials)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    /// All users in id order
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }
}
