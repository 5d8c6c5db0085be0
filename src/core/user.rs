//! Bank users and their accounts
//!
//! A `User` owns its accounts keyed by account number. Accounts are kept in
//! a `BTreeMap`, so listings and statements come out in account-number
//! order, which for timestamp-derived numbers is opening order.

use crate::core::credentials::Credential;
use crate::types::{Account, AccountKind, AccountNumber, WithdrawalLog};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// A registered bank user
#[derive(Debug, Clone)]
pub struct User {
    id: String,
    name: String,
    credential: Credential,
    accounts: BTreeMap<AccountNumber, Account>,
}

impl User {
    /// Create a user with no accounts
    pub fn new(id: &str, name: &str, credential: Credential) -> Self {
        User {
            id: id.to_string(),
            name: name.to_string(),
            credential,
            accounts: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Insert an account, replacing any account with the same number
    pub fn add_account(&mut self, account: Account) {
        self.accounts.insert(account.number().to_string(), account);
    }

    /// Open a new account owned by this user
    ///
    /// The owner name on the account is the user's display name.
    pub fn open_account(
        &mut self,
        kind: AccountKind,
        initial_balance: Decimal,
        number: AccountNumber,
        withdrawal_log: WithdrawalLog,
    ) -> &Account {
        let account = Account::new(number.clone(), kind, initial_balance, &self.name)
            .with_withdrawal_log(withdrawal_log);
        tracing::debug!(user = %self.id, account = %number, %kind, "account opened");
        self.accounts.entry(number).or_insert(account)
    }

    pub fn account(&self, number: &str) -> Option<&Account> {
        self.accounts.get(number)
    }

    pub fn account_mut(&mut self, number: &str) -> Option<&mut Account> {
        self.accounts.get_mut(number)
    }

    /// Remove an account; unknown numbers are ignored
    pub fn remove_account(&mut self, number: &str) -> Option<Account> {
        self.accounts.remove(number)
    }

    /// All accounts in account-number order
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::credentials::Argon2Scheme;
    use crate::core::traits::CredentialScheme;

    fn user() -> User {
        let credential = Argon2Scheme::with_cost(64, 1)
            .unwrap()
            .issue("password123")
            .unwrap();
        User::new("user1", "John Doe", credential)
    }

    #[test]
    fn test_new_user_has_no_accounts() {
        let user = user();
        assert_eq!(user.id(), "user1");
        assert_eq!(user.name(), "John Doe");
        assert_eq!(user.accounts().count(), 0);
    }

    #[test]
    fn test_open_account_uses_display_name_as_owner() {
        let mut user = user();

        let account = user.open_account(
            AccountKind::Savings,
            Decimal::new(1000, 0),
            "ACC1".to_string(),
            WithdrawalLog::Single,
        );

        assert_eq!(account.owner(), "John Doe");
        assert_eq!(account.balance(), Decimal::new(1000, 0));
        assert!(user.account("ACC1").is_some());
    }

    #[test]
    fn test_add_and_get_account() {
        let mut user = user();
        user.add_account(Account::new(
            "ACC7".to_string(),
            AccountKind::Checking,
            Decimal::ZERO,
            "John Doe",
        ));

        assert_eq!(user.account("ACC7").unwrap().kind(), AccountKind::Checking);
        assert!(user.account("ACC8").is_none());
    }

    #[test]
    fn test_account_mut_changes_are_kept() {
        let mut user = user();
        user.open_account(
            AccountKind::Checking,
            Decimal::ZERO,
            "ACC1".to_string(),
            WithdrawalLog::Single,
        );

        user.account_mut("ACC1")
            .unwrap()
            .deposit(Decimal::new(40, 0))
            .unwrap();

        assert_eq!(user.account("ACC1").unwrap().balance(), Decimal::new(40, 0));
    }

    #[test]
    fn test_remove_account() {
        let mut user = user();
        user.open_account(
            AccountKind::Savings,
            Decimal::new(600, 0),
            "ACC1".to_string(),
            WithdrawalLog::Single,
        );

        assert!(user.remove_account("ACC1").is_some());
        assert!(user.account("ACC1").is_none());
    }

    #[test]
    fn test_remove_missing_account_is_noop() {
        let mut user = user();
        user.open_account(
            AccountKind::Savings,
            Decimal::new(600, 0),
            "ACC1".to_string(),
            WithdrawalLog::Single,
        );

        assert!(user.remove_account("ACC2").is_none());
        assert_eq!(user.accounts().count(), 1);
    }

    #[test]
    fn test_accounts_are_listed_in_number_order() {
        let mut user = user();
        for number in ["ACC3", "ACC1", "ACC2"] {
            user.open_account(
                AccountKind::Checking,
                Decimal::ZERO,
                number.to_string(),
                WithdrawalLog::Single,
            );
        }

        let numbers: Vec<_> = user.accounts().map(|a| a.number()).collect();
        assert_eq!(numbers, vec!["ACC1", "ACC2", "ACC3"]);
    }
}
