//! Account-related types for the banking demo
//!
//! This module defines the Account structure, the two account kinds and the
//! withdrawal-limit rule each kind enforces.

use super::error::BankError;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Account number, e.g. `ACC1718040000000`
pub type AccountNumber = String;

/// Minimum balance a savings account must keep after a withdrawal
pub const SAVINGS_MINIMUM_BALANCE: i64 = 500;

/// Maximum negative balance a checking account may reach
pub const CHECKING_OVERDRAFT_LIMIT: i64 = 1000;

/// Account kinds supported by the bank
///
/// Both kinds share deposit behaviour and differ only in the floor a
/// withdrawal may take the balance down to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Must keep at least [`SAVINGS_MINIMUM_BALANCE`] after a withdrawal
    Savings,

    /// May go down to `-CHECKING_OVERDRAFT_LIMIT`
    Checking,
}

impl AccountKind {
    /// Lowest balance a withdrawal may leave behind
    pub fn withdrawal_floor(self) -> Decimal {
        match self {
            AccountKind::Savings => Decimal::new(SAVINGS_MINIMUM_BALANCE, 0),
            AccountKind::Checking => -Decimal::new(CHECKING_OVERDRAFT_LIMIT, 0),
        }
    }

    fn limit_error(self, account: &str, balance: Decimal, requested: Decimal) -> BankError {
        match self {
            AccountKind::Savings => BankError::below_minimum_balance(
                account,
                balance,
                requested,
                self.withdrawal_floor(),
            ),
            AccountKind::Checking => BankError::overdraft_limit_exceeded(
                account,
                balance,
                requested,
                Decimal::new(CHECKING_OVERDRAFT_LIMIT, 0),
            ),
        }
    }
}

impl FromStr for AccountKind {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "savings" => Ok(AccountKind::Savings),
            "checking" => Ok(AccountKind::Checking),
            _ => Err(BankError::invalid_account_type(s.trim())),
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Savings => write!(f, "Savings"),
            AccountKind::Checking => write!(f, "Checking"),
        }
    }
}

/// How a successful withdrawal is recorded in the transaction history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WithdrawalLog {
    /// One `Withdrew $x` entry per withdrawal
    #[default]
    Single,

    /// A `Deposited $-x` entry followed by `Withdrew $x`, matching the
    /// history produced by the first version of the bank menu
    Legacy,
}

/// One entry in an account's transaction history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerEntry {
    Deposited(Decimal),
    Withdrew(Decimal),
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerEntry::Deposited(amount) => write!(f, "Deposited ${:.2}", amount),
            LedgerEntry::Withdrew(amount) => write!(f, "Withdrew ${:.2}", amount),
        }
    }
}

/// A savings or checking account
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: AccountNumber,
    kind: AccountKind,
    balance: Decimal,
    owner: String,
    history: Vec<LedgerEntry>,
    withdrawal_log: WithdrawalLog,
}

impl Account {
    /// Create an account with an opening balance and an empty history
    ///
    /// The opening balance is not recorded as a deposit.
    pub fn new(number: AccountNumber, kind: AccountKind, balance: Decimal, owner: &str) -> Self {
        Account {
            number,
            kind,
            balance,
            owner: owner.to_string(),
            history: Vec::new(),
            withdrawal_log: WithdrawalLog::default(),
        }
    }

    /// Select how withdrawals are written to the history
    pub fn with_withdrawal_log(mut self, mode: WithdrawalLog) -> Self {
        self.withdrawal_log = mode;
        self
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Transaction history, oldest first
    pub fn history(&self) -> &[LedgerEntry] {
        &self.history
    }

    /// Transaction history rendered as display lines
    pub fn history_lines(&self) -> Vec<String> {
        self.history.iter().map(ToString::to_string).collect()
    }

    /// Credit the account
    ///
    /// Non-positive amounts are ignored: no balance change, no history entry.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if the new balance is not representable.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Ok(());
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit", &self.number))?;
        self.history.push(LedgerEntry::Deposited(amount));

        tracing::debug!(account = %self.number, %amount, balance = %self.balance, "deposit");
        Ok(())
    }

    /// Debit the account, subject to the floor of its kind
    ///
    /// On success the balance drops by exactly `amount`. On failure nothing
    /// changes.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is zero or negative
    /// - `BelowMinimumBalance` for savings going under the minimum balance
    /// - `OverdraftLimitExceeded` for checking going past the overdraft limit
    /// - `ArithmeticOverflow` if the subtraction is not representable
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(&self.number, amount));
        }

        let remaining = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("withdrawal", &self.number))?;

        if remaining < self.kind.withdrawal_floor() {
            tracing::warn!(account = %self.number, kind = %self.kind, %amount, "withdrawal rejected");
            return Err(self.kind.limit_error(&self.number, self.balance, amount));
        }

        self.balance = remaining;
        if self.withdrawal_log == WithdrawalLog::Legacy {
            self.history.push(LedgerEntry::Deposited(-amount));
        }
        self.history.push(LedgerEntry::Withdrew(amount));

        tracing::debug!(account = %self.number, %amount, balance = %self.balance, "withdrawal");
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account Number: {}, Balance: ${:.2}, Owner: {}",
            self.number, self.balance, self.owner
        )
    }
}
