//! Banking menu session
//!
//! Main menu: login, register, exit. After a successful login the user menu
//! offers account listing, account creation, withdrawals, deposits and
//! statements until the user logs out.

use crate::core::{demo_users, AccountNumberGenerator, Argon2Scheme, Bank, User};
use crate::io::{write_accounts, write_statements, Console};
use crate::session::{finish, read_choice, recover, Session};
use crate::types::{AccountKind, BankError, ConsoleError, WithdrawalLog};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

/// Configuration for the banking session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankConfig {
    /// Register the two demo users at startup
    pub seed_demo_users: bool,
    /// How withdrawals are recorded in account histories
    pub withdrawal_log: WithdrawalLog,
}

impl Default for BankConfig {
    fn default() -> Self {
        BankConfig {
            seed_demo_users: true,
            withdrawal_log: WithdrawalLog::Single,
        }
    }
}

#[derive(Clone, Copy)]
enum Transaction {
    Deposit,
    Withdraw,
}

/// Menu-driven banking program
pub struct BankSession {
    bank: Bank,
    numbers: AccountNumberGenerator,
    withdrawal_log: WithdrawalLog,
}

impl BankSession {
    /// Create a session backed by an Argon2id bank
    ///
    /// # Errors
    ///
    /// Returns a `BankError` if a demo user cannot be registered.
    pub fn new(config: BankConfig) -> Result<Self, BankError> {
        let seeds = if config.seed_demo_users {
            demo_users()
        } else {
            Vec::new()
        };
        let bank = Bank::with_users(Box::new(Argon2Scheme::new()), seeds)?;
        Ok(Self::with_bank(bank, config))
    }

    /// Create a session around an existing bank
    ///
    /// `config.seed_demo_users` is ignored; the bank is used as given.
    pub fn with_bank(bank: Bank, config: BankConfig) -> Self {
        BankSession {
            bank,
            numbers: AccountNumberGenerator::new(),
            withdrawal_log: config.withdrawal_log,
        }
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    fn main_menu(&mut self, console: &mut Console<'_>) -> Result<(), ConsoleError> {
        loop {
            console.say("1. Login")?;
            console.say("2. Register")?;
            console.say("3. Exit")?;

            match read_choice(console)? {
                Some(1) => self.login(console)?,
                Some(2) => self.register(console)?,
                Some(3) => return Ok(()),
                _ => console.say("Invalid option. Please try again.")?,
            }
        }
    }

    fn login(&mut self, console: &mut Console<'_>) -> Result<(), ConsoleError> {
        let user_id = console.prompt("Enter user ID: ")?;
        let password = console.prompt("Enter password: ")?;

        match self.bank.login_user(&user_id, &password) {
            Ok(user) => {
                console.say(&format!("Welcome, {}.", user.name()))?;
                user_menu(console, user, &mut self.numbers, self.withdrawal_log)
            }
            Err(e) => console.say(&e.to_string()),
        }
    }

    fn register(&mut self, console: &mut Console<'_>) -> Result<(), ConsoleError> {
        let user_id = console.prompt("Enter new user ID: ")?;
        let name = console.prompt("Enter name: ")?;
        let password = console.prompt("Enter password: ")?;

        match self.bank.register_user(&user_id, &name, &password) {
            Ok(()) => console.say("User registered successfully."),
            Err(BankError::UserAlreadyExists { .. }) => console.say("User already exists."),
            Err(e) => console.say(&e.to_string()),
        }
    }
}

impl Session for BankSession {
    fn run(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<(), ConsoleError> {
        let mut console = Console::new(input, output);
        finish(self.main_menu(&mut console))
    }
}

fn user_menu(
    console: &mut Console<'_>,
    user: &mut User,
    numbers: &mut AccountNumberGenerator,
    withdrawal_log: WithdrawalLog,
) -> Result<(), ConsoleError> {
    loop {
        console.say("1. View Accounts")?;
        console.say("2. Create Account")?;
        console.say("3. Withdraw")?;
        console.say("4. Deposit")?;
        console.say("5. View Transactions")?;
        console.say("6. Logout")?;

        match read_choice(console)? {
            Some(1) => write_accounts(user, console.output())?,
            Some(2) => {
                let result = create_account(console, user, numbers, withdrawal_log);
                recover(console, result)?
            }
            Some(3) => {
                let result = perform_transaction(console, user, Transaction::Withdraw);
                recover(console, result)?
            }
            Some(4) => {
                let result = perform_transaction(console, user, Transaction::Deposit);
                recover(console, result)?
            }
            Some(5) => write_statements(user, console.output())?,
            Some(6) => return Ok(()),
            _ => console.say("Invalid option. Please try again.")?,
        }
    }
}

fn create_account(
    console: &mut Console<'_>,
    user: &mut User,
    numbers: &mut AccountNumberGenerator,
    withdrawal_log: WithdrawalLog,
) -> Result<(), ConsoleError> {
    let account_type = console.prompt("Enter account type (savings/checking): ")?;
    let balance: Decimal = console.prompt_number("Enter initial balance: ")?;

    let kind = match account_type.parse::<AccountKind>() {
        Ok(kind) => kind,
        Err(_) => return console.say("Invalid account type."),
    };

    let account = user.open_account(kind, balance, numbers.next_number(), withdrawal_log);
    let message = format!(
        "Account created successfully. Account number: {}",
        account.number()
    );
    console.say(&message)
}

fn perform_transaction(
    console: &mut Console<'_>,
    user: &mut User,
    transaction: Transaction,
) -> Result<(), ConsoleError> {
    let number = console.prompt("Enter account number: ")?;
    let Some(account) = user.account_mut(&number) else {
        return console.say("Account not found.");
    };

    let amount: Decimal = console.prompt_number("Enter amount: ")?;
    let result = match transaction {
        Transaction::Deposit => account.deposit(amount),
        Transaction::Withdraw => account.withdraw(amount),
    };

    match result {
        Ok(()) => console.say(&format!("Balance: ${:.2}", account.balance())),
        Err(e) => console.say(&e.to_string()),
    }
}
