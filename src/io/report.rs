//! Presentation of bank and reservation state
//!
//! All functions here only read domain state and write text lines. They
//! never mutate anything, so the sessions can call them freely between
//! operations.

use crate::core::{Bank, ReservationSystem, User};
use std::io::{self, Write};

/// One line per account: number, balance and owner
pub fn write_accounts(user: &User, output: &mut dyn Write) -> io::Result<()> {
    for account in user.accounts() {
        writeln!(output, "{}", account)?;
    }
    Ok(())
}

/// Transaction history of every account the user owns
pub fn write_statements(user: &User, output: &mut dyn Write) -> io::Result<()> {
    for account in user.accounts() {
        writeln!(output, "Statement for {}:", account.number())?;
        writeln!(output, "Transaction History for account {}:", account.number())?;
        for entry in account.history() {
            writeln!(output, "{}", entry)?;
        }
    }
    Ok(())
}

/// Registered users, without any credential material
pub fn write_users(bank: &Bank, output: &mut dyn Write) -> io::Result<()> {
    for user in bank.users() {
        writeln!(output, "User ID: {}, Name: {}", user.id(), user.name())?;
    }
    Ok(())
}

/// Confirmed tickets followed by RAC tickets, with a total
pub fn write_booked_tickets(system: &ReservationSystem, output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "Booked Tickets:")?;
    for ticket in system.confirmed().iter().chain(system.rac()) {
        writeln!(output, "{}", ticket)?;
    }
    writeln!(output, "Total booked tickets: {}", system.booked_count())
}

/// Free capacity per tier, with a total
pub fn write_available_tickets(
    system: &ReservationSystem,
    output: &mut dyn Write,
) -> io::Result<()> {
    writeln!(output, "Available Tickets:")?;
    writeln!(
        output,
        "Confirmed Berths Available: {}",
        system.available_confirmed()
    )?;
    writeln!(output, "RAC Berths Available: {}", system.available_rac())?;
    writeln!(
        output,
        "Waiting List Slots Available: {}",
        system.available_waiting_slots()
    )?;
    writeln!(output, "Total available tickets: {}", system.total_available())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Argon2Scheme, UserSeed};
    use crate::types::{AccountKind, Berth, Gender, WithdrawalLog};
    use rust_decimal::Decimal;

    fn render(f: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> String {
        let mut output = Vec::new();
        f(&mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn bank_with_account() -> Bank {
        let mut bank = Bank::with_users(
            Box::new(Argon2Scheme::with_cost(64, 1).unwrap()),
            vec![UserSeed::new("user1", "John Doe", "password123")],
        )
        .unwrap();
        let user = bank.login_user("user1", "password123").unwrap();
        user.open_account(
            AccountKind::Savings,
            Decimal::new(1000, 0),
            "ACC100".to_string(),
            WithdrawalLog::Single,
        );
        let account = user.account_mut("ACC100").unwrap();
        account.deposit(Decimal::new(250, 0)).unwrap();
        account.withdraw(Decimal::new(100, 0)).unwrap();
        bank
    }

    #[test]
    fn test_write_accounts() {
        let bank = bank_with_account();
        let user = bank.user("user1").unwrap();

        let text = render(|out| write_accounts(user, out));

        assert_eq!(
            text,
            "Account Number: ACC100, Balance: $1150.00, Owner: John Doe\n"
        );
    }

    #[test]
    fn test_write_statements() {
        let bank = bank_with_account();
        let user = bank.user("user1").unwrap();

        let text = render(|out| write_statements(user, out));

        assert_eq!(
            text,
            "Statement for ACC100:\n\
             Transaction History for account ACC100:\n\
             Deposited $250.00\n\
             Withdrew $100.00\n"
        );
    }

    #[test]
    fn test_write_users_omits_credentials() {
        let bank = bank_with_account();

        let text = render(|out| write_users(&bank, out));

        assert_eq!(text, "User ID: user1, Name: John Doe\n");
    }

    #[test]
    fn test_write_booked_and_available_tickets() {
        let mut system = ReservationSystem::new();
        system
            .book_ticket("Asha", 70, Gender::Female, Berth::Upper)
            .unwrap();
        system
            .book_ticket("Ravi", 30, Gender::Male, Berth::Upper)
            .unwrap();

        let booked = render(|out| write_booked_tickets(&system, out));
        let available = render(|out| write_available_tickets(&system, out));

        assert_eq!(
            booked,
            "Booked Tickets:\n\
             Name: Asha, Age: 70, Gender: Female, Berth: Lower\n\
             Name: Ravi, Age: 30, Gender: Male, Berth: Side-Lower\n\
             Total booked tickets: 2\n"
        );
        assert_eq!(
            available,
            "Available Tickets:\n\
             Confirmed Berths Available: 0\n\
             RAC Berths Available: 0\n\
             Waiting List Slots Available: 1\n\
             Total available tickets: 1\n"
        );
    }
}
