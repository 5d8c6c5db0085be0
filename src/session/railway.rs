//! Railway reservation menu session

use crate::core::{BookingStatus, ReservationConfig, ReservationSystem};
use crate::io::{write_available_tickets, write_booked_tickets, Console};
use crate::session::{finish, read_choice, recover, Session};
use crate::types::{Berth, ConsoleError, Gender};
use std::io::{BufRead, Write};

/// Menu-driven reservation program
pub struct RailwaySession {
    system: ReservationSystem,
}

impl RailwaySession {
    pub fn new(config: ReservationConfig) -> Self {
        RailwaySession {
            system: ReservationSystem::with_config(config),
        }
    }

    pub fn system(&self) -> &ReservationSystem {
        &self.system
    }

    fn menu(&mut self, console: &mut Console<'_>) -> Result<(), ConsoleError> {
        loop {
            console.say("")?;
            console.say("Menu:")?;
            console.say("1. Book Ticket")?;
            console.say("2. Cancel Ticket")?;
            console.say("3. Print Booked Tickets")?;
            console.say("4. Print Available Tickets")?;
            console.say("5. Exit")?;

            match read_choice(console)? {
                Some(1) => {
                    let result = self.book(console);
                    recover(console, result)?
                }
                Some(2) => self.cancel(console)?,
                Some(3) => write_booked_tickets(&self.system, console.output())?,
                Some(4) => write_available_tickets(&self.system, console.output())?,
                Some(5) => return console.say("Exiting..."),
                _ => console.say("Invalid option. Please try again.")?,
            }
        }
    }

    fn book(&mut self, console: &mut Console<'_>) -> Result<(), ConsoleError> {
        let name = console.prompt("Enter Name: ")?;
        let age: u32 = console.prompt_number("Enter Age: ")?;
        let gender = Gender::from(console.prompt("Enter Gender (Male/Female): ")?.as_str());
        let preference =
            Berth::from(console.prompt("Enter Berth Preference (Lower/Upper): ")?.as_str());

        match self.system.book_ticket(&name, age, gender, preference) {
            Ok(BookingStatus::Confirmed(berth)) => {
                console.say(&format!("Ticket confirmed. Berth: {}", berth))
            }
            Ok(BookingStatus::Rac) => {
                console.say(&format!("Ticket booked under RAC. Berth: {}", Berth::SideLower))
            }
            Ok(BookingStatus::Waiting { position }) => console.say(&format!(
                "Ticket added to waiting list. Position: {}",
                position
            )),
            Err(e) => console.say(&e.to_string()),
        }
    }

    fn cancel(&mut self, console: &mut Console<'_>) -> Result<(), ConsoleError> {
        let name = console.prompt("Enter Name to Cancel: ")?;

        let cancellation = match self.system.cancel_ticket(&name) {
            Ok(cancellation) => cancellation,
            Err(e) => return console.say(&e.to_string()),
        };

        console.say(&format!(
            "Ticket cancelled for {} ({}).",
            cancellation.ticket.name, cancellation.tier
        ))?;
        if let Some(promoted) = &cancellation.promoted_to_rac {
            console.say(&format!("{} moved from waiting list to RAC.", promoted))?;
        }
        if let Some(promoted) = &cancellation.promoted_to_confirmed {
            console.say(&format!("{} moved from RAC to confirmed.", promoted))?;
        }
        Ok(())
    }
}

impl Session for RailwaySession {
    fn run(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<(), ConsoleError> {
        let mut console = Console::new(input, output);
        finish(self.menu(&mut console))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    fn run(session: &mut RailwaySession, script: &str) -> String {
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        session.run(&mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_menu_and_exit() {
        let mut session = RailwaySession::new(ReservationConfig::default());

        let transcript = run(&mut session, "5\n");

        assert_eq!(
            transcript,
            "\nMenu:\n\
             1. Book Ticket\n\
             2. Cancel Ticket\n\
             3. Print Booked Tickets\n\
             4. Print Available Tickets\n\
             5. Exit\n\
             Choose an option: Exiting...\n"
        );
    }

    #[test]
    fn test_book_reports_each_tier() {
        let mut session = RailwaySession::new(ReservationConfig::default());

        let transcript = run(
            &mut session,
            "1\nAsha\n70\nFemale\nLower\n\
             1\nRavi\n30\nMale\nUpper\n\
             1\nMeera\n25\nFemale\nUpper\n\
             1\nDev\n40\nMale\nLower\n5\n",
        );

        assert!(transcript.contains("Ticket confirmed. Berth: Lower"));
        assert!(transcript.contains("Ticket booked under RAC. Berth: Side-Lower"));
        assert!(transcript.contains("Ticket added to waiting list. Position: 1"));
        assert!(transcript.contains("No tickets available."));
    }

    #[test]
    fn test_young_child_is_rejected() {
        let mut session = RailwaySession::new(ReservationConfig::default());

        let transcript = run(&mut session, "1\nTiny\n3\nMale\nLower\n5\n");

        assert!(transcript.contains("cannot be allocated for children below age 5"));
        assert_eq!(session.system().booked_count(), 0);
    }

    #[test]
    fn test_free_text_berth_is_booked_as_entered() {
        let mut session = RailwaySession::new(ReservationConfig::default());

        let transcript = run(
            &mut session,
            "1\nAsha\n30\nprefer not to say\nWindow\n3\n5\n",
        );

        assert!(transcript.contains("Ticket confirmed. Berth: Window"));
        assert!(transcript
            .contains("Name: Asha, Age: 30, Gender: prefer not to say, Berth: Window"));
    }

    #[rstest]
    #[case::child(
        "1\nKid\n3\nMale\nWindow\n5\n",
        "cannot be allocated for children below age 5"
    )]
    #[case::sold_out("1\nAsha\n30\nFemale\nWindow\n5\n", "No tickets available.")]
    fn test_free_text_berth_keeps_booking_rules(#[case] script: &str, #[case] expected: &str) {
        let mut session = RailwaySession::new(ReservationConfig::new(0, 0, 0));

        let transcript = run(&mut session, script);

        assert!(transcript.contains(expected));
        assert_eq!(session.system().booked_count(), 0);
    }

    #[test]
    fn test_non_numeric_age_returns_to_menu() {
        let mut session = RailwaySession::new(ReservationConfig::default());

        let transcript = run(&mut session, "1\nAsha\nold\n5\n");

        assert!(transcript.contains("Invalid number. Please try again."));
        assert!(transcript.ends_with("Exiting...\n"));
    }

    #[test]
    fn test_cancel_reports_promotions() {
        let mut session = RailwaySession::new(ReservationConfig::default());

        let transcript = run(
            &mut session,
            "1\nAsha\n70\nFemale\nLower\n\
             1\nRavi\n30\nMale\nUpper\n\
             1\nMeera\n25\nFemale\nUpper\n\
             2\nAsha\n3\n5\n",
        );

        assert!(transcript.contains("Ticket cancelled for Asha (Confirmed)."));
        assert!(transcript.contains("Meera moved from waiting list to RAC."));
        assert!(transcript.contains("Ravi moved from RAC to confirmed."));
        assert!(transcript.contains(
            "Booked Tickets:\n\
             Name: Ravi, Age: 30, Gender: Male, Berth: Lower\n\
             Name: Meera, Age: 25, Gender: Female, Berth: Side-Lower\n\
             Total booked tickets: 2\n"
        ));
    }

    #[test]
    fn test_cancel_unknown_name() {
        let mut session = RailwaySession::new(ReservationConfig::default());

        let transcript = run(&mut session, "2\nNobody\n5\n");

        assert!(transcript.contains("No confirmed or RAC ticket found for 'Nobody'"));
    }
}
