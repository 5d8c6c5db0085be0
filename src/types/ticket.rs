//! Ticket-related types for the railway reservation demo

use std::fmt;

/// Berth labels a ticket can hold
///
/// A preference that is not one of the standard berths is kept verbatim as
/// `Other`, so any label the passenger asks for can be booked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Berth {
    Lower,
    Middle,
    Upper,
    SideLower,
    SideUpper,
    Other(String),
}

impl From<&str> for Berth {
    fn from(s: &str) -> Self {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | ' ' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "lower" => Berth::Lower,
            "middle" => Berth::Middle,
            "upper" => Berth::Upper,
            "sidelower" => Berth::SideLower,
            "sideupper" => Berth::SideUpper,
            _ => Berth::Other(s.trim().to_string()),
        }
    }
}

impl fmt::Display for Berth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Berth::Lower => "Lower",
            Berth::Middle => "Middle",
            Berth::Upper => "Upper",
            Berth::SideLower => "Side-Lower",
            Berth::SideUpper => "Side-Upper",
            Berth::Other(label) => label,
        };
        f.write_str(label)
    }
}

/// Passenger gender as entered at booking
///
/// Only `Female` affects berth allocation. Any other answer is kept as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other(String),
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "female" | "f" => Gender::Female,
            "male" | "m" => Gender::Male,
            _ => Gender::Other(s.trim().to_string()),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Other(text) => write!(f, "{}", text),
        }
    }
}

/// Tier a booked ticket is cancelled from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Confirmed,
    /// Reservation against cancellation
    Rac,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Confirmed => write!(f, "Confirmed"),
            Tier::Rac => write!(f, "RAC"),
        }
    }
}

/// A booked passenger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    /// `None` while the ticket is on the waiting list
    pub berth: Option<Berth>,
}

impl Ticket {
    pub fn new(name: &str, age: u32, gender: Gender, berth: Option<Berth>) -> Self {
        Ticket {
            name: name.to_string(),
            age,
            gender,
            berth,
        }
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Age: {}, Gender: {}, Berth: ",
            self.name, self.age, self.gender
        )?;
        match &self.berth {
            Some(berth) => write!(f, "{}", berth),
            None => write!(f, "Waiting"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::lower("Lower", Berth::Lower)]
    #[case::upper_lowercase("upper", Berth::Upper)]
    #[case::side_lower_hyphen("Side-Lower", Berth::SideLower)]
    #[case::side_lower_space("side lower", Berth::SideLower)]
    #[case::side_upper_joined("SIDEUPPER", Berth::SideUpper)]
    #[case::free_text(" Window ", Berth::Other("Window".to_string()))]
    fn test_berth_parsing(#[case] input: &str, #[case] expected: Berth) {
        assert_eq!(Berth::from(input), expected);
    }

    #[test]
    fn test_free_text_berth_displays_as_entered() {
        assert_eq!(Berth::from("Window seat").to_string(), "Window seat");
    }

    #[rstest]
    #[case::female("Female", Gender::Female)]
    #[case::female_lowercase("female", Gender::Female)]
    #[case::male("Male", Gender::Male)]
    #[case::free_text("prefer not to say", Gender::Other("prefer not to say".to_string()))]
    fn test_gender_parsing(#[case] input: &str, #[case] expected: Gender) {
        assert_eq!(Gender::from(input), expected);
    }

    #[test]
    fn test_ticket_display_keeps_entered_gender_text() {
        let ticket = Ticket::new("Sam", 28, Gender::from("Non-binary"), Some(Berth::Upper));

        assert_eq!(
            ticket.to_string(),
            "Name: Sam, Age: 28, Gender: Non-binary, Berth: Upper"
        );
    }

    #[test]
    fn test_ticket_display() {
        let confirmed = Ticket::new("Asha", 34, Gender::Female, Some(Berth::SideLower));
        let waiting = Ticket::new("Ravi", 40, Gender::Male, None);

        assert_eq!(
            confirmed.to_string(),
            "Name: Asha, Age: 34, Gender: Female, Berth: Side-Lower"
        );
        assert_eq!(
            waiting.to_string(),
            "Name: Ravi, Age: 40, Gender: Male, Berth: Waiting"
        );
    }
}
