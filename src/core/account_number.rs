//! Account number generation
//!
//! Account numbers are `ACC` followed by the creation time in Unix
//! milliseconds. Two accounts opened within the same millisecond would
//! collide, so the generator never issues a timestamp at or below the last
//! one it handed out.

use crate::types::AccountNumber;
use chrono::Utc;

const PREFIX: &str = "ACC";

/// Issues unique, increasing, timestamp-derived account numbers
#[derive(Debug, Default)]
pub struct AccountNumberGenerator {
    last_issued: Option<i64>,
}

impl AccountNumberGenerator {
    pub fn new() -> Self {
        AccountNumberGenerator { last_issued: None }
    }

    /// Next account number based on the current wall clock
    pub fn next_number(&mut self) -> AccountNumber {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Next account number for a given timestamp in milliseconds
    ///
    /// If the clock has not moved past the previous number, the previous
    /// number plus one is used instead.
    pub fn next_at(&mut self, millis: i64) -> AccountNumber {
        let stamp = match self.last_issued {
            Some(last) if millis <= last => last + 1,
            _ => millis,
        };
        self.last_issued = Some(stamp);
        format!("{}{}", PREFIX, stamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_is_prefixed_timestamp() {
        let mut generator = AccountNumberGenerator::new();
        assert_eq!(generator.next_at(1_718_040_000_000), "ACC1718040000000");
    }

    #[test]
    fn test_same_millisecond_yields_distinct_numbers() {
        let mut generator = AccountNumberGenerator::new();

        let first = generator.next_at(1_000);
        let second = generator.next_at(1_000);
        let third = generator.next_at(999);

        assert_eq!(first, "ACC1000");
        assert_eq!(second, "ACC1001");
        assert_eq!(third, "ACC1002");
    }

    #[test]
    fn test_clock_moving_forward_is_used_directly() {
        let mut generator = AccountNumberGenerator::new();

        generator.next_at(1_000);
        assert_eq!(generator.next_at(5_000), "ACC5000");
    }

    #[test]
    fn test_wall_clock_numbers_are_unique() {
        let mut generator = AccountNumberGenerator::new();

        let numbers: Vec<_> = (0..50).map(|_| generator.next_number()).collect();
        let mut deduped = numbers.clone();
        deduped.dedup();

        assert_eq!(numbers.len(), deduped.len());
        assert!(numbers.iter().all(|n| n.starts_with("ACC")));
    }
}
