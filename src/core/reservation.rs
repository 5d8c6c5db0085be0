//! Railway reservation system
//!
//! Tickets are allocated into three ordered tiers: confirmed berths, RAC
//! (reservation against cancellation) berths and a waiting list. A booking
//! takes the best tier with free capacity. A cancellation frees a slot and
//! runs a two-step promotion cascade:
//!
//! 1. the head of the waiting list moves into RAC (berth Side-Lower)
//! 2. then, if a confirmed berth is free, the head of RAC moves into
//!    confirmed (berth Lower)
//!
//! Promotion only ever moves a ticket forward (Waiting → RAC → Confirmed).
//!
//! # Invariants
//!
//! After every public operation:
//! - `available_confirmed + confirmed.len() == total_berths`
//! - `available_rac + rac.len() == rac_berths`
//! - `waiting_list_count == waiting.len()`

use crate::types::{Berth, Gender, ReservationError, Ticket, Tier};
use std::collections::VecDeque;

/// Passengers younger than this cannot be booked
pub const MINIMUM_AGE: u32 = 5;

/// Passengers older than this always get a lower berth
pub const SENIOR_AGE: u32 = 60;

/// Capacity of each allocation tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationConfig {
    /// Number of confirmed berths
    pub total_berths: usize,
    /// Number of RAC berths
    pub rac_berths: usize,
    /// Maximum length of the waiting list
    pub waiting_list_limit: usize,
}

impl ReservationConfig {
    pub fn new(total_berths: usize, rac_berths: usize, waiting_list_limit: usize) -> Self {
        ReservationConfig {
            total_berths,
            rac_berths,
            waiting_list_limit,
        }
    }
}

impl Default for ReservationConfig {
    fn default() -> Self {
        ReservationConfig::new(1, 1, 1)
    }
}

/// Where a successful booking landed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingStatus {
    /// Confirmed with the given berth
    Confirmed(Berth),
    /// RAC, always on a side-lower berth
    Rac,
    /// Waiting list, 1-based position
    Waiting { position: usize },
}

/// Result of a successful cancellation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cancellation {
    /// The removed ticket
    pub ticket: Ticket,
    /// Tier the ticket was removed from
    pub tier: Tier,
    /// Passenger moved from the waiting list into RAC, if any
    pub promoted_to_rac: Option<String>,
    /// Passenger moved from RAC into confirmed, if any
    pub promoted_to_confirmed: Option<String>,
}

/// In-memory reservation state for one train
#[derive(Debug, Clone)]
pub struct ReservationSystem {
    config: ReservationConfig,
    confirmed: Vec<Ticket>,
    rac: VecDeque<Ticket>,
    waiting: VecDeque<Ticket>,
    available_confirmed: usize,
    available_rac: usize,
    waiting_list_count: usize,
}

impl ReservationSystem {
    /// Create a reservation system with the default capacities (1/1/1)
    pub fn new() -> Self {
        Self::with_config(ReservationConfig::default())
    }

    /// Create a reservation system with explicit capacities
    pub fn with_config(config: ReservationConfig) -> Self {
        ReservationSystem {
            config,
            confirmed: Vec::with_capacity(config.total_berths),
            rac: VecDeque::with_capacity(config.rac_berths),
            waiting: VecDeque::with_capacity(config.waiting_list_limit),
            available_confirmed: config.total_berths,
            available_rac: config.rac_berths,
            waiting_list_count: 0,
        }
    }

    /// Book a ticket
    ///
    /// Confirmed berths are filled first, then RAC, then the waiting list.
    /// A confirmed passenger older than [`SENIOR_AGE`], or a female passenger
    /// asking for a lower berth, gets `Lower`; everyone else gets their
    /// preference.
    ///
    /// # Errors
    ///
    /// - `AgeBelowMinimum` if `age` is below [`MINIMUM_AGE`]
    /// - `NoTicketsAvailable` if every tier is full
    ///
    /// Neither error changes any state.
    pub fn book_ticket(
        &mut self,
        name: &str,
        age: u32,
        gender: Gender,
        preference: Berth,
    ) -> Result<BookingStatus, ReservationError> {
        if age < MINIMUM_AGE {
            tracing::warn!(passenger = %name, age, "booking rejected: below minimum age");
            return Err(ReservationError::AgeBelowMinimum {
                age,
                minimum: MINIMUM_AGE,
            });
        }

        let status = if self.available_confirmed > 0 {
            let berth = if age > SENIOR_AGE
                || (gender == Gender::Female && preference == Berth::Lower)
            {
                Berth::Lower
            } else {
                preference
            };
            self.confirmed
                .push(Ticket::new(name, age, gender, Some(berth.clone())));
            self.available_confirmed -= 1;
            BookingStatus::Confirmed(berth)
        } else if self.available_rac > 0 {
            self.rac
                .push_back(Ticket::new(name, age, gender, Some(Berth::SideLower)));
            self.available_rac -= 1;
            BookingStatus::Rac
        } else if self.waiting_list_count < self.config.waiting_list_limit {
            self.waiting.push_back(Ticket::new(name, age, gender, None));
            self.waiting_list_count += 1;
            BookingStatus::Waiting {
                position: self.waiting_list_count,
            }
        } else {
            tracing::warn!(passenger = %name, "booking rejected: sold out");
            return Err(ReservationError::NoTicketsAvailable);
        };

        tracing::debug!(passenger = %name, ?status, "ticket booked");
        Ok(status)
    }

    /// Cancel the first confirmed or RAC ticket booked under `name`
    ///
    /// Confirmed tickets are searched before RAC. Waiting-list entries are
    /// not cancellable. A successful cancellation runs the promotion cascade
    /// described in the module docs.
    ///
    /// # Errors
    ///
    /// Returns `TicketNotFound` if no confirmed or RAC ticket matches; no
    /// state changes and no promotion runs.
    pub fn cancel_ticket(&mut self, name: &str) -> Result<Cancellation, ReservationError> {
        let (ticket, tier) = if let Some(index) = self.confirmed.iter().position(|t| t.name == name)
        {
            self.available_confirmed += 1;
            (self.confirmed.remove(index), Tier::Confirmed)
        } else if let Some(index) = self.rac.iter().position(|t| t.name == name) {
            let ticket = self
                .rac
                .remove(index)
                .ok_or_else(|| ReservationError::ticket_not_found(name))?;
            self.available_rac += 1;
            (ticket, Tier::Rac)
        } else {
            return Err(ReservationError::ticket_not_found(name));
        };

        tracing::debug!(passenger = %name, %tier, "ticket cancelled");

        let (promoted_to_rac, rac_slot_owed) = self.promote_waiting_to_rac();
        let promoted_to_confirmed = self.promote_rac_to_confirmed(rac_slot_owed);

        Ok(Cancellation {
            ticket,
            tier,
            promoted_to_rac,
            promoted_to_confirmed,
        })
    }

    /// Cascade step one: move the oldest waiting ticket into RAC
    ///
    /// Uses a free RAC slot when there is one. With RAC full, a free
    /// confirmed berth still allows the move: step two is then guaranteed to
    /// drain the RAC head into that berth, and the slot it vacates is the one
    /// this ticket takes. The returned flag records that debt.
    fn promote_waiting_to_rac(&mut self) -> (Option<String>, bool) {
        if self.waiting.is_empty() {
            return (None, false);
        }
        let slot_owed = self.available_rac == 0;
        if slot_owed && self.available_confirmed == 0 {
            return (None, false);
        }

        let Some(mut ticket) = self.waiting.pop_front() else {
            return (None, false);
        };
        self.waiting_list_count -= 1;
        ticket.berth = Some(Berth::SideLower);
        let name = ticket.name.clone();
        self.rac.push_back(ticket);
        if !slot_owed {
            self.available_rac -= 1;
        }

        tracing::debug!(passenger = %name, "promoted from waiting list to RAC");
        (Some(name), slot_owed)
    }

    /// Cascade step two: move the oldest RAC ticket into a free confirmed berth
    ///
    /// The vacated RAC slot is released unless step one already claimed it.
    fn promote_rac_to_confirmed(&mut self, rac_slot_owed: bool) -> Option<String> {
        if self.available_confirmed == 0 {
            return None;
        }

        let mut ticket = self.rac.pop_front()?;
        if !rac_slot_owed {
            self.available_rac += 1;
        }
        ticket.berth = Some(Berth::Lower);
        let name = ticket.name.clone();
        self.confirmed.push(ticket);
        self.available_confirmed -= 1;

        tracing::debug!(passenger = %name, "promoted from RAC to confirmed");
        Some(name)
    }

    pub fn config(&self) -> ReservationConfig {
        self.config
    }

    /// Confirmed tickets in booking/promotion order
    pub fn confirmed(&self) -> &[Ticket] {
        &self.confirmed
    }

    /// RAC tickets, oldest first
    pub fn rac(&self) -> impl ExactSizeIterator<Item = &Ticket> {
        self.rac.iter()
    }

    /// Waiting-list tickets, oldest first
    pub fn waiting(&self) -> impl ExactSizeIterator<Item = &Ticket> {
        self.waiting.iter()
    }

    pub fn available_confirmed(&self) -> usize {
        self.available_confirmed
    }

    pub fn available_rac(&self) -> usize {
        self.available_rac
    }

    pub fn waiting_list_count(&self) -> usize {
        self.waiting_list_count
    }

    /// Remaining waiting-list slots
    pub fn available_waiting_slots(&self) -> usize {
        self.config.waiting_list_limit - self.waiting_list_count
    }

    /// Confirmed plus RAC tickets
    pub fn booked_count(&self) -> usize {
        self.confirmed.len() + self.rac.len()
    }

    /// Free confirmed, RAC and waiting-list slots combined
    pub fn total_available(&self) -> usize {
        self.available_confirmed + self.available_rac + self.available_waiting_slots()
    }
}

impl Default for ReservationSystem {
    fn default() -> Self {
        Self::new()
    }
}
