//! I/O module
//!
//! Handles console interaction and report output.
//!
//! # Components
//!
//! - `console` - Prompt/answer console over any `BufRead` + `Write` pair
//! - `report` - Text reports for accounts, statements, users and tickets

pub mod console;
pub mod report;

pub use console::Console;
pub use report::{
    write_accounts, write_available_tickets, write_booked_tickets, write_statements, write_users,
};
