use crate::core::ReservationConfig;
use crate::session::{BankConfig, SessionConfig};
use crate::types::WithdrawalLog;
use clap::{Parser, Subcommand, ValueEnum};

/// Interactive bank account and railway reservation demos
#[derive(Parser, Debug)]
#[command(name = "demos")]
#[command(about = "Interactive bank account and railway reservation demos", long_about = None)]
pub struct CliArgs {
    /// Demo to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available demos
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Bank account manager
    Bank {
        /// Start with no registered users
        #[arg(
            long = "no-demo-users",
            help = "Do not register the demo users user1 and user2"
        )]
        no_demo_users: bool,

        /// How withdrawals are written to the transaction history
        #[arg(
            long = "withdrawal-log",
            value_name = "MODE",
            default_value = "single",
            help = "Withdrawal history entries: 'single' or 'legacy' (deposit of -amount plus withdrawal)"
        )]
        withdrawal_log: WithdrawalLogArg,
    },

    /// Railway reservation system
    Railway {
        /// Number of confirmed berths
        #[arg(long = "total-berths", value_name = "N", default_value_t = 1)]
        total_berths: usize,

        /// Number of RAC berths
        #[arg(long = "rac-berths", value_name = "N", default_value_t = 1)]
        rac_berths: usize,

        /// Maximum waiting list length
        #[arg(long = "waiting-list-limit", value_name = "N", default_value_t = 1)]
        waiting_list_limit: usize,
    },
}

/// Withdrawal log modes accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum WithdrawalLogArg {
    Single,
    Legacy,
}

impl From<WithdrawalLogArg> for WithdrawalLog {
    fn from(arg: WithdrawalLogArg) -> Self {
        match arg {
            WithdrawalLogArg::Single => WithdrawalLog::Single,
            WithdrawalLogArg::Legacy => WithdrawalLog::Legacy,
        }
    }
}

impl CliArgs {
    /// Build the session configuration for the selected demo
    pub fn to_session_config(&self) -> SessionConfig {
        match &self.command {
            Command::Bank { .. } => SessionConfig::Bank(self.to_bank_config()),
            Command::Railway { .. } => SessionConfig::Railway(self.to_reservation_config()),
        }
    }

    /// Create a BankConfig from CLI arguments
    ///
    /// # Returns
    ///
    /// The configured `BankConfig` for the `bank` subcommand, or
    /// `BankConfig::default()` for any other subcommand.
    pub fn to_bank_config(&self) -> BankConfig {
        match &self.command {
            Command::Bank {
                no_demo_users,
                withdrawal_log,
            } => BankConfig {
                seed_demo_users: !no_demo_users,
                withdrawal_log: (*withdrawal_log).into(),
            },
            _ => BankConfig::default(),
        }
    }

    /// Create a ReservationConfig from CLI arguments
    ///
    /// # Returns
    ///
    /// The capacities given to the `railway` subcommand, or
    /// `ReservationConfig::default()` for any other subcommand.
    pub fn to_reservation_config(&self) -> ReservationConfig {
        match &self.command {
            Command::Railway {
                total_berths,
                rac_berths,
                waiting_list_limit,
            } => ReservationConfig::new(*total_berths, *rac_berths, *waiting_list_limit),
            _ => ReservationConfig::default(),
        }
    }
}
