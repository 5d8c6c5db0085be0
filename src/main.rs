//! Bank and Railway Demos CLI
//!
//! Runs one of the two interactive menu programs on stdin/stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- bank
//! cargo run -- bank --no-demo-users --withdrawal-log legacy
//! cargo run -- railway
//! cargo run -- railway --total-berths 63 --rac-berths 18 --waiting-list-limit 10
//! ```
//!
//! Diagnostics are written to stderr through `tracing`; set `RUST_LOG=debug`
//! to see every booking, promotion and balance change.
//!
//! # Exit Codes
//!
//! - 0: Success (Exit option or end of input)
//! - 1: Error (demo users could not be registered, console I/O failed)

use bank_rail_demos::cli;
use bank_rail_demos::session;
use std::env;
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

/// Log filter from `RUST_LOG` directives, falling back to `warn` when they
/// are missing or invalid
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() {
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(io::stderr)
        .init();

    let args = cli::parse_args();

    let mut session = match session::create_session(args.to_session_config()) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    if let Err(e) = session.run(&mut input, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
