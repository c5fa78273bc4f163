//! Command line front end for a casual FIFA league
//!
//! One tournament lives in a JSON data file. Each invocation loads it, applies a
//! single command and saves it back.
//!
//! # Usage
//!
//! ```bash
//! league add-team Arsenal --owner Alice
//! league add-team Chelsea --owner Bob
//! league generate
//! league matches --pending
//! league record <match-id> 2 1 --scorers "Saka, Saka, Palmer"
//! league standings
//! ```

mod cli;
mod commands;
mod config;

pub use cli::*;
pub use commands::*;
pub use config::*;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. `RUST_LOG` wins over `default_level`.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
