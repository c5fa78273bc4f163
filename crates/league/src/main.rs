//! League CLI
//!
//! Add teams, generate fixtures, record results and print the table.

use clap::Parser;
use league::{init_logging, run, Cli, LeagueConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = LeagueConfig::resolve(cli.config.as_deref())?;
    init_logging(&config.log_level);

    let stdout = std::io::stdout();
    run(cli, config, &mut stdout.lock())
}
