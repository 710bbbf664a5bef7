//! Play blackjack against the dealer in the terminal.

use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_table::{GameOptions, IoConsole, Session};
use clap::Parser;

/// Single-player blackjack against a dealer who stands on 17.
#[derive(Debug, Parser)]
#[command(name = "blackjack", version, about)]
struct Cli {
    /// Seed for shuffling; defaults to the current time.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Visible score at which the dealer stops drawing.
    #[arg(long, value_name = "SCORE", default_value_t = GameOptions::default().dealer_stands_on)]
    dealer_stands_on: u8,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("shuffling with seed {seed}");

    let options = GameOptions::default().with_dealer_stands_on(cli.dealer_stands_on);
    let mut session = Session::new(IoConsole::stdio(), options, seed);
    session.run()?;

    Ok(())
}
