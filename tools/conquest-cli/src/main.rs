//! conquest: interactive territory-conquest simulator.
//!
//! Usage:
//!   conquest [--seed N] [--log-level LEVEL]
//!
//! Logs go to stderr and honour `RUST_LOG` when set.

mod error;
mod menu;
mod prompt;

use std::io;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use conquest_sim::{GameEngine, SimConfig};

use crate::prompt::Prompter;

#[derive(Debug, Parser)]
#[command(name = "conquest", about = "Turn-based territory conquest simulator")]
struct Args {
    /// Dice seed. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(time_seed);
    tracing::info!(seed, "starting game");

    let mut engine = GameEngine::new(SimConfig {
        seed,
        ..Default::default()
    });

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    match menu::run(&mut engine, &mut prompter) {
        Ok(()) => menu::farewell(&mut prompter),
        Err(err) => {
            tracing::error!(%err, "session aborted");
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
