use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use engine::{Console, GameConfig, GameOutcome};
use tracing::Level;

#[derive(Parser)]
#[command(name = "slayer")]
#[command(about = "Fight random monsters until you die or reach level 20")]
struct Cli {
    /// RNG seed for a reproducible run (defaults to the wall clock)
    #[arg(long)]
    seed: Option<u64>,
    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Print the final outcome as JSON once the game ends
    #[arg(long, default_value_t = false)]
    json_summary: bool,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(io::stderr)
        .init();

    let config = GameConfig { seed: cli.seed };
    let mut dice = config.dice();
    let mut console = Console::new(io::stdin().lock());
    let mut out = io::stdout().lock();

    let outcome = engine::play(&mut dice, &mut console, &mut out).context("game aborted")?;
    if let GameOutcome::Abandoned { .. } = outcome {
        tracing::warn!("run ended without a result");
    }

    if cli.json_summary {
        serde_json::to_writer_pretty(&mut out, &outcome)?;
        writeln!(out)?;
    }
    Ok(())
}
