//! `gesture-replay`: plays a recorded input trace through a
//! [`GestureController`] and prints the outcome as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use orbit_gestures::options::Options;
use orbit_gestures::replay::{self, Trace};
use orbit_gestures::GestureController;

/// Replay a recorded input trace through a gesture controller and print
/// the emitted events and final pose as JSON.
#[derive(Parser, Debug)]
#[command(name = "gesture-replay", version, about)]
struct Cli {
    /// JSON trace file.
    trace: PathBuf,

    /// TOML options preset. Defaults apply when omitted.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Print the options JSON schema instead of replaying.
    #[arg(long)]
    schema: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.schema {
        let schema = serde_json::to_string_pretty(&Options::json_schema())?;
        #[allow(clippy::print_stdout)]
        {
            println!("{schema}");
        }
        return Ok(());
    }

    let options = match &cli.options {
        Some(path) => Options::load(path).with_context(|| {
            format!("loading options from {}", path.display())
        })?,
        None => Options::default(),
    };
    let trace = Trace::load(&cli.trace)
        .with_context(|| {
            format!("loading trace from {}", cli.trace.display())
        })?;

    let mut controller =
        GestureController::new(options, (cli.width, cli.height))
            .context("building gesture controller")?;
    let summary = replay::replay(&mut controller, &trace);
    log::info!(
        "{} steps produced {} events",
        trace.steps.len(),
        summary.events.len()
    );

    let json = serde_json::to_string_pretty(&summary)?;
    #[allow(clippy::print_stdout)]
    {
        println!("{json}");
    }
    Ok(())
}
