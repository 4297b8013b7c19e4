use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use videodeck::catalog;
use videodeck::interact::{SeededPicker, StdinSelection, UniformPicker};
use videodeck::repl;
use videodeck::Controller;

#[derive(Parser, Debug)]
#[command(name = "videodeck")]
#[command(about = "In-memory video catalog and playback simulator", long_about = None)]
struct Args {
    /// Path to a JSON catalog of videos (built-in demo catalog if omitted)
    #[arg(short = 'c', long)]
    catalog: Option<PathBuf>,

    /// Seed the random-play source for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let library = match &args.catalog {
        Some(path) => catalog::load_catalog(path)?,
        None => catalog::sample_catalog()?,
    };

    if let Some(seed) = args.seed {
        log::debug!("random picker seeded with {seed}");
        let mut controller = Controller::new(library, SeededPicker::new(seed), StdinSelection);
        repl::run(&mut controller)?;
    } else {
        let mut controller = Controller::new(library, UniformPicker::new(), StdinSelection);
        repl::run(&mut controller)?;
    }

    Ok(())
}
