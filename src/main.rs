/// Main entry point for the console habit tracker
///
/// This file sets up logging, parses command line arguments, and starts the
/// interactive menu shell over stdin/stdout.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use habit_tracker::{FlatFileStorage, HabitStore, Shell, DEFAULT_DATA_FILE};

/// Command line arguments for the habit tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the habit data file
    /// If not provided, uses habits.data in the working directory
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_tracker={}", log_level))
        .with_writer(std::io::stderr) // Keep the interactive surface on stdout clean
        .init();

    let data_file = args
        .data_file
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
    info!("Using data file at: {}", data_file.display());

    let store = HabitStore::open(FlatFileStorage::new(data_file));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(store, stdin.lock(), stdout.lock());
    shell.run()?;

    info!("Habit tracker shutdown complete");
    Ok(())
}
