//! SlotDB CLI
//!
//! Command-line interface for a SlotDB database file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use slotdb::dispatch::{self, Action};
use slotdb::{Config, SyncStrategy};
use tracing_subscriber::{fmt, EnvFilter};

/// SlotDB CLI
#[derive(Parser, Debug)]
#[command(name = "slotdb")]
#[command(about = "Fixed-slot record store in a single flat file")]
#[command(version)]
struct Args {
    /// Database file
    file: PathBuf,

    /// Action: c=create, g=get, s=set, d=del, l=list
    action: String,

    /// Action parameters (ID for get/delete, ID NAME EMAIL for set)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    params: Vec<String>,

    /// fsync the file after every write
    #[arg(long)]
    sync: bool,
}

impl Args {
    /// `--sync` given after the action lands in `params`; pull it back out
    fn normalize(mut self) -> Self {
        let before = self.params.len();
        self.params.retain(|param| param != "--sync");
        self.sync |= self.params.len() != before;
        self
    }
}

fn main() -> ExitCode {
    // Initialize tracing/logging (stderr, so stdout carries only records)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse().normalize();

    let sync_strategy = if args.sync {
        SyncStrategy::SyncAll
    } else {
        SyncStrategy::Flush
    };
    let config = Config::builder()
        .path(&args.file)
        .sync_strategy(sync_strategy)
        .build();

    let outcome = Action::parse(&args.action, &args.params)
        .and_then(|action| dispatch::execute(&config, &action));

    match outcome {
        Ok(outcome) => {
            for slot in outcome.printable() {
                println!("{}", slot);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Action failed");
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}
