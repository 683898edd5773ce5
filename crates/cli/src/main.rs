use std::io::{self, IsTerminal};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

/// extractor - inspect the settings an extraction profile resolves to
#[derive(Parser)]
#[command(name = "extractor")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable debug logging (overridden by RUST_LOG)
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Resolve the extraction settings a profile produces
  Settings {
    /// Path to the Lua profile
    profile: PathBuf,

    /// Number of per-worker scripting states (default: EXTRACTOR_WORKERS or CPU count)
    #[arg(short, long)]
    workers: Option<NonZeroUsize>,

    /// Print the settings as JSON
    #[arg(long)]
    json: bool,
  },

  /// Print the value of a profile global as seen by worker 0
  Global {
    /// Path to the Lua profile
    profile: PathBuf,

    /// Name of the global to read
    name: String,

    /// Print the value as JSON
    #[arg(long)]
    json: bool,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  match cli.command {
    Commands::Settings { profile, workers, json } => cmd::cmd_settings(&profile, workers, json),
    Commands::Global { profile, name, json } => cmd::cmd_global(&profile, &name, json),
  }
}

fn init_logging(verbose: bool) {
  let default = if verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_ansi(io::stderr().is_terminal())
    .without_time()
    .init();
}
