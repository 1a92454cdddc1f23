//! # Co-op Store Console
//!
//! Numbered-menu front end for the store. Reads commands from stdin, prints
//! results to stdout, and logs to stderr.
//!
//! ## Module Organization
//! ```text
//! coop_console/
//! ├── lib.rs          ◄─── You are here (flags, logging, run)
//! ├── app.rs          ◄─── Start-up and the menu loop
//! ├── config.rs       ◄─── Data file and log filter settings
//! ├── menu.rs         ◄─── Command numbers and help text
//! ├── prompt.rs       ◄─── Prompting and input parsing
//! ├── commands/
//! │   ├── member.rs   ◄─── Enroll, remove, look up members
//! │   ├── product.rs  ◄─── Add products, change prices, look up products
//! │   ├── checkout.rs ◄─── Check out, list transactions
//! │   ├── order.rs    ◄─── Shipments, outstanding orders
//! │   └── data.rs     ◄─── Save and load
//! └── error.rs        ◄─── Console errors and result code messages
//! ```

pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod menu;
pub mod prompt;

use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use coop_persist::SnapshotFile;

use app::{Console, LoadChoice, Startup};
use config::ConsoleConfig;
use error::ConsoleResult;
use prompt::Prompter;

/// Command-line flags.
#[derive(Debug, Parser)]
#[command(name = "coop")]
#[command(author, version, about = "Co-op store operator console")]
pub struct Cli {
    /// Config file (default: coop.toml in the platform config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Data file to load from and save to
    #[arg(short, long)]
    pub data_file: Option<PathBuf>,

    /// Load saved data without asking
    #[arg(long, conflicts_with = "fresh")]
    pub load: bool,

    /// Start with an empty store without asking
    #[arg(long)]
    pub fresh: bool,

    /// Fill a fresh store with sample members and products
    #[arg(long, conflicts_with = "load")]
    pub test_bed: bool,
}

impl Cli {
    pub fn startup(&self) -> Startup {
        let load = if self.load {
            LoadChoice::Load
        } else if self.fresh || self.test_bed {
            LoadChoice::Fresh
        } else {
            LoadChoice::Ask
        };
        Startup {
            load,
            test_bed: self.test_bed,
        }
    }
}

/// Runs the console until the operator exits.
///
/// ## Startup Sequence
/// 1. Parse flags
/// 2. Load configuration (defaults → file → environment → `--data-file`)
/// 3. Initialize logging with the configured filter
/// 4. Restore or create the store
/// 5. Menu loop
pub fn run() -> ConsoleResult<()> {
    let cli = Cli::parse();

    let mut config = ConsoleConfig::load(cli.config.clone())?;
    if let Some(path) = &cli.data_file {
        config.data.file = path.clone();
        config.validate()?;
    }

    init_tracing(&config.log.filter);
    info!(data_file = %config.data.file.display(), "Starting co-op store console");

    let prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
    let file = SnapshotFile::new(&config.data.file);
    let mut console = Console::start(prompter, file, cli.startup())?;
    console.run_menu()?;

    info!("Console closed");
    Ok(())
}

/// Initializes the tracing subscriber on stderr.
///
/// `RUST_LOG` overrides the configured filter.
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_startup_from_flags() {
        let cli = Cli::try_parse_from(["coop"]).unwrap();
        assert_eq!(cli.startup(), Startup::default());

        let cli = Cli::try_parse_from(["coop", "--load", "-d", "store.json"]).unwrap();
        assert_eq!(cli.startup().load, LoadChoice::Load);
        assert_eq!(cli.data_file, Some(PathBuf::from("store.json")));

        let cli = Cli::try_parse_from(["coop", "--test-bed"]).unwrap();
        assert_eq!(
            cli.startup(),
            Startup {
                load: LoadChoice::Fresh,
                test_bed: true
            }
        );
    }

    #[test]
    fn test_conflicting_flags() {
        assert!(Cli::try_parse_from(["coop", "--load", "--fresh"]).is_err());
        assert!(Cli::try_parse_from(["coop", "--load", "--test-bed"]).is_err());
    }
}
