//! # Co-op Store Console Entry Point
//!
//! ## Usage
//! ```bash
//! # Ask whether to load saved data, then show the menu
//! coop
//!
//! # Start empty with the sample members and products
//! coop --test-bed
//!
//! # Load a specific data file without asking
//! coop --load --data-file ./coop.json
//! ```
//!
//! The setup is in lib.rs so the menu can be driven from tests.

use std::process::ExitCode;

fn main() -> ExitCode {
    match coop_console::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("coop: {err}");
            ExitCode::FAILURE
        }
    }
}
