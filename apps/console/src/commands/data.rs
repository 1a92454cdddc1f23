//! Saving and restoring the store.

use std::io::{BufRead, Write};
use tracing::error;

use coop_core::Store;
use coop_persist::SnapshotFile;

use crate::error::ConsoleResult;
use crate::prompt::Prompter;

/// 13: write the store to the data file.
///
/// A failed save is reported and logged; the session continues.
pub fn save<R: BufRead, W: Write>(
    store: &Store,
    file: &SnapshotFile,
    prompter: &mut Prompter<R, W>,
) -> ConsoleResult<()> {
    match file.save(store) {
        Ok(()) => prompter.say(format!(
            "The store has been saved to {}.",
            file.path().display()
        )),
        Err(err) => {
            error!(error = %err, "Save failed");
            prompter.say(format!("The store could not be saved: {err}"))
        }
    }
}

/// Reads the data file at start-up. `None` means start with an empty store.
pub fn load<R: BufRead, W: Write>(
    file: &SnapshotFile,
    prompter: &mut Prompter<R, W>,
) -> ConsoleResult<Option<Store>> {
    match file.load() {
        Ok(store) => {
            prompter.say(format!(
                "The store has been retrieved from {}.",
                file.path().display()
            ))?;
            Ok(Some(store))
        }
        Err(err) => {
            error!(error = %err, "Load failed");
            prompter.say(format!("Saved data could not be loaded: {err}"))?;
            prompter.say("Starting with an empty store.")?;
            Ok(None)
        }
    }
}
