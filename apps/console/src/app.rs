//! # Console Session
//!
//! Owns the store for the lifetime of the program and drives the menu.
//!
//! ## Start-up
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  --load ─────────────────────┐                                          │
//! │  (ask) data file exists? ─ y ┴──► load ──✓──► loaded store              │
//! │         │                          │                                    │
//! │         n                          ✗ (reported)                         │
//! │         ▼                          ▼                                    │
//! │  --fresh / (ask) ──────────► empty store ──► --test-bed / (ask) y ──►   │
//! │                                                 testbed::populate       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};
use tracing::{debug, info};

use coop_core::{testbed, Store};
use coop_persist::SnapshotFile;

use crate::commands::{checkout, data, member, order, product};
use crate::error::{ConsoleError, ConsoleResult};
use crate::menu::{self, Command};
use crate::prompt::Prompter;

/// Whether to restore the data file at start-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadChoice {
    /// Ask the operator when a data file exists.
    #[default]
    Ask,
    Load,
    Fresh,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Startup {
    pub load: LoadChoice,
    /// Populate a fresh store with sample data without asking.
    pub test_bed: bool,
}

pub struct Console<R, W> {
    store: Store,
    file: SnapshotFile,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Restores or creates the store as `startup` directs.
    pub fn start(
        mut prompter: Prompter<R, W>,
        file: SnapshotFile,
        startup: Startup,
    ) -> ConsoleResult<Self> {
        let wants_load = match startup.load {
            LoadChoice::Load => true,
            LoadChoice::Fresh => false,
            LoadChoice::Ask => {
                file.exists() && prompter.yes_or_no("Look for saved data and use it?")?
            }
        };

        let loaded = if wants_load {
            data::load(&file, &mut prompter)?
        } else {
            None
        };

        let store = match loaded {
            Some(store) => store,
            None => {
                let mut store = Store::new();
                let test_bed = startup.test_bed
                    || (startup.load == LoadChoice::Ask
                        && prompter.yes_or_no("Do you want to generate a test bed?")?);
                if test_bed {
                    testbed::populate(&mut store)?;
                    prompter.say(format!(
                        "Test bed generated: {} members and {} products.",
                        store.members().len(),
                        store.products().len()
                    ))?;
                }
                store
            }
        };

        info!(
            products = store.products().len(),
            members = store.members().len(),
            "Session started"
        );
        Ok(Console {
            store,
            file,
            prompter,
        })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Reads and runs commands until exit or end of input.
    pub fn run_menu(&mut self) -> ConsoleResult<()> {
        self.prompter.say(menu::help_text())?;
        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(ConsoleError::InputClosed) => {
                    info!("Input closed, leaving the menu");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// One command. `false` once the operator chose to exit.
    fn step(&mut self) -> ConsoleResult<bool> {
        let command = self.prompter.command()?;
        debug!(?command, "Command selected");

        let store = &mut self.store;
        let prompter = &mut self.prompter;
        match command {
            Command::Exit => {
                prompter.say("Goodbye.")?;
                return Ok(false);
            }
            Command::EnrollMember => member::enroll(store, prompter)?,
            Command::RemoveMember => member::remove(store, prompter)?,
            Command::AddProducts => product::add(store, prompter)?,
            Command::CheckOutItems => checkout::check_out(store, prompter)?,
            Command::ProcessShipments => order::process_shipments(store, prompter)?,
            Command::ChangePrice => product::change_price(store, prompter)?,
            Command::ProductInfo => product::info(store, prompter)?,
            Command::MemberInfo => member::info(store, prompter)?,
            Command::ListTransactions => checkout::transactions(store, prompter)?,
            Command::ListOutstandingOrders => order::list_outstanding(store, prompter)?,
            Command::ListMembers => member::list(store, prompter)?,
            Command::ListProducts => product::list(store, prompter)?,
            Command::Save => data::save(store, &self.file, prompter)?,
            Command::Help => prompter.say(menu::help_text())?,
        }
        Ok(true)
    }
}

// =============================================================================
// Scripted Sessions
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn temp_file() -> SnapshotFile {
        let dir = std::env::temp_dir().join(format!("coop-console-{}", Uuid::new_v4()));
        SnapshotFile::new(dir.join("coop.json"))
    }

    fn session(input: &str, file: &SnapshotFile, startup: Startup) -> (Store, String) {
        let prompter = Prompter::new(input.as_bytes(), Vec::new());
        let mut console = Console::start(prompter, file.clone(), startup).unwrap();
        console.run_menu().unwrap();

        let store = console.store().clone();
        let output = String::from_utf8(console.into_output()).unwrap();
        (store, output)
    }

    fn with_test_bed() -> Startup {
        Startup {
            load: LoadChoice::Fresh,
            test_bed: true,
        }
    }

    #[test]
    fn test_checkout_then_receive_restock() {
        // sell 6 of P1 (10 → 4 places O21), then receive O21
        let input = "4\nM1\nP1\n6\nn\n5\nO21\nn\n0\n";
        let (store, output) = session(input, &temp_file(), with_test_bed());

        assert!(output.contains("Restock orders were placed."));
        assert!(output.contains("Transaction complete. Total $27.00."));
        assert!(output.contains("Order O21 received. Eggs 12pk stock is now 14."));
        assert_eq!(store.find_product("P1").unwrap().stock_on_hand, 14);
        assert!(output.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_checkout_unknown_member() {
        let (_, output) = session("4\nM9\n0\n", &temp_file(), with_test_bed());
        assert!(output.contains("No member with that id."));
    }

    #[test]
    fn test_checkout_bad_item_then_good_item() {
        let input = "4\nM2\nP99\n1\ny\nP10\n0\ny\nP10\n3\nn\n0\n";
        let (store, output) = session(input, &temp_file(), with_test_bed());

        assert!(output.contains("No product with that id."));
        assert!(output.contains("quantity must be positive."));
        assert!(output.contains("3 x CerealA at $0.35"));
        assert_eq!(store.find_product("P10").unwrap().stock_on_hand, 15);
    }

    #[test]
    fn test_duplicate_product_and_bad_price() {
        let input = "3\nEggs 12pk\nP21\n5\n1.00\n2\ny\nTofu\nP21\n5\n1.0.0\n2\nn\n6\nP1\nfree\n0\n";
        let (store, output) = session(input, &temp_file(), with_test_bed());

        assert!(output.contains("A product with that name already exists."));
        assert_eq!(
            output.matches("The price must be a decimal amount").count(),
            2
        );
        assert_eq!(store.products().len(), 20);
    }

    #[test]
    fn test_member_enroll_lookup_and_remove() {
        let input = "1\nAda Lovelace\n1 Main St\n555-0100\n25\n8\nada\n2\nM1\n2\nM1\n11\n0\n";
        let (store, output) = session(
            input,
            &temp_file(),
            Startup {
                load: LoadChoice::Fresh,
                test_bed: false,
            },
        );

        assert!(output.contains("Member Ada Lovelace enrolled with id M1."));
        assert!(output.contains("fee $25.00"));
        assert!(output.contains("Member M1 (Ada Lovelace) removed."));
        assert!(output.contains("No member with that id."));
        assert!(output.contains("There are no members."));
        assert!(store.members().is_empty());
    }

    #[test]
    fn test_transactions_for_today() {
        let today = Utc::now().date_naive().format("%m/%d/%Y").to_string();
        let input = format!("4\nM3\nP5\n2\nn\n9\nM3\n{today}\n\n9\nM3\n01/01/20\n01/31/20\n0\n");
        let (_, output) = session(&input, &temp_file(), with_test_bed());

        // once at checkout, once in the listing
        let header = format!("Transaction on {today}");
        assert_eq!(output.matches(header.as_str()).count(), 2);
        assert!(output.contains("No transactions in that period."));
    }

    #[test]
    fn test_save_then_load_on_next_start() {
        let file = temp_file();
        let input = "n\n3\nEggs 12pk\nP1\n10\n4.50\n5\nn\n13\n0\n";
        let (_, output) = session(input, &file, Startup::default());
        assert!(output.contains("The store has been saved to"));
        assert!(file.exists());

        let (store, output) = session("y\n12\n10\n0\n", &file, Startup::default());
        assert!(output.contains("The store has been retrieved from"));
        assert!(output.contains("Eggs 12pk"));
        assert_eq!(store.outstanding_orders().len(), 1);
        assert_eq!(store.counters().orders, 1);

        if let Some(dir) = file.path().parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_end_of_input_leaves_menu() {
        let (store, output) = session("14\n", &temp_file(), with_test_bed());
        assert!(output.contains("13 to save data"));
        assert_eq!(store.products().len(), 20);
    }
}
