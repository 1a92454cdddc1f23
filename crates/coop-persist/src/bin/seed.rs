//! # Seed Data Generator
//!
//! Writes a data file holding the sample members and products, ready for
//! the console's "load saved data" start-up option.
//!
//! ## Usage
//! ```bash
//! # Write ./coop.json
//! cargo run -p coop-persist --bin seed
//!
//! # Specify the data file, replacing one that exists
//! cargo run -p coop-persist --bin seed -- --data-file ./data/coop.json --force
//! ```

use clap::Parser;
use std::path::PathBuf;

use coop_core::{testbed, Store};
use coop_persist::SnapshotFile;

#[derive(Parser)]
#[command(name = "seed")]
#[command(about = "Co-op store seed data generator", long_about = None)]
struct Args {
    /// Data file to write
    #[arg(short, long, default_value = "./coop.json")]
    data_file: PathBuf,

    /// Overwrite an existing data file
    #[arg(short, long)]
    force: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    println!("Co-op Store Seed Data Generator");
    println!("===============================");
    println!("Data file: {}", args.data_file.display());
    println!();

    let file = SnapshotFile::new(&args.data_file);
    if file.exists() && !args.force {
        println!("⚠ {} already exists", args.data_file.display());
        println!("  Skipping seed to avoid overwriting saved data.");
        println!("  Pass --force to replace it.");
        return Ok(());
    }

    let mut store = Store::new();
    testbed::populate(&mut store)?;
    println!(
        "✓ Generated {} members and {} products",
        store.members().len(),
        store.products().len()
    );
    println!("  {} initial orders outstanding", store.outstanding_orders().len());

    file.save(&store)?;

    println!();
    println!("✓ Seed complete!");
    Ok(())
}
