//! Seed import command
//!
//! Usage: fleetdns seed <PATH> [--db <DB>]

use clap::Args;
use fleetdns_store::records::{parse_seed, seed_records};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Path to a YAML seed file of host entries
    pub path: PathBuf,

    #[arg(long, default_value = ".fleetdns/fleet.db")]
    pub db: String,
}

/// Execute seed import
pub fn execute(args: SeedArgs) -> Result<(), Box<dyn std::error::Error>> {
    let yaml = std::fs::read_to_string(&args.path)?;
    let hosts = parse_seed(&yaml)?;

    let mut conn = super::open_store(&args.db)?;
    let inserted = seed_records(&mut conn, &hosts)?;

    println!("Seeded {} host record(s)", inserted);

    Ok(())
}
