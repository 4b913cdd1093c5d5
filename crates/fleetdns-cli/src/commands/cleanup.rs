//! Cleanup command
//!
//! Retires every superseded publication into the archive.

use clap::Args;
use fleetdns_publisher::enforce_retention;

#[derive(Debug, Args)]
pub struct CleanupArgs {
    #[arg(long, default_value = ".fleetdns/fleet.db")]
    pub db: String,
}

/// Execute retention enforcement
pub fn execute(args: CleanupArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = super::open_store(&args.db)?;

    let outcome = enforce_retention(&mut conn)?;

    match outcome.active_id {
        Some(active_id) => {
            println!("Retired {} publication(s); active ledger id: {}", outcome.archived, active_id);
        }
        None => {
            println!("Nothing published yet; nothing to retire");
        }
    }

    Ok(())
}
