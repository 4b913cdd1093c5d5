//! Broadcast command
//!
//! Announces the active publication. The real agent transport lives outside
//! this repository; the CLI prints the payload it would fan out.

use clap::Args;
use fleetdns_publisher::{broadcast_current_blob, AgentNotifier, SyncDnsPayload};

#[derive(Debug, Args)]
pub struct BroadcastArgs {
    #[arg(long, default_value = ".fleetdns/fleet.db")]
    pub db: String,
}

/// Prints each payload as one JSON line
struct StdoutNotifier;

impl AgentNotifier for StdoutNotifier {
    fn notify_all(&self, payload: &SyncDnsPayload) -> fleetdns_core::Result<()> {
        println!("{}", serde_json::to_string(payload)?);
        Ok(())
    }
}

/// Execute broadcast
pub fn execute(args: BroadcastArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = super::open_store(&args.db)?;

    match broadcast_current_blob(&conn, &StdoutNotifier)? {
        Some(payload) => {
            println!("Broadcast version {} to agents", payload.version);
        }
        None => {
            println!("No published snapshot; nothing to broadcast");
        }
    }

    Ok(())
}
