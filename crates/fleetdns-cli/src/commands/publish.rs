//! Publish command
//!
//! Exports the current raw records and publishes them as a snapshot.

use clap::Args;
use fleetdns_publisher::{export_dns_records, publish_record_set};
use fleetdns_store::FsBlobstore;

#[derive(Debug, Args)]
pub struct PublishArgs {
    #[arg(long, default_value = ".fleetdns/fleet.db")]
    pub db: String,

    #[arg(long, default_value = ".fleetdns/blobs")]
    pub blobs: String,
}

/// Execute export + publish
pub fn execute(args: PublishArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = super::open_store(&args.db)?;
    let blobstore = FsBlobstore::new(&args.blobs);

    let set = export_dns_records(&conn)?;
    let blobstore_id = publish_record_set(&conn, &blobstore, &set)?;

    println!("Snapshot published:");
    println!("  blobstore_id: {}", blobstore_id);
    println!("  version: {}", set.version);
    println!("  records: {}", set.len());

    Ok(())
}
