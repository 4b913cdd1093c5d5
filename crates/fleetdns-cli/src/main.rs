//! FleetDNS CLI
//!
//! Command-line interface for the publish cycle

use clap::{Parser, Subcommand};
use fleetdns_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "fleetdns")]
#[command(about = "FleetDNS - Versioned DNS snapshot publishing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Import host records from a YAML seed file
    Seed(commands::seed::SeedArgs),
    /// Export the current records and publish a snapshot
    Publish(commands::publish::PublishArgs),
    /// Retire superseded publications
    Cleanup(commands::cleanup::CleanupArgs),
    /// Announce the active publication
    Broadcast(commands::broadcast::BroadcastArgs),
}

fn main() {
    logging_facility::init(Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Seed(args) => commands::seed::execute(args),
        Commands::Publish(args) => commands::publish::execute(args),
        Commands::Cleanup(args) => commands::cleanup::execute(args),
        Commands::Broadcast(args) => commands::broadcast::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
