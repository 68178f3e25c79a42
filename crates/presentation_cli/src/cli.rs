//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Route planner CLI
#[derive(Debug, Parser)]
#[command(name = "route-planner")]
#[command(author, version, about = "Plan driving routes between two places", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, env = "ROUTE_PLANNER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve two places and print the driving route between them
    ///
    /// Example: route-planner route --from Pune --to Mumbai
    Route {
        /// Start address
        #[arg(long, required_unless_present = "current_location")]
        from: Option<String>,

        /// Destination address
        #[arg(long)]
        to: String,

        /// Start from the device position instead of an address
        #[arg(long, conflicts_with = "from")]
        current_location: bool,
    },

    /// Interactive session; type `help` for commands
    Session,

    /// Print the effective configuration as TOML
    Config,
}
