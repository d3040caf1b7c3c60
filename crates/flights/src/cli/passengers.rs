//! Passenger CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Passenger management commands.
#[derive(Debug, Parser)]
pub struct PassengersCommand {
    #[command(subcommand)]
    pub action: PassengersAction,
}

/// Available passenger actions.
#[derive(Debug, Subcommand)]
pub enum PassengersAction {
    /// List all passengers.
    List,
    /// Create a new passenger.
    Create {
        /// Passenger name.
        #[arg(long)]
        name: String,
    },
    /// Get passenger by ID.
    Get {
        /// Passenger ID.
        id: Uuid,
    },
    /// Delete passenger by ID.
    Delete {
        /// Passenger ID.
        id: Uuid,
    },
}
