//! Flight CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Flight commands.
#[derive(Debug, Parser)]
pub struct FlightsCommand {
    #[command(subcommand)]
    pub action: FlightsAction,
}

/// Available flight actions.
#[derive(Debug, Subcommand)]
pub enum FlightsAction {
    /// List all flights with their passengers.
    List,
    /// Book a passenger onto a flight.
    Book {
        /// Flight number.
        flight: String,
        /// Passenger ID.
        passenger: Uuid,
    },
    /// Cancel a passenger's booking.
    Cancel {
        /// Flight number.
        flight: String,
        /// Passenger ID.
        passenger: Uuid,
    },
}
