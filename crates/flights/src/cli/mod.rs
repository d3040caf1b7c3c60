//! CLI command definitions.

pub mod flights;
pub mod passengers;

use clap::{Parser, Subcommand, ValueEnum};

/// Manage passengers and flight bookings stored in DynamoDB.
#[derive(Debug, Parser)]
#[command(name = "flights")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Custom DynamoDB endpoint (e.g. http://localhost:8000).
    #[arg(long, global = true)]
    pub endpoint_url: Option<String>,

    /// AWS region.
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Output format.
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Passenger management.
    Passengers(passengers::PassengersCommand),
    /// Flight listing and bookings.
    Flights(flights::FlightsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use uuid::Uuid;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_passenger_create() {
        let cli = Cli::parse_from(["flights", "passengers", "create", "--name", "Alice"]);

        assert_eq!(cli.format, OutputFormat::Pretty);
        match cli.command {
            Commands::Passengers(cmd) => match cmd.action {
                passengers::PassengersAction::Create { name } => assert_eq!(name, "Alice"),
                other => panic!("unexpected action: {:?}", other),
            },
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_book_with_global_flags_after_subcommand() {
        let id = Uuid::new_v4();
        let cli = Cli::parse_from([
            "flights",
            "flights",
            "book",
            "BA100",
            &id.to_string(),
            "--format",
            "json",
            "--endpoint-url",
            "http://localhost:8000",
        ]);

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.endpoint_url.as_deref(), Some("http://localhost:8000"));
        match cli.command {
            Commands::Flights(cmd) => match cmd.action {
                flights::FlightsAction::Book { flight, passenger } => {
                    assert_eq!(flight, "BA100");
                    assert_eq!(passenger, id);
                }
                other => panic!("unexpected action: {:?}", other),
            },
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_passenger_id_is_rejected() {
        let result = Cli::try_parse_from(["flights", "passengers", "get", "not-a-uuid"]);
        assert!(result.is_err());
    }
}
