//! flights CLI entry point.

use std::sync::Arc;

use clap::Parser;
use flights::cli::{Cli, Commands};
use flights::output::{format_output, pretty};
use flights::{Config, DynamoDbStore, FlightsRepository};
use flights_core::storage::{FlightRepository, PassengerRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "flights=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let mut config = Config::from_env();
    if let Some(endpoint_url) = cli.endpoint_url.clone() {
        config.endpoint_url = Some(endpoint_url);
    }
    if let Some(region) = cli.region.clone() {
        config.region = region;
    }

    let store = DynamoDbStore::from_config(&config).await;
    let repo =
        FlightsRepository::new(Arc::new(store)).with_lookup_concurrency(config.lookup_concurrency);

    match cli.command {
        Commands::Passengers(passengers_cmd) => {
            use flights::cli::passengers::PassengersAction;
            match passengers_cmd.action {
                PassengersAction::List => {
                    let passengers = repo.get_all_passengers().await?;
                    println!(
                        "{}",
                        format_output(&passengers, cli.format, |p| pretty::format_passengers(p))
                    );
                }
                PassengersAction::Create { name } => {
                    let passenger = repo.create_passenger(&name).await?;
                    println!(
                        "{}",
                        format_output(&passenger, cli.format, |p| {
                            format!("Created:\n{}", pretty::format_passenger(p))
                        })
                    );
                }
                PassengersAction::Get { id } => {
                    let passenger = repo
                        .get_passenger(id)
                        .await?
                        .ok_or_else(|| anyhow::anyhow!("Passenger {} not found", id))?;
                    println!(
                        "{}",
                        format_output(&passenger, cli.format, pretty::format_passenger)
                    );
                }
                PassengersAction::Delete { id } => {
                    repo.delete_passenger(id).await?;
                    if !cli.quiet {
                        println!("Deleted passenger {}", id);
                    }
                }
            }
        }
        Commands::Flights(flights_cmd) => {
            use flights::cli::flights::FlightsAction;
            match flights_cmd.action {
                FlightsAction::List => {
                    let flights = repo.get_all_flights().await?;
                    println!(
                        "{}",
                        format_output(&flights, cli.format, |f| pretty::format_flights(f))
                    );
                }
                FlightsAction::Book { flight, passenger } => {
                    repo.book_flight(&flight, passenger).await?;
                    if !cli.quiet {
                        println!("Booked passenger {} on {}", passenger, flight);
                    }
                }
                FlightsAction::Cancel { flight, passenger } => {
                    repo.cancel_booking(&flight, passenger).await?;
                    if !cli.quiet {
                        println!("Cancelled booking for passenger {} on {}", passenger, flight);
                    }
                }
            }
        }
    }

    Ok(())
}
