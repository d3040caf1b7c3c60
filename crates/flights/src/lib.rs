//! flights - DynamoDB data layer for flights and passengers.
//!
//! [`store`] holds the table-scoped store primitives (DynamoDB and an
//! in-memory double); [`repository`] builds the passenger and flight
//! operations on top of them.

pub mod cli;
pub mod config;
pub mod output;
pub mod repository;
pub mod store;

pub use config::Config;
pub use repository::FlightsRepository;
pub use store::{DynamoDbStore, InMemoryStore, Item, StoreClient};
