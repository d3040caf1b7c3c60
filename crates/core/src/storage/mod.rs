mod error;
mod tables;
mod traits;

pub use error::{RepositoryError, Result, StoreError};
pub use tables::{
    ItemKey, SetMutation, StringSet, Table, TableNames, FLIGHTS_TABLE, FLIGHT_NUMBER_KEY,
    FLIGHT_PASSENGERS, PASSENGERS_TABLE, PASSENGER_ID_KEY,
};
pub use traits::{FlightRepository, PassengerRepository};
