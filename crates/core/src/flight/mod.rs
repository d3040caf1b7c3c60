mod operations;
mod types;

pub use operations::{expand_flight, sort_flights_by_number, sort_passengers_by_name};
pub use types::{Flight, FlightRecord, Passenger};
