use async_trait::async_trait;
use uuid::Uuid;

use crate::flight::{Flight, Passenger};

use super::Result;

/// Repository for passenger operations.
#[async_trait]
pub trait PassengerRepository: Send + Sync {
    /// Creates a passenger with a newly generated ID and stores it.
    async fn create_passenger(&self, name: &str) -> Result<Passenger>;

    /// Deletes a passenger by its ID.
    ///
    /// Succeeds even if no such passenger existed. Flights that still list
    /// the ID are left untouched.
    async fn delete_passenger(&self, id: Uuid) -> Result<()>;

    /// Gets a passenger by its ID.
    async fn get_passenger(&self, id: Uuid) -> Result<Option<Passenger>>;

    /// Gets every passenger, in whatever order the store returns them.
    async fn get_all_passengers(&self) -> Result<Vec<Passenger>>;
}

/// Repository for flight bookings.
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Adds the passenger to the flight's passenger set.
    ///
    /// Idempotent. Neither the passenger nor the remaining capacity is
    /// checked.
    async fn book_flight(&self, flight_number: &str, passenger_id: Uuid) -> Result<()>;

    /// Removes the passenger from the flight's passenger set.
    ///
    /// Removing a passenger that is not booked is a no-op.
    async fn cancel_booking(&self, flight_number: &str, passenger_id: Uuid) -> Result<()>;

    /// Gets every flight with its booked passengers expanded.
    async fn get_all_flights(&self) -> Result<Vec<Flight>>;
}
