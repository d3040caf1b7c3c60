use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A passenger that can be booked onto flights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    /// Generated once at creation and never changed.
    pub id: Uuid,
    pub name: String,
}

impl Passenger {
    /// Creates a new passenger with a freshly generated ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    /// Sets a specific ID for this passenger (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

/// A flight as it is stored in the `flights` table.
///
/// Bookings are kept as a set of passenger IDs. The set is mutated on its own
/// by booking and cancellation; the flight record itself is seeded externally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Natural key of the flight (e.g. `BA100`).
    pub number: String,
    pub capacity: u32,
    pub captain: String,
    pub plane: String,
    pub passenger_ids: BTreeSet<Uuid>,
}

impl FlightRecord {
    /// Creates a flight record with no bookings.
    pub fn new(
        number: impl Into<String>,
        capacity: u32,
        captain: impl Into<String>,
        plane: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            capacity,
            captain: captain.into(),
            plane: plane.into(),
            passenger_ids: BTreeSet::new(),
        }
    }

    /// Adds a booked passenger ID.
    pub fn with_passenger(mut self, passenger_id: Uuid) -> Self {
        self.passenger_ids.insert(passenger_id);
        self
    }
}

/// A flight with its passenger IDs expanded into full passenger records.
///
/// This is a read-only projection; it is never written back to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub number: String,
    pub capacity: u32,
    pub captain: String,
    pub plane: String,
    pub passengers: Vec<Passenger>,
}

impl Flight {
    /// Seats left before reaching capacity. Zero when overbooked.
    pub fn seats_remaining(&self) -> u32 {
        let booked = u32::try_from(self.passengers.len()).unwrap_or(u32::MAX);
        self.capacity.saturating_sub(booked)
    }

    /// Returns true if the passenger is on this flight.
    pub fn has_passenger(&self, passenger_id: Uuid) -> bool {
        self.passengers.iter().any(|p| p.id == passenger_id)
    }
}
