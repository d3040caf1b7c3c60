//! Pure functions over flight records.

use super::{Flight, FlightRecord, Passenger};

/// Builds the read view of a flight from its record and the passengers
/// resolved for its booked IDs.
///
/// Passengers are kept in the order given. The caller decides how IDs that
/// could not be resolved are handled; this function does not look at
/// `record.passenger_ids` again.
pub fn expand_flight(record: FlightRecord, passengers: Vec<Passenger>) -> Flight {
    Flight {
        number: record.number,
        capacity: record.capacity,
        captain: record.captain,
        plane: record.plane,
        passengers,
    }
}

/// Sorts flights by number so listings are stable across scans.
pub fn sort_flights_by_number(flights: &mut [Flight]) {
    flights.sort_by(|a, b| a.number.cmp(&b.number));
}

/// Sorts passengers by name, then ID.
pub fn sort_passengers_by_name(passengers: &mut [Passenger]) {
    passengers.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
}
