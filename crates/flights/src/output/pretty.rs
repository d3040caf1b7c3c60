//! Pretty output formatting.

use flights_core::flight::{sort_flights_by_number, sort_passengers_by_name, Flight, Passenger};

/// Format a passenger for display.
pub fn format_passenger(passenger: &Passenger) -> String {
    format!("{}\n  ID: {}", passenger.name, passenger.id)
}

/// Format passengers for display, sorted by name.
pub fn format_passengers(passengers: &[Passenger]) -> String {
    if passengers.is_empty() {
        return "No passengers found.".to_string();
    }
    let mut sorted = passengers.to_vec();
    sort_passengers_by_name(&mut sorted);

    let mut output = format!("PASSENGERS ({})\n", sorted.len());
    output.push_str(&"-".repeat(40));
    for passenger in &sorted {
        output.push_str(&format!("\n{}", format_passenger(passenger)));
        output.push('\n');
    }
    output
}

/// Format a flight and its manifest for display.
pub fn format_flight(flight: &Flight) -> String {
    let mut output = format!(
        "{} ({})\n  Captain: {}\n  Seats: {}/{} booked, {} remaining",
        flight.number,
        flight.plane,
        flight.captain,
        flight.passengers.len(),
        flight.capacity,
        flight.seats_remaining()
    );

    let mut manifest = flight.passengers.clone();
    sort_passengers_by_name(&mut manifest);
    for passenger in &manifest {
        output.push_str(&format!("\n    - {} ({})", passenger.name, passenger.id));
    }
    output
}

/// Format flights for display, sorted by flight number.
pub fn format_flights(flights: &[Flight]) -> String {
    if flights.is_empty() {
        return "No flights found.".to_string();
    }
    let mut sorted = flights.to_vec();
    sort_flights_by_number(&mut sorted);

    let mut output = format!("FLIGHTS ({})\n", sorted.len());
    output.push_str(&"-".repeat(40));
    for flight in &sorted {
        output.push_str(&format!("\n{}", format_flight(flight)));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use flights_core::flight::{expand_flight, FlightRecord};
    use uuid::Uuid;

    use super::*;

    fn passenger(n: u8, name: &str) -> Passenger {
        let id = Uuid::parse_str(&format!("550e8400-e29b-41d4-a716-4466554400{n:02}")).unwrap();
        Passenger::new(name).with_id(id)
    }

    fn flight(number: &str, passengers: Vec<Passenger>) -> Flight {
        let mut record = FlightRecord::new(number, 3, "Kirk", "A320");
        for p in &passengers {
            record = record.with_passenger(p.id);
        }
        expand_flight(record, passengers)
    }

    #[test]
    fn test_format_passengers_empty() {
        assert_eq!(format_passengers(&[]), "No passengers found.");
    }

    #[test]
    fn test_format_passengers_sorted_by_name() {
        let output = format_passengers(&[passenger(2, "Bob"), passenger(1, "Alice")]);

        assert!(output.starts_with("PASSENGERS (2)"));
        let alice = output.find("Alice").unwrap();
        let bob = output.find("Bob").unwrap();
        assert!(alice < bob);
    }

    #[test]
    fn test_format_flight_shows_seats_and_manifest() {
        let passengers = vec![passenger(2, "Bob"), passenger(1, "Alice")];
        let output = format_flight(&flight("BA100", passengers));

        assert!(output.starts_with("BA100 (A320)"));
        assert!(output.contains("Captain: Kirk"));
        assert!(output.contains("Seats: 2/3 booked, 1 remaining"));
        assert!(output.find("- Alice").unwrap() < output.find("- Bob").unwrap());
    }

    #[test]
    fn test_format_flights_empty() {
        assert_eq!(format_flights(&[]), "No flights found.");
    }

    #[test]
    fn test_format_flights_sorted_by_number() {
        let output = format_flights(&[flight("BA200", vec![]), flight("BA100", vec![])]);

        assert!(output.starts_with("FLIGHTS (2)"));
        assert!(output.find("BA100").unwrap() < output.find("BA200").unwrap());
    }
}
