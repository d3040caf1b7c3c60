//! JSON output formatting.

/// Format a value as JSON.
pub fn format_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use flights_core::flight::Passenger;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_format_passenger_as_json() {
        let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap();
        let passenger = Passenger::new("Alice").with_id(id);

        let json = format_json(&passenger);

        assert_eq!(
            json,
            r#"{"id":"550e8400-e29b-41d4-a716-446655440001","name":"Alice"}"#
        );
    }
}
