//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between attribute maps and domain types.
//! These are testable in isolation without DynamoDB access.

use std::collections::BTreeSet;

use aws_sdk_dynamodb::types::AttributeValue;
use flights_core::flight::{FlightRecord, Passenger};
use flights_core::storage::{RepositoryError, Table, FLIGHT_PASSENGERS};
use uuid::Uuid;

use crate::store::Item;

const PASSENGER: &str = Table::Passengers.entity_type();
const FLIGHT: &str = Table::Flights.entity_type();

// ============================================================================
// Passenger conversions
// ============================================================================

/// Convert a Passenger to a DynamoDB item.
///
/// The name is stored as given; only the key attribute must be non-empty,
/// and a generated UUID always is.
pub fn passenger_to_item(passenger: &Passenger) -> Result<Item, RepositoryError> {
    let mut item = Item::new();
    item.insert("id".to_string(), AttributeValue::S(passenger.id.to_string()));
    item.insert("name".to_string(), AttributeValue::S(passenger.name.clone()));

    Ok(item)
}

/// Convert a DynamoDB item to Passenger.
pub fn item_to_passenger(item: &Item) -> Result<Passenger, RepositoryError> {
    Ok(Passenger {
        id: get_uuid(item, "id", PASSENGER)?,
        name: get_string(item, "name", PASSENGER)?,
    })
}

// ============================================================================
// Flight conversions
// ============================================================================

/// Convert a FlightRecord to a DynamoDB item.
///
/// An empty passenger set is left out: the store rejects empty string sets
/// and a missing attribute reads back as no bookings.
pub fn flight_record_to_item(record: &FlightRecord) -> Result<Item, RepositoryError> {
    if record.number.is_empty() {
        return Err(RepositoryError::Marshal {
            entity_type: FLIGHT,
            reason: "number must not be empty".to_string(),
        });
    }

    let mut item = Item::new();
    item.insert("number".to_string(), AttributeValue::S(record.number.clone()));
    item.insert(
        "capacity".to_string(),
        AttributeValue::N(record.capacity.to_string()),
    );
    item.insert("captain".to_string(), AttributeValue::S(record.captain.clone()));
    item.insert("plane".to_string(), AttributeValue::S(record.plane.clone()));

    if !record.passenger_ids.is_empty() {
        item.insert(
            FLIGHT_PASSENGERS.attribute.to_string(),
            AttributeValue::Ss(record.passenger_ids.iter().map(Uuid::to_string).collect()),
        );
    }

    Ok(item)
}

/// Convert a DynamoDB item to FlightRecord.
pub fn item_to_flight_record(item: &Item) -> Result<FlightRecord, RepositoryError> {
    Ok(FlightRecord {
        number: get_string(item, "number", FLIGHT)?,
        capacity: get_u32(item, "capacity", FLIGHT)?,
        captain: get_string(item, "captain", FLIGHT)?,
        plane: get_string(item, "plane", FLIGHT)?,
        passenger_ids: get_uuid_set(item, FLIGHT_PASSENGERS.attribute, FLIGHT)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

fn invalid(entity_type: &'static str, reason: String) -> RepositoryError {
    RepositoryError::Unmarshal {
        entity_type,
        reason,
    }
}

/// Get a required string attribute.
fn get_string(
    item: &Item,
    key: &str,
    entity_type: &'static str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| invalid(entity_type, format!("Missing or invalid field: {}", key)))
}

/// Get a required UUID attribute.
fn get_uuid(item: &Item, key: &str, entity_type: &'static str) -> Result<Uuid, RepositoryError> {
    let s = get_string(item, key, entity_type)?;
    Uuid::parse_str(&s).map_err(|e| invalid(entity_type, format!("Invalid UUID {}: {}", key, e)))
}

/// Get a required non-negative number attribute.
fn get_u32(item: &Item, key: &str, entity_type: &'static str) -> Result<u32, RepositoryError> {
    let n = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| invalid(entity_type, format!("Missing or invalid field: {}", key)))?;
    n.parse()
        .map_err(|e| invalid(entity_type, format!("Invalid number {}: {}", key, e)))
}

/// Get an optional string set of UUIDs. A missing attribute is an empty set.
fn get_uuid_set(
    item: &Item,
    key: &str,
    entity_type: &'static str,
) -> Result<BTreeSet<Uuid>, RepositoryError> {
    let Some(value) = item.get(key) else {
        return Ok(BTreeSet::new());
    };
    let members = value
        .as_ss()
        .map_err(|_| invalid(entity_type, format!("Field {} is not a string set", key)))?;

    members
        .iter()
        .map(|m| {
            Uuid::parse_str(m)
                .map_err(|e| invalid(entity_type, format!("Invalid UUID in {}: {}", key, e)))
        })
        .collect()
}
