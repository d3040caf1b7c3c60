//! End-to-end booking flow against the in-memory store.

use std::sync::Arc;

use aws_sdk_dynamodb::types::AttributeValue;
use flights::{FlightsRepository, InMemoryStore, Item, StoreClient};
use flights_core::storage::{
    FlightRepository, PassengerRepository, RepositoryError, StoreError, Table,
};

fn flight_item(number: &str, capacity: u32, captain: &str, plane: &str) -> Item {
    let mut item = Item::new();
    item.insert("number".to_string(), AttributeValue::S(number.to_string()));
    item.insert("capacity".to_string(), AttributeValue::N(capacity.to_string()));
    item.insert("captain".to_string(), AttributeValue::S(captain.to_string()));
    item.insert("plane".to_string(), AttributeValue::S(plane.to_string()));
    item
}

async fn seeded_repo() -> FlightsRepository<InMemoryStore> {
    let store = InMemoryStore::new();
    store
        .put(Table::Flights, flight_item("BA100", 180, "Kirk", "A320"))
        .await
        .unwrap();
    store
        .put(Table::Flights, flight_item("BA200", 90, "Picard", "E190"))
        .await
        .unwrap();
    FlightsRepository::new(Arc::new(store)).with_lookup_concurrency(4)
}

#[tokio::test]
async fn test_book_list_cancel_delete() {
    let repo = seeded_repo().await;

    let alice = repo.create_passenger("Alice").await.unwrap();
    repo.book_flight("BA100", alice.id).await.unwrap();

    let flights = repo.get_all_flights().await.unwrap();
    let ba100 = flights.iter().find(|f| f.number == "BA100").unwrap();
    assert_eq!(ba100.passengers, vec![alice.clone()]);
    assert_eq!(ba100.seats_remaining(), 179);
    let ba200 = flights.iter().find(|f| f.number == "BA200").unwrap();
    assert!(ba200.passengers.is_empty());

    repo.cancel_booking("BA100", alice.id).await.unwrap();
    let flights = repo.get_all_flights().await.unwrap();
    assert!(flights.iter().all(|f| f.passengers.is_empty()));

    repo.delete_passenger(alice.id).await.unwrap();
    assert!(repo.get_passenger(alice.id).await.unwrap().is_none());
    assert!(repo.get_all_passengers().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_deleting_booked_passenger_leaves_flight_listable() {
    let repo = seeded_repo().await;
    let alice = repo.create_passenger("Alice").await.unwrap();
    let bob = repo.create_passenger("Bob").await.unwrap();
    repo.book_flight("BA100", alice.id).await.unwrap();
    repo.book_flight("BA100", bob.id).await.unwrap();

    repo.delete_passenger(alice.id).await.unwrap();

    let flights = repo.get_all_flights().await.unwrap();
    let ba100 = flights.iter().find(|f| f.number == "BA100").unwrap();
    assert_eq!(ba100.passengers, vec![bob]);
}

#[tokio::test]
async fn test_concurrent_bookings_all_land() {
    let repo = seeded_repo().await;

    let mut passengers = Vec::new();
    for i in 0..10 {
        passengers.push(repo.create_passenger(&format!("Passenger {i}")).await.unwrap());
    }

    let handles: Vec<_> = passengers
        .iter()
        .map(|p| {
            let repo = repo.clone();
            let id = p.id;
            tokio::spawn(async move { repo.book_flight("BA100", id).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let flights = repo.get_all_flights().await.unwrap();
    let ba100 = flights.iter().find(|f| f.number == "BA100").unwrap();
    assert_eq!(ba100.passengers.len(), passengers.len());
    assert!(passengers.iter().all(|p| ba100.has_passenger(p.id)));
}

#[tokio::test]
async fn test_booking_unknown_flight_is_rejected() {
    let repo = seeded_repo().await;
    let alice = repo.create_passenger("Alice").await.unwrap();

    let result = repo.book_flight("ZZ001", alice.id).await;

    assert!(matches!(
        result,
        Err(RepositoryError::Store(StoreError::ItemNotFound { .. }))
    ));
    assert_eq!(repo.store().item_count(Table::Flights).await, 2);
}
