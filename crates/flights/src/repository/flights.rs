//! Passenger and flight repository built on a [`StoreClient`].

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::{stream, StreamExt, TryStreamExt};
use uuid::Uuid;

use flights_core::flight::{expand_flight, Flight, FlightRecord, Passenger};
use flights_core::storage::{
    FlightRepository, ItemKey, PassengerRepository, Result, Table, FLIGHT_PASSENGERS,
};

use super::conversions::{item_to_flight_record, item_to_passenger, passenger_to_item};
use crate::store::StoreClient;

/// Repository for passengers and flight bookings.
///
/// Holds a shared handle to the store and nothing else, so clones are cheap
/// and can be used from concurrent tasks.
pub struct FlightsRepository<S> {
    store: Arc<S>,
    lookup_concurrency: usize,
}

impl<S> Clone for FlightsRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            lookup_concurrency: self.lookup_concurrency,
        }
    }
}

impl<S: StoreClient> FlightsRepository<S> {
    /// Creates a repository that expands flights with sequential lookups.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            lookup_concurrency: 1,
        }
    }

    /// Sets how many passenger lookups may be in flight while expanding a
    /// single flight. Values below 1 are treated as 1.
    pub fn with_lookup_concurrency(mut self, lookup_concurrency: usize) -> Self {
        self.lookup_concurrency = lookup_concurrency.max(1);
        self
    }

    /// Get the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    async fn fetch_passenger(&self, id: Uuid) -> Result<Option<Passenger>> {
        let item = self.store.get_by_key(&ItemKey::passenger(id)).await?;

        match item {
            Some(item) => Ok(Some(item_to_passenger(&item)?)),
            None => Ok(None),
        }
    }

    /// Resolves the flight's passenger IDs into passenger records.
    ///
    /// The first failed lookup aborts the expansion. IDs whose passenger no
    /// longer exists are skipped.
    async fn expand(&self, record: FlightRecord) -> Result<Flight> {
        let ids: Vec<Uuid> = record.passenger_ids.iter().copied().collect();

        let lookups: Vec<_> = ids.iter().map(|id| self.fetch_passenger(*id)).collect();
        let resolved: Vec<Option<Passenger>> = stream::iter(lookups)
            .buffered(self.lookup_concurrency)
            .try_collect()
            .await?;

        let mut passengers = Vec::with_capacity(resolved.len());
        for (id, passenger) in ids.iter().zip(resolved) {
            match passenger {
                Some(passenger) => passengers.push(passenger),
                None => tracing::warn!(
                    flight = %record.number,
                    passenger_id = %id,
                    "Skipping booking for missing passenger"
                ),
            }
        }

        Ok(expand_flight(record, passengers))
    }
}

// ============================================================================
// PassengerRepository implementation
// ============================================================================

#[async_trait]
impl<S: StoreClient + 'static> PassengerRepository for FlightsRepository<S> {
    async fn create_passenger(&self, name: &str) -> Result<Passenger> {
        let passenger = Passenger::new(name);
        let item = passenger_to_item(&passenger)?;

        self.store.put(Table::Passengers, item).await?;

        tracing::debug!(passenger_id = %passenger.id, "Passenger created");
        Ok(passenger)
    }

    async fn delete_passenger(&self, id: Uuid) -> Result<()> {
        self.store.delete_by_key(&ItemKey::passenger(id)).await?;

        tracing::debug!(passenger_id = %id, "Passenger deleted");
        Ok(())
    }

    async fn get_passenger(&self, id: Uuid) -> Result<Option<Passenger>> {
        let passenger = self.fetch_passenger(id).await?;

        if passenger.is_none() {
            tracing::trace!(passenger_id = %id, "Passenger not found");
        }
        Ok(passenger)
    }

    async fn get_all_passengers(&self) -> Result<Vec<Passenger>> {
        let items = self.store.scan_all(Table::Passengers).await?;
        items.iter().map(item_to_passenger).collect()
    }
}

// ============================================================================
// FlightRepository implementation
// ============================================================================

#[async_trait]
impl<S: StoreClient + 'static> FlightRepository for FlightsRepository<S> {
    async fn book_flight(&self, flight_number: &str, passenger_id: Uuid) -> Result<()> {
        self.store
            .add_to_set(FLIGHT_PASSENGERS, flight_number, &passenger_id.to_string())
            .await?;

        tracing::debug!(flight = flight_number, %passenger_id, "Flight booked");
        Ok(())
    }

    async fn cancel_booking(&self, flight_number: &str, passenger_id: Uuid) -> Result<()> {
        self.store
            .remove_from_set(FLIGHT_PASSENGERS, flight_number, &passenger_id.to_string())
            .await?;

        tracing::debug!(flight = flight_number, %passenger_id, "Booking cancelled");
        Ok(())
    }

    async fn get_all_flights(&self) -> Result<Vec<Flight>> {
        let items = self.store.scan_all(Table::Flights).await?;

        let mut flights = Vec::with_capacity(items.len());
        for item in &items {
            let record = item_to_flight_record(item)?;
            flights.push(self.expand(record).await?);
        }

        tracing::trace!(count = flights.len(), "Flights listed");
        Ok(flights)
    }
}
