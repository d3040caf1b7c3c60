//! Repository layer mapping passengers and flights onto the store.

mod conversions;
mod flights;

pub use flights::FlightsRepository;
