//! Domain types for the flight planner.
//!
//! This module contains the core domain model: validated flight records,
//! the time window a query runs in, and the itinerary a query returns.
//! Types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod error;
mod flight;
mod itinerary;
mod window;

pub use error::DomainError;
pub use flight::{CityId, Fare, Flight, FlightId, Time};
pub use itinerary::Itinerary;
pub use window::TimeWindow;
