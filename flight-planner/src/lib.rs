//! Multi-criteria flight route planner.
//!
//! Given scheduled point-to-point flights, answers: "how do I get from
//! this city to that one within this time window?" under three objectives
//! (fewest flights, cheapest fare, fewest flights then cheapest), with a
//! minimum layover between connecting flights.

pub mod domain;
pub mod graph;
pub mod planner;
pub mod queue;
