//! Route planner using best-first search.
//!
//! This module implements the three route queries over the flight graph:
//! fewest flights (then earliest arrival), cheapest fare, and fewest
//! flights (then cheapest fare). Each is a best-first search driven by a
//! [`PriorityQueue`](crate::queue::PriorityQueue) with its own ordering,
//! pruning states that an earlier one dominates.

mod cheapest;
mod config;
mod labels;
mod least_flights;
mod least_flights_cheapest;
mod path;
mod search;


pub use config::{DEFAULT_MIN_LAYOVER, PlannerConfig};
pub use search::{Objective, Planner, QueryError, RouteQuery};
