//! Stop sequencing.
//!
//! - [`nearest_neighbor_order`] — greedy nearest-neighbor from an explicit start, O(n²)
//! - [`RouteOptimizer`] — depot/first-resolved start selection producing a [`RoutePlan`](crate::models::RoutePlan)

mod nearest_neighbor;
mod route_optimizer;

pub use nearest_neighbor::nearest_neighbor_order;
pub use route_optimizer::RouteOptimizer;
