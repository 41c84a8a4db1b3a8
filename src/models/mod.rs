//! Domain model types for delivery stop sequencing.
//!
//! Provides validated geographic points, delivery stops whose coordinates may
//! be missing, stops with an assigned visiting position, and the route plan
//! returned by the optimizer.

mod geo_point;
mod plan;
mod stop;

pub use geo_point::GeoPoint;
pub use plan::{PlanStart, ResolutionSummary, RoutePlan};
pub use stop::{Resolution, RoutableStop, SequencedStop, StopId};
