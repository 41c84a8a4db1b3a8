//! Planning workflow used by route-creation requests.
//!
//! [`RoutePlanner`] ties a [`Geocoder`](crate::geocoding::Geocoder) to the
//! optimizer; [`persist_plan`] writes the resulting positions back through a
//! caller-supplied [`StopStore`].

mod route_planner;
mod store;

pub use route_planner::RoutePlanner;
pub use store::{persist_plan, MemoryStopStore, StopStore, StoredStop};
