//! # u-dispatch
//!
//! Delivery stop sequencing for multi-stop courier routes: resolve free-text
//! addresses to coordinates, tolerate the ones that fail, and order the rest
//! with a greedy nearest-neighbor pass on great-circle distance.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (GeoPoint, RoutableStop, SequencedStop, RoutePlan)
//! - [`distance`] — Haversine distance and distance matrix
//! - [`geocoding`] — Geocoder trait, HTTP providers, batch resolution
//! - [`optimizer`] — Nearest-neighbor sequencing and start selection
//! - [`planner`] — Geocode-then-sequence workflow and persistence seam
//! - [`navigation`] — External maps directions link
//! - [`config`] — Geocoder configuration from the environment
//! - [`error`] — Errors surfaced to callers

pub mod config;
pub mod distance;
pub mod error;
pub mod geocoding;
pub mod models;
pub mod navigation;
pub mod optimizer;
pub mod planner;

pub use error::RoutingError;
