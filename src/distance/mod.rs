//! Great-circle distances.
//!
//! Provides the haversine distance and a dense distance matrix over resolved
//! stop coordinates.

mod haversine;
mod matrix;

pub use haversine::{haversine_m, EARTH_RADIUS_M};
pub use matrix::DistanceMatrix;
