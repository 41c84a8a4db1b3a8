//! Address geocoding.
//!
//! - [`Geocoder`] — one-method provider trait, swappable without touching the optimizer
//! - [`NominatimGeocoder`] — OpenStreetMap Nominatim (shared public service, paced)
//! - [`PeliasGeocoder`] — openrouteservice or self-hosted Pelias
//! - [`StaticGeocoder`] — fixed in-memory table
//! - [`resolve_address`] / [`resolve_stops`] — caller-facing entry points that
//!   turn failures into missing coordinates

mod batch;
mod error;
mod geocoder;
#[cfg(test)]
mod loopback;
pub mod nominatim;
pub mod pelias;
mod query;
mod rate_limit;
mod static_table;

pub use batch::{resolve_address, resolve_stops};
pub use error::GeocodeError;
pub use geocoder::Geocoder;
pub use nominatim::NominatimGeocoder;
pub use pelias::PeliasGeocoder;
pub use query::build_query;
pub use rate_limit::Limiter;
pub use static_table::StaticGeocoder;
