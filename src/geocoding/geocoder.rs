//! Geocoder trait.

use std::sync::Arc;

use super::GeocodeError;
use crate::models::GeoPoint;

/// Resolves a free-text address to a coordinate.
///
/// One call is one provider lookup: implementations do not retry and do not
/// chain fallbacks. Retrying, caching and choosing another provider are the
/// caller's business. Implementations must be shareable across threads,
/// since a batch is resolved in parallel.
///
/// # Examples
///
/// ```
/// use u_dispatch::geocoding::{GeocodeError, Geocoder};
/// use u_dispatch::models::GeoPoint;
///
/// struct Fixed;
///
/// impl Geocoder for Fixed {
///     fn resolve(&self, _address: &str) -> Result<GeoPoint, GeocodeError> {
///         GeoPoint::new(-23.55, -46.63).ok_or(GeocodeError::Malformed("range".into()))
///     }
///     fn name(&self) -> &str { "fixed" }
/// }
///
/// assert!(Fixed.resolve("anything").is_ok());
/// ```
pub trait Geocoder: Send + Sync {
    /// Resolves `address` to the provider's best-ranked coordinate.
    fn resolve(&self, address: &str) -> Result<GeoPoint, GeocodeError>;

    /// Short provider name for logs.
    fn name(&self) -> &str;
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn resolve(&self, address: &str) -> Result<GeoPoint, GeocodeError> {
        (**self).resolve(address)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<G: Geocoder + ?Sized> Geocoder for Box<G> {
    fn resolve(&self, address: &str) -> Result<GeoPoint, GeocodeError> {
        (**self).resolve(address)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<G: Geocoder + ?Sized> Geocoder for Arc<G> {
    fn resolve(&self, address: &str) -> Result<GeoPoint, GeocodeError> {
        (**self).resolve(address)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
