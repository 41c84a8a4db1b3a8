//! In-memory geocoder.

use std::collections::HashMap;

use super::{GeocodeError, Geocoder};
use crate::models::GeoPoint;

/// Looks addresses up in a fixed table.
///
/// Matching ignores surrounding whitespace and case. Useful for addresses
/// whose coordinates are already stored and as a deterministic stand-in for
/// a network provider.
///
/// # Examples
///
/// ```
/// use u_dispatch::geocoding::{Geocoder, StaticGeocoder};
/// use u_dispatch::models::GeoPoint;
///
/// let g = StaticGeocoder::new()
///     .with_entry("Rua Augusta, 100", GeoPoint::new(-23.55, -46.65).unwrap());
/// assert!(g.resolve("  rua augusta, 100").is_ok());
/// assert!(g.resolve("Rua Oscar Freire").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    entries: HashMap<String, GeoPoint>,
}

impl StaticGeocoder {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry.
    pub fn with_entry(mut self, address: &str, point: GeoPoint) -> Self {
        self.insert(address, point);
        self
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, address: &str, point: GeoPoint) {
        self.entries.insert(normalize(address), point);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(address: &str) -> String {
    address.trim().to_lowercase()
}

impl Geocoder for StaticGeocoder {
    fn resolve(&self, address: &str) -> Result<GeoPoint, GeocodeError> {
        let key = normalize(address);
        if key.is_empty() {
            return Err(GeocodeError::EmptyAddress);
        }
        self.entries
            .get(&key)
            .copied()
            .ok_or_else(|| GeocodeError::NotFound {
                query: address.trim().to_string(),
            })
    }

    fn name(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let mut g = StaticGeocoder::new();
        g.insert("A", GeoPoint::new(1.0, 2.0).expect("valid"));
        assert_eq!(g.len(), 1);
        assert_eq!(g.resolve("a").expect("found").longitude(), 2.0);
    }

    #[test]
    fn test_missing_and_empty() {
        let g = StaticGeocoder::new();
        assert!(g.is_empty());
        assert_eq!(
            g.resolve(" X "),
            Err(GeocodeError::NotFound { query: "X".into() })
        );
        assert_eq!(g.resolve(""), Err(GeocodeError::EmptyAddress));
    }
}
