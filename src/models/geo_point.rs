//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

use crate::distance::haversine_m;

/// A validated latitude/longitude pair in decimal degrees.
///
/// There is no sentinel value for "unknown": a coordinate that could not be
/// resolved is represented as `Option::<GeoPoint>::None` by the owning type.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::GeoPoint;
///
/// let p = GeoPoint::new(-23.5505, -46.6333).unwrap();
/// assert_eq!(p.latitude(), -23.5505);
/// assert!(GeoPoint::new(91.0, 0.0).is_none());
/// assert!(GeoPoint::new(0.0, 0.0).is_some()); // a real place in the Atlantic
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LatLon", into = "LatLon")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a new point.
    ///
    /// Returns `None` if either value is non-finite, latitude is outside
    /// [-90, 90] or longitude is outside [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return None;
        }
        Some(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another point, in meters.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        haversine_m(self, other)
    }
}

#[derive(Serialize, Deserialize)]
struct LatLon {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<LatLon> for GeoPoint {
    type Error = String;

    fn try_from(value: LatLon) -> Result<Self, Self::Error> {
        GeoPoint::new(value.latitude, value.longitude).ok_or_else(|| {
            format!(
                "coordinate out of range: ({}, {})",
                value.latitude, value.longitude
            )
        })
    }
}

impl From<GeoPoint> for LatLon {
    fn from(p: GeoPoint) -> Self {
        Self {
            latitude: p.latitude,
            longitude: p.longitude,
        }
    }
}
