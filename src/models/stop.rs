//! Delivery stop types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// Opaque identifier of a delivery stop.
///
/// Unique within one optimization call; used to re-associate results with
/// whatever record the caller persists.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::StopId;
///
/// assert_eq!(StopId::from(42u64), StopId::from("42"));
/// assert_eq!(StopId::from("d-7").to_string(), "d-7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(String);

impl StopId {
    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StopId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StopId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for StopId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

/// One delivery stop, as seen by the sequencer.
///
/// A transient projection of the caller's delivery record: an id, the
/// free-text address, and coordinates if they are already known or were
/// resolved by a [`Geocoder`](crate::geocoding::Geocoder).
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{GeoPoint, RoutableStop};
///
/// let s = RoutableStop::new(1u64, "Rua Augusta, 100");
/// assert!(!s.is_resolved());
///
/// let s = s.with_coordinates(GeoPoint::new(-23.55, -46.65).unwrap());
/// assert!(s.is_resolved());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutableStop {
    id: StopId,
    address: String,
    #[serde(default)]
    coordinates: Option<GeoPoint>,
}

impl RoutableStop {
    /// Creates a stop without coordinates.
    pub fn new(id: impl Into<StopId>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            coordinates: None,
        }
    }

    /// Sets known coordinates for this stop.
    pub fn with_coordinates(mut self, point: GeoPoint) -> Self {
        self.coordinates = Some(point);
        self
    }

    /// Stop identifier.
    pub fn id(&self) -> &StopId {
        &self.id
    }

    /// Free-text address used for geocoding.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Resolved coordinates, if any.
    pub fn coordinates(&self) -> Option<GeoPoint> {
        self.coordinates
    }

    /// Replaces the coordinates.
    pub fn set_coordinates(&mut self, point: Option<GeoPoint>) {
        self.coordinates = point;
    }

    /// Returns `true` if coordinates are present.
    pub fn is_resolved(&self) -> bool {
        self.coordinates.is_some()
    }
}

/// Whether a sequenced stop took part in distance-based ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Ordered by nearest-neighbor selection.
    Resolved,
    /// No coordinates; appended after every resolved stop.
    Unresolved,
}

/// A stop with its assigned position in the visiting order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequencedStop {
    /// The stop itself.
    pub stop: RoutableStop,
    /// 1-based visiting position.
    pub sequence_index: usize,
    /// How the stop was placed.
    pub resolution: Resolution,
}

impl SequencedStop {
    /// Stop identifier.
    pub fn id(&self) -> &StopId {
        self.stop.id()
    }

    /// Returns `true` if the operator has to fix this stop's address.
    pub fn needs_manual_address(&self) -> bool {
        self.resolution == Resolution::Unresolved
    }
}
