//! Route plan and resolution summary types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{GeoPoint, Resolution, SequencedStop, StopId};

/// Where the nearest-neighbor pass started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PlanStart {
    /// A depot coordinate that is not itself a delivery.
    Depot {
        /// Depot location.
        point: GeoPoint,
    },
    /// A delivery stop, which is also the first element of the plan.
    Stop {
        /// Starting stop.
        id: StopId,
    },
    /// No stop resolved, so nothing was ordered by distance.
    None,
}

/// The ordered result of one optimization call.
///
/// Every input stop appears exactly once. Resolved stops come first in
/// nearest-neighbor order, unresolved ones follow in input order.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{GeoPoint, RoutableStop};
/// use u_dispatch::optimizer::RouteOptimizer;
///
/// let stops = vec![
///     RoutableStop::new(1u64, "A").with_coordinates(GeoPoint::new(0.0, 0.0).unwrap()),
///     RoutableStop::new(2u64, "B"),
///     RoutableStop::new(3u64, "C").with_coordinates(GeoPoint::new(0.0, 0.01).unwrap()),
/// ];
/// let plan = RouteOptimizer::new().optimize(stops).unwrap();
/// assert_eq!(plan.len(), 3);
/// assert_eq!(plan.num_unresolved(), 1);
/// assert_eq!(
///     plan.summary().to_string(),
///     "1 of 3 addresses could not be located; review and fix"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    start: PlanStart,
    stops: Vec<SequencedStop>,
}

impl RoutePlan {
    /// Creates a plan from already-sequenced stops.
    pub fn new(start: PlanStart, stops: Vec<SequencedStop>) -> Self {
        Self { start, stops }
    }

    /// Where ordering started.
    pub fn start(&self) -> &PlanStart {
        &self.start
    }

    /// Stops in visiting order.
    pub fn stops(&self) -> &[SequencedStop] {
        &self.stops
    }

    /// Consumes the plan, returning the stops in visiting order.
    pub fn into_stops(self) -> Vec<SequencedStop> {
        self.stops
    }

    /// Stop ids in visiting order.
    pub fn ids(&self) -> Vec<StopId> {
        self.stops.iter().map(|s| s.id().clone()).collect()
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the plan has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Stops that were ordered by distance.
    pub fn resolved(&self) -> impl Iterator<Item = &SequencedStop> {
        self.stops
            .iter()
            .filter(|s| s.resolution == Resolution::Resolved)
    }

    /// Stops that need a manual address fix.
    pub fn unresolved(&self) -> impl Iterator<Item = &SequencedStop> {
        self.stops.iter().filter(|s| s.needs_manual_address())
    }

    /// Number of unresolved stops.
    pub fn num_unresolved(&self) -> usize {
        self.unresolved().count()
    }

    /// Great-circle length of the resolved part of the route, in meters.
    ///
    /// Includes the leg from the depot when the plan started at one.
    pub fn total_distance_m(&self) -> f64 {
        let mut prev = match &self.start {
            PlanStart::Depot { point } => Some(*point),
            _ => None,
        };
        let mut total = 0.0;
        for point in self.resolved().filter_map(|s| s.stop.coordinates()) {
            if let Some(p) = prev {
                total += p.distance_to(&point);
            }
            prev = Some(point);
        }
        total
    }

    /// Counts for user-facing reporting.
    pub fn summary(&self) -> ResolutionSummary {
        ResolutionSummary {
            total: self.len(),
            unresolved: self.num_unresolved(),
        }
    }
}

/// How many addresses of a plan could not be located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionSummary {
    /// Stops in the plan.
    pub total: usize,
    /// Stops without coordinates.
    pub unresolved: usize,
}

impl ResolutionSummary {
    /// Returns `true` if every address was located.
    pub fn is_complete(&self) -> bool {
        self.unresolved == 0
    }
}

impl fmt::Display for ResolutionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_complete() {
            write!(f, "all {} addresses located", self.total)
        } else {
            write!(
                f,
                "{} of {} addresses could not be located; review and fix",
                self.unresolved, self.total
            )
        }
    }
}
