//! Start selection and unresolved-stop handling around the greedy pass.

use super::nearest_neighbor::{ensure_unique_ids, sequence};
use crate::error::RoutingError;
use crate::models::{GeoPoint, PlanStart, Resolution, RoutableStop, RoutePlan, SequencedStop};

/// Turns a list of stops into a [`RoutePlan`].
///
/// With a depot configured, the greedy pass starts there and the depot is
/// not part of the plan. Without one, the first stop in input order that has
/// coordinates is the start and the first stop of the plan. Stops without
/// coordinates always end up last, in input order, flagged for manual
/// address entry.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{GeoPoint, RoutableStop, StopId};
/// use u_dispatch::optimizer::RouteOptimizer;
///
/// let shop = GeoPoint::new(0.0, 0.0).unwrap();
/// let stops = vec![
///     RoutableStop::new(1u64, "far").with_coordinates(GeoPoint::new(0.0, 0.02).unwrap()),
///     RoutableStop::new(2u64, "near").with_coordinates(GeoPoint::new(0.0, 0.01).unwrap()),
/// ];
///
/// let plan = RouteOptimizer::new().with_depot(shop).optimize(stops).unwrap();
/// assert_eq!(plan.ids(), vec![StopId::from(2u64), StopId::from(1u64)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteOptimizer {
    depot: Option<GeoPoint>,
}

impl RouteOptimizer {
    /// Creates an optimizer without a depot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts every route at the given depot.
    pub fn with_depot(mut self, depot: GeoPoint) -> Self {
        self.depot = Some(depot);
        self
    }

    /// Configured depot, if any.
    pub fn depot(&self) -> Option<GeoPoint> {
        self.depot
    }

    /// Orders `stops`.
    ///
    /// Never fails because of a missing coordinate: when nothing resolves
    /// and no depot is set, the stops come back in input order, all flagged.
    ///
    /// # Errors
    ///
    /// [`RoutingError::DuplicateStopId`] if two stops share an id.
    pub fn optimize(&self, stops: Vec<RoutableStop>) -> Result<RoutePlan, RoutingError> {
        ensure_unique_ids(&stops)?;

        let plan = match (self.depot, stops.iter().position(|s| s.is_resolved())) {
            (Some(depot), _) => RoutePlan::new(
                PlanStart::Depot { point: depot },
                sequence(depot, None, &stops),
            ),
            (None, Some(first)) => {
                let origin = stops[first]
                    .coordinates()
                    .ok_or_else(|| RoutingError::invalid_start(stops[first].id()))?;
                RoutePlan::new(
                    PlanStart::Stop {
                        id: stops[first].id().clone(),
                    },
                    sequence(origin, Some(first), &stops),
                )
            }
            (None, None) => RoutePlan::new(PlanStart::None, unordered(stops)),
        };

        log::info!(
            "sequenced {} stops ({:.0} m): {}",
            plan.len(),
            plan.total_distance_m(),
            plan.summary()
        );
        Ok(plan)
    }
}

fn unordered(stops: Vec<RoutableStop>) -> Vec<SequencedStop> {
    stops
        .into_iter()
        .enumerate()
        .map(|(i, stop)| SequencedStop {
            stop,
            sequence_index: i + 1,
            resolution: Resolution::Unresolved,
        })
        .collect()
}
