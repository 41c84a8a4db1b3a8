//! End-to-end planning: geocode, then sequence.

use crate::error::RoutingError;
use crate::geocoding::{resolve_address, resolve_stops, Geocoder};
use crate::models::{GeoPoint, RoutableStop, RoutePlan};
use crate::optimizer::RouteOptimizer;

/// Geocodes the stops that need it and orders the result.
///
/// # Examples
///
/// ```
/// use u_dispatch::geocoding::StaticGeocoder;
/// use u_dispatch::models::{GeoPoint, RoutableStop, StopId};
/// use u_dispatch::planner::RoutePlanner;
///
/// let geocoder = StaticGeocoder::new()
///     .with_entry("X", GeoPoint::new(0.0, 0.0).unwrap())
///     .with_entry("Z", GeoPoint::new(0.0, 0.02).unwrap());
/// let planner = RoutePlanner::new(geocoder);
///
/// let plan = planner
///     .plan(vec![
///         RoutableStop::new(1u64, "X"),
///         RoutableStop::new(2u64, "Y"),
///         RoutableStop::new(3u64, "Z"),
///     ])
///     .unwrap();
/// assert_eq!(plan.ids(), vec![StopId::from(1u64), StopId::from(3u64), StopId::from(2u64)]);
/// assert!(plan.stops()[2].needs_manual_address());
/// ```
#[derive(Debug)]
pub struct RoutePlanner<G> {
    geocoder: G,
    optimizer: RouteOptimizer,
}

impl<G: Geocoder> RoutePlanner<G> {
    /// Creates a planner without a depot.
    pub fn new(geocoder: G) -> Self {
        Self {
            geocoder,
            optimizer: RouteOptimizer::new(),
        }
    }

    /// Starts routes at a known depot coordinate.
    pub fn with_depot(mut self, depot: GeoPoint) -> Self {
        self.optimizer = self.optimizer.with_depot(depot);
        self
    }

    /// Geocodes the depot address and starts routes there.
    ///
    /// # Errors
    ///
    /// [`RoutingError::InvalidStartPoint`] if the address cannot be located.
    pub fn with_depot_address(self, address: &str) -> Result<Self, RoutingError> {
        let depot = resolve_address(&self.geocoder, address)
            .ok_or_else(|| RoutingError::unresolvable_depot(address))?;
        log::info!(
            "depot \"{}\" at ({}, {})",
            address.trim(),
            depot.latitude(),
            depot.longitude()
        );
        Ok(self.with_depot(depot))
    }

    /// The geocoder in use.
    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    /// The optimizer in use.
    pub fn optimizer(&self) -> &RouteOptimizer {
        &self.optimizer
    }

    /// Resolves missing coordinates and sequences every stop.
    ///
    /// # Errors
    ///
    /// [`RoutingError::DuplicateStopId`] if two stops share an id.
    pub fn plan(&self, stops: Vec<RoutableStop>) -> Result<RoutePlan, RoutingError> {
        let stops = resolve_stops(&self.geocoder, stops);
        let plan = self.optimizer.optimize(stops)?;
        if !plan.summary().is_complete() {
            for s in plan.unresolved() {
                log::warn!(
                    "stop {} needs manual address entry: \"{}\"",
                    s.id(),
                    s.stop.address()
                );
            }
        }
        Ok(plan)
    }
}
