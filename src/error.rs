//! Hard errors surfaced to callers of the sequencer.
//!
//! Geocoding failures are not here: they become `None` coordinates and are
//! handled by the unresolved-stop policy.

use thiserror::Error;

use crate::models::StopId;

/// Reasons a plan cannot be produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    /// The starting point has no coordinates, so there is nothing to measure
    /// distances from.
    #[error("start point {0} has no coordinates")]
    InvalidStartPoint(String),

    /// Two input stops share an id.
    #[error("stop id {0} appears more than once")]
    DuplicateStopId(StopId),
}

impl RoutingError {
    pub(crate) fn invalid_start(id: &StopId) -> Self {
        Self::InvalidStartPoint(format!("'{id}'"))
    }

    pub(crate) fn unresolvable_depot(address: &str) -> Self {
        Self::InvalidStartPoint(format!("depot '{address}'"))
    }
}
