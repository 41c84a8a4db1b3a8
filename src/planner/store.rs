//! Persistence seam for sequencing results.

use std::collections::HashMap;
use std::convert::Infallible;

use crate::models::{GeoPoint, RoutePlan, StopId};

/// Whatever the caller stores deliveries in.
///
/// The sequencer only ever writes back a stop's position and, when known,
/// its coordinates.
pub trait StopStore {
    /// Failure reported by the backing store.
    type Error;

    /// Stores the visiting position of `id` and, if present, its coordinates.
    fn record_sequence(
        &mut self,
        id: &StopId,
        sequence_index: usize,
        coordinates: Option<GeoPoint>,
    ) -> Result<(), Self::Error>;
}

/// Writes every stop of `plan` to `store`, stopping at the first error.
pub fn persist_plan<S: StopStore>(store: &mut S, plan: &RoutePlan) -> Result<(), S::Error> {
    for s in plan.stops() {
        store.record_sequence(s.id(), s.sequence_index, s.stop.coordinates())?;
    }
    log::debug!("persisted {} stop positions", plan.len());
    Ok(())
}

/// Stored fields of one stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoredStop {
    /// 1-based visiting position from the latest plan.
    pub sequence_index: usize,
    /// Last known coordinates.
    pub coordinates: Option<GeoPoint>,
}

/// A [`StopStore`] kept in a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStopStore {
    records: HashMap<StopId, StoredStop>,
}

impl MemoryStopStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored fields of `id`, if recorded.
    pub fn get(&self, id: &StopId) -> Option<&StoredStop> {
        self.records.get(id)
    }

    /// Number of recorded stops.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl StopStore for MemoryStopStore {
    type Error = Infallible;

    fn record_sequence(
        &mut self,
        id: &StopId,
        sequence_index: usize,
        coordinates: Option<GeoPoint>,
    ) -> Result<(), Self::Error> {
        let entry = self.records.entry(id.clone()).or_insert(StoredStop {
            sequence_index,
            coordinates: None,
        });
        entry.sequence_index = sequence_index;
        // An unresolved rerun must not erase coordinates stored earlier.
        if coordinates.is_some() {
            entry.coordinates = coordinates;
        }
        Ok(())
    }
}
