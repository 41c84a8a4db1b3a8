//! Nearest-neighbor stop sequencing.
//!
//! Starting from a given point, always visit the nearest unvisited stop.
//! Stops without coordinates cannot be measured from, so they skip the
//! greedy pass and are appended at the end in input order.
//!
//! # Complexity
//!
//! O(n²) where n = number of resolved stops.
//!
//! # Reference
//!
//! The simplest constructive TSP heuristic. Tours are typically 15-25% above
//! optimal, which is acceptable for single-digit to low-tens stop counts in
//! one city. No improvement pass is run, so the order stays easy to explain.

use std::collections::HashSet;

use crate::distance::DistanceMatrix;
use crate::error::RoutingError;
use crate::models::{GeoPoint, Resolution, RoutableStop, SequencedStop};

/// Orders `candidates` by greedy nearest-neighbor selection from `start`.
///
/// `start` counts as a delivery (and is the first element of the result)
/// when its id appears in `candidates`; otherwise it is treated as a depot
/// and left out of the result. Distance ties go to the candidate that comes
/// first in `candidates`.
///
/// # Errors
///
/// - [`RoutingError::InvalidStartPoint`] if `start` has no coordinates.
/// - [`RoutingError::DuplicateStopId`] if two candidates share an id.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{GeoPoint, RoutableStop, StopId};
/// use u_dispatch::optimizer::nearest_neighbor_order;
///
/// let a = RoutableStop::new(1u64, "X").with_coordinates(GeoPoint::new(0.0, 0.0).unwrap());
/// let b = RoutableStop::new(2u64, "Y").with_coordinates(GeoPoint::new(0.0, 1.0).unwrap());
/// let c = RoutableStop::new(3u64, "Z").with_coordinates(GeoPoint::new(0.0, 2.0).unwrap());
///
/// let order = nearest_neighbor_order(&a, &[c.clone(), a.clone(), b.clone()]).unwrap();
/// let ids: Vec<_> = order.iter().map(|s| s.id().clone()).collect();
/// assert_eq!(ids, vec![StopId::from(1u64), StopId::from(2u64), StopId::from(3u64)]);
/// assert_eq!(order[2].sequence_index, 3);
/// ```
pub fn nearest_neighbor_order(
    start: &RoutableStop,
    candidates: &[RoutableStop],
) -> Result<Vec<SequencedStop>, RoutingError> {
    let origin = start
        .coordinates()
        .ok_or_else(|| RoutingError::invalid_start(start.id()))?;
    ensure_unique_ids(candidates)?;

    let member = candidates.iter().position(|c| c.id() == start.id());
    Ok(sequence(origin, member, candidates))
}

/// Rejects candidate lists where an id occurs twice.
pub(crate) fn ensure_unique_ids(candidates: &[RoutableStop]) -> Result<(), RoutingError> {
    let mut seen = HashSet::with_capacity(candidates.len());
    for c in candidates {
        if !seen.insert(c.id()) {
            return Err(RoutingError::DuplicateStopId(c.id().clone()));
        }
    }
    Ok(())
}

/// Core sequencing over validated input.
///
/// `member` is the index in `candidates` of the starting stop when the
/// start is itself a delivery; that stop is emitted first and never
/// revisited.
pub(crate) fn sequence(
    origin: GeoPoint,
    member: Option<usize>,
    candidates: &[RoutableStop],
) -> Vec<SequencedStop> {
    let mut order: Vec<(usize, Resolution)> = Vec::with_capacity(candidates.len());
    if let Some(m) = member {
        order.push((m, Resolution::Resolved));
    }

    // Matrix index 0 is the origin; index k > 0 maps to candidates[input[k - 1]].
    let mut points = vec![origin];
    let mut input = Vec::new();
    let mut unresolved = Vec::new();
    for (i, c) in candidates.iter().enumerate() {
        if Some(i) == member {
            continue;
        }
        match c.coordinates() {
            Some(p) => {
                points.push(p);
                input.push(i);
            }
            None => unresolved.push(i),
        }
    }

    let dm = DistanceMatrix::from_points(&points);
    let mut remaining: Vec<usize> = (1..points.len()).collect();
    let mut current = 0;

    while let Some(next) = dm.nearest_neighbor(current, &remaining) {
        remaining.retain(|&k| k != next);
        order.push((input[next - 1], Resolution::Resolved));
        current = next;
    }

    order.extend(unresolved.into_iter().map(|i| (i, Resolution::Unresolved)));

    order
        .into_iter()
        .enumerate()
        .map(|(pos, (i, resolution))| {
            let mut stop = candidates[i].clone();
            if Some(i) == member && !stop.is_resolved() {
                stop.set_coordinates(Some(origin));
            }
            SequencedStop {
                stop,
                sequence_index: pos + 1,
                resolution,
            }
        })
        .collect()
}
