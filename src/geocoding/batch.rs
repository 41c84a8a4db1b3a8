//! Caller-facing resolution entry points.

use rayon::prelude::*;

use super::Geocoder;
use crate::models::{GeoPoint, RoutableStop};

/// Resolves one address, collapsing every failure to `None`.
///
/// # Examples
///
/// ```
/// use u_dispatch::geocoding::{resolve_address, StaticGeocoder};
/// use u_dispatch::models::GeoPoint;
///
/// let g = StaticGeocoder::new().with_entry("Depot", GeoPoint::new(1.0, 1.0).unwrap());
/// assert!(resolve_address(&g, "Depot").is_some());
/// assert!(resolve_address(&g, "Elsewhere").is_none());
/// ```
pub fn resolve_address<G: Geocoder + ?Sized>(geocoder: &G, address: &str) -> Option<GeoPoint> {
    match geocoder.resolve(address) {
        Ok(point) => Some(point),
        Err(err) => {
            log::warn!(
                "[{}] could not locate \"{}\": {}",
                geocoder.name(),
                address.trim(),
                err
            );
            None
        }
    }
}

/// Fills in coordinates for every stop that lacks them.
///
/// Lookups run in parallel and independently: a failed or timed-out lookup
/// leaves only that stop unresolved. Stops that already carry coordinates
/// are not looked up again. The returned stops are in input order.
pub fn resolve_stops<G: Geocoder + ?Sized>(
    geocoder: &G,
    stops: Vec<RoutableStop>,
) -> Vec<RoutableStop> {
    let pending = stops.iter().filter(|s| !s.is_resolved()).count();
    log::debug!(
        "[{}] resolving {} of {} stops",
        geocoder.name(),
        pending,
        stops.len()
    );

    stops
        .into_par_iter()
        .map(|mut stop| {
            if !stop.is_resolved() {
                let point = resolve_address(geocoder, stop.address());
                stop.set_coordinates(point);
            }
            stop
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocoding::{GeocodeError, StaticGeocoder};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    struct Counting {
        inner: StaticGeocoder,
        calls: AtomicUsize,
    }

    impl Geocoder for Counting {
        fn resolve(&self, address: &str) -> Result<GeoPoint, GeocodeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.resolve(address)
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    struct SlowOnTimeout;

    impl Geocoder for SlowOnTimeout {
        fn resolve(&self, address: &str) -> Result<GeoPoint, GeocodeError> {
            if address == "slow" {
                thread::sleep(Duration::from_millis(50));
                return Err(GeocodeError::Timeout);
            }
            GeoPoint::new(1.0, 1.0).ok_or(GeocodeError::Malformed("range".into()))
        }

        fn name(&self) -> &str {
            "slow"
        }
    }

    fn p(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).expect("valid")
    }

    #[test]
    fn test_skips_known_coordinates() {
        let g = Counting {
            inner: StaticGeocoder::new().with_entry("B", p(2.0, 2.0)),
            calls: AtomicUsize::new(0),
        };
        let stops = vec![
            RoutableStop::new(1u64, "A").with_coordinates(p(1.0, 1.0)),
            RoutableStop::new(2u64, "B"),
        ];
        let resolved = resolve_stops(&g, stops);
        assert_eq!(g.calls.load(Ordering::SeqCst), 1);
        assert_eq!(resolved[0].coordinates(), Some(p(1.0, 1.0)));
        assert_eq!(resolved[1].coordinates(), Some(p(2.0, 2.0)));
    }

    #[test]
    fn test_preserves_input_order() {
        let g = StaticGeocoder::new()
            .with_entry("A", p(1.0, 1.0))
            .with_entry("C", p(3.0, 3.0));
        let stops: Vec<_> = ["A", "B", "C", "D"]
            .iter()
            .enumerate()
            .map(|(i, a)| RoutableStop::new(i as u64, *a))
            .collect();
        let resolved = resolve_stops(&g, stops);
        let ids: Vec<_> = resolved.iter().map(|s| s.id().to_string()).collect();
        assert_eq!(ids, vec!["0", "1", "2", "3"]);
        let flags: Vec<_> = resolved.iter().map(|s| s.is_resolved()).collect();
        assert_eq!(flags, vec![true, false, true, false]);
    }

    #[test]
    fn test_timeout_does_not_affect_siblings() {
        let stops = vec![
            RoutableStop::new(1u64, "fast"),
            RoutableStop::new(2u64, "slow"),
            RoutableStop::new(3u64, "fast too"),
        ];
        let resolved = resolve_stops(&SlowOnTimeout, stops);
        assert!(resolved[0].is_resolved());
        assert!(!resolved[1].is_resolved());
        assert!(resolved[2].is_resolved());
    }

    #[test]
    fn test_empty_batch() {
        let g = StaticGeocoder::new();
        assert!(resolve_stops(&g, vec![]).is_empty());
    }
}
