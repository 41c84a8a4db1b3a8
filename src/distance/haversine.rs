//! Great-circle distance.

use crate::models::GeoPoint;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Haversine distance between two points, in meters.
///
/// A proxy for road distance: fine for ordering short same-city hops, wrong
/// for anything that needs real travel distance.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::GeoPoint;
/// use u_dispatch::distance::haversine_m;
///
/// let sp = GeoPoint::new(-23.5505, -46.6333).unwrap();
/// let rj = GeoPoint::new(-22.9068, -43.1729).unwrap();
/// let d = haversine_m(&sp, &rj);
/// assert!((d - 360_700.0).abs() < 2_000.0);
/// ```
pub fn haversine_m(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.longitude() - a.longitude()).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).expect("valid")
    }

    #[test]
    fn test_zero() {
        let a = p(10.0, 20.0);
        assert_eq!(haversine_m(&a, &a), 0.0);
    }

    #[test]
    fn test_one_degree_equator() {
        // 1° of longitude on the equator ≈ 111.19 km
        let d = haversine_m(&p(0.0, 0.0), &p(0.0, 1.0));
        assert!((d - 111_195.0).abs() < 50.0);
    }

    #[test]
    fn test_symmetric() {
        let a = p(-23.5, -46.6);
        let b = p(-22.9, -43.2);
        assert!((haversine_m(&a, &b) - haversine_m(&b, &a)).abs() < 1e-9);
    }

    #[test]
    fn test_antipodal() {
        let d = haversine_m(&p(0.0, 0.0), &p(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_M).abs() < 1.0);
    }

    #[test]
    fn test_colinear_ordering() {
        let a = p(0.0, 0.0);
        let b = p(0.0, 1.0);
        let c = p(0.0, 2.0);
        assert!(haversine_m(&a, &b) < haversine_m(&a, &c));
    }
}
