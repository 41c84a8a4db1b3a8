//! Dense distance matrix.

use std::cmp::Ordering;

use crate::models::GeoPoint;

/// A dense n×n great-circle distance matrix stored in row-major order.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::GeoPoint;
/// use u_dispatch::distance::DistanceMatrix;
///
/// let points = vec![
///     GeoPoint::new(0.0, 0.0).unwrap(),
///     GeoPoint::new(0.0, 1.0).unwrap(),
///     GeoPoint::new(0.0, 2.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert_eq!(dm.size(), 3);
/// assert!(dm.get(0, 1) < dm.get(0, 2));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes haversine distances (meters) between all pairs of points.
    pub fn from_points(points: &[GeoPoint]) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the nearest neighbor of `from` among the given candidates.
    ///
    /// Only a strictly smaller distance replaces the current best, so on
    /// ties the candidate listed first wins. Returns `None` if `candidates`
    /// is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &c in candidates {
            let d = self.get(from, c);
            match best {
                Some((_, bd)) if d.total_cmp(&bd) != Ordering::Less => {}
                _ => best = Some((c, d)),
            }
        }
        best.map(|(c, _)| c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(0.0, 0.0).expect("valid"),
            GeoPoint::new(0.0, 0.5).expect("valid"),
            GeoPoint::new(0.0, -0.5).expect("valid"),
            GeoPoint::new(0.0, 2.0).expect("valid"),
        ]
    }

    #[test]
    fn test_from_points() {
        let dm = DistanceMatrix::from_points(&sample_points());
        assert_eq!(dm.size(), 4);
        assert_eq!(dm.get(0, 0), 0.0);
        assert!((dm.get(0, 1) - dm.get(1, 0)).abs() < 1e-9);
        assert!(dm.get(0, 1) < dm.get(0, 3));
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_nearest_neighbor() {
        let dm = DistanceMatrix::from_points(&sample_points());
        assert_eq!(dm.nearest_neighbor(0, &[3, 1]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, &[3]), Some(3));
        assert_eq!(dm.nearest_neighbor(0, &[]), None);
    }

    #[test]
    fn test_nearest_neighbor_tie_takes_first_listed() {
        let dm = DistanceMatrix::from_points(&sample_points());
        // Points 1 and 2 are mirror images around the origin.
        assert_eq!(dm.nearest_neighbor(0, &[1, 2]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, &[2, 1]), Some(2));
    }
}
