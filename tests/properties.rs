use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_dispatch::models::{GeoPoint, RoutableStop, StopId};
use u_dispatch::optimizer::{nearest_neighbor_order, RouteOptimizer};

/// Stops around São Paulo; `None` marks a failed lookup.
fn stops_strategy() -> impl Strategy<Value = Vec<RoutableStop>> {
    prop::collection::vec(
        prop::option::weighted(0.7, (-23.7f64..-23.4, -46.8f64..-46.4)),
        0..25,
    )
    .prop_map(|coords| {
        coords
            .into_iter()
            .enumerate()
            .map(|(i, c)| {
                let stop = RoutableStop::new(i as u64, format!("addr {i}"));
                match c.and_then(|(lat, lon)| GeoPoint::new(lat, lon)) {
                    Some(pt) => stop.with_coordinates(pt),
                    None => stop,
                }
            })
            .collect()
    })
}

fn depot_strategy() -> impl Strategy<Value = Option<GeoPoint>> {
    prop::option::of((-23.7f64..-23.4, -46.8f64..-46.4))
        .prop_map(|c| c.and_then(|(lat, lon)| GeoPoint::new(lat, lon)))
}

fn optimizer(depot: Option<GeoPoint>) -> RouteOptimizer {
    match depot {
        Some(d) => RouteOptimizer::new().with_depot(d),
        None => RouteOptimizer::new(),
    }
}

proptest! {
    #[test]
    fn output_is_a_permutation_of_input(stops in stops_strategy(), depot in depot_strategy()) {
        let input: Vec<StopId> = stops.iter().map(|s| s.id().clone()).collect();
        let plan = optimizer(depot).optimize(stops).expect("unique ids");
        let output = plan.ids();

        prop_assert_eq!(output.len(), input.len());
        let unique: HashSet<_> = output.iter().collect();
        prop_assert_eq!(unique.len(), output.len());
        prop_assert_eq!(unique, input.iter().collect::<HashSet<_>>());

        let idx: Vec<_> = plan.stops().iter().map(|s| s.sequence_index).collect();
        prop_assert_eq!(idx, (1..=input.len()).collect::<Vec<_>>());
    }

    #[test]
    fn optimization_is_deterministic(stops in stops_strategy(), depot in depot_strategy()) {
        let first = optimizer(depot).optimize(stops.clone()).expect("unique ids");
        let second = optimizer(depot).optimize(stops).expect("unique ids");
        prop_assert_eq!(first.ids(), second.ids());
    }

    #[test]
    fn unresolved_stops_trail_in_input_order(stops in stops_strategy(), depot in depot_strategy()) {
        let expected_tail: Vec<StopId> = stops
            .iter()
            .filter(|s| !s.is_resolved())
            .map(|s| s.id().clone())
            .collect();
        let plan = optimizer(depot).optimize(stops).expect("unique ids");

        let flags: Vec<bool> = plan.stops().iter().map(|s| s.needs_manual_address()).collect();
        let first_unresolved = flags.iter().position(|&f| f).unwrap_or(flags.len());
        prop_assert!(flags[first_unresolved..].iter().all(|&f| f));

        let tail: Vec<StopId> = plan.unresolved().map(|s| s.id().clone()).collect();
        prop_assert_eq!(tail, expected_tail);
    }

    #[test]
    fn each_step_takes_the_nearest_remaining(stops in stops_strategy()) {
        let depot = GeoPoint::new(-23.55, -46.63).expect("valid");
        let plan = RouteOptimizer::new().with_depot(depot).optimize(stops).expect("unique ids");
        let route: Vec<GeoPoint> = plan.resolved().filter_map(|s| s.stop.coordinates()).collect();

        let mut current = depot;
        for (i, next) in route.iter().enumerate() {
            let chosen = current.distance_to(next);
            for later in &route[i + 1..] {
                prop_assert!(chosen <= current.distance_to(later));
            }
            current = *next;
        }
    }
}

#[test]
fn seeded_layouts_are_reproducible() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let n = rng.random_range(1..30);
        let stops: Vec<RoutableStop> = (0..n)
            .map(|i| {
                let stop = RoutableStop::new(i as u64, format!("addr {i}"));
                if rng.random_bool(0.8) {
                    let lat = rng.random_range(-23.7..-23.4);
                    let lon = rng.random_range(-46.8..-46.4);
                    stop.with_coordinates(GeoPoint::new(lat, lon).expect("in range"))
                } else {
                    stop
                }
            })
            .collect();

        let a = RouteOptimizer::new().optimize(stops.clone()).expect("unique ids");
        let b = RouteOptimizer::new().optimize(stops).expect("unique ids");
        assert_eq!(a, b);
    }
}

#[test]
fn colinear_points_are_visited_outward() {
    let a = RoutableStop::new("A", "a").with_coordinates(GeoPoint::new(10.0, 10.0).expect("valid"));
    let b = RoutableStop::new("B", "b").with_coordinates(GeoPoint::new(10.0, 10.5).expect("valid"));
    let c = RoutableStop::new("C", "c").with_coordinates(GeoPoint::new(10.0, 11.0).expect("valid"));

    let order = nearest_neighbor_order(&a, &[c, b, a.clone()]).expect("valid start");
    let ids: Vec<_> = order.iter().map(|s| s.id().as_str().to_string()).collect();
    assert_eq!(ids, vec!["A", "B", "C"]);
}
