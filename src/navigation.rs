//! Turn-by-turn hand-off to an external maps application.

use reqwest::Url;

use crate::models::{GeoPoint, RoutePlan};

const DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/";

/// Builds a Google Maps directions link visiting the plan's stops in order.
///
/// The last stop is the destination and every other stop a waypoint, all by
/// address text. `origin` (e.g. the depot) is passed as `lat,lon`; without
/// it the maps app starts from the device's location. Returns `None` for an
/// empty plan.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::RoutableStop;
/// use u_dispatch::navigation::maps_directions_url;
/// use u_dispatch::optimizer::RouteOptimizer;
///
/// let plan = RouteOptimizer::new()
///     .optimize(vec![
///         RoutableStop::new(1u64, "Rua A, 1"),
///         RoutableStop::new(2u64, "Rua B, 2"),
///     ])
///     .unwrap();
/// let url = maps_directions_url(&plan, None).unwrap();
/// assert_eq!(
///     url,
///     "https://www.google.com/maps/dir/?api=1&destination=Rua+B%2C+2&waypoints=Rua+A%2C+1&travelmode=driving"
/// );
/// ```
pub fn maps_directions_url(plan: &RoutePlan, origin: Option<GeoPoint>) -> Option<String> {
    let (last, rest) = plan.stops().split_last()?;

    let mut params: Vec<(&str, String)> = vec![("api", "1".to_string())];
    if let Some(o) = origin {
        params.push(("origin", format!("{},{}", o.latitude(), o.longitude())));
    }
    params.push(("destination", last.stop.address().trim().to_string()));
    if !rest.is_empty() {
        let waypoints = rest
            .iter()
            .map(|s| s.stop.address().trim())
            .collect::<Vec<_>>()
            .join("|");
        params.push(("waypoints", waypoints));
    }
    params.push(("travelmode", "driving".to_string()));

    match Url::parse_with_params(DIRECTIONS_URL, &params) {
        Ok(url) => Some(url.to_string()),
        Err(err) => {
            log::error!("failed to build directions link: {}", err);
            None
        }
    }
}
