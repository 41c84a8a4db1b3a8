//! OpenStreetMap Nominatim provider.

use reqwest::blocking::Client;
use reqwest::header::REFERER;
use serde::Deserialize;

use super::rate_limit::Limiter;
use super::{build_query, GeocodeError, Geocoder};
use crate::config::{ConfigError, GeocoderConfig};
use crate::models::GeoPoint;

#[derive(Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

/// Geocoder backed by a Nominatim instance.
///
/// The public instance is a shared community service: every request carries
/// the configured `User-Agent` (and `Referer` when set) and requests are
/// paced by the configured interval across all threads.
#[derive(Debug)]
pub struct NominatimGeocoder {
    client: Client,
    search_url: String,
    referer: Option<String>,
    locality: Option<String>,
    country_codes: Option<String>,
    limiter: Option<Limiter>,
}

impl NominatimGeocoder {
    /// Builds the provider from configuration.
    pub fn new(config: &GeocoderConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self {
            client,
            search_url: format!("{}/search", config.base_url.trim_end_matches('/')),
            referer: config.referer.clone(),
            locality: config.locality.clone(),
            country_codes: config.country_codes.clone(),
            limiter: Limiter::per_interval(config.min_interval),
        })
    }

    /// Shares an existing limiter instead of the one built from configuration.
    pub fn with_limiter(mut self, limiter: Limiter) -> Self {
        self.limiter = Some(limiter);
        self
    }
}

impl Geocoder for NominatimGeocoder {
    fn resolve(&self, address: &str) -> Result<GeoPoint, GeocodeError> {
        let query = build_query(address, self.locality.as_deref())?;

        if let Some(limiter) = &self.limiter {
            limiter.wait();
        }
        log::debug!("[nominatim] search \"{}\"", query);

        let mut params = vec![
            ("q", query.as_str()),
            ("format", "jsonv2"),
            ("limit", "1"),
        ];
        if let Some(cc) = &self.country_codes {
            params.push(("countrycodes", cc.as_str()));
        }

        let mut request = self.client.get(&self.search_url).query(&params);
        if let Some(referer) = &self.referer {
            request = request.header(REFERER, referer.as_str());
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status {
                status: status.as_u16(),
            });
        }
        let body = response.text()?;

        parse_search_response(&body, &query).inspect_err(|e| {
            if let GeocodeError::Malformed(_) = e {
                log::error!(
                    "[nominatim] unparseable response for \"{}\": {}",
                    query,
                    excerpt(&body, LOGGED_BODY_CHARS)
                );
            }
        })
    }

    fn name(&self) -> &str {
        "nominatim"
    }
}

const LOGGED_BODY_CHARS: usize = 200;

/// First `max_chars` characters of `body`, marked when cut.
fn excerpt(body: &str, max_chars: usize) -> std::borrow::Cow<'_, str> {
    match body.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}... ({} bytes)", &body[..end], body.len()).into(),
        None => body.into(),
    }
}

/// Extracts the best-ranked coordinate from a Nominatim `jsonv2` search body.
///
/// # Examples
///
/// ```
/// use u_dispatch::geocoding::nominatim::parse_search_response;
///
/// let body = r#"[{"place_id":1,"lat":"-23.5613","lon":"-46.6560","display_name":"Avenida Paulista"}]"#;
/// let p = parse_search_response(body, "Avenida Paulista").unwrap();
/// assert_eq!(p.latitude(), -23.5613);
///
/// assert!(parse_search_response("[]", "nowhere").is_err());
/// ```
pub fn parse_search_response(body: &str, query: &str) -> Result<GeoPoint, GeocodeError> {
    let places: Vec<Place> = serde_json::from_str(body)?;
    let place = places.first().ok_or_else(|| GeocodeError::NotFound {
        query: query.to_string(),
    })?;

    let lat = place
        .lat
        .parse::<f64>()
        .map_err(|e| GeocodeError::Malformed(format!("lat '{}': {e}", place.lat)))?;
    let lon = place
        .lon
        .parse::<f64>()
        .map_err(|e| GeocodeError::Malformed(format!("lon '{}': {e}", place.lon)))?;

    GeoPoint::new(lat, lon)
        .ok_or_else(|| GeocodeError::Malformed(format!("coordinate out of range: ({lat}, {lon})")))
}
