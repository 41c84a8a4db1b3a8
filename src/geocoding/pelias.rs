//! Pelias provider (openrouteservice hosted or self-hosted).

use reqwest::blocking::Client;
use serde::Deserialize;

use super::rate_limit::Limiter;
use super::{build_query, GeocodeError, Geocoder};
use crate::config::{ConfigError, GeocoderConfig};
use crate::models::GeoPoint;

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    geometry: Geometry,
}

#[derive(Deserialize)]
struct Geometry {
    coordinates: Vec<f64>,
}

#[derive(Deserialize)]
struct ErrorPayload {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    code: u32,
    message: String,
}

/// Geocoder backed by a Pelias search endpoint.
///
/// `base_url` points at the API root: `https://api.openrouteservice.org/geocode`
/// for the hosted service (requires an API key) or e.g.
/// `http://localhost:4000/v1` for a local instance.
#[derive(Debug)]
pub struct PeliasGeocoder {
    client: Client,
    search_url: String,
    api_key: Option<String>,
    locality: Option<String>,
    country_codes: Option<String>,
    limiter: Option<Limiter>,
}

impl PeliasGeocoder {
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
            api_key: config.api_key.clone(),
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

impl Geocoder for PeliasGeocoder {
    fn resolve(&self, address: &str) -> Result<GeoPoint, GeocodeError> {
        let query = build_query(address, self.locality.as_deref())?;

        if let Some(limiter) = &self.limiter {
            limiter.wait();
        }
        log::debug!("[pelias] search \"{}\"", query);

        let mut params = vec![("text", query.as_str()), ("size", "1")];
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.as_str()));
        }
        if let Some(cc) = &self.country_codes {
            params.push(("boundary.country", cc.as_str()));
        }

        let response = self.client.get(&self.search_url).query(&params).send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            match serde_json::from_str::<ErrorPayload>(&body) {
                Ok(payload) => log::warn!(
                    "[pelias] API error (code {}): {}",
                    payload.error.code,
                    payload.error.message
                ),
                Err(_) => log::warn!("[pelias] HTTP {} with body: {}", status, body),
            }
            return Err(GeocodeError::Status {
                status: status.as_u16(),
            });
        }

        parse_search_response(&body, &query)
    }

    fn name(&self) -> &str {
        "pelias"
    }
}

/// Extracts the best-ranked coordinate from a Pelias GeoJSON search body.
///
/// GeoJSON orders coordinates as `[lon, lat]`.
///
/// # Examples
///
/// ```
/// use u_dispatch::geocoding::pelias::parse_search_response;
///
/// let body = r#"{"type":"FeatureCollection","features":[
///     {"type":"Feature","geometry":{"type":"Point","coordinates":[-46.656,-23.5613]}}
/// ]}"#;
/// let p = parse_search_response(body, "Avenida Paulista").unwrap();
/// assert_eq!(p.latitude(), -23.5613);
/// assert_eq!(p.longitude(), -46.656);
/// ```
pub fn parse_search_response(body: &str, query: &str) -> Result<GeoPoint, GeocodeError> {
    let collection: FeatureCollection = serde_json::from_str(body)?;
    let feature = collection
        .features
        .first()
        .ok_or_else(|| GeocodeError::NotFound {
            query: query.to_string(),
        })?;

    match feature.geometry.coordinates[..] {
        [lon, lat, ..] => GeoPoint::new(lat, lon).ok_or_else(|| {
            GeocodeError::Malformed(format!("coordinate out of range: ({lat}, {lon})"))
        }),
        _ => Err(GeocodeError::Malformed(format!(
            "expected [lon, lat], got {} values",
            feature.geometry.coordinates.len()
        ))),
    }
}
