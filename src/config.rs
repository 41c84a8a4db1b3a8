//! Geocoder configuration from environment variables.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `GEOCODER_PROVIDER` | `nominatim` or `pelias` | `nominatim` |
//! | `GEOCODER_BASE_URL` | API root | provider's public endpoint |
//! | `GEOCODER_USER_AGENT` | identifying client string | crate name and version |
//! | `GEOCODER_REFERER` | `Referer` header (Nominatim) | unset |
//! | `GEOCODER_LOCALITY` | suffix appended to every query | unset |
//! | `GEOCODER_COUNTRY_CODES` | result country filter | unset |
//! | `GEOCODER_TIMEOUT_SECS` | per-request timeout | 10 |
//! | `GEOCODER_MIN_INTERVAL_MS` | pacing between requests, 0 disables | 1000 / 0 |
//! | `ORS_API_KEY` | openrouteservice key (Pelias) | unset |

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::geocoding::{Geocoder, NominatimGeocoder, PeliasGeocoder};

/// Public OpenStreetMap Nominatim instance.
pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
/// Hosted openrouteservice Pelias API root.
pub const ORS_GEOCODE_URL: &str = "https://api.openrouteservice.org/geocode";

/// Invalid or incomplete geocoder settings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `var` is set but cannot be parsed.
    #[error("invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },

    /// A variable the selected provider needs is unset.
    #[error("{0} must be set for the selected provider")]
    MissingVar(&'static str),

    /// The HTTP client could not be created.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Which geocoding service to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    /// OpenStreetMap Nominatim.
    #[default]
    Nominatim,
    /// Pelias, hosted by openrouteservice or self-hosted.
    Pelias,
}

impl FromStr for ProviderKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nominatim" | "osm" => Ok(Self::Nominatim),
            "pelias" | "ors" | "openrouteservice" => Ok(Self::Pelias),
            _ => Err(()),
        }
    }
}

/// Settings for building a [`Geocoder`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeocoderConfig {
    /// Service to call.
    pub provider: ProviderKind,
    /// API root, without the `/search` path.
    pub base_url: String,
    /// openrouteservice key, sent as `api_key`.
    pub api_key: Option<String>,
    /// `User-Agent` identifying this application to the provider.
    pub user_agent: String,
    /// `Referer` header sent to Nominatim.
    pub referer: Option<String>,
    /// Appended to every query to bias results toward the service area,
    /// e.g. `"São Paulo, SP, Brasil"`.
    pub locality: Option<String>,
    /// Comma-separated ISO 3166-1 codes restricting results.
    pub country_codes: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Minimum spacing between requests; zero disables pacing.
    pub min_interval: Duration,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Nominatim,
            base_url: NOMINATIM_URL.to_string(),
            api_key: None,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            referer: None,
            locality: None,
            country_codes: None,
            timeout: Duration::from_secs(10),
            min_interval: Duration::from_millis(1000),
        }
    }
}

impl GeocoderConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, treating blank values as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider = match get("GEOCODER_PROVIDER") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                var: "GEOCODER_PROVIDER",
                value,
            })?,
            None => ProviderKind::default(),
        };

        let mut config = Self {
            provider,
            ..Self::default()
        };

        if provider == ProviderKind::Pelias {
            config.base_url = ORS_GEOCODE_URL.to_string();
            config.min_interval = Duration::ZERO;
        }
        if let Some(url) = get("GEOCODER_BASE_URL") {
            config.base_url = url;
        }
        if let Some(agent) = get("GEOCODER_USER_AGENT") {
            config.user_agent = agent;
        }
        config.api_key = get("ORS_API_KEY");
        config.referer = get("GEOCODER_REFERER");
        config.locality = get("GEOCODER_LOCALITY");
        config.country_codes = get("GEOCODER_COUNTRY_CODES");

        if let Some(value) = get("GEOCODER_TIMEOUT_SECS") {
            let secs = parse_u64("GEOCODER_TIMEOUT_SECS", value)?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(value) = get("GEOCODER_MIN_INTERVAL_MS") {
            let ms = parse_u64("GEOCODER_MIN_INTERVAL_MS", value)?;
            config.min_interval = Duration::from_millis(ms);
        }

        if provider == ProviderKind::Pelias
            && config.api_key.is_none()
            && config.base_url == ORS_GEOCODE_URL
        {
            return Err(ConfigError::MissingVar("ORS_API_KEY"));
        }
        if config.locality.is_none() {
            log::warn!("GEOCODER_LOCALITY is not set; short addresses may resolve outside the service area");
        }

        Ok(config)
    }

    /// Builds the configured provider.
    pub fn build_geocoder(&self) -> Result<Box<dyn Geocoder>, ConfigError> {
        Ok(match self.provider {
            ProviderKind::Nominatim => Box::new(NominatimGeocoder::new(self)?),
            ProviderKind::Pelias => Box::new(PeliasGeocoder::new(self)?),
        })
    }
}

fn parse_u64(var: &'static str, value: String) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { var, value })
}
