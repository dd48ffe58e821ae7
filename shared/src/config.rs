use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;
use crate::model::LatLon;

pub const DEFAULT_LISTING_ENDPOINT: &str = "https://www.letsrentz.com/getPropertyWithPID";
pub const DEFAULT_DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/";

/// Endpoints the shell may override at startup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub listing_endpoint: String,
    pub directions_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listing_endpoint: DEFAULT_LISTING_ENDPOINT.into(),
            directions_base: DEFAULT_DIRECTIONS_BASE.into(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_http_url("listing_endpoint", &self.listing_endpoint)?;
        parse_http_url("directions_base", &self.directions_base)?;
        Ok(())
    }

    /// `<listing_endpoint>?pid=<id>`
    pub fn listing_url(&self, property_id: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&self.listing_endpoint)?;
        url.query_pairs_mut().append_pair("pid", property_id);
        Ok(url)
    }

    /// `<directions_base>?api=1&destination=<lat>,<lng>`
    pub fn directions_url(&self, destination: LatLon) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&self.directions_base)?;
        url.set_query(Some(&format!("api=1&destination={destination}")));
        Ok(url)
    }
}

fn parse_http_url(field: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidUrl { field, source })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme {
            field,
            scheme: other.to_owned(),
        }),
    }
}
