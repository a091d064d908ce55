//! OSRM HTTP adapter for walking distances.

use serde::Deserialize;

use crate::error::ProviderError;
use crate::model::Coordinate;
use crate::traits::DistanceSource;

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "foot".to_string(),
            timeout_secs: 10,
        }
    }
}

impl OsrmConfig {
    /// Defaults overridden by `OSRM_BASE_URL`, `OSRM_PROFILE` and
    /// `OSRM_TIMEOUT_SECS` when set.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("OSRM_BASE_URL").unwrap_or(defaults.base_url),
            profile: std::env::var("OSRM_PROFILE").unwrap_or(defaults.profile),
            timeout_secs: std::env::var("OSRM_TIMEOUT_SECS")
                .ok()
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &OsrmConfig {
        &self.config
    }

    fn route_url(&self, from: Coordinate, to: Coordinate) -> String {
        format!(
            "{}/route/v1/{}/{:.6},{:.6};{:.6},{:.6}?overview=false",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            from.1,
            from.0,
            to.1,
            to.0
        )
    }
}

impl DistanceSource for OsrmClient {
    fn mode(&self) -> &str {
        &self.config.profile
    }

    fn fetch_distance(&self, from: Coordinate, to: Coordinate) -> Result<f64, ProviderError> {
        let response = self.client.get(self.route_url(from, to)).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.json::<OsrmRouteResponse>()?;
        body.distance_km()
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    /// Meters.
    distance: f64,
}

impl OsrmRouteResponse {
    fn distance_km(&self) -> Result<f64, ProviderError> {
        if self.code != "Ok" {
            return Err(ProviderError::Service {
                code: self.code.clone(),
                message: self.message.clone().unwrap_or_default(),
            });
        }

        match self.routes.first() {
            Some(route) if route.distance.is_finite() && route.distance >= 0.0 => {
                Ok(route.distance / 1000.0)
            }
            Some(route) => Err(ProviderError::Malformed(format!(
                "invalid distance {}",
                route.distance
            ))),
            None => Err(ProviderError::Malformed("no routes in response".to_string())),
        }
    }
}
