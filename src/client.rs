use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{Aircraft, Airport, Route, RouteResponse};

/// Host header value required by the RapidAPI gateway.
const RAPIDAPI_HOST: &str = "greatcirclemapper.p.rapidapi.com";

/// Client for the Great Circle Mapper API.
///
/// Holds a connection-pooling [`reqwest::Client`] carrying the two fixed
/// RapidAPI headers on every request. Each operation performs exactly one
/// GET: a 200 response is deserialized into its record type, any other
/// status is collapsed into `Ok(None)` with the status discarded, and
/// transport or decoding failures surface as [`Error`].
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Client for the live service with the given RapidAPI key.
    ///
    /// The key is not validated here; an invalid one shows up as absent
    /// results once the gateway starts answering 401/403.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(Config::new(api_key))
    }

    /// Client configured from `CIRCLEMAPPER_API_KEY` (and the optional
    /// `CIRCLEMAPPER_BASE_URL` override).
    pub fn from_env() -> Result<Self> {
        Self::with_config(Config::from_env()?)
    }

    /// Client with explicit [`Config`] settings.
    pub fn with_config(config: Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("X-RapidAPI-Host", HeaderValue::from_static(RAPIDAPI_HOST));
        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| Error::Config("API key contains characters not allowed in a header".to_string()))?;
        headers.insert("X-RapidAPI-Key", api_key);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Computes the route between two airports at the given cruise speed
    /// in knots.
    ///
    /// The airport codes are upper-cased before being interpolated into the
    /// request path. Returns every leg of the journey; see [`Route`] for
    /// the first-leg accessors.
    pub async fn compute_route(
        &self,
        speed_kts: f64,
        origin: &str,
        dest: &str,
    ) -> Result<Option<Route>> {
        let path = format!(
            "/airports/route/{}-{}/{}",
            origin.to_uppercase(),
            dest.to_uppercase(),
            speed_kts
        );
        match self.get_json::<RouteResponse>(&path).await? {
            Some(raw) => Route::try_from(raw).map(Some),
            None => Ok(None),
        }
    }

    /// Looks up an aircraft type by its ICAO or IATA code.
    pub async fn fetch_aircraft(&self, code: &str) -> Result<Option<Aircraft>> {
        self.get_json(&format!("/aircraft/read/{}", code)).await
    }

    /// Looks up a single airport by its ICAO or IATA code.
    pub async fn fetch_airport(&self, code: &str) -> Result<Option<Airport>> {
        self.get_json(&format!("/airports/read/{}", code)).await
    }

    /// Searches airports by ICAO code, in the order the service returns them.
    pub async fn search_airports_by_icao(&self, code: &str) -> Result<Option<Vec<Airport>>> {
        self.search_airports(code).await
    }

    /// Searches airports by IATA code, in the order the service returns them.
    pub async fn search_airports_by_iata(&self, code: &str) -> Result<Option<Vec<Airport>>> {
        self.search_airports(code).await
    }

    /// Searches airports by town name, in the order the service returns them.
    pub async fn search_airports_by_town(&self, town: &str) -> Result<Option<Vec<Airport>>> {
        self.search_airports(town).await
    }

    // All three search flavors hit the same endpoint; the service decides
    // how to interpret the identifier.
    async fn search_airports(&self, identifier: &str) -> Result<Option<Vec<Airport>>> {
        self.get_json(&format!("/airports/search/{}", identifier))
            .await
    }

    // One GET against `base_url` + `path`: 200 is decoded as `T`, anything
    // else is discarded and reported as `None`.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            warn!("GET {} answered {}; treating as no result", url, status);
            return Ok(None);
        }

        let body = response.text().await?;
        Ok(Some(serde_json::from_str(&body)?))
    }
}
