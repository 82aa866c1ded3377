//! Nominatim geocoding client
//!
//! Free-text place search and reverse geocoding against the
//! [Nominatim](https://nominatim.openstreetmap.org) API (OpenStreetMap).
//!
//! The client sends exactly one request per call; throttling is left to the
//! provider. An optional TTL cache short-circuits repeated queries.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, instrument, warn};

use crate::config::NominatimConfig;
use crate::error::GeocodingError;
use crate::models::{NominatimErrorBody, NominatimPlace};

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Search places matching a free-text query, ranked by relevance
    async fn search(&self, query: &str, limit: u8) -> Result<Vec<NominatimPlace>, GeocodingError>;

    /// Resolve coordinates to the nearest addressable place
    async fn reverse(&self, latitude: f64, longitude: f64)
    -> Result<NominatimPlace, GeocodingError>;
}

/// Nominatim HTTP client with optional result caching
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    client: Client,
    config: NominatimConfig,
    cache: Option<Cache<String, Vec<NominatimPlace>>>,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        config
            .validate()
            .map_err(GeocodingError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        let cache = config.caching_enabled().then(|| {
            Cache::builder()
                .max_capacity(1000)
                .time_to_live(Duration::from_secs(config.cache_ttl_minutes * 60))
                .build()
        });

        Ok(Self {
            client,
            config: config.clone(),
            cache,
        })
    }

    /// The configuration this client was built with
    #[must_use]
    pub const fn config(&self) -> &NominatimConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }

    fn cache_key(query: &str, limit: u8) -> String {
        format!("{}|{limit}", query.trim().to_lowercase())
    }

    /// Shared GET with status mapping
    async fn get(&self, url: &str, params: &[(&str, String)]) -> Result<Response, GeocodingError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodingError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if status.is_server_error() {
            return Err(GeocodingError::ServiceUnavailable(format!("HTTP {status}")));
        }

        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        Ok(response)
    }

    fn localized(&self, params: &mut Vec<(&str, String)>) {
        if let Some(lang) = self.config.accept_language.as_ref().filter(|l| !l.is_empty()) {
            params.push(("accept-language", lang.clone()));
        }
    }
}

#[async_trait]
impl GeocodingClient for NominatimGeocodingClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str, limit: u8) -> Result<Vec<NominatimPlace>, GeocodingError> {
        if query.trim().is_empty() {
            return Err(GeocodingError::InvalidQuery(
                "Search query must not be empty".to_string(),
            ));
        }

        let cache_key = Self::cache_key(query, limit);
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(&cache_key).await {
                debug!(%query, "Geocoding cache hit");
                return Ok(hit);
            }
        }

        let url = self.endpoint("search");
        let mut params = vec![
            ("q", query.to_string()),
            ("format", "json".to_string()),
            ("addressdetails", "1".to_string()),
            ("limit", limit.to_string()),
        ];
        self.localized(&mut params);
        if let Some(codes) = self.config.country_codes.as_ref().filter(|c| !c.is_empty()) {
            params.push(("countrycodes", codes.clone()));
        }

        debug!(%query, limit, "Searching places");

        let response = self.get(&url, &params).await?;
        let body = response
            .text()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let mut places: Vec<NominatimPlace> =
            serde_json::from_str(&body).map_err(|e| GeocodingError::ParseError(e.to_string()))?;
        places.truncate(usize::from(limit));

        if places.is_empty() {
            debug!(%query, "No places found");
        }

        if let Some(cache) = &self.cache {
            cache.insert(cache_key, places.clone()).await;
        }

        debug!(count = places.len(), "Places found");
        Ok(places)
    }

    #[instrument(skip(self))]
    async fn reverse(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<NominatimPlace, GeocodingError> {
        let url = self.endpoint("reverse");
        let mut params = vec![
            ("lat", latitude.to_string()),
            ("lon", longitude.to_string()),
            ("format", "json".to_string()),
            ("addressdetails", "1".to_string()),
        ];
        self.localized(&mut params);

        debug!(%latitude, %longitude, "Reverse geocoding");

        let response = self.get(&url, &params).await?;
        let body = response
            .text()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        // Nominatim answers 200 with an error object when nothing is nearby
        if let Ok(err) = serde_json::from_str::<NominatimErrorBody>(&body) {
            warn!(%latitude, %longitude, error = %err.error, "Reverse geocoding found nothing");
            return Err(GeocodingError::NotFound(err.error));
        }

        serde_json::from_str(&body).map_err(|e| GeocodingError::ParseError(e.to_string()))
    }
}
