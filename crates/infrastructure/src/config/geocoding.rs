//! Address search configuration

use std::time::Duration;

use application::SuggestionConfig;
use integration_nominatim::NominatimConfig;
use serde::{Deserialize, Serialize};

/// Geocoding configuration (`[geocoding]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocodingAppConfig {
    /// Nominatim base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 5)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Suggestions shown per query (default: 5, at most 10)
    #[serde(default = "default_max_results")]
    pub max_results: u8,

    /// Characters required before a query is sent (default: 3)
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,

    /// Result cache TTL in minutes (default: 0 = disabled)
    #[serde(default)]
    pub cache_ttl_minutes: u64,

    /// Preferred result language, e.g. "en"
    #[serde(default)]
    pub accept_language: Option<String>,

    /// Restrict results to ISO country codes, e.g. "in,gb"
    #[serde(default)]
    pub country_codes: Option<String>,

    /// User-Agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Reverse-geocode the device position into the pickup field (default: false)
    #[serde(default)]
    pub label_device_location: bool,
}

fn default_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

const fn default_max_results() -> u8 {
    5
}

const fn default_min_query_len() -> usize {
    3
}

fn default_user_agent() -> String {
    concat!("ridehail/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for GeocodingAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_results: default_max_results(),
            min_query_len: default_min_query_len(),
            cache_ttl_minutes: 0,
            accept_language: None,
            country_codes: None,
            user_agent: default_user_agent(),
            label_device_location: false,
        }
    }
}

impl GeocodingAppConfig {
    /// Convert to `integration_nominatim::NominatimConfig`
    #[must_use]
    pub fn to_nominatim_config(&self) -> NominatimConfig {
        NominatimConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            max_results: self.max_results,
            cache_ttl_minutes: self.cache_ttl_minutes,
            accept_language: self.accept_language.clone(),
            country_codes: self.country_codes.clone(),
            user_agent: self.user_agent.clone(),
        }
    }

    /// Search behavior for the application layer
    #[must_use]
    pub fn to_suggestion_config(&self) -> SuggestionConfig {
        let budget = Duration::from_secs(self.timeout_secs);
        SuggestionConfig {
            min_query_len: self.min_query_len,
            max_results: self.max_results,
            timeout_ms: u64::try_from(budget.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Validate the section
    ///
    /// # Errors
    ///
    /// Returns a message naming the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_query_len == 0 {
            return Err("geocoding.min_query_len must be greater than 0".to_string());
        }
        self.to_nominatim_config()
            .validate()
            .map_err(|e| format!("geocoding: {e}"))
    }
}
