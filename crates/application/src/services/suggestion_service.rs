//! Address suggestion lookup
//!
//! Wraps the geocoding port with the length threshold, a per-request time
//! budget, coordinate filtering and the result cap. Failures never escape as
//! errors; they become [`SearchOutcome::Unavailable`].

use std::sync::Arc;
use std::time::Duration;

use domain::entities::{MIN_QUERY_LEN, Suggestion, is_searchable};
use domain::value_objects::Coordinate;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use super::suggestion_store::SearchOutcome;
use crate::ports::GeocodingPort;

/// Default number of suggestions shown
pub const DEFAULT_MAX_SUGGESTIONS: u8 = 5;

/// Default time budget for one lookup in milliseconds
const DEFAULT_SEARCH_TIMEOUT_MS: u64 = 5000;

/// Search behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Queries with fewer characters are never sent (default: 3)
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,

    /// Maximum number of suggestions kept (default: 5)
    #[serde(default = "default_max_results")]
    pub max_results: u8,

    /// Time budget for one lookup in milliseconds (default: 5000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

const fn default_min_query_len() -> usize {
    MIN_QUERY_LEN
}

const fn default_max_results() -> u8 {
    DEFAULT_MAX_SUGGESTIONS
}

const fn default_timeout_ms() -> u64 {
    DEFAULT_SEARCH_TIMEOUT_MS
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
            max_results: default_max_results(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl SuggestionConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Service turning typed text into a capped, validated suggestion list
pub struct SuggestionService {
    geocoder: Arc<dyn GeocodingPort>,
    config: SuggestionConfig,
}

impl std::fmt::Debug for SuggestionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionService")
            .field("geocoder", &"<GeocodingPort>")
            .field("config", &self.config)
            .finish()
    }
}

impl SuggestionService {
    #[must_use]
    pub fn new(geocoder: Arc<dyn GeocodingPort>) -> Self {
        Self {
            geocoder,
            config: SuggestionConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SuggestionConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Whether a query is long enough to be sent, ignoring surrounding whitespace
    #[must_use]
    pub fn qualifies(&self, query: &str) -> bool {
        is_searchable(query, self.config.min_query_len)
    }

    /// Look up suggestions for a query
    ///
    /// Queries below the threshold return an empty list without touching the
    /// geocoder. Entries whose coordinates do not parse are dropped.
    #[instrument(skip(self))]
    pub async fn fetch(&self, query: &str) -> SearchOutcome {
        if !self.qualifies(query) {
            return SearchOutcome::Suggestions(Vec::new());
        }

        let limit = self.config.max_results;
        let budget = self.config.timeout();

        match timeout(budget, self.geocoder.search(query, limit)).await {
            Ok(Ok(places)) => {
                let suggestions = Self::usable(places, usize::from(limit));
                debug!(count = suggestions.len(), "Suggestions received");
                SearchOutcome::Suggestions(suggestions)
            },
            Ok(Err(e)) => {
                warn!(error = %e, "Suggestion lookup failed");
                SearchOutcome::Unavailable(e.to_string())
            },
            Err(_) => {
                warn!(timeout_ms = self.config.timeout_ms, "Suggestion lookup timed out");
                SearchOutcome::Unavailable(format!(
                    "Search timed out after {} ms",
                    self.config.timeout_ms
                ))
            },
        }
    }

    fn usable(places: Vec<Suggestion>, cap: usize) -> Vec<Suggestion> {
        places
            .into_iter()
            .filter(|s| {
                let ok = s.has_valid_coordinate();
                if !ok {
                    warn!(
                        display_name = s.display_name(),
                        lat = s.lat(),
                        lon = s.lon(),
                        "Dropping suggestion with malformed coordinate"
                    );
                }
                ok
            })
            .take(cap)
            .collect()
    }

    /// Label a position via reverse lookup, `None` on any failure
    #[instrument(skip(self))]
    pub async fn describe(&self, coordinate: &Coordinate) -> Option<String> {
        match timeout(self.config.timeout(), self.geocoder.reverse(coordinate)).await {
            Ok(Ok(label)) => label,
            Ok(Err(e)) => {
                debug!(error = %e, "Reverse lookup failed");
                None
            },
            Err(_) => {
                debug!("Reverse lookup timed out");
                None
            },
        }
    }
}
