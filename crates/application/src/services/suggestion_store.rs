//! Suggestion list shared by the pickup and drop-off fields
//!
//! Every query gets a token from one monotonically increasing sequence.
//! A response is applied only if its token is still the latest issued for its
//! field and neither a newer response nor a selection has replaced the list
//! since. A field dropping below the length threshold retires only that
//! field's pending query.

use domain::DomainError;
use domain::entities::Suggestion;
use domain::value_objects::EndpointKind;
use serde::{Deserialize, Serialize};

/// Handle for one issued query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    kind: EndpointKind,
    token: u64,
    query: String,
}

impl QueryTicket {
    #[must_use]
    pub const fn kind(&self) -> EndpointKind {
        self.kind
    }

    #[must_use]
    pub const fn token(&self) -> u64 {
        self.token
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Result of a suggestion lookup, as seen by the screen
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Provider answered; list is already filtered and capped
    Suggestions(Vec<Suggestion>),
    /// Transport, decoding or timeout failure
    Unavailable(String),
}

/// Non-blocking marker shown while suggestions could not be loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchIndicator {
    pub kind: EndpointKind,
    pub message: String,
}

/// What happened to a response handed to [`SuggestionStore::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyResult {
    Applied,
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct SuggestionStore {
    suggestions: Vec<Suggestion>,
    owner: Option<EndpointKind>,
    indicator: Option<SearchIndicator>,
    sequence: u64,
    latest_pickup: u64,
    latest_dropoff: u64,
    /// Oldest token still allowed to replace the list
    floor: u64,
}

impl SuggestionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current list, provider order
    #[must_use]
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Field whose query produced the current list
    #[must_use]
    pub const fn owner(&self) -> Option<EndpointKind> {
        self.owner
    }

    #[must_use]
    pub const fn indicator(&self) -> Option<&SearchIndicator> {
        self.indicator.as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// Latest token issued for a field (0 if none)
    #[must_use]
    pub const fn latest_token(&self, kind: EndpointKind) -> u64 {
        match kind {
            EndpointKind::Pickup => self.latest_pickup,
            EndpointKind::Dropoff => self.latest_dropoff,
        }
    }

    fn next_token(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }

    fn set_latest(&mut self, kind: EndpointKind, token: u64) {
        match kind {
            EndpointKind::Pickup => self.latest_pickup = token,
            EndpointKind::Dropoff => self.latest_dropoff = token,
        }
    }

    /// Register a new query for a field
    pub fn issue(&mut self, kind: EndpointKind, query: impl Into<String>) -> QueryTicket {
        let token = self.next_token();
        self.set_latest(kind, token);
        QueryTicket {
            kind,
            token,
            query: query.into(),
        }
    }

    /// The field's text fell below the threshold: drop its in-flight query and clear
    ///
    /// The other field's pending query stays current.
    pub fn invalidate(&mut self, kind: EndpointKind) {
        let token = self.next_token();
        self.set_latest(kind, token);
        self.reset_list();
    }

    /// Clear after a selection; responses issued before now are stale
    pub fn clear(&mut self) {
        self.floor = self.next_token();
        self.reset_list();
    }

    fn reset_list(&mut self) {
        self.suggestions.clear();
        self.owner = None;
        self.indicator = None;
    }

    /// Whether a ticket may still update the list
    #[must_use]
    pub const fn is_current(&self, ticket: &QueryTicket) -> bool {
        ticket.token == self.latest_token(ticket.kind) && ticket.token >= self.floor
    }

    /// Apply a response if its ticket is still current
    pub fn apply(&mut self, ticket: &QueryTicket, outcome: SearchOutcome) -> ApplyResult {
        if !self.is_current(ticket) {
            return ApplyResult::Stale;
        }

        self.floor = ticket.token;
        self.owner = Some(ticket.kind);
        match outcome {
            SearchOutcome::Suggestions(list) => {
                self.suggestions = list;
                self.indicator = None;
            },
            SearchOutcome::Unavailable(reason) => {
                self.suggestions.clear();
                self.indicator = Some(SearchIndicator {
                    kind: ticket.kind,
                    message: reason,
                });
            },
        }
        ApplyResult::Applied
    }

    /// Suggestion at a list position
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SuggestionOutOfRange` for a bad index.
    pub fn get(&self, index: usize) -> Result<&Suggestion, DomainError> {
        self.suggestions
            .get(index)
            .ok_or(DomainError::SuggestionOutOfRange {
                index,
                available: self.suggestions.len(),
            })
    }
}
