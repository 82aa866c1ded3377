//! Pickup / drop-off text field state

use serde::{Deserialize, Serialize};

use super::Suggestion;
use crate::errors::DomainError;
use crate::value_objects::{Coordinate, EndpointKind};

/// Minimum number of characters before a query is sent to the geocoder
pub const MIN_QUERY_LEN: usize = 3;

/// Whether typed text is long enough to search for
///
/// Counts characters after trimming surrounding whitespace.
#[must_use]
pub fn is_searchable(text: &str, min_query_len: usize) -> bool {
    text.trim().chars().count() >= min_query_len
}

/// Lifecycle of a single search field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPhase {
    /// No query (empty or below the length threshold)
    #[default]
    Idle,
    /// A query was issued; suggestions may be in flight or shown
    Querying,
    /// A suggestion was chosen and copied into the field
    Selected,
}

/// One trip endpoint as edited through its search field
///
/// Typing after a selection keeps the previously chosen coordinate while the
/// label follows the typed text, so label and coordinate can disagree until
/// the next selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointSelection {
    kind: EndpointKind,
    label: String,
    coordinate: Option<Coordinate>,
    phase: FieldPhase,
}

impl EndpointSelection {
    /// Empty field for the given endpoint
    #[must_use]
    pub const fn new(kind: EndpointKind) -> Self {
        Self {
            kind,
            label: String::new(),
            coordinate: None,
            phase: FieldPhase::Idle,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> EndpointKind {
        self.kind
    }

    /// Text currently shown in the field
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }

    #[must_use]
    pub const fn phase(&self) -> FieldPhase {
        self.phase
    }

    /// Whether the field currently holds a chosen suggestion
    #[must_use]
    pub fn is_chosen(&self) -> bool {
        self.phase == FieldPhase::Selected
    }

    /// Apply typed text, returning the resulting phase
    pub fn edit(&mut self, text: impl Into<String>, min_query_len: usize) -> FieldPhase {
        self.label = text.into();
        self.phase = if is_searchable(&self.label, min_query_len) {
            FieldPhase::Querying
        } else {
            FieldPhase::Idle
        };
        self.phase
    }

    /// Take a suggestion as this endpoint
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinate` if the suggestion's position does
    /// not parse; the field is left untouched in that case.
    pub fn select(&mut self, suggestion: &Suggestion) -> Result<Coordinate, DomainError> {
        let coordinate = suggestion.coordinate()?;
        self.label = suggestion.display_name().to_string();
        self.coordinate = Some(coordinate);
        self.phase = FieldPhase::Selected;
        Ok(coordinate)
    }

    /// Set the endpoint directly from a known position (e.g. a device fix)
    pub fn set_resolved(&mut self, label: impl Into<String>, coordinate: Coordinate) {
        self.label = label.into();
        self.coordinate = Some(coordinate);
        self.phase = FieldPhase::Selected;
    }
}
