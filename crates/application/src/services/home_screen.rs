//! Home screen state
//!
//! Plain synchronous state: the two search fields, the shared suggestion list,
//! the map viewport, the menu and the ride panel. Async work happens in
//! [`super::HomeController`], which feeds results back through the methods here.

use std::time::Duration;

use domain::DomainError;
use domain::entities::{EndpointSelection, FieldPhase, MIN_QUERY_LEN, Suggestion};
use domain::value_objects::{Coordinate, EndpointKind, MapRegion};
use serde::Serialize;
use tracing::debug;

use super::location_service::LocationFix;
use super::menu_panel::MenuPanel;
use super::ride_catalog_view::RideCatalogView;
use super::suggestion_store::{
    ApplyResult, QueryTicket, SearchIndicator, SearchOutcome, SuggestionStore,
};

/// Text shown instead of the map until a region is known
pub const MAP_PLACEHOLDER: &str = "Loading map...";

/// Where the device-location request stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocationStatus {
    #[default]
    Locating,
    Ready,
    Denied,
    Failed(String),
}

/// A pin on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub kind: EndpointKind,
    pub title: &'static str,
    pub coordinate: Coordinate,
}

#[derive(Debug, Clone)]
pub struct HomeScreen {
    pickup: EndpointSelection,
    dropoff: EndpointSelection,
    suggestions: SuggestionStore,
    region: Option<MapRegion>,
    location: LocationStatus,
    device_coordinate: Option<Coordinate>,
    menu: MenuPanel,
    rides: RideCatalogView,
    min_query_len: usize,
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new(MIN_QUERY_LEN, MenuPanel::default(), RideCatalogView::default())
    }
}

impl HomeScreen {
    #[must_use]
    pub fn new(min_query_len: usize, menu: MenuPanel, rides: RideCatalogView) -> Self {
        Self {
            pickup: EndpointSelection::new(EndpointKind::Pickup),
            dropoff: EndpointSelection::new(EndpointKind::Dropoff),
            suggestions: SuggestionStore::new(),
            region: None,
            location: LocationStatus::Locating,
            device_coordinate: None,
            menu,
            rides,
            min_query_len,
        }
    }

    #[must_use]
    pub const fn field(&self, kind: EndpointKind) -> &EndpointSelection {
        match kind {
            EndpointKind::Pickup => &self.pickup,
            EndpointKind::Dropoff => &self.dropoff,
        }
    }

    fn field_mut(&mut self, kind: EndpointKind) -> &mut EndpointSelection {
        match kind {
            EndpointKind::Pickup => &mut self.pickup,
            EndpointKind::Dropoff => &mut self.dropoff,
        }
    }

    #[must_use]
    pub const fn suggestions(&self) -> &SuggestionStore {
        &self.suggestions
    }

    #[must_use]
    pub const fn search_indicator(&self) -> Option<&SearchIndicator> {
        self.suggestions.indicator()
    }

    #[must_use]
    pub const fn region(&self) -> Option<MapRegion> {
        self.region
    }

    /// The map renders only once a region is known
    #[must_use]
    pub const fn is_map_ready(&self) -> bool {
        self.region.is_some()
    }

    #[must_use]
    pub const fn location_status(&self) -> &LocationStatus {
        &self.location
    }

    #[must_use]
    pub const fn device_coordinate(&self) -> Option<Coordinate> {
        self.device_coordinate
    }

    #[must_use]
    pub const fn menu(&self) -> &MenuPanel {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut MenuPanel {
        &mut self.menu
    }

    #[must_use]
    pub const fn rides(&self) -> &RideCatalogView {
        &self.rides
    }

    pub fn rides_mut(&mut self) -> &mut RideCatalogView {
        &mut self.rides
    }

    /// Apply typed text to a field
    ///
    /// Returns a ticket when the text is long enough to search. Shorter text
    /// clears the list and cancels the field's pending query.
    pub fn edit_text(&mut self, kind: EndpointKind, text: &str) -> Option<QueryTicket> {
        let min = self.min_query_len;
        if self.field_mut(kind).edit(text, min) == FieldPhase::Querying {
            let ticket = self.suggestions.issue(kind, text);
            debug!(field = kind.tag(), token = ticket.token(), "Query issued");
            Some(ticket)
        } else {
            self.suggestions.invalidate(kind);
            None
        }
    }

    /// Hand a finished lookup back to the screen
    pub fn apply_search(&mut self, ticket: &QueryTicket, outcome: SearchOutcome) -> ApplyResult {
        let result = self.suggestions.apply(ticket, outcome);
        if result == ApplyResult::Stale {
            debug!(
                field = ticket.kind().tag(),
                token = ticket.token(),
                query = ticket.query(),
                "Dropping stale suggestions"
            );
        }
        result
    }

    /// Take the suggestion at `index` for one endpoint
    ///
    /// The other endpoint is untouched. The map jumps to the chosen place and
    /// the list is cleared.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SuggestionOutOfRange` for a bad index and
    /// `DomainError::InvalidCoordinate` if the entry's position does not parse.
    pub fn select_suggestion(
        &mut self,
        index: usize,
        kind: EndpointKind,
    ) -> Result<Coordinate, DomainError> {
        let suggestion: Suggestion = self.suggestions.get(index)?.clone();
        let coordinate = self.field_mut(kind).select(&suggestion)?;
        self.region = Some(MapRegion::centered_on(coordinate));
        self.suggestions.clear();
        debug!(field = kind.tag(), %coordinate, "Suggestion selected");
        Ok(coordinate)
    }

    /// Record the device-location outcome
    pub fn apply_location_fix(&mut self, fix: &LocationFix) {
        match fix {
            LocationFix::Granted { coordinate } => {
                self.device_coordinate = Some(*coordinate);
                self.region = Some(MapRegion::centered_on(*coordinate));
                self.location = LocationStatus::Ready;
            },
            LocationFix::Denied => self.location = LocationStatus::Denied,
            LocationFix::Failed { reason } => {
                self.location = LocationStatus::Failed(reason.clone());
            },
        }
    }

    /// Fill the pickup field from the device position if the user has not typed yet
    pub fn label_pickup_from_device(&mut self, label: &str) -> bool {
        let Some(coordinate) = self.device_coordinate else {
            return false;
        };
        if !self.pickup.label().is_empty() {
            return false;
        }
        self.pickup.set_resolved(label, coordinate);
        true
    }

    /// Pins for every endpoint with a known position
    #[must_use]
    pub fn markers(&self) -> Vec<MapMarker> {
        [&self.pickup, &self.dropoff]
            .into_iter()
            .filter_map(|field| {
                field.coordinate().map(|coordinate| MapMarker {
                    kind: field.kind(),
                    title: field.kind().marker_title(),
                    coordinate,
                })
            })
            .collect()
    }

    /// Advance animations
    pub fn tick(&mut self, dt: Duration) {
        self.menu.tick(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn london() -> Suggestion {
        Suggestion::new("London, UK", "51.5074", "-0.1278")
    }

    fn screen_with(kind: EndpointKind, query: &str, list: Vec<Suggestion>) -> HomeScreen {
        let mut screen = HomeScreen::default();
        let ticket = screen.edit_text(kind, query).unwrap();
        screen.apply_search(&ticket, SearchOutcome::Suggestions(list));
        screen
    }

    #[test]
    fn starts_with_placeholder_map() {
        let screen = HomeScreen::default();
        assert!(!screen.is_map_ready());
        assert_eq!(screen.location_status(), &LocationStatus::Locating);
        assert!(screen.markers().is_empty());
    }

    #[test]
    fn short_text_issues_no_query_and_clears_list() {
        let mut screen = screen_with(EndpointKind::Pickup, "Lond", vec![london()]);
        assert!(screen.edit_text(EndpointKind::Pickup, "Lo").is_none());
        assert!(screen.suggestions().is_empty());
        assert_eq!(screen.field(EndpointKind::Pickup).phase(), FieldPhase::Idle);
    }

    #[test]
    fn blank_text_issues_no_query() {
        let mut screen = HomeScreen::default();
        assert!(screen.edit_text(EndpointKind::Pickup, "   ").is_none());
        assert!(screen.search_indicator().is_none());
        assert_eq!(screen.field(EndpointKind::Pickup).phase(), FieldPhase::Idle);
    }

    #[test]
    fn shortening_pickup_keeps_dropoff_search_alive() {
        let mut screen = HomeScreen::default();
        let dropoff = screen.edit_text(EndpointKind::Dropoff, "Lond").unwrap();
        assert!(screen.edit_text(EndpointKind::Pickup, "Ko").is_none());

        let result = screen.apply_search(&dropoff, SearchOutcome::Suggestions(vec![london()]));

        assert_eq!(result, ApplyResult::Applied);
        assert_eq!(screen.suggestions().suggestions().len(), 1);
        assert_eq!(screen.suggestions().owner(), Some(EndpointKind::Dropoff));
    }

    #[test]
    fn lond_scenario_selects_dropoff_and_moves_map() {
        let mut screen = screen_with(EndpointKind::Dropoff, "Lond", vec![london()]);
        assert_eq!(screen.suggestions().suggestions().len(), 1);

        let coordinate = screen
            .select_suggestion(0, EndpointKind::Dropoff)
            .unwrap();

        assert_eq!(coordinate, Coordinate::london());
        assert_eq!(screen.field(EndpointKind::Dropoff).label(), "London, UK");
        let region = screen.region().unwrap();
        assert!((region.latitude() - 51.5074).abs() < f64::EPSILON);
        assert!((region.longitude() + 0.1278).abs() < f64::EPSILON);
        assert!((region.latitude_delta() - 0.01).abs() < f64::EPSILON);
        assert!((region.longitude_delta() - 0.01).abs() < f64::EPSILON);
        assert!(screen.suggestions().is_empty());
    }

    #[test]
    fn selecting_one_endpoint_leaves_the_other_alone() {
        let mut screen = screen_with(EndpointKind::Pickup, "Lond", vec![london()]);
        screen.select_suggestion(0, EndpointKind::Pickup).unwrap();
        let pickup_before = screen.field(EndpointKind::Pickup).clone();

        let ticket = screen.edit_text(EndpointKind::Dropoff, "Bengal").unwrap();
        screen.apply_search(
            &ticket,
            SearchOutcome::Suggestions(vec![Suggestion::new("Bengaluru", "12.9716", "77.5946")]),
        );
        screen.select_suggestion(0, EndpointKind::Dropoff).unwrap();

        assert_eq!(screen.field(EndpointKind::Pickup), &pickup_before);
        assert_eq!(
            screen.field(EndpointKind::Dropoff).coordinate(),
            Some(Coordinate::bengaluru())
        );
        assert_eq!(screen.markers().len(), 2);
    }

    #[test]
    fn selection_uses_caller_tag_not_list_owner() {
        let mut screen = screen_with(EndpointKind::Dropoff, "Lond", vec![london()]);
        screen.select_suggestion(0, EndpointKind::Pickup).unwrap();
        assert_eq!(
            screen.field(EndpointKind::Pickup).coordinate(),
            Some(Coordinate::london())
        );
        assert!(screen.field(EndpointKind::Dropoff).coordinate().is_none());
    }

    #[test]
    fn select_out_of_range() {
        let mut screen = HomeScreen::default();
        assert!(matches!(
            screen.select_suggestion(3, EndpointKind::Pickup),
            Err(DomainError::SuggestionOutOfRange { index: 3, .. })
        ));
    }

    #[test]
    fn granted_fix_centers_map() {
        let mut screen = HomeScreen::default();
        screen.apply_location_fix(&LocationFix::Granted {
            coordinate: Coordinate::bengaluru(),
        });
        assert!(screen.is_map_ready());
        assert_eq!(
            screen.region(),
            Some(MapRegion::centered_on(Coordinate::bengaluru()))
        );
        assert_eq!(screen.location_status(), &LocationStatus::Ready);
    }

    #[test]
    fn denied_fix_keeps_placeholder_until_selection() {
        let mut screen = HomeScreen::default();
        screen.apply_location_fix(&LocationFix::Denied);
        assert!(!screen.is_map_ready());

        let ticket = screen.edit_text(EndpointKind::Pickup, "Lond").unwrap();
        screen.apply_search(&ticket, SearchOutcome::Suggestions(vec![london()]));
        screen.select_suggestion(0, EndpointKind::Pickup).unwrap();
        assert!(screen.is_map_ready());
    }

    #[test]
    fn device_label_only_fills_empty_pickup() {
        let mut screen = HomeScreen::default();
        assert!(!screen.label_pickup_from_device("Somewhere"));

        screen.apply_location_fix(&LocationFix::Granted {
            coordinate: Coordinate::bengaluru(),
        });
        assert!(screen.label_pickup_from_device("MG Road, Bengaluru"));
        assert_eq!(screen.field(EndpointKind::Pickup).label(), "MG Road, Bengaluru");

        assert!(!screen.label_pickup_from_device("Other"));
    }

    #[test]
    fn markers_titles() {
        let mut screen = screen_with(EndpointKind::Pickup, "Lond", vec![london()]);
        screen.select_suggestion(0, EndpointKind::Pickup).unwrap();
        let markers = screen.markers();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].title, "Pickup Location");
    }
}
