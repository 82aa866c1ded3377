//! Home screen controller
//!
//! Owns the shared [`HomeScreen`] behind a short synchronous lock and runs the
//! async work (device location, suggestion lookups) outside it. Cloning the
//! controller is cheap; every clone drives the same screen.

use std::sync::Arc;
use std::time::Duration;

use domain::entities::RideDetails;
use domain::value_objects::{Coordinate, EndpointKind};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::home_screen::HomeScreen;
use super::location_service::{LocationFix, locate_device};
use super::suggestion_service::SuggestionService;
use super::suggestion_store::{ApplyResult, QueryTicket, SearchOutcome};
use crate::error::ApplicationError;
use crate::ports::{DeviceLocationPort, Notice, NoticePort};

/// Alert raised when the user refuses location access
pub const LOCATION_DENIED_MESSAGE: &str = "Permission to access location was denied";

/// Controller settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeSettings {
    /// Time budget for permission plus position read (default: 10000)
    #[serde(default = "default_location_timeout_ms")]
    pub location_timeout_ms: u64,

    /// Reverse-geocode the device fix into the pickup field
    #[serde(default)]
    pub label_device_location: bool,
}

const fn default_location_timeout_ms() -> u64 {
    10_000
}

impl Default for HomeSettings {
    fn default() -> Self {
        Self {
            location_timeout_ms: default_location_timeout_ms(),
            label_device_location: false,
        }
    }
}

/// What a keystroke ended up doing to the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchUpdate {
    /// Text too short; list cleared, nothing sent
    BelowThreshold,
    Applied { count: usize },
    /// A newer action superseded this lookup
    Stale,
    /// Lookup failed; list emptied and indicator set
    Unavailable(String),
}

#[derive(Clone)]
pub struct HomeController {
    state: Arc<Mutex<HomeScreen>>,
    search: Arc<SuggestionService>,
    device: Arc<dyn DeviceLocationPort>,
    notices: Arc<dyn NoticePort>,
    settings: HomeSettings,
}

impl std::fmt::Debug for HomeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HomeController")
            .field("search", &self.search)
            .field("device", &"<DeviceLocationPort>")
            .field("notices", &"<NoticePort>")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl HomeController {
    #[must_use]
    pub fn new(
        screen: HomeScreen,
        search: Arc<SuggestionService>,
        device: Arc<dyn DeviceLocationPort>,
        notices: Arc<dyn NoticePort>,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(screen)),
            search,
            device,
            notices,
            settings: HomeSettings::default(),
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: HomeSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Read the screen state
    pub fn snapshot<R>(&self, f: impl FnOnce(&HomeScreen) -> R) -> R {
        let state = self.state.lock();
        f(&*state)
    }

    /// Locate the device and center the map on it
    ///
    /// Denial raises an alert and leaves the map on its placeholder.
    #[instrument(skip(self))]
    pub async fn mount(&self) -> LocationFix {
        let budget = Duration::from_millis(self.settings.location_timeout_ms);
        let fix = locate_device(self.device.as_ref(), budget).await;
        self.state.lock().apply_location_fix(&fix);

        match &fix {
            LocationFix::Granted { coordinate } => {
                if self.settings.label_device_location {
                    self.label_pickup(coordinate).await;
                }
            },
            LocationFix::Denied => {
                self.notices.show(&Notice::alert(LOCATION_DENIED_MESSAGE, ""));
            },
            LocationFix::Failed { reason } => {
                self.notices
                    .show(&Notice::toast("Location unavailable", reason.clone()));
            },
        }
        fix
    }

    async fn label_pickup(&self, coordinate: &Coordinate) {
        if let Some(label) = self.search.describe(coordinate).await {
            let applied = self.state.lock().label_pickup_from_device(&label);
            debug!(applied, %label, "Pickup labelled from device position");
        }
    }

    /// Record typed text; returns the ticket to complete if a lookup is due
    ///
    /// Call this synchronously per keystroke so tickets follow typing order,
    /// then hand the ticket to [`Self::complete_search`] on any task.
    pub fn begin_edit(&self, kind: EndpointKind, text: &str) -> Option<QueryTicket> {
        self.state.lock().edit_text(kind, text)
    }

    /// Run the lookup for a ticket and apply it if still current
    #[instrument(skip(self, ticket), fields(field = ticket.kind().tag(), token = ticket.token()))]
    pub async fn complete_search(&self, ticket: QueryTicket) -> SearchUpdate {
        let outcome = self.search.fetch(ticket.query()).await;
        let update = match &outcome {
            SearchOutcome::Suggestions(list) => SearchUpdate::Applied { count: list.len() },
            SearchOutcome::Unavailable(reason) => SearchUpdate::Unavailable(reason.clone()),
        };

        match self.state.lock().apply_search(&ticket, outcome) {
            ApplyResult::Applied => update,
            ApplyResult::Stale => SearchUpdate::Stale,
        }
    }

    /// Keystroke handler: edit then look up
    pub async fn on_text_changed(&self, kind: EndpointKind, text: &str) -> SearchUpdate {
        match self.begin_edit(kind, text) {
            Some(ticket) => self.complete_search(ticket).await,
            None => SearchUpdate::BelowThreshold,
        }
    }

    /// Take a listed suggestion for one endpoint
    ///
    /// # Errors
    ///
    /// Returns the domain error for a bad index or malformed entry.
    pub fn select_suggestion(
        &self,
        index: usize,
        kind: EndpointKind,
    ) -> Result<Coordinate, ApplicationError> {
        let coordinate = self.state.lock().select_suggestion(index, kind)?;
        info!(field = kind.tag(), %coordinate, "Endpoint chosen");
        Ok(coordinate)
    }

    pub fn toggle_menu(&self) -> bool {
        self.state.lock().menu_mut().toggle()
    }

    pub fn close_menu(&self) {
        self.state.lock().menu_mut().close();
    }

    pub fn toggle_rides(&self) -> bool {
        self.state.lock().rides_mut().toggle()
    }

    /// Open the detail card for a ride
    ///
    /// # Errors
    ///
    /// Fails while the list is hidden or for an unknown id.
    pub fn select_ride(&self, id: &str) -> Result<RideDetails, ApplicationError> {
        let mut state = self.state.lock();
        Ok(state.rides_mut().select(id)?.clone())
    }

    pub fn back_to_rides(&self) {
        self.state.lock().rides_mut().back();
    }

    /// Show the mock confirmation
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::InvalidState` when no ride is selected.
    pub fn confirm_ride(&self) -> Result<(), ApplicationError> {
        let notice = self.state.lock().rides().confirm()?;
        self.notices.show(&notice);
        Ok(())
    }

    /// Advance animations
    pub fn tick(&self, dt: Duration) {
        self.state.lock().tick(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{
        GeocodingPort, MockDeviceLocationPort, MockGeocodingPort, MockNoticePort, NoticeKind,
        PermissionStatus,
    };
    use domain::entities::Suggestion;
    use domain::value_objects::MapRegion;

    fn london() -> Suggestion {
        Suggestion::new("London, UK", "51.5074", "-0.1278")
    }

    fn granted_device(coordinate: Coordinate) -> MockDeviceLocationPort {
        let mut device = MockDeviceLocationPort::new();
        device
            .expect_request_foreground_permission()
            .returning(|| Ok(PermissionStatus::Granted));
        device
            .expect_current_position()
            .returning(move || Ok(coordinate));
        device
    }

    fn quiet_notices() -> MockNoticePort {
        let mut notices = MockNoticePort::new();
        notices.expect_show().never();
        notices
    }

    fn controller(
        geocoder: impl GeocodingPort + 'static,
        device: MockDeviceLocationPort,
        notices: MockNoticePort,
    ) -> HomeController {
        HomeController::new(
            HomeScreen::default(),
            Arc::new(SuggestionService::new(Arc::new(geocoder))),
            Arc::new(device),
            Arc::new(notices),
        )
    }

    #[tokio::test]
    async fn mount_granted_centers_map() {
        let c = controller(
            MockGeocodingPort::new(),
            granted_device(Coordinate::bengaluru()),
            quiet_notices(),
        );

        let fix = c.mount().await;

        assert_eq!(fix.coordinate(), Some(Coordinate::bengaluru()));
        assert_eq!(
            c.snapshot(HomeScreen::region),
            Some(MapRegion::centered_on(Coordinate::bengaluru()))
        );
    }

    #[tokio::test]
    async fn mount_denied_alerts_and_keeps_placeholder() {
        let mut device = MockDeviceLocationPort::new();
        device
            .expect_request_foreground_permission()
            .returning(|| Ok(PermissionStatus::Denied));
        let mut notices = MockNoticePort::new();
        notices
            .expect_show()
            .withf(|n| n.kind == NoticeKind::Alert && n.title == LOCATION_DENIED_MESSAGE)
            .times(1)
            .return_const(());

        let c = controller(MockGeocodingPort::new(), device, notices);
        assert_eq!(c.mount().await, LocationFix::Denied);
        assert!(!c.snapshot(HomeScreen::is_map_ready));
    }

    #[tokio::test]
    async fn mount_labels_pickup_when_enabled() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder
            .expect_reverse()
            .times(1)
            .returning(|_| Ok(Some("MG Road, Bengaluru".into())));

        let c = controller(geocoder, granted_device(Coordinate::bengaluru()), quiet_notices())
            .with_settings(HomeSettings {
                label_device_location: true,
                ..Default::default()
            });
        c.mount().await;

        let label = c.snapshot(|s| s.field(EndpointKind::Pickup).label().to_string());
        assert_eq!(label, "MG Road, Bengaluru");
    }

    #[tokio::test]
    async fn mount_skips_reverse_lookup_by_default() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder.expect_reverse().never();

        let c = controller(geocoder, granted_device(Coordinate::london()), quiet_notices());
        c.mount().await;
        assert!(c.snapshot(|s| s.field(EndpointKind::Pickup).label().is_empty()));
    }

    #[tokio::test]
    async fn short_text_sends_nothing() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder.expect_search().never();
        let c = controller(geocoder, MockDeviceLocationPort::new(), quiet_notices());

        let update = c.on_text_changed(EndpointKind::Pickup, "Lo").await;
        assert_eq!(update, SearchUpdate::BelowThreshold);
        assert!(c.snapshot(|s| s.suggestions().is_empty()));
    }

    #[tokio::test]
    async fn typing_then_selecting_dropoff() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder
            .expect_search()
            .withf(|q, _| q == "Lond")
            .times(1)
            .returning(|_, _| Ok(vec![london()]));
        let c = controller(geocoder, MockDeviceLocationPort::new(), quiet_notices());

        let update = c.on_text_changed(EndpointKind::Dropoff, "Lond").await;
        assert_eq!(update, SearchUpdate::Applied { count: 1 });

        let coordinate = c.select_suggestion(0, EndpointKind::Dropoff).unwrap();
        assert_eq!(coordinate, Coordinate::london());
        c.snapshot(|s| {
            assert_eq!(s.field(EndpointKind::Dropoff).label(), "London, UK");
            assert_eq!(s.region(), Some(MapRegion::centered_on(Coordinate::london())));
            assert!(s.suggestions().is_empty());
        });
    }

    #[tokio::test]
    async fn failed_lookup_sets_indicator() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder
            .expect_search()
            .returning(|_, _| Err(ApplicationError::ExternalService("HTTP 503".into())));
        let c = controller(geocoder, MockDeviceLocationPort::new(), quiet_notices());

        let update = c.on_text_changed(EndpointKind::Pickup, "Lond").await;
        assert!(matches!(update, SearchUpdate::Unavailable(_)));
        assert!(c.snapshot(|s| s.search_indicator().is_some()));
    }

    /// Geocoder whose latency depends on the query
    struct DelayedGeocoder;

    #[async_trait::async_trait]
    impl GeocodingPort for DelayedGeocoder {
        async fn search(&self, query: &str, _limit: u8) -> Result<Vec<Suggestion>, ApplicationError> {
            let (delay, name) = if query == "Lon" {
                (400, "Long Beach, USA")
            } else {
                (50, "London, UK")
            };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(vec![Suggestion::new(name, "51.5074", "-0.1278")])
        }

        async fn reverse(&self, _c: &Coordinate) -> Result<Option<String>, ApplicationError> {
            Ok(None)
        }
    }

    fn shown_names(c: &HomeController) -> Vec<String> {
        c.snapshot(|s| {
            s.suggestions()
                .suggestions()
                .iter()
                .map(|x| x.display_name().to_string())
                .collect()
        })
    }

    #[tokio::test(start_paused = true)]
    async fn older_response_resolving_last_is_ignored() {
        let c = controller(DelayedGeocoder, MockDeviceLocationPort::new(), quiet_notices());

        let first = c.begin_edit(EndpointKind::Dropoff, "Lon").unwrap();
        let second = c.begin_edit(EndpointKind::Dropoff, "Lond").unwrap();

        let slow = tokio::spawn({
            let c = c.clone();
            async move { c.complete_search(first).await }
        });
        let fast = tokio::spawn({
            let c = c.clone();
            async move { c.complete_search(second).await }
        });

        assert_eq!(fast.await.unwrap(), SearchUpdate::Applied { count: 1 });
        assert_eq!(slow.await.unwrap(), SearchUpdate::Stale);
        assert_eq!(shown_names(&c), ["London, UK"]);
    }

    #[tokio::test(start_paused = true)]
    async fn response_after_selection_does_not_repopulate() {
        let c = controller(DelayedGeocoder, MockDeviceLocationPort::new(), quiet_notices());

        let ticket = c.begin_edit(EndpointKind::Dropoff, "Lond").unwrap();
        c.complete_search(ticket).await;
        let pending = c.begin_edit(EndpointKind::Dropoff, "Lon").unwrap();
        c.select_suggestion(0, EndpointKind::Dropoff).unwrap();

        assert_eq!(c.complete_search(pending).await, SearchUpdate::Stale);
        assert!(shown_names(&c).is_empty());
    }

    #[test]
    fn confirm_ride_shows_alert() {
        let mut notices = MockNoticePort::new();
        notices
            .expect_show()
            .withf(|n| n.is_blocking() && n.title == "Ride Confirmed")
            .times(1)
            .return_const(());
        let c = controller(MockGeocodingPort::new(), MockDeviceLocationPort::new(), notices);

        assert!(c.toggle_rides());
        let details = c.select_ride("1").unwrap();
        assert_eq!(details.offer.car_type, "Sedan");
        c.confirm_ride().unwrap();
        c.back_to_rides();
        assert!(c.snapshot(|s| s.rides().selected().is_none()));
    }

    #[test]
    fn confirm_without_ride_fails_quietly() {
        let c = controller(MockGeocodingPort::new(), MockDeviceLocationPort::new(), quiet_notices());
        assert!(matches!(
            c.confirm_ride(),
            Err(ApplicationError::InvalidState(_))
        ));
    }

    #[test]
    fn menu_toggle_and_tick() {
        let c = controller(MockGeocodingPort::new(), MockDeviceLocationPort::new(), quiet_notices());
        assert!(c.toggle_menu());
        c.tick(Duration::from_secs(1));
        assert!(c.snapshot(|s| s.menu().offset().abs() < f64::EPSILON));
    }

    #[test]
    fn close_menu_slides_back_offscreen() {
        let c = controller(MockGeocodingPort::new(), MockDeviceLocationPort::new(), quiet_notices());
        c.toggle_menu();
        c.tick(Duration::from_secs(1));

        c.close_menu();
        assert!(c.snapshot(|s| !s.menu().is_open() && s.menu().is_sliding()));
        c.tick(Duration::from_secs(1));
        assert!(c.snapshot(|s| (s.menu().offset() + s.menu().width()).abs() < f64::EPSILON));

        c.close_menu();
        assert!(c.snapshot(|s| !s.menu().is_sliding()));
    }
}
