//! Application services
//!
//! Screen state machines and the use cases that drive them.

mod animation;
mod home_controller;
mod home_screen;
mod location_service;
mod menu_panel;
mod navigator;
mod ride_catalog_view;
mod splash;
mod suggestion_service;
mod suggestion_store;

pub use animation::{AnimatedValue, Easing};
pub use home_controller::{HomeController, HomeSettings, LOCATION_DENIED_MESSAGE, SearchUpdate};
pub use home_screen::{HomeScreen, LocationStatus, MAP_PLACEHOLDER, MapMarker};
pub use location_service::{LocationFix, locate_device};
pub use menu_panel::{DEFAULT_MENU_WIDTH, DEFAULT_SLIDE_DURATION, MenuPanel};
pub use navigator::{Navigator, Screen};
pub use ride_catalog_view::{HIDE_RIDES_LABEL, RideCatalogView, RideView, SHOW_RIDES_LABEL};
pub use splash::{SplashConfig, SplashLogo, SplashScreen, SplashStep};
pub use suggestion_service::{DEFAULT_MAX_SUGGESTIONS, SuggestionConfig, SuggestionService};
pub use suggestion_store::{
    ApplyResult, QueryTicket, SearchIndicator, SearchOutcome, SuggestionStore,
};
