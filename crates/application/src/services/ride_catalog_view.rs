//! Available-rides panel: list toggle, detail card and mock confirmation

use domain::DomainError;
use domain::entities::{RideCatalog, RideDetails, RideOffer};
use tracing::{debug, info};

use crate::error::ApplicationError;
use crate::ports::Notice;

/// Button label while the list is hidden
pub const SHOW_RIDES_LABEL: &str = "Available Rides";

/// Button label while the list is shown
pub const HIDE_RIDES_LABEL: &str = "Hide Rides";

/// Which part of the panel is on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RideView<'a> {
    Hidden,
    List(&'a [RideOffer]),
    Detail(&'a RideDetails),
}

#[derive(Debug, Clone, Default)]
pub struct RideCatalogView {
    catalog: RideCatalog,
    visible: bool,
    selected: Option<RideDetails>,
}

impl RideCatalogView {
    #[must_use]
    pub const fn new(catalog: RideCatalog) -> Self {
        Self {
            catalog,
            visible: false,
            selected: None,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &RideCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&RideDetails> {
        self.selected.as_ref()
    }

    #[must_use]
    pub const fn button_label(&self) -> &'static str {
        if self.visible {
            HIDE_RIDES_LABEL
        } else {
            SHOW_RIDES_LABEL
        }
    }

    /// Show or hide the list; hiding also drops any selection
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        if !self.visible {
            self.selected = None;
        }
        debug!(visible = self.visible, "Ride list toggled");
        self.visible
    }

    #[must_use]
    pub fn view(&self) -> RideView<'_> {
        match (&self.selected, self.visible) {
            (Some(details), true) => RideView::Detail(details),
            (None, true) => RideView::List(self.catalog.offers()),
            (_, false) => RideView::Hidden,
        }
    }

    /// Open the detail card for an offer
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` while the list is hidden and
    /// `DomainError::NotFound` for an unknown id.
    pub fn select(&mut self, id: &str) -> Result<&RideDetails, DomainError> {
        if !self.visible {
            return Err(DomainError::ValidationError(
                "Ride list is not shown".to_string(),
            ));
        }
        let details = RideDetails::from(self.catalog.find(id)?.clone());
        debug!(id, car_type = %details.offer.car_type, "Ride selected");
        Ok(self.selected.insert(details))
    }

    /// Back to the list
    pub fn back(&mut self) {
        self.selected = None;
    }

    /// Mock confirmation; state is left as is
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::InvalidState` when no ride is selected.
    pub fn confirm(&self) -> Result<Notice, ApplicationError> {
        let details = self
            .selected
            .as_ref()
            .ok_or_else(|| ApplicationError::InvalidState("No ride selected".to_string()))?;

        info!(id = %details.offer.id, "Ride confirmed");
        Ok(Notice::alert(
            "Ride Confirmed",
            format!(
                "Your {} is on the way. Driver {} ({}) arrives in {}.",
                details.offer.car_type,
                details.driver_name,
                details.vehicle_plate,
                details.offer.estimated_time
            ),
        ))
    }
}
