//! Text rendering of the screens
//!
//! Every function returns a `String`; printing is left to the caller.

use std::fmt::Write;

use application::{
    HomeScreen, LocationStatus, MAP_PLACEHOLDER, Notice, RideView, SplashLogo,
};
use domain::entities::{RideDetails, RideOffer, Suggestion};
use domain::value_objects::EndpointKind;

const BAR_WIDTH: usize = 30;

/// One frame of the zooming splash logo
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn splash_frame(scale: f64, logo: SplashLogo) -> String {
    let filled = ((scale.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    let side = (f64::from(logo.width) * scale).round() as u32;
    format!(
        "🚕 ridehail [{}{}] {side}×{side}",
        "█".repeat(filled),
        "·".repeat(BAR_WIDTH - filled)
    )
}

fn field_line(screen: &HomeScreen, kind: EndpointKind) -> String {
    let field = screen.field(kind);
    let text = if field.label().is_empty() {
        format!("({})", kind.placeholder())
    } else {
        field.label().to_string()
    };
    let mark = if field.is_chosen() { " ✓" } else { "" };
    format!("{:<10} {text}{mark}", format!("{}:", kind.marker_title()))
}

/// Numbered suggestion list
#[must_use]
pub fn suggestion_list(suggestions: &[Suggestion]) -> String {
    let mut out = String::new();
    for (i, s) in suggestions.iter().enumerate() {
        let _ = write!(out, "  {}. {}", i + 1, s.display_name());
        if let Some(locality) = s.address().and_then(domain::entities::AddressDetails::locality) {
            let _ = write!(out, " [{locality}]");
        }
        out.push('\n');
    }
    out
}

/// Ride list as a table
#[must_use]
pub fn ride_table(offers: &[RideOffer]) -> String {
    let mut out = String::new();
    for offer in offers {
        let _ = writeln!(
            out,
            "  {:>3}  {:<14} {:>6}  {}",
            offer.id, offer.car_type, offer.estimated_fare, offer.estimated_time
        );
    }
    out
}

/// Detail card for the chosen ride
#[must_use]
pub fn ride_card(details: &RideDetails) -> String {
    format!(
        "  {}\n  Fare: {}\n  Estimated time: {}\n  Driver: {}\n  Vehicle: {}\n  (confirm | back)\n",
        details.offer.car_type,
        details.offer.estimated_fare,
        details.offer.estimated_time,
        details.driver_name,
        details.vehicle_plate
    )
}

/// A notice as shown in the terminal
#[must_use]
pub fn notice(notice: &Notice) -> String {
    let mut out = if notice.is_blocking() {
        format!("┌─ {} ─┐", notice.title)
    } else {
        format!("ℹ️  {}", notice.title)
    };
    if !notice.message.is_empty() {
        out.push('\n');
        out.push_str(&notice.message);
    }
    if notice.is_blocking() {
        out.push_str("\n[press Enter to dismiss]");
    }
    out
}

/// The whole home screen
#[must_use]
pub fn home(screen: &HomeScreen) -> String {
    let mut out = String::new();

    out.push_str("── Map ──────────────────────────\n");
    match screen.region() {
        Some(region) => {
            let _ = writeln!(out, "  Region: {region}");
            for marker in screen.markers() {
                let _ = writeln!(out, "  📍 {}: {}", marker.title, marker.coordinate);
            }
        },
        None => {
            let _ = writeln!(out, "  {MAP_PLACEHOLDER}");
            if let LocationStatus::Failed(reason) = screen.location_status() {
                let _ = writeln!(out, "  (location unavailable: {reason})");
            }
        },
    }

    out.push_str("── Trip ─────────────────────────\n");
    for kind in EndpointKind::ALL {
        let _ = writeln!(out, "  {}", field_line(screen, kind));
    }

    let store = screen.suggestions();
    if !store.is_empty() {
        let owner = store.owner().map_or("search", |k| k.tag());
        let _ = writeln!(out, "  Suggestions ({owner}):");
        out.push_str(&suggestion_list(store.suggestions()));
    }
    if let Some(indicator) = screen.search_indicator() {
        let _ = writeln!(
            out,
            "  ⚠️  No suggestions available for {} ({})",
            indicator.kind.tag(),
            indicator.message
        );
    }

    let menu = screen.menu();
    if menu.is_open() || menu.is_sliding() {
        let _ = writeln!(out, "── Menu ({:+.0}) ──────────────────", menu.offset());
        for item in menu.items() {
            let _ = writeln!(out, "  {} {}", item.glyph(), item.label());
        }
        out.push_str("  ✕ Close (close)\n");
    }

    let rides = screen.rides();
    let _ = writeln!(out, "[ {} ]", rides.button_label());
    match rides.view() {
        RideView::Hidden => {},
        RideView::List(offers) => out.push_str(&ride_table(offers)),
        RideView::Detail(details) => out.push_str(&ride_card(details)),
    }

    out
}
