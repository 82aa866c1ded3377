//! Entries of the slide-in navigation menu

use serde::{Deserialize, Serialize};
use std::fmt;

/// A static menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuItem {
    Profile,
    History,
    Support,
    About,
    Settings,
}

impl MenuItem {
    /// Menu entries in display order
    pub const ALL: [Self; 5] = [
        Self::Profile,
        Self::History,
        Self::Support,
        Self::About,
        Self::Settings,
    ];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::History => "History",
            Self::Support => "Support",
            Self::About => "About",
            Self::Settings => "Settings",
        }
    }

    /// Icon glyph used by text front-ends
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Profile => "👤",
            Self::History => "🕘",
            Self::Support => "❓",
            Self::About => "ℹ️",
            Self::Settings => "⚙️",
        }
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
