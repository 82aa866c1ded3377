//! Screen navigation

use tracing::debug;

/// Screens of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Splash,
    Home,
}

impl Screen {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Splash => "Splash",
            Self::Home => "Home",
        }
    }
}

/// Navigator starting on the splash screen
///
/// Screens are only ever replaced, so there is nothing to go back to.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Screen,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Screen::Splash)
    }
}

impl Navigator {
    #[must_use]
    pub const fn new(initial: Screen) -> Self {
        Self { current: initial }
    }

    #[must_use]
    pub const fn current(&self) -> Screen {
        self.current
    }

    /// Swap the shown screen; the replaced screen cannot be returned to
    pub fn replace(&mut self, screen: Screen) {
        debug!(from = ?self.current, to = ?screen, "Replace screen");
        self.current = screen;
    }
}
