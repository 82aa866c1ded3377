//! Terminal presentation of notices
//!
//! Alerts block the shell: the next input line only dismisses them.

use application::{Notice, NoticePort};
use parking_lot::Mutex;

use crate::render;

#[derive(Debug, Default)]
pub struct TerminalNotices {
    pending_alert: Mutex<Option<Notice>>,
}

impl TerminalNotices {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an alert is waiting for dismissal
    #[must_use]
    pub fn has_pending_alert(&self) -> bool {
        self.pending_alert.lock().is_some()
    }

    /// Dismiss the pending alert, returning it
    pub fn dismiss(&self) -> Option<Notice> {
        self.pending_alert.lock().take()
    }
}

impl NoticePort for TerminalNotices {
    fn show(&self, notice: &Notice) {
        println!("\n{}", render::notice(notice));
        if notice.is_blocking() {
            *self.pending_alert.lock() = Some(notice.clone());
        }
    }
}
