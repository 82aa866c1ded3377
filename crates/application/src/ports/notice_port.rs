//! User notice port
//!
//! Alerts and transient indicators raised by screen logic. Front-ends decide
//! how to present them.

#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

/// How a notice interrupts the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    /// Blocking dialog the user must dismiss
    Alert,
    /// Non-blocking indicator
    Toast,
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    /// Blocking, dismissable dialog
    #[must_use]
    pub fn alert(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Alert,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Non-blocking indicator
    #[must_use]
    pub fn toast(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Toast,
            title: title.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_blocking(&self) -> bool {
        self.kind == NoticeKind::Alert
    }
}

/// Port for presenting notices
#[cfg_attr(test, automock)]
pub trait NoticePort: Send + Sync {
    /// Present a notice; alerts are expected to wait for dismissal
    fn show(&self, notice: &Notice);
}
