//! UI notification seam.

use std::fmt;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Neutral information.
    Info,
    /// An operation is in flight.
    Warning,
    /// An operation completed.
    Success,
    /// Something failed or was destructive.
    Danger,
}

impl Severity {
    /// Get the severity as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Success => "success",
            Severity::Danger => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fire-and-forget sink for user-facing messages.
///
/// Implementations render toasts, banners, whatever fits the UI.
/// Nothing is returned and delivery failures are not observed.
pub trait Notifier: Send + Sync {
    /// Deliver one message at the given severity.
    fn notify(&self, severity: Severity, message: &str);
}

/// Notifier that drops every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _severity: Severity, _message: &str) {}
}
