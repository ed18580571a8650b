//! Single-slot transient alert.
//!
//! Only one alert is ever visible. Raising a new one replaces the old message
//! and its deadline, so a pending clear for a superseded alert can never fire
//! early. The owner drives expiry by calling [`AlertChannel::tick`].

use std::time::{Duration, Instant};

/// How long an alert stays visible unless configured otherwise.
pub const DEFAULT_ALERT_WINDOW: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Alert {
    message: String,
    /// `None` when the window reaches past what `Instant` can represent.
    expires_at: Option<Instant>,
}

#[derive(Debug, Clone)]
pub struct AlertChannel {
    window: Duration,
    current: Option<Alert>,
}

impl Default for AlertChannel {
    fn default() -> Self {
        Self::new(DEFAULT_ALERT_WINDOW)
    }
}

impl AlertChannel {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            current: None,
        }
    }

    /// Show `message`, restarting the window from `now`.
    pub fn raise(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some(Alert {
            message: message.into(),
            expires_at: now.checked_add(self.window),
        });
    }

    /// Drop the alert once its window has elapsed. Returns true if it was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(Alert {
                expires_at: Some(deadline),
                ..
            }) if now >= *deadline => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|a| a.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_clears_after_window() {
        let start = Instant::now();
        let mut alerts = AlertChannel::default();
        alerts.raise("oops", start);

        assert!(!alerts.tick(start + Duration::from_millis(2999)));
        assert_eq!(alerts.message(), Some("oops"));

        assert!(alerts.tick(start + Duration::from_secs(3)));
        assert_eq!(alerts.message(), None);
    }

    #[test]
    fn new_alert_restarts_the_window() {
        let start = Instant::now();
        let mut alerts = AlertChannel::default();
        alerts.raise("first", start);
        alerts.raise("second", start + Duration::from_secs(2));

        // The first alert's deadline has passed, but it was superseded.
        alerts.tick(start + Duration::from_secs(4));
        assert_eq!(alerts.message(), Some("second"));

        alerts.tick(start + Duration::from_secs(5));
        assert_eq!(alerts.message(), None);
    }

    #[test]
    fn tick_without_alert_is_noop() {
        let mut alerts = AlertChannel::new(Duration::from_secs(1));
        assert!(!alerts.tick(Instant::now()));
        assert!(alerts.message().is_none());
    }

    #[test]
    fn unbounded_window_never_expires() {
        let start = Instant::now();
        let mut alerts = AlertChannel::new(Duration::from_secs(u64::MAX));
        alerts.raise("sticky", start);

        assert!(!alerts.tick(start + Duration::from_secs(86_400 * 365)));
        assert_eq!(alerts.message(), Some("sticky"));

        // A later alert still replaces it
        alerts.raise("next", start + Duration::from_secs(1));
        assert_eq!(alerts.message(), Some("next"));
    }
}
