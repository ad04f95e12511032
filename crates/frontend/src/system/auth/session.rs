//! Session liveness: idle auto-logout and token presence check.

use std::time::Duration;

use leptos::prelude::*;

use super::context::use_session;
use super::storage;
use crate::shared::config::use_config;
use crate::shared::toast::use_toast;

/// Window events counted as user activity.
pub const ACTIVITY_EVENTS: [&str; 6] = [
    "mousemove",
    "keydown",
    "mousedown",
    "touchstart",
    "scroll",
    "click",
];

/// Time since the last user activity, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdleTracker {
    last_activity_ms: f64,
    timeout_ms: f64,
}

impl IdleTracker {
    pub fn new(now_ms: f64, timeout_ms: u32) -> Self {
        Self {
            last_activity_ms: now_ms,
            timeout_ms: timeout_ms as f64,
        }
    }

    pub fn record_activity(&mut self, now_ms: f64) {
        if now_ms > self.last_activity_ms {
            self.last_activity_ms = now_ms;
        }
    }

    pub fn idle_for(&self, now_ms: f64) -> f64 {
        (now_ms - self.last_activity_ms).max(0.0)
    }

    pub fn is_expired(&self, now_ms: f64) -> bool {
        self.idle_for(now_ms) >= self.timeout_ms
    }
}

/// Ends the session after the idle timeout, or when the stored token
/// disappears (logout in another tab). Mounted only while signed in; the
/// listeners and the interval are removed with it.
#[component]
pub fn SessionMonitor() -> impl IntoView {
    let session = use_session();
    let config = use_config();
    let toast = use_toast();

    let tracker = StoredValue::new(IdleTracker::new(js_sys::Date::now(), config.idle_timeout_ms));

    let listeners: Vec<WindowListenerHandle> = ACTIVITY_EVENTS
        .iter()
        .map(|name| {
            window_event_listener_untyped(name, move |_| {
                tracker.update_value(|t| t.record_activity(js_sys::Date::now()));
            })
        })
        .collect();

    let period = config.session_check_ms.min(config.idle_timeout_ms).max(1_000);
    let interval = set_interval_with_handle(
        move || {
            let now = js_sys::Date::now();
            let expired = tracker.try_with_value(|t| t.is_expired(now)).unwrap_or(false);
            if expired {
                log::info!("logging out after inactivity");
                session.invalidate();
                toast.error("You have been logged out due to inactivity.");
            } else if storage::get_token().is_none() && session.token().is_some() {
                log::info!("token removed from storage, ending session");
                session.invalidate();
            }
        },
        Duration::from_millis(period as u64),
    );
    let interval = match interval {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::error!("failed to start session check: {:?}", e);
            None
        }
    };

    on_cleanup(move || {
        for listener in listeners {
            listener.remove();
        }
        if let Some(handle) = interval {
            handle.clear();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_MINUTES: u32 = 3 * 60 * 1000;

    #[test]
    fn test_expires_after_timeout() {
        let tracker = IdleTracker::new(1_000.0, THREE_MINUTES);
        assert!(!tracker.is_expired(1_000.0 + 179_999.0));
        assert!(tracker.is_expired(1_000.0 + 180_000.0));
    }

    #[test]
    fn test_activity_resets_clock() {
        let mut tracker = IdleTracker::new(0.0, THREE_MINUTES);
        tracker.record_activity(170_000.0);
        assert!(!tracker.is_expired(200_000.0));
        assert_eq!(tracker.idle_for(200_000.0), 30_000.0);

        // clock going backwards never extends the session
        tracker.record_activity(10.0);
        assert_eq!(tracker.idle_for(200_000.0), 30_000.0);
        assert_eq!(tracker.idle_for(0.0), 0.0);
    }
}
