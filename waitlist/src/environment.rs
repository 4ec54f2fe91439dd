//! Dependency injection for the waitlist reducer.

use std::sync::Arc;

use waitline_core::environment::{Clock, SystemClock};

use crate::notifier::{LogNotifier, Notifier};
use crate::types::EventId;

/// Injected dependencies and event context for the waitlist reducer.
///
/// One environment serves one event's waitlist; the event identity rides
/// along so notification payloads can name the event without the reducer
/// carrying it in state.
#[derive(Clone)]
pub struct WaitlistEnvironment {
    /// Time source
    pub clock: Arc<dyn Clock>,
    /// Notification delivery channel
    pub notifier: Arc<dyn Notifier>,
    /// The event this waitlist belongs to
    pub event_id: EventId,
    /// Human-readable event title, used in notifications
    pub event_title: String,
}

impl WaitlistEnvironment {
    /// Production environment: system clock, log-only notifier
    #[must_use]
    pub fn new(event_id: EventId, event_title: impl Into<String>) -> Self {
        Self {
            clock: Arc::new(SystemClock),
            notifier: Arc::new(LogNotifier),
            event_id,
            event_title: event_title.into(),
        }
    }

    /// Replace the clock
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the notifier
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }
}

impl std::fmt::Debug for WaitlistEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaitlistEnvironment")
            .field("event_id", &self.event_id)
            .field("event_title", &self.event_title)
            .finish_non_exhaustive()
    }
}
