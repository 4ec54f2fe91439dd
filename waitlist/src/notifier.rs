//! Notification delivery boundary.
//!
//! The reducer never talks to a delivery channel directly: it emits a
//! `Future` effect that calls [`Notifier::notify`] and resolves to a
//! delivery event. Production wires in a real channel; tests use
//! [`RecordingNotifier`].

use futures::future::BoxFuture;
use thiserror::Error;

use crate::types::{EntryId, EventId};

/// Payload handed to the notifier when a spot opens up
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpotNotification {
    /// The entry being notified
    pub entry_id: EntryId,
    /// Recipient name
    pub name: String,
    /// Recipient email
    pub email: String,
    /// The event the spot belongs to
    pub event_id: EventId,
    /// Human-readable event title
    pub event_title: String,
}

/// Notification delivery failure
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The delivery channel rejected or lost the notification
    #[error("notification delivery failed: {0}")]
    Delivery(String),
}

/// Delivers spot-available notifications.
///
/// Returns a boxed future so implementations can live behind
/// `Arc<dyn Notifier>` in the environment.
pub trait Notifier: Send + Sync {
    /// Deliver a notification to the entry's email address
    fn notify(&self, notification: SpotNotification) -> BoxFuture<'static, Result<(), NotifyError>>;
}

/// Notifier that only logs deliveries. Stands in for a real channel in
/// the demo binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: SpotNotification) -> BoxFuture<'static, Result<(), NotifyError>> {
        Box::pin(async move {
            tracing::info!(
                entry_id = %notification.entry_id,
                email = %notification.email,
                event = %notification.event_title,
                "Spot available notification sent"
            );
            Ok(())
        })
    }
}

/// Test notifier that records every notification and can be told to fail.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    sent: std::sync::Arc<std::sync::Mutex<Vec<SpotNotification>>>,
    fail_with: Option<String>,
}

impl RecordingNotifier {
    /// Creates a notifier that accepts every delivery
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a notifier that fails every delivery with `reason`
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            sent: std::sync::Arc::default(),
            fail_with: Some(reason.into()),
        }
    }

    /// Notifications recorded so far, in delivery order
    #[must_use]
    pub fn sent(&self) -> Vec<SpotNotification> {
        self.sent
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: SpotNotification) -> BoxFuture<'static, Result<(), NotifyError>> {
        let sent = std::sync::Arc::clone(&self.sent);
        let fail_with = self.fail_with.clone();
        Box::pin(async move {
            sent.lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .push(notification);
            match fail_with {
                Some(reason) => Err(NotifyError::Delivery(reason)),
                None => Ok(()),
            }
        })
    }
}
