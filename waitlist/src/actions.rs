//! Actions for the waitlist reducer.
//!
//! Commands express operator intent; events record what actually happened.
//! Effects resolve to events (`NotificationDelivered`, `NotificationFailed`)
//! that are fed back through the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use waitline_macros::Action;

use crate::types::{EntryId, EntryStatus, Priority};

/// All inputs to the waitlist reducer
#[derive(Action, Clone, Debug, Serialize, Deserialize)]
pub enum WaitlistAction {
    // ========================================================================
    // Commands
    // ========================================================================
    /// Add a person to the waitlist
    #[command]
    AddEntry {
        /// Identifier for the new entry, chosen by the caller
        id: EntryId,
        /// Full name (required, must not be blank)
        name: String,
        /// Email address (required, must not be blank)
        email: String,
        /// Optional phone number
        phone: Option<String>,
        /// Priority label
        priority: Priority,
        /// Optional operator notes
        notes: Option<String>,
    },

    /// Remove an entry from the waitlist
    #[command]
    RemoveEntry {
        /// Entry to remove
        id: EntryId,
    },

    /// Set an entry's status directly
    #[command]
    SetStatus {
        /// Entry to update
        id: EntryId,
        /// New status
        status: EntryStatus,
    },

    /// Notify the first waiting entry, if a spot is available
    #[command]
    NotifyNext {
        /// Spots currently free, computed by the caller
        available_spots: u32,
    },

    /// Notify up to `available_spots` of the selected entries
    #[command]
    BulkNotify {
        /// Selected entries, in the caller's order
        selected: Vec<EntryId>,
        /// Spots currently free, computed by the caller
        available_spots: u32,
    },

    // ========================================================================
    // Events
    // ========================================================================
    /// A person was added to the waitlist
    #[event]
    EntryAdded {
        /// The new entry's identifier
        id: EntryId,
        /// Full name
        name: String,
        /// Email address
        email: String,
        /// Optional phone number
        phone: Option<String>,
        /// Priority label
        priority: Priority,
        /// Optional operator notes
        notes: Option<String>,
        /// Registration timestamp
        registered_at: DateTime<Utc>,
        /// Position assigned at insertion
        position: u32,
    },

    /// An entry was removed
    #[event]
    EntryRemoved {
        /// The removed entry's identifier
        id: EntryId,
    },

    /// An entry's status changed
    #[event]
    StatusChanged {
        /// The entry whose status changed
        id: EntryId,
        /// The new status
        status: EntryStatus,
    },

    /// An entry was marked notified and a notification was dispatched
    #[event]
    EntryNotified {
        /// The notified entry
        id: EntryId,
        /// When the notification was dispatched
        notified_at: DateTime<Utc>,
    },

    /// The notifier confirmed delivery
    #[event]
    NotificationDelivered {
        /// The entry whose notification was delivered
        id: EntryId,
    },

    /// The notifier reported a delivery failure.
    ///
    /// The entry stays `Notified`; delivery failure does not rewind status.
    #[event]
    NotificationFailed {
        /// The entry whose notification failed
        id: EntryId,
        /// Why delivery failed
        reason: String,
    },

    /// A notify command could not proceed
    #[event]
    NotifyRejected {
        /// Why the command was rejected
        reason: String,
    },

    /// A command failed validation
    #[event]
    ValidationFailed {
        /// The validation error
        error: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_and_events_are_classified() {
        let cmd = WaitlistAction::NotifyNext { available_spots: 1 };
        assert!(cmd.is_command());
        assert!(!cmd.is_event());

        let event = WaitlistAction::EntryRemoved { id: EntryId::new() };
        assert!(event.is_event());
        assert!(!event.is_command());
        assert_eq!(event.event_type(), "EntryRemoved.v1");
    }

    #[test]
    fn commands_have_no_event_type() {
        let cmd = WaitlistAction::RemoveEntry { id: EntryId::new() };
        assert_eq!(cmd.event_type(), "unknown");
    }
}
