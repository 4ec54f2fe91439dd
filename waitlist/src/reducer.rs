//! The waitlist reducer.
//!
//! Commands are validated against current state and turned into events;
//! every event is applied through one shared path, so the command flow and
//! event replay cannot drift apart. Notification delivery is described as a
//! `Future` effect that resolves to a delivery event.

use smallvec::{SmallVec, smallvec};
use waitline_core::effect::Effect;
use waitline_core::reducer::Reducer;

use crate::actions::WaitlistAction;
use crate::environment::WaitlistEnvironment;
use crate::notifier::SpotNotification;
use crate::types::{EntryId, EntryStatus, Priority, WaitlistEntry, WaitlistState};

/// Error message when a required field is blank
pub const ERR_NAME_EMAIL_REQUIRED: &str = "Name and email are required";

/// Rejection reason when nothing can be notified
pub const ERR_NO_SPOTS_OR_WAITING: &str = "No available spots or waiting entries";

/// Rejection reason when a bulk notify has nothing to work with
pub const ERR_NO_SELECTION_OR_SPOTS: &str = "No entries selected or no available spots";

/// Reducer over [`WaitlistState`]
#[derive(Clone, Copy, Debug, Default)]
pub struct WaitlistReducer;

impl WaitlistReducer {
    /// Creates a new waitlist reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Applies one event to state.
    ///
    /// Both the command handlers and the replay arms go through here, so
    /// replaying a recorded event stream rebuilds exactly the state the
    /// commands produced.
    fn apply_event(state: &mut WaitlistState, event: &WaitlistAction) {
        match event {
            WaitlistAction::EntryAdded {
                id,
                name,
                email,
                phone,
                priority,
                notes,
                registered_at,
                position,
            } => {
                if !state.exists(id) {
                    state.entries.push(WaitlistEntry::new(
                        *id,
                        name.clone(),
                        email.clone(),
                        phone.clone(),
                        *priority,
                        notes.clone(),
                        *registered_at,
                        *position,
                    ));
                }
                state.last_error = None;
            },

            WaitlistAction::EntryRemoved { id } => {
                state.entries.retain(|e| e.id != *id);
            },

            WaitlistAction::StatusChanged { id, status } => {
                if let Some(entry) = state.entries.iter_mut().find(|e| e.id == *id) {
                    entry.status = *status;
                }
            },

            WaitlistAction::EntryNotified { id, .. } => {
                if let Some(entry) = state.entries.iter_mut().find(|e| e.id == *id) {
                    entry.status = EntryStatus::Notified;
                }
                state.last_error = None;
            },

            WaitlistAction::NotifyRejected { reason }
            | WaitlistAction::ValidationFailed { error: reason } => {
                state.last_error = Some(reason.clone());
            },

            // Commands and delivery feedback carry no state change
            _ => {},
        }
    }

    fn add_entry(
        state: &mut WaitlistState,
        env: &WaitlistEnvironment,
        id: EntryId,
        name: String,
        email: String,
        phone: Option<String>,
        priority: Priority,
        notes: Option<String>,
    ) -> SmallVec<[Effect<WaitlistAction>; 4]> {
        if name.trim().is_empty() || email.trim().is_empty() {
            tracing::warn!(%id, "Rejected entry with blank name or email");
            Self::apply_event(
                state,
                &WaitlistAction::ValidationFailed {
                    error: ERR_NAME_EMAIL_REQUIRED.to_string(),
                },
            );
            return smallvec![Effect::None];
        }

        if state.exists(&id) {
            tracing::warn!(%id, "Rejected duplicate entry id");
            Self::apply_event(
                state,
                &WaitlistAction::ValidationFailed {
                    error: format!("Entry {id} already exists"),
                },
            );
            return smallvec![Effect::None];
        }

        let position = state.next_position();
        Self::apply_event(
            state,
            &WaitlistAction::EntryAdded {
                id,
                name,
                email,
                phone,
                priority,
                notes,
                registered_at: env.clock.now(),
                position,
            },
        );

        tracing::info!(%id, position, "Entry added to waitlist");
        smallvec![Effect::None]
    }

    fn remove_entry(
        state: &mut WaitlistState,
        id: EntryId,
    ) -> SmallVec<[Effect<WaitlistAction>; 4]> {
        if !state.exists(&id) {
            // Unknown id: silent no-op, remaining positions untouched
            tracing::debug!(%id, "Remove for unknown entry ignored");
            return smallvec![Effect::None];
        }

        Self::apply_event(state, &WaitlistAction::EntryRemoved { id });
        tracing::info!(%id, "Entry removed from waitlist");
        smallvec![Effect::None]
    }

    fn set_status(
        state: &mut WaitlistState,
        id: EntryId,
        status: EntryStatus,
    ) -> SmallVec<[Effect<WaitlistAction>; 4]> {
        let Some(entry) = state.get(&id) else {
            tracing::debug!(%id, "Status change for unknown entry ignored");
            return smallvec![Effect::None];
        };

        if !entry.status.can_transition_to(status) && entry.status != status {
            // The store accepts any status write; only the UI restricts them.
            tracing::debug!(
                %id,
                from = %entry.status,
                to = %status,
                "Status change outside the exposed transition policy"
            );
        }

        Self::apply_event(state, &WaitlistAction::StatusChanged { id, status });
        tracing::info!(%id, %status, "Entry status changed");
        smallvec![Effect::None]
    }

    /// Applies `EntryNotified` for `id` and returns the delivery effect.
    ///
    /// The caller has already checked the entry exists and is `Waiting`.
    fn notify_entry(
        state: &mut WaitlistState,
        env: &WaitlistEnvironment,
        id: EntryId,
    ) -> Effect<WaitlistAction> {
        Self::apply_event(
            state,
            &WaitlistAction::EntryNotified {
                id,
                notified_at: env.clock.now(),
            },
        );

        let Some(entry) = state.get(&id) else {
            return Effect::None;
        };

        let notification = SpotNotification {
            entry_id: entry.id,
            name: entry.name.clone(),
            email: entry.email.clone(),
            event_id: env.event_id,
            event_title: env.event_title.clone(),
        };
        let notifier = std::sync::Arc::clone(&env.notifier);

        tracing::info!(%id, email = %notification.email, "Entry notified of available spot");

        Effect::Future(Box::pin(async move {
            match notifier.notify(notification).await {
                Ok(()) => Some(WaitlistAction::NotificationDelivered { id }),
                Err(error) => Some(WaitlistAction::NotificationFailed {
                    id,
                    reason: error.to_string(),
                }),
            }
        }))
    }

    fn notify_next(
        state: &mut WaitlistState,
        env: &WaitlistEnvironment,
        available_spots: u32,
    ) -> SmallVec<[Effect<WaitlistAction>; 4]> {
        let next = if available_spots == 0 {
            None
        } else {
            state.find_next_waiting().map(|e| e.id)
        };

        let Some(id) = next else {
            tracing::warn!(available_spots, "Notify rejected");
            Self::apply_event(
                state,
                &WaitlistAction::NotifyRejected {
                    reason: ERR_NO_SPOTS_OR_WAITING.to_string(),
                },
            );
            return smallvec![Effect::None];
        };

        smallvec![Self::notify_entry(state, env, id)]
    }

    fn bulk_notify(
        state: &mut WaitlistState,
        env: &WaitlistEnvironment,
        selected: Vec<EntryId>,
        available_spots: u32,
    ) -> SmallVec<[Effect<WaitlistAction>; 4]> {
        if selected.is_empty() || available_spots == 0 {
            tracing::warn!(
                selected = selected.len(),
                available_spots,
                "Bulk notify rejected"
            );
            Self::apply_event(
                state,
                &WaitlistAction::NotifyRejected {
                    reason: ERR_NO_SELECTION_OR_SPOTS.to_string(),
                },
            );
            return smallvec![Effect::None];
        }

        // Only the first `available_spots` selections are considered, in the
        // caller's order. A selection that is not in `Waiting` status still
        // consumes its slot.
        let take = selected.len().min(available_spots as usize);
        let mut effects: SmallVec<[Effect<WaitlistAction>; 4]> = SmallVec::new();

        for id in selected.into_iter().take(take) {
            let is_waiting = state
                .get(&id)
                .is_some_and(|e| e.status == EntryStatus::Waiting);
            if is_waiting {
                effects.push(Self::notify_entry(state, env, id));
            } else {
                tracing::debug!(%id, "Bulk selection skipped (not waiting), slot consumed");
            }
        }

        if effects.is_empty() {
            effects.push(Effect::None);
        }
        effects
    }
}

impl Reducer for WaitlistReducer {
    type State = WaitlistState;
    type Action = WaitlistAction;
    type Environment = WaitlistEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // Commands
            WaitlistAction::AddEntry {
                id,
                name,
                email,
                phone,
                priority,
                notes,
            } => Self::add_entry(state, env, id, name, email, phone, priority, notes),

            WaitlistAction::RemoveEntry { id } => Self::remove_entry(state, id),

            WaitlistAction::SetStatus { id, status } => Self::set_status(state, id, status),

            WaitlistAction::NotifyNext { available_spots } => {
                Self::notify_next(state, env, available_spots)
            },

            WaitlistAction::BulkNotify {
                selected,
                available_spots,
            } => Self::bulk_notify(state, env, selected, available_spots),

            // Feedback events from delivery effects
            WaitlistAction::NotificationDelivered { id } => {
                tracing::info!(%id, "Notification delivered");
                smallvec![Effect::None]
            },

            WaitlistAction::NotificationFailed { id, reason } => {
                // Delivery failure does not rewind the entry to Waiting.
                tracing::warn!(%id, %reason, "Notification delivery failed");
                smallvec![Effect::None]
            },

            // Replayed events go through the same apply path as commands
            event => {
                Self::apply_event(state, &event);
                smallvec![Effect::None]
            },
        }
    }
}
