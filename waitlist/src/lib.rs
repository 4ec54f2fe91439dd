//! # Waitlist
//!
//! Waitlist management for capacity-constrained events, built on the
//! Waitline architecture.
//!
//! State is a [`types::WaitlistState`]; all mutation flows through
//! [`reducer::WaitlistReducer`] driven by [`actions::WaitlistAction`]
//! commands. Notification delivery is a `Future` effect behind the
//! [`notifier::Notifier`] trait, resolved back into delivery events.
//!
//! Two behaviors worth knowing up front:
//!
//! - Dispatch is first-come-first-served by insertion order. The
//!   [`types::Priority`] label never affects who gets notified next.
//! - Positions are assigned once at insertion (`count + 1`) and never
//!   recomputed, so removals leave gaps.

pub mod actions;
pub mod capacity;
pub mod config;
pub mod environment;
pub mod notifier;
pub mod reducer;
pub mod types;

pub use actions::WaitlistAction;
pub use capacity::EventCapacity;
pub use config::Config;
pub use environment::WaitlistEnvironment;
pub use notifier::{LogNotifier, Notifier, NotifyError, RecordingNotifier, SpotNotification};
pub use reducer::WaitlistReducer;
pub use types::{
    EntryId, EntryStatus, EventId, Priority, StatusFilter, WaitlistEntry, WaitlistState,
    WaitlistStats,
};
