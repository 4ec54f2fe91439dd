//! Domain types for the event waitlist.
//!
//! A waitlist holds the people waiting for a spot at a capacity-constrained
//! event. Entries are kept in insertion order: that order, not the `priority`
//! label, decides who is notified next.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a waitlist entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Creates a new random `EntryId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an `EntryId` from a `Uuid`
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates a new random `EventId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an `EventId` from a `Uuid`
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Enumerations
// ============================================================================

/// Priority label attached to a waitlist entry.
///
/// Priority is a user-facing label only: dispatch order is strictly
/// first-come-first-served by insertion, and no operation consults this
/// field when choosing whom to notify.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// High priority (e.g. VIP members)
    High,
    /// Medium priority
    Medium,
    /// Low priority
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Lifecycle status of a waitlist entry.
///
/// The store accepts arbitrary status writes; [`EntryStatus::can_transition_to`]
/// describes the transition policy the presentation layer exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Waiting for a spot (initial state for new entries)
    Waiting,
    /// Notified that a spot may be available
    Notified,
    /// Confirmed the spot (terminal)
    Confirmed,
    /// Declined the spot (terminal)
    Declined,
}

impl EntryStatus {
    /// Whether `next` is a legal transition under the exposed policy:
    ///
    /// ```text
    /// waiting   -> notified
    /// notified  -> confirmed | declined
    /// confirmed -> (terminal)
    /// declined  -> (terminal)
    /// ```
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Waiting, Self::Notified)
                | (Self::Notified, Self::Confirmed | Self::Declined)
        )
    }

    /// Whether this status has no outgoing transitions in the exposed policy
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Confirmed | Self::Declined)
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Waiting => write!(f, "waiting"),
            Self::Notified => write!(f, "notified"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::Declined => write!(f, "declined"),
        }
    }
}

/// Status filter for waitlist queries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    /// Match every status
    All,
    /// Match only entries with this status
    Only(EntryStatus),
}

impl StatusFilter {
    /// Whether an entry with `status` passes this filter
    #[must_use]
    pub fn matches(self, status: EntryStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => status == wanted,
        }
    }
}

// ============================================================================
// Entities
// ============================================================================

/// One person waiting for a spot at a capacity-constrained event
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    /// Unique identifier, immutable after creation
    pub id: EntryId,
    /// Full name
    pub name: String,
    /// Email address (notification target)
    pub email: String,
    /// Optional phone number
    pub phone: Option<String>,
    /// Optional operator notes
    pub notes: Option<String>,
    /// When the entry joined the waitlist; tie-break for equal priority
    pub registered_at: DateTime<Utc>,
    /// Priority label (cosmetic, see [`Priority`])
    pub priority: Priority,
    /// Current lifecycle status
    pub status: EntryStatus,
    /// Display position assigned at insertion (`count + 1`).
    ///
    /// Positions are labels, not indices: they are never recomputed when
    /// entries are removed, so gaps can appear.
    pub position: u32,
}

impl WaitlistEntry {
    /// Creates a new entry in status [`EntryStatus::Waiting`]
    #[must_use]
    pub const fn new(
        id: EntryId,
        name: String,
        email: String,
        phone: Option<String>,
        priority: Priority,
        notes: Option<String>,
        registered_at: DateTime<Utc>,
        position: u32,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone,
            notes,
            registered_at,
            priority,
            status: EntryStatus::Waiting,
            position,
        }
    }
}

/// Counts of entries per status, for the dashboard's stat cards
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistStats {
    /// Entries still waiting
    pub waiting: usize,
    /// Entries notified of an available spot
    pub notified: usize,
    /// Entries that confirmed their spot
    pub confirmed: usize,
    /// Entries that declined their spot
    pub declined: usize,
}

// ============================================================================
// State
// ============================================================================

/// State of one event's waitlist.
///
/// Entries are held in a `Vec` because insertion order *is* the dispatch
/// order: [`WaitlistState::find_next_waiting`] scans front to back.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WaitlistState {
    /// All entries in insertion order
    pub entries: Vec<WaitlistEntry>,
    /// Last validation or precondition error (if any)
    pub last_error: Option<String>,
}

impl WaitlistState {
    /// Creates a new empty waitlist
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            last_error: None,
        }
    }

    /// Returns the number of entries
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns an entry by ID
    #[must_use]
    pub fn get(&self, id: &EntryId) -> Option<&WaitlistEntry> {
        self.entries.iter().find(|e| e.id == *id)
    }

    /// Checks if an entry exists
    #[must_use]
    pub fn exists(&self, id: &EntryId) -> bool {
        self.entries.iter().any(|e| e.id == *id)
    }

    /// The position a newly added entry would receive (`count + 1`)
    #[must_use]
    pub fn next_position(&self) -> u32 {
        u32::try_from(self.entries.len()).map_or(u32::MAX, |n| n.saturating_add(1))
    }

    /// Returns the first entry in insertion order with status `Waiting`.
    ///
    /// This is not a priority queue: the `priority` field is ignored.
    #[must_use]
    pub fn find_next_waiting(&self) -> Option<&WaitlistEntry> {
        self.entries
            .iter()
            .find(|e| e.status == EntryStatus::Waiting)
    }

    /// Filters entries by a case-insensitive search over name and email,
    /// intersected with a status filter.
    ///
    /// An empty `search_term` matches every entry; [`StatusFilter::All`]
    /// matches every status. The iterator is recomputed from the full
    /// collection on each call and preserves insertion order.
    pub fn filter(
        &self,
        search_term: &str,
        status: StatusFilter,
    ) -> impl Iterator<Item = &WaitlistEntry> {
        let needle = search_term.to_lowercase();
        self.entries.iter().filter(move |entry| {
            let matches_search = needle.is_empty()
                || entry.name.to_lowercase().contains(&needle)
                || entry.email.to_lowercase().contains(&needle);
            matches_search && status.matches(entry.status)
        })
    }

    /// Counts entries per status
    #[must_use]
    pub fn stats(&self) -> WaitlistStats {
        let mut stats = WaitlistStats::default();
        for entry in &self.entries {
            match entry.status {
                EntryStatus::Waiting => stats.waiting += 1,
                EntryStatus::Notified => stats.notified += 1,
                EntryStatus::Confirmed => stats.confirmed += 1,
                EntryStatus::Declined => stats.declined += 1,
            }
        }
        stats
    }
}
