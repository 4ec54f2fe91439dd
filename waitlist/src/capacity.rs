//! Event capacity tracking.
//!
//! Capacity lives outside the waitlist state: operations that need to know
//! how many spots are free take an `available_spots` argument, computed by
//! the caller from an [`EventCapacity`]. Notifying someone does not change
//! `current_attendees`; attendance only moves when a spot is actually
//! claimed elsewhere.

use serde::{Deserialize, Serialize};

/// Attendance bounds for a capacity-constrained event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCapacity {
    /// Maximum number of attendees
    pub max_attendees: u32,
    /// Attendees currently registered
    pub current_attendees: u32,
}

impl EventCapacity {
    /// Creates a capacity with the given bounds
    #[must_use]
    pub const fn new(max_attendees: u32, current_attendees: u32) -> Self {
        Self {
            max_attendees,
            current_attendees,
        }
    }

    /// Spots still free, saturating at zero when over-subscribed
    #[must_use]
    pub const fn available_spots(&self) -> u32 {
        self.max_attendees.saturating_sub(self.current_attendees)
    }

    /// Whether the event has no free spots
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.available_spots() == 0
    }

    /// Occupancy as a percentage of capacity, clamped to 100
    #[must_use]
    pub fn fill_percentage(&self) -> u32 {
        if self.max_attendees == 0 {
            return 100;
        }
        (self.current_attendees.saturating_mul(100) / self.max_attendees).min(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_spots_saturates() {
        let over = EventCapacity::new(100, 120);
        assert_eq!(over.available_spots(), 0);
        assert!(over.is_full());
    }

    #[test]
    fn spots_and_fill() {
        let cap = EventCapacity::new(200, 150);
        assert_eq!(cap.available_spots(), 50);
        assert!(!cap.is_full());
        assert_eq!(cap.fill_percentage(), 75);
    }

    #[test]
    fn zero_capacity_is_full() {
        let cap = EventCapacity::new(0, 0);
        assert!(cap.is_full());
        assert_eq!(cap.fill_percentage(), 100);
    }
}
