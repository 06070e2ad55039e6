//! Schedule time reference
//!
//! The pump always runs from the boot timestamp. The lighting cycle runs
//! from the same timestamp offset by the accumulated time shift, so the
//! user can move sunrise without disturbing irrigation.

/// Milliseconds per minute
pub const MS_PER_MINUTE: u64 = 60_000;

/// Boot timestamp plus lighting offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScheduleClock {
    start_ms: u64,
    shift_minutes: i64,
}

impl ScheduleClock {
    /// Start both cycles at `start_ms`
    pub const fn new(start_ms: u64) -> Self {
        Self {
            start_ms,
            shift_minutes: 0,
        }
    }

    /// Timestamp both cycles count from
    pub const fn start_ms(&self) -> u64 {
        self.start_ms
    }

    /// Accumulated lighting offset
    pub const fn shift_minutes(&self) -> i64 {
        self.shift_minutes
    }

    /// Move the lighting reference later by `hours`
    ///
    /// Shifts accumulate. A positive shift delays the lighting cycle, i.e.
    /// lighting elapsed time goes down by the shift.
    pub fn shift_hours(&mut self, hours: i32) {
        self.shift_minutes += hours as i64 * 60;
    }

    /// Whole minutes since the boot timestamp
    pub fn pump_elapsed_minutes(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.start_ms) / MS_PER_MINUTE
    }

    /// Whole minutes into the lighting cycle; may be negative after a shift
    pub fn lighting_elapsed_minutes(&self, now_ms: u64) -> i64 {
        self.pump_elapsed_minutes(now_ms) as i64 - self.shift_minutes
    }
}
