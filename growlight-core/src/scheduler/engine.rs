//! Output computation
//!
//! [`output_at`] is the pure schedule function; [`ScheduleEngine`] couples
//! it with the clock and pump cycle and reports whether the result differs
//! from what was applied last.

use super::clock::ScheduleClock;
use super::pump::PumpCycle;
use crate::config::Profile;

/// Levels the output stage should drive
///
/// Derived from the schedule, never persisted. The menu may overwrite the
/// two powers for a live preview while a period is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputState {
    /// Slot index of the active period (0-based)
    pub active_period_index: u8,
    /// White/red channel power in percent
    pub white_red_power: u8,
    /// Blue channel power in percent
    pub blue_power: u8,
    /// Pump running
    pub pump_on: bool,
    /// Minutes until the pump switches
    pub pump_minutes_left: u32,
    /// Minutes left in the active period
    pub period_minutes_left: u32,
}

/// Compute the output for a point in time
///
/// `lighting_elapsed_minutes` may be negative after a time shift; it is
/// folded into the cycle with Euclidean remainder. A profile without any
/// enabled period yields an all-zero output, pump included.
pub fn output_at(
    profile: &Profile,
    lighting_elapsed_minutes: i64,
    pump_elapsed_minutes: u64,
    pump: &PumpCycle,
) -> OutputState {
    let active_total = profile.active_minutes();
    if active_total == 0 {
        return OutputState::default();
    }

    let pump_state = pump.state_at(pump_elapsed_minutes);
    let mut output = OutputState {
        pump_on: pump_state.on,
        pump_minutes_left: pump_state.minutes_left,
        ..OutputState::default()
    };

    let pos = lighting_elapsed_minutes.rem_euclid(active_total as i64) as u32;
    let mut period_start = 0u32;
    for (index, period) in profile.periods().iter().enumerate() {
        if !period.is_enabled() {
            continue;
        }
        let period_end = period_start + period.duration_minutes() as u32;
        if pos < period_end {
            output.active_period_index = index as u8;
            output.white_red_power = period.white_red_power();
            output.blue_power = period.blue_power();
            output.period_minutes_left = period_end - pos;
            break;
        }
        period_start = period_end;
    }

    output
}

/// Schedule engine bound to a time reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScheduleEngine {
    clock: ScheduleClock,
    pump: PumpCycle,
}

impl ScheduleEngine {
    /// Create an engine whose cycles start at `start_ms`
    pub const fn new(start_ms: u64, pump: PumpCycle) -> Self {
        Self {
            clock: ScheduleClock::new(start_ms),
            pump,
        }
    }

    /// Time reference
    pub const fn clock(&self) -> &ScheduleClock {
        &self.clock
    }

    /// Pump cycle
    pub const fn pump(&self) -> &PumpCycle {
        &self.pump
    }

    /// Offset the lighting cycle; the pump phase is untouched
    pub fn shift_hours(&mut self, hours: i32) {
        self.clock.shift_hours(hours);
    }

    /// Compute the output at `now_ms`
    ///
    /// The flag is true when the result differs from `previous`, or when
    /// there is no previous output at all.
    pub fn compute(
        &self,
        now_ms: u64,
        profile: &Profile,
        previous: Option<&OutputState>,
    ) -> (OutputState, bool) {
        let output = output_at(
            profile,
            self.clock.lighting_elapsed_minutes(now_ms),
            self.clock.pump_elapsed_minutes(now_ms),
            &self.pump,
        );
        let changed = previous != Some(&output);
        (output, changed)
    }
}
