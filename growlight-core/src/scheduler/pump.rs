//! Irrigation cycle

/// Fixed on/off irrigation cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PumpCycle {
    /// Minutes the pump runs at the start of each cycle
    pub run_minutes: u32,
    /// Minutes the pump rests afterwards
    pub wait_minutes: u32,
}

/// Pump output at a point in the cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PumpState {
    /// Pump is running
    pub on: bool,
    /// Minutes until the pump switches
    pub minutes_left: u32,
}

impl PumpCycle {
    /// Five minutes on, thirty minutes off
    pub const DEFAULT: Self = Self {
        run_minutes: 5,
        wait_minutes: 30,
    };

    /// Length of one full cycle
    pub const fn period_minutes(&self) -> u32 {
        self.run_minutes + self.wait_minutes
    }

    /// Pump state after `elapsed_minutes` since power-on
    pub fn state_at(&self, elapsed_minutes: u64) -> PumpState {
        let period = self.period_minutes();
        if period == 0 || self.run_minutes == 0 {
            return PumpState {
                on: false,
                minutes_left: 0,
            };
        }

        let pos = (elapsed_minutes % period as u64) as u32;
        if pos < self.run_minutes {
            PumpState {
                on: true,
                minutes_left: self.run_minutes - pos,
            }
        } else {
            PumpState {
                on: false,
                minutes_left: period - pos,
            }
        }
    }
}

impl Default for PumpCycle {
    fn default() -> Self {
        Self::DEFAULT
    }
}
