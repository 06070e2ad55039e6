//! Build-time tunables
//!
//! The firmware generates its own [`Settings`] constant from
//! `growlight.toml`; [`Settings::DEFAULT`] carries the stock values.

use crate::scheduler::PumpCycle;

/// Menu behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UiConfig {
    /// Inactivity before the menu falls back to the dashboard
    pub idle_timeout_ms: u64,
    /// Duration change per encoder detent (minutes)
    pub duration_step_minutes: u16,
    /// Power change per encoder detent (percent)
    pub power_step: u8,
    /// Largest time shift that can be dialed in (hours, either sign)
    pub max_shift_hours: i8,
    /// Swap encoder rotation direction
    pub invert_encoder: bool,
}

impl UiConfig {
    /// Stock menu behavior
    pub const DEFAULT: Self = Self {
        idle_timeout_ms: 10_000,
        duration_step_minutes: 60,
        power_step: 5,
        max_shift_hours: 23,
        invert_encoder: true,
    };
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// All controller tunables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// Irrigation cycle
    pub pump: PumpCycle,
    /// Menu behavior
    pub ui: UiConfig,
}

impl Settings {
    /// Stock settings
    pub const DEFAULT: Self = Self {
        pump: PumpCycle::DEFAULT,
        ui: UiConfig::DEFAULT,
    };
}

impl Default for Settings {
    fn default() -> Self {
        Self::DEFAULT
    }
}
