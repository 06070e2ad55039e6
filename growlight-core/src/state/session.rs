//! Menu session state
//!
//! Everything the menu remembers between inputs. Lives in RAM only; a
//! reboot always starts on the dashboard.

use super::mode::{EditField, Mode, PeriodCursor, TopMenuAction};

/// Menu cursors and timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Session {
    /// Current mode
    pub mode: Mode,
    /// Profile shown while browsing (`0..MAX_PROFILES`)
    pub menu_cursor: usize,
    /// Row in the profile editor
    pub period_cursor: PeriodCursor,
    /// Field in the period editor
    pub field: EditField,
    /// Entry in the top menu
    pub action: TopMenuAction,
    /// Time shift being dialed in (hours)
    pub pending_shift_hours: i8,
    /// Timestamp of the last rotary or click input
    pub last_input_ms: u64,
}

impl Session {
    /// Fresh session on the dashboard, browsing `selected`
    pub const fn new(selected: usize, now_ms: u64) -> Self {
        Self {
            mode: Mode::ShowState,
            menu_cursor: selected,
            period_cursor: PeriodCursor::BACK,
            field: EditField::Back,
            action: TopMenuAction::Shift,
            pending_shift_hours: 0,
            last_input_ms: now_ms,
        }
    }

    /// Go back to the dashboard with the browse cursor on `selected`
    pub fn return_home(&mut self, selected: usize) {
        self.mode = Mode::ShowState;
        self.menu_cursor = selected;
    }

    /// Mode to show while browsing: the dashboard when the cursor is on the
    /// selected profile, the profile summary otherwise
    pub fn browse_mode(&self, selected: usize) -> Mode {
        if self.menu_cursor == selected {
            Mode::ShowState
        } else {
            Mode::ShowProfile
        }
    }

    /// Whether more than `timeout_ms` passed since the last input
    pub fn is_idle(&self, now_ms: u64, timeout_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_input_ms) > timeout_ms
    }
}
