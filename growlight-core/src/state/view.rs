//! View model
//!
//! What the display shows for the current mode. The display crate turns a
//! [`View`] into text lines; nothing here knows about fonts or pixels.

use super::mode::{EditField, PeriodCursor, TopMenuAction};
use crate::config::{Period, Profile};
use crate::scheduler::OutputState;

/// Period rows that fit under the back row in the profile editor
pub const EDITOR_VISIBLE_PERIODS: usize = 3;

/// First period row shown in the profile editor
///
/// Keeps the cursor on the third visible row once it moves past it.
pub fn editor_first_row(cursor: PeriodCursor) -> usize {
    (cursor.raw() as i32 - 2).max(0) as usize
}

/// Screen content for one mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    /// Selected profile and the live output
    Dashboard {
        profile: &'a Profile,
        output: OutputState,
    },
    /// Another profile, offered for selection
    ProfileSummary { profile: &'a Profile },
    /// Period list of the selected profile
    ProfileEditor {
        profile: &'a Profile,
        cursor: PeriodCursor,
        first_row: usize,
    },
    /// Fields of one period; `editing` is set while a value is dialed
    PeriodEditor {
        index: usize,
        period: &'a Period,
        field: EditField,
        editing: bool,
    },
    /// Time shift being dialed
    TimeShift { hours: i8 },
    /// Action list
    TopMenu { selected: TopMenuAction },
}

/// Transient full-screen messages shown by the firmware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notice {
    /// Profiles written to flash
    Saved,
    /// Flash write failed
    SaveFailed,
    /// No stored profiles found on reload
    NoData,
    /// Stored profiles restored
    DataLoaded,
    /// About to reboot into the bootloader
    Flashing,
}

impl Notice {
    /// Message text
    pub fn text(self) -> &'static str {
        match self {
            Notice::Saved => "SAVED...",
            Notice::SaveFailed => "SAVE FAILED",
            Notice::NoData => "NO DATA",
            Notice::DataLoaded => "DATA LOADED",
            Notice::Flashing => "TO FLASH...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_scroll() {
        assert_eq!(editor_first_row(PeriodCursor::BACK), 0);
        assert_eq!(editor_first_row(PeriodCursor::period(0).unwrap()), 0);
        assert_eq!(editor_first_row(PeriodCursor::period(2).unwrap()), 0);
        assert_eq!(editor_first_row(PeriodCursor::period(3).unwrap()), 1);
        assert_eq!(editor_first_row(PeriodCursor::period(5).unwrap()), 3);
    }

    #[test]
    fn test_cursor_always_visible() {
        for index in 0..crate::config::MAX_PERIODS {
            let cursor = PeriodCursor::period(index).unwrap();
            let first = editor_first_row(cursor);
            assert!(index >= first && index < first + EDITOR_VISIBLE_PERIODS);
        }
    }
}
