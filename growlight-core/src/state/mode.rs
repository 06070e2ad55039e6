//! Menu modes and selectors

/// Menu modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Idle dashboard; the only mode in which the schedule drives outputs
    #[default]
    ShowState,
    /// Browsing a profile other than the selected one
    ShowProfile,
    /// Period list of the selected profile
    EditProfile,
    /// Field list of one period
    EditPeriod,
    /// Dialing the white/red power
    EditWrLevel,
    /// Dialing the blue power
    EditBlLevel,
    /// Dialing the duration
    EditDuration,
    /// Save / reload / flash / shift actions
    TopMenu,
    /// Dialing a lighting time shift
    TimeShift,
}

impl Mode {
    /// Value-edit modes, in which rotation changes a period field
    pub fn is_value_edit(&self) -> bool {
        matches!(
            self,
            Mode::EditWrLevel | Mode::EditBlLevel | Mode::EditDuration
        )
    }
}

/// Step through an ordered list: below the first wraps to the last and past
/// the last wraps to the first
fn step_wrapping(index: i32, delta: i32, count: i32) -> i32 {
    let next = index.saturating_add(delta);
    if next < 0 {
        count - 1
    } else if next >= count {
        0
    } else {
        next
    }
}

/// Field selector in the period editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditField {
    /// Return to the period list
    #[default]
    Back,
    /// Period duration
    Duration,
    /// White/red power
    WhiteRed,
    /// Blue power
    Blue,
}

impl EditField {
    /// Fields in display order
    pub const ALL: [EditField; 4] = [
        EditField::Back,
        EditField::Duration,
        EditField::WhiteRed,
        EditField::Blue,
    ];

    /// Move the selector by `delta`, wrapping at both ends
    pub fn step(self, delta: i32) -> Self {
        let next = step_wrapping(self as i32, delta, Self::ALL.len() as i32);
        Self::ALL[next as usize]
    }

    /// Mode that edits this field, if any
    pub fn edit_mode(self) -> Option<Mode> {
        match self {
            EditField::Back => None,
            EditField::Duration => Some(Mode::EditDuration),
            EditField::WhiteRed => Some(Mode::EditWrLevel),
            EditField::Blue => Some(Mode::EditBlLevel),
        }
    }
}

/// Top menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TopMenuAction {
    /// Offset the lighting cycle
    #[default]
    Shift,
    /// Write the profiles to flash
    Save,
    /// Re-read the profiles from flash
    Reload,
    /// Reboot into the USB bootloader
    Flash,
}

impl TopMenuAction {
    /// Entries in display order
    pub const ALL: [TopMenuAction; 4] = [
        TopMenuAction::Shift,
        TopMenuAction::Save,
        TopMenuAction::Reload,
        TopMenuAction::Flash,
    ];

    /// Move the selector by `delta`
    ///
    /// Returns `None` when moving above the first entry, which leaves the
    /// top menu. Past the last entry wraps to the first.
    pub fn step(self, delta: i32) -> Option<Self> {
        let next = (self as i32).saturating_add(delta);
        if next < 0 {
            None
        } else if next >= Self::ALL.len() as i32 {
            Some(Self::ALL[0])
        } else {
            Some(Self::ALL[next as usize])
        }
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            TopMenuAction::Shift => "TIME SHIFT",
            TopMenuAction::Save => "SAVE",
            TopMenuAction::Reload => "RELOAD",
            TopMenuAction::Flash => "FLASH",
        }
    }
}

/// Row selector in the profile editor: `-1` is the back row, `0..=5` a period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PeriodCursor(i8);

impl PeriodCursor {
    /// Back row
    pub const BACK: Self = Self(-1);

    /// Cursor on a period slot
    pub fn period(index: usize) -> Option<Self> {
        (index < crate::config::MAX_PERIODS).then_some(Self(index as i8))
    }

    /// Raw row value (`-1..=5`)
    pub const fn raw(self) -> i8 {
        self.0
    }

    /// Selected period slot, `None` on the back row
    pub fn selected_period(self) -> Option<usize> {
        (self.0 >= 0).then_some(self.0 as usize)
    }

    /// Move by `delta`: below back wraps to the last period, past the last
    /// period wraps to back
    pub fn step(self, delta: i32) -> Self {
        let rows = crate::config::MAX_PERIODS as i32 + 1;
        Self((step_wrapping(self.0 as i32 + 1, delta, rows) - 1) as i8)
    }
}

impl Default for PeriodCursor {
    fn default() -> Self {
        Self::BACK
    }
}
