//! Input events

/// Input delivered to the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Encoder turned by a signed number of detents (never zero)
    Rotate(i32),
    /// Encoder button pressed
    Click,
}
