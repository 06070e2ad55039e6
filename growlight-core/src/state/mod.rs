//! Menu state machine
//!
//! The menu is a closed set of modes. Every input is dispatched on
//! `(mode, event)` by [`crate::Controller`]; the types here describe the
//! session and what the display should show for it.

pub mod events;
pub mod mode;
pub mod session;
pub mod view;

pub use events::InputEvent;
pub use mode::{EditField, Mode, PeriodCursor, TopMenuAction};
pub use session::Session;
pub use view::{editor_first_row, Notice, View, EDITOR_VISIBLE_PERIODS};
