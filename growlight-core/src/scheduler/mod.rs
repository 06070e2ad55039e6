//! Schedule engine
//!
//! Turns elapsed time and a profile into LED power levels and the pump
//! state. Everything here is pure integer arithmetic on minutes.

pub mod clock;
pub mod engine;
pub mod pump;

pub use clock::{ScheduleClock, MS_PER_MINUTE};
pub use engine::{output_at, OutputState, ScheduleEngine};
pub use pump::{PumpCycle, PumpState};
