//! Hardware abstraction traits
//!
//! These traits define the interface between the schedule output and the
//! hardware-specific drivers.

pub mod output;

pub use output::{LightChannel, OutputError, PumpOutput};
