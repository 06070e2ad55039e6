//! Configuration types
//!
//! Schedule data edited on the device plus the build-time tunables.

pub mod settings;
pub mod types;

pub use settings::*;
pub use types::*;
