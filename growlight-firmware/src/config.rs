//! Build-time configuration
//!
//! `build.rs` validates growlight.toml and turns it into the constants
//! included below.

use growlight_core::config::{Settings, UiConfig};
use growlight_core::scheduler::PumpCycle;

include!(concat!(env!("OUT_DIR"), "/settings.rs"));
