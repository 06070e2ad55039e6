//! Board-agnostic core logic for the grow-light controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Profile store and factory presets
//! - Schedule engine (lighting periods and pump cycle)
//! - Persistence image codec
//! - Menu state machine driven by rotary and click events
//! - Output traits implemented by the driver crate

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod scheduler;
pub mod state;
pub mod storage;
pub mod traits;

pub use controller::{Controller, Request, Response, RestoreOutcome};
