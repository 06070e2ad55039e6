//! Hardware driver implementations
//!
//! Concrete implementations of the output traits defined in
//! growlight-core, written against `embedded-hal` so any board HAL can
//! supply the pins:
//!
//! - PWM-dimmed LED channels
//! - GPIO pump switch
//! - Output stage applying a schedule output to all of them

#![no_std]
#![deny(unsafe_code)]

pub mod light;
pub mod pump;
pub mod stage;

pub use light::PwmLight;
pub use pump::GpioPump;
pub use stage::OutputStage;
