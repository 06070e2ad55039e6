//! RP2040-specific HAL for the Growlight controller
//!
//! Implements the `growlight-hal` seams on top of `embassy-rp`:
//!
//! - Flash sector driver (implements `growlight_hal::SectorStorage`)
//! - Rotary encoder and push button on plain GPIO inputs
//! - Reboot into the ROM USB bootloader

#![no_std]

pub mod bootsel;
pub mod flash;
pub mod input;

pub use bootsel::reboot_to_bootloader;
pub use flash::Rp2040SectorStorage;
pub use input::{Button, Encoder};
