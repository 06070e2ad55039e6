//! Growlight Hardware Abstraction Layer
//!
//! Traits implemented by chip-specific HALs so that the firmware logic
//! around them stays board independent.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (growlight-firmware)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  growlight-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │ growlight-hal-    │
//!           │     rp2040        │
//!           └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`flash::SectorStorage`] - One erase sector of persistent storage
//!
//! The [`input`] module holds the pin-level encoder and button decoders
//! shared by every board.

#![no_std]
#![deny(unsafe_code)]

pub mod flash;
pub mod input;

pub use flash::{FlashError, RamSectorStorage, SectorStorage};
pub use input::{Debouncer, Direction, QuadratureDecoder};
