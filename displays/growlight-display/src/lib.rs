//! Display abstraction and menu rendering for Growlight
//!
//! This crate provides:
//! - `DisplayBackend` trait for the character display driver
//! - `Screen`, a text buffer of 8 rows by 21 columns with one highlighted row
//! - `Renderer`, which turns the core's view model into screen lines
//!
//! # Architecture
//!
//! The controller produces a `View` describing what to show. The renderer
//! lays it out as text; the firmware pushes the screen through its
//! `DisplayBackend` (an SSD1306 OLED on the reference board).

#![no_std]

pub mod backend;
pub mod renderer;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use renderer::Renderer;
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};
