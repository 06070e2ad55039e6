//! On-board OLED
//!
//! The controller renders menu views into a text `Screen`; the display
//! task hands every screen to the SSD1306 backend in this module.

pub mod oled;

pub use oled::Oled;
