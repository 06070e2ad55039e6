//! Display backend trait
//!
//! Defines the interface between the text screen and the display driver.

use crate::screen::Screen;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Row or column outside the display
    InvalidCoordinates,
}

/// Character display driver
///
/// Implementations handle the pixel work for one display type.
pub trait DisplayBackend {
    /// Clear the entire display
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text at the specified row and column (both 0-based, in characters)
    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Invert a region on the specified row (for selection highlighting)
    ///
    /// `end_col` is exclusive.
    fn invert_region(&mut self, row: u8, start_col: u8, end_col: u8) -> Result<(), DisplayError>;

    /// Send buffered content to the display
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Draw a whole screen and flush it
    fn show(&mut self, screen: &Screen) -> Result<(), DisplayError> {
        self.clear()?;
        for (row, line) in screen.lines().enumerate() {
            if !line.is_empty() {
                self.draw_text(row as u8, 0, line)?;
            }
        }
        if let Some(row) = screen.highlight() {
            self.invert_region(row as u8, 0, screen.cols() as u8)?;
        }
        self.flush()
    }
}
