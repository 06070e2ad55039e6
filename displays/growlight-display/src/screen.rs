//! Screen buffer
//!
//! Character buffer matching a 128x64 OLED with a 6x8 font.

use heapless::String;

/// Number of character rows
pub const SCREEN_ROWS: usize = 8;

/// Number of character columns
pub const SCREEN_COLS: usize = 21;

/// Text screen with at most one highlighted row
#[derive(Clone, PartialEq, Eq)]
pub struct Screen {
    lines: [String<SCREEN_COLS>; SCREEN_ROWS],
    highlight: Option<usize>,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
            highlight: None,
        }
    }

    /// Clear the entire screen
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.highlight = None;
    }

    /// Set the content of a row, truncated to the screen width
    pub fn set_line(&mut self, row: usize, text: &str) {
        if let Some(line) = self.lines.get_mut(row) {
            line.clear();
            for c in text.chars() {
                if line.push(c).is_err() {
                    break;
                }
            }
        }
    }

    /// Content of a row
    pub fn line(&self, row: usize) -> &str {
        self.lines.get(row).map(|s| s.as_str()).unwrap_or("")
    }

    /// Highlight one row, replacing any previous highlight
    pub fn set_highlight(&mut self, row: usize) {
        if row < SCREEN_ROWS {
            self.highlight = Some(row);
        }
    }

    /// Highlighted row, if any
    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    /// All rows, top to bottom
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|s| s.as_str())
    }

    pub const fn rows(&self) -> usize {
        SCREEN_ROWS
    }

    pub const fn cols(&self) -> usize {
        SCREEN_COLS
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_read_line() {
        let mut screen = Screen::new();
        screen.set_line(0, "Hello");
        assert_eq!(screen.line(0), "Hello");
        assert_eq!(screen.line(1), "");
        assert_eq!(screen.line(99), "");
    }

    #[test]
    fn test_long_line_truncated() {
        let mut screen = Screen::new();
        screen.set_line(2, "0123456789012345678901234");
        assert_eq!(screen.line(2), "012345678901234567890");
    }

    #[test]
    fn test_clear_drops_highlight() {
        let mut screen = Screen::new();
        screen.set_line(3, "row");
        screen.set_highlight(3);
        assert_eq!(screen.highlight(), Some(3));
        screen.set_highlight(8);
        assert_eq!(screen.highlight(), Some(3));

        screen.clear();
        assert_eq!(screen.highlight(), None);
        assert!(screen.lines().all(str::is_empty));
    }
}
