//! SSD1306 128x64 OLED backend
//!
//! Text is drawn with a 5x8 font on a 6x8 cell grid, giving the 21x8
//! character screen. Highlighted regions are redrawn inverted.

use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use heapless::String;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::{DisplayConfig, DisplayRotation, DisplaySize128x64, I2CInterface};
use ssd1306::{I2CDisplayInterface, Ssd1306};

use growlight_display::{DisplayBackend, DisplayError, SCREEN_COLS, SCREEN_ROWS};

/// Character cell width in pixels
const CELL_WIDTH: i32 = 6;

/// Character cell height in pixels
const CELL_HEIGHT: i32 = 8;

/// 5x8 glyphs with one column of spacing
const FONT: MonoFont<'static> = MonoFont {
    character_spacing: 1,
    ..FONT_5X8
};

type Display = Ssd1306<
    I2CInterface<I2c<'static, I2C1, Blocking>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// SSD1306 on I2C1 at the default 0x3C address
pub struct Oled {
    display: Display,
    /// Text drawn per row, kept so highlights can redraw it inverted
    rows: [String<SCREEN_COLS>; SCREEN_ROWS],
}

impl Oled {
    /// Initialize the panel and blank it
    pub fn new(i2c: I2c<'static, I2C1, Blocking>) -> Result<Self, DisplayError> {
        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init().map_err(|_| DisplayError::Communication)?;

        let mut oled = Self {
            display,
            rows: core::array::from_fn(|_| String::new()),
        };
        oled.clear()?;
        oled.flush()?;
        Ok(oled)
    }

    fn check(row: u8, col: u8) -> Result<(), DisplayError> {
        if row as usize >= SCREEN_ROWS || col as usize >= SCREEN_COLS {
            return Err(DisplayError::InvalidCoordinates);
        }
        Ok(())
    }

    fn origin(row: u8, col: u8) -> Point {
        Point::new(col as i32 * CELL_WIDTH, row as i32 * CELL_HEIGHT)
    }
}

impl DisplayBackend for Oled {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.display.clear_buffer();
        for row in &mut self.rows {
            row.clear();
        }
        Ok(())
    }

    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        Self::check(row, col)?;

        let cached = &mut self.rows[row as usize];
        while cached.len() < col as usize {
            let _ = cached.push(' ');
        }
        cached.truncate(col as usize);
        for c in text.chars() {
            if cached.push(c).is_err() {
                break;
            }
        }

        let style = MonoTextStyle::new(&FONT, BinaryColor::On);
        Text::with_baseline(text, Self::origin(row, col), style, Baseline::Top)
            .draw(&mut self.display)
            .map_err(|_| DisplayError::Communication)?;
        Ok(())
    }

    fn invert_region(&mut self, row: u8, start_col: u8, end_col: u8) -> Result<(), DisplayError> {
        Self::check(row, start_col)?;
        let end_col = end_col.min(SCREEN_COLS as u8);
        if end_col <= start_col {
            return Ok(());
        }

        let width = (end_col - start_col) as u32 * CELL_WIDTH as u32;
        Rectangle::new(Self::origin(row, start_col), Size::new(width, CELL_HEIGHT as u32))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut self.display)
            .map_err(|_| DisplayError::Communication)?;

        let inverted = MonoTextStyleBuilder::new()
            .font(&FONT)
            .text_color(BinaryColor::Off)
            .build();
        let text = &self.rows[row as usize];
        let start = (start_col as usize).min(text.len());
        let end = (end_col as usize).min(text.len());
        Text::with_baseline(
            &text[start..end],
            Self::origin(row, start_col),
            inverted,
            Baseline::Top,
        )
        .draw(&mut self.display)
        .map_err(|_| DisplayError::Communication)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.display
            .flush()
            .map_err(|_| DisplayError::Communication)
    }
}
