//! Flash sector driver for RP2040
//!
//! Keeps the profile image in the last 4 KiB erase sector of the 2 MiB
//! on-board flash, well clear of the firmware image.

use embassy_rp::flash::{Blocking, Flash, ERASE_SIZE};
use embassy_rp::peripherals::FLASH;
use embassy_rp::Peri;

use growlight_hal::{FlashError, SectorStorage};

/// Total flash size of the board
pub const FLASH_SIZE: usize = 2 * 1024 * 1024;

/// Offset of the storage sector from the start of flash
pub const STORAGE_OFFSET: u32 = (FLASH_SIZE - ERASE_SIZE) as u32;

/// RP2040 single-sector storage
pub struct Rp2040SectorStorage<'d> {
    flash: Flash<'d, FLASH, Blocking, FLASH_SIZE>,
}

impl<'d> Rp2040SectorStorage<'d> {
    /// Take the flash peripheral
    pub fn new(flash: Peri<'d, FLASH>) -> Self {
        Self {
            flash: Flash::new_blocking(flash),
        }
    }
}

impl<'d> SectorStorage for Rp2040SectorStorage<'d> {
    const SECTOR_SIZE: usize = ERASE_SIZE;

    async fn read_sector(&mut self, buffer: &mut [u8]) -> Result<(), FlashError> {
        if buffer.len() != ERASE_SIZE {
            return Err(FlashError::InvalidLength);
        }
        self.flash
            .blocking_read(STORAGE_OFFSET, buffer)
            .map_err(|_| FlashError::Flash)
    }

    async fn write_sector(&mut self, data: &[u8]) -> Result<(), FlashError> {
        if data.len() != ERASE_SIZE {
            return Err(FlashError::InvalidLength);
        }

        // XIP is unavailable while the sector is erased and programmed, so
        // nothing else may run from flash in between.
        let flash = &mut self.flash;
        critical_section::with(|_| {
            flash.blocking_erase(STORAGE_OFFSET, STORAGE_OFFSET + ERASE_SIZE as u32)?;
            flash.blocking_write(STORAGE_OFFSET, data)
        })
        .map_err(|_| FlashError::Flash)
    }
}
