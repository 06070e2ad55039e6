//! Flash storage abstractions
//!
//! The controller persists one fixed-size image into a single erase sector.
//! Writing always erases the whole sector first, so a partial image never
//! survives next to stale data.

use core::future::Future;

/// Errors from flash storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashError {
    /// Erase or program operation failed
    Flash,
    /// Buffer length does not match the sector size
    InvalidLength,
}

/// One sector of persistent storage
pub trait SectorStorage {
    /// Sector size in bytes
    const SECTOR_SIZE: usize;

    /// Read the whole sector into `buffer`
    ///
    /// `buffer` must be exactly [`Self::SECTOR_SIZE`] bytes long.
    fn read_sector(
        &mut self,
        buffer: &mut [u8],
    ) -> impl Future<Output = Result<(), FlashError>>;

    /// Erase the sector and program `data` into it
    ///
    /// `data` must be exactly [`Self::SECTOR_SIZE`] bytes long.
    fn write_sector(&mut self, data: &[u8]) -> impl Future<Output = Result<(), FlashError>>;
}

/// RAM-backed sector for host-side testing
///
/// Starts out erased (all 0xFF) like a fresh flash chip.
pub struct RamSectorStorage<const N: usize> {
    data: [u8; N],
    writes: usize,
    fail_writes: bool,
}

impl<const N: usize> Default for RamSectorStorage<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RamSectorStorage<N> {
    /// Create an erased sector
    pub const fn new() -> Self {
        Self {
            data: [0xFF; N],
            writes: 0,
            fail_writes: false,
        }
    }

    /// Make every following write fail with [`FlashError::Flash`]
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful writes
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Raw sector content
    pub fn contents(&self) -> &[u8; N] {
        &self.data
    }
}

impl<const N: usize> SectorStorage for RamSectorStorage<N> {
    const SECTOR_SIZE: usize = N;

    async fn read_sector(&mut self, buffer: &mut [u8]) -> Result<(), FlashError> {
        if buffer.len() != N {
            return Err(FlashError::InvalidLength);
        }
        buffer.copy_from_slice(&self.data);
        Ok(())
    }

    async fn write_sector(&mut self, data: &[u8]) -> Result<(), FlashError> {
        if data.len() != N {
            return Err(FlashError::InvalidLength);
        }
        if self.fail_writes {
            return Err(FlashError::Flash);
        }
        self.data.fill(0xFF);
        self.data.copy_from_slice(data);
        self.writes += 1;
        Ok(())
    }
}
