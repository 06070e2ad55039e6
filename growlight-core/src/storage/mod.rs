//! Persistence codec
//!
//! Converts the profile store to and from the raw sector image. The codec
//! does no I/O; the firmware hands the buffer to the flash driver.

pub mod image;

pub use image::{decode, encode, CodecError, IMAGE_LEN, MARKER, SECTOR_SIZE};
