//! Flash image layout
//!
//! ```text
//! offset 0..3   marker A5 5A A5 5A
//! offset 4..7   selected profile index, i32 LE
//! offset 8..    5 profiles x 88 bytes:
//!                 name[16], NUL padded
//!                 6 x { duration i32 LE, white_red i32 LE, blue i32 LE }
//! ```
//!
//! The 448-byte image is padded with 0xFF up to one erase sector.

use crate::config::{
    Period, Profile, ProfileName, ProfileStore, MAX_PERIODS, MAX_PROFILES, NAME_LEN,
};

/// Validity marker at the start of the image
pub const MARKER: [u8; 4] = [0xA5, 0x5A, 0xA5, 0x5A];

/// Bytes per stored period
pub const PERIOD_IMAGE_LEN: usize = 3 * 4;

/// Bytes per stored profile
pub const PROFILE_IMAGE_LEN: usize = NAME_LEN + MAX_PERIODS * PERIOD_IMAGE_LEN;

/// Bytes in front of the profile table
const HEADER_LEN: usize = MARKER.len() + 4;

/// Bytes carrying data
pub const IMAGE_LEN: usize = HEADER_LEN + MAX_PROFILES * PROFILE_IMAGE_LEN;

/// Erase sector the image is written to
pub const SECTOR_SIZE: usize = 4096;

/// Value of erased flash; used as padding
pub const ERASED: u8 = 0xFF;

const _: () = assert!(PROFILE_IMAGE_LEN == 88);
const _: () = assert!(IMAGE_LEN == 448);
const _: () = assert!(IMAGE_LEN <= SECTOR_SIZE);

/// Codec errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CodecError {
    /// Buffer cannot hold the image
    BufferTooSmall,
}

/// Write the image of `store` into `buf`
///
/// Bytes after the image are set to [`ERASED`]. Returns the number of data
/// bytes written.
pub fn encode(store: &ProfileStore, buf: &mut [u8]) -> Result<usize, CodecError> {
    if buf.len() < IMAGE_LEN {
        return Err(CodecError::BufferTooSmall);
    }

    buf[..MARKER.len()].copy_from_slice(&MARKER);
    put_i32(&mut buf[MARKER.len()..HEADER_LEN], store.selected_index() as i32);

    let table = &mut buf[HEADER_LEN..IMAGE_LEN];
    for (chunk, profile) in table
        .chunks_exact_mut(PROFILE_IMAGE_LEN)
        .zip(store.profiles().iter())
    {
        encode_profile(profile, chunk);
    }

    buf[IMAGE_LEN..].fill(ERASED);
    Ok(IMAGE_LEN)
}

fn encode_profile(profile: &Profile, out: &mut [u8]) {
    let (name, periods) = out.split_at_mut(NAME_LEN);
    name.copy_from_slice(profile.name().as_bytes());

    for (chunk, period) in periods
        .chunks_exact_mut(PERIOD_IMAGE_LEN)
        .zip(profile.periods().iter())
    {
        put_i32(&mut chunk[0..4], period.duration_minutes() as i32);
        put_i32(&mut chunk[4..8], period.white_red_power() as i32);
        put_i32(&mut chunk[8..12], period.blue_power() as i32);
    }
}

/// Read a store back from `buf`
///
/// Returns `Ok(None)` when the marker is missing (erased or foreign data).
/// Out-of-range values are clamped: the selected index falls back to 0 and
/// period fields are clamped into their ranges.
pub fn decode(buf: &[u8]) -> Result<Option<ProfileStore>, CodecError> {
    if buf.len() < IMAGE_LEN {
        return Err(CodecError::BufferTooSmall);
    }
    if buf[..MARKER.len()] != MARKER {
        return Ok(None);
    }

    let raw_index = get_i32(&buf[MARKER.len()..HEADER_LEN]);
    let selected = if (0..MAX_PROFILES as i32).contains(&raw_index) {
        raw_index as usize
    } else {
        0
    };

    let mut profiles = [Profile::blank(ProfileName::from_static("")); MAX_PROFILES];
    for (profile, chunk) in profiles
        .iter_mut()
        .zip(buf[HEADER_LEN..IMAGE_LEN].chunks_exact(PROFILE_IMAGE_LEN))
    {
        *profile = decode_profile(chunk);
    }

    Ok(ProfileStore::new(profiles, selected).ok())
}

fn decode_profile(chunk: &[u8]) -> Profile {
    let (name_bytes, period_bytes) = chunk.split_at(NAME_LEN);
    let mut raw_name = [0u8; NAME_LEN];
    raw_name.copy_from_slice(name_bytes);

    let mut periods = [Period::DISABLED; MAX_PERIODS];
    for (period, p) in periods
        .iter_mut()
        .zip(period_bytes.chunks_exact(PERIOD_IMAGE_LEN))
    {
        *period = Period::clamped(get_i32(&p[0..4]), get_i32(&p[4..8]), get_i32(&p[8..12]));
    }

    Profile::new(ProfileName::from_raw(raw_name), periods)
}

fn put_i32(out: &mut [u8], value: i32) {
    out[..4].copy_from_slice(&value.to_le_bytes());
}

fn get_i32(bytes: &[u8]) -> i32 {
    i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FACTORY_PROFILES;
    use proptest::prelude::*;

    #[test]
    fn test_factory_layout() {
        let store = ProfileStore::factory();
        let mut buf = [0u8; SECTOR_SIZE];
        assert_eq!(encode(&store, &mut buf), Ok(IMAGE_LEN));

        assert_eq!(&buf[0..4], &MARKER);
        assert_eq!(&buf[4..8], &[0, 0, 0, 0]);
        assert_eq!(&buf[8..11], b"VEG");
        assert_eq!(buf[11], 0);
        // VEG period 0 duration 840
        assert_eq!(&buf[24..28], &840i32.to_le_bytes());
        assert_eq!(&buf[28..32], &100i32.to_le_bytes());
        // FLOWER starts one profile later
        assert_eq!(&buf[96..102], b"FLOWER");
        assert!(buf[IMAGE_LEN..].iter().all(|&b| b == ERASED));
    }

    #[test]
    fn test_round_trip_selected() {
        let mut store = ProfileStore::factory();
        store.select(3).unwrap();
        store
            .selected_profile_mut()
            .period_mut(2)
            .unwrap()
            .adjust_duration(180);

        let mut buf = [0u8; SECTOR_SIZE];
        encode(&store, &mut buf).unwrap();
        assert_eq!(decode(&buf), Ok(Some(store)));
    }

    #[test]
    fn test_erased_flash_is_no_data() {
        let buf = [ERASED; SECTOR_SIZE];
        assert_eq!(decode(&buf), Ok(None));
    }

    #[test]
    fn test_bad_index_clamped() {
        let mut buf = [0u8; IMAGE_LEN];
        encode(&ProfileStore::factory(), &mut buf).unwrap();
        buf[4..8].copy_from_slice(&9i32.to_le_bytes());
        let store = decode(&buf).unwrap().unwrap();
        assert_eq!(store.selected_index(), 0);

        buf[4..8].copy_from_slice(&(-1i32).to_le_bytes());
        let store = decode(&buf).unwrap().unwrap();
        assert_eq!(store.selected_index(), 0);
    }

    #[test]
    fn test_bad_period_fields_clamped() {
        let mut buf = [0u8; IMAGE_LEN];
        encode(&ProfileStore::factory(), &mut buf).unwrap();
        buf[24..28].copy_from_slice(&5000i32.to_le_bytes());
        buf[28..32].copy_from_slice(&(-7i32).to_le_bytes());
        buf[32..36].copy_from_slice(&300i32.to_le_bytes());

        let store = decode(&buf).unwrap().unwrap();
        let period = store.profiles()[0].periods()[0];
        assert_eq!(period.duration_minutes(), 1440);
        assert_eq!(period.white_red_power(), 0);
        assert_eq!(period.blue_power(), 100);
    }

    #[test]
    fn test_short_buffer() {
        let mut small = [0u8; IMAGE_LEN - 1];
        assert_eq!(
            encode(&ProfileStore::factory(), &mut small),
            Err(CodecError::BufferTooSmall)
        );
        assert_eq!(decode(&small), Err(CodecError::BufferTooSmall));
    }

    fn arb_store() -> impl Strategy<Value = ProfileStore> {
        let period = (0u16..=1440, 0u8..=100, 0u8..=100)
            .prop_map(|(d, w, b)| Period::new(d, w, b).unwrap());
        let profile = (0usize..MAX_PROFILES, proptest::array::uniform6(period))
            .prop_map(|(slot, periods)| Profile::new(*FACTORY_PROFILES[slot].name(), periods));
        (proptest::array::uniform5(profile), 0usize..MAX_PROFILES)
            .prop_map(|(profiles, selected)| ProfileStore::new(profiles, selected).unwrap())
    }

    proptest! {
        #[test]
        fn prop_round_trip(store in arb_store()) {
            let mut buf = [0u8; SECTOR_SIZE];
            encode(&store, &mut buf).unwrap();
            prop_assert_eq!(decode(&buf), Ok(Some(store)));
        }

        #[test]
        fn prop_corrupt_marker_is_no_data(store in arb_store(), byte in 0usize..4, flip in 1u8..=255) {
            let mut buf = [0u8; IMAGE_LEN];
            encode(&store, &mut buf).unwrap();
            buf[byte] ^= flip;
            prop_assert_eq!(decode(&buf), Ok(None));
        }
    }
}
