//! Schedule data types
//!
//! A profile is a named cycle of up to [`MAX_PERIODS`] lighting periods. The
//! store holds [`MAX_PROFILES`] profiles and the index of the one driving the
//! outputs. Field ranges are enforced at construction and every mutation
//! clamps, so a value of these types is always within range.

/// Number of profile slots
pub const MAX_PROFILES: usize = 5;

/// Number of period slots per profile
pub const MAX_PERIODS: usize = 6;

/// Profile name storage size, including the terminating NUL
pub const NAME_LEN: usize = 16;

/// Longest period: one day
pub const MAX_DURATION_MINUTES: u16 = 24 * 60;

/// Full LED power in percent
pub const MAX_POWER: u8 = 100;

/// Errors raised when building schedule data from raw values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Duration above [`MAX_DURATION_MINUTES`]
    DurationOutOfRange,
    /// Power above [`MAX_POWER`]
    PowerOutOfRange,
    /// Name longer than 15 characters or not printable ASCII
    InvalidName,
    /// Profile index outside the store
    IndexOutOfRange,
}

/// One lighting period
///
/// A zero duration marks a disabled slot. The engine skips it but the slot
/// keeps its position in the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Period {
    duration_minutes: u16,
    white_red_power: u8,
    blue_power: u8,
}

impl Period {
    /// Disabled slot
    pub const DISABLED: Self = Self {
        duration_minutes: 0,
        white_red_power: 0,
        blue_power: 0,
    };

    /// Create a period, rejecting out-of-range values
    pub const fn new(
        duration_minutes: u16,
        white_red_power: u8,
        blue_power: u8,
    ) -> Result<Self, ConfigError> {
        if duration_minutes > MAX_DURATION_MINUTES {
            return Err(ConfigError::DurationOutOfRange);
        }
        if white_red_power > MAX_POWER || blue_power > MAX_POWER {
            return Err(ConfigError::PowerOutOfRange);
        }
        Ok(Self {
            duration_minutes,
            white_red_power,
            blue_power,
        })
    }

    /// Create a period from arbitrary integers, clamping each field into range
    pub fn clamped(duration_minutes: i32, white_red_power: i32, blue_power: i32) -> Self {
        Self {
            duration_minutes: clamp_duration(duration_minutes),
            white_red_power: clamp_power(white_red_power),
            blue_power: clamp_power(blue_power),
        }
    }

    /// Duration in minutes (0 = disabled)
    pub const fn duration_minutes(&self) -> u16 {
        self.duration_minutes
    }

    /// White/red channel power in percent
    pub const fn white_red_power(&self) -> u8 {
        self.white_red_power
    }

    /// Blue channel power in percent
    pub const fn blue_power(&self) -> u8 {
        self.blue_power
    }

    /// Whether the engine takes this slot into account
    pub const fn is_enabled(&self) -> bool {
        self.duration_minutes > 0
    }

    /// Change the duration by `delta` minutes, clamped to `0..=1440`
    ///
    /// Returns true if the value changed.
    pub fn adjust_duration(&mut self, delta: i32) -> bool {
        let next = clamp_duration((self.duration_minutes as i32).saturating_add(delta));
        let changed = next != self.duration_minutes;
        self.duration_minutes = next;
        changed
    }

    /// Change the white/red power by `delta` percent, clamped to `0..=100`
    pub fn adjust_white_red(&mut self, delta: i32) -> bool {
        let next = clamp_power((self.white_red_power as i32).saturating_add(delta));
        let changed = next != self.white_red_power;
        self.white_red_power = next;
        changed
    }

    /// Change the blue power by `delta` percent, clamped to `0..=100`
    pub fn adjust_blue(&mut self, delta: i32) -> bool {
        let next = clamp_power((self.blue_power as i32).saturating_add(delta));
        let changed = next != self.blue_power;
        self.blue_power = next;
        changed
    }
}

fn clamp_duration(minutes: i32) -> u16 {
    minutes.clamp(0, MAX_DURATION_MINUTES as i32) as u16
}

fn clamp_power(percent: i32) -> u8 {
    percent.clamp(0, MAX_POWER as i32) as u8
}

/// Fixed-size profile name
///
/// Stored NUL padded so it maps one-to-one onto the persisted image.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ProfileName([u8; NAME_LEN]);

impl ProfileName {
    /// Build a name at compile time
    ///
    /// Panics during const evaluation if the text does not fit.
    pub const fn from_static(text: &str) -> Self {
        let bytes = text.as_bytes();
        assert!(bytes.len() < NAME_LEN);
        let mut raw = [0u8; NAME_LEN];
        let mut i = 0;
        while i < bytes.len() {
            raw[i] = bytes[i];
            i += 1;
        }
        Self(raw)
    }

    /// Build a name from user text
    pub fn new(text: &str) -> Result<Self, ConfigError> {
        let bytes = text.as_bytes();
        if bytes.len() >= NAME_LEN || !bytes.iter().all(|b| is_name_byte(*b)) {
            return Err(ConfigError::InvalidName);
        }
        let mut raw = [0u8; NAME_LEN];
        raw[..bytes.len()].copy_from_slice(bytes);
        Ok(Self(raw))
    }

    /// Rebuild a name from stored bytes
    ///
    /// Everything from the first NUL on is cleared, the last byte is always
    /// NUL and unprintable bytes become `?`.
    pub fn from_raw(raw: [u8; NAME_LEN]) -> Self {
        let mut clean = [0u8; NAME_LEN];
        for (dst, &src) in clean.iter_mut().zip(raw.iter()).take(NAME_LEN - 1) {
            if src == 0 {
                break;
            }
            *dst = if is_name_byte(src) { src } else { b'?' };
        }
        Self(clean)
    }

    /// Stored bytes, NUL padded
    pub const fn as_bytes(&self) -> &[u8; NAME_LEN] {
        &self.0
    }

    /// Visible text
    pub fn as_str(&self) -> &str {
        let len = self.0.iter().position(|&b| b == 0).unwrap_or(NAME_LEN);
        core::str::from_utf8(&self.0[..len]).unwrap_or("")
    }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_graphic() || b == b' '
}

impl core::fmt::Debug for ProfileName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ProfileName {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", self.as_str());
    }
}

/// Named lighting schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Profile {
    name: ProfileName,
    periods: [Period; MAX_PERIODS],
}

impl Profile {
    /// Create a profile from its parts
    pub const fn new(name: ProfileName, periods: [Period; MAX_PERIODS]) -> Self {
        Self { name, periods }
    }

    /// Profile with every period disabled
    pub const fn blank(name: ProfileName) -> Self {
        Self::new(name, [Period::DISABLED; MAX_PERIODS])
    }

    /// Profile name
    pub const fn name(&self) -> &ProfileName {
        &self.name
    }

    /// All period slots in cycle order
    pub const fn periods(&self) -> &[Period; MAX_PERIODS] {
        &self.periods
    }

    /// Period slot by index
    pub fn period(&self, index: usize) -> Option<&Period> {
        self.periods.get(index)
    }

    /// Mutable period slot by index
    pub fn period_mut(&mut self, index: usize) -> Option<&mut Period> {
        self.periods.get_mut(index)
    }

    /// Length of one cycle: the sum of all enabled durations
    ///
    /// Zero means the profile has no schedule and all outputs stay off.
    pub fn active_minutes(&self) -> u32 {
        self.periods
            .iter()
            .map(|p| p.duration_minutes() as u32)
            .sum()
    }
}

/// Build a preset period; used for the factory table only
const fn preset(duration_minutes: u16, white_red_power: u8, blue_power: u8) -> Period {
    match Period::new(duration_minutes, white_red_power, blue_power) {
        Ok(period) => period,
        Err(_) => panic!("preset period out of range"),
    }
}

/// Factory profile table
pub const FACTORY_PROFILES: [Profile; MAX_PROFILES] = [
    Profile::new(
        ProfileName::from_static("VEG"),
        [
            preset(840, 100, 100),
            preset(600, 0, 0),
            Period::DISABLED,
            Period::DISABLED,
            Period::DISABLED,
            Period::DISABLED,
        ],
    ),
    Profile::new(
        ProfileName::from_static("FLOWER"),
        [
            preset(720, 100, 0),
            preset(720, 0, 0),
            Period::DISABLED,
            Period::DISABLED,
            Period::DISABLED,
            Period::DISABLED,
        ],
    ),
    Profile::new(
        ProfileName::from_static("FRUIT"),
        [
            preset(960, 100, 0),
            preset(480, 0, 0),
            Period::DISABLED,
            Period::DISABLED,
            Period::DISABLED,
            Period::DISABLED,
        ],
    ),
    Profile::blank(ProfileName::from_static("CUSTOM 1")),
    Profile::blank(ProfileName::from_static("CUSTOM 2")),
];

/// All profiles plus the selected index
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProfileStore {
    profiles: [Profile; MAX_PROFILES],
    selected: usize,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::factory()
    }
}

impl ProfileStore {
    /// Factory presets with the first profile selected
    pub const fn factory() -> Self {
        Self {
            profiles: FACTORY_PROFILES,
            selected: 0,
        }
    }

    /// Create a store, rejecting an out-of-range selection
    pub fn new(profiles: [Profile; MAX_PROFILES], selected: usize) -> Result<Self, ConfigError> {
        if selected >= MAX_PROFILES {
            return Err(ConfigError::IndexOutOfRange);
        }
        Ok(Self { profiles, selected })
    }

    /// Index of the profile driving the outputs
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// Change the selected profile
    pub fn select(&mut self, index: usize) -> Result<(), ConfigError> {
        if index >= MAX_PROFILES {
            return Err(ConfigError::IndexOutOfRange);
        }
        self.selected = index;
        Ok(())
    }

    /// Profile driving the outputs
    pub fn selected_profile(&self) -> &Profile {
        &self.profiles[self.selected]
    }

    /// Mutable access to the profile driving the outputs
    pub fn selected_profile_mut(&mut self) -> &mut Profile {
        &mut self.profiles[self.selected]
    }

    /// Profile by slot
    pub fn profile(&self, index: usize) -> Option<&Profile> {
        self.profiles.get(index)
    }

    /// All profile slots
    pub const fn profiles(&self) -> &[Profile; MAX_PROFILES] {
        &self.profiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_validation() {
        assert!(Period::new(1440, 100, 100).is_ok());
        assert_eq!(
            Period::new(1441, 0, 0),
            Err(ConfigError::DurationOutOfRange)
        );
        assert_eq!(Period::new(60, 101, 0), Err(ConfigError::PowerOutOfRange));
        assert_eq!(Period::new(60, 0, 101), Err(ConfigError::PowerOutOfRange));
    }

    #[test]
    fn test_duration_clamps() {
        let mut period = Period::DISABLED;
        assert!(!period.adjust_duration(-60));
        assert_eq!(period.duration_minutes(), 0);

        let mut period = Period::new(1400, 0, 0).unwrap();
        assert!(period.adjust_duration(60));
        assert_eq!(period.duration_minutes(), 1440);
        assert!(!period.adjust_duration(60));
    }

    #[test]
    fn test_power_clamps() {
        let mut period = Period::new(60, 100, 3).unwrap();
        assert!(!period.adjust_white_red(5));
        assert_eq!(period.white_red_power(), 100);

        assert!(period.adjust_blue(-5));
        assert_eq!(period.blue_power(), 0);

        assert!(period.adjust_white_red(i32::MIN));
        assert_eq!(period.white_red_power(), 0);
        assert!(period.adjust_blue(i32::MAX));
        assert_eq!(period.blue_power(), 100);
    }

    #[test]
    fn test_duration_extreme_delta() {
        let mut period = Period::new(1400, 0, 0).unwrap();
        assert!(period.adjust_duration(i32::MAX));
        assert_eq!(period.duration_minutes(), 1440);
        assert!(period.adjust_duration(i32::MIN));
        assert_eq!(period.duration_minutes(), 0);
    }

    #[test]
    fn test_clamped_period() {
        let period = Period::clamped(5000, -3, 250);
        assert_eq!(period.duration_minutes(), 1440);
        assert_eq!(period.white_red_power(), 0);
        assert_eq!(period.blue_power(), 100);
    }

    #[test]
    fn test_profile_name() {
        let name = ProfileName::new("TOMATO").unwrap();
        assert_eq!(name.as_str(), "TOMATO");
        assert_eq!(name.as_bytes()[6], 0);

        assert_eq!(
            ProfileName::new("SIXTEEN CHARS!!!"),
            Err(ConfigError::InvalidName)
        );
        assert!(ProfileName::new("FIFTEEN CHARS!!").is_ok());
        assert_eq!(ProfileName::new("TAB\t"), Err(ConfigError::InvalidName));
    }

    #[test]
    fn test_profile_name_from_raw() {
        let mut raw = [b'X'; NAME_LEN];
        raw[2] = 0x07;
        let name = ProfileName::from_raw(raw);
        assert_eq!(name.as_str(), "XX?XXXXXXXXXXXX");
        assert_eq!(name.as_bytes()[NAME_LEN - 1], 0);

        let mut raw = [0u8; NAME_LEN];
        raw[..3].copy_from_slice(b"AB\0");
        raw[5] = b'Z';
        let name = ProfileName::from_raw(raw);
        assert_eq!(name.as_str(), "AB");
        assert_eq!(name.as_bytes()[5], 0);
    }

    #[test]
    fn test_factory_presets() {
        let store = ProfileStore::factory();
        assert_eq!(store.selected_index(), 0);

        let names: [&str; MAX_PROFILES] = [
            store.profiles()[0].name().as_str(),
            store.profiles()[1].name().as_str(),
            store.profiles()[2].name().as_str(),
            store.profiles()[3].name().as_str(),
            store.profiles()[4].name().as_str(),
        ];
        assert_eq!(names, ["VEG", "FLOWER", "FRUIT", "CUSTOM 1", "CUSTOM 2"]);

        assert_eq!(store.profiles()[0].active_minutes(), 1440);
        assert_eq!(store.profiles()[1].active_minutes(), 1440);
        assert_eq!(store.profiles()[2].active_minutes(), 1440);
        assert_eq!(store.profiles()[3].active_minutes(), 0);
        assert_eq!(store.profiles()[4].active_minutes(), 0);

        let veg = store.selected_profile();
        assert_eq!(veg.period(0), Period::new(840, 100, 100).ok().as_ref());
        assert_eq!(veg.period(1), Period::new(600, 0, 0).ok().as_ref());
        assert!(veg.period(MAX_PERIODS).is_none());
    }

    #[test]
    fn test_store_selection() {
        let mut store = ProfileStore::factory();
        assert!(store.select(4).is_ok());
        assert_eq!(store.selected_profile().name().as_str(), "CUSTOM 2");
        assert_eq!(store.select(5), Err(ConfigError::IndexOutOfRange));
        assert_eq!(store.selected_index(), 4);

        assert_eq!(
            ProfileStore::new(FACTORY_PROFILES, 7),
            Err(ConfigError::IndexOutOfRange)
        );
    }
}
