//! Light and pump output traits

/// Errors raised by output drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// Underlying PWM or GPIO driver rejected the request
    Driver,
}

/// Dimmable LED channel
///
/// Implementations map a percentage onto their duty-cycle range.
pub trait LightChannel {
    /// Drive the channel at `percent` (0 = off, 100 = full power)
    ///
    /// Values above 100 are treated as 100.
    fn set_power(&mut self, percent: u8) -> Result<(), OutputError>;

    /// Last power set, in percent
    fn power(&self) -> u8;
}

/// Irrigation pump switch
pub trait PumpOutput {
    /// Switch the pump on or off
    fn set_on(&mut self, on: bool) -> Result<(), OutputError>;

    /// Whether the pump is currently switched on
    fn is_on(&self) -> bool;
}
