//! GPIO pump output
//!
//! The pump is switched through a relay or MOSFET on one GPIO. The pin
//! can be active-high (default) or active-low.

use embedded_hal::digital::OutputPin;
use growlight_core::traits::{OutputError, PumpOutput};

/// Pump switched by a GPIO pin
pub struct GpioPump<P> {
    pin: P,
    /// If true, pump ON = pin LOW
    inverted: bool,
    on: bool,
}

impl<P: OutputPin> GpioPump<P> {
    /// Create a pump output and switch it off
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the pump runs while the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Result<Self, OutputError> {
        let mut pump = Self {
            pin,
            inverted,
            on: false,
        };
        pump.set_on(false)?;
        Ok(pump)
    }

    /// Pump with an active-high output
    pub fn new_active_high(pin: P) -> Result<Self, OutputError> {
        Self::new(pin, false)
    }

    /// Pump with an active-low output
    pub fn new_active_low(pin: P) -> Result<Self, OutputError> {
        Self::new(pin, true)
    }
}

impl<P: OutputPin> PumpOutput for GpioPump<P> {
    fn set_on(&mut self, on: bool) -> Result<(), OutputError> {
        let result = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| OutputError::Driver)?;
        self.on = on;
        Ok(())
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
