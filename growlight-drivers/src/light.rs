//! PWM light channel
//!
//! One LED string dimmed by a PWM output. 0 % holds the output low and
//! 100 % drives it at the full duty range.

use embedded_hal::pwm::SetDutyCycle;
use growlight_core::config::MAX_POWER;
use growlight_core::traits::{LightChannel, OutputError};

/// LED channel on a PWM output
pub struct PwmLight<P> {
    pwm: P,
    power: u8,
}

impl<P: SetDutyCycle> PwmLight<P> {
    /// Create a channel and switch it off
    pub fn new(pwm: P) -> Result<Self, OutputError> {
        let mut light = Self { pwm, power: 0 };
        light.set_power(0)?;
        Ok(light)
    }
}

impl<P: SetDutyCycle> LightChannel for PwmLight<P> {
    fn set_power(&mut self, percent: u8) -> Result<(), OutputError> {
        let percent = percent.min(MAX_POWER);
        self.pwm
            .set_duty_cycle_percent(percent)
            .map_err(|_| OutputError::Driver)?;
        self.power = percent;
        Ok(())
    }

    fn power(&self) -> u8 {
        self.power
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::pwm::{ErrorKind, ErrorType};

    /// Mock PWM slice channel with a 25000 top like the board's
    struct MockPwm {
        duty: u16,
    }

    impl ErrorType for MockPwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for MockPwm {
        fn max_duty_cycle(&self) -> u16 {
            25_000
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    struct BrokenPwm;

    impl ErrorType for BrokenPwm {
        type Error = ErrorKind;
    }

    impl SetDutyCycle for BrokenPwm {
        fn max_duty_cycle(&self) -> u16 {
            100
        }

        fn set_duty_cycle(&mut self, _duty: u16) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }
    }

    #[test]
    fn test_starts_off() {
        let light = PwmLight::new(MockPwm { duty: 1234 }).unwrap();
        assert_eq!(light.power(), 0);
        assert_eq!(light.pwm.duty, 0);
    }

    #[test]
    fn test_percent_maps_to_duty() {
        let mut light = PwmLight::new(MockPwm { duty: 0 }).unwrap();
        light.set_power(100).unwrap();
        assert_eq!(light.pwm.duty, 25_000);
        light.set_power(40).unwrap();
        assert_eq!(light.pwm.duty, 10_000);
        assert_eq!(light.power(), 40);
    }

    #[test]
    fn test_power_is_capped() {
        let mut light = PwmLight::new(MockPwm { duty: 0 }).unwrap();
        light.set_power(180).unwrap();
        assert_eq!(light.power(), 100);
        assert_eq!(light.pwm.duty, 25_000);
    }

    #[test]
    fn test_driver_error() {
        assert!(matches!(PwmLight::new(BrokenPwm), Err(OutputError::Driver)));
    }
}
