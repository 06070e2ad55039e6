//! Output stage
//!
//! Owns both light channels and the pump and pushes a computed
//! [`OutputState`] onto them in one call.

use growlight_core::scheduler::OutputState;
use growlight_core::traits::{LightChannel, OutputError, PumpOutput};

/// All controlled outputs of the box
pub struct OutputStage<W, B, P> {
    white_red: W,
    blue: B,
    pump: P,
}

impl<W: LightChannel, B: LightChannel, P: PumpOutput> OutputStage<W, B, P> {
    pub fn new(white_red: W, blue: B, pump: P) -> Self {
        Self {
            white_red,
            blue,
            pump,
        }
    }

    /// Drive every output to match `output`
    ///
    /// All three outputs are attempted; the first error is returned.
    pub fn apply(&mut self, output: &OutputState) -> Result<(), OutputError> {
        let white_red = self.white_red.set_power(output.white_red_power);
        let blue = self.blue.set_power(output.blue_power);
        let pump = self.pump.set_on(output.pump_on);
        white_red.and(blue).and(pump)
    }

    /// Switch everything off
    pub fn all_off(&mut self) -> Result<(), OutputError> {
        self.apply(&OutputState::default())
    }

    pub fn white_red(&self) -> &W {
        &self.white_red
    }

    pub fn blue(&self) -> &B {
        &self.blue
    }

    pub fn pump(&self) -> &P {
        &self.pump
    }
}
