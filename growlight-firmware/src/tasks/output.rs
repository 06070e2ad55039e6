//! Output task
//!
//! Applies the output computed by the controller to the LED channels and
//! the pump.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::pwm::PwmOutput;

use growlight_drivers::{GpioPump, OutputStage, PwmLight};

use crate::channels::OUTPUT_CMD;

/// Board output stage: white/red and blue PWM channels, pump GPIO
pub type Outputs = OutputStage<
    PwmLight<PwmOutput<'static>>,
    PwmLight<PwmOutput<'static>>,
    GpioPump<Output<'static>>,
>;

/// Output task - waits for output commands and drives the hardware
#[embassy_executor::task]
pub async fn output_task(mut outputs: Outputs) {
    info!("Output task started");

    loop {
        let output = OUTPUT_CMD.wait().await;
        debug!(
            "Apply: W/R {}% B {}% pump {}",
            output.white_red_power, output.blue_power, output.pump_on
        );
        if let Err(e) = outputs.apply(&output) {
            error!("Failed to apply output: {:?}", e);
        }
    }
}
