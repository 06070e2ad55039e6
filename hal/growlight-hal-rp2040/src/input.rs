//! Rotary encoder and push button on GPIO inputs
//!
//! Both are sampled on a short timer and decoded by the shared
//! `growlight-hal` state machines.

use embassy_rp::gpio::Input;
use embassy_time::{Duration, Instant, Timer};

use growlight_hal::{Debouncer, Direction, QuadratureDecoder};

/// Encoder sample interval
const ENCODER_POLL: Duration = Duration::from_millis(2);

/// Button sample interval
const BUTTON_POLL: Duration = Duration::from_millis(5);

/// Quadrature encoder on two pulled-up inputs
pub struct Encoder<'d> {
    a: Input<'d>,
    b: Input<'d>,
    decoder: QuadratureDecoder,
}

impl<'d> Encoder<'d> {
    pub fn new(a: Input<'d>, b: Input<'d>) -> Self {
        let decoder = QuadratureDecoder::new(a.is_high(), b.is_high());
        Self { a, b, decoder }
    }

    /// Wait for the next completed detent
    pub async fn step(&mut self) -> Direction {
        loop {
            Timer::after(ENCODER_POLL).await;
            if let Some(direction) = self.decoder.update(self.a.is_high(), self.b.is_high()) {
                return direction;
            }
        }
    }
}

/// Active-low push button with debounce
pub struct Button<'d> {
    pin: Input<'d>,
    debouncer: Debouncer,
}

impl<'d> Button<'d> {
    pub fn new(pin: Input<'d>, debounce_ms: u64) -> Self {
        Self {
            pin,
            debouncer: Debouncer::new(debounce_ms),
        }
    }

    /// Wait for the next debounced press
    pub async fn pressed(&mut self) {
        loop {
            Timer::after(BUTTON_POLL).await;
            let now = Instant::now().as_millis();
            if self.debouncer.update(self.pin.is_high(), now) {
                return;
            }
        }
    }
}
