//! Encoder and button tasks
//!
//! Turn decoded encoder detents and button presses into input events for
//! the controller.

use defmt::*;

use growlight_core::state::InputEvent;
use growlight_hal_rp2040::{Button, Encoder};

use crate::channels::INPUT_CHANNEL;
use crate::config::SETTINGS;

/// Encoder task - one rotate event per detent
#[embassy_executor::task]
pub async fn encoder_task(mut encoder: Encoder<'static>) {
    info!("Encoder task started");

    loop {
        let direction = encoder.step().await;
        let delta = direction.delta(SETTINGS.ui.invert_encoder);
        trace!("Encoder {:?} -> {}", direction, delta);
        INPUT_CHANNEL.send(InputEvent::Rotate(delta)).await;
    }
}

/// Button task - one click event per debounced press
#[embassy_executor::task]
pub async fn button_task(mut button: Button<'static>) {
    info!("Button task started");

    loop {
        button.pressed().await;
        trace!("Button pressed");
        INPUT_CHANNEL.send(InputEvent::Click).await;
    }
}
