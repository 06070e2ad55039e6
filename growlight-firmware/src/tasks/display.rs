//! Display task
//!
//! Pushes rendered screens to the OLED.

use defmt::*;

use growlight_display::DisplayBackend;

use crate::channels::SCREEN_UPDATE;
use crate::display::Oled;

/// Display task - shows every screen the controller renders
#[embassy_executor::task]
pub async fn display_task(mut oled: Oled) {
    info!("Display task started");

    loop {
        let screen = SCREEN_UPDATE.wait().await;
        if let Err(e) = oled.show(&screen) {
            warn!("Failed to update display: {:?}", e);
        } else {
            trace!("Screen updated");
        }
    }
}
