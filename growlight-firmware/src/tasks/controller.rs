//! Main controller task
//!
//! Owns the controller context. Receives input events and tick signals,
//! forwards output changes to the output task, renders the display and
//! performs the flash and bootloader requests the controller raises.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Instant, Timer};

use growlight_core::config::ProfileStore;
use growlight_core::state::Notice;
use growlight_core::storage::{CodecError, SECTOR_SIZE};
use growlight_core::{Controller, Request, Response, RestoreOutcome};
use growlight_display::Renderer;
use growlight_hal::{FlashError, SectorStorage};
use growlight_hal_rp2040::{reboot_to_bootloader, Rp2040SectorStorage};

use crate::channels::{INPUT_CHANNEL, OUTPUT_CMD, SCREEN_UPDATE};
use crate::config::SETTINGS;
use crate::tasks::tick::TICK_SIGNAL;

/// How long save/reload notices stay on screen
const NOTICE_SECS: u64 = 2;

/// Time for the display task to show the last notice before rebooting
const REBOOT_DELAY_MS: u64 = 200;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(mut storage: Rp2040SectorStorage<'static>) {
    info!("Controller task started");

    let mut controller = Controller::new(
        ProfileStore::factory(),
        &SETTINGS,
        Instant::now().as_millis(),
    );
    let mut renderer = Renderer::new();
    let mut image = [0u8; SECTOR_SIZE];

    // Stored profiles replace the factory ones without a notice at boot
    match load(&mut controller, &mut storage, &mut image).await {
        Ok(RestoreOutcome::Loaded) => info!(
            "Loaded profiles from flash, selected {}",
            controller.store().selected_index()
        ),
        Ok(RestoreOutcome::NoData) => info!("No stored profiles, using factory presets"),
        Err(e) => warn!("Failed to read stored profiles: {:?}", e),
    }

    render_view(&controller, &mut renderer);

    loop {
        let response = match select(INPUT_CHANNEL.receive(), TICK_SIGNAL.wait()).await {
            Either::First(input) => {
                debug!("Input: {:?} in {:?}", input, controller.mode());
                controller.handle(input, Instant::now().as_millis())
            }
            Either::Second(now_ms) => controller.tick(now_ms),
        };

        apply_response(&mut controller, &mut renderer, &mut storage, &mut image, response).await;
    }
}

/// Perform the side effects of one controller response
async fn apply_response(
    controller: &mut Controller,
    renderer: &mut Renderer,
    storage: &mut Rp2040SectorStorage<'static>,
    image: &mut [u8; SECTOR_SIZE],
    response: Response,
) {
    if let Some(output) = response.apply {
        OUTPUT_CMD.signal(output);
    }

    match response.request {
        None => {}
        Some(Request::Save) => {
            let notice = match save(controller, storage, image).await {
                Ok(()) => {
                    info!("Profiles saved");
                    Notice::Saved
                }
                Err(e) => {
                    error!("Failed to save profiles: {:?}", e);
                    Notice::SaveFailed
                }
            };
            show_notice(renderer, notice).await;
        }
        Some(Request::Reload) => {
            let notice = match load(controller, storage, image).await {
                Ok(RestoreOutcome::Loaded) => {
                    info!("Profiles reloaded from flash");
                    Notice::DataLoaded
                }
                Ok(RestoreOutcome::NoData) => {
                    info!("Reload: no stored profiles");
                    Notice::NoData
                }
                Err(e) => {
                    warn!("Failed to read stored profiles: {:?}", e);
                    Notice::NoData
                }
            };
            show_notice(renderer, notice).await;
        }
        Some(Request::EnterBootloader) => {
            info!("Rebooting into USB bootloader");
            renderer.render_notice(Notice::Flashing);
            SCREEN_UPDATE.signal(renderer.screen().clone());
            OUTPUT_CMD.signal(Default::default());
            Timer::after_millis(REBOOT_DELAY_MS).await;
            reboot_to_bootloader();
        }
    }

    if response.redraw || response.request.is_some() {
        render_view(controller, renderer);
    }
}

/// Errors from the persistence round trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
enum StorageError {
    Flash(FlashError),
    Codec(CodecError),
}

impl From<FlashError> for StorageError {
    fn from(e: FlashError) -> Self {
        Self::Flash(e)
    }
}

impl From<CodecError> for StorageError {
    fn from(e: CodecError) -> Self {
        Self::Codec(e)
    }
}

/// Encode the store and write it to the storage sector
async fn save(
    controller: &Controller,
    storage: &mut Rp2040SectorStorage<'static>,
    image: &mut [u8; SECTOR_SIZE],
) -> Result<(), StorageError> {
    controller.encode_image(image)?;
    storage.write_sector(image).await?;
    Ok(())
}

/// Read the storage sector and restore the store from it
async fn load(
    controller: &mut Controller,
    storage: &mut Rp2040SectorStorage<'static>,
    image: &mut [u8; SECTOR_SIZE],
) -> Result<RestoreOutcome, StorageError> {
    storage.read_sector(image).await?;
    Ok(controller.restore(image)?)
}

/// Show a notice and hold it for [`NOTICE_SECS`]
///
/// Inputs arriving meanwhile queue up in the input channel.
async fn show_notice(renderer: &mut Renderer, notice: Notice) {
    renderer.render_notice(notice);
    SCREEN_UPDATE.signal(renderer.screen().clone());
    Timer::after_secs(NOTICE_SECS).await;
}

/// Render the view of the current mode and hand it to the display task
fn render_view(controller: &Controller, renderer: &mut Renderer) {
    renderer.render(&controller.view());
    SCREEN_UPDATE.signal(renderer.screen().clone());
}
