//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use growlight_core::scheduler::OutputState;
use growlight_core::state::InputEvent;
use growlight_display::Screen;

/// Channel capacity for input events
const INPUT_CHANNEL_SIZE: usize = 8;

/// Encoder rotation and button presses, consumed by the controller
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, InputEvent, INPUT_CHANNEL_SIZE> =
    Channel::new();

/// Output to drive (updated by controller)
pub static OUTPUT_CMD: Signal<CriticalSectionRawMutex, OutputState> = Signal::new();

/// Latest rendered screen (updated by controller)
pub static SCREEN_UPDATE: Signal<CriticalSectionRawMutex, Screen> = Signal::new();
