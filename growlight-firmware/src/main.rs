//! Growlight - Grow Box Controller Firmware
//!
//! Main firmware binary for the RP2040 grow-light and irrigation
//! controller: two PWM-dimmed LED channels, an irrigation pump and a
//! rotary-encoder menu on a 128x64 OLED.
//!
//! All decisions are taken by the controller task; the other tasks only
//! produce inputs or drive hardware.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use {defmt_rtt as _, panic_probe as _};

use growlight_drivers::{GpioPump, OutputStage, PwmLight};
use growlight_hal_rp2040::{Button, Encoder, Rp2040SectorStorage};

use crate::config::{BUTTON_DEBOUNCE_MS, PUMP_ACTIVE_LOW};
use crate::display::Oled;

mod channels;
mod config;
mod display;
mod tasks;

/// PWM counter top: 125 MHz / 25000 = 5 kHz LED PWM
const PWM_TOP: u16 = 25_000;

/// OLED I2C clock
const I2C_FREQUENCY: u32 = 400_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Growlight firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // LED channels share PWM slice 6: blue on GPIO28 (A), white/red on GPIO29 (B)
    let mut pwm_config = PwmConfig::default();
    pwm_config.top = PWM_TOP;
    let pwm = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_28, p.PIN_29, pwm_config);
    let (blue_pwm, white_red_pwm) = pwm.split();
    let blue = unwrap!(PwmLight::new(unwrap!(blue_pwm)));
    let white_red = unwrap!(PwmLight::new(unwrap!(white_red_pwm)));

    // Pump relay on GPIO27
    let pump_level = if PUMP_ACTIVE_LOW { Level::High } else { Level::Low };
    let pump = unwrap!(GpioPump::new(Output::new(p.PIN_27, pump_level), PUMP_ACTIVE_LOW));

    let outputs = OutputStage::new(white_red, blue, pump);
    info!("Outputs initialized, all off");

    // Encoder on GPIO4/GPIO5, push button on GPIO6
    let encoder = Encoder::new(Input::new(p.PIN_4, Pull::Up), Input::new(p.PIN_5, Pull::Up));
    let button = Button::new(Input::new(p.PIN_6, Pull::Up), BUTTON_DEBOUNCE_MS);

    // OLED on I2C1: SDA GPIO2, SCL GPIO3
    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = I2C_FREQUENCY;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_3, p.PIN_2, i2c_config);
    let oled = match Oled::new(i2c) {
        Ok(oled) => {
            info!("OLED initialized");
            Some(oled)
        }
        Err(e) => {
            error!("OLED init failed: {:?}, running without display", e);
            None
        }
    };

    // Profile storage in the last flash sector
    let storage = Rp2040SectorStorage::new(p.FLASH);

    // Spawn tasks
    spawner.spawn(tasks::output_task(outputs)).unwrap();
    if let Some(oled) = oled {
        spawner.spawn(tasks::display_task(oled)).unwrap();
    }
    spawner.spawn(tasks::encoder_task(encoder)).unwrap();
    spawner.spawn(tasks::button_task(button)).unwrap();
    spawner.spawn(tasks::controller_task(storage)).unwrap();
    spawner.spawn(tasks::tick_task()).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
