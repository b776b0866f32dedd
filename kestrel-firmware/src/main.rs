//! Kestrel Firmware
//!
//! Pocket Wi-Fi tool UI for RP2040 boards with an SH1106 OLED on I2C0
//! (GP4 = SDA, GP5 = SCL) and six push buttons to ground.

#![no_std]
#![no_main]

mod buttons;
mod channels;
mod display;
mod services;
mod tasks;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use kestrel_core::button::ButtonSet;
use kestrel_core::config::{ButtonConfig, UiConfig};
use kestrel_core::UiController;
use {defmt_rtt as _, panic_probe as _};

use crate::buttons::PinInput;
use crate::display::Sh1106;
use crate::services::DeviceServices;
use crate::tasks::UiParts;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// I2C clock for the panel
const I2C_FREQUENCY: u32 = 400_000;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Kestrel firmware starting...");

    let p = embassy_rp::init(Default::default());

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY;
    let i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c_config);

    let mut panel = Sh1106::new(i2c);
    match panel.init().await {
        Ok(()) => info!("OLED initialized"),
        // The UI still runs; flushes report NotInitialized
        Err(e) => error!("Failed to initialize display: {:?}", e),
    }

    // Up, Down, Left, Right, A, B on GP10-GP15
    let pin = |pin| Some(PinInput::new(pin));
    let inputs = [
        pin(Input::new(p.PIN_10, Pull::Up)),
        pin(Input::new(p.PIN_11, Pull::Up)),
        pin(Input::new(p.PIN_12, Pull::Up)),
        pin(Input::new(p.PIN_13, Pull::Up)),
        pin(Input::new(p.PIN_14, Pull::Up)),
        pin(Input::new(p.PIN_15, Pull::Up)),
    ];
    let buttons = ButtonSet::new(inputs, &ButtonConfig::all());

    let parts = UiParts {
        ui: UiController::new(UiConfig::default(), buttons),
        services: DeviceServices::new(),
        panel,
    };

    unwrap!(spawner.spawn(tasks::sweep_task()));
    unwrap!(spawner.spawn(tasks::ui_task(parts)));

    info!("All tasks spawned");
}
