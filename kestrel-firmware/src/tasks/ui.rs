//! UI task
//!
//! Drives the controller from a fixed ticker and pushes whatever it queued
//! on the frame buffer to the panel.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Duration, Instant, Ticker};
use kestrel_core::UiController;

use crate::buttons::PinInput;
use crate::display::{FrameBuffer, Sh1106};
use crate::services::DeviceServices;

/// Input poll interval
pub const TICK_MS: u64 = 10;

/// Everything the UI task owns
pub struct UiParts {
    pub ui: UiController<PinInput>,
    pub services: DeviceServices,
    pub panel: Sh1106<I2c<'static, I2C0, Async>>,
}

#[embassy_executor::task]
pub async fn ui_task(parts: UiParts) {
    info!("UI task started");

    let UiParts {
        mut ui,
        mut services,
        mut panel,
    } = parts;
    let mut frame = FrameBuffer::new();

    let problems = ui.setup(&services);
    for problem in problems.iter() {
        warn!("setup: {}", problem);
    }
    ui.on(Instant::now().as_millis() as u32);

    let mut ticker = Ticker::every(Duration::from_millis(TICK_MS));
    loop {
        ticker.next().await;

        // Wraps after ~49 days; all timing uses wrapping arithmetic
        let now_ms = Instant::now().as_millis() as u32;
        services.sample(now_ms);
        ui.update(now_ms, &mut services, &mut frame);

        let pending = frame.take_pending();
        if let Some(on) = pending.power {
            if let Err(e) = panel.set_display_on(on).await {
                warn!("Display power change failed: {:?}", e);
            }
        }
        if pending.frame {
            if let Err(e) = panel.flush(&frame).await {
                warn!("Display flush failed: {:?}", e);
            }
        }
    }
}
