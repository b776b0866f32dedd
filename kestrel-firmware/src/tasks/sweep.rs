//! Channel sweep
//!
//! Answers scan requests by stepping through the 2.4 GHz channels and
//! publishing progress for the scan screen.

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_time::{Duration, Timer};

use crate::channels::{CHANNEL, SCANNING, SCAN_PROGRESS, SCAN_REQUEST};

/// Channels covered by one sweep
const CHANNELS: u8 = 13;

/// Dwell time per channel
const DWELL_MS: u64 = 200;

#[embassy_executor::task]
pub async fn sweep_task() {
    info!("Sweep task started");

    loop {
        let mode = SCAN_REQUEST.wait().await;
        info!("Sweep started: {}", mode);
        SCANNING.store(true, Ordering::Relaxed);

        for ch in 1..=CHANNELS {
            CHANNEL.store(ch, Ordering::Relaxed);
            SCAN_PROGRESS.store(((ch - 1) as u16 * 100 / CHANNELS as u16) as u8, Ordering::Relaxed);
            Timer::after(Duration::from_millis(DWELL_MS)).await;
        }

        SCAN_PROGRESS.store(100, Ordering::Relaxed);
        SCANNING.store(false, Ordering::Relaxed);
        info!("Sweep finished");
    }
}
