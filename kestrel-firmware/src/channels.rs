//! Inter-task communication
//!
//! The UI task owns the services; the sweep task publishes what it sees
//! through atomics and takes requests through signals.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicBool, AtomicU32, AtomicU8};

use kestrel_core::traits::ScanMode;

/// Scan requested from the menu
pub static SCAN_REQUEST: Signal<CriticalSectionRawMutex, ScanMode> = Signal::new();

/// True while a sweep is running
pub static SCANNING: AtomicBool = AtomicBool::new(false);

/// Sweep progress, 0-100
pub static SCAN_PROGRESS: AtomicU8 = AtomicU8::new(0);

/// Channel the radio is tuned to
pub static CHANNEL: AtomicU8 = AtomicU8::new(1);

/// Packets seen during the last second
pub static PACKET_RATE: AtomicU32 = AtomicU32::new(0);
