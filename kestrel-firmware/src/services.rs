//! Collaborators seen by the UI
//!
//! The board has no packet radio wired yet, so the record lists stay
//! empty. Scans and the packet rate come from the sweep task.

use core::sync::atomic::Ordering;

use defmt::info;
use heapless::Vec;
use kestrel_core::traits::{
    AttackControl, AttackModes, DetailField, LabelError, LabelText, PacketSource, RecordCounts,
    RecordKind, ScanMode, ScanSource,
};

use crate::channels::{CHANNEL, PACKET_RATE, SCANNING, SCAN_PROGRESS, SCAN_REQUEST};

/// Packet rate samples kept for the monitor
const HISTORY_LEN: usize = 16;

/// Interval between packet rate samples
const SAMPLE_INTERVAL_MS: u32 = 1000;

pub struct DeviceServices {
    attack: Option<AttackModes>,
    history: Vec<u32, HISTORY_LEN>,
    last_sample_ms: u32,
}

impl DeviceServices {
    pub const fn new() -> Self {
        Self {
            attack: None,
            history: Vec::new(),
            last_sample_ms: 0,
        }
    }

    /// Record the packet rate once per sample interval
    pub fn sample(&mut self, now_ms: u32) {
        if now_ms.wrapping_sub(self.last_sample_ms) < SAMPLE_INTERVAL_MS {
            return;
        }
        self.last_sample_ms = now_ms;
        if self.history.is_full() {
            self.history.remove(0);
        }
        let _ = self.history.push(PACKET_RATE.load(Ordering::Relaxed));
    }
}

impl RecordCounts for DeviceServices {
    fn count(&self, _kind: RecordKind) -> usize {
        0
    }
}

impl ScanSource for DeviceServices {
    fn write_label(
        &self,
        _kind: RecordKind,
        _index: u16,
        _out: &mut LabelText,
    ) -> Result<(), LabelError> {
        Err(LabelError::NotFound)
    }

    fn write_detail(
        &self,
        _kind: RecordKind,
        _index: u16,
        _field: DetailField,
        _out: &mut LabelText,
    ) -> Result<(), LabelError> {
        Err(LabelError::NotFound)
    }

    fn is_selected(&self, _kind: RecordKind, _index: u16) -> bool {
        false
    }

    fn set_selected(&mut self, _kind: RecordKind, _index: u16, _selected: bool) {}

    fn start_scan(&mut self, mode: ScanMode) {
        // Visible to the UI before the sweep task picks the request up
        SCANNING.store(true, Ordering::Relaxed);
        SCAN_PROGRESS.store(0, Ordering::Relaxed);
        SCAN_REQUEST.signal(mode);
    }

    fn is_scanning(&self) -> bool {
        SCANNING.load(Ordering::Relaxed)
    }

    fn scan_progress(&self) -> u8 {
        SCAN_PROGRESS.load(Ordering::Relaxed)
    }
}

impl AttackControl for DeviceServices {
    fn start(&mut self, modes: AttackModes) {
        info!("attack requested: {}", modes);
        self.attack = Some(modes);
    }

    fn stop(&mut self) {
        info!("attack stopped");
        self.attack = None;
    }

    fn is_running(&self) -> bool {
        self.attack.is_some()
    }
}

impl PacketSource for DeviceServices {
    fn channel(&self) -> u8 {
        CHANNEL.load(Ordering::Relaxed)
    }

    fn packets_per_second(&self) -> u32 {
        PACKET_RATE.load(Ordering::Relaxed)
    }

    fn history(&self) -> &[u32] {
        &self.history
    }
}
