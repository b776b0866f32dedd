//! Test doubles for the unit tests

use core::cell::Cell;
use core::fmt::Write;

use crate::button::{ButtonId, ButtonInput, BUTTON_COUNT};
use crate::traits::{
    AttackControl, AttackModes, DetailField, LabelError, LabelText, PacketSource, RecordCounts,
    RecordKind, ScanMode, ScanSource,
};

/// Input reading a shared level
pub struct FakeInput<'a>(&'a Cell<bool>);

impl ButtonInput for FakeInput<'_> {
    fn is_pushed(&mut self) -> bool {
        self.0.get()
    }
}

/// Raw levels of all six buttons
pub struct Pins {
    levels: [Cell<bool>; BUTTON_COUNT],
}

impl Pins {
    pub fn new() -> Self {
        Self {
            levels: Default::default(),
        }
    }

    pub fn set(&self, id: ButtonId, pushed: bool) {
        self.levels[id.index()].set(pushed);
    }

    pub fn inputs(&self) -> [Option<FakeInput<'_>>; BUTTON_COUNT] {
        core::array::from_fn(|i| Some(FakeInput(&self.levels[i])))
    }
}

const MAX_RECORDS: usize = 8;

/// Scanner, attack engine and packet counter in one
#[derive(Default)]
pub struct FakeServices {
    pub counts: [usize; 4],
    pub selected: [[bool; MAX_RECORDS]; 4],
    pub scanning: bool,
    pub last_scan: Option<ScanMode>,
    pub running: bool,
    pub started_with: Option<AttackModes>,
    pub history: [u32; 6],
}

impl RecordCounts for FakeServices {
    fn count(&self, kind: RecordKind) -> usize {
        self.counts[kind.index()]
    }
}

impl ScanSource for FakeServices {
    fn write_label(
        &self,
        kind: RecordKind,
        index: u16,
        out: &mut LabelText,
    ) -> Result<(), LabelError> {
        if index as usize >= self.count(kind) {
            return Err(LabelError::NotFound);
        }
        write!(out, "{:?} {}", kind, index)?;
        Ok(())
    }

    fn write_detail(
        &self,
        kind: RecordKind,
        index: u16,
        field: DetailField,
        out: &mut LabelText,
    ) -> Result<(), LabelError> {
        if index as usize >= self.count(kind) {
            return Err(LabelError::NotFound);
        }
        write!(out, "{:?} {}", field, index)?;
        Ok(())
    }

    fn is_selected(&self, kind: RecordKind, index: u16) -> bool {
        self.selected[kind.index()]
            .get(index as usize)
            .copied()
            .unwrap_or(false)
    }

    fn set_selected(&mut self, kind: RecordKind, index: u16, selected: bool) {
        if let Some(flag) = self.selected[kind.index()].get_mut(index as usize) {
            *flag = selected;
        }
    }

    fn start_scan(&mut self, mode: ScanMode) {
        self.scanning = true;
        self.last_scan = Some(mode);
    }

    fn is_scanning(&self) -> bool {
        self.scanning
    }

    fn scan_progress(&self) -> u8 {
        42
    }
}

impl AttackControl for FakeServices {
    fn start(&mut self, modes: AttackModes) {
        self.running = true;
        self.started_with = Some(modes);
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

impl PacketSource for FakeServices {
    fn channel(&self) -> u8 {
        1
    }

    fn packets_per_second(&self) -> u32 {
        self.history[self.history.len() - 1]
    }

    fn history(&self) -> &[u32] {
        &self.history
    }
}
