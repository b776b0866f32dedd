//! Shared fakes for the integration tests

#![allow(dead_code)]

use std::cell::Cell;
use std::fmt::Write;
use std::rc::Rc;

use kestrel_core::button::{ButtonId, ButtonInput, ButtonSet, BUTTON_COUNT};
use kestrel_core::config::{ButtonConfig, UiConfig};
use kestrel_core::traits::{
    AttackControl, AttackModes, DetailField, LabelError, LabelText, PacketSource, RecordCounts,
    RecordKind, ScanMode, ScanSource,
};
use kestrel_core::UiController;
use kestrel_display::TextFrame;

/// Button input backed by a shared level
#[derive(Clone, Default)]
pub struct FakeInput(pub Rc<Cell<bool>>);

impl ButtonInput for FakeInput {
    fn is_pushed(&mut self) -> bool {
        self.0.get()
    }
}

/// Scan records with optional per-record label overrides
#[derive(Default)]
pub struct FakeServices {
    pub counts: [usize; 4],
    pub selected: Vec<(RecordKind, u16)>,
    pub scanning: bool,
    pub scans: Vec<ScanMode>,
    pub running: bool,
    pub starts: Vec<AttackModes>,
    pub pps: u32,
    pub history: Vec<u32>,
    /// Index of an access point whose label cannot be produced
    pub broken_label: Option<u16>,
    /// Label used for every access point instead of the generated one
    pub ap_label: Option<&'static str>,
}

impl FakeServices {
    pub fn with_counts(access_points: usize, stations: usize) -> Self {
        let mut services = Self::default();
        services.counts[RecordKind::AccessPoint.index()] = access_points;
        services.counts[RecordKind::Station.index()] = stations;
        services
    }
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
        if kind == RecordKind::AccessPoint {
            if self.broken_label == Some(index) {
                return Err(LabelError::Overflow);
            }
            if let Some(label) = self.ap_label {
                return out.push_str(label).map_err(|_| LabelError::Overflow);
            }
        }
        write!(out, "{:?}-{}", kind, index)?;
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
        write!(out, "{:?}:{}", field, index)?;
        Ok(())
    }

    fn is_selected(&self, kind: RecordKind, index: u16) -> bool {
        self.selected.contains(&(kind, index))
    }

    fn set_selected(&mut self, kind: RecordKind, index: u16, selected: bool) {
        self.selected.retain(|&entry| entry != (kind, index));
        if selected {
            self.selected.push((kind, index));
        }
    }

    fn start_scan(&mut self, mode: ScanMode) {
        self.scanning = true;
        self.scans.push(mode);
    }

    fn is_scanning(&self) -> bool {
        self.scanning
    }

    fn scan_progress(&self) -> u8 {
        if self.scanning {
            50
        } else {
            100
        }
    }
}

impl AttackControl for FakeServices {
    fn start(&mut self, modes: AttackModes) {
        self.running = true;
        self.starts.push(modes);
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
        6
    }

    fn packets_per_second(&self) -> u32 {
        self.pps
    }

    fn history(&self) -> &[u32] {
        &self.history
    }
}

/// A controller with all six buttons, its pins, services and a frame
pub struct Rig {
    pub ui: UiController<FakeInput>,
    pub pins: [FakeInput; BUTTON_COUNT],
    pub services: FakeServices,
    pub frame: TextFrame,
    pub now: u32,
}

impl Rig {
    /// Powered-on controller showing the main menu
    pub fn new(services: FakeServices) -> Self {
        let pins: [FakeInput; BUTTON_COUNT] = Default::default();
        let inputs = std::array::from_fn(|i| Some(pins[i].clone()));
        let buttons = ButtonSet::new(inputs, &ButtonConfig::all());
        let mut ui = UiController::new(UiConfig::default(), buttons);
        assert!(ui.setup(&services).is_empty());

        let mut rig = Self {
            ui,
            pins,
            services,
            frame: TextFrame::default(),
            now: 1_000,
        };
        rig.ui.on(rig.now);
        rig.advance(3_000);
        rig
    }

    /// Run `update()` every 10ms for `ms` milliseconds
    pub fn advance(&mut self, ms: u32) {
        for _ in 0..ms / 10 {
            self.now += 10;
            self.ui.update(self.now, &mut self.services, &mut self.frame);
        }
    }

    pub fn set(&mut self, id: ButtonId, pushed: bool) {
        self.pins[id.index()].0.set(pushed);
    }

    /// Press and release with debounce gaps on both sides
    pub fn tap(&mut self, id: ButtonId) {
        self.set(id, true);
        self.advance(300);
        self.set(id, false);
        self.advance(300);
    }

    /// Press, keep pushed for `ms`, release
    pub fn hold(&mut self, id: ButtonId, ms: u32) {
        self.set(id, true);
        self.advance(ms);
        self.set(id, false);
        self.advance(300);
    }
}
