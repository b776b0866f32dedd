//! Scan results
//!
//! The UI never owns scan data. It asks the scanner how many records of each
//! kind exist and has it write labels into fixed buffers on demand.

use heapless::String;

/// Capacity of a rendered label
pub const LABEL_LEN: usize = 40;

/// Buffer a label is written into
pub type LabelText = String<LABEL_LEN>;

/// Errors that can occur while producing a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LabelError {
    /// The record no longer exists
    NotFound,
    /// The text did not fit into the label buffer
    Overflow,
}

impl From<core::fmt::Error> for LabelError {
    fn from(_: core::fmt::Error) -> Self {
        LabelError::Overflow
    }
}

/// Kind of scan record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RecordKind {
    /// Access point found by a scan
    AccessPoint,
    /// Client station found by a scan
    Station,
    /// User-assigned name for a MAC address
    Name,
    /// SSID queued for beacon/probe attacks
    Ssid,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::AccessPoint,
        RecordKind::Station,
        RecordKind::Name,
        RecordKind::Ssid,
    ];

    /// Position in `ALL` and in per-kind arrays
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Per-record detail shown on a record's own menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DetailField {
    /// SSID, name or MAC, whatever identifies the record best
    Title,
    Mac,
    Channel,
    Rssi,
    Encryption,
    Vendor,
    /// Network a station is associated with
    Network,
    /// Packets seen from the record
    Packets,
}

/// What a scan looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanMode {
    AccessPoints,
    Stations,
    /// Access points first, then stations
    All,
}

/// Record counts, the only thing menu builders may look at
pub trait RecordCounts {
    /// Number of records of `kind`
    fn count(&self, kind: RecordKind) -> usize;
}

/// Scanner and record store
///
/// Indices are positional and may go stale between frames when records
/// expire; implementations report that as `LabelError::NotFound` and ignore
/// out-of-range selection changes.
pub trait ScanSource: RecordCounts {
    /// Write the one-line list label of a record
    fn write_label(
        &self,
        kind: RecordKind,
        index: u16,
        out: &mut LabelText,
    ) -> Result<(), LabelError>;

    /// Write a single detail of a record
    fn write_detail(
        &self,
        kind: RecordKind,
        index: u16,
        field: DetailField,
        out: &mut LabelText,
    ) -> Result<(), LabelError>;

    /// Check if a record is selected as an attack target
    fn is_selected(&self, kind: RecordKind, index: u16) -> bool;

    /// Select or deselect a record
    fn set_selected(&mut self, kind: RecordKind, index: u16, selected: bool);

    /// Start a scan; returns immediately
    fn start_scan(&mut self, mode: ScanMode);

    /// Check if a scan is still running
    fn is_scanning(&self) -> bool;

    /// Progress of the running scan, 0-100
    fn scan_progress(&self) -> u8;
}
