//! Collaborator traits
//!
//! These traits define the interface between the UI and the radio side of
//! the device: scanner, attack engine and packet counter.

pub mod attack;
pub mod packets;
pub mod scan;

pub use attack::{AttackControl, AttackKind, AttackModes};
pub use packets::PacketSource;
pub use scan::{
    DetailField, LabelError, LabelText, RecordCounts, RecordKind, ScanMode, ScanSource, LABEL_LEN,
};

/// Everything the UI controller talks to
pub trait Services: ScanSource + AttackControl + PacketSource {}

impl<T: ScanSource + AttackControl + PacketSource> Services for T {}
