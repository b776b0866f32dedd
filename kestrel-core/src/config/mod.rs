//! Configuration types
//!
//! Timing and geometry defaults for the UI plus the description of which
//! buttons a board actually has.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
