//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod sweep;
pub mod ui;

pub use sweep::sweep_task;
pub use ui::{ui_task, UiParts};
