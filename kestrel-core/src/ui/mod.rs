//! UI runtime
//!
//! - `input`: button edges to navigation events, per screen mode
//! - `layout`: the device menus
//! - `render`: per-mode screens
//! - `scheduler`: frame pacing and label scrolling
//! - `controller`: owns all of the above

pub mod controller;
pub mod input;
pub mod layout;
pub mod render;
pub mod scheduler;

pub use controller::{UiController, MAX_SETUP_ERRORS};
pub use layout::device_tree;
pub use render::{FrameInfo, Renderer};
pub use scheduler::{FrameScheduler, ScrollState};
