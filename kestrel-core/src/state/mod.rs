//! Screen mode state machine
//!
//! Which screen is shown is a pure function of the current mode and an
//! event. Input handling, rendering and timers all key off the mode.

pub mod events;
pub mod machine;

pub use events::{ModeEvent, NavEvent};
pub use machine::ScreenMode;
