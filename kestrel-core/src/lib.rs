//! Board-agnostic UI logic for the Kestrel pocket Wi-Fi tool
//!
//! This crate contains everything that decides *what* the display shows and
//! *when*, without depending on the concrete board:
//!
//! - Debounced buttons with tap/hold classification
//! - The menu arena, its nodes and navigation
//! - The screen mode state machine
//! - The fixed-rate frame scheduler and per-mode renderers
//! - The UI controller tying it all together
//! - Traits for the scan, attack and packet collaborators
//!
//! Everything is driven from a single cooperative `update()` call; nothing
//! blocks and nothing allocates.

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod button;
pub mod config;
pub mod menu;
pub mod state;
pub mod traits;
pub mod ui;

#[cfg(test)]
mod testing;

pub use ui::{FrameInfo, UiController};
