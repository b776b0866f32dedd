//! UI configuration
//!
//! Timings are in milliseconds, geometry in pixels.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::button::{ButtonId, ButtonTiming};
use crate::menu::MenuId;

/// Minimum time between two accepted button transitions
pub const BUTTON_DEBOUNCE_MS: u32 = 280;

/// Press duration after which a press counts as a hold
pub const BUTTON_HOLD_MS: u32 = 800;

/// Minimum time between two frames
pub const DRAW_INTERVAL_MS: u32 = 100;

/// Characters shown for a row that is not selected
pub const CHARS_PER_LINE: u8 = 17;

/// Horizontal scroll step of the selected row, per frame
pub const SCROLL_SPEED: u16 = 5;

/// How long the intro screen stays up
pub const INTRO_TIME_MS: u32 = 2500;

/// Panel size
pub const DISPLAY_WIDTH: u16 = 128;
pub const DISPLAY_HEIGHT: u16 = 64;

/// Height of one menu row
pub const LINE_HEIGHT: u8 = 12;

/// Number of menu rows on screen
pub const ROWS_VISIBLE: u8 = 5;

/// Configuration errors
///
/// None of these are fatal: the affected part degrades and the rest of the
/// UI keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// An enabled button has no input attached; the button stays inert
    MissingInput(ButtonId),
    /// A menu has no build function; it stays empty
    MissingBuild(MenuId),
    /// Debounce/hold/draw timings are inconsistent
    InvalidTiming,
    /// Rows do not fit on the panel
    InvalidGeometry,
}

/// UI timing and layout configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UiConfig {
    /// Debounce window
    pub debounce_ms: u32,
    /// Hold threshold
    pub hold_ms: u32,
    /// Frame interval
    pub draw_interval_ms: u32,
    /// Intro screen duration
    pub intro_time_ms: u32,
    /// Selected row scroll step per frame
    pub scroll_speed: u16,
    /// Truncation of rows that are not selected
    pub chars_per_line: u8,
    /// Row height
    pub line_height: u8,
    /// Rows on screen
    pub rows_visible: u8,
    /// Panel width
    pub display_width: u16,
    /// Panel height
    pub display_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            debounce_ms: BUTTON_DEBOUNCE_MS,
            hold_ms: BUTTON_HOLD_MS,
            draw_interval_ms: DRAW_INTERVAL_MS,
            intro_time_ms: INTRO_TIME_MS,
            scroll_speed: SCROLL_SPEED,
            chars_per_line: CHARS_PER_LINE,
            line_height: LINE_HEIGHT,
            rows_visible: ROWS_VISIBLE,
            display_width: DISPLAY_WIDTH,
            display_height: DISPLAY_HEIGHT,
        }
    }
}

impl UiConfig {
    /// Check timings and geometry for consistency
    ///
    /// A hold threshold at or below the debounce window could never be told
    /// apart from a tap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hold_ms <= self.debounce_ms || self.draw_interval_ms == 0 {
            return Err(ConfigError::InvalidTiming);
        }
        let rows_px = self.rows_visible as u16 * self.line_height as u16;
        if self.rows_visible == 0
            || self.line_height == 0
            || self.chars_per_line == 0
            || rows_px > self.display_height
        {
            return Err(ConfigError::InvalidGeometry);
        }
        Ok(())
    }

    /// Button timings derived from this config
    pub fn button_timing(&self) -> ButtonTiming {
        ButtonTiming {
            debounce_ms: self.debounce_ms,
            hold_ms: self.hold_ms,
        }
    }
}
