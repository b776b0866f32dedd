//! Recording frame
//!
//! A `DrawSurface` that keeps the strings of the frame being built instead
//! of rasterising them. Used by the host test suites and handy for dumping
//! screens over a debug link.

use heapless::{String, Vec};

use crate::backend::{DisplayError, DrawSurface};
use crate::glyph::{GlyphMetrics, MonoMetrics};

/// Maximum number of strings recorded per frame
pub const FRAME_MAX_OPS: usize = 16;

/// Maximum characters kept per recorded string
pub const OP_TEXT_LEN: usize = 48;

/// One `draw_string` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOp {
    /// Left edge in pixels (may be negative while scrolling)
    pub x: i16,
    /// Top edge in pixels
    pub y: i16,
    /// Text as drawn (truncated to `OP_TEXT_LEN`)
    pub text: String<OP_TEXT_LEN>,
}

/// Recording draw surface
#[derive(Debug, Clone)]
pub struct TextFrame {
    /// Strings of the frame under construction
    ops: Vec<DrawOp, FRAME_MAX_OPS>,
    /// Strings of the last committed frame
    committed: Vec<DrawOp, FRAME_MAX_OPS>,
    /// Number of committed frames
    frames: u32,
    /// Panel power state
    powered: bool,
    /// Panel size in pixels
    width: u16,
    height: u16,
    metrics: MonoMetrics,
}

impl Default for TextFrame {
    fn default() -> Self {
        Self::new(128, 64)
    }
}

impl TextFrame {
    /// Create an empty, powered frame of the given pixel size
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            ops: Vec::new(),
            committed: Vec::new(),
            frames: 0,
            powered: true,
            width,
            height,
            metrics: MonoMetrics::default(),
        }
    }

    /// Number of frames committed so far
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Whether the panel is powered
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    /// Strings of the last committed frame
    pub fn ops(&self) -> &[DrawOp] {
        &self.committed
    }

    /// Text drawn at row top `y` in the last committed frame
    pub fn text_at(&self, y: i16) -> Option<&str> {
        self.committed
            .iter()
            .find(|op| op.y == y)
            .map(|op| op.text.as_str())
    }

    /// Check if any string of the last committed frame contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.committed.iter().any(|op| op.text.contains(needle))
    }

    /// Get all strings of the last committed frame
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.committed.iter().map(|op| op.text.as_str())
    }
}

impl DrawSurface for TextFrame {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.ops.clear();
        Ok(())
    }

    fn draw_string(&mut self, x: i16, y: i16, text: &str) -> Result<(), DisplayError> {
        let mut kept: String<OP_TEXT_LEN> = String::new();
        for ch in text.chars() {
            if kept.push(ch).is_err() {
                break;
            }
        }
        self.ops
            .push(DrawOp { x, y, text: kept })
            .map_err(|_| DisplayError::BufferOverflow)
    }

    fn commit(&mut self) -> Result<(), DisplayError> {
        self.committed = self.ops.clone();
        self.frames = self.frames.wrapping_add(1);
        Ok(())
    }

    fn set_power(&mut self, on: bool) -> Result<(), DisplayError> {
        self.powered = on;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}

impl GlyphMetrics for TextFrame {
    fn glyph(&self, ch: char) -> Option<crate::glyph::Glyph> {
        self.metrics.glyph(ch)
    }

    fn fallback_width(&self) -> u8 {
        self.metrics.fallback_width()
    }

    fn line_height(&self) -> u8 {
        self.metrics.line_height()
    }
}
