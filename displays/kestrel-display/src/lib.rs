//! Display abstraction traits and shared components for Kestrel
//!
//! This crate provides:
//! - `DrawSurface` trait for pixel displays that can place strings
//! - `GlyphMetrics` trait for looking up glyph widths and bitmap offsets
//! - `TextFrame`, a recording surface used by host tests and tooling
//!
//! # Architecture
//!
//! The UI core decides *what* to draw and *when*. It talks to the panel only
//! through `DrawSurface`, so the same rendering code drives the SH1106 OLED
//! on the device and the recording frame on the host.
//!
//! Glyph rasterisation is not done here. A surface implementation brings its
//! own font; the core only needs the metrics to measure labels for
//! horizontal scrolling.

#![no_std]

pub mod backend;
pub mod frame;
pub mod glyph;

// Re-export key types
pub use backend::{DisplayError, DrawSurface};
pub use frame::{DrawOp, TextFrame, FRAME_MAX_OPS, OP_TEXT_LEN};
pub use glyph::{Glyph, GlyphMetrics, MonoMetrics};
