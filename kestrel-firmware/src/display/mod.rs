//! OLED display
//!
//! `FrameBuffer` is the surface the UI draws into. It only touches RAM, so
//! the synchronous `DrawSurface` calls never wait on the bus; the UI task
//! pushes the finished frame to the panel with the async `Sh1106` driver.

pub mod sh1106;

use core::convert::Infallible;

use embedded_graphics::mono_font::ascii::FONT_6X12;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use kestrel_display::{DisplayError, DrawSurface, Glyph, GlyphMetrics, MonoMetrics};

pub use sh1106::Sh1106;

/// Panel width in pixels
pub const WIDTH: usize = 128;
/// Panel height in pixels
pub const HEIGHT: usize = 64;
/// 8-pixel high pages
pub const PAGES: usize = HEIGHT / 8;

/// Metrics matching `FONT_6X12`
const METRICS: MonoMetrics = MonoMetrics::ascii(6, 12);

/// Work the UI task still has to send to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pending {
    /// Panel power change
    pub power: Option<bool>,
    /// A committed frame
    pub frame: bool,
}

/// 1 bit per pixel frame buffer, organized as SH1106 pages
pub struct FrameBuffer {
    pages: [[u8; WIDTH]; PAGES],
    pending: Pending,
}

impl FrameBuffer {
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
            pending: Pending {
                power: None,
                frame: false,
            },
        }
    }

    /// One page of pixel columns
    pub fn page(&self, page: usize) -> &[u8; WIDTH] {
        &self.pages[page]
    }

    /// Take the work queued by `commit()` and `set_power()`
    pub fn take_pending(&mut self) -> Pending {
        core::mem::take(&mut self.pending)
    }

    fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        let bit = 1u8 << (y % 8);
        let column = &mut self.pages[y / 8][x];
        if on {
            *column |= bit;
        } else {
            *column &= !bit;
        }
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // Scrolled labels start left of the panel
            if point.x >= 0 && point.x < WIDTH as i32 && point.y >= 0 && point.y < HEIGHT as i32 {
                self.set_pixel(point.x as usize, point.y as usize, color.is_on());
            }
        }
        Ok(())
    }
}

impl DrawSurface for FrameBuffer {
    fn clear(&mut self) -> Result<(), DisplayError> {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
        Ok(())
    }

    fn draw_string(&mut self, x: i16, y: i16, text: &str) -> Result<(), DisplayError> {
        let style = MonoTextStyle::new(&FONT_6X12, BinaryColor::On);
        let origin = Point::new(x as i32, y as i32);
        let _ = Text::with_baseline(text, origin, style, Baseline::Top).draw(self);
        Ok(())
    }

    fn commit(&mut self) -> Result<(), DisplayError> {
        self.pending.frame = true;
        Ok(())
    }

    fn set_power(&mut self, on: bool) -> Result<(), DisplayError> {
        self.pending.power = Some(on);
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        (WIDTH as u16, HEIGHT as u16)
    }

    /// Not ready while the last frame is still waiting for the bus
    fn is_ready(&self) -> bool {
        !self.pending.frame
    }
}

impl GlyphMetrics for FrameBuffer {
    fn glyph(&self, ch: char) -> Option<Glyph> {
        METRICS.glyph(ch)
    }

    fn fallback_width(&self) -> u8 {
        METRICS.fallback_width()
    }

    fn line_height(&self) -> u8 {
        METRICS.line_height()
    }
}
