//! Glyph metrics
//!
//! The font bitmap itself belongs to the surface implementation. The UI only
//! needs to know how wide a string will be.

/// Metrics of a single glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    /// Advance width in pixels
    pub width: u8,
    /// Offset of the glyph bitmap inside the font data
    pub offset: u16,
}

/// Glyph metric lookup keyed by character
pub trait GlyphMetrics {
    /// Look up a glyph, `None` if the font has no bitmap for `ch`
    fn glyph(&self, ch: char) -> Option<Glyph>;

    /// Width used for characters the font cannot draw
    fn fallback_width(&self) -> u8;

    /// Line height in pixels
    fn line_height(&self) -> u8;

    /// Width of `text` in pixels
    fn text_width(&self, text: &str) -> u16 {
        text.chars()
            .map(|ch| {
                self.glyph(ch)
                    .map(|g| g.width)
                    .unwrap_or_else(|| self.fallback_width()) as u16
            })
            .fold(0u16, u16::saturating_add)
    }
}

/// Metrics of a fixed-width ASCII font
///
/// Glyphs are stored back to back starting at `first`, each taking
/// `bytes_per_glyph` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MonoMetrics {
    /// Advance width of every glyph
    pub char_width: u8,
    /// Line height
    pub char_height: u8,
    /// First character present in the font
    pub first: char,
    /// Last character present in the font
    pub last: char,
    /// Size of one glyph bitmap
    pub bytes_per_glyph: u16,
}

impl MonoMetrics {
    /// Printable ASCII font with the given cell size
    pub const fn ascii(char_width: u8, char_height: u8) -> Self {
        let bytes_per_glyph = char_width as u16 * ((char_height as u16 + 7) / 8);
        Self {
            char_width,
            char_height,
            first: ' ',
            last: '~',
            bytes_per_glyph,
        }
    }
}

impl Default for MonoMetrics {
    fn default() -> Self {
        Self::ascii(6, 12)
    }
}

impl GlyphMetrics for MonoMetrics {
    fn glyph(&self, ch: char) -> Option<Glyph> {
        if ch < self.first || ch > self.last {
            return None;
        }
        let index = ch as u32 - self.first as u32;
        Some(Glyph {
            width: self.char_width,
            offset: (index as u16).saturating_mul(self.bytes_per_glyph),
        })
    }

    fn fallback_width(&self) -> u8 {
        self.char_width
    }

    fn line_height(&self) -> u8 {
        self.char_height
    }
}
