//! Per-mode screen rendering
//!
//! The renderer only reads state. Each method draws the strings of one
//! screen; clearing and committing the frame is up to the caller.

use core::fmt::Write;

use kestrel_display::{DisplayError, DrawSurface, GlyphMetrics};

use crate::button::{ButtonId, ButtonInput, ButtonSet};
use crate::config::UiConfig;
use crate::menu::{LabelContext, MenuTree};
use crate::state::ScreenMode;
use crate::traits::{AttackControl, LabelText, PacketSource, RecordKind, ScanSource};

/// Marker in front of the selected row
pub const CURSOR: &str = ">";

/// Drawn in place of a menu without rows
pub const EMPTY_PLACEHOLDER: &str = "(empty)";

/// Gap between the cursor column and the labels
const CURSOR_GAP_PX: u16 = 2;

/// Number of history samples on the packet monitor
const HISTORY_ROWS: usize = 4;

/// What a drawn frame looked like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameInfo {
    /// Mode the frame was drawn for
    pub mode: ScreenMode,
    /// Full width of the selected label, 0 outside the menu
    pub selected_label_px: u16,
    /// Width available to a label
    pub row_px: u16,
}

/// Screen renderer
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    config: UiConfig,
}

impl Renderer {
    pub const fn new(config: UiConfig) -> Self {
        Self { config }
    }

    /// Top edge of a row
    pub fn row_y(&self, row: usize) -> i16 {
        (row * self.config.line_height as usize) as i16
    }

    /// Left edge of the labels
    pub fn label_x<M: GlyphMetrics + ?Sized>(&self, metrics: &M) -> u16 {
        metrics.text_width(CURSOR) + CURSOR_GAP_PX
    }

    /// Width available to a label
    pub fn row_px<M: GlyphMetrics + ?Sized>(&self, metrics: &M) -> u16 {
        self.config.display_width.saturating_sub(self.label_x(metrics))
    }

    /// Draw the current menu; returns the width of the selected label
    ///
    /// Labels that fail to render leave their row blank.
    pub fn menu<S, D>(
        &self,
        tree: &MenuTree,
        ctx: &LabelContext<'_, S>,
        scroll_px: u16,
        surface: &mut D,
    ) -> Result<u16, DisplayError>
    where
        S: ScanSource + AttackControl + ?Sized,
        D: DrawSurface + GlyphMetrics,
    {
        let x = self.label_x(surface) as i16;
        let Some(menu) = tree.current_menu().filter(|m| !m.is_empty()) else {
            surface.draw_string(x, 0, EMPTY_PLACEHOLDER)?;
            return Ok(0);
        };

        let rows = self.config.rows_visible as usize;
        let selected = menu.selected();
        let first = window_start(selected, menu.len(), rows);
        let mut selected_px = 0;

        let window = menu.nodes().iter().enumerate().skip(first).take(rows);
        for (row, (index, node)) in window.enumerate() {
            let mut text = LabelText::new();
            if node.write_label(ctx, &mut text).is_err() {
                text.clear();
            }
            let y = self.row_y(row);
            if index == selected {
                selected_px = surface.text_width(&text);
                let visible = scrolled(&text, scroll_px, &*surface);
                surface.draw_string(x, y, visible)?;
                surface.draw_string(0, y, CURSOR)?;
            } else {
                let visible = truncate_chars(&text, self.config.chars_per_line as usize);
                surface.draw_string(x, y, visible)?;
            }
        }
        Ok(selected_px)
    }

    /// Splash screen
    pub fn intro<D>(&self, surface: &mut D) -> Result<(), DisplayError>
    where
        D: DrawSurface + GlyphMetrics,
    {
        self.centered(surface, 0, "KESTREL")?;
        self.centered(surface, self.row_y(1), concat!("v", env!("CARGO_PKG_VERSION")))?;
        self.centered(surface, self.row_y(3), "pocket wifi tool")
    }

    /// Scan progress and what was found so far
    pub fn loading_scan<S, D>(&self, services: &S, surface: &mut D) -> Result<(), DisplayError>
    where
        S: ScanSource + ?Sized,
        D: DrawSurface + GlyphMetrics,
    {
        self.centered(surface, 0, "SCANNING")?;

        let mut line = LabelText::new();
        let _ = write!(line, "{}%", services.scan_progress().min(100));
        self.centered(surface, self.row_y(1), &line)?;

        line.clear();
        let _ = write!(line, "APs: {}", services.count(RecordKind::AccessPoint));
        surface.draw_string(0, self.row_y(2), &line)?;

        line.clear();
        let _ = write!(line, "Stations: {}", services.count(RecordKind::Station));
        surface.draw_string(0, self.row_y(3), &line)
    }

    /// Channel, packet rate and the most recent rates as bars
    pub fn packet_monitor<S, D>(&self, services: &S, surface: &mut D) -> Result<(), DisplayError>
    where
        S: PacketSource + ?Sized,
        D: DrawSurface + GlyphMetrics,
    {
        let pps = services.packets_per_second();
        let mut line = LabelText::new();
        let _ = write!(line, "CH {}  {} pkt/s", services.channel(), pps);
        surface.draw_string(0, 0, &line)?;

        let history = services.history();
        let recent = &history[history.len().saturating_sub(HISTORY_ROWS)..];
        let peak = recent.iter().copied().fold(pps, u32::max).max(1);
        let width = self.config.chars_per_line as u64;

        for (row, &sample) in recent.iter().enumerate() {
            line.clear();
            let filled = sample as u64 * width / peak as u64;
            for _ in 0..filled {
                let _ = line.push('#');
            }
            surface.draw_string(0, self.row_y(row + 1), &line)?;
        }
        Ok(())
    }

    /// Live state of every button
    pub fn button_test<I, D>(
        &self,
        buttons: &ButtonSet<I>,
        surface: &mut D,
    ) -> Result<(), DisplayError>
    where
        I: ButtonInput,
        D: DrawSurface + GlyphMetrics,
    {
        let pairs = [
            (ButtonId::Up, ButtonId::Down),
            (ButtonId::Left, ButtonId::Right),
            (ButtonId::A, ButtonId::B),
        ];
        let state = |id: ButtonId| {
            let button = buttons.get(id);
            if !button.is_enabled() {
                "-"
            } else if button.is_pushed() {
                "ON"
            } else {
                "off"
            }
        };

        let mut line = LabelText::new();
        for (row, (left, right)) in pairs.into_iter().enumerate() {
            line.clear();
            let _ = write!(
                line,
                "{}:{} {}:{}",
                left.name(),
                state(left),
                right.name(),
                state(right)
            );
            surface.draw_string(0, self.row_y(row), &line)?;
        }
        surface.draw_string(0, self.row_y(4), "hold LEFT: exit")
    }

    fn centered<D>(&self, surface: &mut D, y: i16, text: &str) -> Result<(), DisplayError>
    where
        D: DrawSurface + GlyphMetrics,
    {
        let width = surface.text_width(text);
        let x = self.config.display_width.saturating_sub(width) / 2;
        surface.draw_string(x as i16, y, text)
    }
}

/// First node shown so that the selected one stays on screen
pub fn window_start(selected: usize, len: usize, rows: usize) -> usize {
    if len <= rows {
        return 0;
    }
    selected.saturating_sub(rows / 2).min(len - rows)
}

/// Drop leading characters covered by a scroll offset
fn scrolled<'t, M: GlyphMetrics + ?Sized>(text: &'t str, offset_px: u16, metrics: &M) -> &'t str {
    let mut skipped = 0u16;
    for (i, ch) in text.char_indices() {
        let width = metrics
            .glyph(ch)
            .map_or_else(|| metrics.fallback_width(), |g| g.width) as u16;
        if skipped + width > offset_px {
            return &text[i..];
        }
        skipped += width;
    }
    ""
}

/// First `max` characters of `text`
fn truncate_chars(text: &str, max: usize) -> &str {
    text.char_indices().nth(max).map_or(text, |(i, _)| &text[..i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use kestrel_display::MonoMetrics;

    #[test]
    fn test_window_start() {
        assert_eq!(window_start(0, 3, 5), 0);
        assert_eq!(window_start(4, 5, 5), 0);
        assert_eq!(window_start(0, 10, 5), 0);
        assert_eq!(window_start(2, 10, 5), 0);
        assert_eq!(window_start(3, 10, 5), 1);
        assert_eq!(window_start(9, 10, 5), 5);
    }

    #[test]
    fn test_scrolled_skips_whole_glyphs() {
        let metrics = MonoMetrics::ascii(6, 12);
        assert_eq!(scrolled("ABCDEF", 0, &metrics), "ABCDEF");
        assert_eq!(scrolled("ABCDEF", 5, &metrics), "ABCDEF");
        assert_eq!(scrolled("ABCDEF", 6, &metrics), "BCDEF");
        assert_eq!(scrolled("ABCDEF", 13, &metrics), "CDEF");
        assert_eq!(scrolled("AB", 40, &metrics), "");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("SHORT", 17), "SHORT");
        assert_eq!(truncate_chars("ABCDEFGHIJKLMNOPQRSTUVWXYZ", 17), "ABCDEFGHIJKLMNOPQ");
    }

    #[test]
    fn test_row_geometry() {
        let renderer = Renderer::new(UiConfig::default());
        let metrics = MonoMetrics::ascii(6, 12);
        assert_eq!(renderer.row_y(0), 0);
        assert_eq!(renderer.row_y(4), 48);
        assert_eq!(renderer.label_x(&metrics), 8);
        assert_eq!(renderer.row_px(&metrics), 120);
    }
}
