//! Frame pacing and selected-row scrolling

/// Decides when the next frame is due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameScheduler {
    interval_ms: u32,
    last_draw_ms: Option<u32>,
}

impl FrameScheduler {
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_draw_ms: None,
        }
    }

    /// Check if a frame is due at `now_ms`
    ///
    /// The first frame is always due.
    pub fn is_due(&self, now_ms: u32) -> bool {
        match self.last_draw_ms {
            Some(last) => now_ms.wrapping_sub(last) >= self.interval_ms,
            None => true,
        }
    }

    /// Record that a frame was drawn
    pub fn mark_drawn(&mut self, now_ms: u32) {
        self.last_draw_ms = Some(now_ms);
    }

    /// Make the next `is_due` true regardless of time
    pub fn reset(&mut self) {
        self.last_draw_ms = None;
    }
}

/// Horizontal offset of a selected label wider than its row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    offset: u16,
}

impl ScrollState {
    /// Current offset in pixels
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Advance by `speed` pixels, wrapping once the label end is visible
    ///
    /// Labels that fit keep the offset at zero.
    pub fn advance(&mut self, speed: u16, label_px: u16, row_px: u16) {
        if label_px <= row_px {
            self.offset = 0;
            return;
        }
        self.offset = self.offset.saturating_add(speed);
        if self.offset > label_px - row_px {
            self.offset = 0;
        }
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}
