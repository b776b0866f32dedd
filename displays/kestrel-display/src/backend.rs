//! Draw surface trait
//!
//! Defines the interface the UI renders through.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Display not initialized
    NotInitialized,
    /// Frame buffer or op list is full
    BufferOverflow,
}

/// Pixel draw surface
///
/// Coordinates are in pixels with the origin at the top-left corner. `y` is
/// the top of the text line. Text may start left of the panel (negative `x`)
/// so that long labels can be scrolled; implementations clip whatever falls
/// outside.
pub trait DrawSurface {
    /// Clear the frame being built
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw a string with its top-left corner at (`x`, `y`)
    fn draw_string(&mut self, x: i16, y: i16, text: &str) -> Result<(), DisplayError>;

    /// Mark the frame as complete
    ///
    /// Buffered displays send the frame to the panel (or schedule it to be
    /// sent) after this call.
    fn commit(&mut self) -> Result<(), DisplayError>;

    /// Power the panel up or down
    fn set_power(&mut self, on: bool) -> Result<(), DisplayError>;

    /// Get the display dimensions in pixels (width, height)
    fn size(&self) -> (u16, u16);

    /// Check if the display is ready
    fn is_ready(&self) -> bool {
        true
    }
}
