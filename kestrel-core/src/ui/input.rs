//! Button edge decoding
//!
//! Which navigation event a button edge means depends on the screen mode.
//! Confirm and back act on release so a hold can claim the press first.

use crate::button::{ButtonEdge, ButtonId};
use crate::state::{NavEvent, ScreenMode};

/// Decode one button edge in `mode`
pub fn decode(mode: ScreenMode, id: ButtonId, edge: ButtonEdge) -> Option<NavEvent> {
    use ButtonEdge::*;
    use ButtonId::*;

    const TAP: ButtonEdge = Released { after_hold: false };

    match (mode, id, edge) {
        (ScreenMode::Off, _, Pressed) => Some(NavEvent::TogglePower),
        (ScreenMode::Off, _, _) => None,

        // B held switches the display off from any screen
        (_, B, Held) => Some(NavEvent::TogglePower),

        (ScreenMode::Menu, Up, Pressed) => Some(NavEvent::SelectPrevious),
        (ScreenMode::Menu, Down, Pressed) => Some(NavEvent::SelectNext),
        (ScreenMode::Menu, A | Right, Held) => Some(NavEvent::ActivateHold),
        (ScreenMode::Menu, A | Right, TAP) => Some(NavEvent::Activate),
        (ScreenMode::Menu, Left, Held) => Some(NavEvent::ToggleButtonTest),
        (ScreenMode::Menu, B | Left, TAP) => Some(NavEvent::Back),

        (ScreenMode::ButtonTest, Left, Held) => Some(NavEvent::ToggleButtonTest),

        (ScreenMode::PacketMonitor, _, Pressed) => Some(NavEvent::Dismiss),

        _ => None,
    }
}
