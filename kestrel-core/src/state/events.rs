//! Events that drive the UI

/// Events that can trigger screen mode transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeEvent {
    /// Display switched on
    PowerOn,
    /// Display switched off
    PowerOff,
    /// Intro screen time is up
    IntroElapsed,
    /// Button test requested or dismissed
    ToggleButtonTest,
    /// A scan was started from the menu
    ScanStarted,
    /// The scanner reports the scan done
    ScanFinished,
    /// Packet monitor requested
    OpenPacketMonitor,
    /// Any button pressed on a passive screen
    ButtonActivity,
}

/// Navigation events, decoded from button edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavEvent {
    SelectNext,
    SelectPrevious,
    /// Tap on the selected node
    Activate,
    /// Hold on the selected node
    ActivateHold,
    /// Back to the parent menu
    Back,
    /// Switch the display on or off
    TogglePower,
    /// Enter or leave the button test screen
    ToggleButtonTest,
    /// Leave a passive screen
    Dismiss,
}
