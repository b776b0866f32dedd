//! Screen mode definition

use super::events::ModeEvent;

/// Screen modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenMode {
    /// Display powered down, nothing drawn
    #[default]
    Off,
    /// Live state of every button
    ButtonTest,
    /// Menu navigation
    Menu,
    /// Scan progress
    LoadScan,
    /// Packet rate on the monitored channel
    PacketMonitor,
    /// Splash screen after power-on
    Intro,
}

impl ScreenMode {
    /// Check if frames are drawn in this mode
    pub fn is_drawn(&self) -> bool {
        !matches!(self, ScreenMode::Off)
    }

    /// Check if menu navigation is live
    pub fn accepts_navigation(&self) -> bool {
        matches!(self, ScreenMode::Menu)
    }

    /// Process an event and return the next mode
    ///
    /// Events that do not apply to the current mode leave it unchanged.
    pub fn transition(self, event: ModeEvent) -> Self {
        use ModeEvent::*;
        use ScreenMode::*;

        match (self, event) {
            (Off, PowerOn) => Intro,
            (Off, _) => Off,
            (_, PowerOff) => Off,

            (Intro, IntroElapsed) => Menu,

            (Menu, ToggleButtonTest) => ButtonTest,
            (ButtonTest, ToggleButtonTest) => Menu,

            (Menu, ScanStarted) => LoadScan,
            (LoadScan, ScanFinished) => Menu,

            (Menu, OpenPacketMonitor) => PacketMonitor,
            (PacketMonitor, ButtonActivity) => Menu,

            (mode, _) => mode,
        }
    }
}
