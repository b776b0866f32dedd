//! Debounced buttons
//!
//! Each button samples a raw input once per poll and turns it into edges:
//! a press, a hold once the press outlasts the hold threshold, and a release.
//! Raw changes inside the debounce window after the last accepted transition
//! are ignored.

mod set;

pub use set::ButtonSet;

use crate::config::ConfigError;

/// Number of physical buttons a board can have
pub const BUTTON_COUNT: usize = 6;

/// Button identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
}

impl ButtonId {
    pub const ALL: [ButtonId; BUTTON_COUNT] = [
        ButtonId::Up,
        ButtonId::Down,
        ButtonId::Left,
        ButtonId::Right,
        ButtonId::A,
        ButtonId::B,
    ];

    /// Position in `ALL` and in per-button arrays
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short name for the button test screen
    pub const fn name(self) -> &'static str {
        match self {
            ButtonId::Up => "UP",
            ButtonId::Down => "DOWN",
            ButtonId::Left => "LEFT",
            ButtonId::Right => "RIGHT",
            ButtonId::A => "A",
            ButtonId::B => "B",
        }
    }
}

/// Raw button input
pub trait ButtonInput {
    /// Prepare the input (pull-ups etc.); called once from `Button::setup`
    fn setup(&mut self) {}

    /// Sample the input, `true` while pressed
    fn is_pushed(&mut self) -> bool;
}

/// Accepted button edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEdge {
    /// Accepted transition to pushed
    Pressed,
    /// Still pushed after the hold threshold; reported once per press
    Held,
    /// Accepted transition to released
    Released {
        /// The press was consumed as a hold
        after_hold: bool,
    },
}

/// Debounce and hold thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonTiming {
    pub debounce_ms: u32,
    pub hold_ms: u32,
}

/// A debounced button
#[derive(Debug)]
pub struct Button<I> {
    id: ButtonId,
    enabled: bool,
    /// Debounced state
    pushed: bool,
    /// Current press is consumed as a hold
    hold: bool,
    /// Hold threshold already evaluated for the current press
    hold_checked: bool,
    /// Current press was taken over by a screen change; its hold and
    /// release are not reported
    consumed: bool,
    /// Time of the last accepted transition
    time: u32,
    input: Option<I>,
}

impl<I: ButtonInput> Button<I> {
    /// Create an enabled button
    ///
    /// `input` may be `None`; `setup()` then reports the button as
    /// misconfigured and disables it.
    pub fn new(id: ButtonId, input: Option<I>) -> Self {
        Self {
            id,
            enabled: true,
            pushed: false,
            hold: false,
            hold_checked: false,
            consumed: false,
            time: 0,
            input,
        }
    }

    /// Create a button that is not fitted
    pub fn disabled(id: ButtonId) -> Self {
        Self {
            enabled: false,
            ..Self::new(id, None)
        }
    }

    /// Set up the input of an enabled button
    pub fn setup(&mut self) -> Result<(), ConfigError> {
        if !self.enabled {
            return Ok(());
        }
        match self.input.as_mut() {
            Some(input) => {
                input.setup();
                Ok(())
            }
            None => {
                self.enabled = false;
                Err(ConfigError::MissingInput(self.id))
            }
        }
    }

    /// Sample the input and report at most one edge
    pub fn poll(&mut self, now_ms: u32, timing: &ButtonTiming) -> Option<ButtonEdge> {
        if !self.enabled {
            return None;
        }
        let raw = self.input.as_mut()?.is_pushed();
        let elapsed = now_ms.wrapping_sub(self.time);

        if raw != self.pushed && elapsed >= timing.debounce_ms {
            self.pushed = raw;
            self.time = now_ms;
            let after_hold = self.hold;
            let consumed = self.consumed;
            self.hold = false;
            self.hold_checked = false;
            self.consumed = false;
            return match (raw, consumed) {
                (true, _) => Some(ButtonEdge::Pressed),
                (false, true) => None,
                (false, false) => Some(ButtonEdge::Released { after_hold }),
            };
        }

        if self.pushed && !self.hold_checked && elapsed > timing.hold_ms {
            self.hold_checked = true;
            if self.consumed {
                return None;
            }
            self.hold = true;
            return Some(ButtonEdge::Held);
        }

        None
    }

    /// Decline the hold of the current press so its release reads as a tap
    pub fn cancel_hold(&mut self) {
        self.hold = false;
    }

    /// Swallow the rest of the current press
    ///
    /// No-op while released; the next accepted press is reported normally.
    pub fn consume(&mut self) {
        if self.pushed {
            self.consumed = true;
        }
    }

    /// Check if the current press is swallowed
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Debounced pushed state
    pub fn is_pushed(&self) -> bool {
        self.pushed
    }

    /// Check if the current press is consumed as a hold
    pub fn is_held(&self) -> bool {
        self.hold
    }

    /// Time of the last accepted transition
    pub fn last_transition_ms(&self) -> u32 {
        self.time
    }

    /// Access the raw input
    pub fn input_mut(&mut self) -> Option<&mut I> {
        self.input.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Level(bool);

    impl ButtonInput for Level {
        fn is_pushed(&mut self) -> bool {
            self.0
        }
    }

    const TIMING: ButtonTiming = ButtonTiming {
        debounce_ms: 280,
        hold_ms: 800,
    };

    fn set(button: &mut Button<Level>, level: bool) {
        if let Some(input) = button.input_mut() {
            input.0 = level;
        }
    }

    #[test]
    fn test_press_and_release() {
        let mut button = Button::new(ButtonId::A, Some(Level(false)));
        assert_eq!(button.poll(1000, &TIMING), None);

        set(&mut button, true);
        assert_eq!(button.poll(1000, &TIMING), Some(ButtonEdge::Pressed));
        assert!(button.is_pushed());

        set(&mut button, false);
        assert_eq!(
            button.poll(1300, &TIMING),
            Some(ButtonEdge::Released { after_hold: false })
        );
        assert!(!button.is_pushed());
    }

    #[test]
    fn test_bounce_inside_window_ignored() {
        let mut button = Button::new(ButtonId::A, Some(Level(true)));
        assert_eq!(button.poll(1000, &TIMING), Some(ButtonEdge::Pressed));

        set(&mut button, false);
        assert_eq!(button.poll(1100, &TIMING), None);
        assert_eq!(button.poll(1279, &TIMING), None);
        assert!(button.is_pushed());
        assert_eq!(
            button.poll(1280, &TIMING),
            Some(ButtonEdge::Released { after_hold: false })
        );
    }

    #[test]
    fn test_hold_reported_once() {
        let mut button = Button::new(ButtonId::A, Some(Level(true)));
        assert_eq!(button.poll(1000, &TIMING), Some(ButtonEdge::Pressed));
        assert_eq!(button.poll(1800, &TIMING), None);
        assert_eq!(button.poll(1801, &TIMING), Some(ButtonEdge::Held));
        assert!(button.is_held());
        assert_eq!(button.poll(1900, &TIMING), None);

        set(&mut button, false);
        assert_eq!(
            button.poll(1950, &TIMING),
            Some(ButtonEdge::Released { after_hold: true })
        );
        assert!(!button.is_held());
    }

    #[test]
    fn test_cancelled_hold_releases_as_tap() {
        let mut button = Button::new(ButtonId::A, Some(Level(true)));
        button.poll(1000, &TIMING);
        assert_eq!(button.poll(1900, &TIMING), Some(ButtonEdge::Held));
        button.cancel_hold();
        assert_eq!(button.poll(2000, &TIMING), None);

        set(&mut button, false);
        assert_eq!(
            button.poll(2100, &TIMING),
            Some(ButtonEdge::Released { after_hold: false })
        );
    }

    #[test]
    fn test_consumed_press_reports_no_hold_or_release() {
        let mut button = Button::new(ButtonId::A, Some(Level(true)));
        assert_eq!(button.poll(1000, &TIMING), Some(ButtonEdge::Pressed));
        button.consume();
        assert!(button.is_consumed());
        assert_eq!(button.poll(1900, &TIMING), None);
        assert!(!button.is_held());

        set(&mut button, false);
        assert_eq!(button.poll(2000, &TIMING), None);
        assert!(!button.is_pushed());
        assert!(!button.is_consumed());

        // The next press is a fresh one
        set(&mut button, true);
        assert_eq!(button.poll(2300, &TIMING), Some(ButtonEdge::Pressed));
        set(&mut button, false);
        assert_eq!(
            button.poll(2600, &TIMING),
            Some(ButtonEdge::Released { after_hold: false })
        );
    }

    #[test]
    fn test_consume_while_released_is_noop() {
        let mut button = Button::new(ButtonId::B, Some(Level(false)));
        button.consume();
        assert!(!button.is_consumed());

        set(&mut button, true);
        assert_eq!(button.poll(1000, &TIMING), Some(ButtonEdge::Pressed));
        assert_eq!(button.poll(1801, &TIMING), Some(ButtonEdge::Held));
    }

    #[test]
    fn test_missing_input_disables_button() {
        let mut button: Button<Level> = Button::new(ButtonId::B, None);
        assert_eq!(button.setup(), Err(ConfigError::MissingInput(ButtonId::B)));
        assert!(!button.is_enabled());
        assert_eq!(button.poll(5000, &TIMING), None);
    }

    #[test]
    fn test_disabled_button_is_inert() {
        let mut button: Button<Level> = Button::disabled(ButtonId::Left);
        assert_eq!(button.setup(), Ok(()));
        assert_eq!(button.poll(5000, &TIMING), None);
    }

    #[test]
    fn test_timer_wraparound() {
        let mut button = Button::new(ButtonId::Up, Some(Level(true)));
        assert_eq!(button.poll(u32::MAX - 100, &TIMING), Some(ButtonEdge::Pressed));
        set(&mut button, false);
        // 300ms later across the wrap
        assert_eq!(
            button.poll(199, &TIMING),
            Some(ButtonEdge::Released { after_hold: false })
        );
    }
}
