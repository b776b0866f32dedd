//! GPIO push buttons

use embassy_rp::gpio::Input;
use kestrel_core::button::ButtonInput;

/// Active-low button to ground with the internal pull-up enabled
pub struct PinInput(Input<'static>);

impl PinInput {
    pub fn new(pin: Input<'static>) -> Self {
        Self(pin)
    }
}

impl ButtonInput for PinInput {
    fn is_pushed(&mut self) -> bool {
        self.0.is_low()
    }
}
