//! The full set of buttons

use heapless::Vec;

use super::{Button, ButtonEdge, ButtonId, ButtonInput, ButtonTiming, BUTTON_COUNT};
use crate::config::{ButtonConfig, ConfigError};

/// One button per `ButtonId`, indexed by `ButtonId::index()`
#[derive(Debug)]
pub struct ButtonSet<I> {
    buttons: [Button<I>; BUTTON_COUNT],
}

impl<I: ButtonInput> ButtonSet<I> {
    /// Build the set from per-button inputs in `ButtonId::ALL` order
    ///
    /// Buttons that `config` marks as not fitted are disabled and their input
    /// is dropped.
    pub fn new(inputs: [Option<I>; BUTTON_COUNT], config: &ButtonConfig) -> Self {
        let mut inputs = inputs.into_iter();
        let buttons = core::array::from_fn(|i| {
            let id = ButtonId::ALL[i];
            let input = inputs.next().flatten();
            if config.is_fitted(id) {
                Button::new(id, input)
            } else {
                Button::disabled(id)
            }
        });
        Self { buttons }
    }

    /// Set up every button, collecting the ones that failed
    pub fn setup_all(&mut self) -> Vec<ConfigError, BUTTON_COUNT> {
        let mut errors = Vec::new();
        for button in self.buttons.iter_mut() {
            if let Err(e) = button.setup() {
                warn!("button {} has no input, disabled", button.id());
                // Capacity equals the number of buttons
                let _ = errors.push(e);
            }
        }
        errors
    }

    /// Poll every button once
    pub fn poll_all(
        &mut self,
        now_ms: u32,
        timing: &ButtonTiming,
    ) -> Vec<(ButtonId, ButtonEdge), BUTTON_COUNT> {
        let mut edges = Vec::new();
        for button in self.buttons.iter_mut() {
            if let Some(edge) = button.poll(now_ms, timing) {
                let _ = edges.push((button.id(), edge));
            }
        }
        edges
    }

    /// Swallow every press in progress
    pub fn consume_all(&mut self) {
        for button in self.buttons.iter_mut() {
            button.consume();
        }
    }

    pub fn get(&self, id: ButtonId) -> &Button<I> {
        &self.buttons[id.index()]
    }

    pub fn get_mut(&mut self, id: ButtonId) -> &mut Button<I> {
        &mut self.buttons[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Button<I>> {
        self.buttons.iter()
    }
}
