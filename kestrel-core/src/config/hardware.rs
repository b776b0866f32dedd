//! Hardware configuration types
//!
//! Boards differ in how many of the six buttons are actually fitted. A
//! button that is not fitted is disabled and never reports edges.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::button::{ButtonId, BUTTON_COUNT};

/// Which buttons are fitted on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonConfig {
    /// Indexed by `ButtonId::index()`
    pub fitted: [bool; BUTTON_COUNT],
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::all()
    }
}

impl ButtonConfig {
    /// All six buttons fitted
    pub const fn all() -> Self {
        Self {
            fitted: [true; BUTTON_COUNT],
        }
    }

    /// Three-button boards: up, down and A
    pub const fn minimal() -> Self {
        let mut fitted = [false; BUTTON_COUNT];
        fitted[ButtonId::Up.index()] = true;
        fitted[ButtonId::Down.index()] = true;
        fitted[ButtonId::A.index()] = true;
        Self { fitted }
    }

    /// Check if a button is fitted
    pub const fn is_fitted(&self, id: ButtonId) -> bool {
        self.fitted[id.index()]
    }

    /// Return a copy with `id` marked as fitted or not
    pub const fn with(mut self, id: ButtonId, fitted: bool) -> Self {
        self.fitted[id.index()] = fitted;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_board() {
        let config = ButtonConfig::minimal();
        assert!(config.is_fitted(ButtonId::Up));
        assert!(config.is_fitted(ButtonId::Down));
        assert!(config.is_fitted(ButtonId::A));
        assert!(!config.is_fitted(ButtonId::B));
        assert!(!config.is_fitted(ButtonId::Left));
        assert!(!config.is_fitted(ButtonId::Right));
    }

    #[test]
    fn test_with_overrides() {
        let config = ButtonConfig::all().with(ButtonId::Right, false);
        assert!(!config.is_fitted(ButtonId::Right));
        assert!(config.is_fitted(ButtonId::Left));
    }
}
