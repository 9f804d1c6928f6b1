//! Boolean toggle control.

use super::ControlBase;

/// A two-state checkbox.
#[derive(Debug, Clone)]
pub struct CheckBox {
    pub(crate) base: ControlBase,
    text: String,
    checked: bool,
}

impl CheckBox {
    /// Create an unchecked checkbox with an optional caption.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: ControlBase::new(),
            text: text.into(),
            checked: false,
        }
    }

    /// Create a checkbox with an initial state and no caption.
    pub fn with_checked(checked: bool) -> Self {
        Self {
            checked,
            ..Self::new("")
        }
    }

    /// The caption shown next to the indicator.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the box is checked.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the checked state.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Flip the checked state, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }
}

impl Default for CheckBox {
    fn default() -> Self {
        Self::new("")
    }
}
