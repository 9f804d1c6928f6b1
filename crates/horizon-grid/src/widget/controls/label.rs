//! Read-only text control.

use super::ControlBase;

/// A read-only text control.
///
/// Labels never take keyboard focus and never write back to their record.
#[derive(Debug, Clone)]
pub struct Label {
    pub(crate) base: ControlBase,
    text: String,
}

impl Label {
    /// Create a label showing `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: ControlBase::non_focusable(),
            text: text.into(),
        }
    }

    /// The displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the displayed text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::new("")
    }
}
