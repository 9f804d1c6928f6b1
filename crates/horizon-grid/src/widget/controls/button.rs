//! Push button control.

use super::ControlBase;

/// A push button hosted in a grid cell.
///
/// Buttons are focusable but read-only: their "value" is the caption, and
/// activating them runs the column's action against the row's record.
#[derive(Debug, Clone)]
pub struct Button {
    pub(crate) base: ControlBase,
    text: String,
    click_count: u32,
}

impl Button {
    /// Create a button with a caption.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: ControlBase::new(),
            text: text.into(),
            click_count: 0,
        }
    }

    /// The caption.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the caption.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// How many times the button has been activated.
    pub fn click_count(&self) -> u32 {
        self.click_count
    }

    pub(crate) fn record_click(&mut self) {
        self.click_count = self.click_count.saturating_add(1);
    }
}
