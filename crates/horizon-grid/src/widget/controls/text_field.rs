//! Single-line text input controls.

use super::ControlBase;

/// A single-line text input.
#[derive(Debug, Clone)]
pub struct TextField {
    pub(crate) base: ControlBase,
    text: String,
    placeholder: String,
    max_length: Option<usize>,
}

impl TextField {
    /// Create an empty text field.
    pub fn new() -> Self {
        Self {
            base: ControlBase::new(),
            text: String::new(),
            placeholder: String::new(),
            max_length: None,
        }
    }

    /// Create a text field with initial text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut field = Self::new();
        field.set_text(text);
        field
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, truncating to the maximum length if one is set.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = truncate_chars(text.into(), self.max_length);
    }

    /// Clear the text.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// The placeholder shown while the field is empty.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Set the placeholder.
    pub fn set_placeholder(&mut self, text: impl Into<String>) {
        self.placeholder = text.into();
    }

    /// Builder-style placeholder.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.set_placeholder(text);
        self
    }

    /// The maximum number of characters, if limited.
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Limit the number of characters; existing text is truncated.
    pub fn set_max_length(&mut self, max: Option<usize>) {
        self.max_length = max;
        self.text = truncate_chars(std::mem::take(&mut self.text), max);
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::new()
    }
}

/// A single-line text input that masks what it shows.
#[derive(Debug, Clone)]
pub struct PasswordField {
    pub(crate) base: ControlBase,
    text: String,
    mask_char: char,
}

impl PasswordField {
    /// Create an empty password field.
    pub fn new() -> Self {
        Self {
            base: ControlBase::new(),
            text: String::new(),
            mask_char: '\u{25CF}',
        }
    }

    /// The real (unmasked) text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The text as it is displayed: one mask character per character.
    pub fn displayed_text(&self) -> String {
        std::iter::repeat_n(self.mask_char, self.text.chars().count()).collect()
    }

    /// The masking character.
    pub fn mask_char(&self) -> char {
        self.mask_char
    }

    /// Change the masking character.
    pub fn set_mask_char(&mut self, ch: char) {
        self.mask_char = ch;
    }
}

impl Default for PasswordField {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate_chars(text: String, max: Option<usize>) -> String {
    match max {
        Some(max) if text.chars().count() > max => text.chars().take(max).collect(),
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_length_truncates() {
        let mut field = TextField::with_text("abcdef");
        field.set_max_length(Some(3));
        assert_eq!(field.text(), "abc");
        field.set_text("xyzzy");
        assert_eq!(field.text(), "xyz");
    }

    #[test]
    fn test_password_is_masked() {
        let mut field = PasswordField::new();
        field.set_text("hunter2");
        assert_eq!(field.text(), "hunter2");
        assert_eq!(field.displayed_text().chars().count(), 7);
        field.set_mask_char('*');
        assert_eq!(field.displayed_text(), "*******");
    }
}
