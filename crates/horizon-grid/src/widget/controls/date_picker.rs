//! Calendar date control.

use chrono::NaiveDate;

use super::ControlBase;

/// Default display format for dates.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A date input holding an optional calendar date.
#[derive(Debug, Clone)]
pub struct DatePicker {
    pub(crate) base: ControlBase,
    date: Option<NaiveDate>,
    format: String,
}

impl DatePicker {
    /// Create an empty date picker.
    pub fn new() -> Self {
        Self {
            base: ControlBase::new(),
            date: None,
            format: DEFAULT_DATE_FORMAT.to_owned(),
        }
    }

    /// The selected date.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Set or clear the date.
    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
    }

    /// The `chrono` format string used for display and parsing.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Change the display format.
    pub fn set_format(&mut self, format: impl Into<String>) {
        self.format = format.into();
    }

    /// The date rendered with the display format, or an empty string.
    pub fn display_text(&self) -> String {
        self.date
            .map(|d| d.format(&self.format).to_string())
            .unwrap_or_default()
    }

    /// Parse typed text with the display format.
    ///
    /// Empty input clears the date. On a parse failure the previous date is
    /// kept and the error returned.
    pub fn set_text(&mut self, text: &str) -> Result<(), chrono::ParseError> {
        let text = text.trim();
        if text.is_empty() {
            self.date = None;
            return Ok(());
        }
        self.date = Some(NaiveDate::parse_from_str(text, &self.format)?);
        Ok(())
    }
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new()
    }
}
