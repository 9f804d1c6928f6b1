//! Drop-down choice control.

use super::ControlBase;

/// Picks at most one value from a fixed list of items.
#[derive(Debug, Clone)]
pub struct ChoiceBox {
    pub(crate) base: ControlBase,
    items: Vec<String>,
    selected: Option<usize>,
}

impl ChoiceBox {
    /// Create a choice box over `items` with nothing selected.
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            base: ControlBase::new(),
            items: items.into_iter().map(Into::into).collect(),
            selected: None,
        }
    }

    /// The available items, in display order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// The index of the selected item.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected item's text.
    pub fn selected_item(&self) -> Option<&str> {
        self.selected.map(|i| self.items[i].as_str())
    }

    /// Select by index. Out-of-range indices clear the selection.
    pub fn set_selected_index(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.items.len());
    }

    /// Select the first item equal to `item`.
    ///
    /// Returns `false` and clears the selection if no item matches.
    pub fn select_item(&mut self, item: &str) -> bool {
        self.selected = self.items.iter().position(|i| i == item);
        self.selected.is_some()
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
