//! Column registry.
//!
//! Columns are registered once, in display order, and never removed or
//! reordered. Registering an id that already exists is ignored.

use std::fmt;

use horizon_grid_core::logging::targets;

use super::factory::ColumnFactory;
use crate::widget::ColumnKind;

/// One registered column.
pub struct Column<S> {
    id: String,
    header_text: String,
    factory: ColumnFactory<S>,
    preferred_width: Option<f32>,
}

impl<S> Column<S> {
    /// Create a column definition.
    pub fn new(
        id: impl Into<String>,
        header_text: impl Into<String>,
        factory: ColumnFactory<S>,
    ) -> Self {
        Self {
            id: id.into(),
            header_text: header_text.into(),
            factory,
            preferred_width: None,
        }
    }

    /// The column's unique id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The header text.
    pub fn header_text(&self) -> &str {
        &self.header_text
    }

    /// The control kind of the column.
    pub fn kind(&self) -> ColumnKind {
        self.factory.kind()
    }

    /// The column's control factory.
    pub fn factory(&self) -> &ColumnFactory<S> {
        &self.factory
    }

    /// The preferred width in pixels, if set.
    pub fn preferred_width(&self) -> Option<f32> {
        self.preferred_width
    }

    /// Set the preferred width.
    pub fn set_preferred_width(&mut self, width: Option<f32>) {
        self.preferred_width = width;
    }

    /// Builder-style preferred width.
    pub fn with_preferred_width(mut self, width: f32) -> Self {
        self.preferred_width = Some(width);
        self
    }
}

impl<S> fmt::Debug for Column<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header_text", &self.header_text)
            .field("kind", &self.kind())
            .field("preferred_width", &self.preferred_width)
            .finish()
    }
}

/// Ordered set of columns keyed by id.
pub struct ColumnRegistry<S> {
    columns: Vec<Column<S>>,
}

impl<S> ColumnRegistry<S> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Register a column at the end.
    ///
    /// Returns the new column's position, or `None` if the id was already
    /// registered (the call is then a no-op).
    pub fn append(&mut self, column: Column<S>) -> Option<usize> {
        if self.contains(column.id()) {
            tracing::debug!(
                target: targets::COLUMNS,
                id = column.id(),
                "ignoring duplicate column registration"
            );
            return None;
        }
        tracing::debug!(
            target: targets::COLUMNS,
            id = column.id(),
            kind = ?column.kind(),
            position = self.columns.len(),
            "registered column"
        );
        self.columns.push(column);
        Some(self.columns.len() - 1)
    }

    /// Whether a column id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// The display position of a column.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    /// Look up a column by id.
    pub fn get(&self, id: &str) -> Option<&Column<S>> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Look up a column by id, mutably.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Column<S>> {
        self.columns.iter_mut().find(|c| c.id == id)
    }

    /// Look up a column by display position.
    pub fn at(&self, position: usize) -> Option<&Column<S>> {
        self.columns.get(position)
    }

    /// Iterate columns in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Column<S>> {
        self.columns.iter()
    }

    /// Header texts in display order.
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(Column::header_text).collect()
    }

    /// Column ids in display order.
    pub fn ids(&self) -> Vec<&str> {
        self.columns.iter().map(Column::id).collect()
    }

    /// Number of registered columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether no columns are registered.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<S> Default for ColumnRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for ColumnRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.columns.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::factory::{CheckboxFactory, LabelFactory};

    struct Item {
        name: String,
        done: bool,
    }

    fn name_column() -> Column<Item> {
        Column::new(
            "name",
            "Name",
            ColumnFactory::label(LabelFactory::new(|i: &Item| i.name.clone())),
        )
    }

    fn done_column() -> Column<Item> {
        Column::new(
            "done",
            "Done",
            ColumnFactory::checkbox(CheckboxFactory::new(
                |i: &Item| i.done,
                |i: &mut Item, v| i.done = v,
            )),
        )
    }

    #[test]
    fn test_registration_order_is_display_order() {
        let mut registry = ColumnRegistry::new();
        assert_eq!(registry.append(name_column()), Some(0));
        assert_eq!(registry.append(done_column()), Some(1));
        assert_eq!(registry.headers(), vec!["Name", "Done"]);
        assert_eq!(registry.ids(), vec!["name", "done"]);
        assert_eq!(registry.get("done").map(Column::kind), Some(ColumnKind::Checkbox));
    }

    #[test]
    fn test_duplicate_id_is_ignored() {
        let mut registry = ColumnRegistry::new();
        registry.append(name_column());
        let duplicate = Column::new(
            "name",
            "Other header",
            ColumnFactory::label(LabelFactory::new(|_: &Item| String::new())),
        );
        assert_eq!(registry.append(duplicate), None);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.headers(), vec!["Name"]);
    }

    #[test]
    fn test_preferred_width() {
        let mut registry = ColumnRegistry::new();
        registry.append(name_column().with_preferred_width(120.0));
        assert_eq!(registry.at(0).and_then(Column::preferred_width), Some(120.0));
        if let Some(column) = registry.get_mut("name") {
            column.set_preferred_width(None);
        }
        assert_eq!(registry.get("name").and_then(Column::preferred_width), None);
    }
}
