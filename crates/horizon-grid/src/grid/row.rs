//! Row store: the record list and the materialized row containers.
//!
//! Records are kept in display order. A record gets a [`RowContainer`] once
//! it is materialized; the store keeps explicit maps from record to row and
//! from control to row so neither rows nor controls need back-pointers.

use std::collections::HashMap;
use std::fmt;

use slotmap::{SlotMap, new_key_type};

use crate::error::{GridError, Result};
use crate::record::Record;
use crate::widget::{Control, ControlAccess, ControlBase, ControlId};

new_key_type! {
    /// Identifies a materialized row.
    pub struct RowId;
}

/// The materialized controls of one record, one per column in column order.
pub struct RowContainer<S> {
    id: RowId,
    record: Record<S>,
    controls: Vec<Control>,
    selected: bool,
}

impl<S> RowContainer<S> {
    /// The row's id.
    pub fn id(&self) -> RowId {
        self.id
    }

    /// The record this row renders.
    pub fn record(&self) -> &Record<S> {
        &self.record
    }

    /// The row's controls in column order.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub(crate) fn controls_mut(&mut self) -> &mut [Control] {
        &mut self.controls
    }

    /// Look up the control of a column.
    pub fn control(&self, column_id: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.column_id() == column_id)
    }

    /// Look up the control of a column, mutably.
    pub fn control_mut(&mut self, column_id: &str) -> Option<&mut Control> {
        self.controls.iter_mut().find(|c| c.column_id() == column_id)
    }

    /// Look up a control by id.
    pub fn control_by_id(&self, id: ControlId) -> Option<&Control> {
        self.controls.iter().find(|c| c.id() == id)
    }

    fn control_by_id_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        self.controls.iter_mut().find(|c| c.id() == id)
    }

    /// The first control that would accept focus, in column order.
    pub fn first_focusable(&self) -> Option<ControlId> {
        self.controls
            .iter()
            .find(|c| c.base().can_accept_focus())
            .map(Control::id)
    }

    /// Whether the row is drawn as selected.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

impl<S> fmt::Debug for RowContainer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowContainer")
            .field("id", &self.id)
            .field("controls", &self.controls.len())
            .field("selected", &self.selected)
            .finish()
    }
}

/// Ordered records plus their materialized rows.
pub struct RowStore<S> {
    records: Vec<Record<S>>,
    rows: SlotMap<RowId, RowContainer<S>>,
    by_record: HashMap<Record<S>, RowId>,
    by_control: HashMap<ControlId, RowId>,
}

impl<S> RowStore<S> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            rows: SlotMap::with_key(),
            by_record: HashMap::new(),
            by_control: HashMap::new(),
        }
    }

    /// All records in display order, materialized or not.
    pub fn records(&self) -> &[Record<S>] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The position of a record.
    pub fn index_of(&self, record: &Record<S>) -> Option<usize> {
        self.records.iter().position(|r| r == record)
    }

    /// Whether a record is in the list.
    pub fn contains(&self, record: &Record<S>) -> bool {
        self.index_of(record).is_some()
    }

    /// The record at a position.
    pub fn record_at(&self, index: usize) -> Option<&Record<S>> {
        self.records.get(index)
    }

    /// Add a record at the end.
    pub fn push_record(&mut self, record: Record<S>) {
        self.records.push(record);
    }

    /// Add a record at `index`, shifting later records down.
    pub fn insert_record(&mut self, index: usize, record: Record<S>) -> Result<()> {
        if index > self.records.len() {
            return Err(GridError::IndexOutOfBounds {
                index,
                len: self.records.len(),
            });
        }
        self.records.insert(index, record);
        Ok(())
    }

    /// Remove a record and its row.
    ///
    /// Returns the record's former position and its row, if it had one.
    pub fn remove_record(
        &mut self,
        record: &Record<S>,
    ) -> Option<(usize, Option<RowContainer<S>>)> {
        let index = self.index_of(record)?;
        self.records.remove(index);
        let row = self
            .by_record
            .remove(record)
            .and_then(|id| self.rows.remove(id));
        if let Some(row) = &row {
            for control in &row.controls {
                self.by_control.remove(&control.id());
            }
        }
        Some((index, row))
    }

    /// Remove every record and row.
    pub fn clear(&mut self) {
        self.records.clear();
        self.rows.clear();
        self.by_record.clear();
        self.by_control.clear();
    }

    /// Store a freshly built row for a record.
    pub fn insert_row(&mut self, record: Record<S>, controls: Vec<Control>) -> RowId {
        let control_ids: Vec<_> = controls.iter().map(Control::id).collect();
        let id = self.rows.insert_with_key(|id| RowContainer {
            id,
            record: record.clone(),
            controls,
            selected: false,
        });
        self.by_record.insert(record, id);
        for control in control_ids {
            self.by_control.insert(control, id);
        }
        id
    }

    /// Append a control to a row, e.g. for a newly registered column.
    pub fn push_control(&mut self, row: RowId, control: Control) -> bool {
        let Some(container) = self.rows.get_mut(row) else {
            return false;
        };
        self.by_control.insert(control.id(), row);
        container.controls.push(control);
        true
    }

    /// The row of a record, if materialized.
    pub fn row_id(&self, record: &Record<S>) -> Option<RowId> {
        self.by_record.get(record).copied()
    }

    /// Whether a record has a row.
    pub fn is_materialized(&self, record: &Record<S>) -> bool {
        self.by_record.contains_key(record)
    }

    /// The row owning a control.
    pub fn row_of_control(&self, control: ControlId) -> Option<RowId> {
        self.by_control.get(&control).copied()
    }

    /// Get a row.
    pub fn row(&self, id: RowId) -> Option<&RowContainer<S>> {
        self.rows.get(id)
    }

    /// Get a row mutably.
    pub fn row_mut(&mut self, id: RowId) -> Option<&mut RowContainer<S>> {
        self.rows.get_mut(id)
    }

    /// The row of a record, if materialized.
    pub fn row_for(&self, record: &Record<S>) -> Option<&RowContainer<S>> {
        self.row_id(record).and_then(|id| self.rows.get(id))
    }

    /// Look up a control anywhere in the grid.
    pub fn control(&self, id: ControlId) -> Option<&Control> {
        let row = self.row_of_control(id)?;
        self.rows.get(row)?.control_by_id(id)
    }

    /// Look up a control anywhere in the grid, mutably.
    pub fn control_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        let row = self.row_of_control(id)?;
        self.rows.get_mut(row)?.control_by_id_mut(id)
    }

    /// Ids of materialized rows in display order.
    pub fn row_ids_in_order(&self) -> Vec<RowId> {
        self.records
            .iter()
            .filter_map(|r| self.by_record.get(r).copied())
            .collect()
    }

    /// Materialized rows in display order.
    pub fn materialized(&self) -> impl Iterator<Item = &RowContainer<S>> {
        self.records
            .iter()
            .filter_map(|r| self.by_record.get(r).and_then(|id| self.rows.get(*id)))
    }

    /// Number of materialized rows.
    pub fn materialized_count(&self) -> usize {
        self.rows.len()
    }
}

impl<S> Default for RowStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for RowStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowStore")
            .field("records", &self.records.len())
            .field("rows", &self.rows.len())
            .finish()
    }
}

impl<S> ControlAccess for RowStore<S> {
    fn control_base(&self, id: ControlId) -> Option<&ControlBase> {
        self.control(id).map(Control::base)
    }

    fn control_base_mut(&mut self, id: ControlId) -> Option<&mut ControlBase> {
        self.control_mut(id).map(Control::base_mut)
    }

    fn controls_in_order(&self) -> Vec<ControlId> {
        self.materialized()
            .flat_map(|row| row.controls.iter().map(Control::id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{GridControl, Label, TextField};

    fn controls(column_ids: &[&str]) -> Vec<Control> {
        column_ids
            .iter()
            .map(|id| {
                let mut control = TextField::new().into_control();
                control.base_mut().attach(id);
                control
            })
            .collect()
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut store = RowStore::new();
        let a = Record::new("a");
        let b = Record::new("b");
        store.push_record(a.clone());
        store.push_record(b.clone());
        assert_eq!(store.index_of(&b), Some(1));
        assert!(!store.is_materialized(&a));

        let row = store.insert_row(a.clone(), controls(&["x", "y"]));
        assert_eq!(store.row_id(&a), Some(row));
        let y = store.row(row).and_then(|r| r.control("y")).map(Control::id).unwrap();
        assert_eq!(store.row_of_control(y), Some(row));
        assert_eq!(store.controls_in_order().len(), 2);
    }

    #[test]
    fn test_insert_out_of_bounds() {
        let mut store: RowStore<&str> = RowStore::new();
        let err = store.insert_record(1, Record::new("a")).unwrap_err();
        assert!(matches!(err, GridError::IndexOutOfBounds { index: 1, len: 0 }));
    }

    #[test]
    fn test_remove_drops_row_and_controls() {
        let mut store = RowStore::new();
        let a = Record::new(1);
        store.push_record(a.clone());
        let row = store.insert_row(a.clone(), controls(&["x"]));
        let x = store.row(row).unwrap().controls()[0].id();

        let (index, removed) = store.remove_record(&a).unwrap();
        assert_eq!(index, 0);
        assert!(removed.is_some());
        assert_eq!(store.row_of_control(x), None);
        assert!(store.row(row).is_none());
        assert!(store.remove_record(&a).is_none());
    }

    #[test]
    fn test_materialized_follows_record_order() {
        let mut store = RowStore::new();
        let a = Record::new('a');
        let b = Record::new('b');
        store.push_record(a.clone());
        let row_a = store.insert_row(a, controls(&["x"]));
        store.insert_record(0, b.clone()).unwrap();
        let row_b = store.insert_row(b, controls(&["x"]));
        assert_eq!(store.row_ids_in_order(), vec![row_b, row_a]);
    }

    #[test]
    fn test_push_control() {
        let mut store = RowStore::new();
        let a = Record::new(());
        store.push_record(a.clone());
        let row = store.insert_row(a, controls(&["x"]));
        let label = Label::new("late").into_control();
        let label_id = label.id();
        assert!(store.push_control(row, label));
        assert_eq!(store.row(row).unwrap().controls().len(), 2);
        assert_eq!(store.row_of_control(label_id), Some(row));
    }
}
