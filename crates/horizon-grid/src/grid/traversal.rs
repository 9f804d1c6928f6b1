//! Focus-traversal snapshot.
//!
//! Only the selected row may take part in Tab/Shift+Tab traversal. When a row
//! is deselected its controls are made non-traversable and their previous
//! traversability is remembered per column, so reselecting the row restores
//! exactly what the row had before.

use std::collections::HashMap;

use horizon_grid_core::logging::targets;
use slotmap::SecondaryMap;

use super::row::{RowContainer, RowId};
use crate::widget::Control;

#[derive(Debug, Default)]
struct RowSnapshot {
    remembered: HashMap<String, bool>,
    suppressed: bool,
}

/// Remembered traversability of suppressed rows.
#[derive(Debug, Default)]
pub struct FocusTraversalSnapshot {
    rows: SecondaryMap<RowId, RowSnapshot>,
}

impl FocusTraversalSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a row is currently suppressed.
    pub fn is_suppressed(&self, row: RowId) -> bool {
        self.rows.get(row).is_some_and(|s| s.suppressed)
    }

    /// The remembered traversability of a column in a suppressed row.
    pub fn remembered(&self, row: RowId, column_id: &str) -> Option<bool> {
        self.rows.get(row)?.remembered.get(column_id).copied()
    }

    /// Make every control of the row non-traversable, remembering the
    /// previous values.
    ///
    /// No-op if the row is already suppressed. Returns whether anything
    /// changed.
    pub fn suppress<S>(&mut self, row: &mut RowContainer<S>) -> bool {
        let id = row.id();
        if self.is_suppressed(id) {
            return false;
        }
        let snapshot = self.snapshot_mut(id);
        for control in row.controls_mut() {
            remember(snapshot, control);
        }
        snapshot.suppressed = true;
        tracing::trace!(target: targets::TRAVERSAL, ?id, "suppressed row traversal");
        true
    }

    /// Suppress one control added to a row after the row was suppressed.
    pub fn suppress_control(&mut self, row: RowId, control: &mut Control) {
        if !self.is_suppressed(row) {
            return;
        }
        let snapshot = self.snapshot_mut(row);
        remember(snapshot, control);
    }

    /// Write the remembered traversability back to the row's controls.
    ///
    /// No-op if the row is not suppressed, so repeated calls are safe.
    /// Returns whether anything changed.
    pub fn restore<S>(&mut self, row: &mut RowContainer<S>) -> bool {
        let id = row.id();
        let Some(snapshot) = self.rows.get_mut(id) else {
            return false;
        };
        if !snapshot.suppressed {
            return false;
        }
        for control in row.controls_mut() {
            if let Some(traversable) = snapshot.remembered.remove(control.column_id()) {
                control.base_mut().set_focus_traversable(traversable);
            }
        }
        snapshot.remembered.clear();
        snapshot.suppressed = false;
        tracing::trace!(target: targets::TRAVERSAL, ?id, "restored row traversal");
        true
    }

    /// Drop the bookkeeping of a removed row.
    pub fn forget(&mut self, row: RowId) {
        self.rows.remove(row);
    }

    /// Drop all bookkeeping.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    fn snapshot_mut(&mut self, row: RowId) -> &mut RowSnapshot {
        if !self.rows.contains_key(row) {
            self.rows.insert(row, RowSnapshot::default());
        }
        &mut self.rows[row]
    }
}

fn remember(snapshot: &mut RowSnapshot, control: &mut Control) {
    let base = control.base_mut();
    snapshot
        .remembered
        .entry(base.column_id().to_owned())
        .or_insert(base.is_focus_traversable());
    base.set_focus_traversable(false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::row::RowStore;
    use crate::record::Record;
    use crate::widget::{GridControl, TextField};

    fn store_with_row(columns: &[(&str, bool)]) -> (RowStore<()>, RowId) {
        let mut store = RowStore::new();
        let record = Record::new(());
        store.push_record(record.clone());
        let controls = columns
            .iter()
            .map(|(id, traversable)| {
                let mut control = TextField::new().into_control();
                control.base_mut().attach(id);
                control.base_mut().set_focus_traversable(*traversable);
                control
            })
            .collect();
        let row = store.insert_row(record, controls);
        (store, row)
    }

    fn traversability(store: &RowStore<()>, row: RowId) -> Vec<bool> {
        store
            .row(row)
            .unwrap()
            .controls()
            .iter()
            .map(|c| c.base().is_focus_traversable())
            .collect()
    }

    #[test]
    fn test_suppress_then_restore_is_identity() {
        let (mut store, row) = store_with_row(&[("a", true), ("b", false), ("c", true)]);
        let mut snapshot = FocusTraversalSnapshot::new();

        assert!(snapshot.suppress(store.row_mut(row).unwrap()));
        assert_eq!(traversability(&store, row), vec![false, false, false]);
        assert_eq!(snapshot.remembered(row, "b"), Some(false));

        assert!(snapshot.restore(store.row_mut(row).unwrap()));
        assert_eq!(traversability(&store, row), vec![true, false, true]);
    }

    #[test]
    fn test_suppress_is_idempotent() {
        let (mut store, row) = store_with_row(&[("a", true)]);
        let mut snapshot = FocusTraversalSnapshot::new();
        snapshot.suppress(store.row_mut(row).unwrap());
        assert!(!snapshot.suppress(store.row_mut(row).unwrap()));

        snapshot.restore(store.row_mut(row).unwrap());
        assert_eq!(traversability(&store, row), vec![true]);
    }

    #[test]
    fn test_repeated_restore_keeps_later_changes() {
        let (mut store, row) = store_with_row(&[("a", true)]);
        let mut snapshot = FocusTraversalSnapshot::new();
        snapshot.suppress(store.row_mut(row).unwrap());
        snapshot.restore(store.row_mut(row).unwrap());

        store.row_mut(row).unwrap().controls_mut()[0]
            .base_mut()
            .set_focus_traversable(false);
        assert!(!snapshot.restore(store.row_mut(row).unwrap()));
        assert_eq!(traversability(&store, row), vec![false]);
    }

    #[test]
    fn test_late_control_joins_suppressed_row() {
        let (mut store, row) = store_with_row(&[("a", true)]);
        let mut snapshot = FocusTraversalSnapshot::new();
        snapshot.suppress(store.row_mut(row).unwrap());

        let mut late = TextField::new().into_control();
        late.base_mut().attach("late");
        snapshot.suppress_control(row, &mut late);
        assert!(!late.base().is_focus_traversable());
        store.push_control(row, late);

        snapshot.restore(store.row_mut(row).unwrap());
        assert_eq!(traversability(&store, row), vec![true, true]);
    }
}
