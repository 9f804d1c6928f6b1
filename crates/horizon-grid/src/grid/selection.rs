//! Selection and focus state machine.
//!
//! The grid is either in `NoSelection` (before the first batch loads, or
//! after every record is gone) or `Selected(record, focused control?)`.
//!
//! | event | reaction |
//! |---|---|
//! | primary click on a row | select the row's record |
//! | control gains focus | select the owning record, remember the control |
//! | control loses focus | forget it, but only if it is still the focused one |
//! | [`EditableGrid::set_selected_item`] | select if the record is an item, then refocus the same column on the next tick if still selected |
//!
//! Entering `Selected(new)` from `Selected(old)` suppresses the old row's
//! traversal, restores the new row's, flips both rows' selected flags and
//! emits [`EditableGrid::selected_item_changed`].

use std::fmt;

use horizon_grid_core::logging::targets;
use horizon_grid_core::{Property, ReadOnlyProperty, Signal, TaskId};

use super::EditableGrid;
use crate::record::Record;
use crate::widget::{ControlId, FocusOutcome, FocusReason, MouseButton};

/// Observable selection state.
pub struct SelectionState<S> {
    selected: Property<Option<Record<S>>>,
    focused: Property<Option<ControlId>>,
    selected_changed: Signal<Option<Record<S>>>,
    focused_changed: Signal<Option<ControlId>>,
    /// Pending "refocus same column" task, if any.
    refocus: Option<TaskId>,
}

impl<S: Send + Sync + 'static> SelectionState<S> {
    /// Create a state with nothing selected or focused.
    pub fn new() -> Self {
        Self {
            selected: Property::new(None),
            focused: Property::new(None),
            selected_changed: Signal::new(),
            focused_changed: Signal::new(),
            refocus: None,
        }
    }

    /// The selected record.
    pub fn selected(&self) -> Option<Record<S>> {
        self.selected.get()
    }

    /// Whether `record` is the selected record.
    pub fn is_selected(&self, record: &Record<S>) -> bool {
        self.selected.with(|s| s.as_ref() == Some(record))
    }

    /// The focused control.
    pub fn focused(&self) -> Option<ControlId> {
        self.focused.get()
    }

    /// Set the selected record, emitting on change.
    pub fn set_selected(&self, record: Option<Record<S>>) -> bool {
        let changed = self.selected.set(record.clone());
        if changed {
            self.selected_changed.emit(record);
        }
        changed
    }

    /// Set the focused control, emitting on change.
    pub fn set_focused(&self, control: Option<ControlId>) -> bool {
        let changed = self.focused.set(control);
        if changed {
            self.focused_changed.emit(control);
        }
        changed
    }
}

impl<S: Send + Sync + 'static> Default for SelectionState<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for SelectionState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionState")
            .field("selected", &self.selected.with(Option::is_some))
            .field("focused", &self.focused.get())
            .finish()
    }
}

impl<S: Send + Sync + 'static> EditableGrid<S> {
    // =========================================================================
    // Observable state
    // =========================================================================

    /// The selected record.
    pub fn selected_item(&self) -> Option<Record<S>> {
        self.selection.selected()
    }

    /// Read-only view of the selected record property.
    pub fn selected_item_property(&self) -> ReadOnlyProperty<'_, Option<Record<S>>> {
        self.selection.selected.read_only()
    }

    /// Emitted after the selected record changes.
    pub fn selected_item_changed(&self) -> &Signal<Option<Record<S>>> {
        &self.selection.selected_changed
    }

    /// The focused control.
    pub fn focused_control(&self) -> Option<ControlId> {
        self.selection.focused()
    }

    /// Read-only view of the focused control property.
    pub fn focused_control_property(&self) -> ReadOnlyProperty<'_, Option<ControlId>> {
        self.selection.focused.read_only()
    }

    /// Emitted after the focused control changes.
    pub fn focused_control_changed(&self) -> &Signal<Option<ControlId>> {
        &self.selection.focused_changed
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Select `record`.
    ///
    /// No-op returning `false` if the record is not an item of the grid. If a
    /// control is focused, the control of the same column in the new row is
    /// focused on the next tick, unless the selection has moved on by then.
    pub fn set_selected_item(&mut self, record: &Record<S>) -> bool {
        if !self.rows.contains(record) {
            tracing::debug!(target: targets::SELECTION, "ignoring selection of a record that is not an item");
            return false;
        }
        if self.selection.is_selected(record) {
            return true;
        }

        let focused_column = self
            .selection
            .focused()
            .and_then(|id| self.rows.control(id))
            .map(|c| c.column_id().to_owned());

        self.select(record.clone());

        // Only the latest programmatic selection may move focus.
        if let Some(pending) = self.selection.refocus.take() {
            let _ = self.tasks.cancel(pending);
        }
        if let Some(column) = focused_column {
            let target = record.clone();
            let task = self.tasks.post_labeled("refocus same column", move |grid: &mut Self| {
                grid.selection.refocus = None;
                if !grid.selection.is_selected(&target) {
                    tracing::debug!(target: targets::SELECTION, "selection moved on, dropping refocus");
                    return;
                }
                let Some(id) = grid
                    .rows
                    .row_for(&target)
                    .and_then(|row| row.control(&column))
                    .map(|c| c.id())
                else {
                    return;
                };
                grid.focus_control(id, FocusReason::Other);
            });
            self.selection.refocus = Some(task);
        }
        true
    }

    /// A mouse button was pressed on the row of `record`.
    ///
    /// Only the primary button selects. Returns whether the selection now
    /// holds `record`.
    pub fn handle_row_click(&mut self, record: &Record<S>, button: MouseButton) -> bool {
        if button != MouseButton::Left || !self.enabled || !self.rows.is_materialized(record) {
            return false;
        }
        self.select(record.clone());
        true
    }

    /// The host reports that a control gained native focus.
    pub fn handle_focus_in(&mut self, control: ControlId) -> bool {
        self.focus_control(control, FocusReason::Other)
    }

    /// The host reports that a control lost native focus.
    ///
    /// Stale reports for a control that no longer holds focus are ignored.
    pub fn handle_focus_out(&mut self, control: ControlId) {
        if self.focus.has_focus(control) {
            self.focus.clear_focus(&mut self.rows);
        }
        self.focus_lost(control);
    }

    /// Move keyboard focus to a control.
    ///
    /// Refused when the control is unknown, disabled or hidden.
    pub fn request_focus(&mut self, control: ControlId) -> bool {
        self.focus_control(control, FocusReason::Other)
    }

    /// Tab: focus the next traversable control.
    pub fn focus_next(&mut self) -> bool {
        let outcome = self.focus.focus_next(&mut self.rows);
        self.apply_focus_outcome(outcome)
    }

    /// Shift+Tab: focus the previous traversable control.
    pub fn focus_previous(&mut self) -> bool {
        let outcome = self.focus.focus_previous(&mut self.rows);
        self.apply_focus_outcome(outcome)
    }

    pub(super) fn focus_control(&mut self, control: ControlId, reason: FocusReason) -> bool {
        let outcome = self.focus.set_focus(&mut self.rows, control, reason);
        self.apply_focus_outcome(outcome)
    }

    fn apply_focus_outcome(&mut self, outcome: FocusOutcome) -> bool {
        match outcome {
            FocusOutcome::Refused => false,
            FocusOutcome::Unchanged => true,
            FocusOutcome::Moved {
                lost,
                gained,
                reason,
            } => {
                if let Some(lost) = lost {
                    self.focus_lost(lost);
                }
                self.focus_gained(gained, reason);
                true
            }
        }
    }

    fn focus_gained(&mut self, control: ControlId, reason: FocusReason) {
        tracing::trace!(target: targets::SELECTION, %control, ?reason, "control gained focus");
        let owner = self
            .rows
            .row_of_control(control)
            .and_then(|row| self.rows.row(row))
            .map(|row| row.record().clone());
        if let Some(record) = owner {
            self.select(record);
        }
        self.selection.set_focused(Some(control));
    }

    fn focus_lost(&mut self, control: ControlId) {
        if self.selection.focused() == Some(control) {
            tracing::trace!(target: targets::SELECTION, %control, "control lost focus");
            self.selection.set_focused(None);
        }
    }

    /// Enter `Selected(record)`.
    ///
    /// The record is materialized first if it is not yet.
    pub(super) fn select(&mut self, record: Record<S>) {
        let Some(index) = self.rows.index_of(&record) else {
            return;
        };
        self.ensure_materialized(index);
        let previous = self.selection.selected();
        if previous.as_ref() == Some(&record) {
            return;
        }

        if let Some(old) = previous
            && let Some(old_row) = self.rows.row_id(&old)
            && let Some(row) = self.rows.row_mut(old_row)
        {
            self.traversal.suppress(row);
            row.set_selected(false);
        }
        if let Some(new_row) = self.rows.row_id(&record)
            && let Some(row) = self.rows.row_mut(new_row)
        {
            self.traversal.restore(row);
            row.set_selected(true);
        }
        self.viewport.ensure_row_visible(index);

        tracing::debug!(target: targets::SELECTION, index, "selected row");
        self.selection.set_selected(Some(record));
    }

    /// Return to `NoSelection`.
    pub(super) fn clear_selection(&mut self) {
        if let Some(old) = self.selection.selected()
            && let Some(row) = self.rows.row_id(&old).and_then(|id| self.rows.row_mut(id))
        {
            row.set_selected(false);
        }
        if self.selection.set_selected(None) {
            tracing::debug!(target: targets::SELECTION, "selection cleared");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_set_selected_emits_once() {
        let state: SelectionState<u8> = SelectionState::new();
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        state.selected_changed.connect(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        let record = Record::new(1);
        assert!(state.set_selected(Some(record.clone())));
        assert!(!state.set_selected(Some(record.clone())));
        assert!(state.is_selected(&record));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_focused_change_signal_carries_value() {
        let state: SelectionState<u8> = SelectionState::new();
        let last = Arc::new(parking_lot::Mutex::new(None));
        let sink = last.clone();
        state.focused_changed.connect(move |id| *sink.lock() = Some(*id));

        assert!(!state.set_focused(None));
        assert!(last.lock().is_none());

        let id = crate::widget::ControlBase::new().id();
        assert!(state.set_focused(Some(id)));
        assert_eq!(*last.lock(), Some(Some(id)));
        assert_eq!(state.focused(), Some(id));
    }
}
