//! Keyboard row navigation.
//!
//! The navigation chord (the configured modifiers plus ArrowUp or ArrowDown)
//! moves the selection to the adjacent record. When a control is focused,
//! focus moves to the control of the same column in the adjacent row instead,
//! and the selection follows focus. At the first or last record the move is
//! blocked and the matching edge callback, if any, is told about it.

use std::fmt;

use horizon_grid_core::logging::targets;

use super::EditableGrid;
use crate::record::Record;
use crate::widget::{FocusReason, Key, KeyPressEvent, KeyboardModifiers};

/// Callback run when row navigation is blocked at an edge.
pub type EdgeCallback<S> = Box<dyn FnMut(&Record<S>)>;

/// Direction of a row move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDirection {
    /// Toward the first record.
    Up,
    /// Toward the last record.
    Down,
}

/// Chord recognition and edge callbacks.
pub struct RowNavigator<S> {
    modifiers: KeyboardModifiers,
    at_first_row: Option<EdgeCallback<S>>,
    at_last_row: Option<EdgeCallback<S>>,
}

impl<S> RowNavigator<S> {
    /// Create a navigator for the given chord modifiers.
    pub fn new(modifiers: KeyboardModifiers) -> Self {
        Self {
            modifiers,
            at_first_row: None,
            at_last_row: None,
        }
    }

    /// The chord modifiers.
    pub fn modifiers(&self) -> KeyboardModifiers {
        self.modifiers
    }

    /// The row move a key press asks for, if it is the navigation chord.
    ///
    /// Modifiers must match exactly.
    pub fn direction(&self, event: &KeyPressEvent) -> Option<RowDirection> {
        if event.modifiers != self.modifiers {
            return None;
        }
        match event.key {
            Key::ArrowUp => Some(RowDirection::Up),
            Key::ArrowDown => Some(RowDirection::Down),
            _ => None,
        }
    }

    fn blocked(&mut self, direction: RowDirection, selected: &Record<S>) {
        let callback = match direction {
            RowDirection::Up => self.at_first_row.as_mut(),
            RowDirection::Down => self.at_last_row.as_mut(),
        };
        match callback {
            Some(callback) => callback(selected),
            None => {
                tracing::trace!(target: targets::NAVIGATION, ?direction, "row move blocked at edge");
            }
        }
    }
}

impl<S> fmt::Debug for RowNavigator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowNavigator")
            .field("modifiers", &self.modifiers)
            .field("at_first_row", &self.at_first_row.is_some())
            .field("at_last_row", &self.at_last_row.is_some())
            .finish()
    }
}

impl<S: Send + Sync + 'static> EditableGrid<S> {
    /// Run `callback` with the selected record when moving up is blocked at
    /// the first row.
    pub fn set_cant_move_up_at_first_row_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&Record<S>) + 'static,
    {
        self.navigator.at_first_row = Some(Box::new(callback));
    }

    /// Run `callback` with the selected record when moving down is blocked
    /// at the last row.
    pub fn set_cant_move_down_at_last_row_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&Record<S>) + 'static,
    {
        self.navigator.at_last_row = Some(Box::new(callback));
    }

    /// Handle a key press delivered to the grid.
    ///
    /// The navigation chord is always consumed (accepted) while the grid is
    /// enabled, even when the move is blocked. Returns whether the event was
    /// consumed.
    pub fn handle_key_press(&mut self, event: &mut KeyPressEvent) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(direction) = self.navigator.direction(event) else {
            return false;
        };
        event.base.accept();
        self.move_row(direction);
        true
    }

    /// Move the selection (or focus) one record up or down.
    pub fn move_row(&mut self, direction: RowDirection) {
        let Some(selected) = self.selection.selected() else {
            // Nothing selected yet: Down enters the list at the top.
            if direction == RowDirection::Down
                && let Some(first) = self.rows.record_at(0).cloned()
            {
                self.select(first);
            }
            return;
        };
        let Some(index) = self.rows.index_of(&selected) else {
            return;
        };

        let target = match direction {
            RowDirection::Up if index == 0 => None,
            RowDirection::Up => Some(index - 1),
            RowDirection::Down if index + 1 >= self.rows.len() => None,
            RowDirection::Down => Some(index + 1),
        };
        let Some(target) = target else {
            self.navigator.blocked(direction, &selected);
            return;
        };

        self.ensure_materialized(target);
        let Some(record) = self.rows.record_at(target).cloned() else {
            return;
        };
        tracing::debug!(target: targets::NAVIGATION, ?direction, from = index, to = target, "row move");

        match self.selection.focused() {
            Some(focused) => {
                let column = self.rows.control(focused).map(|c| c.column_id().to_owned());
                let equivalent = column.and_then(|column| {
                    self.rows
                        .row_for(&record)
                        .and_then(|row| row.control(&column))
                        .map(|c| c.id())
                });
                // A refused request leaves selection and focus unchanged.
                if let Some(id) = equivalent {
                    self.focus_control(id, FocusReason::RowNavigation);
                }
            }
            None => self.select(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_requires_exact_modifiers() {
        let navigator: RowNavigator<()> = RowNavigator::new(KeyboardModifiers::CTRL);
        let down = KeyPressEvent::new(Key::ArrowDown, KeyboardModifiers::CTRL);
        assert_eq!(navigator.direction(&down), Some(RowDirection::Down));

        let plain = KeyPressEvent::new(Key::ArrowDown, KeyboardModifiers::NONE);
        assert_eq!(navigator.direction(&plain), None);

        let extra = KeyPressEvent::new(
            Key::ArrowUp,
            KeyboardModifiers {
                shift: true,
                control: true,
                ..KeyboardModifiers::NONE
            },
        );
        assert_eq!(navigator.direction(&extra), None);

        let other_key = KeyPressEvent::new(Key::ArrowLeft, KeyboardModifiers::CTRL);
        assert_eq!(navigator.direction(&other_key), None);
    }

    #[test]
    fn test_blocked_runs_matching_callback() {
        use std::cell::Cell;
        use std::rc::Rc;

        let mut navigator: RowNavigator<u32> = RowNavigator::new(KeyboardModifiers::ALT);
        let ups = Rc::new(Cell::new(0));
        let seen = ups.clone();
        navigator.at_first_row = Some(Box::new(move |r: &Record<u32>| {
            seen.set(seen.get() + *r.read());
        }));

        let record = Record::new(5);
        navigator.blocked(RowDirection::Up, &record);
        navigator.blocked(RowDirection::Down, &record);
        assert_eq!(ups.get(), 5);
    }
}
