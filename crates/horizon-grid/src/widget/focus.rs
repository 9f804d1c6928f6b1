//! Keyboard focus bookkeeping for grid controls.
//!
//! [`FocusManager`] tracks which control owns keyboard focus and moves focus
//! between controls in tab order. It does not know about rows or records; it
//! sees controls through the [`ControlAccess`] trait, which the row store
//! implements.
//!
//! # Tab Order
//!
//! Tab order is the display order of materialized controls: rows top to
//! bottom, columns left to right. Only controls that accept tab focus
//! (traversable, enabled, visible) participate.

use super::controls::{ControlBase, ControlId};
use super::events::FocusReason;

/// Access to the controls a [`FocusManager`] operates on.
pub trait ControlAccess {
    /// Get a control's shared state by ID.
    fn control_base(&self, id: ControlId) -> Option<&ControlBase>;

    /// Get a control's shared state mutably by ID.
    fn control_base_mut(&mut self, id: ControlId) -> Option<&mut ControlBase>;

    /// Every control in display order.
    fn controls_in_order(&self) -> Vec<ControlId>;
}

/// The result of a focus request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusOutcome {
    /// The control does not exist or cannot accept focus.
    Refused,
    /// The control already had focus.
    Unchanged,
    /// Focus moved to `gained`, taking it from `lost`.
    Moved {
        /// The control that lost focus, if any.
        lost: Option<ControlId>,
        /// The control that now has focus.
        gained: ControlId,
        /// Why focus moved.
        reason: FocusReason,
    },
}

impl FocusOutcome {
    /// Whether the requested control has focus after the request.
    pub fn succeeded(&self) -> bool {
        !matches!(self, Self::Refused)
    }
}

/// Tracks the focused control and performs focus moves.
///
/// When focus changes the manager:
/// 1. clears the focused flag of the control losing focus (if any)
/// 2. sets the focused flag of the control gaining focus
/// 3. reports both in a [`FocusOutcome::Moved`] so the caller can run its
///    focus-out and focus-in reactions in that order
#[derive(Debug, Default)]
pub struct FocusManager {
    focused: Option<ControlId>,
}

impl FocusManager {
    /// Create a new focus manager.
    pub fn new() -> Self {
        Self { focused: None }
    }

    /// Get the currently focused control.
    #[inline]
    pub fn focused_control(&self) -> Option<ControlId> {
        self.focused
    }

    /// Check if a specific control has focus.
    #[inline]
    pub fn has_focus(&self, id: ControlId) -> bool {
        self.focused == Some(id)
    }

    /// Give focus to a control.
    ///
    /// Refused when the control is unknown, non-focusable, disabled or
    /// hidden; focus is then left where it was.
    pub fn set_focus<A: ControlAccess>(
        &mut self,
        storage: &mut A,
        id: ControlId,
        reason: FocusReason,
    ) -> FocusOutcome {
        let can_focus = storage
            .control_base(id)
            .is_some_and(ControlBase::can_accept_focus);
        if !can_focus {
            return FocusOutcome::Refused;
        }

        if self.focused == Some(id) {
            return FocusOutcome::Unchanged;
        }

        let lost = self.focused.take();
        if let Some(old) = lost
            && let Some(base) = storage.control_base_mut(old)
        {
            base.set_focused(false);
        }
        if let Some(base) = storage.control_base_mut(id) {
            base.set_focused(true);
        }
        self.focused = Some(id);

        FocusOutcome::Moved {
            lost,
            gained: id,
            reason,
        }
    }

    /// Clear focus from the focused control.
    ///
    /// Returns the control that lost focus.
    pub fn clear_focus<A: ControlAccess>(&mut self, storage: &mut A) -> Option<ControlId> {
        let old = self.focused.take()?;
        if let Some(base) = storage.control_base_mut(old) {
            base.set_focused(false);
        }
        Some(old)
    }

    /// Drop focus bookkeeping for a control that no longer exists.
    ///
    /// Returns `true` if it was the focused control.
    pub fn forget(&mut self, id: ControlId) -> bool {
        if self.focused == Some(id) {
            self.focused = None;
            true
        } else {
            false
        }
    }

    /// Move focus to the next control in tab order, wrapping at the end.
    ///
    /// With nothing focused, the first control in tab order gets focus.
    pub fn focus_next<A: ControlAccess>(&mut self, storage: &mut A) -> FocusOutcome {
        let order = self.build_tab_order(storage);
        let Some(&first) = order.first() else {
            return FocusOutcome::Refused;
        };

        let next = self
            .focused
            .and_then(|current| order.iter().position(|&id| id == current))
            .map_or(first, |pos| order[(pos + 1) % order.len()]);

        self.set_focus(storage, next, FocusReason::Tab)
    }

    /// Move focus to the previous control in tab order, wrapping at the start.
    ///
    /// With nothing focused, the last control in tab order gets focus.
    pub fn focus_previous<A: ControlAccess>(&mut self, storage: &mut A) -> FocusOutcome {
        let order = self.build_tab_order(storage);
        let Some(&last) = order.last() else {
            return FocusOutcome::Refused;
        };

        let prev = self
            .focused
            .and_then(|current| order.iter().position(|&id| id == current))
            .map_or(last, |pos| {
                if pos == 0 {
                    last
                } else {
                    order[pos - 1]
                }
            });

        self.set_focus(storage, prev, FocusReason::Backtab)
    }

    /// Build the tab order: controls in display order that accept tab focus.
    pub fn build_tab_order<A: ControlAccess>(&self, storage: &A) -> Vec<ControlId> {
        storage
            .controls_in_order()
            .into_iter()
            .filter(|&id| {
                storage
                    .control_base(id)
                    .is_some_and(ControlBase::accepts_tab_focus)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Flat(Vec<ControlBase>);

    impl Flat {
        fn with(n: usize) -> Self {
            Self((0..n).map(|_| ControlBase::new()).collect())
        }

        fn id(&self, i: usize) -> ControlId {
            self.0[i].id()
        }
    }

    impl ControlAccess for Flat {
        fn control_base(&self, id: ControlId) -> Option<&ControlBase> {
            self.0.iter().find(|b| b.id() == id)
        }

        fn control_base_mut(&mut self, id: ControlId) -> Option<&mut ControlBase> {
            self.0.iter_mut().find(|b| b.id() == id)
        }

        fn controls_in_order(&self) -> Vec<ControlId> {
            self.0.iter().map(ControlBase::id).collect()
        }
    }

    #[test]
    fn test_set_focus_moves_flags() {
        let mut controls = Flat::with(2);
        let mut focus = FocusManager::new();
        let (a, b) = (controls.id(0), controls.id(1));

        assert!(matches!(
            focus.set_focus(&mut controls, a, FocusReason::Mouse),
            FocusOutcome::Moved { lost: None, .. }
        ));
        let outcome = focus.set_focus(&mut controls, b, FocusReason::Mouse);
        assert_eq!(
            outcome,
            FocusOutcome::Moved {
                lost: Some(a),
                gained: b,
                reason: FocusReason::Mouse
            }
        );
        assert!(!controls.0[0].has_focus());
        assert!(controls.0[1].has_focus());
        assert_eq!(
            focus.set_focus(&mut controls, b, FocusReason::Mouse),
            FocusOutcome::Unchanged
        );
    }

    #[test]
    fn test_disabled_control_refuses_focus() {
        let mut controls = Flat::with(1);
        controls.0[0].set_enabled(false);
        let mut focus = FocusManager::new();
        let id = controls.id(0);
        assert_eq!(
            focus.set_focus(&mut controls, id, FocusReason::Other),
            FocusOutcome::Refused
        );
        assert_eq!(focus.focused_control(), None);
    }

    #[test]
    fn test_tab_order_skips_non_traversable_and_wraps() {
        let mut controls = Flat::with(3);
        controls.0[1].set_focus_traversable(false);
        let mut focus = FocusManager::new();

        focus.focus_next(&mut controls);
        assert_eq!(focus.focused_control(), Some(controls.id(0)));
        focus.focus_next(&mut controls);
        assert_eq!(focus.focused_control(), Some(controls.id(2)));
        focus.focus_next(&mut controls);
        assert_eq!(focus.focused_control(), Some(controls.id(0)));
        focus.focus_previous(&mut controls);
        assert_eq!(focus.focused_control(), Some(controls.id(2)));
    }

    #[test]
    fn test_empty_tab_order() {
        let mut controls = Flat::default();
        let mut focus = FocusManager::new();
        assert_eq!(focus.focus_next(&mut controls), FocusOutcome::Refused);
    }

    #[test]
    fn test_clear_and_forget() {
        let mut controls = Flat::with(1);
        let mut focus = FocusManager::new();
        let id = controls.id(0);
        focus.set_focus(&mut controls, id, FocusReason::Other);
        assert_eq!(focus.clear_focus(&mut controls), Some(id));
        assert!(!controls.0[0].has_focus());

        focus.set_focus(&mut controls, id, FocusReason::Other);
        assert!(focus.forget(id));
        assert!(!focus.forget(id));
    }
}
