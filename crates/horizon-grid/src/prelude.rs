//! Prelude module for Horizon Grid.
//!
//! ```ignore
//! use horizon_grid::prelude::*;
//! ```

// ============================================================================
// Grid
// ============================================================================

pub use crate::grid::{
    ColumnFactory, EditableGrid, RowDirection, RowViewport, ScrollViewport,
};
pub use crate::{GridConfig, GridError, Record, ValueError};

// ============================================================================
// Factories
// ============================================================================

pub use crate::grid::{
    ButtonFactory, CheckboxFactory, ChoiceFactory, DateFactory, EditableFactory, LabelFactory,
    PasswordFactory, ReadOnlyFactory, TextFactory,
};

// ============================================================================
// Controls and Events
// ============================================================================

pub use crate::widget::{
    Button, CheckBox, ChoiceBox, ColumnKind, Control, ControlId, DatePicker, FocusReason,
    GridControl, Key, KeyPressEvent, KeyboardModifiers, Label, MouseButton, PasswordField,
    TextField,
};

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use horizon_grid_core::{Property, ReadOnlyProperty, Signal};
