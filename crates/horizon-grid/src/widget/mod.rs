//! Headless widget layer for the grid.
//!
//! This module holds the pieces the grid shares with its host toolkit:
//!
//! - [`controls`]: the editing controls hosted by grid cells
//! - [`FocusManager`]: keyboard focus ownership and Tab/Shift+Tab order
//! - input events ([`KeyPressEvent`], [`MouseButton`], [`FocusReason`])
//!
//! The host translates its native input into these types and binds each
//! control model to a native widget.

pub mod controls;
mod events;
mod focus;

pub use controls::{
    Button, CheckBox, ChoiceBox, ColumnKind, Control, ControlBase, ControlId, DatePicker,
    GridControl, Label, PasswordField, TextField,
};
pub use events::{EventBase, FocusReason, Key, KeyPressEvent, KeyboardModifiers, MouseButton};
pub use focus::{ControlAccess, FocusManager, FocusOutcome};
