//! Headless editing controls hosted by grid cells.
//!
//! Each control kind is a plain model: a value plus the focus, traversal,
//! enabled and visibility state every control shares through
//! [`ControlBase`]. The host toolkit binds these models to its native
//! widgets; the grid only ever manipulates the models.
//!
//! # Control Kinds
//!
//! | kind | type | editable |
//! |---|---|---|
//! | Label | [`Label`] | no |
//! | Text | [`TextField`] | yes |
//! | Password | [`PasswordField`] | yes |
//! | Choice | [`ChoiceBox`] | yes |
//! | Date | [`DatePicker`] | yes |
//! | Checkbox | [`CheckBox`] | yes |
//! | Button | [`Button`] | no |

mod button;
mod check_box;
mod choice_box;
mod date_picker;
mod label;
mod text_field;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

pub use button::Button;
pub use check_box::CheckBox;
pub use choice_box::ChoiceBox;
pub use date_picker::DatePicker;
pub use label::Label;
pub use text_field::{PasswordField, TextField};

/// A unique identifier for a control instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(u64);

impl ControlId {
    /// Get the raw u64 value of this control ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "control#{}", self.0)
    }
}

static NEXT_CONTROL_ID: AtomicU64 = AtomicU64::new(1);

fn next_control_id() -> ControlId {
    ControlId(NEXT_CONTROL_ID.fetch_add(1, Ordering::Relaxed))
}

/// The kind of control a column renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Read-only text.
    Label,
    /// Single-line text input.
    Text,
    /// Masked single-line text input.
    Password,
    /// Pick one value from a fixed list.
    Choice,
    /// Calendar date input.
    Date,
    /// Boolean toggle.
    Checkbox,
    /// Push button bound to an action.
    Button,
}

impl ColumnKind {
    /// Whether controls of this kind write their value back to the record.
    pub fn is_editable(self) -> bool {
        !matches!(self, Self::Label | Self::Button)
    }

    /// The name of the control type backing this kind.
    pub fn control_type_name(self) -> &'static str {
        match self {
            Self::Label => "Label",
            Self::Text => "TextField",
            Self::Password => "PasswordField",
            Self::Choice => "ChoiceBox",
            Self::Date => "DatePicker",
            Self::Checkbox => "CheckBox",
            Self::Button => "Button",
        }
    }
}

/// State shared by every control kind.
#[derive(Debug, Clone)]
pub struct ControlBase {
    id: ControlId,
    column_id: String,
    focusable: bool,
    focus_traversable: bool,
    enabled: bool,
    visible: bool,
    focused: bool,
}

impl ControlBase {
    /// Create the base for a control that can take keyboard focus.
    pub fn new() -> Self {
        Self {
            id: next_control_id(),
            column_id: String::new(),
            focusable: true,
            focus_traversable: true,
            enabled: true,
            visible: true,
            focused: false,
        }
    }

    /// Create the base for a control that never takes keyboard focus.
    pub fn non_focusable() -> Self {
        Self {
            focusable: false,
            focus_traversable: false,
            ..Self::new()
        }
    }

    /// The control's unique ID.
    #[inline]
    pub fn id(&self) -> ControlId {
        self.id
    }

    /// The id of the column this control was created for.
    pub fn column_id(&self) -> &str {
        &self.column_id
    }

    pub(crate) fn attach(&mut self, column_id: &str) {
        self.column_id = column_id.to_owned();
    }

    /// Whether Tab/Shift+Tab traversal may land on this control.
    #[inline]
    pub fn is_focus_traversable(&self) -> bool {
        self.focus_traversable
    }

    /// Set whether Tab/Shift+Tab traversal may land on this control.
    pub fn set_focus_traversable(&mut self, traversable: bool) {
        self.focus_traversable = traversable;
    }

    /// Whether the control can ever take keyboard focus.
    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    /// Whether the control is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the control.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the control is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the control.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Whether the control currently holds keyboard focus.
    #[inline]
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Whether a focus request on this control would succeed.
    pub fn can_accept_focus(&self) -> bool {
        self.focusable && self.enabled && self.visible
    }

    /// Whether Tab traversal visits this control right now.
    pub fn accepts_tab_focus(&self) -> bool {
        self.focus_traversable && self.can_accept_focus()
    }
}

impl Default for ControlBase {
    fn default() -> Self {
        Self::new()
    }
}

/// Any control hosted by a grid cell.
#[derive(Debug, Clone)]
pub enum Control {
    /// A [`Label`].
    Label(Label),
    /// A [`TextField`].
    Text(TextField),
    /// A [`PasswordField`].
    Password(PasswordField),
    /// A [`ChoiceBox`].
    Choice(ChoiceBox),
    /// A [`DatePicker`].
    Date(DatePicker),
    /// A [`CheckBox`].
    Checkbox(CheckBox),
    /// A [`Button`].
    Button(Button),
}

impl Control {
    /// The shared control state.
    pub fn base(&self) -> &ControlBase {
        match self {
            Self::Label(c) => &c.base,
            Self::Text(c) => &c.base,
            Self::Password(c) => &c.base,
            Self::Choice(c) => &c.base,
            Self::Date(c) => &c.base,
            Self::Checkbox(c) => &c.base,
            Self::Button(c) => &c.base,
        }
    }

    /// The shared control state, mutably.
    pub fn base_mut(&mut self) -> &mut ControlBase {
        match self {
            Self::Label(c) => &mut c.base,
            Self::Text(c) => &mut c.base,
            Self::Password(c) => &mut c.base,
            Self::Choice(c) => &mut c.base,
            Self::Date(c) => &mut c.base,
            Self::Checkbox(c) => &mut c.base,
            Self::Button(c) => &mut c.base,
        }
    }

    /// The kind of this control.
    pub fn kind(&self) -> ColumnKind {
        match self {
            Self::Label(_) => ColumnKind::Label,
            Self::Text(_) => ColumnKind::Text,
            Self::Password(_) => ColumnKind::Password,
            Self::Choice(_) => ColumnKind::Choice,
            Self::Date(_) => ColumnKind::Date,
            Self::Checkbox(_) => ColumnKind::Checkbox,
            Self::Button(_) => ColumnKind::Button,
        }
    }

    /// The control's unique ID.
    #[inline]
    pub fn id(&self) -> ControlId {
        self.base().id()
    }

    /// The id of the column this control was created for.
    pub fn column_id(&self) -> &str {
        self.base().column_id()
    }

    /// Borrow the control as a concrete type.
    pub fn downcast_ref<C: GridControl>(&self) -> Option<&C> {
        C::from_control(self)
    }

    /// Borrow the control mutably as a concrete type.
    pub fn downcast_mut<C: GridControl>(&mut self) -> Option<&mut C> {
        C::from_control_mut(self)
    }
}

/// Implemented by every concrete control type.
///
/// Links the type to its [`ColumnKind`] and to its [`Control`] variant so
/// typed lookups can check the declared kind of a column.
pub trait GridControl: Sized + 'static {
    /// The column kind this control renders.
    const KIND: ColumnKind;

    /// Borrow the concrete control out of a [`Control`].
    fn from_control(control: &Control) -> Option<&Self>;

    /// Mutably borrow the concrete control out of a [`Control`].
    fn from_control_mut(control: &mut Control) -> Option<&mut Self>;

    /// Wrap the concrete control into a [`Control`].
    fn into_control(self) -> Control;

    /// The shared control state.
    fn control_base(&self) -> &ControlBase;
}

macro_rules! impl_grid_control {
    ($ty:ty, $variant:ident) => {
        impl $ty {
            /// The shared control state.
            pub fn base(&self) -> &ControlBase {
                &self.base
            }

            /// The shared control state, mutably.
            pub fn base_mut(&mut self) -> &mut ControlBase {
                &mut self.base
            }
        }

        impl GridControl for $ty {
            const KIND: ColumnKind = ColumnKind::$variant;

            fn from_control(control: &Control) -> Option<&Self> {
                match control {
                    Control::$variant(c) => Some(c),
                    _ => None,
                }
            }

            fn from_control_mut(control: &mut Control) -> Option<&mut Self> {
                match control {
                    Control::$variant(c) => Some(c),
                    _ => None,
                }
            }

            fn into_control(self) -> Control {
                Control::$variant(self)
            }

            fn control_base(&self) -> &ControlBase {
                &self.base
            }
        }
    };
}

impl_grid_control!(Label, Label);
impl_grid_control!(TextField, Text);
impl_grid_control!(PasswordField, Password);
impl_grid_control!(ChoiceBox, Choice);
impl_grid_control!(DatePicker, Date);
impl_grid_control!(CheckBox, Checkbox);
impl_grid_control!(Button, Button);
