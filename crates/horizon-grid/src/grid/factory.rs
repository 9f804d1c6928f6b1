//! Control factories: per-column strategies that build cell controls and move
//! values between a record and its control.
//!
//! A column owns one factory. For every materialized row the grid asks the
//! factory for a fresh control ([`ReadOnlyFactory::new_instance`]), fills it
//! from the record ([`ReadOnlyFactory::read_from_record`]), and, for editable
//! kinds, stores user edits back ([`EditableFactory::write_to_record`]).
//!
//! Read-only kinds (labels and buttons) only ever hold a [`ReadOnlyFactory`],
//! so a write-back for them cannot be expressed by a factory at all. The
//! closed [`ColumnFactory`] union carries the strongly typed factory for each
//! kind and dispatches with a single `match`.
//!
//! # Example
//!
//! ```
//! use horizon_grid::grid::{ColumnFactory, TextFactory};
//!
//! struct Person {
//!     name: String,
//! }
//!
//! let factory: ColumnFactory<Person> = ColumnFactory::text(TextFactory::new(
//!     |p: &Person| p.name.clone(),
//!     |p: &mut Person, name: &str| p.name = name.to_owned(),
//! ));
//! assert!(factory.kind().is_editable());
//! ```

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::{GridError, ValueError};
use crate::record::Record;
use crate::widget::controls::{
    Button, CheckBox, ChoiceBox, ColumnKind, Control, DatePicker, GridControl, Label,
    PasswordField, TextField,
};

/// Builds controls of type `C` for records of type `S` and fills them.
pub trait ReadOnlyFactory<S, C>: Send + Sync {
    /// Create a new, unfilled control for `record`.
    fn new_instance(&self, record: &S) -> C;

    /// Copy the record's value into the control.
    fn read_from_record(&self, record: &S, control: &mut C) -> Result<(), ValueError>;
}

/// A factory whose controls can also store their value back to the record.
pub trait EditableFactory<S, C>: ReadOnlyFactory<S, C> {
    /// Copy the control's value into the record.
    fn write_to_record(&self, record: &mut S, control: &C) -> Result<(), ValueError>;
}

/// Action run when a button cell is activated.
pub type ButtonAction<S> = Arc<dyn Fn(&Record<S>) + Send + Sync>;

/// The factory of one column, tagged by control kind.
pub enum ColumnFactory<S> {
    /// Read-only text.
    Label(Box<dyn ReadOnlyFactory<S, Label>>),
    /// Editable text.
    Text(Box<dyn EditableFactory<S, TextField>>),
    /// Editable masked text.
    Password(Box<dyn EditableFactory<S, PasswordField>>),
    /// One value out of a list.
    Choice(Box<dyn EditableFactory<S, ChoiceBox>>),
    /// Calendar date.
    Date(Box<dyn EditableFactory<S, DatePicker>>),
    /// Boolean toggle.
    Checkbox(Box<dyn EditableFactory<S, CheckBox>>),
    /// Push button with an optional action.
    Button {
        /// Builds and captions the buttons.
        factory: Box<dyn ReadOnlyFactory<S, Button>>,
        /// Runs when a button in this column is activated.
        action: Option<ButtonAction<S>>,
    },
}

impl<S: 'static> ColumnFactory<S> {
    /// Wrap a label factory.
    pub fn label(factory: impl ReadOnlyFactory<S, Label> + 'static) -> Self {
        Self::Label(Box::new(factory))
    }

    /// Wrap a text factory.
    pub fn text(factory: impl EditableFactory<S, TextField> + 'static) -> Self {
        Self::Text(Box::new(factory))
    }

    /// Wrap a password factory.
    pub fn password(factory: impl EditableFactory<S, PasswordField> + 'static) -> Self {
        Self::Password(Box::new(factory))
    }

    /// Wrap a choice factory.
    pub fn choice(factory: impl EditableFactory<S, ChoiceBox> + 'static) -> Self {
        Self::Choice(Box::new(factory))
    }

    /// Wrap a date factory.
    pub fn date(factory: impl EditableFactory<S, DatePicker> + 'static) -> Self {
        Self::Date(Box::new(factory))
    }

    /// Wrap a checkbox factory.
    pub fn checkbox(factory: impl EditableFactory<S, CheckBox> + 'static) -> Self {
        Self::Checkbox(Box::new(factory))
    }

    /// Wrap a button factory and its action.
    pub fn button<F>(factory: impl ReadOnlyFactory<S, Button> + 'static, action: F) -> Self
    where
        F: Fn(&Record<S>) + Send + Sync + 'static,
    {
        Self::Button {
            factory: Box::new(factory),
            action: Some(Arc::new(action)),
        }
    }
}

impl<S> ColumnFactory<S> {
    /// The control kind this factory produces.
    pub fn kind(&self) -> ColumnKind {
        match self {
            Self::Label(_) => ColumnKind::Label,
            Self::Text(_) => ColumnKind::Text,
            Self::Password(_) => ColumnKind::Password,
            Self::Choice(_) => ColumnKind::Choice,
            Self::Date(_) => ColumnKind::Date,
            Self::Checkbox(_) => ColumnKind::Checkbox,
            Self::Button { .. } => ColumnKind::Button,
        }
    }

    /// Create an unfilled control for `record`.
    pub fn new_instance(&self, record: &S) -> Control {
        match self {
            Self::Label(f) => f.new_instance(record).into_control(),
            Self::Text(f) => f.new_instance(record).into_control(),
            Self::Password(f) => f.new_instance(record).into_control(),
            Self::Choice(f) => f.new_instance(record).into_control(),
            Self::Date(f) => f.new_instance(record).into_control(),
            Self::Checkbox(f) => f.new_instance(record).into_control(),
            Self::Button { factory, .. } => factory.new_instance(record).into_control(),
        }
    }

    /// Copy the record's value into `control`.
    pub fn read_from_record(
        &self,
        column: &str,
        record: &S,
        control: &mut Control,
    ) -> Result<(), GridError> {
        let actual = control.kind();
        let result = match (self, control) {
            (Self::Label(f), Control::Label(c)) => f.read_from_record(record, c),
            (Self::Text(f), Control::Text(c)) => f.read_from_record(record, c),
            (Self::Password(f), Control::Password(c)) => f.read_from_record(record, c),
            (Self::Choice(f), Control::Choice(c)) => f.read_from_record(record, c),
            (Self::Date(f), Control::Date(c)) => f.read_from_record(record, c),
            (Self::Checkbox(f), Control::Checkbox(c)) => f.read_from_record(record, c),
            (Self::Button { factory, .. }, Control::Button(c)) => {
                factory.read_from_record(record, c)
            }
            _ => {
                return Err(GridError::type_mismatch(
                    column,
                    self.kind().control_type_name(),
                    actual.control_type_name(),
                ));
            }
        };
        result.map_err(|e| GridError::value(column, e))
    }

    /// Copy `control`'s value into the record.
    ///
    /// Label and Button columns are read-only; asking them to write back is a
    /// wiring mistake and reported as [`GridError::ReadOnlyColumn`].
    pub fn write_to_record(
        &self,
        column: &str,
        record: &mut S,
        control: &Control,
    ) -> Result<(), GridError> {
        let result = match (self, control) {
            (Self::Label(_) | Self::Button { .. }, _) => {
                return Err(GridError::ReadOnlyColumn {
                    column: column.to_owned(),
                });
            }
            (Self::Text(f), Control::Text(c)) => f.write_to_record(record, c),
            (Self::Password(f), Control::Password(c)) => f.write_to_record(record, c),
            (Self::Choice(f), Control::Choice(c)) => f.write_to_record(record, c),
            (Self::Date(f), Control::Date(c)) => f.write_to_record(record, c),
            (Self::Checkbox(f), Control::Checkbox(c)) => f.write_to_record(record, c),
            _ => {
                return Err(GridError::type_mismatch(
                    column,
                    self.kind().control_type_name(),
                    control.kind().control_type_name(),
                ));
            }
        };
        result.map_err(|e| GridError::value(column, e))
    }

    /// The action of a button column.
    pub fn button_action(&self) -> Option<&ButtonAction<S>> {
        match self {
            Self::Button { action, .. } => action.as_ref(),
            _ => None,
        }
    }
}

impl<S> fmt::Debug for ColumnFactory<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ColumnFactory").field(&self.kind()).finish()
    }
}

// ============================================================================
// Closure-backed factories
// ============================================================================

type Getter<S, T> = Box<dyn Fn(&S) -> Result<T, ValueError> + Send + Sync>;
type Setter<S, T> = Box<dyn Fn(&mut S, T) -> Result<(), ValueError> + Send + Sync>;

/// A getter/setter pair for one record field.
struct FieldAccessor<S, T> {
    get: Getter<S, T>,
    set: Setter<S, T>,
}

impl<S, T> FieldAccessor<S, T> {
    fn infallible<G, W>(get: G, set: W) -> Self
    where
        G: Fn(&S) -> T + Send + Sync + 'static,
        W: Fn(&mut S, T) + Send + Sync + 'static,
    {
        Self {
            get: Box::new(move |s| Ok(get(s))),
            set: Box::new(move |s, v| {
                set(s, v);
                Ok(())
            }),
        }
    }

    fn fallible<G, W>(get: G, set: W) -> Self
    where
        G: Fn(&S) -> Result<T, ValueError> + Send + Sync + 'static,
        W: Fn(&mut S, T) -> Result<(), ValueError> + Send + Sync + 'static,
    {
        Self {
            get: Box::new(get),
            set: Box::new(set),
        }
    }
}

/// Label factory reading its text from the record.
pub struct LabelFactory<S> {
    text: Getter<S, String>,
}

impl<S> LabelFactory<S> {
    /// Create a factory from an infallible text accessor.
    pub fn new<G>(text: G) -> Self
    where
        G: Fn(&S) -> String + Send + Sync + 'static,
    {
        Self {
            text: Box::new(move |s| Ok(text(s))),
        }
    }

    /// Create a factory from a fallible text accessor.
    pub fn fallible<G>(text: G) -> Self
    where
        G: Fn(&S) -> Result<String, ValueError> + Send + Sync + 'static,
    {
        Self {
            text: Box::new(text),
        }
    }
}

impl<S> ReadOnlyFactory<S, Label> for LabelFactory<S> {
    fn new_instance(&self, _record: &S) -> Label {
        Label::default()
    }

    fn read_from_record(&self, record: &S, control: &mut Label) -> Result<(), ValueError> {
        control.set_text((self.text)(record)?);
        Ok(())
    }
}

/// Text field factory bound to a `String` field.
pub struct TextFactory<S> {
    field: FieldAccessor<S, String>,
    placeholder: Option<String>,
    max_length: Option<usize>,
}

impl<S> TextFactory<S> {
    /// Create a factory from infallible accessors.
    pub fn new<G, W>(get: G, set: W) -> Self
    where
        G: Fn(&S) -> String + Send + Sync + 'static,
        W: Fn(&mut S, &str) + Send + Sync + 'static,
    {
        Self {
            field: FieldAccessor::infallible(get, move |s, v: String| set(s, &v)),
            placeholder: None,
            max_length: None,
        }
    }

    /// Create a factory from fallible accessors, e.g. for parsed numbers.
    pub fn fallible<G, W>(get: G, set: W) -> Self
    where
        G: Fn(&S) -> Result<String, ValueError> + Send + Sync + 'static,
        W: Fn(&mut S, &str) -> Result<(), ValueError> + Send + Sync + 'static,
    {
        Self {
            field: FieldAccessor::fallible(get, move |s, v: String| set(s, &v)),
            placeholder: None,
            max_length: None,
        }
    }

    /// Placeholder shown by every created field.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Character limit applied to every created field.
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }
}

impl<S> ReadOnlyFactory<S, TextField> for TextFactory<S> {
    fn new_instance(&self, _record: &S) -> TextField {
        let mut field = TextField::new();
        if let Some(placeholder) = &self.placeholder {
            field.set_placeholder(placeholder.clone());
        }
        field.set_max_length(self.max_length);
        field
    }

    fn read_from_record(&self, record: &S, control: &mut TextField) -> Result<(), ValueError> {
        control.set_text((self.field.get)(record)?);
        Ok(())
    }
}

impl<S> EditableFactory<S, TextField> for TextFactory<S> {
    fn write_to_record(&self, record: &mut S, control: &TextField) -> Result<(), ValueError> {
        (self.field.set)(record, control.text().to_owned())
    }
}

/// Password field factory bound to a `String` field.
pub struct PasswordFactory<S> {
    field: FieldAccessor<S, String>,
}

impl<S> PasswordFactory<S> {
    /// Create a factory from infallible accessors.
    pub fn new<G, W>(get: G, set: W) -> Self
    where
        G: Fn(&S) -> String + Send + Sync + 'static,
        W: Fn(&mut S, &str) + Send + Sync + 'static,
    {
        Self {
            field: FieldAccessor::infallible(get, move |s, v: String| set(s, &v)),
        }
    }
}

impl<S> ReadOnlyFactory<S, PasswordField> for PasswordFactory<S> {
    fn new_instance(&self, _record: &S) -> PasswordField {
        PasswordField::new()
    }

    fn read_from_record(&self, record: &S, control: &mut PasswordField) -> Result<(), ValueError> {
        control.set_text((self.field.get)(record)?);
        Ok(())
    }
}

impl<S> EditableFactory<S, PasswordField> for PasswordFactory<S> {
    fn write_to_record(&self, record: &mut S, control: &PasswordField) -> Result<(), ValueError> {
        (self.field.set)(record, control.text().to_owned())
    }
}

/// Choice box factory over a fixed item list, bound to an optional string.
pub struct ChoiceFactory<S> {
    items: Vec<String>,
    field: FieldAccessor<S, Option<String>>,
}

impl<S> ChoiceFactory<S> {
    /// Create a factory offering `items`.
    pub fn new<I, T, G, W>(items: I, get: G, set: W) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
        G: Fn(&S) -> Option<String> + Send + Sync + 'static,
        W: Fn(&mut S, Option<&str>) + Send + Sync + 'static,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            field: FieldAccessor::infallible(get, move |s, v: Option<String>| {
                set(s, v.as_deref())
            }),
        }
    }
}

impl<S> ReadOnlyFactory<S, ChoiceBox> for ChoiceFactory<S> {
    fn new_instance(&self, _record: &S) -> ChoiceBox {
        ChoiceBox::new(self.items.iter().cloned())
    }

    fn read_from_record(&self, record: &S, control: &mut ChoiceBox) -> Result<(), ValueError> {
        match (self.field.get)(record)? {
            Some(value) => {
                if !control.items().iter().any(|item| *item == value) {
                    return Err(ValueError::parse(value, "not one of the column's choices"));
                }
                control.select_item(&value);
            }
            None => control.clear_selection(),
        }
        Ok(())
    }
}

impl<S> EditableFactory<S, ChoiceBox> for ChoiceFactory<S> {
    fn write_to_record(&self, record: &mut S, control: &ChoiceBox) -> Result<(), ValueError> {
        (self.field.set)(record, control.selected_item().map(str::to_owned))
    }
}

/// Date picker factory bound to an optional date.
pub struct DateFactory<S> {
    field: FieldAccessor<S, Option<NaiveDate>>,
    format: Option<String>,
}

impl<S> DateFactory<S> {
    /// Create a factory from infallible accessors.
    pub fn new<G, W>(get: G, set: W) -> Self
    where
        G: Fn(&S) -> Option<NaiveDate> + Send + Sync + 'static,
        W: Fn(&mut S, Option<NaiveDate>) + Send + Sync + 'static,
    {
        Self {
            field: FieldAccessor::infallible(get, set),
            format: None,
        }
    }

    /// Create a factory from fallible accessors.
    pub fn fallible<G, W>(get: G, set: W) -> Self
    where
        G: Fn(&S) -> Result<Option<NaiveDate>, ValueError> + Send + Sync + 'static,
        W: Fn(&mut S, Option<NaiveDate>) -> Result<(), ValueError> + Send + Sync + 'static,
    {
        Self {
            field: FieldAccessor::fallible(get, set),
            format: None,
        }
    }

    /// Display format applied to every created picker.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

impl<S> ReadOnlyFactory<S, DatePicker> for DateFactory<S> {
    fn new_instance(&self, _record: &S) -> DatePicker {
        let mut picker = DatePicker::new();
        if let Some(format) = &self.format {
            picker.set_format(format.clone());
        }
        picker
    }

    fn read_from_record(&self, record: &S, control: &mut DatePicker) -> Result<(), ValueError> {
        control.set_date((self.field.get)(record)?);
        Ok(())
    }
}

impl<S> EditableFactory<S, DatePicker> for DateFactory<S> {
    fn write_to_record(&self, record: &mut S, control: &DatePicker) -> Result<(), ValueError> {
        (self.field.set)(record, control.date())
    }
}

/// Checkbox factory bound to a `bool` field.
pub struct CheckboxFactory<S> {
    field: FieldAccessor<S, bool>,
    caption: String,
}

impl<S> CheckboxFactory<S> {
    /// Create a factory from infallible accessors.
    pub fn new<G, W>(get: G, set: W) -> Self
    where
        G: Fn(&S) -> bool + Send + Sync + 'static,
        W: Fn(&mut S, bool) + Send + Sync + 'static,
    {
        Self {
            field: FieldAccessor::infallible(get, set),
            caption: String::new(),
        }
    }

    /// Caption shown next to every created checkbox.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }
}

impl<S> ReadOnlyFactory<S, CheckBox> for CheckboxFactory<S> {
    fn new_instance(&self, _record: &S) -> CheckBox {
        CheckBox::new(self.caption.clone())
    }

    fn read_from_record(&self, record: &S, control: &mut CheckBox) -> Result<(), ValueError> {
        control.set_checked((self.field.get)(record)?);
        Ok(())
    }
}

impl<S> EditableFactory<S, CheckBox> for CheckboxFactory<S> {
    fn write_to_record(&self, record: &mut S, control: &CheckBox) -> Result<(), ValueError> {
        (self.field.set)(record, control.is_checked())
    }
}

/// Button factory captioning each button from the record.
pub struct ButtonFactory<S> {
    caption: Getter<S, String>,
}

impl<S> ButtonFactory<S> {
    /// Use the same caption for every row.
    pub fn with_caption(caption: impl Into<String>) -> Self {
        let caption = caption.into();
        Self {
            caption: Box::new(move |_| Ok(caption.clone())),
        }
    }

    /// Derive the caption from the record.
    pub fn new<G>(caption: G) -> Self
    where
        G: Fn(&S) -> String + Send + Sync + 'static,
    {
        Self {
            caption: Box::new(move |s| Ok(caption(s))),
        }
    }
}

impl<S> ReadOnlyFactory<S, Button> for ButtonFactory<S> {
    fn new_instance(&self, _record: &S) -> Button {
        Button::new("")
    }

    fn read_from_record(&self, record: &S, control: &mut Button) -> Result<(), ValueError> {
        control.set_text((self.caption)(record)?);
        Ok(())
    }
}
