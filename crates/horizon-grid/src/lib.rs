//! Horizon Grid - an editable row/column data grid.
//!
//! The grid shows a growing list of records, one row per record, with one
//! editing control per column. Rows are built lazily in batches, a keyboard
//! chord moves between rows, and Tab/Shift+Tab only ever visits the selected
//! row.
//!
//! The crate is headless: controls are plain models that a host toolkit binds
//! to native widgets, and the host forwards its input, focus and scroll events
//! to the grid.
//!
//! # Example
//!
//! ```
//! use horizon_grid::prelude::*;
//!
//! struct Contact {
//!     name: String,
//!     email: String,
//! }
//!
//! let mut grid = EditableGrid::<Contact>::new();
//! grid.append_column_text("name", "Name", |c: &Contact| c.name.clone(), |c, v| c.name = v.to_owned());
//! grid.append_column_text("email", "E-mail", |c: &Contact| c.email.clone(), |c, v| c.email = v.to_owned());
//!
//! let ada = Record::new(Contact { name: "Ada".into(), email: "ada@example.com".into() });
//! grid.append_row(ada.clone());
//! grid.tick();
//!
//! grid.edit_control::<TextField, _>(&ada, "name", |field| field.set_text("Ada L."))?;
//! assert_eq!(ada.read().name, "Ada L.");
//! # Ok::<(), horizon_grid::GridError>(())
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod prelude;
mod record;
pub mod widget;

pub use config::GridConfig;
pub use error::{ConfigError, GridError, Result, ValueError};
pub use grid::EditableGrid;
pub use record::Record;

pub use horizon_grid_core::{Property, ReadOnlyProperty, Signal};
