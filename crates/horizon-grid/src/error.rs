//! Error types for the grid.

use std::path::PathBuf;

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors surfaced by grid operations.
///
/// Configuration misuse such as registering a duplicate column id is not an
/// error; those calls are ignored. The variants here describe wiring mistakes
/// the caller has to fix.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A control was requested as a type that does not match the column kind.
    #[error("Column '{column}' holds a {actual} control, not a {expected}")]
    TypeMismatch {
        column: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// No column with the given id is registered.
    #[error("Unknown column '{0}'")]
    UnknownColumn(String),

    /// The record is not in the grid's item list.
    #[error("Record is not an item of this grid")]
    UnknownRecord,

    /// The record is an item but its row has not been materialized yet.
    #[error("Row for record at index {index} has not been materialized")]
    NotMaterialized { index: usize },

    /// A write-back was requested for a read-only column kind.
    #[error("Column '{column}' is read-only and cannot write to its record")]
    ReadOnlyColumn { column: String },

    /// Insert position past the end of the item list.
    #[error("Insert index {index} is out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Moving a value between a record and a control failed.
    #[error("Value error in column '{column}': {source}")]
    Value {
        column: String,
        #[source]
        source: ValueError,
    },

    /// The grid configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GridError {
    /// Create a type-mismatch error.
    pub fn type_mismatch(
        column: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            column: column.into(),
            expected,
            actual,
        }
    }

    /// Create a value error for a column.
    pub fn value(column: impl Into<String>, source: ValueError) -> Self {
        Self::Value {
            column: column.into(),
            source,
        }
    }
}

/// Failure converting a value between a record field and a control.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// The record field could not be read as the expected type.
    #[error("Cannot read field: {0}")]
    Read(String),

    /// The control's value could not be stored into the record.
    #[error("Cannot write field: {0}")]
    Write(String),

    /// A text value did not parse.
    #[error("Invalid value '{value}': {message}")]
    Parse { value: String, message: String },
}

impl ValueError {
    /// Create a read error.
    pub fn read(message: impl Into<String>) -> Self {
        Self::Read(message.into())
    }

    /// Create a write error.
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write(message.into())
    }

    /// Create a parse error.
    pub fn parse(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            value: value.into(),
            message: message.into(),
        }
    }
}

/// Errors loading a [`GridConfig`](crate::GridConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read grid config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML text was malformed or had the wrong shape.
    #[error("Invalid grid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is out of range.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_message() {
        let err = GridError::type_mismatch("active", "TextField", "CheckBox");
        assert_eq!(
            err.to_string(),
            "Column 'active' holds a CheckBox control, not a TextField"
        );
    }

    #[test]
    fn test_value_error_is_source() {
        use std::error::Error;

        let err = GridError::value("age", ValueError::parse("abc", "not a number"));
        let source = err.source().expect("value error has a source");
        assert_eq!(source.to_string(), "Invalid value 'abc': not a number");
    }
}
