use crate::core::scalar::ScalarType;
use thiserror::Error;

#[derive(Error, Debug)]
/// Conversion error
///
/// Every failure of an import or export call is terminal: no partial
/// result is produced, and the variant carries enough context (line,
/// column, field path) to locate the offending input.
pub enum CsvObjectError {
    /// The input contained no lines (or only blank lines), or the record
    /// batch given to export was empty.
    #[error("empty input data")]
    EmptyInput,

    /// A header column token could not be parsed.
    #[error("malformed header column [{column}]: \"{token}\" ({reason})")]
    MalformedHeader {
        column: usize,
        token: String,
        reason: String,
    },

    /// The header declared a scalar type tag that is not recognized.
    #[error("unsupported value type: \"{tag}\"")]
    UnsupportedType { tag: String },

    /// A data line did not have one cell per header column.
    #[error("csv data damaged, expected [{expected}] columns, found [{found}], at line [{line}]")]
    RowShape {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// A cell value could not be converted to the column's scalar type.
    #[error("failed to convert \"{value}\" to {target} at line [{line}], column [{column}]")]
    Conversion {
        value: String,
        target: ScalarType,
        line: usize,
        column: usize,
    },

    /// A field path segment did not name a field of the record.
    #[error("field not found: \"{path}\"")]
    FieldNotFound { path: String },

    /// A field path resolved to a field of the wrong kind or scalar type.
    #[error("type mismatch at \"{path}\": expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: String,
        found: String,
    },

    /// A record field is neither a supported scalar nor a nested record.
    #[error("only scalar fields and nested records allowed, \"{path}\" has type {type_name}")]
    UnsupportedField {
        path: String,
        type_name: &'static str,
    },
}
