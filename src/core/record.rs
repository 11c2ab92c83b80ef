use num_bigint::BigInt;

use crate::core::scalar::{ScalarType, ScalarValue};

/// The capability a type must provide to take part in CSV conversion.
///
/// Implementors expose their fields by name for import and as an ordered
/// list for export; the engines never hard-code a concrete record type.
/// A field is either a scalar of one of the supported [`ScalarType`]s or
/// a nested record whose fields satisfy the same constraint. Anything
/// else (a sequence, a map, an `Option`) must be reported as
/// [`Field::Unsupported`] so export can fail with a descriptive error
/// instead of silently skipping it.
///
/// Import additionally requires `Default`: one fresh instance is
/// allocated per data row, so the caller-facing type parameter acts as a
/// pure shape descriptor and nothing is ever written through a shared
/// template value.
///
/// # Examples
///
/// ```
/// use csv_object::{CsvRecord, Field, FieldMut, ScalarMut};
///
/// #[derive(Default)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl CsvRecord for Point {
///     fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>> {
///         match name {
///             "x" => Some(FieldMut::Scalar(ScalarMut::Int32(&mut self.x))),
///             "y" => Some(FieldMut::Scalar(ScalarMut::Int32(&mut self.y))),
///             _ => None,
///         }
///     }
///
///     fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
///         vec![
///             ("x", Field::Scalar(self.x.into())),
///             ("y", Field::Scalar(self.y.into())),
///         ]
///     }
/// }
/// ```
pub trait CsvRecord {
    /// Looks up a direct field of this record by name, for writing.
    ///
    /// Returns `None` when no field of that name exists; the import
    /// engine reports that as a field-not-found error carrying the full
    /// dotted path.
    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>>;

    /// Enumerates the direct fields of this record in declaration order.
    ///
    /// Export walks this list depth-first, so the order here is the
    /// column order of the produced CSV.
    fn fields(&self) -> Vec<(&'static str, Field<'_>)>;
}

/// A read view of one record field, as enumerated by [`CsvRecord::fields`].
pub enum Field<'a> {
    /// A leaf scalar, carried by value.
    Scalar(ScalarValue),
    /// A nested record; export recurses into it with a dotted path prefix.
    Record(&'a dyn CsvRecord),
    /// A field the format cannot carry. The payload is the field's type
    /// name, surfaced verbatim in the export error.
    Unsupported(&'static str),
}

/// A write view of one record field, as returned by [`CsvRecord::field_mut`].
pub enum FieldMut<'a> {
    /// A leaf scalar slot.
    Scalar(ScalarMut<'a>),
    /// A nested record; path resolution descends into it.
    Record(&'a mut dyn CsvRecord),
    /// A field the format cannot carry (see [`Field::Unsupported`]).
    Unsupported(&'static str),
}

/// A mutable slot for exactly one scalar field.
pub enum ScalarMut<'a> {
    String(&'a mut String),
    Int8(&'a mut i8),
    Int(&'a mut isize),
    Int32(&'a mut i32),
    Int64(&'a mut i64),
    Float32(&'a mut f32),
    Float64(&'a mut f64),
    Bool(&'a mut bool),
    BigInt(&'a mut BigInt),
}

impl ScalarMut<'_> {
    /// The declared type of the field behind this slot.
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            Self::String(_) => ScalarType::String,
            Self::Int8(_) => ScalarType::Int8,
            Self::Int(_) => ScalarType::Int,
            Self::Int32(_) => ScalarType::Int32,
            Self::Int64(_) => ScalarType::Int64,
            Self::Float32(_) => ScalarType::Float32,
            Self::Float64(_) => ScalarType::Float64,
            Self::Bool(_) => ScalarType::Bool,
            Self::BigInt(_) => ScalarType::BigInt,
        }
    }

    /// Stores `value` into the slot if its type matches the field's.
    ///
    /// On a mismatch the value is handed back unchanged so the caller can
    /// build a type-mismatch error from it.
    pub fn store(self, value: ScalarValue) -> Result<(), ScalarValue> {
        match (self, value) {
            (Self::String(slot), ScalarValue::String(v)) => *slot = v,
            (Self::Int8(slot), ScalarValue::Int8(v)) => *slot = v,
            (Self::Int(slot), ScalarValue::Int(v)) => *slot = v,
            (Self::Int32(slot), ScalarValue::Int32(v)) => *slot = v,
            (Self::Int64(slot), ScalarValue::Int64(v)) => *slot = v,
            (Self::Float32(slot), ScalarValue::Float32(v)) => *slot = v,
            (Self::Float64(slot), ScalarValue::Float64(v)) => *slot = v,
            (Self::Bool(slot), ScalarValue::Bool(v)) => *slot = v,
            (Self::BigInt(slot), ScalarValue::BigInt(v)) => *slot = v,
            (_, value) => return Err(value),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_accepts_matching_type() {
        let mut field = 0i64;
        let slot = ScalarMut::Int64(&mut field);
        assert!(slot.store(ScalarValue::Int64(99)).is_ok());
        assert_eq!(field, 99);
    }

    #[test]
    fn store_hands_back_mismatched_value() {
        let mut field = String::new();
        let slot = ScalarMut::String(&mut field);
        let rejected = slot.store(ScalarValue::Int64(7)).unwrap_err();
        assert_eq!(rejected, ScalarValue::Int64(7));
        assert_eq!(field, "");
    }

    #[test]
    fn slot_reports_declared_type() {
        let mut field = 0.0f32;
        assert_eq!(ScalarMut::Float32(&mut field).scalar_type(), ScalarType::Float32);
    }
}
