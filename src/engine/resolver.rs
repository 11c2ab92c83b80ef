use crate::core::record::{CsvRecord, FieldMut};
use crate::core::scalar::ScalarValue;
use crate::error::CsvObjectError;

/// Writes a decoded scalar into `record` at the given field path.
///
/// Every segment except the last must resolve to a nested record; the
/// last must resolve to a scalar slot whose declared type matches the
/// value's. A segment that names no field yields a field-not-found error
/// with the path up to and including the failing segment.
pub fn write_scalar(
    record: &mut dyn CsvRecord,
    path: &[String],
    value: ScalarValue,
) -> Result<(), CsvObjectError> {
    let Some((leaf, parents)) = path.split_last() else {
        return Err(CsvObjectError::FieldNotFound { path: String::new() });
    };

    let mut current = record;
    for (depth, segment) in parents.iter().enumerate() {
        current = match current.field_mut(segment) {
            Some(FieldMut::Record(nested)) => nested,
            Some(FieldMut::Scalar(slot)) => {
                return Err(CsvObjectError::TypeMismatch {
                    path: path[..=depth].join("."),
                    expected: "nested record".to_string(),
                    found: slot.scalar_type().to_string(),
                });
            }
            Some(FieldMut::Unsupported(type_name)) => {
                return Err(CsvObjectError::UnsupportedField {
                    path: path[..=depth].join("."),
                    type_name,
                });
            }
            None => {
                return Err(CsvObjectError::FieldNotFound {
                    path: path[..=depth].join("."),
                });
            }
        };
    }

    match current.field_mut(leaf) {
        Some(FieldMut::Scalar(slot)) => {
            let declared = slot.scalar_type();
            slot.store(value).map_err(|rejected| CsvObjectError::TypeMismatch {
                path: path.join("."),
                expected: declared.to_string(),
                found: rejected.scalar_type().to_string(),
            })
        }
        Some(FieldMut::Record(_)) => Err(CsvObjectError::TypeMismatch {
            path: path.join("."),
            expected: value.scalar_type().to_string(),
            found: "nested record".to_string(),
        }),
        Some(FieldMut::Unsupported(type_name)) => Err(CsvObjectError::UnsupportedField {
            path: path.join("."),
            type_name,
        }),
        None => Err(CsvObjectError::FieldNotFound { path: path.join(".") }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::{Field, ScalarMut};

    #[derive(Default)]
    struct Inner {
        depth: i32,
    }

    impl CsvRecord for Inner {
        fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>> {
            match name {
                "depth" => Some(FieldMut::Scalar(ScalarMut::Int32(&mut self.depth))),
                _ => None,
            }
        }

        fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
            vec![("depth", Field::Scalar(self.depth.into()))]
        }
    }

    #[derive(Default)]
    struct Outer {
        label: String,
        inner: Inner,
    }

    impl CsvRecord for Outer {
        fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>> {
            match name {
                "label" => Some(FieldMut::Scalar(ScalarMut::String(&mut self.label))),
                "inner" => Some(FieldMut::Record(&mut self.inner)),
                _ => None,
            }
        }

        fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
            vec![
                ("label", Field::Scalar(self.label.clone().into())),
                ("inner", Field::Record(&self.inner)),
            ]
        }
    }

    fn segments(path: &str) -> Vec<String> {
        path.split('.').map(str::to_string).collect()
    }

    #[test]
    fn writes_through_nested_path() {
        let mut record = Outer::default();
        write_scalar(&mut record, &segments("inner.depth"), ScalarValue::Int32(5)).unwrap();
        assert_eq!(record.inner.depth, 5);
    }

    #[test]
    fn missing_segment_reports_partial_path() {
        let mut record = Outer::default();
        let err = write_scalar(&mut record, &segments("inner.nope"), ScalarValue::Int32(5));
        match err.unwrap_err() {
            CsvObjectError::FieldNotFound { path } => assert_eq!(path, "inner.nope"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn scalar_in_interior_position_is_a_mismatch() {
        let mut record = Outer::default();
        let err = write_scalar(&mut record, &segments("label.depth"), ScalarValue::Int32(5));
        match err.unwrap_err() {
            CsvObjectError::TypeMismatch { path, found, .. } => {
                assert_eq!(path, "label");
                assert_eq!(found, "string");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn wrong_scalar_type_at_leaf_is_a_mismatch() {
        let mut record = Outer::default();
        let err = write_scalar(&mut record, &segments("label"), ScalarValue::Int64(1));
        match err.unwrap_err() {
            CsvObjectError::TypeMismatch { path, expected, found } => {
                assert_eq!(path, "label");
                assert_eq!(expected, "string");
                assert_eq!(found, "int64");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn record_in_leaf_position_is_a_mismatch() {
        let mut record = Outer::default();
        let err = write_scalar(&mut record, &segments("inner"), ScalarValue::Int32(5));
        assert!(matches!(err.unwrap_err(), CsvObjectError::TypeMismatch { .. }));
    }
}
