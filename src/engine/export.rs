use log::debug;

use crate::core::record::{CsvRecord, Field};
use crate::error::CsvObjectError;

/// Exports a batch of records as full CSV text: one header line built
/// from the first record, then one value line per record, each line
/// terminated by `\n`.
///
/// All records are assumed to share the first record's shape; the header
/// is not re-derived or verified per row, so a batch with drifting
/// shapes produces undetected misaligned output. Fails with an
/// empty-input error when `records` is empty.
///
/// # Examples
///
/// ```
/// use csv_object::{export_all, CsvRecord, Field, FieldMut, ScalarMut};
///
/// #[derive(Default)]
/// struct Person {
///     id: i64,
///     name: String,
/// }
///
/// impl CsvRecord for Person {
///     fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>> {
///         match name {
///             "Id" => Some(FieldMut::Scalar(ScalarMut::Int64(&mut self.id))),
///             "Name" => Some(FieldMut::Scalar(ScalarMut::String(&mut self.name))),
///             _ => None,
///         }
///     }
///
///     fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
///         vec![
///             ("Id", Field::Scalar(self.id.into())),
///             ("Name", Field::Scalar(self.name.clone().into())),
///         ]
///     }
/// }
///
/// let people = vec![
///     Person { id: 1, name: "Ann".to_string() },
///     Person { id: 2, name: "Bo".to_string() },
/// ];
/// let text = export_all(&people).unwrap();
/// assert_eq!(text, "Id|int64,Name|string\n1,Ann\n2,Bo\n");
/// ```
pub fn export_all<T: CsvRecord>(records: &[T]) -> Result<String, CsvObjectError> {
    if records.is_empty() {
        return Err(CsvObjectError::EmptyInput);
    }

    debug!("exporting {} records", records.len());

    let mut content = String::new();
    for (index, record) in records.iter().enumerate() {
        let (header, row) = record_to_line(record)?;
        if index == 0 {
            content.push_str(&header);
            content.push('\n');
        }
        content.push_str(&row);
        content.push('\n');
    }

    Ok(content)
}

/// Exports only the value line of a single record, optionally terminated
/// by `\n`.
///
/// Fails when the record flattens to nothing (a record with no fields).
pub fn export_row(record: &dyn CsvRecord, with_newline: bool) -> Result<String, CsvObjectError> {
    let (_, mut row) = record_to_line(record)?;
    if row.is_empty() {
        return Err(CsvObjectError::EmptyInput);
    }
    if with_newline {
        row.push('\n');
    }
    Ok(row)
}

/// Exports only the header line for a single record's shape, optionally
/// terminated by `\n`.
///
/// Fails when the record flattens to nothing (a record with no fields).
pub fn export_header(record: &dyn CsvRecord, with_newline: bool) -> Result<String, CsvObjectError> {
    let (mut header, _) = record_to_line(record)?;
    if header.is_empty() {
        return Err(CsvObjectError::EmptyInput);
    }
    if with_newline {
        header.push('\n');
    }
    Ok(header)
}

/// Flattens one record into its header line and value line.
fn record_to_line(record: &dyn CsvRecord) -> Result<(String, String), CsvObjectError> {
    let mut headers = Vec::new();
    let mut values = Vec::new();
    flatten(record, "", &mut headers, &mut values)?;
    Ok((headers.join(","), values.join(",")))
}

/// Depth-first field walk: scalars append a `path|tag` header token and
/// an encoded value token at the current position; nested records recurse
/// with their name spliced onto the parent path. A field of any other
/// kind aborts the export.
fn flatten(
    record: &dyn CsvRecord,
    parent: &str,
    headers: &mut Vec<String>,
    values: &mut Vec<String>,
) -> Result<(), CsvObjectError> {
    for (name, field) in record.fields() {
        let path = if parent.is_empty() {
            name.to_string()
        } else {
            format!("{parent}.{name}")
        };

        match field {
            Field::Scalar(value) => {
                headers.push(format!("{path}|{}", value.scalar_type()));
                values.push(value.encode());
            }
            Field::Record(nested) => flatten(nested, &path, headers, values)?,
            Field::Unsupported(type_name) => {
                return Err(CsvObjectError::UnsupportedField { path, type_name });
            }
        }
    }
    Ok(())
}
