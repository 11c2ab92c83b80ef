use log::debug;

use crate::core::record::CsvRecord;
use crate::engine::header::parse_header;
use crate::engine::resolver::write_scalar;
use crate::error::CsvObjectError;

/// Imports CSV data given as one raw text blob.
///
/// Splits the text on `\n` and delegates to [`import_from_lines`]. Blank
/// lines anywhere in the input (including between the header and the
/// first data row, or at the end) are discarded before processing.
///
/// # Examples
///
/// ```
/// use csv_object::{import_from_text, CsvRecord, Field, FieldMut, ScalarMut};
///
/// #[derive(Default, Debug, PartialEq)]
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
/// let people: Vec<Person> = import_from_text("Id|int64,Name|string\n1,Ann\n2,Bo\n").unwrap();
/// assert_eq!(people, vec![
///     Person { id: 1, name: "Ann".to_string() },
///     Person { id: 2, name: "Bo".to_string() },
/// ]);
/// ```
pub fn import_from_text<T>(raw: &str) -> Result<Vec<T>, CsvObjectError>
where
    T: CsvRecord + Default,
{
    let lines: Vec<&str> = raw.split('\n').collect();
    import_from_lines(&lines)
}

/// Imports CSV data given as a sequence of lines.
///
/// The first non-blank line is the header; every following non-blank
/// line becomes one record, in input order. One fresh `T::default()` is
/// allocated per row and filled field by field, so the result instances
/// are independently owned and never shared.
///
/// The whole import aborts on the first error: an empty input, a
/// malformed header, an unknown type tag, a row whose cell count differs
/// from the header's column count, a cell that fails conversion, or a
/// field path that does not fit `T`. No partial result is returned.
/// Line numbers in errors index the blank-filtered sequence, with the
/// header at position 0.
pub fn import_from_lines<T, S>(lines: &[S]) -> Result<Vec<T>, CsvObjectError>
where
    T: CsvRecord + Default,
    S: AsRef<str>,
{
    let lines: Vec<&str> = lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(CsvObjectError::EmptyInput);
    }

    let columns = parse_header(lines[0])?;
    debug!("importing {} rows with {} columns", lines.len() - 1, columns.len());

    let mut records = Vec::with_capacity(lines.len() - 1);

    for (line_no, line) in lines.iter().enumerate().skip(1) {
        let cells: Vec<&str> = line.split(',').collect();
        if cells.len() != columns.len() {
            return Err(CsvObjectError::RowShape {
                expected: columns.len(),
                found: cells.len(),
                line: line_no,
            });
        }

        let mut record = T::default();
        for (column_no, (cell, column)) in cells.iter().zip(&columns).enumerate() {
            let value = column.scalar_type.decode(cell).ok_or_else(|| {
                CsvObjectError::Conversion {
                    value: (*cell).to_string(),
                    target: column.scalar_type,
                    line: line_no,
                    column: column_no + 1,
                }
            })?;
            write_scalar(&mut record, &column.path, value)?;
        }
        records.push(record);
    }

    Ok(records)
}
