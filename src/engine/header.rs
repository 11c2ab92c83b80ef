use std::collections::HashSet;

use crate::core::scalar::ScalarType;
use crate::error::CsvObjectError;

/// One parsed header column: a field path and the declared scalar type.
///
/// Built once per import from the header line and immutable afterwards.
/// `path` holds the dot-separated segments in order; one segment means a
/// top-level field, N segments mean N-1 levels of nesting then a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub path: Vec<String>,
    pub scalar_type: ScalarType,
}

/// Parses a header line into one [`ColumnSpec`] per column.
///
/// The line splits on `,` into column tokens; each token splits on the
/// first `|` into a dotted field path and a type tag. Commas inside
/// tokens cannot be escaped, that is a hard constraint of the format.
///
/// Fails with a malformed-header error when a token has no `|`, when a
/// path segment is empty, or when two columns name the same full path;
/// an unrecognized type tag fails eagerly here, before any data row is
/// looked at.
///
/// # Examples
///
/// ```
/// use csv_object::{parse_header, ScalarType};
///
/// let columns = parse_header("Id|int64,Address.City|string").unwrap();
/// assert_eq!(columns.len(), 2);
/// assert_eq!(columns[1].path, vec!["Address", "City"]);
/// assert_eq!(columns[1].scalar_type, ScalarType::String);
/// ```
pub fn parse_header(line: &str) -> Result<Vec<ColumnSpec>, CsvObjectError> {
    let mut columns = Vec::new();
    let mut seen_paths = HashSet::new();

    for (index, token) in line.split(',').enumerate() {
        let malformed = |reason: &str| CsvObjectError::MalformedHeader {
            column: index + 1,
            token: token.to_string(),
            reason: reason.to_string(),
        };

        let Some((path_part, tag)) = token.split_once('|') else {
            return Err(malformed("missing \"|\" type separator"));
        };

        let path: Vec<String> = path_part.split('.').map(str::to_string).collect();
        if path.iter().any(String::is_empty) {
            return Err(malformed("empty field path segment"));
        }
        if !seen_paths.insert(path_part.to_string()) {
            return Err(malformed("duplicate field path"));
        }

        let scalar_type = ScalarType::from_tag(tag).ok_or_else(|| CsvObjectError::UnsupportedType {
            tag: tag.to_string(),
        })?;

        columns.push(ColumnSpec { path, scalar_type });
    }

    Ok(columns)
}
