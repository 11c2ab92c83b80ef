#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # csv-object

 Typed CSV import and export for arbitrary record types, driven by a
 self-describing header. Each header column carries a dotted field path
 and a scalar type tag (`Id|int64,Address.City|string`), so records with
 flat or nested scalar fields convert in both directions without
 per-type marshaling code.

 ## Core Concepts

 - **CsvRecord:** the capability trait a record type implements once:
   named mutable field lookup for import, ordered field enumeration for
   export. Nested records implement the same trait and are reached
   through dotted paths.
 - **ScalarType / ScalarValue:** the closed set of supported leaf types
   (`string, int8, int, int32, int64, float32, float64, bool, bigint`)
   and the text codec between cells and typed values.
 - **Import engine:** parses the header once, then fills one fresh
   `Default` instance per data row. The first error aborts the whole
   call; no partial result is ever returned.
 - **Export engine:** walks a record's fields depth-first, emitting
   `path|type` header tokens and encoded value tokens.

 The format is deliberately minimal: no quoting or escaping, so field
 values must not contain `,` or newlines. Callers own all I/O; the
 library is a pure in-memory transformation.

 ## Getting Started

```rust
use csv_object::{export_all, import_from_text, CsvRecord, Field, FieldMut, ScalarMut};

#[derive(Default, Debug, PartialEq)]
struct Account {
    id: i64,
    owner: Owner,
    active: bool,
}

#[derive(Default, Debug, PartialEq)]
struct Owner {
    name: String,
}

impl CsvRecord for Account {
    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>> {
        match name {
            "Id" => Some(FieldMut::Scalar(ScalarMut::Int64(&mut self.id))),
            "Owner" => Some(FieldMut::Record(&mut self.owner)),
            "Active" => Some(FieldMut::Scalar(ScalarMut::Bool(&mut self.active))),
            _ => None,
        }
    }

    fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
        vec![
            ("Id", Field::Scalar(self.id.into())),
            ("Owner", Field::Record(&self.owner)),
            ("Active", Field::Scalar(self.active.into())),
        ]
    }
}

impl CsvRecord for Owner {
    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>> {
        match name {
            "Name" => Some(FieldMut::Scalar(ScalarMut::String(&mut self.name))),
            _ => None,
        }
    }

    fn fields(&self) -> Vec<(&'static str, Field<'_>)> {
        vec![("Name", Field::Scalar(self.name.clone().into()))]
    }
}

fn main() -> Result<(), csv_object::CsvObjectError> {
    let csv = "Id|int64,Owner.Name|string,Active|bool
1,Ann,true
2,Bo,false";

    let accounts: Vec<Account> = import_from_text(csv)?;
    assert_eq!(accounts[0].owner.name, "Ann");
    assert!(!accounts[1].active);

    let text = export_all(&accounts)?;
    assert_eq!(text, "Id|int64,Owner.Name|string,Active|bool\n1,Ann,true\n2,Bo,false\n");

    Ok(())
}
```
 */

/// Record capability trait and the scalar value model.
pub mod core;

/// Error types for import and export operations.
pub mod error;

/// Import and export engines plus the header parser.
pub mod engine;

#[doc(inline)]
pub use crate::error::*;

pub use crate::core::record::{CsvRecord, Field, FieldMut, ScalarMut};
pub use crate::core::scalar::{ScalarType, ScalarValue};
pub use crate::engine::export::{export_all, export_header, export_row};
pub use crate::engine::header::{parse_header, ColumnSpec};
pub use crate::engine::import::{import_from_lines, import_from_text};

pub use num_bigint::BigInt;
