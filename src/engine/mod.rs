/// Header line parsing into column specs.
pub mod header;

/// Row import: header-driven construction of record instances.
pub mod import;

/// Row export: field-walk emission of header and value lines.
pub mod export;

/// Field path resolution for writing decoded scalars.
pub mod resolver;
