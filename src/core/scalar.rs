use std::fmt;

use num_bigint::BigInt;

/// The closed set of scalar types a CSV column can carry.
///
/// Each variant maps to exactly one text-parse rule and one text-render
/// rule. The header names a type with its lowercase tag (`int64`,
/// `bigint`, ...); [`ScalarType::from_tag`] performs the reverse lookup.
///
/// `Int` is the host-width signed integer (`isize`); `BigInt` is an
/// arbitrary-precision integer with no range limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    String,
    Int8,
    Int,
    Int32,
    Int64,
    Float32,
    Float64,
    Bool,
    BigInt,
}

impl ScalarType {
    /// Resolves a header type tag to a scalar type.
    ///
    /// Returns `None` for tags outside the supported set. Tag matching is
    /// exact: no case folding, no aliases.
    ///
    /// # Examples
    ///
    /// ```
    /// use csv_object::ScalarType;
    ///
    /// assert_eq!(ScalarType::from_tag("int64"), Some(ScalarType::Int64));
    /// assert_eq!(ScalarType::from_tag("bigint"), Some(ScalarType::BigInt));
    /// assert_eq!(ScalarType::from_tag("uint128"), None);
    /// ```
    pub fn from_tag(tag: &str) -> Option<ScalarType> {
        match tag {
            "string" => Some(Self::String),
            "int8" => Some(Self::Int8),
            "int" => Some(Self::Int),
            "int32" => Some(Self::Int32),
            "int64" => Some(Self::Int64),
            "float32" => Some(Self::Float32),
            "float64" => Some(Self::Float64),
            "bool" => Some(Self::Bool),
            "bigint" => Some(Self::BigInt),
            _ => None,
        }
    }

    /// The header tag for this type.
    pub fn tag(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int8 => "int8",
            Self::Int => "int",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Bool => "bool",
            Self::BigInt => "bigint",
        }
    }

    /// Converts a raw cell to a typed value.
    ///
    /// Integers are parsed base-10 with the bit-width range check of the
    /// target type; floats with the precision of the target type; `bool`
    /// accepts `1/t/T/TRUE/true/True` and `0/f/F/FALSE/false/False`;
    /// `bigint` accepts any base-10 integer regardless of magnitude;
    /// `string` is the identity (no trimming, no unquoting).
    ///
    /// Returns `None` when the text is not a valid rendition of this type.
    /// The import engine turns that into a conversion error carrying the
    /// offending line and column.
    ///
    /// # Examples
    ///
    /// ```
    /// use csv_object::{ScalarType, ScalarValue};
    ///
    /// assert_eq!(ScalarType::Int8.decode("-128"), Some(ScalarValue::Int8(-128)));
    /// assert_eq!(ScalarType::Int8.decode("128"), None);
    /// assert_eq!(ScalarType::Bool.decode("T"), Some(ScalarValue::Bool(true)));
    /// ```
    pub fn decode(self, text: &str) -> Option<ScalarValue> {
        match self {
            Self::String => Some(ScalarValue::String(text.to_string())),
            Self::Int8 => text.parse::<i8>().ok().map(ScalarValue::Int8),
            Self::Int => text.parse::<isize>().ok().map(ScalarValue::Int),
            Self::Int32 => text.parse::<i32>().ok().map(ScalarValue::Int32),
            Self::Int64 => text.parse::<i64>().ok().map(ScalarValue::Int64),
            Self::Float32 => text.parse::<f32>().ok().map(ScalarValue::Float32),
            Self::Float64 => text.parse::<f64>().ok().map(ScalarValue::Float64),
            Self::Bool => parse_bool(text).map(ScalarValue::Bool),
            Self::BigInt => text.parse::<BigInt>().ok().map(ScalarValue::BigInt),
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single typed cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    String(String),
    Int8(i8),
    Int(isize),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Bool(bool),
    BigInt(BigInt),
}

impl ScalarValue {
    /// The scalar type this value belongs to.
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

    /// Renders the value in its natural base-10 text form.
    ///
    /// No thousands separators, no padding; `bigint` renders full
    /// precision with no exponent notation. `decode` of the result under
    /// the same type yields the value back.
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(v) => f.write_str(v),
            Self::Int8(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Float32(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::BigInt(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! scalar_from {
    ($($native:ty => $variant:ident),* $(,)?) => {
        $(impl From<$native> for ScalarValue {
            fn from(value: $native) -> Self {
                Self::$variant(value)
            }
        })*
    };
}

scalar_from! {
    String => String,
    i8 => Int8,
    isize => Int,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    bool => Bool,
    BigInt => BigInt,
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

// The accepted forms match Go's strconv.ParseBool, so data produced by
// Go writers of this format imports unchanged.
fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_widths_are_range_checked() {
        assert_eq!(ScalarType::Int8.decode("127"), Some(ScalarValue::Int8(127)));
        assert_eq!(ScalarType::Int8.decode("-128"), Some(ScalarValue::Int8(-128)));
        assert_eq!(ScalarType::Int8.decode("128"), None);
        assert_eq!(ScalarType::Int32.decode("2147483647"), Some(ScalarValue::Int32(i32::MAX)));
        assert_eq!(ScalarType::Int32.decode("2147483648"), None);
        assert_eq!(
            ScalarType::Int64.decode("-9223372036854775808"),
            Some(ScalarValue::Int64(i64::MIN))
        );
    }

    #[test]
    fn non_numeric_text_is_rejected() {
        assert_eq!(ScalarType::Int.decode("abc"), None);
        assert_eq!(ScalarType::Int64.decode(""), None);
        assert_eq!(ScalarType::Float64.decode("1.2.3"), None);
        assert_eq!(ScalarType::BigInt.decode("12x"), None);
    }

    #[test]
    fn bool_accepts_short_and_numeric_forms() {
        for text in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(ScalarType::Bool.decode(text), Some(ScalarValue::Bool(true)));
        }
        for text in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(ScalarType::Bool.decode(text), Some(ScalarValue::Bool(false)));
        }
        assert_eq!(ScalarType::Bool.decode("yes"), None);
        assert_eq!(ScalarType::Bool.decode("tRuE"), None);
    }

    #[test]
    fn bigint_has_no_range_limit() {
        let text = "123456789012345678901234567890123456789012345678901234567890";
        let value = ScalarType::BigInt.decode(text).unwrap();
        assert_eq!(value.encode(), text);
        let negative = ScalarType::BigInt.decode("-987654321098765432109876543210").unwrap();
        assert_eq!(negative.encode(), "-987654321098765432109876543210");
    }

    #[test]
    fn string_decode_is_identity() {
        assert_eq!(
            ScalarType::String.decode("  spaces kept  "),
            Some(ScalarValue::String("  spaces kept  ".to_string()))
        );
    }

    #[test]
    fn encode_uses_natural_base10_form() {
        assert_eq!(ScalarValue::Int64(-42).encode(), "-42");
        assert_eq!(ScalarValue::Float64(0.0).encode(), "0");
        assert_eq!(ScalarValue::Float32(1.5).encode(), "1.5");
        assert_eq!(ScalarValue::Bool(true).encode(), "true");
    }

    #[test]
    fn tags_round_trip_through_from_tag() {
        for tag in ["string", "int8", "int", "int32", "int64", "float32", "float64", "bool", "bigint"] {
            let scalar_type = ScalarType::from_tag(tag).unwrap();
            assert_eq!(scalar_type.tag(), tag);
        }
        assert_eq!(ScalarType::from_tag("Int64"), None);
        assert_eq!(ScalarType::from_tag("*big.Int"), None);
    }
}
