//! Locale-invariant conversion of loosely typed values.
//!
//! Test fixtures often hand back values whose static type is not the one the
//! assertion wants (a database column read as text, a count stored as a
//! float). [`Value`] carries such an input and the `to_*` functions convert
//! it, failing with a typed [`HelperError`] instead of panicking.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;
use std::num::IntErrorKind;

use crate::datetime::min_datetime;
use crate::error::{HelperError, HelperResult};

/// A loosely typed input to the coercion helpers
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value at all (a null column, a missing field)
    Absent,
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Text(String),
    DateTime(NaiveDateTime),
    /// A value of some other type, identified by name
    Other(String),
}

impl Value {
    /// An [`Value::Other`] naming the type `T`
    pub fn other<T: ?Sized>() -> Self {
        Value::Other(std::any::type_name::<T>().to_string())
    }

    /// Name of the variant's source type, used in error messages
    pub fn type_name(&self) -> &str {
        match self {
            Value::Absent => "absent",
            Value::Int(_) => "integer",
            Value::UInt(_) => "unsigned integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Text(_) => "text",
            Value::DateTime(_) => "datetime",
            Value::Other(name) => name,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "<absent>"),
            Value::Int(v) => write!(f, "{}", v),
            Value::UInt(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "{}", v),
            Value::DateTime(v) => write!(f, "{}", v),
            Value::Other(name) => write!(f, "<{}>", name),
        }
    }
}

macro_rules! impl_from_primitive {
    ($variant:ident, $wide:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value as $wide)
                }
            }
        )*
    };
}

impl_from_primitive!(Int, i64: i8, i16, i32, i64, isize);
impl_from_primitive!(UInt, u64: u8, u16, u32, u64, usize);
impl_from_primitive!(Float, f64: f32, f64);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::DateTime(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Absent, Into::into)
    }
}

// ============================================================================
// Integers
// ============================================================================

/// Largest magnitude a float may have and still fit in `i128`
const I128_LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

fn round_to_i128(value: f64, target: &'static str) -> HelperResult<i128> {
    let rounded = value.round();
    if !rounded.is_finite() || rounded >= I128_LIMIT || rounded < -I128_LIMIT {
        return Err(HelperError::overflow(target, value));
    }
    Ok(rounded as i128)
}

fn parse_i128(text: &str, target: &'static str) -> HelperResult<i128> {
    let trimmed = text.trim();
    trimmed.parse::<i128>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            HelperError::overflow(target, trimmed)
        }
        _ => HelperError::format_error(target, text),
    })
}

/// Convert `value` to any primitive integer type.
///
/// `Absent` becomes zero. Floats round half away from zero; text is trimmed
/// and parsed as an optionally signed decimal integer.
pub fn to_integer<T>(value: &Value) -> HelperResult<T>
where
    T: TryFrom<i128>,
{
    let target = std::any::type_name::<T>();
    let wide = match value {
        Value::Absent => 0,
        Value::Int(v) => i128::from(*v),
        Value::UInt(v) => i128::from(*v),
        Value::Float(v) => round_to_i128(*v, target)?,
        Value::Bool(v) => i128::from(*v),
        Value::Text(text) => parse_i128(text, target)?,
        Value::DateTime(_) | Value::Other(_) => {
            return Err(HelperError::invalid_cast(target, value.type_name()));
        }
    };

    T::try_from(wide).map_err(|_| HelperError::overflow(target, value))
}

/// [`to_integer`] that maps `Absent` to `None`
pub fn to_nullable_integer<T>(value: &Value) -> HelperResult<Option<T>>
where
    T: TryFrom<i128>,
{
    if value.is_absent() {
        return Ok(None);
    }
    to_integer(value).map(Some)
}

pub fn to_i32(value: &Value) -> HelperResult<i32> {
    to_integer(value)
}

pub fn to_i64(value: &Value) -> HelperResult<i64> {
    to_integer(value)
}

pub fn to_nullable_i32(value: &Value) -> HelperResult<Option<i32>> {
    to_nullable_integer(value)
}

pub fn to_nullable_i64(value: &Value) -> HelperResult<Option<i64>> {
    to_nullable_integer(value)
}

// ============================================================================
// Date/time
// ============================================================================

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

fn parse_datetime(text: &str) -> HelperResult<NaiveDateTime> {
    let trimmed = text.trim();

    // Offsets are normalized to UTC
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DATE_FORMATS.iter().find_map(|format| {
                NaiveDate::parse_from_str(trimmed, format)
                    .ok()
                    .map(|date| date.and_time(NaiveTime::MIN))
            })
        })
        .ok_or_else(|| HelperError::format_error("NaiveDateTime", text))
}

/// Convert `value` to a timestamp.
///
/// `Absent` becomes [`min_datetime`]. Text may be RFC 3339, ISO
/// `YYYY-MM-DD[T ]HH:MM:SS[.f]`, a bare `YYYY-MM-DD`, or US
/// `MM/DD/YYYY[ HH:MM:SS]`.
pub fn to_datetime(value: &Value) -> HelperResult<NaiveDateTime> {
    match value {
        Value::Absent => Ok(min_datetime()),
        Value::DateTime(v) => Ok(*v),
        Value::Text(text) => parse_datetime(text),
        _ => Err(HelperError::invalid_cast("NaiveDateTime", value.type_name())),
    }
}

/// [`to_datetime`] that maps `Absent` to `None`
pub fn to_nullable_datetime(value: &Value) -> HelperResult<Option<NaiveDateTime>> {
    if value.is_absent() {
        return Ok(None);
    }
    to_datetime(value).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use test_case::test_case;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_opt(h, mi, s))
            .unwrap()
    }

    #[test_case(Value::Absent, 0; "absent")]
    #[test_case(Value::from(42i64), 42; "int")]
    #[test_case(Value::from(7u8), 7; "uint")]
    #[test_case(Value::from(2.5), 3; "half rounds up")]
    #[test_case(Value::from(-2.5), -3; "negative half rounds down")]
    #[test_case(Value::from(2.4f32), 2; "below half")]
    #[test_case(Value::from(true), 1; "true")]
    #[test_case(Value::from(false), 0; "false")]
    #[test_case(Value::from(" -17 "), -17; "padded text")]
    #[test_case(Value::from("+8"), 8; "signed text")]
    #[test_case(Value::from("2147483647"), i32::MAX; "max text")]
    fn test_to_i32(value: Value, expected: i32) {
        assert_eq!(to_i32(&value).unwrap(), expected);
    }

    #[test_case(Value::from("2147483648"), ErrorKind::Overflow; "text above max")]
    #[test_case(Value::from(i64::MIN), ErrorKind::Overflow; "int below min")]
    #[test_case(Value::from(u64::MAX), ErrorKind::Overflow; "uint above max")]
    #[test_case(Value::from(f64::NAN), ErrorKind::Overflow; "nan")]
    #[test_case(Value::from(f64::INFINITY), ErrorKind::Overflow; "infinity")]
    #[test_case(Value::from(1e10), ErrorKind::Overflow; "large float")]
    #[test_case(Value::from("1".repeat(60)), ErrorKind::Overflow; "too many digits")]
    #[test_case(Value::from("12abc"), ErrorKind::FormatError; "trailing letters")]
    #[test_case(Value::from("2.5"), ErrorKind::FormatError; "decimal text")]
    #[test_case(Value::from(""), ErrorKind::FormatError; "empty text")]
    #[test_case(Value::from(at(2020, 1, 1, 0, 0, 0)), ErrorKind::InvalidCast; "datetime")]
    #[test_case(Value::other::<Vec<u8>>(), ErrorKind::InvalidCast; "other")]
    fn test_to_i32_errors(value: Value, expected: ErrorKind) {
        assert_eq!(to_i32(&value).unwrap_err().kind(), expected);
    }

    #[test]
    fn test_to_i64() {
        assert_eq!(to_i64(&Value::from("9223372036854775807")).unwrap(), i64::MAX);
        assert_eq!(to_i64(&Value::from(i64::MIN)).unwrap(), i64::MIN);
        assert_eq!(
            to_i64(&Value::from(u64::MAX)).unwrap_err().kind(),
            ErrorKind::Overflow
        );
        assert_eq!(
            to_i64(&Value::Other("Widget".into())).unwrap_err().kind(),
            ErrorKind::InvalidCast
        );
    }

    #[test]
    fn test_to_integer_generic() {
        assert_eq!(to_integer::<u8>(&Value::from(255)).unwrap(), 255);
        assert_eq!(
            to_integer::<u8>(&Value::from(-1)).unwrap_err().kind(),
            ErrorKind::Overflow
        );
        assert_eq!(to_integer::<u64>(&Value::from(u64::MAX)).unwrap(), u64::MAX);
        assert_eq!(to_integer::<i16>(&Value::from(-0.5)).unwrap(), -1);
    }

    #[test]
    fn test_nullable_integers() {
        assert_eq!(to_nullable_i32(&Value::Absent).unwrap(), None);
        assert_eq!(to_nullable_i64(&Value::from(None::<i64>)).unwrap(), None);
        assert_eq!(to_nullable_i64(&Value::from(Some(5i64))).unwrap(), Some(5));
        assert_eq!(to_nullable_i32(&Value::from("12")).unwrap(), Some(12));
        assert!(to_nullable_i32(&Value::from("x")).is_err());
    }

    #[test_case("2021-03-04T05:06:07", at(2021, 3, 4, 5, 6, 7); "iso t")]
    #[test_case("2021-03-04 05:06:07", at(2021, 3, 4, 5, 6, 7); "iso space")]
    #[test_case("2021-03-04", at(2021, 3, 4, 0, 0, 0); "iso date")]
    #[test_case("03/04/2021", at(2021, 3, 4, 0, 0, 0); "us date")]
    #[test_case("03/04/2021 17:30:00", at(2021, 3, 4, 17, 30, 0); "us datetime")]
    #[test_case("2021-03-04T05:06:07+02:00", at(2021, 3, 4, 3, 6, 7); "rfc3339 offset")]
    #[test_case("  2021-03-04  ", at(2021, 3, 4, 0, 0, 0); "padded")]
    fn test_to_datetime_text(text: &str, expected: NaiveDateTime) {
        assert_eq!(to_datetime(&Value::from(text)).unwrap(), expected);
    }

    #[test]
    fn test_to_datetime_fractional_seconds() {
        let parsed = to_datetime(&Value::from("2021-03-04T05:06:07.250")).unwrap();
        assert_eq!(
            parsed,
            at(2021, 3, 4, 5, 6, 7) + chrono::TimeDelta::milliseconds(250)
        );
    }

    #[test]
    fn test_to_datetime_variants() {
        let value = at(1999, 12, 31, 23, 59, 59);
        assert_eq!(to_datetime(&Value::from(value)).unwrap(), value);
        assert_eq!(to_datetime(&Value::Absent).unwrap(), min_datetime());

        assert_eq!(
            to_datetime(&Value::from("not a date")).unwrap_err().kind(),
            ErrorKind::FormatError
        );
        assert_eq!(
            to_datetime(&Value::from("2021-02-30")).unwrap_err().kind(),
            ErrorKind::FormatError
        );
        assert_eq!(
            to_datetime(&Value::from(20210304)).unwrap_err().kind(),
            ErrorKind::InvalidCast
        );
        assert_eq!(
            to_datetime(&Value::from(true)).unwrap_err().kind(),
            ErrorKind::InvalidCast
        );
    }

    #[test]
    fn test_to_nullable_datetime() {
        assert_eq!(to_nullable_datetime(&Value::Absent).unwrap(), None);
        assert_eq!(
            to_nullable_datetime(&Value::from(Some("2000-01-01"))).unwrap(),
            Some(at(2000, 1, 1, 0, 0, 0))
        );
    }

    #[test]
    fn test_value_display_and_names() {
        assert_eq!(Value::from(3).to_string(), "3");
        assert_eq!(Value::Absent.to_string(), "<absent>");
        assert_eq!(Value::Other("Widget".into()).type_name(), "Widget");
        assert_eq!(Value::from("x").type_name(), "text");
    }
}
