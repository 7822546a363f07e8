//! String helpers: random text, repetition, boolean parsing and matching.

use rand::RngCore;
use regex::Regex;
use std::io::Cursor;
use std::num::NonZeroUsize;
use uuid::{Builder, Uuid};

use crate::config::GenerationConfig;
use crate::error::{HelperError, HelperResult};

/// Length of a hyphenated UUID string
const UUID_TEXT_LEN: usize = 36;

fn random_uuid<R: RngCore + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    Builder::from_random_bytes(bytes).into_uuid()
}

fn uuid_text<R: RngCore + ?Sized>(rng: &mut R, length: usize) -> String {
    let mut text = String::with_capacity(length.div_ceil(UUID_TEXT_LEN) * UUID_TEXT_LEN);
    while text.len() < length {
        text.push_str(&random_uuid(rng).hyphenated().to_string());
    }
    text.truncate(length);
    text
}

/// A random string of exactly `length` characters.
///
/// Built by concatenating hyphenated v4 UUIDs drawn from `rng`, so the
/// alphabet is lowercase hex digits and `-`.
pub fn random_string<R: RngCore + ?Sized>(rng: &mut R, length: usize) -> HelperResult<String> {
    let length = NonZeroUsize::new(length)
        .ok_or_else(|| HelperError::invalid_argument("length", "must be a positive integer"))?;
    Ok(random_string_of(rng, length))
}

/// [`random_string`] for a length already known to be positive
pub fn random_string_of<R: RngCore + ?Sized>(rng: &mut R, length: NonZeroUsize) -> String {
    uuid_text(rng, length.get())
}

/// A random string of `config.default_string_length` characters
pub fn random_string_default<R: RngCore + ?Sized>(rng: &mut R, config: &GenerationConfig) -> String {
    let length = NonZeroUsize::new(config.default_string_length).unwrap_or(NonZeroUsize::MIN);
    random_string_of(rng, length)
}

/// `count` copies of `source` joined by `separator`.
///
/// The separator goes between copies, never after the last one. An absent or
/// empty separator concatenates the copies directly.
pub fn repeat(source: Option<&str>, count: usize, separator: Option<&str>) -> HelperResult<String> {
    let source = source.ok_or_else(|| HelperError::null_input("source"))?;
    let separator = separator.unwrap_or_default();

    Ok(std::iter::repeat_n(source, count)
        .collect::<Vec<_>>()
        .join(separator))
}

/// Parse the common textual spellings of a boolean.
///
/// Accepts `true`/`false`, `1`/`0`, `yes`/`no`, `y`/`n`, `on`/`off` and
/// `t`/`f` in any case. Surrounding whitespace is not trimmed.
pub fn parse_bool(text: Option<&str>) -> HelperResult<bool> {
    let text = text.ok_or_else(|| HelperError::invalid_argument("text", "no value supplied"))?;

    match text.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "on" | "t" => Ok(true),
        "false" | "0" | "no" | "n" | "off" | "f" => Ok(false),
        _ => Err(HelperError::invalid_argument(
            "text",
            format!("'{}' is not a recognized boolean value", text),
        )),
    }
}

/// Whether `pattern` finds a match anywhere in `value`
pub fn regex_match(value: &str, pattern: &str) -> HelperResult<bool> {
    let regex = Regex::new(pattern)
        .map_err(|e| HelperError::invalid_argument("pattern", e.to_string()))?;
    Ok(regex.is_match(value))
}

/// How [`contains`] compares strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringComparison {
    /// Exact byte-for-byte equality
    #[default]
    Ordinal,
    /// Equality after Unicode lowercasing
    OrdinalIgnoreCase,
}

impl StringComparison {
    fn matches(self, candidate: &str, key: &str) -> bool {
        match self {
            StringComparison::Ordinal => candidate == key,
            StringComparison::OrdinalIgnoreCase => candidate.to_lowercase() == key.to_lowercase(),
        }
    }
}

/// Whether any of `items` equals `key` under `comparison`; absent lists
/// contain nothing
pub fn contains<S: AsRef<str>>(items: Option<&[S]>, key: &str, comparison: StringComparison) -> bool {
    items.is_some_and(|items| {
        items
            .iter()
            .any(|item| comparison.matches(item.as_ref(), key))
    })
}

/// An in-memory readable stream over the UTF-8 bytes of `value`, positioned
/// at the start
pub fn to_stream(value: &str) -> Cursor<Vec<u8>> {
    Cursor::new(value.as_bytes().to_vec())
}
