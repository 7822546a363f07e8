//! Statistics and random selection over collections.

use num_traits::ToPrimitive;
use rand::{Rng, RngCore};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::error::{HelperError, HelperResult};

const MIN_SAMPLE: usize = 2;

/// Widen every value to f64, requiring at least two of them
fn widen<T: ToPrimitive>(values: &[T], operation: &'static str) -> HelperResult<Vec<f64>> {
    if values.len() < MIN_SAMPLE {
        return Err(HelperError::insufficient_data(
            operation,
            MIN_SAMPLE,
            values.len(),
        ));
    }

    values
        .iter()
        .map(|v| {
            v.to_f64()
                .ok_or_else(|| HelperError::invalid_cast("f64", std::any::type_name::<T>()))
        })
        .collect()
}

/// Median of at least two values.
///
/// Even counts interpolate between the two middle values, hence the f64 result.
pub fn median<T: ToPrimitive>(values: &[T]) -> HelperResult<f64> {
    let mut sorted = widen(values, "median")?;
    sorted.sort_by(f64::total_cmp);

    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[middle - 1] + sorted[middle]) / 2.0)
    } else {
        Ok(sorted[middle])
    }
}

/// Population standard deviation (divisor `n`) of at least two values
pub fn std_dev<T: ToPrimitive>(values: &[T]) -> HelperResult<f64> {
    let widened = widen(values, "standard deviation")?;
    let count = widened.len() as f64;

    let mean = widened.iter().sum::<f64>() / count;
    let sum_of_squares: f64 = widened.iter().map(|v| (v - mean) * (v - mean)).sum();
    Ok((sum_of_squares / count).sqrt())
}

/// Spread between the largest and smallest of at least two values.
///
/// Computed in f64, so e.g. `[i32::MIN, i32::MAX]` does not overflow.
pub fn range<T: ToPrimitive>(values: &[T]) -> HelperResult<f64> {
    let widened = widen(values, "range")?;
    let min = widened.iter().copied().fold(f64::INFINITY, f64::min);
    let max = widened.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok(max - min)
}

/// One element chosen uniformly.
///
/// An empty slice yields `None` and a single element is returned without
/// consuming randomness.
pub fn pick_random<T, R>(rng: &mut R, values: &[T]) -> Option<T>
where
    T: Clone,
    R: RngCore + ?Sized,
{
    match values {
        [] => None,
        [only] => Some(only.clone()),
        _ => Some(values[rng.r#gen_range(0..values.len())].clone()),
    }
}

/// Whether two lists hold the same values in any order.
///
/// Absent lists are never equal to anything, including each other. Values
/// that do not compare equal to themselves, such as `NaN`, match each other.
pub fn has_same_values<T: PartialOrd>(first: Option<&[T]>, second: Option<&[T]>) -> bool {
    let (Some(first), Some(second)) = (first, second) else {
        return false;
    };
    if first.len() != second.len() {
        return false;
    }

    let mut first: Vec<&T> = first.iter().collect();
    let mut second: Vec<&T> = second.iter().collect();
    first.sort_by(|a, b| compare_unordered_last(*a, *b));
    second.sort_by(|a, b| compare_unordered_last(*a, *b));

    first
        .iter()
        .zip(second.iter())
        .all(|(a, b)| a == b || (is_unordered(*a) && is_unordered(*b)))
}

fn is_unordered<T: PartialOrd>(value: &T) -> bool {
    value.partial_cmp(value).is_none()
}

/// Unordered values sort after everything else.
fn compare_unordered_last<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b)
        .unwrap_or_else(|| is_unordered(a).cmp(&is_unordered(b)))
}

/// The elements of `source` in a uniformly random order.
///
/// Each element is keyed by a fresh non-negative random `i64` (redrawn on
/// collision) and the elements come back ordered by key. An empty source
/// yields an empty list; an absent one is an error.
///
/// Keys must eventually differ, so a [`SequenceRng`](crate::rng::SequenceRng)
/// that cycles fewer distinct words than there are items never finishes.
pub fn shuffle<T, I, R>(rng: &mut R, source: Option<I>) -> HelperResult<Vec<T>>
where
    I: IntoIterator<Item = T>,
    R: RngCore + ?Sized,
{
    let source = source.ok_or_else(|| HelperError::null_input("source"))?;

    let mut keyed = BTreeMap::new();
    for item in source {
        let mut key = rng.r#gen_range(0..i64::MAX);
        while keyed.contains_key(&key) {
            tracing::trace!(key, "shuffle key collision, redrawing");
            key = rng.r#gen_range(0..i64::MAX);
        }
        keyed.insert(key, item);
    }

    Ok(keyed.into_values().collect())
}
