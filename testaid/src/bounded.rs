//! Bounded random generation for primitive types.
//!
//! Every draw honors the half-open bound pair `min_inclusive <= v < max_exclusive`.
//! Bounds are validated before any randomness is consumed.

use chrono::NaiveDateTime;
use rand::{Rng, RngCore};
use std::fmt;

use crate::config::GenerationConfig;
use crate::datetime::{from_ticks, min_datetime, to_ticks, to_ticks_exclusive};
use crate::error::{HelperError, HelperResult};

/// Widest span a floating-point bound pair may cover.
pub const RANGE_CEILING: f64 = i64::MAX as f64;

/// Types that can be drawn uniformly from a half-open bound pair
pub trait BoundedRandom: Sized + Copy + PartialOrd + fmt::Display {
    /// Check the bound pair without drawing
    fn check_bounds(max_exclusive: Self, min_inclusive: Self) -> HelperResult<()> {
        if min_inclusive < max_exclusive {
            Ok(())
        } else {
            Err(HelperError::invalid_range(min_inclusive, max_exclusive))
        }
    }

    /// Draw a value in `[min_inclusive, max_exclusive)`
    fn random_in_range<R: RngCore + ?Sized>(
        rng: &mut R,
        max_exclusive: Self,
        min_inclusive: Self,
    ) -> HelperResult<Self>;

    /// Draw a value below `max_exclusive`, starting from the type's default lower bound
    fn random_below<R: RngCore + ?Sized>(rng: &mut R, max_exclusive: Self) -> HelperResult<Self>;
}

macro_rules! impl_bounded_int {
    ($($t:ty),*) => {
        $(
            impl BoundedRandom for $t {
                fn random_in_range<R: RngCore + ?Sized>(
                    rng: &mut R,
                    max_exclusive: Self,
                    min_inclusive: Self,
                ) -> HelperResult<Self> {
                    Self::check_bounds(max_exclusive, min_inclusive)?;
                    Ok(rng.r#gen_range(min_inclusive..max_exclusive))
                }

                fn random_below<R: RngCore + ?Sized>(
                    rng: &mut R,
                    max_exclusive: Self,
                ) -> HelperResult<Self> {
                    Self::random_in_range(rng, max_exclusive, 0)
                }
            }
        )*
    };
}

impl_bounded_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

fn check_float_bounds(max_exclusive: f64, min_inclusive: f64) -> HelperResult<()> {
    // Also rejects NaN bounds
    if !(min_inclusive < max_exclusive) {
        return Err(HelperError::invalid_range(min_inclusive, max_exclusive));
    }

    let range = max_exclusive - min_inclusive;
    if !range.is_finite() || range > RANGE_CEILING {
        return Err(HelperError::range_too_wide(
            min_inclusive,
            max_exclusive,
            RANGE_CEILING,
        ));
    }
    Ok(())
}

/// Offset in `[0, range)` for a range already checked against the ceiling.
///
/// The range is split into whole units and a fractional remainder. A range
/// below one unit scales a single fraction. Wider ranges draw a unit slot and
/// a fraction within it, redrawing when the pair lands past the remainder of
/// the last, partial slot.
/// Integral ranges are not restricted to whole-number results.
fn draw_offset<R: RngCore + ?Sized>(rng: &mut R, range: f64) -> f64 {
    let range_base = range.floor();
    let range_mantissa = range - range_base;

    if range_base < 1.0 {
        return rng.r#gen::<f64>() * range_mantissa;
    }

    let partial_slot = if range_mantissa > 0.0 { 1 } else { 0 };
    let slots = (range_base as i64).saturating_add(partial_slot);
    loop {
        let result_base = rng.r#gen_range(0..slots) as f64;
        let result_mantissa = rng.r#gen::<f64>();
        let offset = result_base + result_mantissa;
        if offset < range {
            return offset;
        }
    }
}

fn next_below_f64(value: f64) -> f64 {
    if value.is_nan() || value == f64::NEG_INFINITY {
        value
    } else if value == 0.0 {
        -f64::from_bits(1)
    } else if value > 0.0 {
        f64::from_bits(value.to_bits() - 1)
    } else {
        f64::from_bits(value.to_bits() + 1)
    }
}

fn next_below_f32(value: f32) -> f32 {
    if value.is_nan() || value == f32::NEG_INFINITY {
        value
    } else if value == 0.0 {
        -f32::from_bits(1)
    } else if value > 0.0 {
        f32::from_bits(value.to_bits() - 1)
    } else {
        f32::from_bits(value.to_bits() + 1)
    }
}

fn next_above_positive_f64(value: f64) -> f64 {
    f64::from_bits(value.to_bits() + 1)
}

/// Lowest lower bound that keeps `[min, max_exclusive)` within the ceiling.
fn narrowed_min(max_exclusive: f64) -> f64 {
    let mut min = (max_exclusive - RANGE_CEILING).max(0.0);
    if min > 0.0 {
        while max_exclusive - min > RANGE_CEILING {
            min = next_above_positive_f64(min);
        }
        tracing::trace!(
            max_exclusive,
            min_inclusive = min,
            "narrowed floating-point lower bound to stay within the range ceiling"
        );
    }
    min
}

impl BoundedRandom for f64 {
    fn check_bounds(max_exclusive: Self, min_inclusive: Self) -> HelperResult<()> {
        check_float_bounds(max_exclusive, min_inclusive)
    }

    fn random_in_range<R: RngCore + ?Sized>(
        rng: &mut R,
        max_exclusive: Self,
        min_inclusive: Self,
    ) -> HelperResult<Self> {
        Self::check_bounds(max_exclusive, min_inclusive)?;

        let result = min_inclusive + draw_offset(rng, max_exclusive - min_inclusive);
        if result < max_exclusive {
            Ok(result)
        } else {
            Ok(next_below_f64(max_exclusive))
        }
    }

    fn random_below<R: RngCore + ?Sized>(rng: &mut R, max_exclusive: Self) -> HelperResult<Self> {
        let min = narrowed_min(max_exclusive);
        if min > 0.0 && min >= max_exclusive {
            // Too large for any span of the ceiling to be representable
            return Err(HelperError::range_too_wide(0.0, max_exclusive, RANGE_CEILING));
        }
        Self::random_in_range(rng, max_exclusive, min)
    }
}

impl BoundedRandom for f32 {
    fn check_bounds(max_exclusive: Self, min_inclusive: Self) -> HelperResult<()> {
        check_float_bounds(f64::from(max_exclusive), f64::from(min_inclusive))
    }

    fn random_in_range<R: RngCore + ?Sized>(
        rng: &mut R,
        max_exclusive: Self,
        min_inclusive: Self,
    ) -> HelperResult<Self> {
        Self::check_bounds(max_exclusive, min_inclusive)?;

        let (max, min) = (f64::from(max_exclusive), f64::from(min_inclusive));
        let result = (min + draw_offset(rng, max - min)) as f32;
        if result < max_exclusive {
            Ok(result)
        } else {
            Ok(next_below_f32(max_exclusive))
        }
    }

    fn random_below<R: RngCore + ?Sized>(rng: &mut R, max_exclusive: Self) -> HelperResult<Self> {
        let max = f64::from(max_exclusive);
        let mut min = narrowed_min(max) as f32;
        while max - f64::from(min) > RANGE_CEILING {
            min = f32::from_bits(min.to_bits() + 1);
        }
        if min > 0.0 && min >= max_exclusive {
            return Err(HelperError::range_too_wide(0.0, max_exclusive, RANGE_CEILING));
        }
        Self::random_in_range(rng, max_exclusive, min)
    }
}

impl BoundedRandom for NaiveDateTime {
    fn random_in_range<R: RngCore + ?Sized>(
        rng: &mut R,
        max_exclusive: Self,
        min_inclusive: Self,
    ) -> HelperResult<Self> {
        Self::check_bounds(max_exclusive, min_inclusive)?;

        // A leap-second minimum folds into the next second, which still sorts above it
        let (min, max) = (to_ticks(min_inclusive), to_ticks_exclusive(max_exclusive));
        if min >= max {
            return Err(HelperError::invalid_argument(
                "max_exclusive",
                format!(
                    "{} and {} fall within the same leap second",
                    min_inclusive, max_exclusive
                ),
            ));
        }
        let ticks = rng.r#gen_range(min..max);
        from_ticks(ticks).ok_or_else(|| HelperError::overflow("NaiveDateTime", ticks))
    }

    fn random_below<R: RngCore + ?Sized>(rng: &mut R, max_exclusive: Self) -> HelperResult<Self> {
        Self::random_in_range(rng, max_exclusive, min_datetime())
    }
}

/// A value in `[min_inclusive, max_exclusive)`
pub fn random_in_range<T, R>(rng: &mut R, max_exclusive: T, min_inclusive: T) -> HelperResult<T>
where
    T: BoundedRandom,
    R: RngCore + ?Sized,
{
    T::random_in_range(rng, max_exclusive, min_inclusive)
}

/// A value below `max_exclusive`.
///
/// Integers start at zero and date/times at [`min_datetime`]. Floats start at
/// `max(0, max_exclusive - RANGE_CEILING)` so the span stays drawable.
pub fn random_below<T, R>(rng: &mut R, max_exclusive: T) -> HelperResult<T>
where
    T: BoundedRandom,
    R: RngCore + ?Sized,
{
    T::random_below(rng, max_exclusive)
}

/// Map a fraction in `[0, 1)` to a boolean, rounding half away from zero.
pub fn bool_from_fraction(fraction: f64) -> bool {
    fraction.round() >= 1.0
}

/// A random boolean: a fraction below 0.5 is `false`, 0.5 and above is `true`
pub fn random_bool<R: RngCore + ?Sized>(rng: &mut R) -> bool {
    bool_from_fraction(rng.r#gen::<f64>())
}

/// Independent draws in `[min_inclusive, max_exclusive)`.
///
/// Duplicates are allowed. Without a length, one is drawn from the
/// configured sequence length bounds, so the result is never empty.
pub fn random_sequence<T, R>(
    rng: &mut R,
    max_exclusive: T,
    min_inclusive: T,
    length: Option<usize>,
    config: &GenerationConfig,
) -> HelperResult<Vec<T>>
where
    T: BoundedRandom,
    R: RngCore + ?Sized,
{
    T::check_bounds(max_exclusive, min_inclusive)?;

    let length = match length {
        Some(length) => length,
        None => {
            let lower = config.min_sequence_length.max(1);
            let upper = config.max_sequence_length.max(lower + 1);
            let length = rng.r#gen_range(lower..upper);
            tracing::debug!(length, "no sequence length requested, drew one");
            length
        }
    };

    (0..length)
        .map(|_| T::random_in_range(rng, max_exclusive, min_inclusive))
        .collect()
}

/// Two draws from the bound pair, returned as `(lower, upper)`
pub fn random_range_pair<T, R>(
    rng: &mut R,
    max_exclusive: T,
    min_inclusive: T,
) -> HelperResult<(T, T)>
where
    T: BoundedRandom,
    R: RngCore + ?Sized,
{
    let first = T::random_in_range(rng, max_exclusive, min_inclusive)?;
    let second = T::random_in_range(rng, max_exclusive, min_inclusive)?;
    Ok(order_pair(first, second))
}

/// Two draws below `max_exclusive`, returned as `(lower, upper)`
pub fn random_range_pair_below<T, R>(rng: &mut R, max_exclusive: T) -> HelperResult<(T, T)>
where
    T: BoundedRandom,
    R: RngCore + ?Sized,
{
    let first = T::random_below(rng, max_exclusive)?;
    let second = T::random_below(rng, max_exclusive)?;
    Ok(order_pair(first, second))
}

fn order_pair<T: PartialOrd>(first: T, second: T) -> (T, T) {
    if second < first {
        (second, first)
    } else {
        (first, second)
    }
}

/// Whether `min` and `max` lie further apart than `max_range`
pub fn is_wider_than_range(max_range: f64, min: f64, max: f64) -> bool {
    (max - min).abs() > max_range
}
