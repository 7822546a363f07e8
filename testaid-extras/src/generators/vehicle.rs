//! Vehicle identification number generator

use rand::Rng;

use testaid::{GenerationConfig, Generator, HelperError, HelperResult};

/// Characters allowed in a VIN with their check-digit values.
///
/// `I`, `O` and `Q` are excluded as too easily confused with `1` and `0`.
const VIN_ALPHABET: [(char, u32); 33] = [
    ('A', 1),
    ('B', 2),
    ('C', 3),
    ('D', 4),
    ('E', 5),
    ('F', 6),
    ('G', 7),
    ('H', 8),
    ('J', 1),
    ('K', 2),
    ('L', 3),
    ('M', 4),
    ('N', 5),
    ('P', 7),
    ('R', 9),
    ('S', 2),
    ('T', 3),
    ('U', 4),
    ('V', 5),
    ('W', 6),
    ('X', 7),
    ('Y', 8),
    ('Z', 9),
    ('0', 0),
    ('1', 1),
    ('2', 2),
    ('3', 3),
    ('4', 4),
    ('5', 5),
    ('6', 6),
    ('7', 7),
    ('8', 8),
    ('9', 9),
];

const LETTER_COUNT: usize = 23;

/// Positional weights, skipping the check digit at index 8
const WEIGHTS: [u32; 16] = [8, 7, 6, 5, 4, 3, 2, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Length of the prefix and of the suffix around the check digit
pub const VIN_PART_LEN: usize = 8;

/// Total VIN length including the check digit
pub const VIN_LEN: usize = 2 * VIN_PART_LEN + 1;

fn transliterate(c: char) -> Option<u32> {
    VIN_ALPHABET
        .iter()
        .find(|(candidate, _)| *candidate == c)
        .map(|(_, value)| *value)
}

fn check_char(values: impl Iterator<Item = u32>) -> char {
    let sum: u32 = values.zip(WEIGHTS).map(|(v, w)| v * w).sum();
    match sum % 11 {
        10 => 'X',
        digit => char::from_digit(digit, 10).unwrap_or('0'),
    }
}

fn part_values(part: &str, parameter: &'static str) -> HelperResult<Vec<u32>> {
    if part.chars().count() != VIN_PART_LEN {
        return Err(HelperError::invalid_argument(
            parameter,
            format!("must be exactly {} characters", VIN_PART_LEN),
        ));
    }

    part.chars()
        .map(|c| {
            transliterate(c).ok_or_else(|| {
                HelperError::invalid_argument(
                    parameter,
                    format!("'{}' is not a valid VIN character", c),
                )
            })
        })
        .collect()
}

/// The check digit for a VIN made of `prefix` (positions 1-8) and `suffix`
/// (positions 10-17).
///
/// Each character is transliterated to its numeric value, multiplied by its
/// positional weight and summed; the remainder mod 11 is the check digit,
/// with 10 written as `X`.
pub fn vin_check_digit(prefix: &str, suffix: &str) -> HelperResult<char> {
    let mut values = part_values(prefix, "prefix")?;
    values.extend(part_values(suffix, "suffix")?);
    Ok(check_char(values.into_iter()))
}

/// Whether `vin` is 17 VIN characters with a correct check digit
pub fn is_valid_vin(vin: &str) -> bool {
    if !vin.is_ascii() || vin.len() != VIN_LEN {
        return false;
    }
    let (prefix, rest) = vin.split_at(VIN_PART_LEN);
    let (check, suffix) = rest.split_at(1);

    vin_check_digit(prefix, suffix)
        .is_ok_and(|expected| check.chars().next() == Some(expected))
}

/// Generator for 17-character VINs with a valid check digit.
///
/// The prefix is two letters, a digit, then five letters or digits; the
/// suffix is eight letters or digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct VinGenerator;

impl VinGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator<String> for VinGenerator {
    fn generate(&self, rng: &mut dyn rand::RngCore, _config: &GenerationConfig) -> String {
        let letters = &VIN_ALPHABET[..LETTER_COUNT];
        let digits = &VIN_ALPHABET[LETTER_COUNT..];

        let mut picks = Vec::with_capacity(2 * VIN_PART_LEN);
        for position in 0..2 * VIN_PART_LEN {
            let pool = match position {
                0 | 1 => letters,
                2 => digits,
                _ => &VIN_ALPHABET[..],
            };
            picks.push(pool[rng.r#gen_range(0..pool.len())]);
        }

        let check = check_char(picks.iter().map(|(_, value)| *value));
        let mut vin: String = picks.iter().map(|(c, _)| *c).collect();
        vin.insert(VIN_PART_LEN, check);
        vin
    }
}
