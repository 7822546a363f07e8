//! Contact detail generators: US phone numbers and email addresses

use rand::Rng;
use std::num::NonZeroUsize;

use testaid::text::random_string_of;
use testaid::{GenerationConfig, Generator};

// ============================================================================
// Phone Number Generator
// ============================================================================

/// Generator for US phone numbers in `NXX-NXX-XXXX` form.
///
/// `N` is a digit from 2 to 9 (North American numbering never starts an
/// area code or exchange with 0 or 1); `X` is any digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneNumberGenerator;

impl PhoneNumberGenerator {
    pub fn new() -> Self {
        Self
    }

    fn push_group(rng: &mut dyn rand::RngCore, out: &mut String, leading_n: bool, len: usize) {
        for i in 0..len {
            let digit = if i == 0 && leading_n {
                rng.r#gen_range(2..10u32)
            } else {
                rng.r#gen_range(0..10u32)
            };
            out.push(char::from_digit(digit, 10).unwrap_or('0'));
        }
    }
}

impl Generator<String> for PhoneNumberGenerator {
    fn generate(&self, rng: &mut dyn rand::RngCore, _config: &GenerationConfig) -> String {
        let mut number = String::with_capacity(12);
        Self::push_group(rng, &mut number, true, 3);
        number.push('-');
        Self::push_group(rng, &mut number, true, 3);
        number.push('-');
        Self::push_group(rng, &mut number, false, 4);
        number
    }
}

// ============================================================================
// Email Generator
// ============================================================================

const TOP_LEVEL_DOMAINS: [&str; 15] = [
    "com", "net", "org", "int", "edu", "mil", "gov", "me", "ru", "au", "cz", "gb", "hk", "it",
    "jp",
];

/// Generator for email addresses `<local>@<domain>.<tld>`.
///
/// The local part is 3 to 7 random characters and the domain 3 to 11; the
/// TLD is one of a fixed list of common ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailGenerator;

impl EmailGenerator {
    pub fn new() -> Self {
        Self
    }

    /// The TLDs addresses are drawn from
    pub fn top_level_domains() -> &'static [&'static str] {
        &TOP_LEVEL_DOMAINS
    }

    fn random_part(rng: &mut dyn rand::RngCore, min: usize, max_exclusive: usize) -> String {
        let len = rng.r#gen_range(min..max_exclusive);
        random_string_of(rng, NonZeroUsize::new(len).unwrap_or(NonZeroUsize::MIN))
    }
}

impl Generator<String> for EmailGenerator {
    fn generate(&self, rng: &mut dyn rand::RngCore, _config: &GenerationConfig) -> String {
        let local = Self::random_part(rng, 3, 8);
        let domain = Self::random_part(rng, 3, 12);
        let tld = TOP_LEVEL_DOMAINS[rng.r#gen_range(0..TOP_LEVEL_DOMAINS.len())];
        format!("{}@{}.{}", local, domain, tld)
    }
}
