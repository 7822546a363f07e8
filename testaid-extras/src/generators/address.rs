//! US street address generator

use rand::Rng;

use testaid::bounded::random_bool;
use testaid::stats::pick_random;
use testaid::{GenerationConfig, Generator};

const STREET_NAMES: &[&str] = &[
    "Main", "Oak", "Pine", "Maple", "Cedar", "Elm", "Washington", "Lake", "Hill", "Park",
    "Sunset", "Lincoln", "Church", "Highland", "River", "Jefferson", "Franklin", "Spring",
    "Willow", "Madison", "Walnut", "Chestnut", "Meadow", "Ridge",
];

const STREET_TYPES: &[&str] = &[
    "St", "Ave", "Blvd", "Rd", "Ln", "Dr", "Ct", "Way", "Pl", "Ter", "Pkwy", "Cir",
];

const UNIT_TYPES: &[&str] = &["Apt", "Suite", "Unit", "Ste", "#"];

/// Generator for US street addresses.
///
/// Produces `<number> <street name> <street type>`, followed half of the
/// time by ` <unit type> <unit number>`, e.g. `1742 Maple Ave Apt 12`.
#[derive(Debug, Clone)]
pub struct UsAddressGenerator {
    max_house_number: u32,
    max_unit_number: u32,
}

impl UsAddressGenerator {
    /// Create a generator with house numbers below 10000 and unit numbers
    /// below 1000
    pub fn new() -> Self {
        Self {
            max_house_number: 10_000,
            max_unit_number: 1_000,
        }
    }
}

impl Default for UsAddressGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<String> for UsAddressGenerator {
    fn generate(&self, rng: &mut dyn rand::RngCore, _config: &GenerationConfig) -> String {
        let number = rng.r#gen_range(1..self.max_house_number);
        let name = pick_random(rng, STREET_NAMES).unwrap_or_default();
        let street_type = pick_random(rng, STREET_TYPES).unwrap_or_default();
        let mut address = format!("{} {} {}", number, name, street_type);

        if random_bool(rng) {
            let unit_type = pick_random(rng, UNIT_TYPES).unwrap_or_default();
            let unit_number = rng.r#gen_range(1..self.max_unit_number);
            address.push_str(&format!(" {} {}", unit_type, unit_number));
        }

        address
    }
}
