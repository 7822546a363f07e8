//! # testaid Extras
//!
//! Pattern generators for synthetic test data, built on `testaid`:
//! - **Text**: fixed-length random strings
//! - **Contact**: US phone numbers, email addresses
//! - **Vehicle**: VINs with a valid check digit
//! - **Address**: US street addresses
//!
//! Every generator implements [`testaid::Generator<String>`] and draws from
//! the RNG it is handed, so a seeded RNG reproduces the same data.
//!
//! ## Quick Start
//!
//! ```rust
//! use testaid_extras::prelude::*;
//! use testaid::{GenerationConfig, Generator};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn main() {
//! let mut rng = StdRng::seed_from_u64(1);
//! let config = GenerationConfig::default();
//!
//! let phone = PhoneNumberGenerator::new().generate(&mut rng, &config);
//! assert_eq!(phone.len(), 12);
//!
//! let email = EmailGenerator::new().generate(&mut rng, &config);
//! assert!(email.contains('@'));
//!
//! let vin = VinGenerator::new().generate(&mut rng, &config);
//! assert!(is_valid_vin(&vin));
//!
//! let address = UsAddressGenerator::new().generate(&mut rng, &config);
//! assert!(address.starts_with(|c: char| c.is_ascii_digit()));
//! # }
//! ```

// Re-export testaid for convenience
pub use testaid;

// Generators module
pub mod generators;

// Re-export commonly used items
pub mod prelude {
    //! Convenient re-exports of commonly used generators

    pub use crate::generators::address::UsAddressGenerator;
    pub use crate::generators::contact::{EmailGenerator, PhoneNumberGenerator};
    pub use crate::generators::text::RandomStringGenerator;
    pub use crate::generators::vehicle::{VinGenerator, is_valid_vin, vin_check_digit};
}
