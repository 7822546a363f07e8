
//! # testaid - helpers for unit-test suites
//!
//! testaid collects the small utilities test code keeps re-writing: bounded
//! random values, collection statistics, loosely typed coercion, timestamp
//! precision and tolerance checks, and string helpers.
//!
//! Every generating function takes its random source explicitly, so a seeded
//! RNG makes any test reproducible.
//!
//! ## Quick Start
//!
//! ```rust
//! use testaid::{Randomizer, stats};
//!
//! let mut scope = Randomizer::seeded(42);
//!
//! let age: u8 = scope.in_range(100, 18).unwrap();
//! assert!((18..100).contains(&age));
//!
//! let samples = scope.sequence(10.0f64, -10.0, Some(500)).unwrap();
//! assert!(stats::std_dev(&samples).unwrap() > 0.0);
//! ```
//!
//! Functions can also be called directly with any `rand::RngCore`:
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use testaid::bounded;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let (low, high) = bounded::random_range_pair(&mut rng, 1000, 0).unwrap();
//! assert!(0 <= low && low <= high && high < 1000);
//! ```

pub mod bounded;
pub mod coerce;
pub mod config;
pub mod datetime;
pub mod error;
pub mod generator;
pub mod rng;
pub mod stats;
pub mod text;

// Re-export the main public API
pub use bounded::{BoundedRandom, RANGE_CEILING};
pub use coerce::Value;
pub use config::{ConfigError, GenerationConfig};
pub use datetime::Precision;
pub use error::{ErrorKind, HelperError, HelperResult, fail_if};
pub use generator::{BoxedGenerator, Generator};
pub use rng::{
    DefaultRngProvider, Randomizer, RngProvider, SeededRngProvider, SequenceRng, create_rng,
    create_seeded_rng,
};
pub use text::StringComparison;
