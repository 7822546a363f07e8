//! Random string generator

use std::num::NonZeroUsize;

use testaid::text::random_string_of;
use testaid::{GenerationConfig, Generator, HelperError, HelperResult};

/// Generator for random strings of a fixed length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomStringGenerator {
    length: NonZeroUsize,
}

impl RandomStringGenerator {
    /// Create a generator for strings of exactly `length` characters
    pub fn new(length: usize) -> HelperResult<Self> {
        let length = NonZeroUsize::new(length)
            .ok_or_else(|| HelperError::invalid_argument("length", "must be a positive integer"))?;
        Ok(Self { length })
    }

    /// Create a generator using the configured default string length
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self {
            length: NonZeroUsize::new(config.default_string_length).unwrap_or(NonZeroUsize::MIN),
        }
    }

    pub fn length(&self) -> usize {
        self.length.get()
    }
}

impl Default for RandomStringGenerator {
    fn default() -> Self {
        Self::from_config(&GenerationConfig::default())
    }
}

impl Generator<String> for RandomStringGenerator {
    fn generate(&self, rng: &mut dyn rand::RngCore, _config: &GenerationConfig) -> String {
        random_string_of(rng, self.length)
    }
}
