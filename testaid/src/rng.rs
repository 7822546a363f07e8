//! Random sources: providers, a fixed-sequence stub, and a generation scope.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::bounded::{self, BoundedRandom};
use crate::config::GenerationConfig;
use crate::error::HelperResult;
use crate::stats;
use crate::text;

/// Trait for providing random number generators
pub trait RngProvider: Send + Sync {
    /// The type of RNG this provider creates
    type Rng: RngCore + Send;

    /// Create a new RNG instance with an optional seed
    fn create_rng(&self, seed: Option<u64>) -> Self::Rng;

    /// Create a new RNG instance with a random seed
    fn create_random_rng(&self) -> Self::Rng {
        self.create_rng(None)
    }
}

/// Default RNG provider backed by `StdRng`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRngProvider;

impl RngProvider for DefaultRngProvider {
    type Rng = StdRng;

    fn create_rng(&self, seed: Option<u64>) -> Self::Rng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Provider that falls back to a fixed base seed, so every RNG it hands out
/// replays the same stream unless another seed is requested
#[derive(Debug, Clone)]
pub struct SeededRngProvider {
    base_seed: u64,
}

impl SeededRngProvider {
    /// Create a new seeded provider
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }
}

impl RngProvider for SeededRngProvider {
    type Rng = StdRng;

    fn create_rng(&self, seed: Option<u64>) -> Self::Rng {
        StdRng::seed_from_u64(seed.unwrap_or(self.base_seed))
    }
}

/// Create a fresh entropy-seeded RNG
pub fn create_rng() -> StdRng {
    DefaultRngProvider.create_random_rng()
}

/// Create an RNG that replays the stream for `seed`
pub fn create_seeded_rng(seed: u64) -> StdRng {
    DefaultRngProvider.create_rng(Some(seed))
}

const FRACTION_BITS: u32 = 53;

/// The `[0, 1)` fraction `rand` derives from a single 64-bit word.
///
/// Only the top 53 bits are used.
pub fn fraction_from_word(word: u64) -> f64 {
    (word >> (64 - FRACTION_BITS)) as f64 / (1u64 << FRACTION_BITS) as f64
}

/// The word a [`SequenceRng`] must emit for `rand` to draw `fraction`.
///
/// `fraction` is clamped to `[0, 1)`.
pub fn word_for_fraction(fraction: f64) -> u64 {
    let scale = (1u64 << FRACTION_BITS) as f64;
    let max_mantissa = (1u64 << FRACTION_BITS) - 1;
    let mantissa = ((fraction.max(0.0) * scale) as u64).min(max_mantissa);
    mantissa << (64 - FRACTION_BITS)
}

/// Fixed-sequence RNG that cycles through the supplied words.
///
/// Useful for pinning a draw to an exact value in tests. An empty sequence
/// behaves like `[0]`. Helpers that redraw until values differ, such as
/// [`shuffle`](crate::stats::shuffle), loop forever on a stub that repeats
/// a single word.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    words: Vec<u64>,
    position: usize,
}

impl SequenceRng {
    /// Create a stub that replays `words` cyclically
    pub fn new(words: Vec<u64>) -> Self {
        let words = if words.is_empty() { vec![0] } else { words };
        Self { words, position: 0 }
    }

    /// Create a stub whose `f64` draws replay `fractions`
    pub fn from_fractions(fractions: &[f64]) -> Self {
        Self::new(fractions.iter().map(|f| word_for_fraction(*f)).collect())
    }

    /// Number of words consumed so far
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RngCore for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let word = self.words[self.position % self.words.len()];
        self.position += 1;
        word
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// A generation scope: one RNG plus the configuration its draws use.
///
/// Each scope owns its RNG, so independent scopes never share a stream.
#[derive(Debug, Clone)]
pub struct Randomizer<R> {
    rng: R,
    config: GenerationConfig,
}

impl Randomizer<StdRng> {
    /// Scope backed by an entropy-seeded RNG
    pub fn from_entropy() -> Self {
        Self::new(create_rng())
    }

    /// Scope backed by an RNG seeded with `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::new(create_seeded_rng(seed))
    }
}

impl<R: RngCore> Randomizer<R> {
    /// Wrap an RNG with the default configuration
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            config: GenerationConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    /// The configuration draws use
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Borrow the underlying RNG
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// A value in `[min_inclusive, max_exclusive)`
    pub fn in_range<T: BoundedRandom>(
        &mut self,
        max_exclusive: T,
        min_inclusive: T,
    ) -> HelperResult<T> {
        T::random_in_range(&mut self.rng, max_exclusive, min_inclusive)
    }

    /// A value below `max_exclusive`, from the type's default lower bound
    pub fn below<T: BoundedRandom>(&mut self, max_exclusive: T) -> HelperResult<T> {
        T::random_below(&mut self.rng, max_exclusive)
    }

    /// A random boolean
    pub fn boolean(&mut self) -> bool {
        bounded::random_bool(&mut self.rng)
    }

    /// Independent draws in `[min_inclusive, max_exclusive)`
    pub fn sequence<T: BoundedRandom>(
        &mut self,
        max_exclusive: T,
        min_inclusive: T,
        length: Option<usize>,
    ) -> HelperResult<Vec<T>> {
        bounded::random_sequence(
            &mut self.rng,
            max_exclusive,
            min_inclusive,
            length,
            &self.config,
        )
    }

    /// A random string of exactly `length` characters
    pub fn string(&mut self, length: usize) -> HelperResult<String> {
        text::random_string(&mut self.rng, length)
    }

    /// A random string of the configured default length
    pub fn default_string(&mut self) -> String {
        text::random_string_default(&mut self.rng, &self.config)
    }

    /// One element of `values`, or `None` when it is empty
    pub fn pick<T: Clone>(&mut self, values: &[T]) -> Option<T> {
        stats::pick_random(&mut self.rng, values)
    }

    /// The elements of `source` in random order
    pub fn shuffle<T, I>(&mut self, source: Option<I>) -> HelperResult<Vec<T>>
    where
        I: IntoIterator<Item = T>,
    {
        stats::shuffle(&mut self.rng, source)
    }
}
