//! The generator abstraction shared by the pattern generators.

use rand::RngCore;

use crate::config::GenerationConfig;

/// Core generator trait for creating random test data
pub trait Generator<T> {
    /// Generate a random value of type T using the provided RNG and configuration
    fn generate(&self, rng: &mut dyn RngCore, config: &GenerationConfig) -> T;

    /// Generate `count` independent values
    fn generate_many(
        &self,
        rng: &mut dyn RngCore,
        config: &GenerationConfig,
        count: usize,
    ) -> Vec<T> {
        (0..count).map(|_| self.generate(rng, config)).collect()
    }
}

/// A type-erased generator
pub struct BoxedGenerator<T> {
    generator: Box<dyn Generator<T> + Send + Sync>,
}

impl<T> BoxedGenerator<T> {
    /// Create a new boxed generator
    pub fn new<G: Generator<T> + Send + Sync + 'static>(generator: G) -> Self {
        Self {
            generator: Box::new(generator),
        }
    }
}

impl<T> Generator<T> for BoxedGenerator<T> {
    fn generate(&self, rng: &mut dyn RngCore, config: &GenerationConfig) -> T {
        self.generator.generate(rng, config)
    }
}
