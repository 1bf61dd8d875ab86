use crate::slug::{Slug, ALPHABET, SLUG_LENGTH};
use rand::Rng;

/// Trait for producing fresh slugs.
///
/// Implementations are pure generators that don't interact with storage;
/// collision handling is the store's job. Uniform distribution over the
/// alphabet is required, cryptographic unpredictability is not.
pub trait SlugGenerator: Send + Sync + 'static {
    /// Produces a fresh slug. Each call is independent; no state is
    /// retained between calls beyond the random source.
    fn generate(&self) -> Slug;
}

/// Generates slugs of [`SLUG_LENGTH`] characters drawn uniformly at random
/// (with replacement) from [`ALPHABET`].
///
/// Uses the thread-local rng, so concurrent workers each draw from their
/// own generator without contention.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSlugGenerator;

impl RandomSlugGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl SlugGenerator for RandomSlugGenerator {
    fn generate(&self) -> Slug {
        let mut rng = rand::rng();
        let code: String = (0..SLUG_LENGTH)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        Slug::new_unchecked(code)
    }
}
