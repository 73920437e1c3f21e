/// Uniform shuffle used to fix the processing order of a new session.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shuffle with the thread-local RNG.
pub fn shuffle<T>(items: Vec<T>) -> Vec<T> {
    shuffle_with(items, &mut rand::rng())
}

/// Shuffle deterministically from `seed`.
pub fn shuffle_seeded<T>(items: Vec<T>, seed: u64) -> Vec<T> {
    shuffle_with(items, &mut StdRng::seed_from_u64(seed))
}

/// Fisher-Yates: walk from the back, swapping each slot with a uniformly
/// chosen slot at or before it.
pub fn shuffle_with<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
    for i in (2..=items.len()).rev() {
        let k = rng.random_range(0..i);
        items.swap(k, i - 1);
    }
    items
}
