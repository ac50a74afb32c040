//! Lazy uniform shuffling of sequences.

use rand::rngs::ThreadRng;
use rand::Rng;

/// Iterator yielding the elements of a source sequence in uniformly random
/// order, one element per `next` call.
///
/// Each draw picks a random remaining element and swap-removes it, so the
/// whole sequence is a Fisher-Yates permutation: every element appears
/// exactly once.
pub struct Shuffled<T, R: Rng> {
    buffer: Vec<T>,
    rng: R,
}

impl<T, R: Rng> Iterator for Shuffled<T, R> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.buffer.is_empty() {
            return None;
        }
        let j = self.rng.random_range(0..self.buffer.len());
        Some(self.buffer.swap_remove(j))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.buffer.len(), Some(self.buffer.len()))
    }
}

impl<T, R: Rng> ExactSizeIterator for Shuffled<T, R> {}

/// Shuffle `source` with the thread-local random source.
pub fn shuffle<T>(source: impl IntoIterator<Item = T>) -> Shuffled<T, ThreadRng> {
    shuffle_with(source, rand::rng())
}

/// Shuffle `source` with a caller-supplied random source.
///
/// Handy for deterministic shuffles from a seeded RNG.
pub fn shuffle_with<T, R: Rng>(source: impl IntoIterator<Item = T>, rng: R) -> Shuffled<T, R> {
    Shuffled {
        buffer: source.into_iter().collect(),
        rng,
    }
}
