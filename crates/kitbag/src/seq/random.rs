//! Random integer draws over a half-open range.

use std::collections::HashSet;

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::error::{KitbagError, KitbagResult};

/// Draw `count` integers in `[0, max_exclusive)` from the thread-local
/// random source.
///
/// With `allow_repetition` the draws are independent and duplicates may
/// appear. Without it, duplicates are rejected and redrawn until `count`
/// distinct values have been produced; requesting more distinct values than
/// the range holds is an invalid-argument error (rejection sampling could
/// never fill the quota).
pub fn random_numbers(
    count: usize,
    max_exclusive: usize,
    allow_repetition: bool,
) -> KitbagResult<RandomDraws<ThreadRng>> {
    random_numbers_with(count, max_exclusive, allow_repetition, rand::rng())
}

/// Same as [`random_numbers`], driven by a caller-supplied random source.
pub fn random_numbers_with<R: Rng>(
    count: usize,
    max_exclusive: usize,
    allow_repetition: bool,
    rng: R,
) -> KitbagResult<RandomDraws<R>> {
    if !allow_repetition && count > max_exclusive {
        return Err(KitbagError::InvalidArgument(format!(
            "cannot draw {count} distinct values from [0, {max_exclusive})"
        )));
    }
    if count > 0 && max_exclusive == 0 {
        return Err(KitbagError::InvalidArgument(
            "max_exclusive must be positive when drawing values".to_string(),
        ));
    }

    Ok(RandomDraws {
        remaining: count,
        max_exclusive,
        seen: (!allow_repetition).then(HashSet::new),
        rng,
    })
}

/// Lazy iterator over random draws; see [`random_numbers`].
pub struct RandomDraws<R: Rng> {
    remaining: usize,
    max_exclusive: usize,
    /// Values already yielded, when repetition is disallowed.
    seen: Option<HashSet<usize>>,
    rng: R,
}

impl<R: Rng> Iterator for RandomDraws<R> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        loop {
            let candidate = self.rng.random_range(0..self.max_exclusive);
            if let Some(seen) = &mut self.seen {
                // Redraw on collision.
                if !seen.insert(candidate) {
                    continue;
                }
            }
            self.remaining -= 1;
            return Some(candidate);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng> ExactSizeIterator for RandomDraws<R> {}
