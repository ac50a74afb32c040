//! String hashing helpers.
//!
//! Nothing in here is cryptographically secure. The hashes are meant for
//! cheap in-process duplicate filtering (e.g. as `HashSet` keys), where an
//! occasional collision is tolerable. If collisions are unacceptable, use a
//! real digest instead.

/// Multiplier table cycled through while accumulating the hash.
const PRIMES: [u32; 39] = [
    5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97, 101,
    103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179,
];

/// Hash a string into an integer that is stable between calls within one
/// build, but not guaranteed stable across versions of this crate.
///
/// Uniqueness is not guaranteed and the output is trivially reversible;
/// this is a dedup aid, not a security primitive.
pub fn hash_str_insecure(s: &str) -> u32 {
    let mut hash: u32 = 0;
    for (i, c) in s.chars().enumerate() {
        let prime = PRIMES[i % PRIMES.len()];
        hash = hash.wrapping_mul(prime).wrapping_add(c as u32);
    }
    hash
}
