//! Contiguous partitioning of slices into chunks and batches.

use crate::error::{KitbagError, KitbagResult};

/// Split a slice into contiguous groups sized for `num_chunks` consumers.
///
/// The group size is `ceil(len / num_chunks)`, so the last group may be
/// smaller; for some lengths this produces fewer than `num_chunks` groups.
/// The concatenation of the groups, in order, always equals the source.
///
/// `num_chunks == 1` yields the whole slice as a single group. Errors if
/// `num_chunks` is zero.
pub fn split_into_n_chunks<T>(
    source: &[T],
    num_chunks: usize,
) -> KitbagResult<impl Iterator<Item = &[T]>> {
    if num_chunks == 0 {
        return Err(KitbagError::InvalidArgument(
            "num_chunks must be a positive value".to_string(),
        ));
    }

    // chunks() requires a non-zero size, which an empty source would produce.
    let chunk_size = source.len().div_ceil(num_chunks).max(1);
    Ok(source.chunks(chunk_size))
}

/// Split a slice into contiguous groups of `batch_size` elements; the final
/// group holds whatever remains.
///
/// Errors if `batch_size` is zero.
pub fn split_into_batches<T>(
    source: &[T],
    batch_size: usize,
) -> KitbagResult<impl Iterator<Item = &[T]>> {
    if batch_size == 0 {
        return Err(KitbagError::InvalidArgument(
            "batch_size must be greater than zero".to_string(),
        ));
    }

    Ok(source.chunks(batch_size))
}
