//! Sequence partitioning and random-draw helpers.
//!
//! Everything in here is lazy: chunking and batching yield non-owning
//! subslices of the source, shuffling and random draws produce values one
//! at a time. Re-invoke on the original source to replay; the iterators
//! themselves are single-pass.

pub mod chunk;
pub mod random;
pub mod shuffle;

// Re-exports for convenience
pub use chunk::{split_into_batches, split_into_n_chunks};
pub use random::{random_numbers, random_numbers_with, RandomDraws};
pub use shuffle::{shuffle, shuffle_with, Shuffled};
