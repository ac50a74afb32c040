//! Kitbag - a grab-bag utility library
//!
//! Independent, mostly stateless helpers with no unifying architecture:
//! sequence partitioning and shuffling, random draws, string hashing,
//! min/max wrappers, error-chain flattening, a serialized file logger, and
//! network reachability probes. The only coupling is incidental - the
//! prober can log failures through the logger.
//!
//! ## Quick Start
//!
//! ```no_run
//! use kitbag::logging::FileLogger;
//! use kitbag::net::{ping_ip, probe_host};
//! use kitbag::seq::split_into_batches;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let work: Vec<u32> = (0..100).collect();
//!     for batch in split_into_batches(&work, 10)? {
//!         println!("batch of {}", batch.len());
//!     }
//!
//!     let logger = FileLogger::for_application("myapp", "probes.log", None)?;
//!     let outcome = ping_ip("192.168.1.1", Some(&logger)).await?;
//!     println!("gateway reachable: {}", outcome.is_success());
//!
//!     println!("web server up: {}", probe_host("192.168.1.1", 443));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod hash;
pub mod logging;
pub mod math;
pub mod net;
pub mod seq;

// Re-exports
pub use error::{flatten_error_chain, KitbagError, KitbagResult};
pub use hash::hash_str_insecure;
pub use logging::FileLogger;
pub use math::{max_of, min_of};
pub use net::{ping_ip, probe_host, PingOutcome};
pub use seq::{
    random_numbers, random_numbers_with, shuffle, shuffle_with, split_into_batches,
    split_into_n_chunks,
};
