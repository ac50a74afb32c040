//! Serialized plain-text file logging.
//!
//! [`FileLogger`] appends timestamped lines to a target file, creating
//! parent directories as needed. Appends to the same path are mutually
//! exclusive across every logger in the process, so concurrent callers
//! never tear each other's lines; loggers on unrelated paths do not
//! serialize against each other.
//!
//! ## Usage
//!
//! ```no_run
//! use kitbag::logging::FileLogger;
//!
//! # fn main() -> kitbag::error::KitbagResult<()> {
//! let logger = FileLogger::new("/tmp/myapp/events.log");
//! logger.append("service started")?;
//! # Ok(())
//! # }
//! ```
//!
//! Inside a tokio runtime, use [`FileLogger::append_async`] instead; the
//! blocking variant would stall (or panic in) the async worker thread.

pub mod writer;

// Re-exports for convenience
pub use writer::FileLogger;
