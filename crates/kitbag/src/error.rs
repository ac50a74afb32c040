//! Error types for kitbag, plus the error-chain flattener.

use std::fmt::Write as _;

use thiserror::Error;

/// Main error type for kitbag operations
#[derive(Error, Debug)]
pub enum KitbagError {
    /// Caller passed a malformed or out-of-range argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The platform exposes no application-data directory
    #[error("No application data directory is available on this platform")]
    DataDirUnavailable,
}

/// Result type alias using KitbagError
pub type KitbagResult<T> = Result<T, KitbagError>;

/// Collapse an error and its chain of causes into one descriptive string.
///
/// The outermost error comes first, followed by each `source()` in order,
/// innermost last. Useful for logging a whole failure in a single line.
///
/// ```
/// use kitbag::error::flatten_error_chain;
///
/// let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
/// let flat = flatten_error_chain(&inner);
/// assert!(flat.contains("file missing"));
/// ```
pub fn flatten_error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = String::new();
    let mut next: Option<&(dyn std::error::Error + 'static)> = Some(err);

    while let Some(e) = next {
        if !out.is_empty() {
            out.push_str("  *** caused by: ");
        }
        let _ = write!(out, "{e}.");
        next = e.source();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Error, Debug)]
    #[error("outer failure")]
    struct Outer {
        #[source]
        cause: std::io::Error,
    }

    #[test]
    fn test_error_display() {
        let err = KitbagError::InvalidArgument("numChunks must be positive".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid argument: numChunks must be positive"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: KitbagError = io_err.into();
        assert!(matches!(err, KitbagError::Io(_)));
    }

    #[test]
    fn test_flatten_single_error() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let flat = flatten_error_chain(&err);
        assert_eq!(flat, "disk on fire.");
    }

    #[test]
    fn test_flatten_two_level_chain_outer_first() {
        let err = Outer {
            cause: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked out"),
        };
        let flat = flatten_error_chain(&err);

        let outer_pos = flat.find("outer failure").unwrap();
        let inner_pos = flat.find("locked out").unwrap();
        assert!(outer_pos < inner_pos);
        assert!(flat.contains("*** caused by:"));
    }
}
