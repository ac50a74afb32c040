//! Edge case and boundary condition tests
//!
//! These tests verify fail-fast validation on bad input, error-chain
//! flattening across nested causes, and log-path construction.

use kitbag::error::{flatten_error_chain, KitbagError};
use kitbag::logging::FileLogger;
use kitbag::seq::{random_numbers, split_into_batches, split_into_n_chunks};
use kitbag::{max_of, min_of};
use thiserror::Error;

// ============================================================================
// Invalid Argument Tests
// ============================================================================

/// Zero is the only invalid chunk/batch count a usize can express
#[test]
fn test_zero_partitions_rejected() {
    let source = [1, 2, 3];

    assert!(matches!(
        split_into_n_chunks(&source, 0),
        Err(KitbagError::InvalidArgument(_))
    ));
    assert!(matches!(
        split_into_batches(&source, 0),
        Err(KitbagError::InvalidArgument(_))
    ));
}

/// An empty value list has no extremum
#[test]
fn test_empty_extremum_rejected() {
    assert!(matches!(max_of(&[]), Err(KitbagError::InvalidArgument(_))));
    assert!(matches!(min_of(&[]), Err(KitbagError::InvalidArgument(_))));
}

/// More distinct draws than the range holds can never terminate under
/// rejection sampling, so the request is rejected up front
#[test]
fn test_unsatisfiable_distinct_quota_rejected() {
    assert!(matches!(
        random_numbers(5, 4, false),
        Err(KitbagError::InvalidArgument(_))
    ));

    // Exactly filling the range is fine.
    assert!(random_numbers(4, 4, false).is_ok());
}

/// Drawing anything from an empty range is invalid in both modes
#[test]
fn test_empty_range_rejected() {
    assert!(matches!(
        random_numbers(1, 0, false),
        Err(KitbagError::InvalidArgument(_))
    ));
    assert!(matches!(
        random_numbers(1, 0, true),
        Err(KitbagError::InvalidArgument(_))
    ));
}

// ============================================================================
// Error Chain Flattening
// ============================================================================

#[derive(Error, Debug)]
#[error("probe dispatch failed")]
struct DispatchError {
    #[source]
    cause: SocketError,
}

#[derive(Error, Debug)]
#[error("socket setup failed")]
struct SocketError {
    #[source]
    cause: std::io::Error,
}

/// A three-level chain flattens to one string, outermost cause first
#[test]
fn test_flatten_chain_orders_outer_to_inner() {
    let err = DispatchError {
        cause: SocketError {
            cause: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "raw sockets need root"),
        },
    };

    let flat = flatten_error_chain(&err);

    let dispatch = flat.find("probe dispatch failed").unwrap();
    let socket = flat.find("socket setup failed").unwrap();
    let io = flat.find("raw sockets need root").unwrap();
    assert!(dispatch < socket && socket < io);

    assert_eq!(flat.matches("*** caused by:").count(), 2);
}

/// A chainless error flattens to just its own message
#[test]
fn test_flatten_single_error_has_no_separator() {
    let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "probe timed out");
    let flat = flatten_error_chain(&err);

    assert_eq!(flat, "probe timed out.");
    assert!(!flat.contains("caused by"));
}

// ============================================================================
// Log Path Construction
// ============================================================================

/// Application-data paths nest application, optional subfolder, filename
#[test]
fn test_for_application_path_shape() {
    match FileLogger::for_application("kitbag-tests", "events.log", Some("probes")) {
        Ok(logger) => {
            let path = logger.path();
            assert!(path.ends_with("kitbag-tests/probes/events.log"));
        }
        // Headless platforms without a data directory report that instead.
        Err(e) => assert!(matches!(e, KitbagError::DataDirUnavailable)),
    }
}

/// A blank subfolder is skipped, same as an absent one
#[test]
fn test_for_application_blank_subfolder_skipped() {
    let with_blank = FileLogger::for_application("kitbag-tests", "events.log", Some("   "));
    let with_none = FileLogger::for_application("kitbag-tests", "events.log", None);

    match (with_blank, with_none) {
        (Ok(blank), Ok(none)) => assert_eq!(blank.path(), none.path()),
        (Err(a), Err(b)) => {
            assert!(matches!(a, KitbagError::DataDirUnavailable));
            assert!(matches!(b, KitbagError::DataDirUnavailable));
        }
        _ => panic!("blank and absent subfolder should behave alike"),
    }
}
