//! Network reachability probes.
//!
//! [`ping_ip`] issues ICMP echo requests with a single retry and optional
//! failure logging through a [`FileLogger`]. [`probe_host`] is a plain TCP
//! connect check.
//!
//! ICMP sockets need elevated privileges on most platforms (root or
//! `CAP_NET_RAW` on Linux); without them the probe reports
//! [`PingOutcome::Unknown`].

use std::net::Ipv4Addr;
use std::time::Duration;

use surge_ping::{Client, Config, PingIdentifier, PingSequence, SurgeError};
use tracing::debug;

use crate::error::{flatten_error_chain, KitbagResult};
use crate::logging::FileLogger;

/// Fixed wait before the single ICMP retry.
const RETRY_DELAY: Duration = Duration::from_secs(3);

/// Reply timeout for one echo request.
const ECHO_TIMEOUT: Duration = Duration::from_secs(5);

const ECHO_PAYLOAD: [u8; 56] = [0; 56];

/// Outcome of an ICMP reachability probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PingOutcome {
    /// An echo reply arrived.
    Success,
    /// The probe completed but the target did not answer; carries the
    /// reason for the final attempt.
    Failed(String),
    /// The probe failed before a reachability verdict could be reached
    /// (malformed address, socket error, missing privileges).
    Unknown,
}

impl PingOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PingOutcome::Success)
    }
}

/// Ping an IPv4 address, returning the reachability outcome.
///
/// One echo request is sent; if no reply arrives before the timeout the
/// failure is logged through `logger` (when supplied), the probe waits
/// three seconds and retries exactly once, and the retry's outcome is
/// returned.
///
/// Network-level failures never surface as errors: unexpected faults are
/// flattened into a diagnostic line, optionally logged, and reported as
/// [`PingOutcome::Unknown`]. Logger I/O failures are the exception - they
/// propagate to the caller.
pub async fn ping_ip(ip: &str, logger: Option<&FileLogger>) -> KitbagResult<PingOutcome> {
    let addr: Ipv4Addr = match ip.parse() {
        Ok(addr) => addr,
        Err(e) => return swallow(ip, &e, logger).await,
    };

    let client = match Client::new(&Config::default()) {
        Ok(client) => client,
        Err(e) => return swallow(ip, &e, logger).await,
    };
    let mut pinger = client
        .pinger(addr.into(), PingIdentifier(rand::random()))
        .await;
    pinger.timeout(ECHO_TIMEOUT);

    let reason = match pinger.ping(PingSequence(0), &ECHO_PAYLOAD).await {
        Ok(_) => return Ok(PingOutcome::Success),
        Err(SurgeError::Timeout { .. }) => "no echo reply before the timeout",
        Err(e) => return swallow(ip, &e, logger).await,
    };

    if let Some(logger) = logger {
        let line =
            format!("Ping sent to {ip} without exception, but it was not successful: {reason}.");
        logger.append_async(&line).await?;
    }

    tokio::time::sleep(RETRY_DELAY).await;

    match pinger.ping(PingSequence(1), &ECHO_PAYLOAD).await {
        Ok(_) => Ok(PingOutcome::Success),
        Err(SurgeError::Timeout { .. }) => Ok(PingOutcome::Failed(reason.to_string())),
        Err(e) => swallow(ip, &e, logger).await,
    }
}

/// Flatten an unexpected probe failure, log it if possible, and convert it
/// into the Unknown outcome. Only logger I/O failures escape as errors.
async fn swallow(
    ip: &str,
    err: &(dyn std::error::Error + 'static),
    logger: Option<&FileLogger>,
) -> KitbagResult<PingOutcome> {
    let detail = format!(
        "Something went wrong pinging {ip}.  {}",
        flatten_error_chain(err)
    );
    debug!("{detail}");

    if let Some(logger) = logger {
        logger.append_async(&detail).await?;
    }

    Ok(PingOutcome::Unknown)
}

/// Try to open a TCP connection to `host:port`.
///
/// Returns `true` when the connect succeeds and `false` on any failure
/// (refused, timed out, DNS). No retry, no logging.
pub fn probe_host(host: &str, port: u16) -> bool {
    std::net::TcpStream::connect((host, port)).is_ok()
}
