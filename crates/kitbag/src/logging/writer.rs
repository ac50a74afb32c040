//! Append-only writer with per-path mutual exclusion.
//!
//! Every logger targeting the same path shares one write lock, handed out
//! by a process-wide registry that is initialized once on first use. The
//! lock is a `tokio::sync::Mutex` so the blocking and async append paths
//! exclude each other through the same primitive.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use chrono::Local;
use tokio::io::AsyncWriteExt;

use crate::error::{KitbagError, KitbagResult};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Process-wide registry of write locks, keyed by log path.
///
/// Keys are the paths as constructed, without canonicalization (the file
/// usually does not exist yet). Loggers that alias one file through
/// different spellings therefore get independent locks.
static WRITE_LOCKS: OnceLock<parking_lot::Mutex<HashMap<PathBuf, Arc<tokio::sync::Mutex<()>>>>> =
    OnceLock::new();

fn write_lock_for(path: &Path) -> Arc<tokio::sync::Mutex<()>> {
    let registry = WRITE_LOCKS.get_or_init(|| parking_lot::Mutex::new(HashMap::new()));
    let mut locks = registry.lock();
    locks
        .entry(path.to_path_buf())
        .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
        .clone()
}

/// Appends timestamped text lines to a single target file.
///
/// The target is fixed at construction. Each append acquires the write
/// lock shared by every logger on this path, ensures the parent directory
/// exists, opens the file in append mode, and writes one line formatted as
/// `"<local timestamp>:  <message>"`. The lock is released on every exit
/// path, including I/O failures, which propagate to the caller unretried.
///
/// Write order across concurrent callers is unspecified beyond mutual
/// exclusion: whichever waiter acquires the lock next writes next.
pub struct FileLogger {
    path: PathBuf,
    lock: Arc<tokio::sync::Mutex<()>>,
}

impl FileLogger {
    /// Logger writing to an explicit path (directory, filename, extension
    /// all included).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let lock = write_lock_for(&path);
        Self { path, lock }
    }

    /// Logger writing to
    /// `<application-data root>/<application>[/<subfolder>]/<filename>`.
    ///
    /// A `None` or blank subfolder is skipped. Errors if the platform
    /// exposes no application-data directory.
    pub fn for_application(
        application: &str,
        filename: &str,
        subfolder: Option<&str>,
    ) -> KitbagResult<Self> {
        let root = dirs::data_dir().ok_or(KitbagError::DataDirUnavailable)?;

        let mut path = root.join(application);
        if let Some(sub) = subfolder.filter(|s| !s.trim().is_empty()) {
            path.push(sub);
        }
        path.push(filename);

        Ok(Self::new(path))
    }

    /// The file this logger writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one timestamped line, blocking until the write lock is held
    /// and the write completes.
    ///
    /// Call from synchronous code only; inside a tokio runtime use
    /// [`append_async`](Self::append_async).
    pub fn append(&self, message: &str) -> KitbagResult<()> {
        let _guard = self.lock.blocking_lock();

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}:  {}", Local::now().format(TIMESTAMP_FORMAT), message)?;

        Ok(())
    }

    /// Append one timestamped line without blocking the calling thread
    /// while waiting for the lock or performing I/O.
    pub async fn append_async(&self, message: &str) -> KitbagResult<()> {
        let _guard = self.lock.lock().await;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let line = format!("{}:  {}\n", Local::now().format(TIMESTAMP_FORMAT), message);
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }
}
