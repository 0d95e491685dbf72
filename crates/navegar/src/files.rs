//! Downloads-directory management.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{NavError, NavResult};
use crate::wait::poll_until;

/// Interval between download-existence checks
const DOWNLOAD_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Manages the browser's download directory
#[derive(Debug, Clone)]
pub struct DownloadDir {
    dir: PathBuf,
}

impl DownloadDir {
    /// Bind to a download directory (not created yet)
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The configured directory
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Create the directory if needed and return its absolute path
    pub fn ensure(&self) -> NavResult<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let abs = if self.dir.is_absolute() {
            self.dir.clone()
        } else {
            std::env::current_dir()?.join(&self.dir)
        };
        Ok(abs)
    }

    /// Poll once per second until `filename` exists in the directory.
    ///
    /// Partial downloads (`.crdownload`, `.part`) do not count.
    pub async fn wait_for(&self, filename: &str, timeout: Duration) -> NavResult<PathBuf> {
        let target = self.dir.join(filename);
        let target = &target;
        let found = poll_until(timeout, DOWNLOAD_POLL_INTERVAL, || async move {
            debug!(file = %target.display(), "checking for download");
            (target.exists() && !partial_marker_exists(target)).then(|| target.clone())
        })
        .await;
        found.ok_or_else(|| NavError::DownloadTimeout {
            filename: filename.to_string(),
            timeout,
        })
    }

    /// Delete every entry in the directory.
    ///
    /// Individual deletion failures are logged and skipped; returns
    /// the number of entries removed.
    pub fn clean(&self) -> NavResult<usize> {
        if !self.dir.exists() {
            return Ok(0);
        }
        let mut removed = 0;
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            let result = if path.is_dir() {
                std::fs::remove_dir_all(&path)
            } else {
                std::fs::remove_file(&path)
            };
            match result {
                Ok(()) => removed += 1,
                Err(err) => warn!(path = %path.display(), error = %err, "failed to remove"),
            }
        }
        Ok(removed)
    }
}

/// Chrome and Firefox write side-car files while a download is in
/// flight.
fn partial_marker_exists(target: &Path) -> bool {
    let crdownload = target.with_extension(join_ext(target, "crdownload"));
    let part = target.with_extension(join_ext(target, "part"));
    crdownload.exists() || part.exists()
}

fn join_ext(path: &Path, marker: &str) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{ext}.{marker}"),
        None => marker.to_string(),
    }
}
