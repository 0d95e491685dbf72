//! Screenshot capture.
//!
//! Capture failures are logged and swallowed: a screenshot is taken
//! on the way out of a failing test, and an error here must never
//! mask the failure that triggered it.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use thirtyfour::prelude::*;
use tracing::{info, warn};

use crate::error::NavResult;

/// File name for a labelled capture taken at `now`.
///
/// Labels are sanitized so test names with spaces or `::` separators
/// stay valid file names.
#[must_use]
pub fn timestamped_name(label: &str, now: DateTime<Local>) -> String {
    let label: String = label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{label}_{}.png", now.format("%Y%m%d_%H%M%S"))
}

/// Screenshot helper bound to one session and output directory
#[derive(Debug, Clone)]
pub struct Screenshots {
    driver: WebDriver,
    dir: PathBuf,
    enabled: bool,
}

impl Screenshots {
    /// Create a screenshot helper
    #[must_use]
    pub fn new(driver: WebDriver, dir: impl Into<PathBuf>, enabled: bool) -> Self {
        Self {
            driver,
            dir: dir.into(),
            enabled,
        }
    }

    /// Capture the full page.
    ///
    /// Returns the saved path, or `None` when capture is disabled or
    /// fails (the failure is logged).
    pub async fn capture(&self, label: &str) -> Option<PathBuf> {
        if !self.enabled {
            return None;
        }
        let path = self.target_path(label);
        match self.save_page(&path).await {
            Ok(()) => {
                info!(path = %path.display(), "saved screenshot");
                Some(path)
            }
            Err(err) => {
                warn!(label, error = %err, "screenshot capture failed");
                None
            }
        }
    }

    /// Capture a single element.
    pub async fn capture_element(&self, element: &WebElement, label: &str) -> Option<PathBuf> {
        if !self.enabled {
            return None;
        }
        let path = self.target_path(label);
        match self.save_element(element, &path).await {
            Ok(()) => {
                info!(path = %path.display(), "saved element screenshot");
                Some(path)
            }
            Err(err) => {
                warn!(label, error = %err, "element screenshot capture failed");
                None
            }
        }
    }

    fn target_path(&self, label: &str) -> PathBuf {
        self.dir.join(timestamped_name(label, Local::now()))
    }

    async fn save_page(&self, path: &Path) -> NavResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        self.driver.screenshot(path).await?;
        Ok(())
    }

    async fn save_element(&self, element: &WebElement, path: &Path) -> NavResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        element.screenshot(path).await?;
        Ok(())
    }
}
