//! Result and error types for Navegar.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type for Navegar operations
pub type NavResult<T> = Result<T, NavError>;

/// Errors that can occur while driving the browser
#[derive(Debug, Error)]
pub enum NavError {
    /// Browser name not recognized by the driver factory
    #[error("Unsupported browser: {name}. Supported browsers: chrome, firefox")]
    UnsupportedBrowser {
        /// The name that was requested
        name: String,
    },

    /// Configuration value could not be parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// An explicit wait gave up
    #[error("Timed out after {timeout:?} waiting for {condition} on {locator}")]
    WaitTimeout {
        /// Name of the condition that never held
        condition: String,
        /// Description of the locator being watched
        locator: String,
        /// How long the waiter polled
        timeout: Duration,
    },

    /// A download never showed up in the downloads directory
    #[error("File {filename} was not downloaded within {timeout:?}")]
    DownloadTimeout {
        /// Expected file name
        filename: String,
        /// How long the poll ran
        timeout: Duration,
    },

    /// Local file required for an upload does not exist
    #[error("File not found: {path}")]
    MissingFile {
        /// Path that was checked
        path: PathBuf,
    },

    /// Screenshot capture failed
    #[error("Screenshot failed: {message}")]
    Screenshot {
        /// Error message
        message: String,
    },

    /// URL could not be parsed or rewritten
    #[error("Invalid URL: {url}")]
    InvalidUrl {
        /// The offending URL
        url: String,
    },

    /// Error from the WebDriver client (element not found, alert not
    /// present, session errors)
    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NavError {
    /// Create an unsupported-browser error
    #[must_use]
    pub fn unsupported_browser(name: impl Into<String>) -> Self {
        Self::UnsupportedBrowser { name: name.into() }
    }

    /// Create a wait-timeout error
    #[must_use]
    pub fn wait_timeout(
        condition: impl Into<String>,
        locator: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self::WaitTimeout {
            condition: condition.into(),
            locator: locator.into(),
            timeout,
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a screenshot error
    #[must_use]
    pub fn screenshot(message: impl Into<String>) -> Self {
        Self::Screenshot {
            message: message.into(),
        }
    }

    /// Create an invalid-URL error
    #[must_use]
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }
}
