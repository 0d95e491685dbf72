//! Suite configuration.
//!
//! Settings are resolved once at process start (environment variables
//! with defaults, or builder overrides) and are read-only afterwards.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Environment variable selecting the target environment
pub const ENV_TEST_ENV: &str = "TEST_ENV";
/// Environment variable selecting the browser
pub const ENV_BROWSER: &str = "BROWSER";
/// Environment variable toggling headless mode
pub const ENV_HEADLESS: &str = "HEADLESS";
/// Environment variable pointing at the WebDriver endpoint
pub const ENV_WEBDRIVER_URL: &str = "WEBDRIVER_URL";
/// Environment variable overriding the browser download directory.
///
/// The runner exports an absolute path here so the test binaries,
/// which cargo starts in the package directory, use the same
/// directory it prepared.
pub const ENV_DOWNLOADS_DIR: &str = "DOWNLOADS_DIR";
/// Environment variable overriding the screenshot directory (same
/// cross-process contract as [`ENV_DOWNLOADS_DIR`])
pub const ENV_SCREENSHOT_DIR: &str = "SCREENSHOT_DIR";

/// Default element wait timeout (10 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Default page load timeout (30 seconds)
pub const PAGE_LOAD_TIMEOUT: Duration = Duration::from_secs(30);
/// Default script timeout (30 seconds)
pub const SCRIPT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default polling interval for explicit waits (250ms)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Target environment for a test session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Environment {
    /// Development (default)
    #[default]
    Dev,
    /// Staging
    Staging,
    /// Production
    Prod,
}

impl Environment {
    /// Base URL of the demo site for this environment.
    ///
    /// All three environments point at the public demo deployment.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Dev | Self::Staging | Self::Prod => "http://the-internet.herokuapp.com",
        }
    }

    /// Name as used on the CLI and in `TEST_ENV`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Staging => "staging",
            Self::Prod => "prod",
        }
    }
}

impl FromStr for Environment {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dev" => Ok(Self::Dev),
            "staging" => Ok(Self::Staging),
            "prod" => Ok(Self::Prod),
            other => Err(NavError::config(format!(
                "unknown environment '{other}' (expected dev, staging or prod)"
            ))),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Login credentials used by the authentication pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Username
    pub username: String,
    /// Password
    pub password: String,
}

impl Credentials {
    /// Create credentials
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Resolved, immutable settings for one test session
#[derive(Debug, Clone)]
pub struct Settings {
    /// Target environment
    pub environment: Environment,
    /// Browser name as requested (resolved by the driver factory)
    pub browser: String,
    /// Run the browser without a visible window
    pub headless: bool,
    /// WebDriver endpoint the factory connects to
    pub webdriver_url: String,
    /// Element wait timeout
    pub timeout: Duration,
    /// Page load timeout
    pub page_load_timeout: Duration,
    /// Script timeout
    pub script_timeout: Duration,
    /// Polling interval for explicit waits
    pub poll_interval: Duration,
    /// Capture a screenshot when a test fails
    pub screenshot_on_failure: bool,
    /// Report output directory
    pub report_dir: PathBuf,
    /// Screenshot output directory
    pub screenshot_dir: PathBuf,
    /// HTML report file
    pub html_report_file: PathBuf,
    /// Browser download directory
    pub downloads_dir: PathBuf,
    /// JSON test data directory
    pub test_data_dir: PathBuf,
    /// HTTP basic-auth credentials
    pub basic_auth: Credentials,
    /// Form-authentication credentials
    pub form_auth: Credentials,
}

impl Default for Settings {
    fn default() -> Self {
        Self::for_environment(Environment::Dev)
    }
}

impl Settings {
    /// Settings for a given environment with all other fields at their
    /// defaults.
    #[must_use]
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            browser: "chrome".to_string(),
            headless: true,
            webdriver_url: "http://localhost:9515".to_string(),
            timeout: DEFAULT_TIMEOUT,
            page_load_timeout: PAGE_LOAD_TIMEOUT,
            script_timeout: SCRIPT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            screenshot_on_failure: true,
            report_dir: PathBuf::from("reports"),
            screenshot_dir: PathBuf::from("reports/screenshots"),
            html_report_file: PathBuf::from("reports/test_report.html"),
            downloads_dir: PathBuf::from("downloads"),
            test_data_dir: PathBuf::from("test_data"),
            basic_auth: Credentials::new("admin", "admin"),
            form_auth: Credentials::new("tomsmith", "SuperSecretPassword!"),
        }
    }

    /// Resolve settings from the process environment (`TEST_ENV`,
    /// `BROWSER`, `HEADLESS`, `WEBDRIVER_URL`, `DOWNLOADS_DIR`,
    /// `SCREENSHOT_DIR`).
    #[must_use]
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Resolve settings from an arbitrary variable lookup.
    ///
    /// Unset or unparseable variables fall back to defaults.
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup(ENV_TEST_ENV)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        let mut settings = Self::for_environment(environment);
        if let Some(browser) = lookup(ENV_BROWSER) {
            settings.browser = browser;
        }
        if let Some(headless) = lookup(ENV_HEADLESS).and_then(|v| parse_bool(&v)) {
            settings.headless = headless;
        }
        if let Some(url) = lookup(ENV_WEBDRIVER_URL) {
            settings.webdriver_url = url;
        }
        if let Some(dir) = lookup(ENV_DOWNLOADS_DIR) {
            settings.downloads_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup(ENV_SCREENSHOT_DIR) {
            settings.screenshot_dir = PathBuf::from(dir);
        }
        settings
    }

    /// Base URL for the configured environment
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        self.environment.base_url()
    }

    /// Absolute URL for a path on the demo site
    #[must_use]
    pub fn page_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Override the browser
    #[must_use]
    pub fn with_browser(mut self, browser: impl Into<String>) -> Self {
        self.browser = browser.into();
        self
    }

    /// Override headless mode
    #[must_use]
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Override the WebDriver endpoint
    #[must_use]
    pub fn with_webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.webdriver_url = url.into();
        self
    }

    /// Override the element wait timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the downloads directory
    #[must_use]
    pub fn with_downloads_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.downloads_dir = dir.into();
        self
    }

    /// Override the screenshot directory
    #[must_use]
    pub fn with_screenshot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.screenshot_dir = dir.into();
        self
    }

    /// Absolute path of the downloads directory
    pub fn downloads_dir_abs(&self) -> std::io::Result<PathBuf> {
        absolutize(&self.downloads_dir)
    }

    /// Absolute path of the screenshot directory
    pub fn screenshot_dir_abs(&self) -> std::io::Result<PathBuf> {
        absolutize(&self.screenshot_dir)
    }
}

/// Parse the truthy spellings accepted in boolean variables.
///
/// Anything else is `None`, leaving the default in place.
fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
