//! Driver factory: turns resolved settings into a live WebDriver session.
//!
//! One session per caller; the factory never pools or reuses sessions.
//! Implicit waits are pinned to zero so all synchronization runs
//! through the wait helper and carries a condition and locator on
//! timeout.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde_json::json;
use thirtyfour::prelude::*;
use thirtyfour::BrowserCapabilitiesHelper;
use tracing::info;

use crate::config::Settings;
use crate::error::{NavError, NavResult};

/// Window size applied to every session
const WINDOW_WIDTH: u32 = 1920;
/// Window size applied to every session
const WINDOW_HEIGHT: u32 = 1080;

/// Browsers the factory can launch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserKind {
    /// Google Chrome via chromedriver
    Chrome,
    /// Mozilla Firefox via geckodriver
    Firefox,
}

impl BrowserKind {
    /// Name as used in `BROWSER` and on the CLI
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chrome => "chrome",
            Self::Firefox => "firefox",
        }
    }
}

impl FromStr for BrowserKind {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chrome" => Ok(Self::Chrome),
            "firefox" => Ok(Self::Firefox),
            other => Err(NavError::unsupported_browser(other)),
        }
    }
}

impl std::fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Builds WebDriver sessions from settings
#[derive(Debug, Clone, Copy)]
pub struct DriverFactory;

impl DriverFactory {
    /// Launch a browser session for the given settings.
    ///
    /// Validates the browser name, creates the screenshot and download
    /// directories, connects to the configured WebDriver endpoint and
    /// applies the page-load and script timeouts. Fails with
    /// `UnsupportedBrowser` before any session is created when the
    /// name is not recognized.
    pub async fn launch(settings: &Settings) -> NavResult<WebDriver> {
        let kind: BrowserKind = settings.browser.parse()?;

        tokio::fs::create_dir_all(&settings.screenshot_dir).await?;
        tokio::fs::create_dir_all(&settings.downloads_dir).await?;
        let downloads = settings.downloads_dir_abs()?;

        let caps = build_capabilities(kind, settings.headless, &downloads)?;

        info!(
            browser = %kind,
            headless = settings.headless,
            endpoint = %settings.webdriver_url,
            "launching browser session"
        );
        let driver = WebDriver::new(&settings.webdriver_url, caps).await?;

        // Explicit waits only.
        driver.set_implicit_wait_timeout(Duration::ZERO).await?;
        driver
            .set_page_load_timeout(settings.page_load_timeout)
            .await?;
        driver.set_script_timeout(settings.script_timeout).await?;
        if !settings.headless {
            driver
                .set_window_rect(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT)
                .await?;
        }

        Ok(driver)
    }
}

/// Capabilities for one browser kind.
///
/// Chrome gets its window size from a command-line argument because
/// `--headless=new` ignores the window rectangle set after startup.
fn build_capabilities(
    kind: BrowserKind,
    headless: bool,
    downloads_dir: &Path,
) -> NavResult<Capabilities> {
    match kind {
        BrowserKind::Chrome => {
            let mut caps = DesiredCapabilities::chrome();
            if headless {
                caps.add_arg("--headless=new")?;
                caps.add_arg(&format!("--window-size={WINDOW_WIDTH},{WINDOW_HEIGHT}"))?;
            }
            caps.add_arg("--no-sandbox")?;
            caps.add_arg("--disable-dev-shm-usage")?;
            caps.add_arg("--disable-gpu")?;
            caps.insert_browser_option(
                "prefs",
                json!({
                    "download.default_directory": downloads_dir.to_string_lossy(),
                    "download.prompt_for_download": false,
                    "download.directory_upgrade": true,
                    "safebrowsing.enabled": true,
                }),
            )?;
            Ok(caps.into())
        }
        BrowserKind::Firefox => {
            let mut caps = DesiredCapabilities::firefox();
            if headless {
                caps.add_arg("--headless")?;
            }
            caps.insert_browser_option(
                "prefs",
                json!({
                    "browser.download.folderList": 2,
                    "browser.download.dir": downloads_dir.to_string_lossy(),
                    "browser.download.useDownloadDir": true,
                    "browser.helperApps.neverAsk.saveToDisk":
                        "application/octet-stream,application/pdf,text/plain,text/csv,image/png,image/jpeg",
                }),
            )?;
            Ok(caps.into())
        }
    }
}
