//! JavaScript dialog handling.
//!
//! Every operation first waits for a dialog to be open, so callers
//! can trigger an alert and handle it without racing the browser.

use thirtyfour::prelude::*;

use crate::error::NavResult;
use crate::wait::Waiter;

/// Dialog helper bound to one session
#[derive(Debug, Clone)]
pub struct Alerts {
    driver: WebDriver,
    waiter: Waiter,
}

impl Alerts {
    /// Create a dialog helper sharing the session's waiter
    #[must_use]
    pub const fn new(driver: WebDriver, waiter: Waiter) -> Self {
        Self { driver, waiter }
    }

    /// Wait for a dialog, read its text, then accept it
    pub async fn accept(&self) -> NavResult<String> {
        let text = self.waiter.until_alert_present().await?;
        self.driver.accept_alert().await?;
        Ok(text)
    }

    /// Wait for a dialog, read its text, then dismiss it
    pub async fn dismiss(&self) -> NavResult<String> {
        let text = self.waiter.until_alert_present().await?;
        self.driver.dismiss_alert().await?;
        Ok(text)
    }

    /// Wait for a dialog and read its text without closing it
    pub async fn text(&self) -> NavResult<String> {
        self.waiter.until_alert_present().await
    }

    /// Wait for a prompt, type into it, then accept it
    pub async fn send_keys(&self, text: &str) -> NavResult<()> {
        self.waiter.until_alert_present().await?;
        self.driver.send_alert_text(text).await?;
        self.driver.accept_alert().await?;
        Ok(())
    }
}
