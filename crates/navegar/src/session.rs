//! Browser interaction layer.
//!
//! [`Browser`] bundles one WebDriver session with the resolved
//! settings and the helpers, and exposes the primitives page objects
//! compose. Every read re-queries the live DOM; the only state here
//! is the session handle and the settings.

use async_trait::async_trait;
use serde_json::Value;
use thirtyfour::prelude::*;
use thirtyfour::WindowHandle;
use tracing::debug;

use crate::actions::Actions;
use crate::alert::Alerts;
use crate::config::Settings;
use crate::driver::DriverFactory;
use crate::error::NavResult;
use crate::files::DownloadDir;
use crate::screenshot::Screenshots;
use crate::select::Dropdown;
use crate::wait::Waiter;

/// One browser session plus settings and helpers.
///
/// Cloning is cheap enough to hand a copy to every page object; all
/// clones drive the same underlying session.
#[derive(Debug, Clone)]
pub struct Browser {
    driver: WebDriver,
    settings: Settings,
    waiter: Waiter,
    actions: Actions,
    alerts: Alerts,
    screenshots: Screenshots,
    downloads: DownloadDir,
}

impl Browser {
    /// Wrap an existing session
    #[must_use]
    pub fn new(driver: WebDriver, settings: Settings) -> Self {
        let waiter = Waiter::new(driver.clone(), settings.timeout, settings.poll_interval);
        let actions = Actions::new(driver.clone());
        let alerts = Alerts::new(driver.clone(), waiter.clone());
        let screenshots = Screenshots::new(
            driver.clone(),
            settings.screenshot_dir.clone(),
            settings.screenshot_on_failure,
        );
        let downloads = DownloadDir::new(settings.downloads_dir.clone());
        Self {
            driver,
            settings,
            waiter,
            actions,
            alerts,
            screenshots,
            downloads,
        }
    }

    /// Launch a fresh session through the driver factory
    pub async fn launch(settings: Settings) -> NavResult<Self> {
        let driver = DriverFactory::launch(&settings).await?;
        Ok(Self::new(driver, settings))
    }

    /// The underlying WebDriver session
    #[must_use]
    pub const fn driver(&self) -> &WebDriver {
        &self.driver
    }

    /// The resolved settings
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The explicit-wait helper
    #[must_use]
    pub const fn wait(&self) -> &Waiter {
        &self.waiter
    }

    /// The action-chain helper
    #[must_use]
    pub const fn actions(&self) -> &Actions {
        &self.actions
    }

    /// The dialog helper
    #[must_use]
    pub const fn alerts(&self) -> &Alerts {
        &self.alerts
    }

    /// The screenshot helper
    #[must_use]
    pub const fn screenshots(&self) -> &Screenshots {
        &self.screenshots
    }

    /// The download-directory helper
    #[must_use]
    pub const fn downloads(&self) -> &DownloadDir {
        &self.downloads
    }

    // -- navigation --

    /// Navigate to a path on the configured site
    pub async fn goto(&self, path: &str) -> NavResult<()> {
        self.goto_url(&self.settings.page_url(path)).await
    }

    /// Navigate to an absolute URL
    pub async fn goto_url(&self, url: &str) -> NavResult<()> {
        debug!(url, "navigating");
        self.driver.goto(url).await?;
        Ok(())
    }

    /// The current URL
    pub async fn current_url(&self) -> NavResult<String> {
        Ok(self.driver.current_url().await?.to_string())
    }

    /// The page title
    pub async fn title(&self) -> NavResult<String> {
        Ok(self.driver.title().await?)
    }

    /// Reload the current page
    pub async fn refresh(&self) -> NavResult<()> {
        self.driver.refresh().await?;
        Ok(())
    }

    /// Go back in history
    pub async fn back(&self) -> NavResult<()> {
        self.driver.back().await?;
        Ok(())
    }

    /// Go forward in history
    pub async fn forward(&self) -> NavResult<()> {
        self.driver.forward().await?;
        Ok(())
    }

    // -- element access --

    /// Find one element, waiting for it to be present
    pub async fn find(&self, by: &By) -> NavResult<WebElement> {
        self.waiter.until_present(by).await
    }

    /// Find all matching elements right now (no wait)
    pub async fn find_all(&self, by: &By) -> NavResult<Vec<WebElement>> {
        Ok(self.driver.find_all(by.clone()).await?)
    }

    /// Whether an element exists in the DOM right now
    pub async fn is_present(&self, by: &By) -> bool {
        self.driver.find(by.clone()).await.is_ok()
    }

    /// Whether an element exists and is displayed right now
    pub async fn is_visible(&self, by: &By) -> bool {
        match self.driver.find(by.clone()).await {
            Ok(el) => el.is_displayed().await.unwrap_or(false),
            Err(_) => false,
        }
    }

    // -- interaction --

    /// Wait for an element to be clickable, then click it
    pub async fn click(&self, by: &By) -> NavResult<()> {
        let el = self.waiter.until_clickable(by).await?;
        el.click().await?;
        Ok(())
    }

    /// Wait for an element to be visible, clear it, then type into it
    pub async fn type_text(&self, by: &By, text: &str) -> NavResult<()> {
        let el = self.waiter.until_visible(by).await?;
        el.clear().await?;
        el.send_keys(text).await?;
        Ok(())
    }

    /// Send keys without clearing first (arrow keys, shortcuts)
    pub async fn send_keys(&self, by: &By, keys: impl AsRef<str> + Send) -> NavResult<()> {
        let el = self.waiter.until_visible(by).await?;
        el.send_keys(keys.as_ref()).await?;
        Ok(())
    }

    /// Clear an input
    pub async fn clear(&self, by: &By) -> NavResult<()> {
        let el = self.waiter.until_visible(by).await?;
        el.clear().await?;
        Ok(())
    }

    /// Visible text of an element
    pub async fn text_of(&self, by: &By) -> NavResult<String> {
        let el = self.waiter.until_visible(by).await?;
        Ok(el.text().await?)
    }

    /// Attribute value of an element
    pub async fn attr(&self, by: &By, name: &str) -> NavResult<Option<String>> {
        let el = self.waiter.until_present(by).await?;
        Ok(el.attr(name).await?)
    }

    /// Current value of an input element
    pub async fn value_of(&self, by: &By) -> NavResult<String> {
        Ok(self.attr(by, "value").await?.unwrap_or_default())
    }

    /// Whether a checkbox or option is selected
    pub async fn is_checked(&self, by: &By) -> NavResult<bool> {
        let el = self.waiter.until_present(by).await?;
        Ok(el.is_selected().await?)
    }

    /// Click a checkbox only if its state differs from `checked`
    pub async fn set_checkbox(&self, by: &By, checked: bool) -> NavResult<()> {
        let el = self.waiter.until_clickable(by).await?;
        if el.is_selected().await? != checked {
            el.click().await?;
        }
        Ok(())
    }

    /// Wrap a `<select>` element
    pub async fn dropdown(&self, by: &By) -> NavResult<Dropdown> {
        let el = self.waiter.until_present(by).await?;
        Dropdown::new(&el).await
    }

    // -- pointer actions --

    /// Hover over an element
    pub async fn hover(&self, by: &By) -> NavResult<()> {
        let el = self.waiter.until_visible(by).await?;
        self.actions.hover(&el).await
    }

    /// Drag one element onto another
    pub async fn drag_and_drop(&self, source: &By, target: &By) -> NavResult<()> {
        let src = self.waiter.until_visible(source).await?;
        let dst = self.waiter.until_visible(target).await?;
        self.actions.drag_and_drop(&src, &dst).await
    }

    /// Context-click an element
    pub async fn right_click(&self, by: &By) -> NavResult<()> {
        let el = self.waiter.until_visible(by).await?;
        self.actions.right_click(&el).await
    }

    /// Double-click an element
    pub async fn double_click(&self, by: &By) -> NavResult<()> {
        let el = self.waiter.until_visible(by).await?;
        self.actions.double_click(&el).await
    }

    /// Scroll an element into view
    pub async fn scroll_into_view(&self, by: &By) -> NavResult<()> {
        let el = self.waiter.until_present(by).await?;
        self.actions.scroll_into_view(&el).await
    }

    // -- frames and windows --

    /// Switch into an iframe
    pub async fn enter_frame(&self, by: &By) -> NavResult<()> {
        let el = self.waiter.until_present(by).await?;
        el.enter_frame().await?;
        Ok(())
    }

    /// Switch back to the top-level document
    pub async fn leave_frame(&self) -> NavResult<()> {
        self.driver.enter_default_frame().await?;
        Ok(())
    }

    /// Handles of every open window
    pub async fn window_handles(&self) -> NavResult<Vec<WindowHandle>> {
        Ok(self.driver.windows().await?)
    }

    /// Switch to a window by handle
    pub async fn switch_to_window(&self, handle: WindowHandle) -> NavResult<()> {
        self.driver.switch_to_window(handle).await?;
        Ok(())
    }

    /// Close the current window
    pub async fn close_window(&self) -> NavResult<()> {
        self.driver.close_window().await?;
        Ok(())
    }

    // -- scripts --

    /// Execute synchronous JavaScript
    pub async fn execute(&self, script: &str, args: Vec<Value>) -> NavResult<Value> {
        let ret = self.driver.execute(script, args).await?;
        Ok(ret.json().clone())
    }

    /// Execute asynchronous JavaScript
    pub async fn execute_async(&self, script: &str, args: Vec<Value>) -> NavResult<Value> {
        let ret = self.driver.execute_async(script, args).await?;
        Ok(ret.json().clone())
    }

    /// End the session
    pub async fn quit(self) -> NavResult<()> {
        self.driver.quit().await?;
        Ok(())
    }
}

/// A page object: a browser handle plus the page's path.
///
/// `open`, `title` and `current_url` are provided; implementors add
/// the feature-level actions and queries.
#[async_trait]
pub trait Page {
    /// The browser this page drives
    fn browser(&self) -> &Browser;

    /// Path of the page relative to the site base URL
    fn path(&self) -> &str;

    /// Navigate to the page
    async fn open(&self) -> NavResult<()> {
        self.browser().goto(self.path()).await
    }

    /// Title of the current document
    async fn title(&self) -> NavResult<String> {
        self.browser().title().await
    }

    /// URL of the current document
    async fn current_url(&self) -> NavResult<String> {
        self.browser().current_url().await
    }
}
