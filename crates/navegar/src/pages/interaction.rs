//! Pages exercising pointer, keyboard, dialog and file interactions.

use std::path::Path;

use async_trait::async_trait;
use thirtyfour::prelude::*;

use crate::error::{NavError, NavResult};
use crate::session::{Browser, Page};

/// `/hovers`: user figures that reveal a caption on hover
#[derive(Debug, Clone)]
pub struct HoversPage {
    browser: Browser,
}

impl HoversPage {
    /// Selector for the nth user image (1-based)
    fn image_selector(n: usize) -> String {
        format!(".figure:nth-of-type({n}) img")
    }

    /// Selector for the nth caption (1-based)
    fn caption_selector(n: usize) -> String {
        format!(".figure:nth-of-type({n}) .figcaption")
    }

    /// Bind to a browser session
    #[must_use]
    pub const fn new(browser: Browser) -> Self {
        Self { browser }
    }

    /// Hover over the nth user figure (1-based)
    pub async fn hover_over_user(&self, n: usize) -> NavResult<()> {
        self.browser.hover(&By::Css(Self::image_selector(n))).await
    }

    /// Whether the nth caption is visible
    pub async fn is_caption_visible(&self, n: usize) -> bool {
        self.browser
            .is_visible(&By::Css(Self::caption_selector(n)))
            .await
    }

    /// Text of the nth caption
    pub async fn caption_text(&self, n: usize) -> NavResult<String> {
        self.browser
            .text_of(&By::Css(Self::caption_selector(n)))
            .await
    }
}

#[async_trait]
impl Page for HoversPage {
    fn browser(&self) -> &Browser {
        &self.browser
    }

    fn path(&self) -> &str {
        "/hovers"
    }
}

/// `/javascript_alerts`: alert, confirm and prompt dialogs
#[derive(Debug, Clone)]
pub struct JavascriptAlertsPage {
    browser: Browser,
}

impl JavascriptAlertsPage {
    const ALERT_BUTTON: &'static str = "button[onclick='jsAlert()']";
    const CONFIRM_BUTTON: &'static str = "button[onclick='jsConfirm()']";
    const PROMPT_BUTTON: &'static str = "button[onclick='jsPrompt()']";
    const RESULT: &'static str = "result";

    /// Bind to a browser session
    #[must_use]
    pub const fn new(browser: Browser) -> Self {
        Self { browser }
    }

    /// Trigger the plain alert
    pub async fn trigger_alert(&self) -> NavResult<()> {
        self.browser.click(&By::Css(Self::ALERT_BUTTON)).await
    }

    /// Trigger the confirm dialog
    pub async fn trigger_confirm(&self) -> NavResult<()> {
        self.browser.click(&By::Css(Self::CONFIRM_BUTTON)).await
    }

    /// Trigger the prompt dialog
    pub async fn trigger_prompt(&self) -> NavResult<()> {
        self.browser.click(&By::Css(Self::PROMPT_BUTTON)).await
    }

    /// Accept the open dialog, returning its text
    pub async fn accept_dialog(&self) -> NavResult<String> {
        self.browser.alerts().accept().await
    }

    /// Dismiss the open dialog, returning its text
    pub async fn dismiss_dialog(&self) -> NavResult<String> {
        self.browser.alerts().dismiss().await
    }

    /// Type into the open prompt and accept it
    pub async fn answer_prompt(&self, text: &str) -> NavResult<()> {
        self.browser.alerts().send_keys(text).await
    }

    /// Text of the result line under the buttons
    pub async fn result_text(&self) -> NavResult<String> {
        self.browser.text_of(&By::Id(Self::RESULT)).await
    }
}

#[async_trait]
impl Page for JavascriptAlertsPage {
    fn browser(&self) -> &Browser {
        &self.browser
    }

    fn path(&self) -> &str {
        "/javascript_alerts"
    }
}

/// `/drag_and_drop`: two columns that swap headers when dragged
#[derive(Debug, Clone)]
pub struct DragAndDropPage {
    browser: Browser,
}

impl DragAndDropPage {
    const COLUMN_A: &'static str = "column-a";
    const COLUMN_B: &'static str = "column-b";
    const COLUMN_A_HEADER: &'static str = "#column-a header";
    const COLUMN_B_HEADER: &'static str = "#column-b header";

    /// Bind to a browser session
    #[must_use]
    pub const fn new(browser: Browser) -> Self {
        Self { browser }
    }

    /// Header text of column A
    pub async fn column_a_text(&self) -> NavResult<String> {
        self.browser.text_of(&By::Css(Self::COLUMN_A_HEADER)).await
    }

    /// Header text of column B
    pub async fn column_b_text(&self) -> NavResult<String> {
        self.browser.text_of(&By::Css(Self::COLUMN_B_HEADER)).await
    }

    /// Drag column A onto column B
    pub async fn drag_a_to_b(&self) -> NavResult<()> {
        self.browser
            .drag_and_drop(&By::Id(Self::COLUMN_A), &By::Id(Self::COLUMN_B))
            .await
    }

    /// Drag column B onto column A
    pub async fn drag_b_to_a(&self) -> NavResult<()> {
        self.browser
            .drag_and_drop(&By::Id(Self::COLUMN_B), &By::Id(Self::COLUMN_A))
            .await
    }
}

#[async_trait]
impl Page for DragAndDropPage {
    fn browser(&self) -> &Browser {
        &self.browser
    }

    fn path(&self) -> &str {
        "/drag_and_drop"
    }
}

/// `/context_menu`: right-clicking the hot spot fires an alert
#[derive(Debug, Clone)]
pub struct ContextMenuPage {
    browser: Browser,
}

impl ContextMenuPage {
    const HOT_SPOT: &'static str = "hot-spot";

    /// Bind to a browser session
    #[must_use]
    pub const fn new(browser: Browser) -> Self {
        Self { browser }
    }

    /// Right-click the hot spot
    pub async fn right_click_hot_spot(&self) -> NavResult<()> {
        self.browser.right_click(&By::Id(Self::HOT_SPOT)).await
    }

    /// Right-click the hot spot and accept the resulting alert,
    /// returning its text
    pub async fn invoke_context_menu(&self) -> NavResult<String> {
        self.right_click_hot_spot().await?;
        self.browser.alerts().accept().await
    }
}

#[async_trait]
impl Page for ContextMenuPage {
    fn browser(&self) -> &Browser {
        &self.browser
    }

    fn path(&self) -> &str {
        "/context_menu"
    }
}

/// `/inputs`: a numeric input
#[derive(Debug, Clone)]
pub struct InputsPage {
    browser: Browser,
}

impl InputsPage {
    const NUMBER_INPUT: &'static str = "input[type='number']";

    /// Bind to a browser session
    #[must_use]
    pub const fn new(browser: Browser) -> Self {
        Self { browser }
    }

    /// Type into the numeric input (clears first)
    pub async fn enter_text(&self, text: &str) -> NavResult<()> {
        self.browser
            .type_text(&By::Css(Self::NUMBER_INPUT), text)
            .await
    }

    /// Type a number into the input
    pub async fn enter_number(&self, number: i64) -> NavResult<()> {
        self.enter_text(&number.to_string()).await
    }

    /// Clear the input
    pub async fn clear(&self) -> NavResult<()> {
        self.browser.clear(&By::Css(Self::NUMBER_INPUT)).await
    }

    /// Current value of the input
    pub async fn value(&self) -> NavResult<String> {
        self.browser.value_of(&By::Css(Self::NUMBER_INPUT)).await
    }

    /// Press arrow-up in the input (increments the number)
    pub async fn increment(&self) -> NavResult<()> {
        self.browser
            .send_keys(&By::Css(Self::NUMBER_INPUT), crate::keys::ARROW_UP)
            .await
    }

    /// Press arrow-down in the input (decrements the number)
    pub async fn decrement(&self) -> NavResult<()> {
        self.browser
            .send_keys(&By::Css(Self::NUMBER_INPUT), crate::keys::ARROW_DOWN)
            .await
    }
}

#[async_trait]
impl Page for InputsPage {
    fn browser(&self) -> &Browser {
        &self.browser
    }

    fn path(&self) -> &str {
        "/inputs"
    }
}

/// `/key_presses`: echoes the last key pressed
#[derive(Debug, Clone)]
pub struct KeyPressesPage {
    browser: Browser,
}

impl KeyPressesPage {
    const TARGET: &'static str = "target";
    const RESULT: &'static str = "result";

    /// Bind to a browser session
    #[must_use]
    pub const fn new(browser: Browser) -> Self {
        Self { browser }
    }

    /// Send a key (or key sequence) to the target input
    pub async fn press_key(&self, key: &str) -> NavResult<()> {
        self.browser.send_keys(&By::Id(Self::TARGET), key).await
    }

    /// Text reporting the last key entered
    pub async fn result_text(&self) -> NavResult<String> {
        self.browser.text_of(&By::Id(Self::RESULT)).await
    }
}

#[async_trait]
impl Page for KeyPressesPage {
    fn browser(&self) -> &Browser {
        &self.browser
    }

    fn path(&self) -> &str {
        "/key_presses"
    }
}

/// `/upload`: file-upload form
#[derive(Debug, Clone)]
pub struct FileUploadPage {
    browser: Browser,
}

impl FileUploadPage {
    const FILE_INPUT: &'static str = "file-upload";
    const UPLOAD_BUTTON: &'static str = "file-submit";
    const UPLOADED_FILES: &'static str = "uploaded-files";

    /// Bind to a browser session
    #[must_use]
    pub const fn new(browser: Browser) -> Self {
        Self { browser }
    }

    /// Point the file input at a local file.
    ///
    /// Fails with `MissingFile` before touching the browser when the
    /// path does not exist.
    pub async fn select_file(&self, path: &Path) -> NavResult<()> {
        if !path.exists() {
            return Err(NavError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        let absolute = path.canonicalize()?;
        let input = self.browser.find(&By::Id(Self::FILE_INPUT)).await?;
        input.send_keys(absolute.to_string_lossy().as_ref()).await?;
        Ok(())
    }

    /// Click the upload button
    pub async fn submit(&self) -> NavResult<()> {
        self.browser.click(&By::Id(Self::UPLOAD_BUTTON)).await
    }

    /// Select a file and upload it
    pub async fn upload(&self, path: &Path) -> NavResult<()> {
        self.select_file(path).await?;
        self.submit().await
    }

    /// Name of the file reported after upload
    pub async fn uploaded_file_name(&self) -> NavResult<String> {
        self.browser.text_of(&By::Id(Self::UPLOADED_FILES)).await
    }
}

#[async_trait]
impl Page for FileUploadPage {
    fn browser(&self) -> &Browser {
        &self.browser
    }

    fn path(&self) -> &str {
        "/upload"
    }
}

/// `/download`: a list of downloadable files
#[derive(Debug, Clone)]
pub struct FileDownloadPage {
    browser: Browser,
}

impl FileDownloadPage {
    const DOWNLOAD_LINKS: &'static str = ".example a";

    /// Bind to a browser session
    #[must_use]
    pub const fn new(browser: Browser) -> Self {
        Self { browser }
    }

    /// Every download link as (text, href)
    pub async fn download_links(&self) -> NavResult<Vec<(String, String)>> {
        let mut links = Vec::new();
        for link in self
            .browser
            .find_all(&By::Css(Self::DOWNLOAD_LINKS))
            .await?
        {
            let text = link.text().await?;
            let href = link.attr("href").await?.unwrap_or_default();
            links.push((text, href));
        }
        Ok(links)
    }

    /// Click a download link by its visible text
    pub async fn click_link(&self, link_text: &str) -> NavResult<()> {
        self.browser.click(&By::LinkText(link_text)).await
    }

    /// Click the first download link, returning the file name, or
    /// `None` when the page lists nothing
    pub async fn download_first(&self) -> NavResult<Option<String>> {
        let links = self
            .browser
            .find_all(&By::Css(Self::DOWNLOAD_LINKS))
            .await?;
        match links.first() {
            Some(link) => {
                let filename = link.text().await?;
                link.click().await?;
                Ok(Some(filename))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl Page for FileDownloadPage {
    fn browser(&self) -> &Browser {
        &self.browser
    }

    fn path(&self) -> &str {
        "/download"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn hover_selectors_index_figures_from_one() {
        assert_eq!(HoversPage::image_selector(1), ".figure:nth-of-type(1) img");
        assert_eq!(
            HoversPage::caption_selector(3),
            ".figure:nth-of-type(3) .figcaption"
        );
    }
}
