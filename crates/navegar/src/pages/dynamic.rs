//! Pages whose content or controls change while you watch them.

use async_trait::async_trait;
use thirtyfour::prelude::*;

use crate::error::NavResult;
use crate::session::{Browser, Page};

/// Message shown after the checkbox is removed
pub const CHECKBOX_GONE: &str = "It's gone!";
/// Message shown after the checkbox comes back
pub const CHECKBOX_BACK: &str = "It's back!";
/// Message shown after the input is enabled
pub const INPUT_ENABLED: &str = "It's enabled!";
/// Message shown after the input is disabled
pub const INPUT_DISABLED: &str = "It's disabled!";

/// `/checkboxes`: two plain checkboxes
#[derive(Debug, Clone)]
pub struct CheckboxesPage {
    browser: Browser,
}

impl CheckboxesPage {
    const FIRST: &'static str = "input[type='checkbox']:nth-of-type(1)";
    const SECOND: &'static str = "input[type='checkbox']:nth-of-type(2)";
    const ALL: &'static str = "input[type='checkbox']";

    /// Bind to a browser session
    #[must_use]
    pub const fn new(browser: Browser) -> Self {
        Self { browser }
    }

    /// Check or uncheck the first checkbox
    pub async fn set_first(&self, checked: bool) -> NavResult<()> {
        self.browser.set_checkbox(&By::Css(Self::FIRST), checked).await
    }

    /// Check or uncheck the second checkbox
    pub async fn set_second(&self, checked: bool) -> NavResult<()> {
        self.browser.set_checkbox(&By::Css(Self::SECOND), checked).await
    }

    /// State of the first checkbox
    pub async fn is_first_checked(&self) -> NavResult<bool> {
        self.browser.is_checked(&By::Css(Self::FIRST)).await
    }

    /// State of the second checkbox
    pub async fn is_second_checked(&self) -> NavResult<bool> {
        self.browser.is_checked(&By::Css(Self::SECOND)).await
    }

    /// States of every checkbox, in page order
    pub async fn all_states(&self) -> NavResult<Vec<bool>> {
        let mut states = Vec::new();
        for checkbox in self.browser.find_all(&By::Css(Self::ALL)).await? {
            states.push(checkbox.is_selected().await?);
        }
        Ok(states)
    }
}

#[async_trait]
impl Page for CheckboxesPage {
    fn browser(&self) -> &Browser {
        &self.browser
    }

    fn path(&self) -> &str {
        "/checkboxes"
    }
}

/// `/dropdown`: a single `<select>`
#[derive(Debug, Clone)]
pub struct DropdownPage {
    browser: Browser,
}

impl DropdownPage {
    const DROPDOWN: &'static str = "dropdown";

    /// Bind to a browser session
    #[must_use]
    pub const fn new(browser: Browser) -> Self {
        Self { browser }
    }

    /// Select an option by its visible text
    pub async fn select_by_text(&self, text: &str) -> NavResult<()> {
        let dropdown = self.browser.dropdown(&By::Id(Self::DROPDOWN)).await?;
        dropdown.select_by_text(text).await
    }

    /// Select an option by its value attribute
    pub async fn select_by_value(&self, value: &str) -> NavResult<()> {
        let dropdown = self.browser.dropdown(&By::Id(Self::DROPDOWN)).await?;
        dropdown.select_by_value(value).await
    }

    /// Visible text of the selected option
    pub async fn selected_option(&self) -> NavResult<String> {
        let dropdown = self.browser.dropdown(&By::Id(Self::DROPDOWN)).await?;
        dropdown.selected_text().await
    }

    /// Visible text of every option
    pub async fn options(&self) -> NavResult<Vec<String>> {
        let dropdown = self.browser.dropdown(&By::Id(Self::DROPDOWN)).await?;
        dropdown.option_texts().await
    }
}

#[async_trait]
impl Page for DropdownPage {
    fn browser(&self) -> &Browser {
        &self.browser
    }

    fn path(&self) -> &str {
        "/dropdown"
    }
}

/// What changed across a dynamic-content refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentComparison {
    /// Any row text differs
    pub content_changed: bool,
    /// Any avatar image differs
    pub images_changed: bool,
}

/// `/dynamic_content`: rows of text and avatars that change on reload
#[derive(Debug, Clone)]
pub struct DynamicContentPage {
    browser: Browser,
}

impl DynamicContentPage {
    const REFRESH_LINK: &'static str = "click here";
    const CONTENT_ROWS: &'static str = ".large-10.columns";
    const IMAGES: &'static str = ".large-2.columns img";

    /// Bind to a browser session
    #[must_use]
    pub const fn new(browser: Browser) -> Self {
        Self { browser }
    }

    /// Follow the "click here" link to re-roll the content
    pub async fn refresh_content(&self) -> NavResult<()> {
        self.browser.click(&By::LinkText(Self::REFRESH_LINK)).await?;
        // The link navigates; wait for the new rows before reading.
        self.browser
            .wait()
            .until_present(&By::Css(Self::CONTENT_ROWS))
            .await?;
        Ok(())
    }

    /// Text of every content row
    pub async fn content_rows(&self) -> NavResult<Vec<String>> {
        let mut rows = Vec::new();
        for row in self.browser.find_all(&By::Css(Self::CONTENT_ROWS)).await? {
            rows.push(row.text().await?);
        }
        Ok(rows)
    }

    /// Source URL of every avatar image
    pub async fn image_sources(&self) -> NavResult<Vec<String>> {
        let mut sources = Vec::new();
        for img in self.browser.find_all(&By::Css(Self::IMAGES)).await? {
            sources.push(img.attr("src").await?.unwrap_or_default());
        }
        Ok(sources)
    }

    /// Re-roll the content and report what changed
    pub async fn refresh_and_compare(&self) -> NavResult<ContentComparison> {
        let before_rows = self.content_rows().await?;
        let before_images = self.image_sources().await?;

        self.refresh_content().await?;

        let after_rows = self.content_rows().await?;
        let after_images = self.image_sources().await?;
        Ok(ContentComparison {
            content_changed: before_rows != after_rows,
            images_changed: before_images != after_images,
        })
    }
}

#[async_trait]
impl Page for DynamicContentPage {
    fn browser(&self) -> &Browser {
        &self.browser
    }

    fn path(&self) -> &str {
        "/dynamic_content"
    }
}

/// `/dynamic_controls`: a checkbox that comes and goes and an input
/// that toggles between enabled and disabled
#[derive(Debug, Clone)]
pub struct DynamicControlsPage {
    browser: Browser,
}

impl DynamicControlsPage {
    const CHECKBOX: &'static str = "#checkbox input[type='checkbox']";
    const CHECKBOX_BUTTON: &'static str = "#checkbox-example button";
    const CHECKBOX_MESSAGE: &'static str = "#checkbox-example #message";
    const INPUT: &'static str = "#input-example input[type='text']";
    const INPUT_BUTTON: &'static str = "#input-example button";
    const INPUT_MESSAGE: &'static str = "#input-example #message";

    /// Bind to a browser session
    #[must_use]
    pub const fn new(browser: Browser) -> Self {
        Self { browser }
    }

    /// Remove the checkbox and wait for the confirmation message
    pub async fn remove_checkbox(&self) -> NavResult<()> {
        self.browser.click(&By::Css(Self::CHECKBOX_BUTTON)).await?;
        self.browser
            .wait()
            .until_text(&By::Css(Self::CHECKBOX_MESSAGE), CHECKBOX_GONE)
            .await?;
        Ok(())
    }

    /// Add the checkbox back and wait for the confirmation message
    pub async fn add_checkbox(&self) -> NavResult<()> {
        self.browser.click(&By::Css(Self::CHECKBOX_BUTTON)).await?;
        self.browser
            .wait()
            .until_text(&By::Css(Self::CHECKBOX_MESSAGE), CHECKBOX_BACK)
            .await?;
        Ok(())
    }

    /// Whether the checkbox currently exists
    pub async fn is_checkbox_present(&self) -> bool {
        self.browser.is_present(&By::Css(Self::CHECKBOX)).await
    }

    /// Current checkbox-side message
    pub async fn checkbox_message(&self) -> NavResult<String> {
        self.browser.text_of(&By::Css(Self::CHECKBOX_MESSAGE)).await
    }

    /// Enable the input and wait for the confirmation message
    pub async fn enable_input(&self) -> NavResult<()> {
        self.browser.click(&By::Css(Self::INPUT_BUTTON)).await?;
        self.browser
            .wait()
            .until_text(&By::Css(Self::INPUT_MESSAGE), INPUT_ENABLED)
            .await?;
        Ok(())
    }

    /// Disable the input and wait for the confirmation message
    pub async fn disable_input(&self) -> NavResult<()> {
        self.browser.click(&By::Css(Self::INPUT_BUTTON)).await?;
        self.browser
            .wait()
            .until_text(&By::Css(Self::INPUT_MESSAGE), INPUT_DISABLED)
            .await?;
        Ok(())
    }

    /// Whether the input accepts typing
    pub async fn is_input_enabled(&self) -> NavResult<bool> {
        let input = self.browser.find(&By::Css(Self::INPUT)).await?;
        Ok(input.is_enabled().await?)
    }

    /// Current input-side message
    pub async fn input_message(&self) -> NavResult<String> {
        self.browser.text_of(&By::Css(Self::INPUT_MESSAGE)).await
    }
}

#[async_trait]
impl Page for DynamicControlsPage {
    fn browser(&self) -> &Browser {
        &self.browser
    }

    fn path(&self) -> &str {
        "/dynamic_controls"
    }
}

/// `/dynamic_loading`: index page linking to the two loading examples
#[derive(Debug, Clone)]
pub struct DynamicLoadingPage {
    browser: Browser,
}

impl DynamicLoadingPage {
    const EXAMPLE_1_LINK: &'static str = "Example 1: Element on page that is hidden";
    const EXAMPLE_2_LINK: &'static str = "Example 2: Element rendered after the fact";

    /// Bind to a browser session
    #[must_use]
    pub const fn new(browser: Browser) -> Self {
        Self { browser }
    }

    /// Follow the link to example 1
    pub async fn open_example_1(&self) -> NavResult<()> {
        self.browser.click(&By::LinkText(Self::EXAMPLE_1_LINK)).await
    }

    /// Follow the link to example 2
    pub async fn open_example_2(&self) -> NavResult<()> {
        self.browser.click(&By::LinkText(Self::EXAMPLE_2_LINK)).await
    }
}

#[async_trait]
impl Page for DynamicLoadingPage {
    fn browser(&self) -> &Browser {
        &self.browser
    }

    fn path(&self) -> &str {
        "/dynamic_loading"
    }
}

/// `/dynamic_loading/1`: the finish element exists but is hidden
#[derive(Debug, Clone)]
pub struct DynamicLoadingExample1Page {
    browser: Browser,
}

impl DynamicLoadingExample1Page {
    const START_BUTTON: &'static str = "#start button";
    const LOADING: &'static str = "loading";
    const FINISH: &'static str = "finish";

    /// Bind to a browser session
    #[must_use]
    pub const fn new(browser: Browser) -> Self {
        Self { browser }
    }

    /// Click the start button
    pub async fn start(&self) -> NavResult<()> {
        self.browser.click(&By::Css(Self::START_BUTTON)).await
    }

    /// Wait for the hidden element to become visible
    pub async fn wait_until_finished(&self) -> NavResult<()> {
        self.browser
            .wait()
            .until_visible(&By::Id(Self::FINISH))
            .await?;
        Ok(())
    }

    /// The finish text
    pub async fn finish_text(&self) -> NavResult<String> {
        self.browser.text_of(&By::Id(Self::FINISH)).await
    }

    /// Whether the loading spinner is showing
    pub async fn is_loading_visible(&self) -> bool {
        self.browser.is_visible(&By::Id(Self::LOADING)).await
    }
}

#[async_trait]
impl Page for DynamicLoadingExample1Page {
    fn browser(&self) -> &Browser {
        &self.browser
    }

    fn path(&self) -> &str {
        "/dynamic_loading/1"
    }
}

/// `/dynamic_loading/2`: the finish element is created after the fact
#[derive(Debug, Clone)]
pub struct DynamicLoadingExample2Page {
    browser: Browser,
}

impl DynamicLoadingExample2Page {
    const START_BUTTON: &'static str = "#start button";
    const FINISH: &'static str = "finish";

    /// Bind to a browser session
    #[must_use]
    pub const fn new(browser: Browser) -> Self {
        Self { browser }
    }

    /// Click the start button
    pub async fn start(&self) -> NavResult<()> {
        self.browser.click(&By::Css(Self::START_BUTTON)).await
    }

    /// Wait for the finish element to be added to the DOM
    pub async fn wait_until_rendered(&self) -> NavResult<()> {
        self.browser
            .wait()
            .until_present(&By::Id(Self::FINISH))
            .await?;
        Ok(())
    }

    /// The finish text
    pub async fn finish_text(&self) -> NavResult<String> {
        self.browser.text_of(&By::Id(Self::FINISH)).await
    }

    /// Whether the finish element exists yet
    pub async fn is_finish_present(&self) -> bool {
        self.browser.is_present(&By::Id(Self::FINISH)).await
    }
}

#[async_trait]
impl Page for DynamicLoadingExample2Page {
    fn browser(&self) -> &Browser {
        &self.browser
    }

    fn path(&self) -> &str {
        "/dynamic_loading/2"
    }
}
