//! Mouse and scrolling actions over the WebDriver action chain.

use thirtyfour::prelude::*;

use crate::error::NavResult;

/// Action-chain helper bound to one session
#[derive(Debug, Clone)]
pub struct Actions {
    driver: WebDriver,
}

impl Actions {
    /// Create an action helper for a session
    #[must_use]
    pub const fn new(driver: WebDriver) -> Self {
        Self { driver }
    }

    /// Move the pointer over an element
    pub async fn hover(&self, element: &WebElement) -> NavResult<()> {
        self.driver
            .action_chain()
            .move_to_element_center(element)
            .perform()
            .await?;
        Ok(())
    }

    /// Drag one element onto another
    pub async fn drag_and_drop(&self, source: &WebElement, target: &WebElement) -> NavResult<()> {
        self.driver
            .action_chain()
            .drag_and_drop_element(source, target)
            .perform()
            .await?;
        Ok(())
    }

    /// Context-click an element
    pub async fn right_click(&self, element: &WebElement) -> NavResult<()> {
        self.driver
            .action_chain()
            .move_to_element_center(element)
            .context_click()
            .perform()
            .await?;
        Ok(())
    }

    /// Double-click an element
    pub async fn double_click(&self, element: &WebElement) -> NavResult<()> {
        self.driver
            .action_chain()
            .move_to_element_center(element)
            .double_click()
            .perform()
            .await?;
        Ok(())
    }

    /// Scroll an element into view
    pub async fn scroll_into_view(&self, element: &WebElement) -> NavResult<()> {
        self.driver
            .execute(
                "arguments[0].scrollIntoView({block: 'center'});",
                vec![element.to_json()?],
            )
            .await?;
        Ok(())
    }

    /// Scroll to the top of the page
    pub async fn scroll_to_top(&self) -> NavResult<()> {
        self.driver
            .execute("window.scrollTo(0, 0);", vec![])
            .await?;
        Ok(())
    }

    /// Scroll to the bottom of the page
    pub async fn scroll_to_bottom(&self) -> NavResult<()> {
        self.driver
            .execute("window.scrollTo(0, document.body.scrollHeight);", vec![])
            .await?;
        Ok(())
    }
}
