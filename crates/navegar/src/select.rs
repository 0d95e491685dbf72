//! Dropdown (`<select>`) handling over the client's select component.

use thirtyfour::components::SelectElement;
use thirtyfour::prelude::*;

use crate::error::NavResult;

/// Dropdown helper wrapping one `<select>` element
#[derive(Debug)]
pub struct Dropdown {
    select: SelectElement,
}

impl Dropdown {
    /// Wrap a `<select>` element
    pub async fn new(element: &WebElement) -> NavResult<Self> {
        let select = SelectElement::new(element).await?;
        Ok(Self { select })
    }

    /// Select the option with the given visible text
    pub async fn select_by_text(&self, text: &str) -> NavResult<()> {
        self.select.select_by_exact_text(text).await?;
        Ok(())
    }

    /// Select the option with the given value attribute
    pub async fn select_by_value(&self, value: &str) -> NavResult<()> {
        self.select.select_by_value(value).await?;
        Ok(())
    }

    /// Select the option at the given index
    pub async fn select_by_index(&self, index: u32) -> NavResult<()> {
        self.select.select_by_index(index).await?;
        Ok(())
    }

    /// Visible text of the first selected option
    pub async fn selected_text(&self) -> NavResult<String> {
        let option = self.select.first_selected_option().await?;
        Ok(option.text().await?)
    }

    /// Visible text of every option, in document order
    pub async fn option_texts(&self) -> NavResult<Vec<String>> {
        let mut texts = Vec::new();
        for option in self.select.options().await? {
            texts.push(option.text().await?);
        }
        Ok(texts)
    }
}
