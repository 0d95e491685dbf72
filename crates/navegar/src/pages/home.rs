//! The site's landing page: a heading and the list of example links.

use async_trait::async_trait;
use thirtyfour::prelude::*;

use crate::error::NavResult;
use crate::session::{Browser, Page};

/// Landing page at `/`
#[derive(Debug, Clone)]
pub struct HomePage {
    browser: Browser,
}

impl HomePage {
    const HEADING: &'static str = "h1";
    const SUBHEADING: &'static str = "h2";
    const EXAMPLE_LINKS: &'static str = "ul li a";

    /// Bind to a browser session
    #[must_use]
    pub const fn new(browser: Browser) -> Self {
        Self { browser }
    }

    /// Main heading text
    pub async fn heading(&self) -> NavResult<String> {
        self.browser.text_of(&By::Tag(Self::HEADING)).await
    }

    /// Subheading text
    pub async fn subheading(&self) -> NavResult<String> {
        self.browser.text_of(&By::Tag(Self::SUBHEADING)).await
    }

    /// Text of every example link, in page order
    pub async fn example_links(&self) -> NavResult<Vec<String>> {
        let mut names = Vec::new();
        for link in self.browser.find_all(&By::Css(Self::EXAMPLE_LINKS)).await? {
            names.push(link.text().await?);
        }
        Ok(names)
    }

    /// Follow an example link by its visible text
    pub async fn open_example(&self, link_text: &str) -> NavResult<()> {
        self.browser.click(&By::LinkText(link_text)).await
    }
}

#[async_trait]
impl Page for HomePage {
    fn browser(&self) -> &Browser {
        &self.browser
    }

    fn path(&self) -> &str {
        "/"
    }
}
