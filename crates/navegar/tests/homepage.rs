//! Live tests for the landing page.
//!
//! These need a WebDriver endpoint and network access; run them with
//! `navegante` or `cargo test -p navegar -- --include-ignored`.

mod common;

use navegar::pages::HomePage;
use navegar::Page;

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and network access"]
async fn homepage_title_is_the_internet() {
    common::with_session("homepage_title", |browser| async move {
        let home = HomePage::new(browser);
        home.open().await?;
        assert_eq!(home.title().await?, "The Internet");
        Ok(())
    })
    .await;
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and network access"]
async fn main_heading_welcomes_visitors() {
    common::with_session("homepage_heading", |browser| async move {
        let home = HomePage::new(browser);
        home.open().await?;
        assert!(home.heading().await?.contains("Welcome to the-internet"));
        assert!(home.subheading().await?.contains("Available Examples"));
        Ok(())
    })
    .await;
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and network access"]
async fn example_links_include_the_core_features() {
    common::with_session("homepage_links", |browser| async move {
        let home = HomePage::new(browser);
        home.open().await?;

        let links = home.example_links().await?;
        assert!(!links.is_empty(), "no example links found");
        for expected in [
            "Basic Auth",
            "Form Authentication",
            "Checkboxes",
            "Dropdown",
            "Dynamic Content",
            "JavaScript Alerts",
            "File Download",
            "File Upload",
        ] {
            assert!(
                links.iter().any(|l| l == expected),
                "example link {expected:?} missing from homepage"
            );
        }
        Ok(())
    })
    .await;
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and network access"]
async fn example_links_navigate_to_their_pages() {
    common::with_session("homepage_navigation", |browser| async move {
        let home = HomePage::new(browser.clone());

        home.open().await?;
        home.open_example("Checkboxes").await?;
        browser.wait().until_url_contains("checkboxes").await?;

        home.open().await?;
        home.open_example("Form Authentication").await?;
        browser.wait().until_url_contains("login").await?;

        home.open().await?;
        home.open_example("Dropdown").await?;
        browser.wait().until_url_contains("dropdown").await?;
        Ok(())
    })
    .await;
}
