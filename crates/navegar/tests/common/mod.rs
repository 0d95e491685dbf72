//! Shared fixture for the live acceptance tests.
//!
//! Every test gets a fresh browser session built from the environment
//! (`TEST_ENV`, `BROWSER`, `HEADLESS`, `WEBDRIVER_URL`). On failure a
//! screenshot is captured before the failure propagates.

#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

use std::future::Future;

use futures::FutureExt;
use navegar::{Browser, NavResult, Settings};

fn init_settings() -> Settings {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    Settings::from_env()
}

/// Launch a fresh session for one test.
pub async fn session() -> Browser {
    let settings = init_settings();
    let browser = Browser::launch(settings)
        .await
        .expect("failed to launch browser session; is a WebDriver endpoint running?");
    browser
        .downloads()
        .clean()
        .expect("failed to clean the downloads directory");
    browser
}

/// Run one test body against a fresh session.
///
/// Captures a screenshot when the body fails (error or panic), quits
/// the session either way, then propagates the failure.
pub async fn with_session<F, Fut>(test_name: &str, test: F)
where
    F: FnOnce(Browser) -> Fut,
    Fut: Future<Output = NavResult<()>>,
{
    let browser = session().await;
    let outcome = std::panic::AssertUnwindSafe(test(browser.clone()))
        .catch_unwind()
        .await;
    match outcome {
        Ok(Ok(())) => {
            browser.quit().await.expect("failed to quit browser");
        }
        Ok(Err(err)) => {
            browser
                .screenshots()
                .capture(&format!("{test_name}_failed"))
                .await;
            let _ = browser.quit().await;
            panic!("{test_name} failed: {err}");
        }
        Err(panic) => {
            browser
                .screenshots()
                .capture(&format!("{test_name}_failed"))
                .await;
            let _ = browser.quit().await;
            std::panic::resume_unwind(panic);
        }
    }
}
