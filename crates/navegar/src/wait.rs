//! Explicit waits.
//!
//! A [`Waiter`] is bound to one session, one timeout and one poll
//! interval. Every condition polls the live DOM at a fixed interval
//! until it holds or the timeout elapses; the timeout is the only
//! abort path, and the resulting error names the condition and the
//! locator that never satisfied it.

use std::future::Future;
use std::time::Duration;

use thirtyfour::prelude::*;
use tracing::debug;

use crate::error::{NavError, NavResult};

/// Named wait conditions, used in timeout errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Element exists in the DOM
    Present,
    /// Element exists and is displayed
    Visible,
    /// Element is displayed and enabled
    Clickable,
    /// Element's text contains a substring
    TextPresent,
    /// Current URL contains a substring
    UrlContains,
    /// A JavaScript dialog is open
    AlertPresent,
    /// Element is gone or hidden
    Absent,
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Present => "present",
            Self::Visible => "visible",
            Self::Clickable => "clickable",
            Self::TextPresent => "text present",
            Self::UrlContains => "url contains",
            Self::AlertPresent => "alert present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

/// Poll `probe` at a fixed interval until it yields a value or the
/// timeout elapses.
///
/// The probe runs at least once even with a zero timeout.
pub async fn poll_until<T, F, Fut>(timeout: Duration, interval: Duration, mut probe: F) -> Option<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if let Some(value) = probe().await {
            return Some(value);
        }
        if tokio::time::Instant::now() >= deadline {
            return None;
        }
        tokio::time::sleep(interval).await;
    }
}

/// Fixed-interval explicit wait bound to one session
#[derive(Debug, Clone)]
pub struct Waiter {
    driver: WebDriver,
    timeout: Duration,
    poll_interval: Duration,
}

impl Waiter {
    /// Create a waiter with the given timeout and poll interval
    #[must_use]
    pub const fn new(driver: WebDriver, timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            driver,
            timeout,
            poll_interval,
        }
    }

    /// The same waiter rebound to a different timeout
    #[must_use]
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            driver: self.driver.clone(),
            timeout,
            poll_interval: self.poll_interval,
        }
    }

    /// Wait until an element exists in the DOM
    pub async fn until_present(&self, by: &By) -> NavResult<WebElement> {
        self.poll_element(Condition::Present, by, |el| async move { Some(el) })
            .await
    }

    /// Wait until an element exists and is displayed
    pub async fn until_visible(&self, by: &By) -> NavResult<WebElement> {
        self.poll_element(Condition::Visible, by, |el| async move {
            match el.is_displayed().await {
                Ok(true) => Some(el),
                _ => None,
            }
        })
        .await
    }

    /// Wait until an element is displayed and enabled
    pub async fn until_clickable(&self, by: &By) -> NavResult<WebElement> {
        self.poll_element(Condition::Clickable, by, |el| async move {
            match el.is_clickable().await {
                Ok(true) => Some(el),
                _ => None,
            }
        })
        .await
    }

    /// Wait until an element's text contains `expected`
    pub async fn until_text(&self, by: &By, expected: &str) -> NavResult<WebElement> {
        self.poll_element(Condition::TextPresent, by, |el| async move {
            match el.text().await {
                Ok(text) if text.contains(expected) => Some(el),
                _ => None,
            }
        })
        .await
        .map_err(|_| {
            NavError::wait_timeout(
                format!("text containing {expected:?}"),
                describe(by),
                self.timeout,
            )
        })
    }

    /// Wait until the current URL contains `fragment`
    pub async fn until_url_contains(&self, fragment: &str) -> NavResult<()> {
        let found = poll_until(self.timeout, self.poll_interval, || async move {
            match self.driver.current_url().await {
                Ok(url) if url.as_str().contains(fragment) => Some(()),
                _ => None,
            }
        })
        .await;
        found.ok_or_else(|| {
            NavError::wait_timeout(
                Condition::UrlContains.to_string(),
                format!("fragment {fragment:?}"),
                self.timeout,
            )
        })
    }

    /// Wait until a JavaScript dialog is open, returning its text
    pub async fn until_alert_present(&self) -> NavResult<String> {
        let text = poll_until(self.timeout, self.poll_interval, || async move {
            self.driver.get_alert_text().await.ok()
        })
        .await;
        text.ok_or_else(|| {
            NavError::wait_timeout(Condition::AlertPresent.to_string(), "dialog", self.timeout)
        })
    }

    /// Wait until an element is gone from the DOM or hidden
    pub async fn until_absent(&self, by: &By) -> NavResult<()> {
        let gone = poll_until(self.timeout, self.poll_interval, || async move {
            match self.driver.find(by.clone()).await {
                Err(_) => Some(()),
                Ok(el) => match el.is_displayed().await {
                    Ok(false) | Err(_) => Some(()),
                    Ok(true) => None,
                },
            }
        })
        .await;
        gone.ok_or_else(|| {
            NavError::wait_timeout(Condition::Absent.to_string(), describe(by), self.timeout)
        })
    }

    /// Shared poll loop for element-producing conditions
    async fn poll_element<F, Fut>(
        &self,
        condition: Condition,
        by: &By,
        accept: F,
    ) -> NavResult<WebElement>
    where
        F: Fn(WebElement) -> Fut,
        Fut: Future<Output = Option<WebElement>>,
    {
        debug!(condition = %condition, locator = %describe(by), "waiting");
        let accept = &accept;
        let found = poll_until(self.timeout, self.poll_interval, || async move {
            match self.driver.find(by.clone()).await {
                Ok(el) => accept(el).await,
                Err(_) => None,
            }
        })
        .await;
        found.ok_or_else(|| {
            NavError::wait_timeout(condition.to_string(), describe(by), self.timeout)
        })
    }
}

fn describe(by: &By) -> String {
    format!("{by:?}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    mod poll_until_tests {
        use super::*;

        #[tokio::test(start_paused = true)]
        async fn returns_first_successful_probe() {
            let attempts = AtomicU32::new(0);
            let attempts = &attempts;
            let result = poll_until(
                Duration::from_secs(10),
                Duration::from_millis(250),
                || async move {
                    let n = attempts.fetch_add(1, Ordering::SeqCst) + 1;
                    (n == 3).then_some(n)
                },
            )
            .await;
            assert_eq!(result, Some(3));
            assert_eq!(attempts.load(Ordering::SeqCst), 3);
        }

        #[tokio::test(start_paused = true)]
        async fn gives_up_after_the_timeout() {
            let attempts = AtomicU32::new(0);
            let attempts = &attempts;
            let result: Option<()> = poll_until(
                Duration::from_secs(10),
                Duration::from_millis(250),
                || async move {
                    attempts.fetch_add(1, Ordering::SeqCst);
                    None
                },
            )
            .await;
            assert_eq!(result, None);
            // 10s at 250ms intervals: first probe plus 40 polls.
            assert_eq!(attempts.load(Ordering::SeqCst), 41);
        }

        #[tokio::test(start_paused = true)]
        async fn zero_timeout_still_probes_once() {
            let attempts = AtomicU32::new(0);
            let attempts = &attempts;
            let result = poll_until(Duration::ZERO, Duration::from_millis(250), || async move {
                attempts.fetch_add(1, Ordering::SeqCst);
                Some(())
            })
            .await;
            assert_eq!(result, Some(()));
            assert_eq!(attempts.load(Ordering::SeqCst), 1);
        }
    }

    mod condition_tests {
        use super::*;

        #[test]
        fn display_names_are_stable() {
            assert_eq!(Condition::Present.to_string(), "present");
            assert_eq!(Condition::Clickable.to_string(), "clickable");
            assert_eq!(Condition::AlertPresent.to_string(), "alert present");
            assert_eq!(Condition::Absent.to_string(), "absent");
        }
    }
}
