//! Navegar: page objects and browser helpers for the "the-internet"
//! acceptance suite.
//!
//! Navegar (Spanish: "to navigate") drives the public demo site at
//! `the-internet.herokuapp.com` through a WebDriver endpoint. The
//! library provides the configuration, the driver factory, the wait
//! and interaction helpers, and one page object per site feature; the
//! live tests under `tests/` compose them.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌───────────────┐   ┌──────────────┐
//! │ Page objects │──►│ Browser layer │──►│ WebDriver    │
//! │ (pages::*)   │   │ (session)     │   │ (thirtyfour) │
//! └──────────────┘   └───────┬───────┘   └──────────────┘
//!                            │
//!          waits · actions · alerts · screenshots · files
//! ```
//!
//! Sessions come from [`DriverFactory`] (Chrome or Firefox, headless
//! by default); all synchronization is explicit through [`Waiter`],
//! with implicit waits pinned to zero.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

/// Mouse and scrolling actions
pub mod actions;
/// JavaScript dialog handling
pub mod alert;
/// Settings and environments
pub mod config;
/// Browser launch and capabilities
pub mod driver;
/// Error and result types
pub mod error;
/// Download-directory management
pub mod files;
/// Key codepoints for `send_keys`
pub mod keys;
/// Page objects for the demo site
pub mod pages;
/// Screenshot capture
pub mod screenshot;
/// Dropdown handling
pub mod select;
/// The browser interaction layer and `Page` trait
pub mod session;
/// JSON test fixtures
pub mod testdata;
/// Explicit waits
pub mod wait;

pub use config::{Credentials, Environment, Settings};
pub use driver::{BrowserKind, DriverFactory};
pub use error::{NavError, NavResult};
pub use files::DownloadDir;
pub use screenshot::Screenshots;
pub use select::Dropdown;
pub use session::{Browser, Page};
pub use testdata::TestData;
pub use wait::{Condition, Waiter};

// The By locator and element types come straight from the client.
pub use thirtyfour::{By, WebDriver, WebElement};
