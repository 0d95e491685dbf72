//! Page objects for the demo site, one struct per feature page.
//!
//! Each page holds a [`Browser`](crate::session::Browser) clone and
//! its locators, and exposes the feature-level actions the tests
//! compose.

mod auth;
mod dynamic;
mod home;
mod interaction;

pub use auth::{
    BasicAuthPage, LoginPage, SecureAreaPage, LOGIN_SUCCESS, LOGOUT_SUCCESS, PASSWORD_INVALID,
    USERNAME_INVALID,
};
pub use dynamic::{
    CheckboxesPage, ContentComparison, DropdownPage, DynamicContentPage, DynamicControlsPage,
    DynamicLoadingExample1Page, DynamicLoadingExample2Page, DynamicLoadingPage, CHECKBOX_BACK,
    CHECKBOX_GONE, INPUT_DISABLED, INPUT_ENABLED,
};
pub use home::HomePage;
pub use interaction::{
    ContextMenuPage, DragAndDropPage, FileDownloadPage, FileUploadPage, HoversPage, InputsPage,
    JavascriptAlertsPage, KeyPressesPage,
};
