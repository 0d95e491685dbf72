//! Live tests for pointer, keyboard, dialog and file interactions.

mod common;

use std::time::Duration;

use navegar::pages::{
    ContextMenuPage, DragAndDropPage, FileDownloadPage, FileUploadPage, HoversPage, InputsPage,
    JavascriptAlertsPage, KeyPressesPage,
};
use navegar::{keys, Page};

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and network access"]
async fn hovering_reveals_user_captions() {
    common::with_session("hovers", |browser| async move {
        let page = HoversPage::new(browser);
        page.open().await?;

        for n in 1..=3 {
            page.hover_over_user(n).await?;
            assert!(
                page.is_caption_visible(n).await,
                "caption {n} not revealed by hover"
            );
            let caption = page.caption_text(n).await?;
            assert!(caption.contains(&format!("user{n}")));
        }
        Ok(())
    })
    .await;
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and network access"]
async fn plain_alert_round_trips() {
    common::with_session("js_alert", |browser| async move {
        let page = JavascriptAlertsPage::new(browser);
        page.open().await?;

        page.trigger_alert().await?;
        let text = page.accept_dialog().await?;

        assert_eq!(text, "I am a JS Alert");
        assert_eq!(
            page.result_text().await?,
            "You successfully clicked an alert"
        );
        Ok(())
    })
    .await;
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and network access"]
async fn confirm_dialog_reports_both_answers() {
    common::with_session("js_confirm", |browser| async move {
        let page = JavascriptAlertsPage::new(browser);
        page.open().await?;

        page.trigger_confirm().await?;
        page.accept_dialog().await?;
        assert_eq!(page.result_text().await?, "You clicked: Ok");

        page.trigger_confirm().await?;
        page.dismiss_dialog().await?;
        assert_eq!(page.result_text().await?, "You clicked: Cancel");
        Ok(())
    })
    .await;
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and network access"]
async fn prompt_echoes_the_entered_text() {
    common::with_session("js_prompt", |browser| async move {
        let page = JavascriptAlertsPage::new(browser);
        page.open().await?;

        page.trigger_prompt().await?;
        page.answer_prompt("navegar").await?;

        assert_eq!(page.result_text().await?, "You entered: navegar");
        Ok(())
    })
    .await;
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and network access"]
async fn drag_and_drop_swaps_the_column_headers() {
    common::with_session("drag_and_drop", |browser| async move {
        let page = DragAndDropPage::new(browser);
        page.open().await?;

        assert_eq!(page.column_a_text().await?, "A");
        assert_eq!(page.column_b_text().await?, "B");

        page.drag_a_to_b().await?;
        assert_eq!(page.column_a_text().await?, "B");
        assert_eq!(page.column_b_text().await?, "A");

        page.drag_b_to_a().await?;
        assert_eq!(page.column_a_text().await?, "A");
        assert_eq!(page.column_b_text().await?, "B");
        Ok(())
    })
    .await;
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and network access"]
async fn context_menu_fires_an_alert() {
    common::with_session("context_menu", |browser| async move {
        let page = ContextMenuPage::new(browser);
        page.open().await?;

        let text = page.invoke_context_menu().await?;
        assert_eq!(text, "You selected a context menu");
        Ok(())
    })
    .await;
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and network access"]
async fn numeric_input_ignores_letters() {
    common::with_session("inputs_letters", |browser| async move {
        let page = InputsPage::new(browser);
        page.open().await?;

        page.enter_text("abc").await?;
        assert_eq!(page.value().await?, "", "letters must not register");

        page.enter_number(42).await?;
        assert_eq!(page.value().await?, "42");
        Ok(())
    })
    .await;
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and network access"]
async fn arrow_keys_step_the_numeric_input() {
    common::with_session("inputs_arrows", |browser| async move {
        let page = InputsPage::new(browser);
        page.open().await?;

        page.enter_number(5).await?;
        page.increment().await?;
        assert_eq!(page.value().await?, "6");

        page.decrement().await?;
        page.decrement().await?;
        assert_eq!(page.value().await?, "4");
        Ok(())
    })
    .await;
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and network access"]
async fn key_presses_are_reported() {
    common::with_session("key_presses", |browser| async move {
        let page = KeyPressesPage::new(browser);
        page.open().await?;

        page.press_key(keys::TAB).await?;
        assert_eq!(page.result_text().await?, "You entered: TAB");

        page.press_key(keys::SPACE).await?;
        assert_eq!(page.result_text().await?, "You entered: SPACE");
        Ok(())
    })
    .await;
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and network access"]
async fn file_upload_reports_the_file_name() {
    common::with_session("file_upload", |browser| async move {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("navegar_upload.txt");
        std::fs::write(&file, b"uploaded by the acceptance suite")?;

        let page = FileUploadPage::new(browser);
        page.open().await?;
        page.upload(&file).await?;

        assert!(page
            .uploaded_file_name()
            .await?
            .contains("navegar_upload.txt"));
        Ok(())
    })
    .await;
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and network access"]
async fn uploading_a_missing_file_fails_before_the_browser() {
    common::with_session("file_upload_missing", |browser| async move {
        let page = FileUploadPage::new(browser);
        page.open().await?;

        let result = page
            .select_file(std::path::Path::new("/nonexistent/nope.txt"))
            .await;
        assert!(matches!(
            result,
            Err(navegar::NavError::MissingFile { .. })
        ));
        Ok(())
    })
    .await;
}

#[tokio::test]
#[ignore = "requires a WebDriver endpoint and network access"]
async fn downloads_land_in_the_configured_directory() {
    common::with_session("file_download", |browser| async move {
        let page = FileDownloadPage::new(browser.clone());
        page.open().await?;

        let links = page.download_links().await?;
        assert!(!links.is_empty(), "no files offered for download");

        let filename = page
            .download_first()
            .await?
            .expect("download page listed no files");
        let path = browser
            .downloads()
            .wait_for(&filename, Duration::from_secs(30))
            .await?;
        assert!(path.exists());
        Ok(())
    })
    .await;
}
