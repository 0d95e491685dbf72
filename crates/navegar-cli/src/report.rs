//! Self-contained HTML report and machine-readable run summary.

use std::fmt::Write as _;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use navegar::Settings;
use serde_json::json;
use tracing::info;

use crate::error::{CliError, CliResult};
use crate::runner::RunOutcome;

/// Run metadata shown in the report header.
#[derive(Debug, Clone)]
pub struct ReportContext {
    /// Browser the suite ran against
    pub browser: String,
    /// Environment name
    pub environment: String,
    /// Whether the browser ran headless
    pub headless: bool,
    /// WebDriver endpoint
    pub webdriver_url: String,
    /// When the run finished
    pub generated_at: DateTime<Local>,
}

/// Render the report as a single HTML document with inline styles.
#[must_use]
pub fn render_html(context: &ReportContext, outcome: &RunOutcome) -> String {
    let summary = outcome.final_summary();
    let verdict = if summary.all_passed() && outcome.exit_code() == 0 {
        ("passed", "#2e7d32")
    } else {
        ("failed", "#c62828")
    };

    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Navegar acceptance report</title>\n\
         <style>\n\
         body {{ font-family: sans-serif; margin: 2rem; color: #222; }}\n\
         table {{ border-collapse: collapse; margin: 1rem 0; }}\n\
         th, td {{ border: 1px solid #ccc; padding: 0.4rem 0.8rem; text-align: left; }}\n\
         th {{ background: #f5f5f5; }}\n\
         pre {{ background: #f8f8f8; border: 1px solid #ddd; padding: 1rem; overflow-x: auto; }}\n\
         .verdict {{ font-weight: bold; color: {}; }}\n\
         </style>\n</head>\n<body>\n",
        verdict.1
    );

    let _ = write!(
        html,
        "<h1>Navegar acceptance report</h1>\n\
         <p>Run <span class=\"verdict\">{}</span> at {}</p>\n",
        verdict.0,
        context.generated_at.format("%Y-%m-%d %H:%M:%S")
    );

    let _ = write!(
        html,
        "<table>\n<tr><th>Browser</th><td>{}</td></tr>\n\
         <tr><th>Environment</th><td>{}</td></tr>\n\
         <tr><th>Headless</th><td>{}</td></tr>\n\
         <tr><th>WebDriver</th><td>{}</td></tr>\n</table>\n",
        escape_html(&context.browser),
        escape_html(&context.environment),
        context.headless,
        escape_html(&context.webdriver_url)
    );

    html.push_str(
        "<h2>Attempts</h2>\n<table>\n\
         <tr><th>Attempt</th><th>Passed</th><th>Failed</th><th>Ignored</th><th>Exit code</th></tr>\n",
    );
    for attempt in &outcome.attempts {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            attempt.number,
            attempt.summary.passed,
            attempt.summary.failed,
            attempt.summary.ignored,
            attempt.exit_code
        );
    }
    html.push_str("</table>\n");

    let _ = write!(
        html,
        "<h2>Final output</h2>\n<pre>{}</pre>\n</body>\n</html>\n",
        escape_html(&outcome.final_output)
    );

    html
}

/// Write the HTML report and `summary.json` into the report
/// directory. Returns the HTML report path.
pub fn write_reports(
    settings: &Settings,
    context: &ReportContext,
    outcome: &RunOutcome,
) -> CliResult<PathBuf> {
    std::fs::create_dir_all(&settings.report_dir)
        .map_err(|err| CliError::report_generation(format!("creating report dir: {err}")))?;

    let html = render_html(context, outcome);
    std::fs::write(&settings.html_report_file, html)
        .map_err(|err| CliError::report_generation(format!("writing HTML report: {err}")))?;

    let summary = outcome.final_summary();
    let machine = json!({
        "browser": context.browser,
        "environment": context.environment,
        "headless": context.headless,
        "webdriver_url": context.webdriver_url,
        "generated_at": context.generated_at.to_rfc3339(),
        "passed": summary.passed,
        "failed": summary.failed,
        "ignored": summary.ignored,
        "exit_code": outcome.exit_code(),
        "attempts": outcome.attempts,
    });
    let summary_path = settings.report_dir.join("summary.json");
    std::fs::write(&summary_path, serde_json::to_string_pretty(&machine)?)
        .map_err(|err| CliError::report_generation(format!("writing summary.json: {err}")))?;

    info!(report = %settings.html_report_file.display(), "wrote report");
    Ok(settings.html_report_file.clone())
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::runner::{Attempt, RunSummary};
    use chrono::TimeZone;

    fn context() -> ReportContext {
        ReportContext {
            browser: "chrome".to_string(),
            environment: "dev".to_string(),
            headless: true,
            webdriver_url: "http://localhost:9515".to_string(),
            generated_at: Local.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap(),
        }
    }

    fn outcome(failed: usize, exit_code: i32) -> RunOutcome {
        RunOutcome {
            attempts: vec![Attempt {
                number: 1,
                summary: RunSummary {
                    passed: 7,
                    failed,
                    ignored: 0,
                },
                exit_code,
            }],
            final_output: "test result: ok.".to_string(),
        }
    }

    mod render_tests {
        use super::*;

        #[test]
        fn passing_run_renders_a_passed_verdict() {
            let html = render_html(&context(), &outcome(0, 0));
            assert!(html.contains("passed"));
            assert!(html.contains("chrome"));
            assert!(html.contains("2025-06-01 12:30:00"));
        }

        #[test]
        fn failing_run_renders_a_failed_verdict() {
            let html = render_html(&context(), &outcome(2, 101));
            assert!(html.contains("failed"));
            assert!(html.contains("<td>2</td>"));
        }

        #[test]
        fn output_is_html_escaped() {
            let mut run = outcome(0, 0);
            run.final_output = "assert!(a < b && c > d)".to_string();
            let html = render_html(&context(), &run);
            assert!(html.contains("a &lt; b &amp;&amp; c &gt; d"));
            assert!(!html.contains("a < b"));
        }
    }

    mod write_tests {
        use super::*;

        #[test]
        fn writes_html_and_summary_json() {
            let tmp = tempfile::tempdir().unwrap();
            let mut settings = Settings::default();
            settings.report_dir = tmp.path().to_path_buf();
            settings.html_report_file = tmp.path().join("test_report.html");

            let path = write_reports(&settings, &context(), &outcome(1, 101)).unwrap();
            assert!(path.exists());

            let raw = std::fs::read_to_string(tmp.path().join("summary.json")).unwrap();
            let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
            assert_eq!(parsed["failed"], 1);
            assert_eq!(parsed["exit_code"], 101);
            assert_eq!(parsed["browser"], "chrome");
        }
    }
}
