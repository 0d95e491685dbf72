//! Translation of CLI flags into a `cargo test` invocation, plus the
//! rerun loop around it.

use std::process::Output;

use navegar::config::{
    ENV_BROWSER, ENV_DOWNLOADS_DIR, ENV_HEADLESS, ENV_SCREENSHOT_DIR, ENV_TEST_ENV,
    ENV_WEBDRIVER_URL,
};
use navegar::{DownloadDir, Settings};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cli::Cli;
use crate::error::{CliError, CliResult};

/// A fully rendered `cargo test` invocation for the acceptance suite.
#[derive(Debug, Clone)]
pub struct TestCommand {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl TestCommand {
    /// Build the invocation from the parsed CLI flags.
    ///
    /// Cargo starts the test binaries in the package directory, not
    /// where `navegante` runs, so the download and screenshot
    /// directories are exported as absolute paths; the fixture picks
    /// them up and both processes operate on the same tree.
    pub fn from_cli(cli: &Cli, settings: &Settings) -> CliResult<Self> {
        let mut args = vec!["test".to_string(), "-p".to_string(), "navegar".to_string()];

        for suite in cli.selected_suites() {
            args.push("--test".to_string());
            args.push(suite.test_target().to_string());
        }

        // libtest stops a binary at its first failure only when asked;
        // cargo additionally needs --no-fail-fast to keep running the
        // remaining binaries.
        if !cli.fail_fast {
            args.push("--no-fail-fast".to_string());
        }

        args.push("--".to_string());
        // The suite is marked #[ignore] so plain `cargo test` stays
        // offline; the runner opts back in.
        args.push("--include-ignored".to_string());

        if let Some(keyword) = &cli.keyword {
            args.push(keyword.clone());
        }

        args.push("--test-threads".to_string());
        args.push(cli.workers.to_string());

        if cli.nocapture {
            args.push("--nocapture".to_string());
        }
        if cli.quiet {
            args.push("-q".to_string());
        }

        let envs = vec![
            (ENV_TEST_ENV.to_string(), cli.environment.as_str().to_string()),
            (ENV_BROWSER.to_string(), cli.browser.as_str().to_string()),
            (ENV_HEADLESS.to_string(), cli.headless().to_string()),
            (ENV_WEBDRIVER_URL.to_string(), cli.webdriver_url.clone()),
            (
                ENV_DOWNLOADS_DIR.to_string(),
                settings.downloads_dir_abs()?.display().to_string(),
            ),
            (
                ENV_SCREENSHOT_DIR.to_string(),
                settings.screenshot_dir_abs()?.display().to_string(),
            ),
        ];

        Ok(Self { args, envs })
    }

    /// The arguments passed to `cargo`.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The environment variables exported to the test fixture.
    #[must_use]
    pub fn envs(&self) -> &[(String, String)] {
        &self.envs
    }

    /// The invocation as a copy-pasteable shell line, for `--dry-run`
    /// and logging.
    #[must_use]
    pub fn rendered(&self) -> String {
        let mut parts: Vec<String> = self
            .envs
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        parts.push("cargo".to_string());
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }

    /// Run the invocation and capture its output.
    fn execute(&self) -> CliResult<Output> {
        let output = std::process::Command::new("cargo")
            .args(&self.args)
            .envs(self.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .output()
            .map_err(|err| CliError::test_execution(format!("failed to invoke cargo: {err}")))?;
        Ok(output)
    }
}

/// Pass/fail/ignore counts parsed from libtest summary lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Tests that passed
    pub passed: usize,
    /// Tests that failed
    pub failed: usize,
    /// Tests that were skipped
    pub ignored: usize,
}

impl RunSummary {
    /// Parse the counts out of libtest output, summing across the
    /// summary line each test binary prints:
    ///
    /// `test result: ok. 4 passed; 0 failed; 0 ignored; ...`
    #[must_use]
    pub fn parse(output: &str) -> Self {
        let mut summary = Self::default();
        for line in output.lines() {
            let Some(rest) = line.trim().strip_prefix("test result:") else {
                continue;
            };
            summary.passed += count_before(rest, "passed");
            summary.failed += count_before(rest, "failed");
            summary.ignored += count_before(rest, "ignored");
        }
        summary
    }

    /// Total number of tests that ran or were skipped.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.passed + self.failed + self.ignored
    }

    /// Whether every executed test passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Extract the number preceding `label` in a libtest summary segment.
fn count_before(line: &str, label: &str) -> usize {
    let mut previous = None;
    for token in line.split(|c: char| c.is_whitespace() || c == ';' || c == '.') {
        if token == label {
            if let Some(count) = previous.and_then(|t: &str| t.parse().ok()) {
                return count;
            }
        }
        if !token.is_empty() {
            previous = Some(token);
        }
    }
    0
}

/// One cargo invocation's worth of results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    /// 1-based attempt number
    pub number: usize,
    /// Parsed counts
    pub summary: RunSummary,
    /// Exit code cargo reported
    pub exit_code: i32,
}

/// The outcome of a full run, reruns included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutcome {
    /// Every invocation, in order
    pub attempts: Vec<Attempt>,
    /// Combined stdout and stderr of the final invocation
    pub final_output: String,
}

impl RunOutcome {
    /// The last attempt's summary. Present whenever the runner
    /// executed at least once.
    #[must_use]
    pub fn final_summary(&self) -> RunSummary {
        self.attempts.last().map(|a| a.summary).unwrap_or_default()
    }

    /// Exit code to propagate to the shell.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.attempts.last().map_or(1, |a| a.exit_code)
    }

    /// Failures summed across every attempt.
    #[must_use]
    pub fn total_failures(&self) -> usize {
        self.attempts.iter().map(|a| a.summary.failed).sum()
    }
}

/// Runs the suite, rerunning while failures remain and reruns are
/// left.
#[derive(Debug)]
pub struct Runner {
    command: TestCommand,
    reruns: usize,
    maxfail: usize,
    quiet: bool,
}

impl Runner {
    /// Build a runner from the parsed CLI flags.
    pub fn from_cli(cli: &Cli, settings: &Settings) -> CliResult<Self> {
        Ok(Self {
            command: TestCommand::from_cli(cli, settings)?,
            reruns: cli.reruns,
            maxfail: cli.maxfail,
            quiet: cli.quiet,
        })
    }

    /// The underlying invocation.
    #[must_use]
    pub const fn command(&self) -> &TestCommand {
        &self.command
    }

    /// Execute the suite.
    ///
    /// Reruns re-invoke the whole selection; libtest has no way to
    /// replay individual failed cases.
    pub fn run(&self) -> CliResult<RunOutcome> {
        let mut outcome = RunOutcome {
            attempts: Vec::new(),
            final_output: String::new(),
        };

        for number in 1..=self.reruns + 1 {
            info!(attempt = number, command = %self.command.rendered(), "running suite");
            let output = self.command.execute()?;
            let text = format!(
                "{}{}",
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
            if !self.quiet {
                print!("{text}");
            }

            let summary = RunSummary::parse(&text);
            let exit_code = output.status.code().unwrap_or(1);
            outcome.attempts.push(Attempt {
                number,
                summary,
                exit_code,
            });
            outcome.final_output = text;

            if exit_code == 0 && summary.all_passed() {
                break;
            }
            if self.failure_budget_exhausted(outcome.total_failures()) {
                warn!(
                    failures = outcome.total_failures(),
                    maxfail = self.maxfail,
                    "failure budget exhausted, not rerunning"
                );
                break;
            }
            if number <= self.reruns {
                warn!(
                    attempt = number,
                    failed = summary.failed,
                    "suite failed, rerunning"
                );
            }
        }

        Ok(outcome)
    }

    /// Whether accumulated failures strictly exceed the `--maxfail`
    /// budget (0 means no limit).
    const fn failure_budget_exhausted(&self, total_failures: usize) -> bool {
        self.maxfail > 0 && total_failures > self.maxfail
    }
}

/// Create the report, screenshot and download directories and empty
/// the download directory, mirroring what the test fixture expects.
pub fn prepare_directories(settings: &Settings) -> CliResult<()> {
    std::fs::create_dir_all(&settings.report_dir)?;
    std::fs::create_dir_all(&settings.screenshot_dir)?;
    let downloads = DownloadDir::new(&settings.downloads_dir);
    downloads.ensure()?;
    let removed = downloads.clean()?;
    if removed > 0 {
        info!(removed, "cleaned stale downloads");
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("navegante").chain(args.iter().copied())).unwrap()
    }

    fn command(args: &[&str]) -> TestCommand {
        TestCommand::from_cli(&cli(args), &Settings::default()).unwrap()
    }

    mod command_tests {
        use super::*;

        #[test]
        fn default_invocation_runs_every_suite() {
            let command = command(&[]);
            let args = command.args();
            assert_eq!(&args[..3], &["test", "-p", "navegar"]);
            for target in ["homepage", "authentication", "dynamic_content", "interactions"] {
                assert!(args.iter().any(|a| a == target), "missing suite {target}");
            }
            assert!(args.iter().any(|a| a == "--no-fail-fast"));
            assert!(args.iter().any(|a| a == "--include-ignored"));
        }

        #[test]
        fn fail_fast_drops_no_fail_fast() {
            let command = command(&["-x"]);
            assert!(!command.args().iter().any(|a| a == "--no-fail-fast"));
        }

        #[test]
        fn keyword_lands_after_the_separator() {
            let command = command(&["-k", "login"]);
            let args = command.args();
            let sep = args.iter().position(|a| a == "--").unwrap();
            let keyword = args.iter().position(|a| a == "login").unwrap();
            assert!(keyword > sep);
        }

        #[test]
        fn workers_set_the_test_thread_count() {
            let command = command(&["--workers", "4"]);
            let args = command.args();
            let flag = args.iter().position(|a| a == "--test-threads").unwrap();
            assert_eq!(args[flag + 1], "4");
        }

        #[test]
        fn fixture_environment_is_exported() {
            let command = command(&["--browser", "firefox", "--env", "staging", "--no-headless"]);
            let envs = command.envs();
            let get = |key: &str| {
                envs.iter()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| v.as_str())
                    .unwrap()
            };
            assert_eq!(get("BROWSER"), "firefox");
            assert_eq!(get("TEST_ENV"), "staging");
            assert_eq!(get("HEADLESS"), "false");
        }

        #[test]
        fn exported_directories_are_absolute() {
            let tmp = tempfile::tempdir().unwrap();
            let settings = Settings::default()
                .with_downloads_dir(tmp.path().join("downloads"))
                .with_screenshot_dir(tmp.path().join("reports/screenshots"));
            let command = TestCommand::from_cli(&cli(&[]), &settings).unwrap();
            let envs = command.envs();
            let get = |key: &str| {
                envs.iter()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| std::path::PathBuf::from(v))
                    .unwrap()
            };
            assert!(get("DOWNLOADS_DIR").is_absolute());
            assert!(get("SCREENSHOT_DIR").is_absolute());
            assert_eq!(get("DOWNLOADS_DIR"), tmp.path().join("downloads"));
        }

        #[test]
        fn relative_directories_resolve_against_the_invocation_dir() {
            // Cargo starts the test binaries in the package directory;
            // the exported paths must be anchored here instead.
            let command = command(&[]);
            let envs = command.envs();
            let cwd = std::env::current_dir().unwrap();
            let downloads = envs
                .iter()
                .find(|(k, _)| k == "DOWNLOADS_DIR")
                .map(|(_, v)| std::path::PathBuf::from(v))
                .unwrap();
            assert_eq!(downloads, cwd.join("downloads"));
        }

        #[test]
        fn rendered_line_is_copy_pasteable() {
            let command = command(&["--suite", "homepage"]);
            let line = command.rendered();
            assert!(line.contains("cargo test -p navegar --test homepage"));
            assert!(line.starts_with("TEST_ENV=dev"));
            assert!(line.contains("DOWNLOADS_DIR="));
        }
    }

    mod rerun_tests {
        use super::*;

        fn runner(args: &[&str]) -> Runner {
            Runner::from_cli(&cli(args), &Settings::default()).unwrap()
        }

        #[test]
        fn failures_at_the_budget_still_allow_a_rerun() {
            let runner = runner(&["--maxfail", "3"]);
            assert!(!runner.failure_budget_exhausted(3));
            assert!(runner.failure_budget_exhausted(4));
        }

        #[test]
        fn zero_budget_never_stops_reruns() {
            let runner = runner(&[]);
            assert!(!runner.failure_budget_exhausted(0));
            assert!(!runner.failure_budget_exhausted(1_000));
        }
    }

    mod summary_tests {
        use super::*;

        #[test]
        fn parses_a_single_binary_summary() {
            let output = "test result: ok. 4 passed; 0 failed; 0 ignored; 0 measured; 0 filtered out; finished in 12.34s\n";
            let summary = RunSummary::parse(output);
            assert_eq!(summary.passed, 4);
            assert_eq!(summary.failed, 0);
            assert!(summary.all_passed());
        }

        #[test]
        fn sums_across_multiple_binaries() {
            let output = "\
running 4 tests
test result: ok. 4 passed; 0 failed; 1 ignored; 0 measured; 0 filtered out; finished in 9.01s

running 7 tests
test result: FAILED. 5 passed; 2 failed; 0 ignored; 0 measured; 0 filtered out; finished in 31.70s
";
            let summary = RunSummary::parse(output);
            assert_eq!(summary.passed, 9);
            assert_eq!(summary.failed, 2);
            assert_eq!(summary.ignored, 1);
            assert_eq!(summary.total(), 12);
            assert!(!summary.all_passed());
        }

        #[test]
        fn ignores_unrelated_lines() {
            let output = "test homepage_lists_examples ... ok\nsome other text\n";
            assert_eq!(RunSummary::parse(output), RunSummary::default());
        }
    }

    mod outcome_tests {
        use super::*;

        fn attempt(number: usize, failed: usize, exit_code: i32) -> Attempt {
            Attempt {
                number,
                summary: RunSummary {
                    passed: 3,
                    failed,
                    ignored: 0,
                },
                exit_code,
            }
        }

        #[test]
        fn exit_code_comes_from_the_last_attempt() {
            let outcome = RunOutcome {
                attempts: vec![attempt(1, 2, 101), attempt(2, 0, 0)],
                final_output: String::new(),
            };
            assert_eq!(outcome.exit_code(), 0);
            assert_eq!(outcome.final_summary().failed, 0);
        }

        #[test]
        fn failures_accumulate_across_attempts() {
            let outcome = RunOutcome {
                attempts: vec![attempt(1, 2, 101), attempt(2, 1, 101)],
                final_output: String::new(),
            };
            assert_eq!(outcome.total_failures(), 3);
        }

        #[test]
        fn empty_outcome_fails_the_shell() {
            let outcome = RunOutcome {
                attempts: Vec::new(),
                final_output: String::new(),
            };
            assert_eq!(outcome.exit_code(), 1);
        }
    }

    mod directory_tests {
        use super::*;

        #[test]
        fn prepare_creates_and_empties_the_directories() {
            let tmp = tempfile::tempdir().unwrap();
            let mut settings = Settings::default()
                .with_downloads_dir(tmp.path().join("downloads"))
                .with_screenshot_dir(tmp.path().join("reports/screenshots"));
            settings.report_dir = tmp.path().join("reports");

            std::fs::create_dir_all(tmp.path().join("downloads")).unwrap();
            std::fs::write(tmp.path().join("downloads/stale.zip"), b"old").unwrap();

            prepare_directories(&settings).unwrap();
            assert!(tmp.path().join("reports/screenshots").is_dir());
            assert_eq!(
                std::fs::read_dir(tmp.path().join("downloads")).unwrap().count(),
                0
            );
        }
    }
}
