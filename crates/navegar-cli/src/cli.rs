//! CLI flag definitions using clap

use clap::{Parser, ValueEnum};
use navegar::{BrowserKind, Environment};

/// Navegante: acceptance test runner for the Navegar suite
#[derive(Parser, Debug)]
#[command(name = "navegante")]
#[command(author, version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Browser to run the suite against
    #[arg(long, value_enum, default_value_t = BrowserArg::Chrome)]
    pub browser: BrowserArg,

    /// Run the browser headless (default)
    #[arg(long, conflicts_with = "no_headless")]
    pub headless: bool,

    /// Run the browser with a visible window
    #[arg(long)]
    pub no_headless: bool,

    /// Environment to run against
    #[arg(long = "env", value_enum, default_value_t = EnvArg::Dev)]
    pub environment: EnvArg,

    /// WebDriver endpoint the sessions connect to
    #[arg(long, env = "WEBDRIVER_URL", default_value = "http://localhost:9515")]
    pub webdriver_url: String,

    /// Suite to run (repeatable; all suites when omitted)
    #[arg(long = "suite", value_enum)]
    pub suites: Vec<SuiteArg>,

    /// Only run tests whose names contain this substring
    #[arg(short = 'k', long)]
    pub keyword: Option<String>,

    /// Number of test threads per suite binary
    #[arg(long, default_value_t = 1)]
    pub workers: usize,

    /// Number of times to rerun the suite while failures remain
    #[arg(long, default_value_t = 0)]
    pub reruns: usize,

    /// Stop rerunning once total failures exceed N (0 = no limit)
    #[arg(long, default_value_t = 0)]
    pub maxfail: usize,

    /// Stop on the first failing test
    #[arg(short = 'x', long)]
    pub fail_fast: bool,

    /// Write the HTML report (default)
    #[arg(long, conflicts_with = "no_html_report")]
    pub html_report: bool,

    /// Skip the HTML report
    #[arg(long)]
    pub no_html_report: bool,

    /// Show test stdout and stderr as it happens
    #[arg(long)]
    pub nocapture: bool,

    /// Verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the cargo command without running it
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Resolved headless flag. Headless is the default; `--no-headless`
    /// turns it off.
    #[must_use]
    pub const fn headless(&self) -> bool {
        !self.no_headless
    }

    /// Resolved HTML report flag. The report is written by default;
    /// `--no-html-report` turns it off.
    #[must_use]
    pub const fn html_report(&self) -> bool {
        !self.no_html_report
    }

    /// Suites selected for this run, in declaration order when none
    /// were named explicitly.
    #[must_use]
    pub fn selected_suites(&self) -> Vec<SuiteArg> {
        if self.suites.is_empty() {
            SuiteArg::all().to_vec()
        } else {
            let mut seen = Vec::new();
            for suite in &self.suites {
                if !seen.contains(suite) {
                    seen.push(*suite);
                }
            }
            seen
        }
    }
}

/// Browser choice on the command line
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BrowserArg {
    /// Google Chrome via chromedriver
    #[default]
    Chrome,
    /// Mozilla Firefox via geckodriver
    Firefox,
}

impl BrowserArg {
    /// The library-level browser kind this flag maps to.
    #[must_use]
    pub const fn kind(self) -> BrowserKind {
        match self {
            Self::Chrome => BrowserKind::Chrome,
            Self::Firefox => BrowserKind::Firefox,
        }
    }

    /// Value exported through the `BROWSER` environment variable.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chrome => "chrome",
            Self::Firefox => "firefox",
        }
    }
}

/// Target environment on the command line
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnvArg {
    /// Development (default)
    #[default]
    Dev,
    /// Staging
    Staging,
    /// Production
    Prod,
}

impl EnvArg {
    /// The library-level environment this flag maps to.
    #[must_use]
    pub const fn environment(self) -> Environment {
        match self {
            Self::Dev => Environment::Dev,
            Self::Staging => Environment::Staging,
            Self::Prod => Environment::Prod,
        }
    }

    /// Value exported through the `TEST_ENV` environment variable.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Staging => "staging",
            Self::Prod => "prod",
        }
    }
}

/// A named test suite, one per integration test binary
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuiteArg {
    /// Landing page structure and navigation
    Homepage,
    /// Basic auth and form login flows
    Authentication,
    /// Checkboxes, dropdowns and dynamic pages
    DynamicContent,
    /// Pointer, keyboard, dialog and file interactions
    Interactions,
}

impl SuiteArg {
    /// All suites in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::Homepage,
            Self::Authentication,
            Self::DynamicContent,
            Self::Interactions,
        ]
    }

    /// The integration test binary this suite runs, as passed to
    /// `cargo test --test`.
    #[must_use]
    pub const fn test_target(self) -> &'static str {
        match self {
            Self::Homepage => "homepage",
            Self::Authentication => "authentication",
            Self::DynamicContent => "dynamic_content",
            Self::Interactions => "interactions",
        }
    }
}
