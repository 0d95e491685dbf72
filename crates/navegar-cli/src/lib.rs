//! Navegante: CLI runner for the Navegar acceptance suite.
//!
//! Translates runner flags into a `cargo test` invocation over the
//! live suite, applies the rerun policy, and writes an HTML report.

#![warn(missing_docs)]

pub mod cli;
pub mod error;
pub mod report;
pub mod runner;

pub use cli::{BrowserArg, Cli, EnvArg, SuiteArg};
pub use error::{CliError, CliResult};
pub use report::{render_html, write_reports, ReportContext};
pub use runner::{prepare_directories, Attempt, RunOutcome, RunSummary, Runner, TestCommand};
