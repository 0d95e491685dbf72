//! Navegante: acceptance test runner
//!
//! ## Usage
//!
//! ```bash
//! navegante                         # Run every suite headless on Chrome
//! navegante --suite authentication # Run one suite
//! navegante -k login --reruns 2    # Filter by name, rerun flaky failures
//! navegante --dry-run              # Print the cargo command and exit
//! ```

use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use navegante::{
    prepare_directories, Cli, CliResult, ReportContext, Runner,
};
use navegar::Settings;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let settings = Settings::for_environment(cli.environment.environment())
        .with_browser(cli.browser.as_str())
        .with_headless(cli.headless())
        .with_webdriver_url(&cli.webdriver_url);

    let runner = Runner::from_cli(&cli, &settings)?;

    if cli.dry_run {
        println!("{}", runner.command().rendered());
        return Ok(ExitCode::SUCCESS);
    }

    prepare_directories(&settings)?;
    let outcome = runner.run()?;

    if cli.html_report() {
        let context = ReportContext {
            browser: cli.browser.as_str().to_string(),
            environment: cli.environment.as_str().to_string(),
            headless: cli.headless(),
            webdriver_url: cli.webdriver_url.clone(),
            generated_at: Local::now(),
        };
        let path = navegante::write_reports(&settings, &context, &outcome)?;
        if !cli.quiet {
            println!("HTML report: {}", path.display());
        }
    }

    let summary = outcome.final_summary();
    if !cli.quiet {
        println!(
            "{} passed, {} failed, {} ignored (attempts: {})",
            summary.passed,
            summary.failed,
            summary.ignored,
            outcome.attempts.len()
        );
    }

    let code = u8::try_from(outcome.exit_code()).unwrap_or(1);
    Ok(ExitCode::from(code))
}

fn init_tracing(cli: &Cli) {
    let default = if cli.quiet {
        "warn"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
