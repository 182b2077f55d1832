//! HTML Grader - selector presence checks for HTML documents
//!
//! Loads a JSON check list of CSS selectors and an HTML document (local file
//! or URL), then reports for every selector whether the document contains at
//! least one matching element.

// Module declarations
pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod cli;

use clap::Parser;
use std::process::ExitCode;

pub use application::grading_service::{grade, grade_html_file};
pub use application::selector_checker::SelectorPresenceChecker;
pub use domain::{check_list::CheckList, check_result::ResultMap};
pub use infrastructure::{GraderConfig, GraderError, GraderResult, HtmlDocument};

/// Binary entry point: parse arguments, grade, print the report.
///
/// This is the only place errors become diagnostics and exit codes.
pub fn run() -> ExitCode {
    let cli = cli::Cli::parse();

    let _log_guard = match infrastructure::init_logging_with_config(&cli.logging_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::from(GraderError::Logging(e).exit_code());
        }
    };

    match execute(cli) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if e.prints_to_stdout() {
                println!("{e}");
            } else {
                eprintln!("{e}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn execute(cli: cli::Cli) -> GraderResult<String> {
    // the check list is validated ahead of the document source, as the flags are read
    infrastructure::check_list_loader::ensure_exists(&cli.checks)?;
    let config = cli.into_config()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| GraderError::configuration("runtime", e))?;

    let results = runtime.block_on(grade(&config))?;
    results.to_pretty_json()
}
