//! Grading use case
//!
//! Acquires the check list and the document concurrently, then runs the
//! selector check exactly once when both are in hand.

use std::path::Path;
use tracing::{info, instrument};

use crate::application::selector_checker::SelectorPresenceChecker;
use crate::domain::check_result::ResultMap;
use crate::infrastructure::config::{DocumentSource, GraderConfig};
use crate::infrastructure::grader_error::GraderResult;
use crate::infrastructure::html_parser::HtmlDocument;
use crate::infrastructure::{check_list_loader, document_loader};

/// Grade the configured document against the configured check list.
///
/// If either acquisition fails the other is dropped and nothing is checked.
#[instrument(
    skip_all,
    fields(checks = %config.checks_path.display(), document = %config.document.describe())
)]
pub async fn grade(config: &GraderConfig) -> GraderResult<ResultMap> {
    check_list_loader::ensure_exists(&config.checks_path)?;

    let (checks, raw_html) = tokio::try_join!(
        check_list_loader::load(&config.checks_path),
        document_loader::load(&config.document, &config.http),
    )?;

    let document = HtmlDocument::parse(&raw_html);
    let results = SelectorPresenceChecker::new().check(&document, &checks)?;

    info!("Checked {} selectors ({} distinct)", checks.len(), results.len());
    Ok(results)
}

/// Grade a local HTML file against a check list file
pub async fn grade_html_file(html_file: &Path, checks_file: &Path) -> GraderResult<ResultMap> {
    let config = GraderConfig {
        checks_path: checks_file.to_path_buf(),
        document: DocumentSource::File(html_file.to_path_buf()),
        ..GraderConfig::default()
    };
    grade(&config).await
}
