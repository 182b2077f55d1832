//! Selector presence checking
//!
//! The one piece of real logic in the grader: for every selector in the
//! check list, record whether the document contains at least one match.

use tracing::debug;

use crate::domain::check_result::ResultMap;
use crate::infrastructure::grader_error::GraderResult;
use crate::infrastructure::html_parser::HtmlDocument;

#[derive(Debug, Default, Clone, Copy)]
pub struct SelectorPresenceChecker;

impl SelectorPresenceChecker {
    pub const fn new() -> Self {
        Self
    }

    /// Evaluate `selectors` in order against `document`.
    ///
    /// A selector the query engine rejects aborts the whole check with that
    /// error; no partial result is returned.
    pub fn check<'a, I>(&self, document: &HtmlDocument, selectors: I) -> GraderResult<ResultMap>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut results = ResultMap::new();
        for selector in selectors {
            let present = document.contains(selector)?;
            debug!("{} -> {}", selector, present);
            results.insert(selector, present);
        }
        Ok(results)
    }
}
