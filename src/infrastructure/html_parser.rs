//! HTML parsing and selector queries
//!
//! Wraps `scraper` so the rest of the crate only sees a read-only document
//! handle that answers "does anything match this selector".

use scraper::{Html, Selector};
use tracing::debug;

use crate::infrastructure::grader_error::{GraderError, GraderResult};

/// Queryable handle over a parsed HTML document
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse HTML text. html5ever recovers from malformed markup, so this never fails.
    pub fn parse(content: &str) -> Self {
        debug!("Parsing HTML document ({} bytes)", content.len());
        Self {
            html: Html::parse_document(content),
        }
    }

    /// Compile a CSS selector, surfacing the parser's own message on failure
    pub fn compile(selector: &str) -> GraderResult<Selector> {
        Selector::parse(selector).map_err(|e| GraderError::invalid_selector(selector, e))
    }

    /// Whether at least one element matches `selector`; stops at the first match
    pub fn contains(&self, selector: &str) -> GraderResult<bool> {
        let compiled = Self::compile(selector)?;
        Ok(self.html.select(&compiled).next().is_some())
    }
}

impl std::fmt::Debug for HtmlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlDocument")
            .field("errors", &self.html.errors.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
            <h1 class="title">Hello</h1>
            <ul>
                <li><a href="/one">one</a></li>
                <li><a href="/two">two</a></li>
                <li><a>three</a></li>
            </ul>
        </body></html>
    "#;

    #[test]
    fn test_attribute_and_class_matches() {
        let doc = HtmlDocument::parse(PAGE);
        assert!(doc.contains("li").unwrap());
        assert!(doc.contains("a[href]").unwrap());
        assert!(doc.contains("h1.title").unwrap());
        assert!(!doc.contains("table").unwrap());
    }

    #[test]
    fn test_combinators() {
        let doc = HtmlDocument::parse(PAGE);
        assert!(doc.contains("ul > li > a").unwrap());
        assert!(!doc.contains("h2").unwrap());
    }

    #[test]
    fn test_malformed_markup_still_parses() {
        let doc = HtmlDocument::parse("<div><p>unclosed<span>");
        assert!(doc.contains("div p span").unwrap());
    }

    #[test]
    fn test_invalid_selector() {
        let doc = HtmlDocument::parse(PAGE);
        let err = doc.contains("a[href").unwrap_err();
        match err {
            GraderError::InvalidSelector { selector, reason } => {
                assert_eq!(selector, "a[href");
                assert!(!reason.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
