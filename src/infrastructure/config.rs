//! Configuration infrastructure
//!
//! All defaults the grader relies on live here as explicit fields, so the
//! acquisition code never reaches for ambient constants.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::infrastructure::grader_error::{GraderError, GraderResult};

/// Default check list location
pub const CHECKS_FILE_DEFAULT: &str = "checks.json";

/// Default HTML document location for library callers
pub const HTML_FILE_DEFAULT: &str = "index.html";

/// Complete grader configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraderConfig {
    /// Path to the JSON check list
    pub checks_path: PathBuf,

    /// Where the HTML document comes from
    pub document: DocumentSource,

    /// HTTP settings used when the document is remote
    pub http: HttpClientConfig,
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self {
            checks_path: PathBuf::from(CHECKS_FILE_DEFAULT),
            document: DocumentSource::File(PathBuf::from(HTML_FILE_DEFAULT)),
            http: HttpClientConfig::default(),
        }
    }
}

/// Exactly one place to read the document from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentSource {
    File(PathBuf),
    Url(String),
}

impl DocumentSource {
    /// Pick the document source from explicitly selected inputs.
    ///
    /// Nothing is defaulted here: supplying neither input is an error, and so
    /// is supplying both.
    pub fn resolve(file: Option<PathBuf>, url: Option<String>) -> GraderResult<Self> {
        match (file, url) {
            (Some(file), None) => Ok(Self::File(file)),
            (None, Some(url)) => Ok(Self::Url(url)),
            (Some(file), Some(url)) => Err(GraderError::AmbiguousDocumentSource { file, url }),
            (None, None) => Err(GraderError::MissingDocumentSource),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Url(url) => url.clone(),
        }
    }
}

/// HTTP client configuration for fetching remote documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub follow_redirects: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_seconds: 30,
            follow_redirects: true,
        }
    }
}

pub fn default_user_agent() -> String {
    format!("html-grader/{}", env!("CARGO_PKG_VERSION"))
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Enable JSON formatted logs
    pub json_format: bool,

    /// Enable console (stderr) output
    pub console_output: bool,

    /// Directory for daily rolled log files; no file output when unset
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json_format: false,
            console_output: true,
            log_dir: None,
        }
    }
}
