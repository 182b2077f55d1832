//! Error types for the grading pipeline
//!
//! Every failure in the pipeline is a `GraderError`. Library code only
//! propagates them; the binary entry point decides how each one is reported
//! and which exit code the process ends with.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraderError {
    #[error("{} does not exist. Exiting.", path.display())]
    ChecksFileMissing { path: PathBuf },

    #[error("either --file or --url must be specified")]
    MissingDocumentSource,

    #[error("only one of --file ({}) or --url ({url}) may be specified", file.display())]
    AmbiguousDocumentSource { file: PathBuf, url: String },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Check list {} is not a JSON array of selector strings: {source}", path.display())]
    InvalidCheckList {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP request failed: {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid CSS selector: {selector} - {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Configuration error: {field} - {message}")]
    Configuration { field: String, message: String },

    #[error("Failed to serialize results: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Logging setup failed: {0}")]
    Logging(#[from] anyhow::Error),
}

impl GraderError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_selector(selector: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn configuration(field: &str, message: impl std::fmt::Display) -> Self {
        Self::Configuration {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// Process exit code for this failure
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::ChecksFileMissing { .. } => 1,
            Self::MissingDocumentSource | Self::AmbiguousDocumentSource { .. } => 2,
            _ => 3,
        }
    }

    /// The missing check list diagnostic goes to stdout, everything else to stderr
    pub const fn prints_to_stdout(&self) -> bool {
        matches!(self, Self::ChecksFileMissing { .. })
    }
}

pub type GraderResult<T> = Result<T, GraderError>;
