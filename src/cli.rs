//! Command line surface
//!
//! Every option can also come from an `HTML_GRADER_*` environment variable.

use clap::Parser;
use std::path::PathBuf;

use crate::infrastructure::config::{
    CHECKS_FILE_DEFAULT, DocumentSource, GraderConfig, HttpClientConfig, LoggingConfig,
    default_user_agent,
};
use crate::infrastructure::grader_error::GraderResult;

#[derive(Parser, Debug)]
#[command(
    name = "html-grader",
    version,
    about = "Check an HTML document for the presence of CSS selectors"
)]
pub struct Cli {
    /// Path to the JSON array of selectors
    #[arg(short, long, env = "HTML_GRADER_CHECKS", default_value = CHECKS_FILE_DEFAULT)]
    pub checks: PathBuf,

    /// Path to a local HTML file
    #[arg(short, long, env = "HTML_GRADER_FILE")]
    pub file: Option<PathBuf>,

    /// URL of a remote HTML document
    #[arg(short, long, env = "HTML_GRADER_URL")]
    pub url: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, env = "HTML_GRADER_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// User agent sent when fetching a URL
    #[arg(long, env = "HTML_GRADER_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Log level or filter directives; RUST_LOG takes precedence
    #[arg(long, env = "HTML_GRADER_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Emit log lines as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Also write daily rolled log files into this directory
    #[arg(long, env = "HTML_GRADER_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Logging settings straight from the flags. Logging is set up before the
    /// document source is resolved, so these stay outside `GraderConfig`.
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            json_format: self.log_json,
            console_output: true,
            log_dir: self.log_dir.clone(),
        }
    }

    /// Resolve the full configuration. The document source must be chosen explicitly.
    pub fn into_config(self) -> GraderResult<GraderConfig> {
        let document = DocumentSource::resolve(self.file, self.url)?;

        Ok(GraderConfig {
            checks_path: self.checks,
            document,
            http: HttpClientConfig {
                user_agent: self.user_agent.unwrap_or_else(default_user_agent),
                timeout_seconds: self.timeout_secs,
                ..HttpClientConfig::default()
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::grader_error::GraderError;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_file_source() {
        let cli = Cli::try_parse_from(["html-grader", "-c", "c.json", "-f", "page.html"]).unwrap();
        let config = cli.into_config().unwrap();
        assert_eq!(config.checks_path, PathBuf::from("c.json"));
        assert_eq!(config.document, DocumentSource::File("page.html".into()));
    }

    #[test]
    fn test_url_source_with_http_options() {
        let cli = Cli::try_parse_from([
            "html-grader",
            "--url",
            "https://example.com/",
            "--timeout-secs",
            "5",
            "--user-agent",
            "grader-test/0.1",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();
        assert_eq!(config.document, DocumentSource::Url("https://example.com/".into()));
        assert_eq!(config.http.timeout_seconds, 5);
        assert_eq!(config.http.user_agent, "grader-test/0.1");
    }

    #[test]
    fn test_logging_flags() {
        let cli = Cli::try_parse_from([
            "html-grader",
            "--log-level",
            "debug",
            "--log-json",
            "--log-dir",
            "logs",
        ])
        .unwrap();
        let logging = cli.logging_config();
        assert_eq!(logging.level, "debug");
        assert!(logging.json_format);
        assert!(logging.console_output);
        assert_eq!(logging.log_dir, Some(PathBuf::from("logs")));
    }

    #[test]
    fn test_neither_source_is_error() {
        let cli = Cli::try_parse_from(["html-grader"]).unwrap();
        assert_eq!(cli.checks, PathBuf::from("checks.json"));
        assert!(matches!(
            cli.into_config().unwrap_err(),
            GraderError::MissingDocumentSource
        ));
    }
}
