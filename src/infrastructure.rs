//! Infrastructure layer for configuration, input acquisition, HTML parsing
//! and logging.

pub mod config;  // Defaults and settings
pub mod grader_error;  // Error taxonomy and exit codes
pub mod html_parser;
pub mod http_client;
pub mod check_list_loader;
pub mod document_loader;
pub mod logging;

// Re-export commonly used items
pub use config::{DocumentSource, GraderConfig, HttpClientConfig, LoggingConfig};
pub use grader_error::{GraderError, GraderResult};
pub use html_parser::HtmlDocument;
pub use http_client::HttpClient;
pub use logging::init_logging_with_config;
