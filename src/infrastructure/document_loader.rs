//! Raw HTML acquisition from a local file or a remote URL

use tokio::fs;
use tracing::{debug, info};

use crate::infrastructure::config::{DocumentSource, HttpClientConfig};
use crate::infrastructure::grader_error::{GraderError, GraderResult};
use crate::infrastructure::http_client::HttpClient;

/// Read the HTML text behind `source`.
///
/// The HTTP client is only built for URL sources.
pub async fn load(source: &DocumentSource, http: &HttpClientConfig) -> GraderResult<String> {
    match source {
        DocumentSource::File(path) => {
            debug!("Reading HTML document from {:?}", path);
            let bytes = fs::read(path).await.map_err(|e| GraderError::io(path, e))?;
            info!("Read {} bytes from {:?}", bytes.len(), path);
            // invalid UTF-8 sequences become U+FFFD, matching how response bodies are decoded
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        DocumentSource::Url(url) => {
            let client = HttpClient::new(http)?;
            client.get_text(url).await
        }
    }
}
