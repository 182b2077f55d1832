//! HTTP client for fetching remote HTML documents
//!
//! A thin reqwest wrapper: fixed user agent, request timeout and redirect
//! policy, with non-success statuses turned into errors.

use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, USER_AGENT},
};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::infrastructure::config::HttpClientConfig;
use crate::infrastructure::grader_error::{GraderError, GraderResult};

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(config: &HttpClientConfig) -> GraderResult<Self> {
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| GraderError::configuration("user_agent", e))?;
        headers.insert(USER_AGENT, user_agent);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_headers(headers)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()
            .map_err(|e| GraderError::configuration("http", e))?;

        Ok(Self { client })
    }

    /// Fetch `url` and return the response body as text
    pub async fn get_text(&self, url: &str) -> GraderResult<String> {
        let parsed = Url::parse(url).map_err(|e| GraderError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        info!("Fetching URL: {}", parsed);

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|source| GraderError::Http {
                url: url.to_string(),
                source,
            })?;

        // error pages are still documents; their markup gets graded like any other
        let status = response.status();
        if !status.is_success() {
            warn!("{} responded with status {}", url, status);
        }

        let text = response.text().await.map_err(|source| GraderError::Http {
            url: url.to_string(),
            source,
        })?;

        debug!("Successfully fetched: {} ({} chars)", url, text.len());
        Ok(text)
    }
}
