//! Client for the GitHub raw content host.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::StatusCode;
use tracing::{debug, info, instrument};

use crate::config::RepositoryConfig;
use crate::errors::FetchError;

/// Downloads files from one branch of one repository.
#[derive(Clone)]
pub struct RawClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl RawClient {
    pub fn new(repository: &RepositoryConfig, timeout: Duration) -> Result<Self, FetchError> {
        let base_url = repository.raw_base_url();
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("docsync/", env!("CARGO_PKG_VERSION"))),
        );
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Unexpected(format!("failed to build HTTP client: {e}")))?;
        info!(base_url = %base_url, "created RawClient");
        Ok(Self {
            http,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path inside the repository.
    pub fn url_for(&self, file_path: &str) -> String {
        format!("{}/{}", self.base_url, file_path.trim_start_matches('/'))
    }

    /// Fetch one file and return its body as text.
    ///
    /// Makes exactly one request; nothing is retried.
    #[instrument(skip(self))]
    pub async fn fetch(&self, file_path: &str) -> Result<String, FetchError> {
        let url = self.url_for(file_path);
        debug!(url = %url, "fetching");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, self.timeout))?;
        self.check_response(&resp, file_path)?;

        let content = resp
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(e, self.timeout))?;
        debug!(bytes = content.len(), "fetched");
        Ok(content)
    }

    fn check_response(&self, resp: &reqwest::Response, file_path: &str) -> Result<(), FetchError> {
        let status = resp.status();
        if status == StatusCode::OK {
            return Ok(());
        }
        debug!(status = status.as_u16(), "non-success response");
        match status {
            StatusCode::NOT_FOUND => Err(FetchError::NotFound {
                path: file_path.to_string(),
            }),
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => Err(FetchError::RateLimited {
                status: status.as_u16(),
            }),
            _ => Err(FetchError::HttpStatus {
                status: status.as_u16(),
            }),
        }
    }
}
