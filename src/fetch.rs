//! Telemetry source retrieval
//!
//! One attempt, no retries. `http://` and `https://` URLs go through a blocking
//! reqwest client; `file://` URLs are read from the local filesystem. Every failure
//! comes back as `TrackError::Fetch` and the caller decides whether it is fatal.

use crate::error::{Result, TrackError};
use std::time::Duration;

/// Settings for the single fetch attempt
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Whole-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    pub user_agent: String,
    /// Honor `HTTP_PROXY`-style settings from the environment
    pub use_system_proxy: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            use_system_proxy: true,
        }
    }
}

/// Retrieve the raw feed text behind `url`
pub fn fetch_source(url: &str, options: &FetchOptions) -> Result<String> {
    let body = if let Some(path) = url.strip_prefix("file://") {
        std::fs::read(path)
            .map_err(|err| TrackError::Fetch(format!("cannot read {path}: {err}")))?
    } else if url.starts_with("http://") || url.starts_with("https://") {
        fetch_http(url, options)?
    } else {
        return Err(TrackError::Fetch(format!(
            "unsupported source '{url}' (expected an http://, https:// or file:// URL)"
        )));
    };

    tracing::debug!("fetched {} bytes from {}", body.len(), url);

    String::from_utf8(body)
        .map_err(|err| TrackError::MalformedInput(format!("feed is not valid UTF-8: {err}")))
}

fn fetch_http(url: &str, options: &FetchOptions) -> Result<Vec<u8>> {
    let mut builder = reqwest::blocking::Client::builder()
        .timeout(options.timeout)
        .user_agent(options.user_agent.as_str());
    if !options.use_system_proxy {
        builder = builder.no_proxy();
    }
    let client = builder.build()?;

    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(TrackError::Fetch(format!("{url} answered with HTTP {status}")));
    }

    Ok(response.bytes()?.to_vec())
}
