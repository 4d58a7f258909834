//! HTTP client for the forwarded call.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONNECTION, USER_AGENT};
use thiserror::Error;
use url::Url;

use crate::config::schema::UpstreamConfig;

/// Outcome of a completed upstream exchange.
///
/// Carries the upstream status verbatim. A non-2xx upstream status is not
/// an error at this layer.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

/// Failure of the forwarded call before a full response body was read.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The assembled target was not a parseable URL.
    #[error("invalid forwarding URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request could not be sent or no response arrived.
    #[error("upstream request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// A response arrived but its body could not be read.
    #[error("upstream body read failed: {0}")]
    Body(#[source] reqwest::Error),
}

/// Client for the single outbound GET the relay performs.
///
/// Cheap to clone; the fixed forwarding headers are applied to every
/// request at construction time.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
}

impl UpstreamClient {
    /// Build a client with the fixed forwarding header set.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static("NOVRA-X-Bot/1.0")),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
        })
    }

    /// Forward one GET to the constructed target and read the full body
    /// as text.
    pub async fn relay(&self, target: &str) -> Result<UpstreamReply, UpstreamError> {
        let url = Url::parse(target)?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(UpstreamError::Request)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(UpstreamError::Body)?;

        Ok(UpstreamReply { status, body })
    }
}
