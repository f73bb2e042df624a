use crate::config::ClientConfig;
use crate::Result;
use keyring::Entry;
use reqwest::Proxy;
use serde::Serialize;
use std::env;
use std::time::{Duration, Instant};
use tracing::debug;

const KEYRING_SERVICE: &str = "automl-snippets";
const KEYRING_USER: &str = "access-token";
const TOKEN_ENV: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";

/// Status and body of a completed HTTP exchange, before interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
    pub request_id: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig, access_token: Option<String>) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("automl-snippets/", env!("CARGO_PKG_VERSION")));

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                crate::Error::configuration(format!("invalid proxy url '{proxy_url}': {e}"))
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| crate::Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            access_token: non_blank(access_token).or_else(Self::lookup_access_token),
        })
    }

    fn lookup_access_token() -> Option<String> {
        // 1. Try Keyring
        if let Ok(entry) = Entry::new(KEYRING_SERVICE, KEYRING_USER) {
            if let Some(token) = non_blank(entry.get_password().ok()) {
                return Some(token);
            }
        }

        // 2. Try Environment Variable
        non_blank(env::var(TOKEN_ENV).ok())
    }

    pub fn has_credentials(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one JSON POST and return whatever came back.
    ///
    /// Non-2xx statuses are not errors at this layer.
    pub async fn post_json<B>(&self, path: &str, body: &B) -> Result<RawResponse>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let request_id = uuid::Uuid::new_v4().to_string();

        let mut req = self
            .client
            .post(&url)
            .json(body)
            .header("x-request-id", &request_id);
        if let Some(token) = &self.access_token {
            req = req.bearer_auth(token);
        }

        let start = Instant::now();
        debug!(url = url.as_str(), request_id = request_id.as_str(), "sending request");

        let resp = req
            .send()
            .await
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))?;

        debug!(
            http_status = status,
            request_id = request_id.as_str(),
            duration_ms = start.elapsed().as_millis(),
            "response received"
        );

        Ok(RawResponse {
            status,
            body,
            request_id,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

/// A stored token that is empty or whitespace counts as absent.
fn non_blank(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty())
}
