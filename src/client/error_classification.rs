//! Turn a non-2xx answer into an [`Error::Remote`].

use crate::error_code::ServiceErrorCode;
use crate::transport::RawResponse;
use crate::Error;
use serde::Deserialize;

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Prefer the body's canonical status; fall back to the HTTP status.
pub(crate) fn remote_error(raw: &RawResponse) -> Error {
    let parsed = serde_json::from_str::<ErrorEnvelope>(&raw.body).ok();
    let code = parsed
        .as_ref()
        .and_then(|env| env.error.status.as_deref())
        .map(ServiceErrorCode::from_status_name)
        .filter(|code| *code != ServiceErrorCode::Unknown)
        .unwrap_or_else(|| ServiceErrorCode::from_http_status(raw.status));
    let message = match parsed {
        Some(env) if !env.error.message.is_empty() => env.error.message,
        _ if raw.body.trim().is_empty() => format!("empty response body (request {})", raw.request_id),
        _ => raw.body.trim().to_string(),
    };
    Error::Remote {
        status: raw.status,
        code,
        message,
    }
}
