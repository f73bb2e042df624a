//! Canonical status codes reported by the Cloud API.
//!
//! Google REST endpoints answer failures with a JSON body of the form
//! `{"error": {"code": 403, "message": "...", "status": "PERMISSION_DENIED"}}`.
//! The `status` string names one of the canonical codes below. When a body is
//! missing or unparseable the HTTP status is used instead.
//!
//! ## Categories
//!
//! | Category | Codes                                                          |
//! |----------|----------------------------------------------------------------|
//! | client   | INVALID_ARGUMENT, UNAUTHENTICATED, PERMISSION_DENIED, NOT_FOUND, ALREADY_EXISTS, FAILED_PRECONDITION |
//! | quota    | RESOURCE_EXHAUSTED                                             |
//! | server   | INTERNAL, UNAVAILABLE, DEADLINE_EXCEEDED, UNIMPLEMENTED        |
//! | unknown  | CANCELLED, UNKNOWN                                             |
//!
//! The classification is informational. The samples never retry.
//!
//! ```rust
//! use automl_snippets::error_code::ServiceErrorCode;
//!
//! let code = ServiceErrorCode::from_status_name("RESOURCE_EXHAUSTED");
//! assert_eq!(code, ServiceErrorCode::ResourceExhausted);
//! assert_eq!(code.category(), "quota");
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceErrorCode {
    /// Malformed request or invalid field value
    InvalidArgument,
    /// Missing, expired, or invalid access token
    Unauthenticated,
    /// Valid credentials but insufficient IAM permissions
    PermissionDenied,
    /// Project, model, or dataset does not exist
    NotFound,
    /// Resource with the same name already exists
    AlreadyExists,
    /// Resource is not in a state that allows the call (e.g., model not deployed)
    FailedPrecondition,
    /// Quota or rate limit exceeded
    ResourceExhausted,
    /// Request was cancelled
    Cancelled,
    /// Deadline expired before the call completed
    DeadlineExceeded,
    /// Internal server error
    Internal,
    /// Service temporarily unavailable
    Unavailable,
    /// Method not supported for this resource
    Unimplemented,
    /// Could not be classified
    Unknown,
}

impl ServiceErrorCode {
    /// Returns the canonical status name (e.g., `"NOT_FOUND"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::NotFound => "NOT_FOUND",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::FailedPrecondition => "FAILED_PRECONDITION",
            Self::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Self::Cancelled => "CANCELLED",
            Self::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Self::Internal => "INTERNAL",
            Self::Unavailable => "UNAVAILABLE",
            Self::Unimplemented => "UNIMPLEMENTED",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Returns the category: `"client"`, `"quota"`, `"server"`, or `"unknown"`.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidArgument
            | Self::Unauthenticated
            | Self::PermissionDenied
            | Self::NotFound
            | Self::AlreadyExists
            | Self::FailedPrecondition => "client",
            Self::ResourceExhausted => "quota",
            Self::Internal | Self::Unavailable | Self::DeadlineExceeded | Self::Unimplemented => {
                "server"
            }
            Self::Cancelled | Self::Unknown => "unknown",
        }
    }

    /// Maps the `error.status` string of a Google error body.
    /// Unrecognized names map to `ServiceErrorCode::Unknown`.
    pub fn from_status_name(status: &str) -> Self {
        match status {
            "INVALID_ARGUMENT" => Self::InvalidArgument,
            "UNAUTHENTICATED" => Self::Unauthenticated,
            "PERMISSION_DENIED" => Self::PermissionDenied,
            "NOT_FOUND" => Self::NotFound,
            "ALREADY_EXISTS" => Self::AlreadyExists,
            "FAILED_PRECONDITION" => Self::FailedPrecondition,
            "RESOURCE_EXHAUSTED" => Self::ResourceExhausted,
            "CANCELLED" => Self::Cancelled,
            "DEADLINE_EXCEEDED" => Self::DeadlineExceeded,
            "INTERNAL" => Self::Internal,
            "UNAVAILABLE" => Self::Unavailable,
            "UNIMPLEMENTED" => Self::Unimplemented,
            _ => Self::Unknown,
        }
    }

    /// Maps an HTTP status code to the most likely `ServiceErrorCode`.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::InvalidArgument,
            401 => Self::Unauthenticated,
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            409 => Self::AlreadyExists,
            429 => Self::ResourceExhausted,
            499 => Self::Cancelled,
            500 => Self::Internal,
            501 => Self::Unimplemented,
            502 | 503 => Self::Unavailable,
            504 => Self::DeadlineExceeded,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for ServiceErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
