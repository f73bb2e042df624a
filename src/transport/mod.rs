//! HTTP plumbing underneath the service client.

mod http;

pub use http::{HttpTransport, RawResponse, TransportError};
