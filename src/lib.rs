//! # automl-snippets
//!
//! Command-line samples for the Cloud AutoML Vision API.
//!
//! Each sample is one invocation: it validates a handful of parameters, builds
//! a single request, issues one call to the service, and renders the answer.
//! Nothing is retried, polled, or cached.
//!
//! ## Samples
//!
//! | Command | Call | Result |
//! |---------|------|--------|
//! | `vision_classification_predict` | `models.predict` | class name and score per annotation |
//! | `create_model_vision_object_detection` | `models.create` | name of the submitted training operation |
//!
//! ## Library use
//!
//! ```rust,no_run
//! use automl_snippets::client::AutoMlClient;
//! use automl_snippets::commands::vision_classification_predict;
//! use automl_snippets::request::PredictParams;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> automl_snippets::Result<()> {
//!     // Build once and reuse for every request.
//!     let client = AutoMlClient::builder().build()?;
//!     let params = PredictParams::new("my-project", "ICN123", "cat.jpg");
//!     let text = vision_classification_predict::run(&client, "us-central1", &params).await?;
//!     print!("{text}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`commands`] | Sample descriptors and their invocation pipelines |
//! | [`request`] | Invocation parameters and pure request builders |
//! | [`client`] | `ServiceInvoker` trait and the HTTP-backed `AutoMlClient` |
//! | [`presenter`] | Text rendering of results and operation handles |
//! | [`types`] | Service request/response schemas |
//! | [`resource`] | Fully-qualified resource names |
//! | [`config`] | Endpoint, region, and timeout configuration |

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error_code;
pub mod presenter;
pub mod request;
pub mod resource;
pub mod transport;
pub mod types;

pub use client::{AutoMlClient, AutoMlClientBuilder, Outcome, ServiceInvoker};
pub use config::ClientConfig;
pub use resource::{DatasetName, LocationName, ModelName};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

pub mod error;
pub use error::{Error, ErrorContext, ErrorKind};
