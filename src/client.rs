//! Service client for the AutoML v1 API.
//!
//! Build one [`AutoMlClient`] per process and pass it by reference to every
//! invocation. Each trait method issues exactly one HTTP call.

pub mod builder;
pub mod core;
mod error_classification;
pub mod invoker;

pub use builder::AutoMlClientBuilder;
pub use self::core::AutoMlClient;
pub use invoker::{Outcome, ServiceInvoker};
