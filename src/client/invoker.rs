use crate::types::{CreateModelRequest, OperationHandle, PredictRequest, PredictResponse};
use crate::Result;
use async_trait::async_trait;

/// The single remote call behind each sample.
///
/// Implementations must not retry, poll, or wait on long-running work. Any
/// failure is returned as-is.
#[async_trait]
pub trait ServiceInvoker: Send + Sync {
    /// Synchronous prediction against a deployed model.
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse>;

    /// Submit model training and return as soon as the service accepts it.
    async fn create_model(&self, request: &CreateModelRequest) -> Result<OperationHandle>;
}

/// What a successful invocation produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Terminal result of a synchronous call.
    Prediction(PredictResponse),
    /// Accepted long-running work; check its status later by name.
    Submitted(OperationHandle),
}
