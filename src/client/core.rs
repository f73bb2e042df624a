use crate::client::error_classification::remote_error;
use crate::client::invoker::ServiceInvoker;
use crate::error_code::ServiceErrorCode;
use crate::transport::{HttpTransport, RawResponse};
use crate::types::{CreateModelRequest, Operation, OperationHandle, PredictRequest, PredictResponse};
use crate::{Error, Result};
use async_trait::async_trait;
use tracing::info;

const API_VERSION: &str = "v1";

/// AutoML client over the REST transport.
pub struct AutoMlClient {
    pub(crate) transport: HttpTransport,
}

impl AutoMlClient {
    pub fn builder() -> crate::client::AutoMlClientBuilder {
        crate::client::AutoMlClientBuilder::new()
    }

    pub fn endpoint(&self) -> &str {
        self.transport.base_url()
    }

    /// Whether a bearer token was supplied or found in the keyring or environment.
    pub fn has_credentials(&self) -> bool {
        self.transport.has_credentials()
    }

    fn check(&self, operation: &str, raw: RawResponse) -> Result<RawResponse> {
        if raw.is_success() {
            return Ok(raw);
        }
        let err = remote_error(&raw);
        if let Error::Remote { code, .. } = &err {
            info!(
                http_status = raw.status,
                code = code.name(),
                category = code.category(),
                request_id = raw.request_id.as_str(),
                operation,
                "automl request failed"
            );
        }
        Err(err)
    }
}

#[async_trait]
impl ServiceInvoker for AutoMlClient {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse> {
        let path = format!("{API_VERSION}/{}:predict", request.name);
        let raw = self.transport.post_json(&path, request).await?;
        let raw = self.check("predict", raw)?;
        let response: PredictResponse = serde_json::from_str(&raw.body)?;
        info!(
            model = %request.name,
            annotations = response.payload.len(),
            "prediction received"
        );
        Ok(response)
    }

    async fn create_model(&self, request: &CreateModelRequest) -> Result<OperationHandle> {
        let path = format!("{API_VERSION}/{}/models", request.parent);
        let raw = self.transport.post_json(&path, &request.model).await?;
        let raw = self.check("create_model", raw)?;
        let operation: Operation = serde_json::from_str(&raw.body)?;
        if operation.name.is_empty() {
            return Err(Error::Remote {
                status: raw.status,
                code: ServiceErrorCode::Unknown,
                message: "operation response carried no name".to_string(),
            });
        }
        info!(
            dataset = %request.dataset(),
            operation = operation.name.as_str(),
            "model creation submitted"
        );
        Ok(operation.into())
    }
}
