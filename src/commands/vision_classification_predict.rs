//! Classify a local image with a deployed image-classification model.

use super::{CommandDescriptor, ParamSpec, PROJECT_ID};
use crate::client::{Outcome, ServiceInvoker};
use crate::presenter;
use crate::request::{build_predict_request, PredictParams};
use crate::{Error, Result};
use tracing::debug;

pub const DESCRIPTOR: CommandDescriptor = CommandDescriptor {
    name: "vision_classification_predict",
    help: "Classify the content of an image",
    params: &[
        PROJECT_ID,
        ParamSpec {
            name: "model_id",
            help: "ID of the deployed model",
            required: true,
        },
        ParamSpec {
            name: "file_path",
            help: "Local image file to classify",
            required: true,
        },
    ],
};

/// Validate, read the image, build, and call. No output is produced here.
pub async fn invoke(
    invoker: &dyn ServiceInvoker,
    location: &str,
    params: &PredictParams,
) -> Result<Outcome> {
    params.validate()?;
    let image_bytes = tokio::fs::read(&params.file_path)
        .await
        .map_err(|e| Error::io(&params.file_path, e))?;
    debug!(
        path = %params.file_path.display(),
        bytes = image_bytes.len(),
        "image loaded"
    );
    let request = build_predict_request(params, location, image_bytes)?;
    let response = invoker.predict(&request).await?;
    Ok(Outcome::Prediction(response))
}

/// Full invocation; the rendered text exists only if every step succeeded.
pub async fn run(
    invoker: &dyn ServiceInvoker,
    location: &str,
    params: &PredictParams,
) -> Result<String> {
    let outcome = invoke(invoker, location, params).await?;
    Ok(presenter::render(&outcome))
}
