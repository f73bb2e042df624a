//! Start training an image object-detection model from a dataset.
//!
//! Training takes hours. The command returns as soon as the service accepts
//! the job; the printed operation name is what to check status with later.

use super::{CommandDescriptor, ParamSpec, PROJECT_ID};
use crate::client::{Outcome, ServiceInvoker};
use crate::presenter;
use crate::request::{build_create_model_request, CreateModelParams};
use crate::Result;

pub const DESCRIPTOR: CommandDescriptor = CommandDescriptor {
    name: "create_model_vision_object_detection",
    help: "Create a model for object detection",
    params: &[
        PROJECT_ID,
        ParamSpec {
            name: "dataset_id",
            help: "ID of the dataset to train on",
            required: true,
        },
        ParamSpec {
            name: "display_name",
            help: "Display name of the new model",
            required: true,
        },
        ParamSpec {
            name: "budget",
            help: "Training budget in milli node hours",
            required: false,
        },
    ],
};

pub async fn invoke(
    invoker: &dyn ServiceInvoker,
    location: &str,
    params: &CreateModelParams,
) -> Result<Outcome> {
    let request = build_create_model_request(params, location)?;
    let handle = invoker.create_model(&request).await?;
    Ok(Outcome::Submitted(handle))
}

pub async fn run(
    invoker: &dyn ServiceInvoker,
    location: &str,
    params: &CreateModelParams,
) -> Result<String> {
    let outcome = invoke(invoker, location, params).await?;
    Ok(presenter::render(&outcome))
}
