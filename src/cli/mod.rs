//! Command-line surface of the `automl-snippets` binary.

pub mod args;
pub mod logging;

pub use args::{Cli, Commands, CreateModelArgs, PredictArgs};

use crate::client::ServiceInvoker;
use crate::commands::{create_model_vision_object_detection, vision_classification_predict};
use crate::request::{CreateModelParams, PredictParams};
use crate::Result;

/// Run the parsed command against `invoker` and return what to print.
pub async fn dispatch(
    command: &Commands,
    invoker: &dyn ServiceInvoker,
    location: &str,
) -> Result<String> {
    match command {
        Commands::VisionClassificationPredict(args) => {
            let params = PredictParams::from(args);
            vision_classification_predict::run(invoker, location, &params).await
        }
        Commands::CreateModelVisionObjectDetection(args) => {
            let params = CreateModelParams::from(args);
            create_model_vision_object_detection::run(invoker, location, &params).await
        }
    }
}

impl From<&PredictArgs> for PredictParams {
    fn from(args: &PredictArgs) -> Self {
        PredictParams::new(&args.project_id, &args.model_id, &args.file_path)
    }
}

impl From<&CreateModelArgs> for CreateModelParams {
    fn from(args: &CreateModelArgs) -> Self {
        CreateModelParams::new(&args.project_id, &args.dataset_id, &args.display_name)
            .with_train_budget(args.budget)
    }
}
