use crate::commands::{
    create_model_vision_object_detection as create_model, vision_classification_predict as predict,
    CommandDescriptor,
};
use crate::request::DEFAULT_TRAIN_BUDGET_MILLI_NODE_HOURS;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about = "Cloud AutoML Vision samples", long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Environment:
    GOOGLE_OAUTH_ACCESS_TOKEN   Bearer token (falls back to the OS keyring entry automl-snippets/access-token)
    AUTOML_CONFIG               YAML file with endpoint, location, timeout_secs, proxy_url
    AUTOML_ENDPOINT             Service endpoint [default: https://automl.googleapis.com]
    AUTOML_LOCATION             Region [default: us-central1]
    AUTOML_HTTP_TIMEOUT_SECS    Request timeout [default: 30]
    AUTOML_PROXY_URL            HTTP(S) proxy
    RUST_LOG                    Log filter, logs go to stderr

Examples:
    automl-snippets vision_classification_predict my-project ICN123 cat.jpg
    automl-snippets create_model_vision_object_detection my-project IOD456 my-model"#)]
pub struct Cli {
    /// Log request details to stderr
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    /// Sample to run.
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(name = predict::DESCRIPTOR.name, about = predict::DESCRIPTOR.help)]
    VisionClassificationPredict(PredictArgs),

    #[command(name = create_model::DESCRIPTOR.name, about = create_model::DESCRIPTOR.help)]
    CreateModelVisionObjectDetection(CreateModelArgs),
}

impl Commands {
    pub fn descriptor(&self) -> &'static CommandDescriptor {
        match self {
            Self::VisionClassificationPredict(_) => &predict::DESCRIPTOR,
            Self::CreateModelVisionObjectDetection(_) => &create_model::DESCRIPTOR,
        }
    }

    pub fn name(&self) -> &'static str {
        self.descriptor().name
    }
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    #[arg(help = predict::DESCRIPTOR.params[0].help)]
    pub project_id: String,

    #[arg(help = predict::DESCRIPTOR.params[1].help)]
    pub model_id: String,

    #[arg(help = predict::DESCRIPTOR.params[2].help)]
    pub file_path: PathBuf,
}

#[derive(Args, Debug)]
pub struct CreateModelArgs {
    #[arg(help = create_model::DESCRIPTOR.params[0].help)]
    pub project_id: String,

    #[arg(help = create_model::DESCRIPTOR.params[1].help)]
    pub dataset_id: String,

    #[arg(help = create_model::DESCRIPTOR.params[2].help)]
    pub display_name: String,

    #[arg(
        long,
        help = create_model::DESCRIPTOR.params[3].help,
        default_value_t = DEFAULT_TRAIN_BUDGET_MILLI_NODE_HOURS
    )]
    pub budget: i64,
}
