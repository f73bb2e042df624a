//! automl-snippets — run one Cloud AutoML Vision sample per invocation.
//!
//! Usage:
//!   automl-snippets vision_classification_predict <project_id> <model_id> <file_path>
//!   automl-snippets create_model_vision_object_detection <project_id> <dataset_id> <display_name> [--budget N]

use anyhow::Context;
use automl_snippets::cli::{self, Cli};
use automl_snippets::{AutoMlClient, ClientConfig};
use clap::Parser;
use std::io::Write;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Cli::parse();
    cli::logging::init(args.verbose);

    match run(&args).await {
        Ok(output) => {
            print!("{output}");
            let _ = std::io::stdout().flush();
        }
        Err(e) => {
            if let Some(err) = e.downcast_ref::<automl_snippets::Error>() {
                tracing::debug!(kind = ?err.kind(), "invocation failed");
            }
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

async fn run(args: &Cli) -> anyhow::Result<String> {
    let config = ClientConfig::load().context("loading configuration")?;
    let client = AutoMlClient::builder()
        .config(config.clone())
        .build()
        .context("creating AutoML client")?;
    if !client.has_credentials() {
        tracing::warn!("no access token found; the request will be sent unauthenticated");
    }
    tracing::debug!(
        endpoint = client.endpoint(),
        location = config.location.as_str(),
        command = args.command.name(),
        "client ready"
    );
    let output = cli::dispatch(&args.command, &client, &config.location)
        .await
        .with_context(|| format!("{} failed", args.command.name()))?;
    Ok(output)
}
