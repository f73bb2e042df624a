//! Invocation parameters and the pure request builders.
//!
//! Builders never touch the network or the filesystem. The predict sample
//! reads its image between [`PredictParams::validate`] and
//! [`build_predict_request`], so a missing file surfaces as an I/O error
//! after validation and before any request exists.

use crate::resource::{is_valid_id, is_valid_location, LocationName, ModelName};
use crate::types::{
    CreateModelRequest, ExamplePayload, Image, ImageObjectDetectionModelMetadata, Model,
    PredictRequest,
};
use crate::{Error, ErrorContext, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Only annotations scoring above this are returned.
pub const SCORE_THRESHOLD: &str = "0.8";

/// Training budget used when none is given, in milli node hours.
pub const DEFAULT_TRAIN_BUDGET_MILLI_NODE_HOURS: i64 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictParams {
    pub project_id: String,
    pub model_id: String,
    pub file_path: PathBuf,
}

impl PredictParams {
    pub fn new(
        project_id: impl Into<String>,
        model_id: impl Into<String>,
        file_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            model_id: model_id.into(),
            file_path: file_path.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_id("project_id", &self.project_id)?;
        require_id("model_id", &self.model_id)?;
        if self.file_path.as_os_str().is_empty() {
            return Err(missing("file_path"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateModelParams {
    pub project_id: String,
    pub dataset_id: String,
    pub display_name: String,
    pub train_budget_milli_node_hours: i64,
}

impl CreateModelParams {
    pub fn new(
        project_id: impl Into<String>,
        dataset_id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            dataset_id: dataset_id.into(),
            display_name: display_name.into(),
            train_budget_milli_node_hours: DEFAULT_TRAIN_BUDGET_MILLI_NODE_HOURS,
        }
    }

    pub fn with_train_budget(mut self, milli_node_hours: i64) -> Self {
        self.train_budget_milli_node_hours = milli_node_hours;
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_id("project_id", &self.project_id)?;
        require_id("dataset_id", &self.dataset_id)?;
        if self.display_name.trim().is_empty() {
            return Err(missing("display_name"));
        }
        if self.train_budget_milli_node_hours <= 0 {
            return Err(Error::validation_with_context(
                format!(
                    "train budget must be positive, got {}",
                    self.train_budget_milli_node_hours
                ),
                ErrorContext::new()
                    .with_field_path("train_budget_milli_node_hours")
                    .with_source("request_builder"),
            ));
        }
        Ok(())
    }
}

pub fn build_predict_request(
    params: &PredictParams,
    location: &str,
    image_bytes: Vec<u8>,
) -> Result<PredictRequest> {
    params.validate()?;
    require_location(location)?;
    Ok(PredictRequest {
        name: ModelName::new(&params.project_id, location, &params.model_id),
        payload: ExamplePayload {
            image: Image { image_bytes },
        },
        params: BTreeMap::from([("score_threshold".to_string(), SCORE_THRESHOLD.to_string())]),
    })
}

pub fn build_create_model_request(
    params: &CreateModelParams,
    location: &str,
) -> Result<CreateModelRequest> {
    params.validate()?;
    require_location(location)?;
    Ok(CreateModelRequest {
        parent: LocationName::new(&params.project_id, location),
        model: Model {
            name: None,
            display_name: params.display_name.clone(),
            dataset_id: params.dataset_id.clone(),
            image_object_detection_model_metadata: Some(ImageObjectDetectionModelMetadata {
                model_type: None,
                train_budget_milli_node_hours: params.train_budget_milli_node_hours,
            }),
        },
    })
}

// Values that end up inside a resource name, and so inside the request URL.
fn require_id(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(missing(field));
    }
    if !is_valid_id(value) {
        return Err(invalid(
            field,
            value,
            "may only contain letters, digits, '-' and '_'",
        ));
    }
    Ok(())
}

fn require_location(location: &str) -> Result<()> {
    if !is_valid_location(location) {
        return Err(invalid(
            "location",
            location,
            "may only contain lowercase letters, digits and '-'",
        ));
    }
    Ok(())
}

fn invalid(field: &str, value: &str, details: &str) -> Error {
    Error::validation_with_context(
        format!("'{value}' is not a valid identifier"),
        ErrorContext::new()
            .with_field_path(field)
            .with_details(details)
            .with_source("request_builder"),
    )
}

fn missing(field: &str) -> Error {
    Error::validation_with_context(
        "required value is empty",
        ErrorContext::new()
            .with_field_path(field)
            .with_source("request_builder"),
    )
}
