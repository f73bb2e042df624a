use crate::resource::{DatasetName, LocationName};
use serde::{Deserialize, Serialize};

/// Training settings for an image object-detection model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageObjectDetectionModelMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,
    /// One node hour equals 1000 milli node hours.
    #[serde(default, with = "super::int64_string")]
    pub train_budget_milli_node_hours: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Assigned by the service; never sent on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub display_name: String,
    pub dataset_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_object_detection_model_metadata: Option<ImageObjectDetectionModelMetadata>,
}

/// `POST v1/{parent}/models` with the model as body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateModelRequest {
    pub parent: LocationName,
    pub model: Model,
}

impl CreateModelRequest {
    /// Full resource name of the training dataset.
    pub fn dataset(&self) -> DatasetName {
        DatasetName::new(
            &self.parent.project,
            &self.parent.location,
            &self.model.dataset_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_is_written_as_string() {
        let model = Model {
            name: None,
            display_name: "my-model".into(),
            dataset_id: "ds-1".into(),
            image_object_detection_model_metadata: Some(ImageObjectDetectionModelMetadata {
                model_type: None,
                train_budget_milli_node_hours: 8,
            }),
        };
        assert_eq!(
            serde_json::to_value(&model).unwrap(),
            serde_json::json!({
                "displayName": "my-model",
                "datasetId": "ds-1",
                "imageObjectDetectionModelMetadata": {"trainBudgetMilliNodeHours": "8"}
            })
        );
    }

    #[test]
    fn test_dataset_lives_beside_the_model() {
        let request = CreateModelRequest {
            parent: LocationName::new("proj-1", "eu"),
            model: Model {
                name: None,
                display_name: "m".into(),
                dataset_id: "IOD7".into(),
                image_object_detection_model_metadata: None,
            },
        };
        let dataset = request.dataset();
        assert_eq!(dataset.to_string(), "projects/proj-1/locations/eu/datasets/IOD7");
        assert_eq!(dataset.parent(), request.parent);
    }

    #[test]
    fn test_budget_reads_string_or_number() {
        let from_string: ImageObjectDetectionModelMetadata =
            serde_json::from_str(r#"{"trainBudgetMilliNodeHours":"24000"}"#).unwrap();
        let from_number: ImageObjectDetectionModelMetadata =
            serde_json::from_str(r#"{"trainBudgetMilliNodeHours":24000}"#).unwrap();
        assert_eq!(from_string, from_number);
        assert!(serde_json::from_str::<ImageObjectDetectionModelMetadata>(
            r#"{"trainBudgetMilliNodeHours":"lots"}"#
        )
        .is_err());
    }
}
