//! Request and response schemas of the AutoML v1 REST surface.
//!
//! Field names follow the service's JSON mapping (camelCase, int64 as
//! strings, bytes as base64).

pub mod model;
pub mod operation;
pub mod prediction;

pub use model::{CreateModelRequest, ImageObjectDetectionModelMetadata, Model};
pub use operation::{Operation, OperationHandle, OperationStatus};
pub use prediction::{
    AnnotationPayload, BoundingPoly, ClassificationAnnotation, ExamplePayload, Image,
    ImageObjectDetectionAnnotation, NormalizedVertex, PredictRequest, PredictResponse,
};

/// `bytes` fields travel as standard base64 strings.
pub(crate) mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}

/// `int64` fields are written as JSON strings; both forms are accepted on read.
pub(crate) mod int64_string {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
            Raw::Number(n) => Ok(n),
        }
    }
}
