//! Human-readable rendering of invocation outcomes.

use crate::client::Outcome;
use crate::types::{OperationHandle, PredictResponse};

pub fn render(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Prediction(response) => render_prediction(response),
        Outcome::Submitted(handle) => render_submission(handle),
    }
}

/// One block per annotation, scores with two decimals.
pub fn render_prediction(response: &PredictResponse) -> String {
    let mut out = String::new();
    for annotation in &response.payload {
        out.push_str(&format!("Predicted class name: {}\n", annotation.display_name));
        if let Some(classification) = &annotation.classification {
            out.push_str(&format!("Predicted sentiment score: {:.2}\n", classification.score));
        } else if let Some(detection) = &annotation.image_object_detection {
            out.push_str(&format!("Predicted detection score: {:.2}\n", detection.score));
            if let Some(bbox) = &detection.bounding_box {
                let vertices: Vec<String> = bbox
                    .normalized_vertices
                    .iter()
                    .map(|v| format!("({:.2}, {:.2})", v.x, v.y))
                    .collect();
                out.push_str(&format!("Normalized vertices: {}\n", vertices.join(" ")));
            }
        }
    }
    out
}

pub fn render_submission(handle: &OperationHandle) -> String {
    format!(
        "Training operation name: {}\nTraining started...\n",
        handle.name()
    )
}
