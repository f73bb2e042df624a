//! Wire-level tests of `AutoMlClient` against a mock HTTP server.

use automl_snippets::commands::{create_model_vision_object_detection, vision_classification_predict};
use automl_snippets::error_code::ServiceErrorCode;
use automl_snippets::request::{CreateModelParams, PredictParams};
use automl_snippets::{AutoMlClient, ClientConfig, Error, ErrorKind};
use mockito::{Matcher, Server};
use serde_json::json;
use std::io::Write;

const PREDICT_PATH: &str = "/v1/projects/proj-1/locations/us-central1/models/model-1:predict";
const CREATE_PATH: &str = "/v1/projects/proj-1/locations/us-central1/models";

fn client_for(url: &str) -> AutoMlClient {
    AutoMlClient::builder()
        .config(ClientConfig::default())
        .endpoint_override(url)
        .access_token("test-token")
        .timeout_secs(5)
        .build()
        .expect("client")
}

fn image_file(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file
}

#[tokio::test]
async fn predict_sends_image_and_threshold() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PREDICT_PATH)
        .match_header("authorization", "Bearer test-token")
        .match_header("x-request-id", Matcher::Regex("^[0-9a-f-]{36}$".into()))
        .match_body(Matcher::PartialJson(json!({
            "payload": {"image": {"imageBytes": "aW1n"}},
            "params": {"score_threshold": "0.8"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"payload":[{"annotationSpecId":"1","displayName":"cat","classification":{"score":0.91}}]}"#)
        .expect(1)
        .create_async()
        .await;

    let image = image_file(b"img");
    let client = client_for(&server.url());
    let params = PredictParams::new("proj-1", "model-1", image.path());

    let output = vision_classification_predict::run(&client, "us-central1", &params)
        .await
        .unwrap();

    assert_eq!(
        output,
        "Predicted class name: cat\nPredicted sentiment score: 0.91\n"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn predict_with_no_annotations_prints_nothing() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PREDICT_PATH)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let image = image_file(b"img");
    let client = client_for(&server.url());
    let params = PredictParams::new("proj-1", "model-1", image.path());

    let output = vision_classification_predict::run(&client, "us-central1", &params)
        .await
        .unwrap();
    assert!(output.is_empty());
}

#[tokio::test]
async fn create_model_posts_model_and_returns_operation_name() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", CREATE_PATH)
        .match_body(Matcher::Json(json!({
            "displayName": "my-model",
            "datasetId": "ds-1",
            "imageObjectDetectionModelMetadata": {"trainBudgetMilliNodeHours": "8"}
        })))
        .with_status(200)
        .with_body(
            r#"{"name":"projects/proj-1/locations/us-central1/operations/IOD123",
                "metadata":{"@type":"type.googleapis.com/google.cloud.automl.v1.OperationMetadata"}}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let params = CreateModelParams::new("proj-1", "ds-1", "my-model");

    let output = create_model_vision_object_detection::run(&client, "us-central1", &params)
        .await
        .unwrap();

    assert_eq!(
        output,
        "Training operation name: projects/proj-1/locations/us-central1/operations/IOD123\n\
         Training started...\n"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn create_model_without_operation_name_is_service_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", CREATE_PATH)
        .with_status(200)
        .with_body(r#"{"done":false}"#)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let params = CreateModelParams::new("proj-1", "ds-1", "my-model");

    let err = create_model_vision_object_detection::run(&client, "us-central1", &params)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Service);
}

#[tokio::test]
async fn google_error_body_is_decoded() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PREDICT_PATH)
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"error":{"code":403,"message":"Permission 'automl.models.predict' denied","status":"PERMISSION_DENIED"}}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let image = image_file(b"img");
    let client = client_for(&server.url());
    let params = PredictParams::new("proj-1", "model-1", image.path());

    let err = vision_classification_predict::run(&client, "us-central1", &params)
        .await
        .unwrap_err();

    match err {
        Error::Remote {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 403);
            assert_eq!(code, ServiceErrorCode::PermissionDenied);
            assert_eq!(message, "Permission 'automl.models.predict' denied");
        }
        other => panic!("expected a remote error, got {other:?}"),
    }
    // No retry.
    mock.assert_async().await;
}

#[tokio::test]
async fn plain_text_server_error_uses_http_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", CREATE_PATH)
        .with_status(500)
        .with_body("internal failure")
        .create_async()
        .await;

    let client = client_for(&server.url());
    let params = CreateModelParams::new("proj-1", "ds-1", "my-model");

    let err = create_model_vision_object_detection::run(&client, "us-central1", &params)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Remote {
            status: 500,
            code: ServiceErrorCode::Internal,
            ..
        }
    ));
}

#[tokio::test]
async fn missing_file_never_reaches_the_server() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PREDICT_PATH)
        .expect(0)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = client_for(&server.url());
    let params = PredictParams::new("proj-1", "model-1", dir.path().join("absent.jpg"));

    let err = vision_classification_predict::run(&client, "us-central1", &params)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_endpoint_is_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = client_for(&format!("http://127.0.0.1:{port}"));
    let params = CreateModelParams::new("proj-1", "ds-1", "my-model");

    let err = create_model_vision_object_detection::run(&client, "us-central1", &params)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.kind(), ErrorKind::Service);
}

#[tokio::test]
async fn crafted_ids_are_rejected_before_any_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .with_status(200)
        .with_body(r#"{"name":"operations/unexpected"}"#)
        .expect(0)
        .create_async()
        .await;
    let client = client_for(&server.url());

    for (project, dataset) in [("..", "ds-1"), ("p?x=", "ds-1"), ("proj-1", "ds#f")] {
        let params = CreateModelParams::new(project, dataset, "my-model");
        let err = create_model_vision_object_detection::run(&client, "us-central1", &params)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation, "{project}/{dataset}");
    }

    let image = image_file(b"img");
    let params = PredictParams::new("proj-1", "m#f", image.path());
    let err = vision_classification_predict::run(&client, "us-central1", &params)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    mock.assert_async().await;
}

#[test]
fn explicit_token_counts_as_credentials() {
    let client = client_for("http://127.0.0.1:9");
    assert!(client.has_credentials());
    assert_eq!(client.endpoint(), "http://127.0.0.1:9");
}
